//! Slide ordering: turn the followed-by graph into one linear sequence.
//!
//! The walk starts at the first slide that has an outgoing edge but no
//! incoming one, follows one successor per slide, and stops at a dead end
//! or at the first revisit. Slides the walk never reaches are appended in
//! ascending vertical position. Without a start slide (no edges, or every
//! slide has a predecessor) the whole deck is ordered by vertical position.

use crate::id::SlideId;
use crate::model::{Edge, SlideNode};
use std::collections::{HashMap, HashSet};

/// Return `nodes` in presentation order. Always a permutation of the input.
pub fn linearize<'a>(nodes: &'a [SlideNode], edges: &[Edge]) -> Vec<&'a SlideNode> {
    linear_order(nodes, edges)
        .into_iter()
        .map(|i| &nodes[i])
        .collect()
}

/// Like [`linearize`], but returns indices into `nodes`.
pub fn linear_order(nodes: &[SlideNode], edges: &[Edge]) -> Vec<usize> {
    if nodes.is_empty() {
        return Vec::new();
    }

    let Some(start) = find_start(nodes, edges) else {
        log::warn!(
            "no start slide found, ordering {} slides by vertical position",
            nodes.len()
        );
        let mut all: Vec<usize> = (0..nodes.len()).collect();
        sort_by_y(nodes, &mut all);
        return all;
    };

    // First occurrence wins if ids are duplicated; the duplicate lands in the remainder.
    let mut index: HashMap<SlideId, usize> = HashMap::with_capacity(nodes.len());
    for (i, node) in nodes.iter().enumerate() {
        index.entry(node.id).or_insert(i);
    }

    // A later edge from the same source replaces an earlier one.
    let successors: HashMap<SlideId, SlideId> =
        edges.iter().map(|e| (e.source, e.target)).collect();

    let limit = nodes.len() * 2;
    let mut order = Vec::with_capacity(nodes.len());
    let mut visited = vec![false; nodes.len()];
    let mut current = Some(start);

    while let Some(i) = current {
        if visited[i] {
            break;
        }
        order.push(i);
        visited[i] = true;
        // Backstop only: `visited` ends the walk long before this can trip.
        if order.len() > limit {
            log::error!("slide walk exceeded {limit} steps, keeping original order");
            return (0..nodes.len()).collect();
        }
        current = successors
            .get(&nodes[i].id)
            .and_then(|target| index.get(target))
            .copied();
    }

    let mut rest: Vec<usize> = (0..nodes.len()).filter(|&i| !visited[i]).collect();
    sort_by_y(nodes, &mut rest);
    order.extend(rest);
    order
}

/// First slide, in input order, with an outgoing edge and no incoming edge.
fn find_start(nodes: &[SlideNode], edges: &[Edge]) -> Option<usize> {
    let targets: HashSet<SlideId> = edges.iter().map(|e| e.target).collect();
    let sources: HashSet<SlideId> = edges.iter().map(|e| e.source).collect();
    nodes
        .iter()
        .position(|n| sources.contains(&n.id) && !targets.contains(&n.id))
}

/// Stable sort by ascending y; ties keep their relative order.
fn sort_by_y(nodes: &[SlideNode], indices: &mut [usize]) {
    indices.sort_by(|&a, &b| nodes[a].position.y.total_cmp(&nodes[b].position.y));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Position;
    use pretty_assertions::assert_eq;

    fn slide(id: &str, y: f32) -> SlideNode {
        SlideNode::empty(SlideId::intern(id), id, Position::new(0.0, y))
    }

    fn edge(from: &str, to: &str) -> Edge {
        Edge::new(SlideId::intern(from), SlideId::intern(to))
    }

    fn ids(order: &[&SlideNode]) -> Vec<String> {
        order.iter().map(|n| n.id.to_string()).collect()
    }

    #[test]
    fn empty_deck() {
        assert!(linearize(&[], &[]).is_empty());
    }

    #[test]
    fn no_edges_sorts_by_y() {
        let nodes = [slide("a", 300.0), slide("b", 100.0), slide("c", 200.0)];
        assert_eq!(ids(&linearize(&nodes, &[])), vec!["b", "c", "a"]);
    }

    #[test]
    fn y_ties_keep_input_order() {
        let nodes = [slide("p", 50.0), slide("q", 10.0), slide("r", 50.0)];
        assert_eq!(ids(&linearize(&nodes, &[])), vec!["q", "p", "r"]);
    }

    #[test]
    fn simple_path_is_followed() {
        let nodes = [slide("c", 0.0), slide("a", 900.0), slide("b", 50.0)];
        let edges = [edge("b", "c"), edge("a", "b")];
        assert_eq!(ids(&linearize(&nodes, &edges)), vec!["a", "b", "c"]);
    }

    #[test]
    fn disconnected_slide_is_appended() {
        let nodes = [
            slide("A", 0.0),
            slide("B", 200.0),
            slide("C", 400.0),
            slide("D", 500.0),
        ];
        let edges = [edge("A", "B"), edge("B", "C")];
        assert_eq!(ids(&linearize(&nodes, &edges)), vec!["A", "B", "C", "D"]);
    }

    #[test]
    fn remainder_sorted_by_y() {
        let nodes = [
            slide("x2", 700.0),
            slide("s", 0.0),
            slide("t", 0.0),
            slide("x1", 100.0),
        ];
        let edges = [edge("s", "t")];
        assert_eq!(ids(&linearize(&nodes, &edges)), vec!["s", "t", "x1", "x2"]);
    }

    #[test]
    fn full_cycle_falls_back_to_y() {
        let nodes = [slide("m", 30.0), slide("n", 10.0), slide("o", 20.0)];
        let edges = [edge("m", "n"), edge("n", "o"), edge("o", "m")];
        assert_eq!(ids(&linearize(&nodes, &edges)), vec!["n", "o", "m"]);
    }

    #[test]
    fn cycle_after_start_terminates() {
        let nodes = [slide("s", 0.0), slide("u", 10.0), slide("v", 20.0)];
        let edges = [edge("s", "u"), edge("u", "v"), edge("v", "u")];
        assert_eq!(ids(&linearize(&nodes, &edges)), vec!["s", "u", "v"]);
    }

    #[test]
    fn long_chain_with_back_edge_is_walked_in_full() {
        let nodes: Vec<SlideNode> = (0..40).map(|i| slide(&format!("c{i}"), i as f32)).collect();
        let mut edges: Vec<Edge> = (1..40)
            .rev()
            .map(|i| edge(&format!("c{i}"), &format!("c{}", i - 1)))
            .collect();
        edges.push(edge("c0", "c20"));
        let expected: Vec<usize> = (0..40).rev().collect();
        assert_eq!(linear_order(&nodes, &edges), expected);
    }

    #[test]
    fn last_outgoing_edge_wins() {
        let nodes = [slide("h", 0.0), slide("i", 10.0), slide("j", 20.0)];
        let edges = [edge("h", "i"), edge("h", "j")];
        assert_eq!(ids(&linearize(&nodes, &edges)), vec!["h", "j", "i"]);
    }

    #[test]
    fn dangling_edge_stops_the_walk() {
        let nodes = [slide("k", 0.0), slide("l", 10.0)];
        let edges = [edge("k", "ghost")];
        assert_eq!(ids(&linearize(&nodes, &edges)), vec!["k", "l"]);
    }

    #[test]
    fn result_is_a_permutation() {
        let nodes: Vec<SlideNode> = (0..12)
            .map(|i| slide(&format!("n{i}"), ((i * 37) % 11) as f32))
            .collect();
        let edges = [
            edge("n3", "n5"),
            edge("n5", "n1"),
            edge("n1", "n5"),
            edge("n7", "n3"),
            edge("n9", "n9"),
        ];
        let mut out = linear_order(&nodes, &edges);
        assert_eq!(out.len(), nodes.len());
        out.sort_unstable();
        assert_eq!(out, (0..nodes.len()).collect::<Vec<_>>());
    }

    #[test]
    fn idempotent() {
        let nodes = [slide("a", 5.0), slide("b", 1.0), slide("c", 3.0)];
        let edges = [edge("c", "a")];
        assert_eq!(linear_order(&nodes, &edges), linear_order(&nodes, &edges));
    }
}
