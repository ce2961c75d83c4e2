//! Lint diagnostics for slide decks.
//!
//! Reports structural issues without modifying the deck. Most of them are
//! silently tolerated by [`crate::order::linearize`]; lint makes them visible.

use crate::id::SlideId;
use crate::model::{Edge, SlideNode};
use petgraph::algo::tarjan_scc;
use petgraph::graph::{DiGraph, NodeIndex};
use smallvec::SmallVec;
use std::collections::{HashMap, HashSet};

// ─── Diagnostic types ────────────────────────────────────────────────────

/// Severity of a lint finding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LintSeverity {
    /// Likely a mistake; export order may not be what the author expects.
    Warning,
    /// Informational.
    Info,
}

/// A single lint diagnostic.
#[derive(Debug, Clone)]
pub struct LintDiagnostic {
    /// The slide this diagnostic refers to, if any.
    pub slide: Option<SlideId>,
    /// Human-readable message.
    pub message: String,
    pub severity: LintSeverity,
    /// Short rule identifier (e.g. "branching-slide").
    pub rule: &'static str,
}

// ─── Public API ───────────────────────────────────────────────────────────

/// Run all lint rules and return diagnostics.
#[must_use]
pub fn lint_deck(nodes: &[SlideNode], edges: &[Edge]) -> Vec<LintDiagnostic> {
    let mut diags = Vec::new();
    lint_duplicate_slides(nodes, &mut diags);
    lint_duplicate_layers(nodes, &mut diags);
    lint_dangling_edges(nodes, edges, &mut diags);
    lint_branching(edges, &mut diags);
    lint_cycles(nodes, edges, &mut diags);
    lint_start_candidates(nodes, edges, &mut diags);
    diags
}

// ─── Rules ────────────────────────────────────────────────────────────────

fn lint_duplicate_slides(nodes: &[SlideNode], diags: &mut Vec<LintDiagnostic>) {
    let mut seen = HashSet::new();
    for node in nodes {
        if !seen.insert(node.id) {
            diags.push(LintDiagnostic {
                slide: Some(node.id),
                message: format!("Slide id `{}` is used more than once.", node.id),
                severity: LintSeverity::Warning,
                rule: "duplicate-slide-id",
            });
        }
    }
}

fn lint_duplicate_layers(nodes: &[SlideNode], diags: &mut Vec<LintDiagnostic>) {
    for node in nodes {
        let mut seen = HashSet::new();
        for layer in &node.data.layers {
            if !seen.insert(layer.id) {
                diags.push(LintDiagnostic {
                    slide: Some(node.id),
                    message: format!(
                        "Layer id `{}` appears more than once on slide `{}`.",
                        layer.id, node.id
                    ),
                    severity: LintSeverity::Warning,
                    rule: "duplicate-layer-id",
                });
            }
        }
    }
}

fn lint_dangling_edges(nodes: &[SlideNode], edges: &[Edge], diags: &mut Vec<LintDiagnostic>) {
    let known: HashSet<SlideId> = nodes.iter().map(|n| n.id).collect();
    for edge in edges {
        for end in [edge.source, edge.target] {
            if !known.contains(&end) {
                diags.push(LintDiagnostic {
                    slide: None,
                    message: format!(
                        "Connection `{}` → `{}` refers to missing slide `{end}`.",
                        edge.source, edge.target
                    ),
                    severity: LintSeverity::Warning,
                    rule: "dangling-edge",
                });
            }
        }
    }
}

/// Only the last outgoing connection of a slide is followed.
fn lint_branching(edges: &[Edge], diags: &mut Vec<LintDiagnostic>) {
    let mut outgoing: HashMap<SlideId, SmallVec<[SlideId; 2]>> = HashMap::new();
    let mut sources = Vec::new();
    for edge in edges {
        let targets = outgoing.entry(edge.source).or_default();
        if targets.is_empty() {
            sources.push(edge.source);
        }
        targets.push(edge.target);
    }

    for source in sources {
        let targets = &outgoing[&source];
        if targets.len() > 1 {
            let followed = targets[targets.len() - 1];
            diags.push(LintDiagnostic {
                slide: Some(source),
                message: format!(
                    "Slide `{source}` has {} outgoing connections; only `{followed}` is followed.",
                    targets.len()
                ),
                severity: LintSeverity::Warning,
                rule: "branching-slide",
            });
        }
    }
}

fn lint_cycles(nodes: &[SlideNode], edges: &[Edge], diags: &mut Vec<LintDiagnostic>) {
    let mut graph: DiGraph<SlideId, ()> = DiGraph::new();
    let mut index: HashMap<SlideId, NodeIndex> = HashMap::new();
    for node in nodes {
        index.entry(node.id).or_insert_with(|| graph.add_node(node.id));
    }
    for edge in edges {
        if let (Some(&a), Some(&b)) = (index.get(&edge.source), index.get(&edge.target)) {
            graph.add_edge(a, b, ());
        }
    }

    for component in tarjan_scc(&graph) {
        let is_cycle = component.len() > 1
            || component
                .first()
                .is_some_and(|&n| graph.find_edge(n, n).is_some());
        if !is_cycle {
            continue;
        }
        let mut names: Vec<&str> = component.iter().map(|&n| graph[n].as_str()).collect();
        names.sort_unstable();
        diags.push(LintDiagnostic {
            slide: component.first().map(|&n| graph[n]),
            message: format!("Connections form a cycle through {}.", names.join(", ")),
            severity: LintSeverity::Warning,
            rule: "cycle",
        });
    }
}

fn lint_start_candidates(nodes: &[SlideNode], edges: &[Edge], diags: &mut Vec<LintDiagnostic>) {
    if edges.is_empty() {
        return;
    }
    let targets: HashSet<SlideId> = edges.iter().map(|e| e.target).collect();
    let sources: HashSet<SlideId> = edges.iter().map(|e| e.source).collect();
    let mut seen = HashSet::new();
    let starts: Vec<&str> = nodes
        .iter()
        .filter(|n| sources.contains(&n.id) && !targets.contains(&n.id) && seen.insert(n.id))
        .map(|n| n.id.as_str())
        .collect();

    match starts.as_slice() {
        [] => diags.push(LintDiagnostic {
            slide: None,
            message: "No slide starts the sequence; order falls back to vertical position."
                .to_string(),
            severity: LintSeverity::Info,
            rule: "no-start-slide",
        }),
        [_] => {}
        [first, ..] => diags.push(LintDiagnostic {
            slide: Some(SlideId::intern(first)),
            message: format!(
                "{} slides could start the sequence ({}); `{first}` is used.",
                starts.len(),
                starts.join(", ")
            ),
            severity: LintSeverity::Info,
            rule: "multiple-start-slides",
        }),
    }
}
