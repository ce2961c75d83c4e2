//! The editable deck: slides, connections and deck settings.
//!
//! `DeckDocument` is the single owner of editor state. Every mutation goes
//! through a method here so callers (undo stack, persistence, CLI) observe
//! one consistent document.

use serde::{Deserialize, Serialize};
use sg_core::{
    AspectRatio, DeckSettings, Edge, Layer, LayerId, LayerPatch, LayoutConfig, Position, SlideId,
    SlideNode, Theme, auto_layout, linearize,
};

/// Horizontal gap used when appending a slide next to the right-most one.
const APPEND_GAP: f32 = 50.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeckDocument {
    pub nodes: Vec<SlideNode>,
    pub edges: Vec<Edge>,
    #[serde(default)]
    pub settings: DeckSettings,
}

impl Default for DeckDocument {
    fn default() -> Self {
        Self::seed()
    }
}

impl DeckDocument {
    /// An empty deck with default settings.
    pub fn empty() -> Self {
        Self {
            nodes: Vec::new(),
            edges: Vec::new(),
            settings: DeckSettings::default(),
        }
    }

    /// The document a fresh editor starts with: one slide at (100, 100).
    pub fn seed() -> Self {
        let mut slide = SlideNode::new(SlideId::intern("1"), "Slide 1", Position::new(100.0, 100.0));
        // Fixed layer ids: every seed is the same document.
        for (layer, id) in slide.data.layers.iter_mut().zip(["bg-1", "title-1", "content-1"]) {
            layer.id = LayerId::intern(id);
        }
        let mut doc = Self::empty();
        doc.nodes.push(slide);
        doc
    }

    pub fn slide(&self, id: SlideId) -> Option<&SlideNode> {
        self.nodes.iter().find(|n| n.id == id)
    }

    pub fn slide_mut(&mut self, id: SlideId) -> Option<&mut SlideNode> {
        self.nodes.iter_mut().find(|n| n.id == id)
    }

    // ─── Slides ──────────────────────────────────────────────────────────

    /// Append a slide with the default layer set, to the right of the
    /// right-most slide (or at the seed position on an empty canvas).
    pub fn add_slide(&mut self, label: &str) -> SlideId {
        let layout = LayoutConfig::default();
        let position = self
            .nodes
            .iter()
            .max_by(|a, b| {
                (a.position.x + layout.width_of(a)).total_cmp(&(b.position.x + layout.width_of(b)))
            })
            .map(|right| {
                Position::new(
                    right.position.x + layout.width_of(right) + APPEND_GAP,
                    right.position.y,
                )
            })
            .unwrap_or(Position::new(100.0, 100.0));

        let id = SlideId::with_prefix("slide");
        self.nodes.push(SlideNode::new(id, label, position));
        log::debug!("added slide {id} at ({}, {})", position.x, position.y);
        id
    }

    /// Remove a slide together with every connection touching it.
    pub fn delete_slide(&mut self, id: SlideId) -> bool {
        let before = self.nodes.len();
        self.nodes.retain(|n| n.id != id);
        if self.nodes.len() == before {
            return false;
        }
        self.edges.retain(|e| e.source != id && e.target != id);
        true
    }

    pub fn move_slide(&mut self, id: SlideId, x: f32, y: f32) -> bool {
        match self.slide_mut(id) {
            Some(node) => {
                node.position = Position::new(x, y);
                true
            }
            None => false,
        }
    }

    pub fn rename_slide(&mut self, id: SlideId, label: &str) -> bool {
        match self.slide_mut(id) {
            Some(node) => {
                node.data.label = label.to_string();
                true
            }
            None => false,
        }
    }

    // ─── Connections ─────────────────────────────────────────────────────

    /// Add a "followed-by" connection. Self-loops, unknown slides and exact
    /// duplicates are rejected.
    pub fn connect(&mut self, source: SlideId, target: SlideId) -> bool {
        if source == target {
            log::warn!("refusing to connect slide {source} to itself");
            return false;
        }
        if self.slide(source).is_none() || self.slide(target).is_none() {
            log::warn!("refusing to connect unknown slides {source} → {target}");
            return false;
        }
        if self
            .edges
            .iter()
            .any(|e| e.source == source && e.target == target)
        {
            return false;
        }
        self.edges.push(Edge::new(source, target));
        true
    }

    pub fn disconnect(&mut self, source: SlideId, target: SlideId) -> bool {
        let before = self.edges.len();
        self.edges
            .retain(|e| !(e.source == source && e.target == target));
        self.edges.len() != before
    }

    // ─── Layers ──────────────────────────────────────────────────────────

    /// Append `layer` on top of the slide's existing layers.
    ///
    /// The layer's z-index becomes one above the current maximum; the first
    /// layer of an empty slide keeps its own z-index.
    pub fn add_layer(&mut self, slide: SlideId, mut layer: Layer) -> Option<LayerId> {
        let node = self.slide_mut(slide)?;
        if let Some(max) = node.max_z() {
            layer.style.z_index = Some(max + 1);
        }
        let id = layer.id;
        node.data.layers.push(layer);
        Some(id)
    }

    /// Deep-merge `patch` into a layer.
    pub fn update_layer(&mut self, slide: SlideId, layer: LayerId, patch: &LayerPatch) -> bool {
        match self.slide_mut(slide).and_then(|n| n.layer_mut(layer)) {
            Some(target) => {
                target.apply_patch(patch);
                true
            }
            None => false,
        }
    }

    pub fn remove_layer(&mut self, slide: SlideId, layer: LayerId) -> bool {
        let Some(node) = self.slide_mut(slide) else {
            return false;
        };
        let before = node.data.layers.len();
        node.data.layers.retain(|l| l.id != layer);
        node.data.layers.len() != before
    }

    // ─── Ordering & layout ───────────────────────────────────────────────

    /// Slides in presentation order.
    pub fn ordered_slides(&self) -> Vec<&SlideNode> {
        linearize(&self.nodes, &self.edges)
    }

    /// Reposition every slide into a strip following presentation order.
    /// The stored node list takes the presentation order too.
    pub fn auto_layout(&mut self, config: &LayoutConfig) {
        self.nodes = auto_layout(linearize(&self.nodes, &self.edges), config);
    }

    // ─── Settings ────────────────────────────────────────────────────────

    pub fn set_theme(&mut self, theme: Theme) {
        self.settings.theme = theme;
    }

    pub fn set_aspect_ratio(&mut self, aspect: AspectRatio) {
        self.settings.aspect_ratio = aspect;
    }

    /// Presenter autoplay interval in seconds; values below 1 become 1.
    pub fn set_autoplay_interval(&mut self, seconds: u32) {
        self.settings.autoplay_interval = seconds.max(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use sg_core::{LayerStyle, LayerType, TextFormat};

    fn two_slides() -> (DeckDocument, SlideId, SlideId) {
        let mut doc = DeckDocument::empty();
        let a = doc.add_slide("A");
        let b = doc.add_slide("B");
        (doc, a, b)
    }

    #[test]
    fn seed_has_one_slide() {
        let doc = DeckDocument::seed();
        assert_eq!(doc.nodes.len(), 1);
        assert_eq!(doc.nodes[0].label(), "Slide 1");
        assert_eq!(doc.nodes[0].position, Position::new(100.0, 100.0));
        assert!(doc.edges.is_empty());
        assert_eq!(doc, DeckDocument::seed());
    }

    #[test]
    fn add_slide_goes_right_of_rightmost() {
        let (doc, a, b) = two_slides();
        let pa = doc.slide(a).unwrap().position;
        let pb = doc.slide(b).unwrap().position;
        assert_eq!(pa, Position::new(100.0, 100.0));
        assert_eq!(pb, Position::new(750.0, 100.0));
        let types: Vec<LayerType> = doc.slide(b).unwrap().data.layers.iter().map(|l| l.layer_type()).collect();
        assert_eq!(
            types,
            vec![LayerType::Background, LayerType::Title, LayerType::ContentArea]
        );
    }

    #[test]
    fn connect_rules() {
        let (mut doc, a, b) = two_slides();
        assert!(doc.connect(a, b));
        assert!(!doc.connect(a, b), "duplicate");
        assert!(!doc.connect(a, a), "self-loop");
        assert!(!doc.connect(a, SlideId::intern("missing")), "unknown");
        assert_eq!(doc.edges.len(), 1);
        assert!(doc.disconnect(a, b));
        assert!(!doc.disconnect(a, b));
    }

    #[test]
    fn delete_slide_removes_touching_edges() {
        let (mut doc, a, b) = two_slides();
        let c = doc.add_slide("C");
        doc.connect(a, b);
        doc.connect(b, c);
        assert!(doc.delete_slide(b));
        assert!(doc.edges.is_empty());
        assert!(!doc.delete_slide(b));
        assert_eq!(doc.nodes.len(), 2);
    }

    #[test]
    fn add_layer_goes_on_top() {
        let (mut doc, a, _) = two_slides();
        let text = Layer::text("hi", LayerStyle::with_box("10px", "10px", "50%", "20px"));
        let id = doc.add_layer(a, text).unwrap();
        assert_eq!(doc.slide(a).unwrap().layer(id).unwrap().style.z_index, Some(3));

        let mut bare = DeckDocument::empty();
        let s = bare.add_slide("S");
        bare.slide_mut(s).unwrap().data.layers.clear();
        let bg = bare.add_layer(s, Layer::background("#000")).unwrap();
        assert_eq!(bare.slide(s).unwrap().layer(bg).unwrap().style.z_index, Some(0));

        assert!(doc.add_layer(SlideId::intern("nope"), Layer::background("#fff")).is_none());
    }

    #[test]
    fn update_layer_merges() {
        let (mut doc, a, _) = two_slides();
        let title = doc.slide(a).unwrap().data.layers[1].id;
        let patch = LayerPatch {
            content: Some("Welcome".into()),
            text_format: Some(TextFormat {
                color: Some("#123456".into()),
                ..Default::default()
            }),
            ..Default::default()
        };
        assert!(doc.update_layer(a, title, &patch));
        let (content, fmt) = doc.slide(a).unwrap().layer(title).unwrap().kind.text().unwrap();
        assert_eq!(content, "Welcome");
        assert_eq!(fmt.color.as_deref(), Some("#123456"));
        assert_eq!(fmt.font_size.as_deref(), Some("32px"));

        assert!(doc.remove_layer(a, title));
        assert!(!doc.update_layer(a, title, &patch));
    }

    #[test]
    fn auto_layout_stores_presentation_order() {
        let (mut doc, a, b) = two_slides();
        let c = doc.add_slide("C");
        doc.connect(c, a);
        doc.connect(a, b);
        doc.auto_layout(&LayoutConfig::default());
        let ids: Vec<SlideId> = doc.nodes.iter().map(|n| n.id).collect();
        assert_eq!(ids, vec![c, a, b]);
        assert_eq!(doc.nodes[0].position, Position::new(150.0, 150.0));
        assert_eq!(doc.nodes[2].position, Position::new(1450.0, 150.0));
    }

    #[test]
    fn settings() {
        let mut doc = DeckDocument::empty();
        doc.set_theme(Theme::Dark);
        doc.set_aspect_ratio(AspectRatio::Standard);
        doc.set_autoplay_interval(0);
        assert_eq!(doc.settings.theme, Theme::Dark);
        assert_eq!(doc.settings.aspect_ratio, AspectRatio::Standard);
        assert_eq!(doc.settings.autoplay_interval, 1);
    }
}
