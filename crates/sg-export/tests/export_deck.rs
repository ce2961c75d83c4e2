//! End-to-end export: slide graph in, `.pptx` package out.

use async_trait::async_trait;
use pretty_assertions::assert_eq;
use sg_core::{
    DeckSettings, Edge, Layer, LayerId, LayerKind, LayerStyle, MediaType, Position, SlideId,
    SlideNode, TableData,
};
use sg_export::{
    Background, Coord, ElementContent, ExportConfig, ExportError, export_deck, build_slides,
};
use std::collections::HashMap;
use std::io::Read;

const PNG: &[u8] = b"\x89PNG\r\n\x1a\nfake-image-body";

/// Serves assets from memory; unknown URLs fail.
#[derive(Default)]
struct MemoryFetcher {
    assets: HashMap<String, Vec<u8>>,
}

impl MemoryFetcher {
    fn with(url: &str, data: &[u8]) -> Self {
        let mut fetcher = Self::default();
        fetcher.assets.insert(url.to_string(), data.to_vec());
        fetcher
    }
}

#[async_trait]
impl sg_export::AssetFetcher for MemoryFetcher {
    async fn fetch(&self, url: &str) -> Result<Vec<u8>, ExportError> {
        self.assets.get(url).cloned().ok_or_else(|| ExportError::Fetch {
            url: url.to_string(),
            reason: "404".to_string(),
        })
    }
}

fn slide(id: &str, x: f32, y: f32, layers: Vec<Layer>) -> SlideNode {
    let mut node = SlideNode::empty(SlideId::intern(id), id.to_uppercase(), Position::new(x, y));
    node.data.layers = layers;
    node
}

fn edge(a: &str, b: &str) -> Edge {
    Edge::new(SlideId::intern(a), SlideId::intern(b))
}

fn boxed(left: &str, top: &str, width: &str, height: &str, z: i32) -> LayerStyle {
    LayerStyle {
        z_index: Some(z),
        ..LayerStyle::with_box(left, top, width, height)
    }
}

fn zip_entry(bytes: &[u8], name: &str) -> String {
    let mut archive = zip::ZipArchive::new(std::io::Cursor::new(bytes)).unwrap();
    let mut file = archive.by_name(name).unwrap();
    let mut out = String::new();
    file.read_to_string(&mut out).unwrap();
    out
}

#[tokio::test]
async fn title_on_white_background() {
    let node = slide(
        "x-title",
        0.0,
        0.0,
        vec![
            Layer::background("#ffffff"),
            Layer::title("Hello", boxed("20px", "20px", "100px", "40px", 1)),
        ],
    );
    let slides = build_slides(
        &[node],
        &[],
        &DeckSettings::default(),
        &ExportConfig::default(),
        &MemoryFetcher::default(),
    )
    .await
    .unwrap();

    assert_eq!(slides.len(), 1);
    assert_eq!(slides[0].background, Some(Background::Color("FFFFFF".into())));
    assert_eq!(slides[0].elements.len(), 1);

    let title = &slides[0].elements[0];
    let Coord::Inches(x) = title.frame.x else {
        panic!("expected inches, got {:?}", title.frame.x);
    };
    assert!((x - 1.0 / 3.0).abs() < 1e-6, "x = {x}");
    let Coord::Inches(y) = title.frame.y else {
        panic!("expected inches, got {:?}", title.frame.y);
    };
    assert!((y - 1.0 / 3.0).abs() < 1e-4, "y = {y}");
    let Coord::Inches(w) = title.frame.w else {
        panic!("expected inches, got {:?}", title.frame.w);
    };
    assert!((w - 10.0 / 6.0).abs() < 1e-4, "w = {w}");
    match &title.content {
        ElementContent::Text(run) => {
            assert_eq!(run.text, "Hello");
            assert_eq!(run.font_size, 32.0);
            assert!(run.bold);
        }
        other => panic!("expected text, got {other:?}"),
    }
}

#[tokio::test]
async fn empty_deck_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("out");
    let result = export_deck(
        &[],
        &[],
        &DeckSettings::default(),
        &ExportConfig::default(),
        &MemoryFetcher::default(),
        &out,
    )
    .await;

    let err = result.unwrap_err();
    assert!(matches!(err, ExportError::EmptyDeck));
    assert_eq!(err.to_string(), "There are no slides to export!");
    assert!(!out.exists());
}

#[tokio::test]
async fn failed_image_becomes_error_label() {
    let node = slide(
        "x-broken",
        0.0,
        0.0,
        vec![
            Layer::media("https://cdn.test/missing.png", MediaType::Image, boxed("0px", "0px", "50%", "50%", 1)),
            Layer::text("still here", boxed("0px", "200px", "600px", "40px", 2)),
        ],
    );
    let slides = build_slides(
        &[node],
        &[],
        &DeckSettings::default(),
        &ExportConfig::default(),
        &MemoryFetcher::default(),
    )
    .await
    .unwrap();

    let elements = &slides[0].elements;
    assert_eq!(elements.len(), 2);
    match &elements[0].content {
        ElementContent::Text(run) => {
            assert_eq!(run.text, "Image failed to load: https://cdn.test/missing.png");
            assert_eq!(run.color.as_deref(), Some("FF0000"));
        }
        other => panic!("expected error label, got {other:?}"),
    }
    // Percentages pass through untouched.
    assert_eq!(elements[0].frame.w, Coord::Percent(50.0));
}

async fn build_one(node: SlideNode) -> sg_export::ExportSlide {
    let mut slides = build_slides(
        &[node],
        &[],
        &DeckSettings::default(),
        &ExportConfig::default(),
        &MemoryFetcher::default(),
    )
    .await
    .unwrap();
    slides.remove(0)
}

fn layer(id: &str, kind: LayerKind, style: LayerStyle) -> Layer {
    Layer::new(LayerId::intern(id), id, kind, style)
}

#[tokio::test]
async fn content_area_and_unknown_layers_are_skipped() {
    let node = slide(
        "x-mixed",
        0.0,
        0.0,
        vec![
            layer("area", LayerKind::ContentArea, boxed("0px", "0px", "600px", "300px", 1)),
            layer(
                "widget",
                LayerKind::Unsupported {
                    kind: "widget".into(),
                    extra: Default::default(),
                },
                boxed("0px", "0px", "100px", "100px", 2),
            ),
            Layer::text("after", boxed("0px", "0px", "100px", "20px", 3)),
        ],
    );
    let exported = build_one(node).await;

    assert_eq!(exported.elements.len(), 1);
    assert!(matches!(&exported.elements[0].content, ElementContent::Text(run) if run.text == "after"));
}

#[tokio::test]
async fn table_and_chart_become_placeholders() {
    let table = LayerKind::Table {
        table_data: Some(TableData {
            headers: vec!["h1".into(), "h2".into()],
            rows: vec![vec!["a".into(), "b".into()]],
        }),
    };
    let chart = LayerKind::Chart {
        chart_type: Some("bar".into()),
    };
    let node = slide(
        "x-data",
        0.0,
        0.0,
        vec![
            layer("table", table, boxed("0px", "0px", "300px", "100px", 1)),
            layer("chart", chart, boxed("300px", "0px", "300px", "100px", 2)),
            layer(
                "bare",
                LayerKind::Table { table_data: None },
                boxed("0px", "100px", "300px", "100px", 3),
            ),
        ],
    );
    let labels: Vec<ElementContent> = build_one(node)
        .await
        .elements
        .into_iter()
        .map(|e| e.content)
        .collect();

    assert_eq!(
        labels,
        vec![
            ElementContent::Placeholder {
                label: "Table: h1, h2".into()
            },
            ElementContent::Placeholder {
                label: "Chart: bar".into()
            },
            ElementContent::Placeholder {
                label: "Table".into()
            },
        ]
    );
}

#[tokio::test]
async fn element_fill_comes_from_background_color() {
    let mut filled = Layer::text("filled", boxed("0px", "0px", "100px", "20px", 1));
    filled.style.background_color = Some("#00ff00".into());
    let mut clear = Layer::text("clear", boxed("0px", "20px", "100px", "20px", 2));
    clear.style.background_color = Some("transparent".into());

    let exported = build_one(slide("x-fill", 0.0, 0.0, vec![filled, clear])).await;

    assert_eq!(exported.elements[0].fill.as_deref(), Some("00FF00"));
    assert_eq!(exported.elements[1].fill, None);
}

#[tokio::test]
async fn elements_follow_z_index() {
    let node = slide(
        "x-stack",
        0.0,
        0.0,
        vec![
            Layer::text("top", boxed("0px", "0px", "100px", "20px", 5)),
            Layer::text("bottom", boxed("0px", "0px", "100px", "20px", 1)),
            Layer::text("middle", boxed("0px", "0px", "100px", "20px", 3)),
        ],
    );
    let texts: Vec<String> = build_one(node)
        .await
        .elements
        .into_iter()
        .map(|e| match e.content {
            ElementContent::Text(run) => run.text,
            other => panic!("expected text, got {other:?}"),
        })
        .collect();

    assert_eq!(texts, vec!["bottom", "middle", "top"]);
}

#[tokio::test]
async fn media_and_background_image() {
    let url = "https://cdn.test/ok.png";
    let mut background = Layer::background("#000000");
    background.style.background_image = Some(format!("url(\"{url}\")"));
    let node = slide(
        "x-media",
        0.0,
        0.0,
        vec![
            background,
            Layer::media(url, MediaType::Image, boxed("0px", "0px", "60px", "60px", 1)),
            Layer::media("https://cdn.test/clip.mp4", MediaType::Video, boxed("0px", "0px", "60px", "60px", 2)),
        ],
    );
    let slides = build_slides(
        &[node],
        &[],
        &DeckSettings::default(),
        &ExportConfig::default(),
        &MemoryFetcher::with(url, PNG),
    )
    .await
    .unwrap();

    assert!(matches!(slides[0].background, Some(Background::Image(_))));
    assert!(matches!(slides[0].elements[0].content, ElementContent::Image(_)));
    assert_eq!(
        slides[0].elements[1].content,
        ElementContent::LinkedMedia {
            url: "https://cdn.test/clip.mp4".into()
        }
    );
}

#[tokio::test]
async fn broken_background_image_keeps_color() {
    let mut background = Layer::background("#123456");
    background.style.background_image = Some("url(https://cdn.test/gone.jpg)".into());
    let slides = build_slides(
        &[slide("x-bg", 0.0, 0.0, vec![background])],
        &[],
        &DeckSettings::default(),
        &ExportConfig::default(),
        &MemoryFetcher::default(),
    )
    .await
    .unwrap();
    assert_eq!(slides[0].background, Some(Background::Color("123456".into())));
}

#[tokio::test]
async fn package_follows_presentation_order() {
    let text = |s: &str| Layer::text(s, boxed("0px", "0px", "100px", "20px", 1));
    // Canvas positions disagree with the edges on purpose.
    let nodes = vec![
        slide("x-third", 0.0, 0.0, vec![text("third")]),
        slide("x-first", 500.0, 500.0, vec![text("first")]),
        slide("x-second", 100.0, 900.0, vec![text("second")]),
    ];
    let edges = vec![edge("x-first", "x-second"), edge("x-second", "x-third")];
    let fetcher = MemoryFetcher::with("https://cdn.test/a.png", PNG);

    let dir = tempfile::tempdir().unwrap();
    let config = ExportConfig {
        file_name: "ordered.pptx".into(),
        ..ExportConfig::default()
    };
    let path = export_deck(&nodes, &edges, &DeckSettings::default(), &config, &fetcher, dir.path())
        .await
        .unwrap();
    assert_eq!(path, dir.path().join("ordered.pptx"));

    let bytes = std::fs::read(&path).unwrap();
    for (i, expected) in ["first", "second", "third"].iter().enumerate() {
        let xml = zip_entry(&bytes, &format!("ppt/slides/slide{}.xml", i + 1));
        assert!(xml.contains(&format!("<a:t>{expected}</a:t>")), "slide {}", i + 1);
    }

    let presentation = zip_entry(&bytes, "ppt/presentation.xml");
    assert!(presentation.contains(r#"<p:sldSz cx="9144000" cy="5143500"/>"#));
    assert_eq!(presentation.matches("<p:sldId ").count(), 3);

    let types = zip_entry(&bytes, "[Content_Types].xml");
    assert!(types.contains(r#"PartName="/ppt/slides/slide3.xml""#));
    assert!(types.contains(r#"PartName="/ppt/theme/theme1.xml""#));
    for part in [
        "_rels/.rels",
        "ppt/_rels/presentation.xml.rels",
        "ppt/slideMasters/slideMaster1.xml",
        "ppt/slideLayouts/slideLayout1.xml",
        "ppt/slides/_rels/slide1.xml.rels",
    ] {
        zip_entry(&bytes, part);
    }
}

#[tokio::test]
async fn images_are_embedded_as_media_parts() {
    let url = "https://cdn.test/logo.png";
    let nodes = vec![slide(
        "x-logo",
        0.0,
        0.0,
        vec![Layer::media(url, MediaType::Image, boxed("10px", "10px", "100px", "100px", 1))],
    )];
    let dir = tempfile::tempdir().unwrap();
    let path = export_deck(
        &nodes,
        &[],
        &DeckSettings::default(),
        &ExportConfig::default(),
        &MemoryFetcher::with(url, PNG),
        dir.path(),
    )
    .await
    .unwrap();

    let bytes = std::fs::read(path).unwrap();
    let rels = zip_entry(&bytes, "ppt/slides/_rels/slide1.xml.rels");
    assert!(rels.contains(r#"Target="../media/image1.png""#));

    let mut archive = zip::ZipArchive::new(std::io::Cursor::new(bytes.as_slice())).unwrap();
    let mut media = Vec::new();
    archive
        .by_name("ppt/media/image1.png")
        .unwrap()
        .read_to_end(&mut media)
        .unwrap();
    assert_eq!(media, PNG);
}
