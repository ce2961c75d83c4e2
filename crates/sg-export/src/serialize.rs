//! Slide/layer model → output element model.
//!
//! Slides are processed in presentation order. Every slide is built
//! concurrently; within one slide assets are awaited one after another so
//! elements keep their paint order. A failed asset never aborts the export:
//! images fall back to an error label, backgrounds to their color.

use crate::config::ExportConfig;
use crate::element::{Background, Element, ElementContent, ExportSlide, TextRun};
use crate::error::ExportError;
use crate::fetch::{AssetFetcher, fetch_image};
use crate::units::frame_of;
use futures::future::join_all;
use sg_core::css::{parse_color, parse_font_size, unwrap_url};
use sg_core::{
    DeckSettings, Edge, Layer, LayerKind, MediaType, SlideNode, TableData, TextFormat, linearize,
};

/// Weights rendered as bold.
const BOLD_WEIGHTS: [&str; 6] = ["bold", "bolder", "600", "700", "800", "900"];

/// Build every slide of the deck, in presentation order.
///
/// Fails only with [`ExportError::EmptyDeck`], before any asset is fetched.
pub async fn build_slides(
    nodes: &[SlideNode],
    edges: &[Edge],
    settings: &DeckSettings,
    config: &ExportConfig,
    fetcher: &dyn AssetFetcher,
) -> Result<Vec<ExportSlide>, ExportError> {
    if nodes.is_empty() {
        return Err(ExportError::EmptyDeck);
    }
    let ordered = linearize(nodes, edges);
    let slides = join_all(
        ordered
            .into_iter()
            .map(|node| build_slide(node, settings, config, fetcher)),
    )
    .await;
    Ok(slides)
}

/// Build one slide.
pub async fn build_slide(
    node: &SlideNode,
    settings: &DeckSettings,
    config: &ExportConfig,
    fetcher: &dyn AssetFetcher,
) -> ExportSlide {
    let node_size = node.effective_size(settings.aspect_ratio);
    let canvas = config.canvas_size(settings.aspect_ratio);
    let mut slide = ExportSlide::default();

    for layer in node.layers_by_z() {
        let content = match &layer.kind {
            LayerKind::Background => {
                if let Some(background) = background_of(layer, fetcher).await {
                    slide.background = Some(background);
                }
                continue;
            }
            LayerKind::ContentArea => continue,
            LayerKind::Unsupported { kind, .. } => {
                log::warn!(
                    "slide {}: skipping layer {} of unsupported type `{kind}`",
                    node.id,
                    layer.id
                );
                continue;
            }
            LayerKind::Title {
                content,
                text_format,
            }
            | LayerKind::Footer {
                content,
                text_format,
            }
            | LayerKind::Text {
                content,
                text_format,
            } => ElementContent::Text(text_run(content, text_format, config)),
            LayerKind::Media {
                url,
                media_type: MediaType::Image,
                ..
            } => match fetch_image(fetcher, url).await {
                Ok(image) => ElementContent::Image(image),
                Err(e) => {
                    log::error!("slide {}: {e}", node.id);
                    ElementContent::Text(error_label(url, config))
                }
            },
            LayerKind::Media {
                url,
                media_type: MediaType::Video,
                ..
            } => ElementContent::LinkedMedia { url: url.clone() },
            LayerKind::Table { table_data } => ElementContent::Placeholder {
                label: table_label(table_data.as_ref()),
            },
            LayerKind::Chart { chart_type } => ElementContent::Placeholder {
                label: match chart_type {
                    Some(kind) => format!("Chart: {kind}"),
                    None => "Chart".to_string(),
                },
            },
        };

        slide.elements.push(Element {
            frame: frame_of(&layer.style, node_size, canvas),
            fill: layer.style.visible_background().map(|c| c.to_rgb_hex()),
            content,
        });
    }
    slide
}

/// Whole-slide background: an image when one is set and loads, else the color.
async fn background_of(layer: &Layer, fetcher: &dyn AssetFetcher) -> Option<Background> {
    if let Some(raw) = layer.style.background_image.as_deref() {
        let url = unwrap_url(raw);
        if !url.is_empty() && url != "none" {
            match fetch_image(fetcher, url).await {
                Ok(image) => return Some(Background::Image(image)),
                Err(e) => log::error!("background image: {e}"),
            }
        }
    }
    layer
        .style
        .visible_background()
        .map(|c| Background::Color(c.to_rgb_hex()))
}

/// Map a text format onto a text run.
pub fn text_run(content: &str, format: &TextFormat, config: &ExportConfig) -> TextRun {
    let font_size = format
        .font_size
        .as_deref()
        .map_or(config.default_font_size, |raw| {
            parse_font_size(raw, config.default_font_size)
        });
    TextRun {
        text: content.to_string(),
        font_size,
        color: format
            .color
            .as_deref()
            .and_then(parse_color)
            .map(|c| c.to_rgb_hex()),
        bold: format
            .font_weight
            .as_deref()
            .is_some_and(|w| BOLD_WEIGHTS.contains(&w.trim().to_ascii_lowercase().as_str())),
        italic: format
            .font_style
            .as_deref()
            .is_some_and(|s| matches!(s.trim(), "italic" | "oblique")),
        align: format.text_align.unwrap_or_default(),
        font_family: format.font_family.as_deref().and_then(first_family),
    }
}

/// First family of a CSS `font-family` list, unquoted.
fn first_family(list: &str) -> Option<String> {
    let first = list.split(',').next()?.trim();
    let unquoted = first.trim_matches(|c: char| c == '"' || c == '\'').trim();
    (!unquoted.is_empty()).then(|| unquoted.to_string())
}

/// `Table: h1, h2`, or just `Table` without headers.
fn table_label(data: Option<&TableData>) -> String {
    match data {
        Some(data) if !data.headers.is_empty() => format!("Table: {}", data.headers.join(", ")),
        _ => "Table".to_string(),
    }
}

fn error_label(url: &str, config: &ExportConfig) -> TextRun {
    TextRun {
        color: Some("FF0000".to_string()),
        ..TextRun::plain(format!("Image failed to load: {url}"), config.default_font_size)
    }
}
