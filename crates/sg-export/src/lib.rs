//! Export of a slide graph to a PowerPoint (`.pptx`) file.
//!
//! The deck is linearized, each slide is mapped onto an output element
//! model with pixel geometry rescaled to a fixed inch canvas, assets are
//! fetched, and the result is written as a zip package.

pub mod config;
pub mod element;
pub mod error;
pub mod fetch;
pub mod pptx;
pub mod serialize;
pub mod units;

pub use config::ExportConfig;
pub use element::{Background, Coord, Element, ElementContent, ExportSlide, Frame, TextRun};
pub use error::ExportError;
pub use fetch::{AssetFetcher, HttpFetcher};
pub use pptx::PptxWriter;
pub use serialize::build_slides;

use sg_core::{DeckSettings, Edge, SlideNode};
use std::path::{Path, PathBuf};

/// Export the deck into `out_dir`, returning the written file's path.
///
/// An empty deck fails with [`ExportError::EmptyDeck`] and writes nothing.
/// Failed assets are logged and replaced; they do not fail the export.
pub async fn export_deck(
    nodes: &[SlideNode],
    edges: &[Edge],
    settings: &DeckSettings,
    config: &ExportConfig,
    fetcher: &dyn AssetFetcher,
    out_dir: &Path,
) -> Result<PathBuf, ExportError> {
    let slides = build_slides(nodes, edges, settings, config, fetcher).await?;
    let bytes = PptxWriter::new(config.canvas_size(settings.aspect_ratio)).write(&slides)?;

    tokio::fs::create_dir_all(out_dir)
        .await
        .map_err(|source| ExportError::Io {
            path: out_dir.to_path_buf(),
            source,
        })?;
    let path = out_dir.join(&config.file_name);
    tokio::fs::write(&path, &bytes)
        .await
        .map_err(|source| ExportError::Io {
            path: path.clone(),
            source,
        })?;

    log::info!(
        "exported {} slide(s) to {} ({} bytes)",
        slides.len(),
        path.display(),
        bytes.len()
    );
    Ok(path)
}
