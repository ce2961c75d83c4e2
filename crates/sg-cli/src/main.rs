//! `slidegraph`: terminal front end for slide graph decks.
//!
//! The deck lives in a [`FileStore`] directory; every mutating command
//! loads it, applies one change and saves it back.

mod args;
mod present;

use anyhow::{Context, Result, bail};
use args::{Cli, Commands};
use clap::Parser;
use sg_core::{LayoutConfig, LintSeverity, SlideId, lint_deck};
use sg_editor::{DeckDocument, FileStore, load_document, save_document};
use sg_export::{ExportConfig, ExportError, HttpFetcher, export_deck};
use std::time::Duration;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();
    let mut store = FileStore::new(&cli.store);
    let mut doc = load_document(&store);

    match cli.command {
        Commands::Order => {
            for (i, slide) in doc.ordered_slides().into_iter().enumerate() {
                println!("{:>3}. {} ({})", i + 1, slide.label(), slide.id);
            }
        }
        Commands::Layout => {
            doc.auto_layout(&LayoutConfig::default());
            save(&mut store, &doc)?;
            for slide in &doc.nodes {
                println!(
                    "{} ({:.0}, {:.0}) {}",
                    slide.id,
                    slide.position.x,
                    slide.position.y,
                    slide.label()
                );
            }
            log::info!("laid out {} slide(s)", doc.nodes.len());
        }
        Commands::Lint => {
            let diags = lint_deck(&doc.nodes, &doc.edges);
            for d in &diags {
                let level = match d.severity {
                    LintSeverity::Warning => "warning",
                    LintSeverity::Info => "info",
                };
                match d.slide {
                    Some(slide) => println!("{level}[{}] {slide}: {}", d.rule, d.message),
                    None => println!("{level}[{}] {}", d.rule, d.message),
                }
            }
            if diags.is_empty() {
                println!("no problems found");
            }
        }
        Commands::AddSlide { label } => {
            let id = doc.add_slide(&label);
            save(&mut store, &doc)?;
            println!("{id}");
        }
        Commands::Connect { source, target } => {
            let (source, target) = (slide_id(&doc, &source)?, slide_id(&doc, &target)?);
            if !doc.connect(source, target) {
                bail!("cannot connect {source} to {target}");
            }
            save(&mut store, &doc)?;
        }
        Commands::Present { start } => {
            present::run(&doc, start)?;
        }
        Commands::Export { out, name, timeout } => {
            let mut config = ExportConfig {
                fetch_timeout: timeout.map(Duration::from_secs),
                ..ExportConfig::default()
            };
            if let Some(name) = name {
                config.file_name = name;
            }
            let fetcher = HttpFetcher::new(config.fetch_timeout)?;
            let exported =
                export_deck(&doc.nodes, &doc.edges, &doc.settings, &config, &fetcher, &out).await;
            match exported {
                Ok(path) => println!("{}", path.display()),
                Err(ExportError::EmptyDeck) => {
                    eprintln!("{}", ExportError::EmptyDeck);
                    std::process::exit(1);
                }
                Err(e) => return Err(e).context("export failed"),
            }
        }
    }
    Ok(())
}

fn save(store: &mut FileStore, doc: &DeckDocument) -> Result<()> {
    save_document(store, doc).with_context(|| format!("saving deck to {}", store.dir().display()))
}

/// Resolve a slide id typed on the command line.
fn slide_id(doc: &DeckDocument, raw: &str) -> Result<SlideId> {
    let id = SlideId::intern(raw);
    match doc.slide(id) {
        Some(_) => Ok(id),
        None => bail!("no slide with id {raw:?}"),
    }
}
