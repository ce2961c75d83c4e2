//! Command-line interface definitions.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Slide graph editor and exporter
#[derive(Parser, Debug, Clone)]
#[command(name = "slidegraph", version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Directory holding the persisted deck
    #[arg(short, long, global = true, default_value = ".slidegraph", value_hint = clap::ValueHint::DirPath)]
    pub store: PathBuf,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Print slides in presentation order
    #[command(visible_alias = "o")]
    Order,

    /// Arrange slides left to right in presentation order and save
    Layout,

    /// Report structural problems in the slide graph
    Lint,

    /// Append a new slide to the right of the canvas
    AddSlide {
        /// Slide title
        label: String,
    },

    /// Connect two slides ("source is followed by target")
    Connect { source: String, target: String },

    /// Step through the deck from the terminal
    #[command(visible_alias = "p")]
    Present {
        /// Zero-based slide to start on
        #[arg(long, default_value_t = 0)]
        start: usize,
    },

    /// Write the deck as a PowerPoint file
    #[command(visible_alias = "e")]
    Export {
        /// Output directory
        #[arg(short, long, default_value = ".", value_hint = clap::ValueHint::DirPath)]
        out: PathBuf,

        /// File name inside the output directory
        #[arg(short, long)]
        name: Option<String>,

        /// Per-asset download timeout in seconds
        #[arg(long)]
        timeout: Option<u64>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_export() {
        let cli = Cli::parse_from([
            "slidegraph",
            "-s",
            "deck",
            "export",
            "--out",
            "dist",
            "--timeout",
            "5",
        ]);
        assert_eq!(cli.store, PathBuf::from("deck"));
        match cli.command {
            Commands::Export { out, name, timeout } => {
                assert_eq!(out, PathBuf::from("dist"));
                assert_eq!(name, None);
                assert_eq!(timeout, Some(5));
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn parses_connect() {
        let cli = Cli::parse_from(["slidegraph", "connect", "1", "slide-2"]);
        assert!(matches!(
            cli.command,
            Commands::Connect { ref source, ref target } if source == "1" && target == "slide-2"
        ));
        assert_eq!(cli.store, PathBuf::from(".slidegraph"));
    }
}
