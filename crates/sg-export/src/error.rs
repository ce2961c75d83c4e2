use std::{io, path::PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExportError {
    /// Nothing to export. Raised before any output is produced.
    #[error("There are no slides to export!")]
    EmptyDeck,

    #[error("Failed to fetch asset {url}: {reason}")]
    Fetch { url: String, reason: String },

    #[error("Failed to write {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to build package archive")]
    Zip(#[from] zip::result::ZipError),

    #[error("Failed to generate XML: {0}")]
    Xml(String),
}

impl ExportError {
    pub(crate) fn fetch(url: &str, reason: impl ToString) -> Self {
        Self::Fetch {
            url: url.to_string(),
            reason: reason.to_string(),
        }
    }
}

impl From<std::fmt::Error> for ExportError {
    fn from(e: std::fmt::Error) -> Self {
        Self::Xml(e.to_string())
    }
}
