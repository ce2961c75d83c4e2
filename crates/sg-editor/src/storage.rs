//! Persistence of the deck to a key/value store.
//!
//! The document is stored under three independent keys, each holding a JSON
//! value. Loading never fails: a missing or corrupt key falls back to its
//! default and the problem is logged.

use crate::document::DeckDocument;
use sg_core::{DeckSettings, Edge, SlideNode};
use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

pub const NODES_KEY: &str = "pptWebNodes";
pub const EDGES_KEY: &str = "pptWebEdges";
pub const SETTINGS_KEY: &str = "pptWebSettings";

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("failed to write `{key}`: {source}")]
    Io {
        key: String,
        #[source]
        source: io::Error,
    },
    #[error("failed to serialize `{key}`: {source}")]
    Serialize {
        key: String,
        #[source]
        source: serde_json::Error,
    },
}

/// A string key/value store.
pub trait Store {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: String) -> Result<(), StoreError>;
}

/// In-process store, used by tests and one-shot tools.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Store for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: String) -> Result<(), StoreError> {
        self.entries.insert(key.to_string(), value);
        Ok(())
    }
}

/// One `<key>.json` file per key inside a directory.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl Store for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        match fs::read_to_string(self.path(key)) {
            Ok(text) => Some(text),
            Err(e) if e.kind() == io::ErrorKind::NotFound => None,
            Err(e) => {
                log::warn!("could not read `{key}` from {}: {e}", self.dir.display());
                None
            }
        }
    }

    fn set(&mut self, key: &str, value: String) -> Result<(), StoreError> {
        let io_err = |source| StoreError::Io {
            key: key.to_string(),
            source,
        };
        fs::create_dir_all(&self.dir).map_err(io_err)?;
        fs::write(self.path(key), value).map_err(io_err)
    }
}

// ─── Document load / save ────────────────────────────────────────────────

/// Load the document, substituting defaults key by key.
///
/// Missing or non-array nodes yield the seed slide; missing or non-array
/// edges yield no edges; settings fall back to [`DeckSettings::default`].
/// Inside an array, an entry that does not parse is dropped on its own and
/// the rest of the list is kept.
pub fn load_document(store: &impl Store) -> DeckDocument {
    let nodes: Vec<SlideNode> =
        load_list(store, NODES_KEY).unwrap_or_else(|| DeckDocument::seed().nodes);
    let edges: Vec<Edge> = load_list(store, EDGES_KEY).unwrap_or_default();
    let settings: DeckSettings = load_key(store, SETTINGS_KEY).unwrap_or_default();
    DeckDocument {
        nodes,
        edges,
        settings,
    }
}

fn load_key<T: serde::de::DeserializeOwned>(store: &impl Store, key: &str) -> Option<T> {
    let raw = store.get(key)?;
    match serde_json::from_str(&raw) {
        Ok(value) => Some(value),
        Err(e) => {
            log::error!("stored `{key}` is corrupt, using defaults: {e}");
            None
        }
    }
}

/// A JSON array parsed entry by entry.
fn load_list<T: serde::de::DeserializeOwned>(store: &impl Store, key: &str) -> Option<Vec<T>> {
    let entries: Vec<serde_json::Value> = load_key(store, key)?;
    let total = entries.len();
    let items: Vec<T> = entries
        .into_iter()
        .enumerate()
        .filter_map(|(i, entry)| match serde_json::from_value(entry) {
            Ok(item) => Some(item),
            Err(e) => {
                log::error!("stored `{key}`[{i}] is corrupt, dropping it: {e}");
                None
            }
        })
        .collect();
    if items.len() < total {
        log::warn!("loaded {} of {total} entries from `{key}`", items.len());
    }
    Some(items)
}

/// Save all three keys. Stops at the first failure, which is logged.
pub fn save_document(store: &mut impl Store, doc: &DeckDocument) -> Result<(), StoreError> {
    save_key(store, NODES_KEY, &doc.nodes)?;
    save_key(store, EDGES_KEY, &doc.edges)?;
    save_key(store, SETTINGS_KEY, &doc.settings)
}

fn save_key<T: serde::Serialize>(
    store: &mut impl Store,
    key: &str,
    value: &T,
) -> Result<(), StoreError> {
    let json = serde_json::to_string(value).map_err(|source| StoreError::Serialize {
        key: key.to_string(),
        source,
    })?;
    store.set(key, json).inspect_err(|e| log::error!("{e}"))
}
