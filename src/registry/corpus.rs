//! Document discovery and eager corpus loading.
//!
//! The loader enumerates every `.json` document under the store root, depth
//! unbounded, and parses all of them before any filtering happens. A single
//! unreadable or malformed document fails the entire load: the resolver never
//! works from a partial corpus, so corruption anywhere surfaces immediately
//! instead of silently dropping a candidate.
//!
//! Enumeration order is pinned to lexicographic path order. The resolver's
//! tie-break leans on it, so the order must not drift with filesystem or
//! platform quirks.

use crate::registry::model::{MetadataRecord, load_record_from_path};
use log::debug;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

const DOCUMENT_SUFFIX: &str = "json";

#[derive(Debug, Error)]
/// Why a corpus load failed. Absence of a match is never an error.
pub enum CorpusError {
    #[error("unable to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid metadata document {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

/// Enumerate every metadata document under `root`, sorted by path.
///
/// Only the `.json` suffix qualifies a file; everything else (including the
/// directories themselves) is traversal structure. A failed directory read
/// anywhere in the tree fails the enumeration.
pub fn collect_documents(root: &Path) -> Result<Vec<PathBuf>, CorpusError> {
    let mut documents = Vec::new();
    collect_from_dir(root, &mut documents)?;
    documents.sort();
    Ok(documents)
}

fn collect_from_dir(dir: &Path, acc: &mut Vec<PathBuf>) -> Result<(), CorpusError> {
    let entries = fs::read_dir(dir).map_err(|source| CorpusError::Read {
        path: dir.to_path_buf(),
        source,
    })?;
    for entry in entries {
        let entry = entry.map_err(|source| CorpusError::Read {
            path: dir.to_path_buf(),
            source,
        })?;
        let path = entry.path();
        if path.is_dir() {
            collect_from_dir(&path, acc)?;
        } else if path.extension().and_then(|ext| ext.to_str()) == Some(DOCUMENT_SUFFIX) {
            acc.push(path);
        }
    }
    Ok(())
}

/// Read and parse the full candidate set under `root`.
///
/// The corpus is rebuilt from disk on every call; there is no caching layer,
/// so edits to the store are visible to the next resolution.
pub fn load_corpus(root: &Path) -> Result<Vec<MetadataRecord>, CorpusError> {
    let paths = collect_documents(root)?;
    let mut corpus = Vec::with_capacity(paths.len());
    for path in &paths {
        corpus.push(load_record_from_path(path)?);
    }
    debug!(
        "loaded {} metadata documents from {}",
        corpus.len(),
        root.display()
    );
    Ok(corpus)
}
