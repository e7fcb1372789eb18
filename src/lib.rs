//! Shared library for the modmatch resolver.
//!
//! The crate exposes the metadata registry core (document discovery, corpus
//! loading, best-match resolution) plus the plumbing the helper binaries
//! depend on: store root resolution and attribute list parsing. The resolver
//! contract is documented in README.md; transports call `resolve_module` with
//! an identifier and an optional capability query and render the outcome.

use anyhow::{Result, bail};
use std::collections::BTreeSet;
use std::{env, fs, path::Path, path::PathBuf};

pub mod registry;

pub use registry::audit::audit_store;
pub use registry::corpus::{CorpusError, collect_documents, load_corpus};
pub use registry::identity::{Attribute, CapabilityQuery, ModuleId};
pub use registry::model::{MetadataRecord, load_record_from_path};
pub use registry::resolver::{resolve, resolve_module};

/// Environment variable naming the document store root.
pub const STORE_ENV: &str = "MODMATCH_STORE";

const DEFAULT_STORE_DIR: &str = "store";

/// Locate the document store root.
///
/// Precedence: an explicit path from the caller, then `MODMATCH_STORE`, then
/// `./store` relative to the working directory. The result is canonicalized
/// and must be an existing directory; helpers treat failure as fatal because
/// nothing can be resolved without a store.
pub fn resolve_store_root(explicit: Option<&Path>) -> Result<PathBuf> {
    let candidate = if let Some(path) = explicit {
        path.to_path_buf()
    } else if let Some(env_root) = env::var_os(STORE_ENV) {
        PathBuf::from(env_root)
    } else {
        PathBuf::from(DEFAULT_STORE_DIR)
    };

    if !candidate.is_dir() {
        bail!(
            "document store root {} is not a directory. Pass --store or set {}.",
            candidate.display(),
            STORE_ENV
        );
    }
    Ok(fs::canonicalize(&candidate).unwrap_or(candidate))
}

/// Split comma- or whitespace-delimited attribute lists into a capability set.
pub fn parse_attribute_list(value: &str) -> BTreeSet<Attribute> {
    value
        .replace(',', " ")
        .split_whitespace()
        .map(|s| Attribute(s.trim().to_string()))
        .filter(|a| !a.0.is_empty())
        .collect()
}
