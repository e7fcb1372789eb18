//! Metadata registry core.
//!
//! This module carries the whole resolution pipeline: `corpus` discovers and
//! eagerly loads every metadata document under a store root, `resolver` picks
//! the best admissible record for an identifier and capability query, and
//! `audit` walks the same documents collecting operator-facing findings.
//! Types mirror the on-disk document shape; unknown fields pass through
//! untouched.

pub mod audit;
pub mod corpus;
pub mod identity;
pub mod model;
pub mod resolver;

pub use audit::audit_store;
pub use corpus::{CorpusError, collect_documents, load_corpus};
pub use identity::{Attribute, CapabilityQuery, ModuleId};
pub use model::{MetadataRecord, load_record_from_path};
pub use resolver::{resolve, resolve_module};
