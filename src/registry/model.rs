//! Deserializable representation of a metadata document.
//!
//! Each document in the store describes one candidate record: a module id,
//! the attributes the record requires, and whatever else the publisher chose
//! to include. Fields the resolver does not interpret are captured verbatim
//! and serialized back untouched, so transports can return the stored
//! document as-is.

use crate::registry::corpus::CorpusError;
use crate::registry::identity::{Attribute, ModuleId};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fs;
use std::path::Path;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
/// One candidate record as stored on disk.
pub struct MetadataRecord {
    pub id: ModuleId,
    /// Attributes this record requires of the platform. Absent and empty are
    /// equivalent: both mean "requires nothing, admissible anywhere".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attributes: Option<Vec<Attribute>>,
    /// Opaque passthrough for every other field in the document.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl MetadataRecord {
    /// The attributes this record requires, empty when none are declared.
    pub fn required_attributes(&self) -> &[Attribute] {
        self.attributes.as_deref().unwrap_or(&[])
    }

    /// Ranking key: more required attributes means a more specific record.
    pub fn attribute_count(&self) -> usize {
        self.required_attributes().len()
    }
}

/// Read and parse a single metadata document.
///
/// Failures carry the offending path; callers treat either variant as fatal
/// for the whole corpus load.
pub fn load_record_from_path(path: &Path) -> Result<MetadataRecord, CorpusError> {
    let data = fs::read_to_string(path).map_err(|source| CorpusError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&data).map_err(|source| CorpusError::Parse {
        path: path.to_path_buf(),
        source,
    })
}
