//! Store lint for operators.
//!
//! Unlike the loader, the audit does not fail fast: it walks every candidate
//! document and collects findings so a broken store can be repaired in one
//! pass. The resolver keeps its hard-failure policy; this is tooling on the
//! side.

use crate::registry::corpus::collect_documents;
use crate::registry::model::MetadataRecord;
use anyhow::{Context, Result};
use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

/// Walk the store and report everything that would poison or confuse a
/// resolution: unreadable files, invalid JSON, blank ids, and duplicate
/// `(id, attribute-profile)` pairs the resolver can never tell apart.
///
/// An empty findings list means the store is clean. Enumeration failure is
/// still fatal; there is nothing useful to report from a tree that cannot be
/// walked.
pub fn audit_store(root: &Path) -> Result<Vec<String>> {
    let documents = collect_documents(root)
        .with_context(|| format!("enumerating documents under {}", root.display()))?;

    let mut findings = Vec::new();
    let mut profiles: BTreeSet<(String, Vec<String>)> = BTreeSet::new();

    for path in documents {
        let data = match fs::read_to_string(&path) {
            Ok(data) => data,
            Err(err) => {
                findings.push(format!("{}: unable to read: {err}", path.display()));
                continue;
            }
        };

        let record: MetadataRecord = match serde_json::from_str(&data) {
            Ok(record) => record,
            Err(err) => {
                findings.push(format!("{}: invalid document: {err}", path.display()));
                continue;
            }
        };

        if record.id.0.trim().is_empty() {
            findings.push(format!("{}: blank module id", path.display()));
            continue;
        }

        let mut profile: Vec<String> = record
            .required_attributes()
            .iter()
            .map(|a| a.0.clone())
            .collect();
        profile.sort();
        profile.dedup();
        if !profiles.insert((record.id.0.clone(), profile)) {
            findings.push(format!(
                "{}: duplicate attribute profile for id '{}'",
                path.display(),
                record.id.0
            ));
        }
    }

    Ok(findings)
}
