//! Best-match selection over a loaded corpus.
//!
//! Resolution is a pure, single-pass computation: filter by identifier,
//! filter by admissibility, then keep the most specific survivor. The result
//! is always a verbatim corpus record or absence; nothing is merged or
//! synthesized.

use crate::registry::corpus::{CorpusError, load_corpus};
use crate::registry::identity::{CapabilityQuery, ModuleId};
use crate::registry::model::MetadataRecord;
use log::info;
use std::path::Path;

/// Whether `record` qualifies for `query`.
///
/// Subset test, not exact-match: every attribute the record requires must be
/// declared by the query. Vacuously true when the record requires nothing or
/// the query is unconstrained; those are independent conditions and each
/// admits on its own.
pub fn is_admissible(record: &MetadataRecord, query: &CapabilityQuery) -> bool {
    record
        .required_attributes()
        .iter()
        .all(|attribute| query.declares(attribute))
}

/// Pick the best admissible record for `id`, or `None`.
///
/// Among admissible records with the matching id, the one requiring the most
/// attributes wins; records requiring nothing rank as zero. Ties go to the
/// earliest record in corpus order. That tie-break is a weak guarantee:
/// stable for a given corpus snapshot, not a semantic preference between the
/// tied profiles.
pub fn resolve<'a>(
    corpus: &'a [MetadataRecord],
    id: &ModuleId,
    query: &CapabilityQuery,
) -> Option<&'a MetadataRecord> {
    let mut best: Option<&MetadataRecord> = None;
    for record in corpus {
        if &record.id != id || !is_admissible(record, query) {
            continue;
        }
        let improves = match best {
            Some(current) => record.attribute_count() > current.attribute_count(),
            None => true,
        };
        if improves {
            best = Some(record);
        }
    }
    best
}

/// Load-then-resolve entry point for transports.
///
/// Re-reads the whole store on every call so edits are visible immediately;
/// freshness is deliberately preferred over throughput. A read or parse
/// failure anywhere in the store fails the call. `Ok(None)` is the normal
/// no-match outcome, never an error.
pub fn resolve_module(
    store_root: &Path,
    id: &ModuleId,
    query: &CapabilityQuery,
) -> Result<Option<MetadataRecord>, CorpusError> {
    let corpus = load_corpus(store_root)?;
    let selected = resolve(&corpus, id, query);
    match selected {
        Some(record) => info!(
            "resolved {} to a record requiring {} attribute(s)",
            id.0,
            record.attribute_count()
        ),
        None => info!("no admissible record for {}", id.0),
    }
    Ok(selected.cloned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::identity::Attribute;
    use serde_json::json;

    fn record(id: &str, attributes: Option<&[&str]>) -> MetadataRecord {
        let mut doc = json!({"id": id});
        if let Some(attrs) = attributes {
            doc["attributes"] = json!(attrs);
        }
        serde_json::from_value(doc).expect("fixture record")
    }

    fn query(attributes: &[&str]) -> CapabilityQuery {
        CapabilityQuery::with_attributes(
            attributes.iter().map(|a| Attribute(a.to_string())),
        )
    }

    // The three marvin@1.0.0 profiles used throughout the scenarios below.
    fn marvin_corpus() -> Vec<MetadataRecord> {
        vec![
            record("marvin@1.0.0", Some(&["aarch64", "Speaker"])),
            record("marvin@1.0.0", Some(&["aarch64", "Camera"])),
            record(
                "marvin@1.0.0",
                Some(&["aarch64", "Speaker", "Camera", "Kubernetes"]),
            ),
        ]
    }

    fn marvin() -> ModuleId {
        ModuleId("marvin@1.0.0".to_string())
    }

    #[test]
    fn speaker_platform_gets_the_speaker_profile() {
        let corpus = marvin_corpus();
        let found = resolve(&corpus, &marvin(), &query(&["aarch64", "Speaker"]));
        assert_eq!(found, Some(&corpus[0]));
    }

    #[test]
    fn camera_platform_gets_the_camera_profile() {
        let corpus = marvin_corpus();
        let found = resolve(&corpus, &marvin(), &query(&["aarch64", "Camera"]));
        assert_eq!(found, Some(&corpus[1]));
    }

    #[test]
    fn fully_equipped_platform_gets_the_most_specific_profile() {
        let corpus = marvin_corpus();
        let found = resolve(
            &corpus,
            &marvin(),
            &query(&["aarch64", "Speaker", "Camera", "Kubernetes"]),
        );
        assert_eq!(found, Some(&corpus[2]));
    }

    #[test]
    fn unconstrained_query_admits_everything_and_ranks_by_count() {
        let corpus = marvin_corpus();
        let found = resolve(&corpus, &marvin(), &CapabilityQuery::unconstrained());
        assert_eq!(found, Some(&corpus[2]));
    }

    #[test]
    fn platform_missing_every_profile_gets_nothing() {
        let corpus = marvin_corpus();
        assert_eq!(resolve(&corpus, &marvin(), &query(&["aarch64"])), None);
    }

    #[test]
    fn unknown_identifier_gets_nothing() {
        let corpus = marvin_corpus();
        let unknown = ModuleId("zaphod@2.0.0".to_string());
        assert_eq!(
            resolve(&corpus, &unknown, &CapabilityQuery::unconstrained()),
            None
        );
    }

    #[test]
    fn record_requiring_nothing_is_always_admissible() {
        let bare = record("m@1", None);
        assert!(is_admissible(&bare, &query(&[])));
        assert!(is_admissible(&bare, &CapabilityQuery::unconstrained()));

        let empty = record("m@1", Some(&[]));
        assert!(is_admissible(&empty, &query(&[])));
    }

    #[test]
    fn empty_query_set_rejects_records_with_requirements() {
        let demanding = record("m@1", Some(&["aarch64"]));
        assert!(!is_admissible(&demanding, &query(&[])));
        assert!(is_admissible(&demanding, &CapabilityQuery::unconstrained()));
    }

    #[test]
    fn bare_record_ranks_below_any_admissible_profile() {
        let corpus = vec![
            record("m@1", None),
            record("m@1", Some(&["aarch64"])),
        ];
        let found = resolve(&corpus, &ModuleId("m@1".to_string()), &query(&["aarch64"]));
        assert_eq!(found, Some(&corpus[1]));
    }

    #[test]
    fn ties_go_to_the_earliest_record_in_corpus_order() {
        let corpus = vec![
            record("m@1", Some(&["aarch64"])),
            record("m@1", Some(&["Speaker"])),
        ];
        let found = resolve(
            &corpus,
            &ModuleId("m@1".to_string()),
            &query(&["aarch64", "Speaker"]),
        );
        assert_eq!(found, Some(&corpus[0]));
    }

    #[test]
    fn selected_count_dominates_every_admissible_candidate() {
        let corpus = marvin_corpus();
        let q = query(&["aarch64", "Speaker", "Camera", "Kubernetes"]);
        let winner = resolve(&corpus, &marvin(), &q).expect("a match");
        for candidate in &corpus {
            if candidate.id == marvin() && is_admissible(candidate, &q) {
                assert!(winner.attribute_count() >= candidate.attribute_count());
            }
        }
    }

    #[test]
    fn resolution_is_deterministic_for_a_fixed_corpus() {
        let corpus = marvin_corpus();
        let q = query(&["aarch64", "Speaker"]);
        let first = resolve(&corpus, &marvin(), &q);
        let second = resolve(&corpus, &marvin(), &q);
        assert_eq!(first, second);
    }
}
