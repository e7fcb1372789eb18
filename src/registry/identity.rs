use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Identifier naming a module/version (e.g., `marvin@1.0.0`).
///
/// Several records may share one id when they carry different attribute
/// profiles; identity filtering is exact string equality.
#[derive(Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ModuleId(pub String);

/// Named platform feature a record may require or a query may declare.
#[derive(Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Attribute(pub String);

/// Capability set declared by a requesting platform.
///
/// `attributes: None` imposes no constraint and admits every record. An empty
/// set is a real constraint: only records that require nothing qualify. The
/// two cases are deliberately distinct and must stay that way.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CapabilityQuery {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attributes: Option<BTreeSet<Attribute>>,
}

impl CapabilityQuery {
    /// A query that admits every record regardless of its requirements.
    pub fn unconstrained() -> Self {
        Self { attributes: None }
    }

    /// A query constrained to exactly the given capability set.
    pub fn with_attributes<I>(attributes: I) -> Self
    where
        I: IntoIterator<Item = Attribute>,
    {
        Self {
            attributes: Some(attributes.into_iter().collect()),
        }
    }

    /// Whether the platform declared `attribute` as available.
    ///
    /// Unconstrained queries report everything as available.
    pub fn declares(&self, attribute: &Attribute) -> bool {
        match &self.attributes {
            None => true,
            Some(available) => available.contains(attribute),
        }
    }
}
