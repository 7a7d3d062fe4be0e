//! Physiological parameter groups for joint pattern detection.

use serde::{Deserialize, Serialize};

/// Named group of physiologically related parameters
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParameterGroup {
    /// Group name, e.g. `anemia`
    pub name: String,
    /// Member parameter names, in declaration order
    pub members: Vec<String>,
}

impl ParameterGroup {
    /// Create a group from a name and its member parameters
    #[must_use]
    pub fn new(name: impl Into<String>, members: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            name: name.into(),
            members: members.into_iter().map(Into::into).collect(),
        }
    }
}

/// Ordered collection of parameter groups.
///
/// Groups are scanned in declaration order so joint findings come out in a
/// reproducible order. A parameter may belong to more than one group.
#[derive(Debug, Clone, Default)]
pub struct GroupCatalog {
    groups: Vec<ParameterGroup>,
}

impl GroupCatalog {
    /// Build the catalog with the built-in clinical groups
    #[must_use]
    pub fn builtin() -> Self {
        Self {
            groups: vec![
                ParameterGroup::new("anemia", ["hemoglobin", "hematocrit", "mcv", "mchc"]),
                ParameterGroup::new("bacterial_infection", ["leukocytes", "segmented_neutrophils"]),
                ParameterGroup::new("viral_infection", ["lymphocytes", "leukocytes"]),
                ParameterGroup::new("chronic_inflammation", ["monocytes", "segmented_neutrophils"]),
                ParameterGroup::new("allergy_parasitism", ["eosinophils", "leukocytes"]),
                ParameterGroup::new("coagulation_disorders", ["platelets"]),
            ],
        }
    }

    /// Build a catalog from explicit groups, keeping their order
    #[must_use]
    pub fn from_groups(groups: Vec<ParameterGroup>) -> Self {
        Self { groups }
    }

    /// Look up a group by name
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&ParameterGroup> {
        self.groups.iter().find(|group| group.name == name)
    }

    /// Iterate groups in declaration order
    pub fn iter(&self) -> impl Iterator<Item = &ParameterGroup> {
        self.groups.iter()
    }

    /// Number of groups
    #[must_use]
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    /// True if the catalog holds no groups
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}
