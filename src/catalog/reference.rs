//! Species-specific hematology reference ranges.
//!
//! The built-in table covers the full canine and feline hemogram panels.
//! External catalogs can be loaded from JSON; every constructor that takes
//! untrusted data validates each range before it is accepted.

use crate::catalog::Species;
use crate::error::{HemalyzerError, Result};
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Reference interval for a single hemogram parameter
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReferenceRange {
    /// Canonical parameter name (lowercase, e.g. `hemoglobin`)
    pub parameter: String,
    /// Lower reference bound
    pub min: f64,
    /// Upper reference bound
    pub max: f64,
    /// Unit the bounds are expressed in
    pub unit: String,
}

impl ReferenceRange {
    /// Render the interval the way reports print it, e.g. `12 - 18 g/dL`
    #[must_use]
    pub fn display_text(&self) -> String {
        format!("{} - {} {}", self.min, self.max, self.unit)
    }

    /// True if `value` falls strictly outside the raw interval, ignoring
    /// any tolerance band
    #[must_use]
    pub fn is_outside_raw(&self, value: f64) -> bool {
        value < self.min || value > self.max
    }

    fn validate(&self) -> Result<()> {
        if !self.min.is_finite() || !self.max.is_finite() {
            return Err(HemalyzerError::Configuration(format!(
                "reference range for '{}' has a non-finite bound",
                self.parameter
            )));
        }
        if self.min >= self.max {
            return Err(HemalyzerError::Configuration(format!(
                "reference range for '{}' must satisfy min < max, got {} >= {}",
                self.parameter, self.min, self.max
            )));
        }
        Ok(())
    }
}

/// Bounds and unit as they appear in external catalog JSON
#[derive(Debug, Clone, Deserialize)]
struct RawRange {
    min: f64,
    max: f64,
    unit: String,
}

/// Immutable lookup table of reference ranges keyed by species and parameter
#[derive(Debug, Clone, Default)]
pub struct ReferenceCatalog {
    ranges: FxHashMap<Species, FxHashMap<String, ReferenceRange>>,
}

/// Built-in canine panel, values per lab reference literature
const CANINE_RANGES: &[(&str, f64, f64, &str)] = &[
    ("erythrocytes", 5.5, 8.5, "10⁶/µL"),
    ("hemoglobin", 12.0, 18.0, "g/dL"),
    ("hematocrit", 37.0, 55.0, "%"),
    ("mcv", 60.0, 77.0, "fL"),
    ("mch", 19.0, 24.0, "pg"),
    ("mchc", 32.0, 36.0, "%"),
    ("reticulocytes", 11.0, 92.0, "×10³/µL"),
    ("leukocytes", 6000.0, 17000.0, "/µL"),
    ("segmented_neutrophils", 2700.0, 9400.0, "/µL"),
    ("lymphocytes", 900.0, 4700.0, "/µL"),
    ("monocytes", 100.0, 1300.0, "/µL"),
    ("eosinophils", 100.0, 2100.0, "/µL"),
    ("basophils", 0.0, 200.0, "/µL"),
    ("platelets", 186_000.0, 545_000.0, "/µL"),
    ("total_protein", 6.0, 8.0, "g/dL"),
];

/// Built-in feline panel
const FELINE_RANGES: &[(&str, f64, f64, &str)] = &[
    ("erythrocytes", 5.0, 10.0, "10⁶/µL"),
    ("hemoglobin", 8.0, 15.0, "g/dL"),
    ("hematocrit", 31.0, 48.0, "%"),
    ("mcv", 39.0, 55.0, "fL"),
    ("mch", 13.0, 17.0, "pg"),
    ("mchc", 30.0, 36.0, "%"),
    ("reticulocytes", 9.0, 61.0, "×10³/µL"),
    ("leukocytes", 5500.0, 19500.0, "/µL"),
    ("segmented_neutrophils", 2300.0, 11600.0, "/µL"),
    ("lymphocytes", 900.0, 6000.0, "/µL"),
    ("monocytes", 0.0, 700.0, "/µL"),
    ("eosinophils", 100.0, 1800.0, "/µL"),
    ("basophils", 0.0, 200.0, "/µL"),
    ("platelets", 195_000.0, 624_000.0, "/µL"),
    ("total_protein", 6.0, 8.0, "g/dL"),
];

impl ReferenceCatalog {
    /// Build the catalog with the built-in canine and feline panels
    #[must_use]
    pub fn builtin() -> Self {
        let mut ranges = FxHashMap::default();
        ranges.insert(Species::Canine, species_table(CANINE_RANGES));
        ranges.insert(Species::Feline, species_table(FELINE_RANGES));
        Self { ranges }
    }

    /// Build a catalog from explicit entries, validating each range
    pub fn from_entries(
        entries: impl IntoIterator<Item = (Species, ReferenceRange)>,
    ) -> Result<Self> {
        let mut catalog = Self::default();
        for (species, range) in entries {
            catalog.insert(species, range)?;
        }
        Ok(catalog)
    }

    /// Load a catalog from JSON of the shape
    /// `{"canine": {"hemoglobin": {"min": 12, "max": 18, "unit": "g/dL"}}}`.
    ///
    /// Species keys that do not parse are skipped with a warning; missing
    /// reference data is a coverage gap, not a clinical signal. Malformed
    /// ranges are rejected.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let parsed: HashMap<String, HashMap<String, RawRange>> = serde_json::from_str(json)?;
        let mut catalog = Self::default();
        for (species_name, table) in parsed {
            let Some(species) = Species::parse(&species_name) else {
                log::warn!("unknown species '{species_name}' in reference catalog, skipping");
                continue;
            };
            for (parameter, raw) in table {
                catalog.insert(
                    species,
                    ReferenceRange {
                        parameter: parameter.to_lowercase(),
                        min: raw.min,
                        max: raw.max,
                        unit: raw.unit,
                    },
                )?;
            }
        }
        Ok(catalog)
    }

    /// Add a single range, validating it first
    pub fn insert(&mut self, species: Species, range: ReferenceRange) -> Result<()> {
        range.validate()?;
        self.ranges
            .entry(species)
            .or_default()
            .insert(range.parameter.clone(), range);
        Ok(())
    }

    /// Look up the range for a (species, parameter) pair
    #[must_use]
    pub fn get(&self, species: Species, parameter: &str) -> Option<&ReferenceRange> {
        self.ranges.get(&species)?.get(parameter)
    }

    /// All ranges for a species, sorted by parameter name.
    ///
    /// This is the accessor the surrounding layer uses to render reference
    /// panels; an unknown or uncovered species yields an empty list.
    #[must_use]
    pub fn ranges_for(&self, species: Species) -> Vec<&ReferenceRange> {
        let mut ranges: Vec<&ReferenceRange> = self
            .ranges
            .get(&species)
            .map(|table| table.values().collect())
            .unwrap_or_default();
        ranges.sort_by(|a, b| a.parameter.cmp(&b.parameter));
        ranges
    }

    /// Number of ranges across all species
    #[must_use]
    pub fn len(&self) -> usize {
        self.ranges.values().map(FxHashMap::len).sum()
    }

    /// True if the catalog holds no ranges at all
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn species_table(rows: &[(&str, f64, f64, &str)]) -> FxHashMap<String, ReferenceRange> {
    rows.iter()
        .map(|&(parameter, min, max, unit)| {
            (
                parameter.to_string(),
                ReferenceRange {
                    parameter: parameter.to_string(),
                    min,
                    max,
                    unit: unit.to_string(),
                },
            )
        })
        .collect()
}
