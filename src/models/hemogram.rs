//! Hemogram panel input.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A panel of laboratory measurements keyed by parameter name.
///
/// A key mapped to `None` models a parameter the laboratory listed without
/// a usable numeric value; it is skipped by every analysis step. Readings
/// iterate in parameter-name order so analysis output does not depend on
/// how the panel was assembled.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Hemogram {
    readings: BTreeMap<String, Option<f64>>,
}

impl Hemogram {
    /// Create an empty panel
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a reading; `None` marks a parameter reported without a value
    pub fn insert(&mut self, parameter: impl Into<String>, value: impl Into<Option<f64>>) {
        self.readings.insert(parameter.into(), value.into());
    }

    /// Builder-style variant of [`Hemogram::insert`]
    #[must_use]
    pub fn with(mut self, parameter: impl Into<String>, value: impl Into<Option<f64>>) -> Self {
        self.insert(parameter, value);
        self
    }

    /// Value for a parameter, `None` if missing or reported without a value
    #[must_use]
    pub fn value(&self, parameter: &str) -> Option<f64> {
        self.readings.get(parameter).copied().flatten()
    }

    /// True if the parameter appears in the panel, valued or not
    #[must_use]
    pub fn contains(&self, parameter: &str) -> bool {
        self.readings.contains_key(parameter)
    }

    /// Iterate readings in parameter-name order
    pub fn iter(&self) -> impl Iterator<Item = (&str, Option<f64>)> {
        self.readings.iter().map(|(name, value)| (name.as_str(), *value))
    }

    /// Number of readings in the panel
    #[must_use]
    pub fn len(&self) -> usize {
        self.readings.len()
    }

    /// True if the panel holds no readings
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.readings.is_empty()
    }
}

impl<P: Into<String>, V: Into<Option<f64>>> FromIterator<(P, V)> for Hemogram {
    fn from_iter<T: IntoIterator<Item = (P, V)>>(iter: T) -> Self {
        Self {
            readings: iter
                .into_iter()
                .map(|(parameter, value)| (parameter.into(), value.into()))
                .collect(),
        }
    }
}
