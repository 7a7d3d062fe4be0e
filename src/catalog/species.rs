//! Species covered by the reference catalogs.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Animal species with built-in hematology reference data
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Species {
    /// Domestic dog
    Canine,
    /// Domestic cat
    Feline,
}

impl Species {
    /// Parse a species identifier as supplied by the request layer.
    ///
    /// Accepts English names and the Portuguese labels found on upstream
    /// laboratory reports. Returns `None` for anything unrecognized; an
    /// unknown species degrades to an empty analysis rather than an error.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "canine" | "dog" | "cão" | "cao" => Some(Self::Canine),
            "feline" | "cat" | "gato" => Some(Self::Feline),
            _ => None,
        }
    }

    /// Get a descriptive name for this species
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Canine => "Canine",
            Self::Feline => "Feline",
        }
    }
}

impl fmt::Display for Species {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.description())
    }
}
