//! Analysis report model.
//!
//! Everything the engine produces is plain data: the surrounding service
//! layer persists or serializes it, the engine never does.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Direction of a deviation relative to the reference interval
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Within the tolerated interval
    #[default]
    None,
    /// Below the tolerance-adjusted lower bound
    Low,
    /// Above the tolerance-adjusted upper bound
    High,
}

impl Direction {
    /// Lowercase label used in status strings and explanation keys
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Low => "low",
            Self::High => "high",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Severity tier of an altered value
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Not altered
    #[default]
    None = 0,
    /// Deviation within the mild tier
    Mild = 1,
    /// Deviation within the moderate tier
    Moderate = 2,
    /// Deviation beyond the moderate tier
    Severe = 3,
}

impl Severity {
    /// Convert a numeric severity level (0-3) to `Severity`
    #[must_use]
    pub const fn from_i32(level: i32) -> Self {
        match level {
            1 => Self::Mild,
            2 => Self::Moderate,
            3 => Self::Severe,
            _ => Self::None,
        }
    }

    /// Get the numeric value for this severity tier
    #[must_use]
    pub const fn as_i32(self) -> i32 {
        self as i32
    }

    /// Lowercase label used in status strings and explanation keys
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Mild => "mild",
            Self::Moderate => "moderate",
            Self::Severe => "severe",
        }
    }

    /// Get a descriptive name for this severity tier
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::None => "None",
            Self::Mild => "Mild",
            Self::Moderate => "Moderate",
            Self::Severe => "Severe",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.description())
    }
}

/// Outcome of classifying one measurement against its reference range
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DeviationResult {
    /// True iff the value falls outside the tolerance-adjusted bounds
    pub altered: bool,
    /// Side of the interval the value fell on
    pub direction: Direction,
    /// Severity tier derived from the percentage deviation
    pub severity: Severity,
    /// Percentage deviation from the nearest raw reference bound
    pub deviation_percent: f64,
}

impl DeviationResult {
    /// Result for a value inside the tolerated interval (or absent)
    #[must_use]
    pub const fn normal() -> Self {
        Self {
            altered: false,
            direction: Direction::None,
            severity: Severity::None,
            deviation_percent: 0.0,
        }
    }

    /// Status string: `normal`, or `<direction>_<severity>` when altered
    #[must_use]
    pub fn status_label(&self) -> String {
        match self.direction {
            Direction::None => "normal".to_string(),
            _ => format!("{}_{}", self.direction.label(), self.severity.label()),
        }
    }
}

impl Default for DeviationResult {
    fn default() -> Self {
        Self::normal()
    }
}

/// Per-parameter block of the analysis report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParameterResult {
    /// Measured value
    pub value: f64,
    /// Reference interval as printed on reports, e.g. `12 - 18 g/dL`
    pub reference: String,
    /// `normal` or `<direction>_<severity>`
    pub status: String,
    /// True iff the value crossed the tolerance band
    pub altered: bool,
    /// Percentage deviation from the nearest raw reference bound
    pub deviation_percent: f64,
}

/// Clinical interpretation of a single altered parameter
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndividualFinding {
    /// Parameter the finding refers to
    pub parameter: String,
    /// Side of the reference interval the value fell on
    pub direction: Direction,
    /// Severity tier of the deviation
    pub severity: Severity,
    /// Percentage deviation from the nearest raw reference bound
    pub deviation_percent: f64,
    /// Human-readable clinical explanation
    pub explanation: String,
}

/// Correlated-abnormality signal across a parameter group
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JointFinding {
    /// Name of the triggered group
    pub group: String,
    /// Members outside their raw reference range, in group order
    pub altered_members: Vec<String>,
    /// Generated monitoring/investigation recommendation
    pub recommendation: String,
}

/// Complete result of analyzing one hemogram
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalysisReport {
    /// Classification block per analyzable parameter, keyed by name
    pub per_parameter: BTreeMap<String, ParameterResult>,
    /// Interpretations of individually altered parameters, in panel order
    pub individual_findings: Vec<IndividualFinding>,
    /// Triggered group patterns, in catalog order
    pub joint_findings: Vec<JointFinding>,
    /// One-sentence clinical summary
    pub summary: String,
    /// Ordered recommendation list, never empty after synthesis
    pub recommendations: Vec<String>,
}

impl AnalysisReport {
    /// Total number of findings, individual and joint combined
    #[must_use]
    pub fn finding_count(&self) -> usize {
        self.individual_findings.len() + self.joint_findings.len()
    }

    /// Highest severity among the individual findings
    #[must_use]
    pub fn max_severity(&self) -> Severity {
        self.individual_findings
            .iter()
            .map(|finding| finding.severity)
            .max()
            .unwrap_or(Severity::None)
    }
}
