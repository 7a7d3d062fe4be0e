//! Tolerance-banded deviation classification.
//!
//! A value only counts as clinically altered once it crosses the reference
//! interval widened by the configured tolerance (15% by default). The
//! deviation percentage is still computed against the raw bound, so a value
//! just past the band already reports the full distance from the interval.

use crate::config::AnalyzerConfig;
use crate::error::{HemalyzerError, Result};
use crate::models::report::{DeviationResult, Direction, Severity};

/// Classify one measurement against a reference interval.
///
/// An absent value yields the normal result immediately. `min < max` is the
/// catalog's responsibility and is not re-checked here; a non-positive
/// bound is only rejected on the branch that would divide by it.
pub fn classify_deviation(
    value: Option<f64>,
    min: f64,
    max: f64,
    config: &AnalyzerConfig,
) -> Result<DeviationResult> {
    let Some(value) = value else {
        return Ok(DeviationResult::normal());
    };

    let adjusted_min = min - min * config.tolerance;
    let adjusted_max = max + max * config.tolerance;

    if value < adjusted_min {
        let percent = deviation_percent(min - value, min, "min")?;
        Ok(DeviationResult {
            altered: true,
            direction: Direction::Low,
            severity: severity_tier(percent, config),
            deviation_percent: percent,
        })
    } else if value > adjusted_max {
        let percent = deviation_percent(value - max, max, "max")?;
        Ok(DeviationResult {
            altered: true,
            direction: Direction::High,
            severity: severity_tier(percent, config),
            deviation_percent: percent,
        })
    } else {
        Ok(DeviationResult::normal())
    }
}

/// Map a percentage deviation onto a severity tier.
///
/// Boundaries are inclusive on the lower tier: exactly `mild_max_percent`
/// is mild, exactly `moderate_max_percent` is moderate.
#[must_use]
pub fn severity_tier(percent: f64, config: &AnalyzerConfig) -> Severity {
    if percent <= config.mild_max_percent {
        Severity::Mild
    } else if percent <= config.moderate_max_percent {
        Severity::Moderate
    } else {
        Severity::Severe
    }
}

fn deviation_percent(delta: f64, bound: f64, which: &str) -> Result<f64> {
    if bound <= 0.0 {
        return Err(HemalyzerError::Configuration(format!(
            "reference {which} bound must be positive to compute a deviation, got {bound}"
        )));
    }
    Ok(delta / bound * 100.0)
}
