//! Joint pattern detection across parameter groups.
//!
//! Unlike individual classification, group scanning uses the raw reference
//! interval with no tolerance band: correlated mild shifts across several
//! related parameters are clinically meaningful even when no single one
//! crosses the band.

use crate::catalog::{GroupCatalog, ReferenceCatalog, Species};
use crate::config::AnalyzerConfig;
use crate::models::hemogram::Hemogram;
use crate::models::report::JointFinding;
use itertools::Itertools;

/// Scan every group in catalog order and emit a finding for each group
/// where at least `config.joint_min_altered` members fall strictly outside
/// their raw reference range.
///
/// Members without a value or without reference data for the species are
/// skipped; an unknown species simply yields no findings.
#[must_use]
pub fn detect_joint_patterns(
    hemogram: &Hemogram,
    species: Species,
    references: &ReferenceCatalog,
    groups: &GroupCatalog,
    config: &AnalyzerConfig,
) -> Vec<JointFinding> {
    let mut findings = Vec::new();

    for group in groups.iter() {
        let mut altered_members: Vec<String> = Vec::new();

        for member in &group.members {
            let Some(range) = references.get(species, member) else {
                if config.log_skipped {
                    log::debug!(
                        "no {species} reference for '{member}', skipped in group '{}'",
                        group.name
                    );
                }
                continue;
            };
            let Some(value) = hemogram.value(member) else {
                continue;
            };
            if range.is_outside_raw(value) {
                altered_members.push(member.clone());
            }
        }

        if altered_members.len() >= config.joint_min_altered {
            let recommendation = format!(
                "Multiple parameters in the {} group ({}) show discrete alterations. \
                 Additional monitoring and investigation are recommended.",
                group.name,
                altered_members.iter().join(", ")
            );
            findings.push(JointFinding {
                group: group.name.clone(),
                altered_members,
                recommendation,
            });
        }
    }

    findings
}
