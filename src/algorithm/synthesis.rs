//! Clinical summary and recommendation synthesis.

use crate::config::AnalyzerConfig;
use crate::models::report::{IndividualFinding, JointFinding, Severity};

/// Summary sentence plus ordered recommendation list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Synthesis {
    /// One-sentence clinical summary
    pub summary: String,
    /// Ordered recommendations, never empty
    pub recommendations: Vec<String>,
}

/// Aggregate the findings into a summary and recommendations.
///
/// The summary reports the most severe tier present, with its count; the
/// recommendation list is built additively (severe, then moderate, then
/// joint findings) and falls back to routine follow-up when nothing else
/// applied. Pure aggregation, no failure path.
#[must_use]
pub fn synthesize(
    individual_findings: &[IndividualFinding],
    joint_findings: &[JointFinding],
    config: &AnalyzerConfig,
) -> Synthesis {
    let severe = count_by_severity(individual_findings, Severity::Severe);
    let moderate = count_by_severity(individual_findings, Severity::Moderate);
    let mild = count_by_severity(individual_findings, Severity::Mild);

    let summary = if severe > 0 {
        format!("Hemogram shows {severe} severe alteration(s) requiring immediate attention.")
    } else if moderate > 0 {
        format!("Hemogram shows {moderate} moderate alteration(s) requiring investigation.")
    } else if mild > 0 {
        format!("Hemogram shows {mild} mild alteration(s) requiring monitoring.")
    } else {
        format!(
            "Hemogram within normal limits considering the {:.0}% tolerance margin.",
            config.tolerance * 100.0
        )
    };

    let mut recommendations = Vec::new();
    if severe > 0 {
        recommendations
            .push("Urgent veterinary consultation due to the severe alterations identified.".to_string());
    }
    if moderate > 0 {
        recommendations.push(
            "Veterinary consultation to investigate the moderate alterations identified.".to_string(),
        );
    }
    if !joint_findings.is_empty() {
        recommendations.push(
            "Additional monitoring recommended due to multiple correlated discrete alterations."
                .to_string(),
        );
    }
    if recommendations.is_empty() {
        recommendations.push("Maintain routine veterinary follow-up.".to_string());
    }

    Synthesis {
        summary,
        recommendations,
    }
}

fn count_by_severity(findings: &[IndividualFinding], severity: Severity) -> usize {
    findings
        .iter()
        .filter(|finding| finding.severity == severity)
        .count()
}
