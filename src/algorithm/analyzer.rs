//! Analysis orchestrator.

use std::collections::BTreeMap;

use crate::algorithm::classify::classify_deviation;
use crate::algorithm::interpret::explain;
use crate::algorithm::patterns::detect_joint_patterns;
use crate::algorithm::synthesis::synthesize;
use crate::catalog::{GroupCatalog, ReferenceCatalog, Species};
use crate::config::AnalyzerConfig;
use crate::error::Result;
use crate::models::hemogram::Hemogram;
use crate::models::report::{AnalysisReport, IndividualFinding, ParameterResult};

/// Hemogram analyzer wiring classification, interpretation, pattern
/// detection, and synthesis over a pair of borrowed catalogs.
///
/// The analyzer holds no mutable state; catalogs are constructed once at
/// startup and shared by reference, so concurrent `analyze` calls need no
/// coordination.
#[derive(Debug, Clone)]
pub struct Analyzer<'a> {
    references: &'a ReferenceCatalog,
    groups: &'a GroupCatalog,
    config: AnalyzerConfig,
}

impl<'a> Analyzer<'a> {
    /// Create an analyzer with the default configuration
    #[must_use]
    pub fn new(references: &'a ReferenceCatalog, groups: &'a GroupCatalog) -> Self {
        Self::with_config(references, groups, AnalyzerConfig::default())
    }

    /// Create an analyzer with an explicit configuration
    #[must_use]
    pub const fn with_config(
        references: &'a ReferenceCatalog,
        groups: &'a GroupCatalog,
        config: AnalyzerConfig,
    ) -> Self {
        Self {
            references,
            groups,
            config,
        }
    }

    /// The configuration this analyzer classifies with
    #[must_use]
    pub const fn config(&self) -> &AnalyzerConfig {
        &self.config
    }

    /// Analyze a hemogram for the given species.
    ///
    /// Readings without a reference entry for the species are excluded
    /// from the per-parameter block and logged at debug level; they still
    /// never block analysis of the rest of the panel. The only error path
    /// is malformed catalog data surfacing from classification, in which
    /// case no partial report is returned.
    pub fn analyze(&self, hemogram: &Hemogram, species: Species) -> Result<AnalysisReport> {
        let mut per_parameter = BTreeMap::new();
        let mut individual_findings = Vec::new();

        for (parameter, value) in hemogram.iter() {
            let Some(range) = self.references.get(species, parameter) else {
                if self.config.log_skipped {
                    log::debug!(
                        "no {species} reference entry for '{parameter}', excluded from analysis"
                    );
                }
                continue;
            };
            let Some(value) = value else {
                continue;
            };

            let deviation = classify_deviation(Some(value), range.min, range.max, &self.config)?;
            per_parameter.insert(
                parameter.to_string(),
                ParameterResult {
                    value,
                    reference: range.display_text(),
                    status: deviation.status_label(),
                    altered: deviation.altered,
                    deviation_percent: deviation.deviation_percent,
                },
            );

            if deviation.altered {
                individual_findings.push(IndividualFinding {
                    parameter: parameter.to_string(),
                    direction: deviation.direction,
                    severity: deviation.severity,
                    deviation_percent: deviation.deviation_percent,
                    explanation: explain(parameter, deviation.direction, deviation.severity),
                });
            }
        }

        // Group scanning runs over the full panel, independent of which
        // parameters were individually analyzable.
        let joint_findings =
            detect_joint_patterns(hemogram, species, self.references, self.groups, &self.config);

        let synthesis = synthesize(&individual_findings, &joint_findings, &self.config);

        Ok(AnalysisReport {
            per_parameter,
            individual_findings,
            joint_findings,
            summary: synthesis.summary,
            recommendations: synthesis.recommendations,
        })
    }
}
