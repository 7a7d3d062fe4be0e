mod utils;

#[cfg(test)]
mod tests {
    use crate::utils;
    use hemalyzer::{
        AnalyzerConfig, GroupCatalog, Hemogram, ReferenceCatalog, Species, detect_joint_patterns,
    };

    fn scan(hemogram: &Hemogram) -> Vec<hemalyzer::JointFinding> {
        detect_joint_patterns(
            hemogram,
            Species::Canine,
            &ReferenceCatalog::builtin(),
            &GroupCatalog::builtin(),
            &AnalyzerConfig::default(),
        )
    }

    #[test]
    fn test_two_raw_violations_trigger_group() {
        utils::init_logging();
        // both barely above their raw maxima, well inside the 15% band
        let hemogram = Hemogram::new()
            .with("segmented_neutrophils", 10000.0)
            .with("leukocytes", 18000.0);

        let findings = scan(&hemogram);
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].group, "bacterial_infection");
        // group-declared order, not panel order
        assert_eq!(
            findings[0].altered_members,
            ["leukocytes", "segmented_neutrophils"]
        );
        assert!(findings[0].recommendation.contains("bacterial_infection"));
        assert!(findings[0].recommendation.contains("monitoring"));
    }

    #[test]
    fn test_single_violation_never_triggers() {
        let hemogram = utils::canine_normal_panel().with("leukocytes", 20000.0);
        assert!(scan(&hemogram).is_empty());
    }

    #[test]
    fn test_absent_values_do_not_count() {
        let hemogram = Hemogram::new()
            .with("leukocytes", 18000.0)
            .with("segmented_neutrophils", None);
        assert!(scan(&hemogram).is_empty());
    }

    #[test]
    fn test_findings_follow_catalog_order() {
        let hemogram = Hemogram::new()
            // anemia group members below their raw minima
            .with("hemoglobin", 11.5)
            .with("hematocrit", 36.0)
            // bacterial_infection members above their raw maxima
            .with("leukocytes", 18000.0)
            .with("segmented_neutrophils", 10000.0);

        let findings = scan(&hemogram);
        let groups: Vec<&str> = findings.iter().map(|f| f.group.as_str()).collect();
        assert_eq!(groups, ["anemia", "bacterial_infection"]);
        assert_eq!(findings[0].altered_members, ["hemoglobin", "hematocrit"]);
    }

    #[test]
    fn test_uncovered_species_yields_nothing() {
        let hemogram = Hemogram::new()
            .with("leukocytes", 18000.0)
            .with("segmented_neutrophils", 10000.0);
        let empty_catalog = ReferenceCatalog::default();

        let findings = detect_joint_patterns(
            &hemogram,
            Species::Canine,
            &empty_catalog,
            &GroupCatalog::builtin(),
            &AnalyzerConfig::default(),
        );
        assert!(findings.is_empty());
    }

    #[test]
    fn test_threshold_is_configurable() {
        let config = AnalyzerConfig {
            joint_min_altered: 1,
            ..AnalyzerConfig::default()
        };
        let hemogram = Hemogram::new().with("platelets", 150_000.0);

        let findings = detect_joint_patterns(
            &hemogram,
            Species::Canine,
            &ReferenceCatalog::builtin(),
            &GroupCatalog::builtin(),
            &config,
        );
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].group, "coagulation_disorders");
    }
}
