#[cfg(test)]
mod tests {
    use hemalyzer::{AnalyzerConfig, Direction, HemalyzerError, Severity, classify_deviation, severity_tier};

    #[test]
    fn test_absent_value_is_normal() {
        let result = classify_deviation(None, 12.0, 18.0, &AnalyzerConfig::default()).unwrap();
        assert!(!result.altered);
        assert_eq!(result.direction, Direction::None);
        assert_eq!(result.severity, Severity::None);
        assert_eq!(result.deviation_percent, 0.0);
        assert_eq!(result.status_label(), "normal");
    }

    #[test]
    fn test_values_at_raw_bounds_not_altered() {
        let config = AnalyzerConfig::default();
        assert!(!classify_deviation(Some(12.0), 12.0, 18.0, &config).unwrap().altered);
        assert!(!classify_deviation(Some(18.0), 12.0, 18.0, &config).unwrap().altered);
    }

    #[test]
    fn test_value_at_adjusted_bound_not_altered() {
        // min = 16 makes min * 0.15 exact in binary, so the adjusted lower
        // bound is exactly 13.6
        let config = AnalyzerConfig::default();
        let at_bound = classify_deviation(Some(13.6), 16.0, 32.0, &config).unwrap();
        assert!(!at_bound.altered);

        let below_bound = classify_deviation(Some(13.5), 16.0, 32.0, &config).unwrap();
        assert!(below_bound.altered);
        assert_eq!(below_bound.direction, Direction::Low);
    }

    #[test]
    fn test_low_deviation_uses_raw_min_denominator() {
        // 6.0 against 12-18: adjusted lower bound 10.2, deviation
        // (12 - 6) / 12 * 100 = 50% exactly, inclusive into moderate
        let result = classify_deviation(Some(6.0), 12.0, 18.0, &AnalyzerConfig::default()).unwrap();
        assert!(result.altered);
        assert_eq!(result.direction, Direction::Low);
        assert_eq!(result.deviation_percent, 50.0);
        assert_eq!(result.severity, Severity::Moderate);
        assert_eq!(result.status_label(), "low_moderate");
    }

    #[test]
    fn test_severity_tier_boundaries_inclusive_low() {
        let config = AnalyzerConfig::default();
        assert_eq!(severity_tier(30.0, &config), Severity::Mild);
        assert_eq!(severity_tier(30.0001, &config), Severity::Moderate);
        assert_eq!(severity_tier(50.0, &config), Severity::Moderate);
        assert_eq!(severity_tier(50.0001, &config), Severity::Severe);
        assert_eq!(severity_tier(100.0, &config), Severity::Severe);
    }

    #[test]
    fn test_canine_hemoglobin_11_inside_band() {
        // 12 - 1.8 = 10.2 adjusted bound; 11.0 deviates only 8.33% from the
        // raw bound and stays inside the band
        let result = classify_deviation(Some(11.0), 12.0, 18.0, &AnalyzerConfig::default()).unwrap();
        assert!(!result.altered);
        assert_eq!(result.status_label(), "normal");
    }

    #[test]
    fn test_canine_leukocytosis_moderate() {
        // 17000 + 2550 = 19550 adjusted bound; 25000 deviates
        // (25000 - 17000) / 17000 * 100 = 47.06%
        let result =
            classify_deviation(Some(25000.0), 6000.0, 17000.0, &AnalyzerConfig::default()).unwrap();
        assert!(result.altered);
        assert_eq!(result.direction, Direction::High);
        assert!((result.deviation_percent - 47.0588).abs() < 1e-3);
        assert_eq!(result.severity, Severity::Moderate);
        assert_eq!(result.status_label(), "high_moderate");
    }

    #[test]
    fn test_zero_min_without_low_deviation_is_fine() {
        // Basophils-style range: min of 0 never divides unless a value
        // falls below the adjusted bound
        let result = classify_deviation(Some(100.0), 0.0, 200.0, &AnalyzerConfig::default()).unwrap();
        assert!(!result.altered);
    }

    #[test]
    fn test_zero_min_with_low_deviation_is_configuration_error() {
        let error = classify_deviation(Some(-5.0), 0.0, 200.0, &AnalyzerConfig::default())
            .expect_err("negative reading against a zero min must not divide");
        assert!(matches!(error, HemalyzerError::Configuration(_)));
    }

    #[test]
    fn test_custom_tolerance_widens_band() {
        let config = AnalyzerConfig {
            tolerance: 0.5,
            ..AnalyzerConfig::default()
        };
        // 25000 sits inside 17000 + 8500 = 25500
        let result = classify_deviation(Some(25000.0), 6000.0, 17000.0, &config).unwrap();
        assert!(!result.altered);
    }
}
