//! Configuration for the hemogram analyzer.

/// Configuration for deviation classification and pattern detection
#[derive(Debug, Clone)]
pub struct AnalyzerConfig {
    /// Fractional tolerance applied beyond each reference bound (0.15 = 15%)
    pub tolerance: f64,
    /// Highest deviation percent (inclusive) still classified as mild
    pub mild_max_percent: f64,
    /// Highest deviation percent (inclusive) still classified as moderate
    pub moderate_max_percent: f64,
    /// Minimum raw-range violations within a group before a joint finding
    /// is emitted
    pub joint_min_altered: usize,
    /// Log parameters and species skipped for missing reference data
    pub log_skipped: bool,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            tolerance: 0.15,
            mild_max_percent: 30.0,
            moderate_max_percent: 50.0,
            joint_min_altered: 2,
            log_skipped: true,
        }
    }
}
