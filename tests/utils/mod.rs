//! Shared helpers for integration tests.

use hemalyzer::Hemogram;

/// Initialize logging once per test binary
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// A canine panel with every parameter at a mid-range value
#[must_use]
pub fn canine_normal_panel() -> Hemogram {
    Hemogram::new()
        .with("erythrocytes", 7.0)
        .with("hemoglobin", 15.0)
        .with("hematocrit", 45.0)
        .with("mcv", 70.0)
        .with("mch", 21.0)
        .with("mchc", 34.0)
        .with("reticulocytes", 50.0)
        .with("leukocytes", 10000.0)
        .with("segmented_neutrophils", 6000.0)
        .with("lymphocytes", 2000.0)
        .with("monocytes", 500.0)
        .with("eosinophils", 800.0)
        .with("basophils", 100.0)
        .with("platelets", 300_000.0)
        .with("total_protein", 7.0)
}
