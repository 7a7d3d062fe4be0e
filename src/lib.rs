//! A Rust library for classifying veterinary hemogram deviations against
//! species-specific reference ranges, with tolerance-banded severity tiers,
//! correlated multi-parameter pattern detection, and clinical report
//! synthesis.

pub mod algorithm;
pub mod catalog;
pub mod config;
pub mod error;
pub mod models;

// Re-export the most common types for easier use
// Core types
pub use config::AnalyzerConfig;
pub use error::{HemalyzerError, Result};

// Catalogs
pub use catalog::{GroupCatalog, ParameterGroup, ReferenceCatalog, ReferenceRange, Species};

// Data model
pub use models::hemogram::Hemogram;
pub use models::report::{
    AnalysisReport, DeviationResult, Direction, IndividualFinding, JointFinding, ParameterResult,
    Severity,
};

// Analysis entry points
pub use algorithm::analyzer::Analyzer;
pub use algorithm::classify::{classify_deviation, severity_tier};
pub use algorithm::interpret::explain;
pub use algorithm::patterns::detect_joint_patterns;
pub use algorithm::synthesis::{Synthesis, synthesize};
