//! Data model: hemogram input and analysis report output.

pub mod hemogram;
pub mod report;

pub use hemogram::Hemogram;
pub use report::{
    AnalysisReport, DeviationResult, Direction, IndividualFinding, JointFinding, ParameterResult,
    Severity,
};
