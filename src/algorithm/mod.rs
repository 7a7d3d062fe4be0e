//! Analysis algorithms: deviation classification, interpretation, joint
//! pattern detection, and report synthesis.

pub mod analyzer;
pub mod classify;
pub mod interpret;
pub mod patterns;
pub mod synthesis;
