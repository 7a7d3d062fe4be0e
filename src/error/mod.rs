//! Error handling for the hemogram analysis engine.

/// Errors that can occur while loading catalogs or classifying readings
#[derive(Debug, thiserror::Error)]
pub enum HemalyzerError {
    /// Malformed catalog data, detected at load time or when a deviation
    /// computation would divide by a non-positive reference bound
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Catalog JSON that could not be parsed
    #[error("Catalog format error: {0}")]
    CatalogFormat(#[from] serde_json::Error),
}

/// Alias for Result with `HemalyzerError`
pub type Result<T> = std::result::Result<T, HemalyzerError>;
