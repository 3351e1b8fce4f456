use thiserror::Error;

/// Unified error type for the whole machbar workspace.
///
/// The classifier itself is total on its input and never produces one of
/// these; they come from the input boundary, catalog and config loading.
#[derive(Error, Debug)]
pub enum MachbarError {
    // ── Input boundary ─────────────────────────────────────────
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("example #{index} not found (available: 1-{available})")]
    ExampleNotFound { index: usize, available: usize },

    // ── Catalog errors ─────────────────────────────────────────
    #[error("catalog error: {0}")]
    Catalog(String),

    #[error("catalog validation failed: {field}: {reason}")]
    CatalogValidation { field: String, reason: String },

    // ── Config errors ──────────────────────────────────────────
    #[error("config error: {0}")]
    Config(String),

    // ── Generic wrappers ───────────────────────────────────────
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, MachbarError>;
