use thiserror::Error;

/// Errors raised while parsing or checking domain values.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    #[error("unknown product category: {0}")]
    UnknownCategory(String),

    #[error("unknown test type: {0}")]
    UnknownTestType(String),

    #[error("invalid version string: {0}")]
    InvalidVersion(String),
}

pub type Result<T> = std::result::Result<T, CoreError>;
