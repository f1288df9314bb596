use thiserror::Error;

/// Recurrence expansion errors
#[derive(Error, Debug)]
pub enum RfcError {
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Expansion error: {0}")]
    ExpansionError(String),
}

pub type RfcResult<T> = std::result::Result<T, RfcError>;
