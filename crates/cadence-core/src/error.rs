use thiserror::Error;

/// Core-level errors
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error(
        r#"invalid frequency "{0}": it must be one of "Daily", "Weekly", "Monthly", "Yearly", or empty for a one-time window"#
    )]
    InvalidFrequency(String),
}
