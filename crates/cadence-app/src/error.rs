use thiserror::Error;

/// Application-level errors
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Override \"{name}\": {source}")]
    OverrideError {
        name: String,
        #[source]
        source: cadence_service::error::ServiceError,
    },
}

pub type AppResult<T> = std::result::Result<T, AppError>;
