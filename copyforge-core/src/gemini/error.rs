use thiserror::Error;

/// Failures from the generation endpoint. Every variant is surfaced to the
/// user as one generic alert; the detail lives in the logs.
#[derive(Debug, Clone, Error)]
pub enum GenerateError {
    #[error("request to the generation endpoint failed: {0}")]
    Transport(String),
    #[error("generation endpoint returned {status}: {message}")]
    Api { status: u16, message: String },
}
