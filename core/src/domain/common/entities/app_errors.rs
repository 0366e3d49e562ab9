use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    #[error("external service error: {0}")]
    ExternalServiceError(String),
}
