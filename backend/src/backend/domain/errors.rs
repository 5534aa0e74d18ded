use crate::backend::chat::ChatProviderError;

/// Domain-level error taxonomy. Nothing here is fatal to the process; every
/// failure is scoped to a single request.
#[derive(Debug, thiserror::Error)]
pub enum DomainError {
    /// Unknown token or id; no mutation has occurred
    #[error("{0} not found")]
    NotFound(&'static str),

    /// Malformed input that cannot be clamped into validity
    #[error("validation error: {0}")]
    Validation(String),

    /// Chat provider failure that the caller chose to propagate
    #[error("chat provider error: {0}")]
    Provider(#[from] ChatProviderError),

    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

pub type DomainResult<T> = Result<T, DomainError>;
