use std::time::Duration;

use stt_domain::DomainError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error("Validation error: missing field audio")]
    MissingAudio,

    #[error("Validation error: unsupported language '{0}'")]
    UnsupportedLanguage(String),

    #[error("Staging error: {0}")]
    Staging(DomainError),

    #[error("Recognition error: {0}")]
    Recognition(DomainError),

    #[error("Recognition timed out after {0:?}")]
    RecognitionTimeout(Duration),
}

impl ApplicationError {
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            ApplicationError::MissingAudio | ApplicationError::UnsupportedLanguage(_)
        )
    }
}
