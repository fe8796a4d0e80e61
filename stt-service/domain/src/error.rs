use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    #[error("{service} service error: {message}")]
    ExternalService { service: String, message: String },

    #[error("{service} rejected the configured credentials")]
    Unauthorized { service: String },

    #[error("staging error: {0}")]
    Staging(String),

    #[error("internal error: {0}")]
    Internal(String),
}

impl DomainError {
    pub fn external_service_error(service: &str, message: &str) -> Self {
        Self::ExternalService {
            service: service.to_string(),
            message: message.to_string(),
        }
    }

    pub fn unauthorized(service: &str) -> Self {
        Self::Unauthorized {
            service: service.to_string(),
        }
    }

    pub fn staging_error(message: &str) -> Self {
        Self::Staging(message.to_string())
    }

    pub fn internal_error(message: &str) -> Self {
        Self::Internal(message.to_string())
    }
}
