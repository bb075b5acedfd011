//! Service-level errors.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ServiceError {
    #[error(transparent)]
    Core(#[from] persona_core::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Rate limit exceeded, retry after {retry_after_secs}s")]
    RateLimited { retry_after_secs: u64 },

    #[error("Result store error: {0}")]
    Store(String),

    #[error("Avatar lookup failed: {0}")]
    AvatarLookup(String),

    #[error("AI analysis failed: {0}")]
    Ai(String),

    #[error("Tracing setup failed: {0}")]
    Telemetry(String),
}

pub type ServiceResult<T> = std::result::Result<T, ServiceError>;

impl ServiceError {
    /// Whether the caller caused the failure (bad handle, too many requests)
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            ServiceError::RateLimited { .. }
                | ServiceError::Core(persona_core::Error::MalformedInput(_))
                | ServiceError::Core(persona_core::Error::InvalidHandle { .. })
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_errors() {
        assert!(ServiceError::RateLimited { retry_after_secs: 5 }.is_client_error());
        assert!(ServiceError::from(persona_core::Error::MalformedInput("x".into())).is_client_error());
        assert!(!ServiceError::Store("down".into()).is_client_error());
    }

    #[test]
    fn test_display() {
        let err = ServiceError::RateLimited { retry_after_secs: 42 };
        assert_eq!(err.to_string(), "Rate limit exceeded, retry after 42s");
    }
}
