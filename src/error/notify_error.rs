use thiserror::Error;

/// Error type covering every failure the notification module can raise.
///
/// The kinds are mutually exclusive per call: configuration problems are
/// caught before any network I/O, transport failures cover the HTTPS
/// exchange itself, and remote API errors carry the description the service
/// returned. Errors are raised to the host unchanged and never retried.
#[derive(Error, Debug)]
pub enum NotifyError {
    /// A required credential is missing or blank; no network call was made.
    #[error("Bot Token and Chat ID are required.")]
    Configuration,

    /// The HTTPS exchange failed at the network level (DNS, connect, TLS).
    #[error("transport error: {message}")]
    Transport {
        message: String,
        #[source]
        source: Option<anyhow::Error>,
    },

    /// The service answered but flagged the request as failed.
    #[error("Telegram API error: {description}")]
    RemoteApi { description: String },

    /// The test probe completed without a transport error but yielded no
    /// usable payload.
    #[error("No response received from API")]
    NoResponse,
}

impl NotifyError {
    /// Wraps a transport-level failure, keeping the cause on the source chain.
    pub fn transport(source: impl Into<anyhow::Error>) -> Self {
        let source = source.into();
        NotifyError::Transport {
            message: source.to_string(),
            source: Some(source),
        }
    }
}

/// Type alias for Result with NotifyError to simplify function signatures
pub type NotifyResult<T> = Result<T, NotifyError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_configuration_message_is_exact() {
        assert_eq!(
            NotifyError::Configuration.to_string(),
            "Bot Token and Chat ID are required."
        );
    }

    #[test]
    fn test_transport_wraps_cause_description() {
        let err = NotifyError::transport(anyhow::anyhow!("connection refused"));
        assert!(err.to_string().contains("connection refused"));
        match err {
            NotifyError::Transport { source, .. } => assert!(source.is_some()),
            other => panic!("expected Transport, got {:?}", other),
        }
    }

    #[test]
    fn test_remote_api_carries_description() {
        let err = NotifyError::RemoteApi {
            description: "chat not found".to_string(),
        };
        assert_eq!(err.to_string(), "Telegram API error: chat not found");
    }
}
