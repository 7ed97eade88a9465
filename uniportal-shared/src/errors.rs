//! Error types shared by the portal core and its host adapters.

use thiserror::Error;

/// Failure reported by a durable key-value store backing the session flag.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    /// The host has no durable store (private browsing, SSR, tests).
    #[error("durable storage is unavailable: {0}")]
    Unavailable(String),

    /// The stored value could not be encoded or decoded.
    #[error("stored value for `{key}` could not be (de)serialized: {reason}")]
    Serialization {
        /// Key that was being read or written.
        key: String,
        /// Underlying reason reported by the host.
        reason: String,
    },

    /// Any other host failure.
    #[error("storage error: {0}")]
    Other(String),
}

/// Failure while loading or validating a [`crate::config::PortalConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration document is not valid JSON for the expected shape.
    #[error("invalid configuration document: {0}")]
    Parse(#[from] serde_json::Error),

    /// An override value could not be parsed.
    #[error("invalid value for {key}: {value}")]
    InvalidOverride {
        /// Override key, e.g. `UNIPORTAL_ASSISTANT_DELAY_MS`.
        key: &'static str,
        /// Raw value supplied.
        value: String,
    },

    /// One or more semantic checks failed.
    #[error("configuration is invalid: {}", .0.join("; "))]
    Invalid(Vec<String>),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_storage_error_messages() {
        let err = StorageError::Unavailable("no window".into());
        assert_eq!(err.to_string(), "durable storage is unavailable: no window");

        let err = StorageError::Serialization {
            key: "portal_auth".into(),
            reason: "expected bool".into(),
        };
        assert!(err.to_string().contains("portal_auth"));
        assert!(err.to_string().contains("expected bool"));
    }

    #[test]
    fn test_config_error_joins_messages() {
        let err = ConfigError::Invalid(vec!["first".into(), "second".into()]);
        assert_eq!(err.to_string(), "configuration is invalid: first; second");
    }

    #[test]
    fn test_config_error_from_serde() {
        let parse_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: ConfigError = parse_err.into();
        assert!(matches!(err, ConfigError::Parse(_)));
    }
}
