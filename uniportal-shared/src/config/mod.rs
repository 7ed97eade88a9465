//! # Configuration
//!
//! Runtime settings for the portal. Values are layered: built-in defaults,
//! then an optional JSON document, then `UNIPORTAL_*` key/value overrides
//! (compile-time values in the browser build).

use crate::errors::ConfigError;
use serde::{Deserialize, Serialize};

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// The main configuration structure for the portal.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct PortalConfig {
    /// Key of the boolean session flag in durable storage.
    pub session_key: String,

    /// Delay before the assistant widget posts its simulated reply.
    pub assistant_reply_delay_ms: u32,

    /// Logging level for the browser console logger.
    pub log_level: String,

    /// External map link shown under the campus map.
    pub maps_url: String,

    /// Support phone number shown on the help page.
    pub support_phone: String,

    /// Street address of the student service centre.
    pub support_address: String,

    /// Base URL of the personal calendar feeds.
    pub calendar_feed_base: String,
}

impl Default for PortalConfig {
    fn default() -> Self {
        Self::with_defaults()
    }
}

impl PortalConfig {
    /// Generates a default configuration.
    #[must_use]
    pub fn with_defaults() -> Self {
        Self {
            session_key: "portal_auth".to_string(),
            assistant_reply_delay_ms: 1000,
            log_level: "info".to_string(),
            maps_url: "https://maps.google.com".to_string(),
            support_phone: "13 00 12 34 56".to_string(),
            support_address: "757 Swanston St".to_string(),
            calendar_feed_base: "https://uni.edu.au/ical".to_string(),
        }
    }

    /// Parses a JSON document; missing fields keep their defaults.
    ///
    /// # Errors
    /// Returns [`ConfigError::Parse`] when the document is not valid JSON for
    /// this shape.
    pub fn from_json(document: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(document)?)
    }

    /// Applies `UNIPORTAL_*` overrides supplied by `lookup`.
    ///
    /// # Errors
    /// Returns [`ConfigError::InvalidOverride`] when a numeric override does
    /// not parse.
    pub fn apply_overrides<F>(mut self, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(key) = lookup("UNIPORTAL_SESSION_KEY") {
            self.session_key = key;
        }
        if let Some(raw) = lookup("UNIPORTAL_ASSISTANT_DELAY_MS") {
            self.assistant_reply_delay_ms =
                raw.trim()
                    .parse()
                    .map_err(|_| ConfigError::InvalidOverride {
                        key: "UNIPORTAL_ASSISTANT_DELAY_MS",
                        value: raw.clone(),
                    })?;
        }
        if let Some(level) = lookup("UNIPORTAL_LOG_LEVEL") {
            self.log_level = level.to_ascii_lowercase();
        }
        if let Some(url) = lookup("UNIPORTAL_MAPS_URL") {
            self.maps_url = url;
        }
        Ok(self)
    }

    /// Validate the configuration, collecting every problem found.
    ///
    /// # Errors
    /// Returns the list of problems when at least one check fails.
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        if self.session_key.trim().is_empty() {
            errors.push("Session key must not be empty.".to_string());
        }
        if self.assistant_reply_delay_ms == 0 {
            errors.push("Assistant reply delay must be greater than 0.".to_string());
        }
        if !LOG_LEVELS.contains(&self.log_level.as_str()) {
            errors.push(format!(
                "Unknown log level `{}`; expected one of {}.",
                self.log_level,
                LOG_LEVELS.join(", ")
            ));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Layers the optional JSON `document` over the defaults, applies
    /// overrides and validates, in that order.
    ///
    /// # Errors
    /// Returns the first parse failure or the collected validation problems.
    pub fn load<F>(document: Option<&str>, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let base = match document {
            Some(document) => Self::from_json(document)?,
            None => Self::with_defaults(),
        };
        let config = base.apply_overrides(lookup)?;
        config.validate().map_err(ConfigError::Invalid)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = PortalConfig::with_defaults();
        assert_eq!(config.session_key, "portal_auth");
        assert_eq!(config.assistant_reply_delay_ms, 1000);
        assert_eq!(config.log_level, "info");
        assert!(config.validate().is_ok());
        assert_eq!(config, PortalConfig::default());
    }

    #[test]
    fn test_from_json_keeps_missing_defaults() {
        let config = PortalConfig::from_json(r#"{ "session_key": "other_flag" }"#).unwrap();
        assert_eq!(config.session_key, "other_flag");
        assert_eq!(config.assistant_reply_delay_ms, 1000);
        assert_eq!(config.maps_url, "https://maps.google.com");
    }

    #[test]
    fn test_from_json_rejects_garbage() {
        let err = PortalConfig::from_json("not json").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_overrides_apply() {
        let config = PortalConfig::with_defaults()
            .apply_overrides(lookup_from(&[
                ("UNIPORTAL_SESSION_KEY", "flag"),
                ("UNIPORTAL_ASSISTANT_DELAY_MS", " 250 "),
                ("UNIPORTAL_LOG_LEVEL", "DEBUG"),
            ]))
            .unwrap();
        assert_eq!(config.session_key, "flag");
        assert_eq!(config.assistant_reply_delay_ms, 250);
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    fn test_invalid_delay_override() {
        let err = PortalConfig::with_defaults()
            .apply_overrides(lookup_from(&[("UNIPORTAL_ASSISTANT_DELAY_MS", "soon")]))
            .unwrap_err();
        match err {
            ConfigError::InvalidOverride { key, value } => {
                assert_eq!(key, "UNIPORTAL_ASSISTANT_DELAY_MS");
                assert_eq!(value, "soon");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_validate_collects_all_problems() {
        let config = PortalConfig {
            session_key: "  ".into(),
            assistant_reply_delay_ms: 0,
            log_level: "loud".into(),
            ..PortalConfig::with_defaults()
        };
        let errors = config.validate().unwrap_err();
        assert_eq!(errors.len(), 3);
        assert!(errors[2].contains("loud"));
    }

    #[test]
    fn test_load_reports_validation_failure() {
        let err =
            PortalConfig::load(None, lookup_from(&[("UNIPORTAL_SESSION_KEY", "")])).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(ref problems) if problems.len() == 1));
    }

    #[test]
    fn test_load_layers_document_under_overrides() {
        let document = r#"{ "session_key": "from_json", "maps_url": "https://maps.example" }"#;
        let config = PortalConfig::load(
            Some(document),
            lookup_from(&[("UNIPORTAL_SESSION_KEY", "from_env")]),
        )
        .unwrap();
        assert_eq!(config.session_key, "from_env");
        assert_eq!(config.maps_url, "https://maps.example");
        assert_eq!(config.assistant_reply_delay_ms, 1000);
    }

    #[test]
    fn test_load_rejects_malformed_document() {
        let err = PortalConfig::load(Some("{"), lookup_from(&[])).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }
}
