//! Frontend configuration module
//!
//! The browser has no process environment, so `UNIPORTAL_*` overrides are
//! captured at compile time and fed through the shared configuration loader.

use shared::config::PortalConfig;

/// Compile-time overrides for the portal configuration.
#[derive(Debug, Clone)]
pub struct FrontendConfig {
    /// JSON document from `UNIPORTAL_CONFIG`, layered under the overrides.
    document: Option<&'static str>,
    overrides: Vec<(&'static str, Option<&'static str>)>,
}

impl Default for FrontendConfig {
    fn default() -> Self {
        Self {
            document: option_env!("UNIPORTAL_CONFIG"),
            overrides: vec![
                ("UNIPORTAL_SESSION_KEY", option_env!("UNIPORTAL_SESSION_KEY")),
                (
                    "UNIPORTAL_ASSISTANT_DELAY_MS",
                    option_env!("UNIPORTAL_ASSISTANT_DELAY_MS"),
                ),
                ("UNIPORTAL_LOG_LEVEL", option_env!("UNIPORTAL_LOG_LEVEL")),
                ("UNIPORTAL_MAPS_URL", option_env!("UNIPORTAL_MAPS_URL")),
            ],
        }
    }
}

impl FrontendConfig {
    /// Create a new frontend configuration instance
    pub fn new() -> Self {
        Self::default()
    }

    fn lookup(&self, key: &str) -> Option<String> {
        self.overrides
            .iter()
            .find(|(name, _)| *name == key)
            .and_then(|(_, value)| value.map(str::to_string))
    }

    /// Resolved portal configuration. Invalid overrides fall back to the
    /// defaults with a warning.
    pub fn portal_config(&self) -> PortalConfig {
        PortalConfig::load(self.document, |key| self.lookup(key)).unwrap_or_else(|err| {
            log::warn!("ignoring invalid configuration overrides: {err}");
            PortalConfig::default()
        })
    }

    /// Level for the console logger.
    pub fn log_level(&self) -> log::Level {
        self.portal_config()
            .log_level
            .parse()
            .unwrap_or(log::Level::Info)
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_portal_config_is_valid() {
        let config = FrontendConfig::new().portal_config();
        assert!(config.validate().is_ok());
    }

    #[wasm_bindgen_test]
    fn test_unknown_key_is_absent() {
        assert!(FrontendConfig::new().lookup("UNIPORTAL_NOPE").is_none());
    }

    #[wasm_bindgen_test]
    fn test_debug_output() {
        let debug_str = format!("{:?}", FrontendConfig::new());
        assert!(debug_str.contains("FrontendConfig"));
    }
}
