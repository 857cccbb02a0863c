//! Configuration management for the phone MCP server.
//!
//! This module handles loading and validating configuration from environment variables.
//! It avoids polluting stdout (which MCP uses for communication) by loading the .env
//! file through dotenvy, which stays silent.

use crate::domain::NormalizedPhone;
use crate::error::{ConfigError, ConfigResult};
use std::env;

/// The agency's office WhatsApp line used for booking requests.
pub const DEFAULT_OFFICE_WHATSAPP: &str = "254723464058";

/// Configuration for the phone MCP server.
#[derive(Debug, Clone)]
pub struct Config {
    /// Office number that receives booking requests over WhatsApp
    pub office_whatsapp: NormalizedPhone,

    /// Message pre-filled into generated links when the caller gives none
    pub default_link_message: Option<String>,

    /// Log level (default: "error")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// All variables are optional:
    /// - `OFFICE_WHATSAPP_NUMBER`: office booking line, any accepted Kenyan spelling
    ///   (default: 254723464058)
    /// - `DEFAULT_LINK_MESSAGE`: fallback message for deep links (default: none)
    /// - `LOG_LEVEL`: Logging level (default: "error")
    pub fn from_env() -> ConfigResult<Self> {
        // Try to load .env file if it exists (but don't fail if it doesn't)
        let _ = dotenvy::dotenv();

        let office_raw = env::var("OFFICE_WHATSAPP_NUMBER")
            .unwrap_or_else(|_| DEFAULT_OFFICE_WHATSAPP.to_string());
        let office_whatsapp =
            NormalizedPhone::parse(&office_raw).map_err(|_| ConfigError::InvalidValue {
                var: "OFFICE_WHATSAPP_NUMBER".to_string(),
                reason: format!("Not a Kenyan mobile number, got: {}", office_raw),
            })?;

        let default_link_message = env::var("DEFAULT_LINK_MESSAGE")
            .ok()
            .filter(|m| !m.trim().is_empty());

        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "error".to_string());

        Ok(Config {
            office_whatsapp,
            default_link_message,
            log_level,
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            office_whatsapp: NormalizedPhone::parse(DEFAULT_OFFICE_WHATSAPP)
                .expect("default office number is a valid Kenyan number"),
            default_link_message: None,
            log_level: "error".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::env;

    // Helper to set and unset env vars for testing
    struct EnvGuard {
        vars: Vec<String>,
    }

    impl EnvGuard {
        fn new() -> Self {
            EnvGuard { vars: Vec::new() }
        }

        fn set(&mut self, key: &str, value: &str) {
            env::set_var(key, value);
            self.vars.push(key.to_string());
        }
    }

    impl Drop for EnvGuard {
        fn drop(&mut self) {
            for var in &self.vars {
                env::remove_var(var);
            }
        }
    }

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.office_whatsapp.as_str(), "+254723464058");
        assert!(config.default_link_message.is_none());
        assert_eq!(config.log_level, "error");
    }

    #[test]
    #[serial]
    fn test_config_from_env_valid() {
        let mut guard = EnvGuard::new();
        guard.set("OFFICE_WHATSAPP_NUMBER", "0705 982 249");
        guard.set("DEFAULT_LINK_MESSAGE", "Hello from the agency");
        guard.set("LOG_LEVEL", "debug");

        let config = Config::from_env().expect("config should load");
        assert_eq!(config.office_whatsapp.as_str(), "+254705982249");
        assert_eq!(
            config.default_link_message.as_deref(),
            Some("Hello from the agency")
        );
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    #[serial]
    fn test_config_invalid_office_number() {
        let mut guard = EnvGuard::new();
        guard.set("OFFICE_WHATSAPP_NUMBER", "12345");

        match Config::from_env() {
            Err(ConfigError::InvalidValue { var, .. }) => {
                assert_eq!(var, "OFFICE_WHATSAPP_NUMBER");
            }
            other => panic!("Expected InvalidValue error, got: {:?}", other),
        }
    }

    #[test]
    #[serial]
    fn test_config_blank_message_ignored() {
        let mut guard = EnvGuard::new();
        guard.set("DEFAULT_LINK_MESSAGE", "   ");

        let config = Config::from_env().expect("config should load");
        assert!(config.default_link_message.is_none());
    }
}
