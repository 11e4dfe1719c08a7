//! Environment-driven configuration
//!
//! All settings come from `PROPELME_`-prefixed environment variables, e.g.
//! `PROPELME_DATABASE_URL`, `PROPELME_GEMINI_API_KEY`, `PROPELME_BIND_ADDR`.
//! Everything has a working default except the external API keys; the
//! endpoints that need those report themselves unconfigured instead.

use crate::error::Result;
use serde::Deserialize;

fn default_app_name() -> String {
    "PropelMe".to_string()
}

fn default_environment() -> String {
    "production".to_string()
}

fn default_bind_addr() -> String {
    "127.0.0.1:8000".to_string()
}

fn default_database_url() -> String {
    "sqlite://propelme.db".to_string()
}

fn default_gemini_model() -> String {
    "gemini-2.0-flash-exp".to_string()
}

/// Application settings
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    #[serde(default = "default_app_name")]
    pub app_name: String,

    #[serde(default = "default_environment")]
    pub environment: String,

    /// Address the HTTP server binds to
    #[serde(default = "default_bind_addr")]
    pub bind_addr: String,

    /// SQLite database URL
    #[serde(default = "default_database_url")]
    pub database_url: String,

    /// Gemini API key; AI endpoints return 501 when unset
    #[serde(default)]
    pub gemini_api_key: Option<String>,

    #[serde(default = "default_gemini_model")]
    pub gemini_model: String,

    /// Eventbrite API key; event endpoints return 501 when unset
    #[serde(default)]
    pub eventbrite_api_key: Option<String>,
}

impl Settings {
    /// Load settings from the environment
    pub fn from_env() -> Result<Self> {
        let cfg = config::Config::builder()
            .add_source(config::Environment::with_prefix("PROPELME"))
            .build()?;

        Ok(cfg.try_deserialize()?)
    }

    pub fn has_gemini(&self) -> bool {
        self.gemini_api_key.as_deref().is_some_and(|k| !k.is_empty())
    }

    pub fn has_eventbrite(&self) -> bool {
        self.eventbrite_api_key
            .as_deref()
            .is_some_and(|k| !k.is_empty())
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            app_name: default_app_name(),
            environment: default_environment(),
            bind_addr: default_bind_addr(),
            database_url: default_database_url(),
            gemini_api_key: None,
            gemini_model: default_gemini_model(),
            eventbrite_api_key: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.bind_addr, "127.0.0.1:8000");
        assert!(!settings.has_gemini());
        assert!(!settings.has_eventbrite());
    }

    #[test]
    fn test_empty_key_is_not_configured() {
        let settings = Settings {
            gemini_api_key: Some(String::new()),
            ..Settings::default()
        };
        assert!(!settings.has_gemini());
    }
}
