//! Runtime configuration for the confwatch frontend.
//!
//! Every field has a default, so an empty JSON object is a valid config.
//! The host page may embed an override document; anything it leaves out
//! falls back to [`AppConfig::default`].

use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;
use crate::route::RedirectPolicy;
use crate::theme::Theme;

pub const DEFAULT_MOUNT_ID: &str = "app";
pub const DEFAULT_STORAGE_KEY: &str = "vite-ui-theme";
pub const DEFAULT_CHUNK_BASE: &str = "/chunks";
pub const DEFAULT_BREAKPOINT_PX: u32 = 768;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Id of the element the application is rendered into.
    pub mount_id: String,
    /// Local storage key holding the persisted theme.
    pub storage_key: String,
    pub default_theme: Theme,
    pub redirect: RedirectPolicy,
    /// URL prefix that lazily loaded view chunks are fetched from.
    pub chunk_base: String,
    /// Viewport width at which the navigation bar switches from the sheet to inline links.
    pub breakpoint_px: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            mount_id: DEFAULT_MOUNT_ID.to_string(),
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            default_theme: Theme::default(),
            redirect: RedirectPolicy::default(),
            chunk_base: DEFAULT_CHUNK_BASE.to_string(),
            breakpoint_px: DEFAULT_BREAKPOINT_PX,
        }
    }
}

impl AppConfig {
    /// Parses an override document, filling missing fields with defaults.
    pub fn from_json(source: &str) -> Result<Self, ConfigError> {
        let config: AppConfig = serde_json::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        match &self.redirect {
            RedirectPolicy::HonorTarget(target) if !target.starts_with('/') => {
                Err(ConfigError::RedirectTarget(target.clone()))
            }
            _ => Ok(()),
        }
    }

    /// The media query matching viewports at or above the breakpoint.
    pub fn wide_media_query(&self) -> String {
        format!("(min-width: {}px)", self.breakpoint_px)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.mount_id, "app");
        assert_eq!(config.default_theme, Theme::Dark);
        assert_eq!(config.redirect, RedirectPolicy::Canonical);
        assert_eq!(config.wide_media_query(), "(min-width: 768px)");
    }

    #[test]
    fn test_empty_document_is_default() {
        let config = AppConfig::from_json("{}").unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_partial_override() {
        let config = AppConfig::from_json(
            r#"{ "storage_key": "confwatch-theme", "default_theme": "light", "redirect": { "honor_target": "/v1" } }"#,
        )
        .unwrap();

        assert_eq!(config.storage_key, "confwatch-theme");
        assert_eq!(config.default_theme, Theme::Light);
        assert_eq!(config.redirect, RedirectPolicy::HonorTarget("/v1".to_string()));
        assert_eq!(config.chunk_base, DEFAULT_CHUNK_BASE);
    }

    #[test]
    fn test_malformed_document() {
        assert!(matches!(
            AppConfig::from_json("{ not json"),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_rejects_relative_redirect_target() {
        assert!(matches!(
            AppConfig::from_json(r#"{ "redirect": { "honor_target": "v1" } }"#),
            Err(ConfigError::RedirectTarget(_))
        ));
    }

    #[test]
    fn test_canonical_path_is_not_configurable() {
        let config = AppConfig::from_json(r#"{ "canonical_path": "/home" }"#).unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(
            crate::route::RouteTable::from_config(&config).settle("/"),
            ("/v1".to_string(), crate::route::View::Homepage)
        );
    }
}
