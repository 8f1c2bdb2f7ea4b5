//! # Client configuration: `barber-club.toml`
//!
//! Settings the web client needs at startup: where the backend lives and which
//! verifications gate which actions.
//!
//! ## Structure
//!
//! ```toml
//! [api]
//! base_url = "https://api.example.com/api"
//!
//! [policy]
//! email_required_for = ["create_booking"]
//! phone_required_for = []
//! ```
//!
//! All sections derive `Default`, so a missing or empty file is the default
//! configuration. [`AppConfig::load`] reads the file from the platform config
//! directory on native builds (`~/.config/barber-club/barber-club.toml` on Linux);
//! the browser build has no file and starts from the defaults.
//!
//! `BARBER_API_URL` overrides the base URL on top of either: read at compile time on
//! every platform, and at runtime (plus `.env`) on native.

use api::client::DEFAULT_BASE_URL;
use api::ApiClient;
use serde::{Deserialize, Serialize};

use crate::policy::VerificationPolicy;

/// Environment variable overriding [`ApiConfig::base_url`].
pub const API_URL_ENV: &str = "BARBER_API_URL";

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub policy: VerificationPolicy,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

impl AppConfig {
    /// Builder method to set the backend base URL.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.api.base_url = base_url.into();
        self
    }

    /// Startup configuration: the config file where there is one, then the
    /// environment overrides.
    pub fn load() -> Self {
        #[cfg(not(target_arch = "wasm32"))]
        {
            let config = Self::default_path()
                .map(|path| Self::load_from(&path))
                .unwrap_or_default();
            config.with_env_overrides()
        }
        #[cfg(target_arch = "wasm32")]
        {
            Self::from_env()
        }
    }

    /// `barber-club/barber-club.toml` under the platform config directory.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn default_path() -> Option<std::path::PathBuf> {
        dirs::config_dir().map(|dir| dir.join("barber-club").join(Self::filename()))
    }

    /// Read a config file. A missing file is the default; an unreadable or invalid
    /// one is logged and ignored.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_from(path: &std::path::Path) -> Self {
        let text = match std::fs::read_to_string(path) {
            Ok(text) => text,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Self::default(),
            Err(e) => {
                tracing::warn!("Failed to read {}: {}", path.display(), e);
                return Self::default();
            }
        };
        match Self::from_toml(&text) {
            Ok(config) => {
                tracing::debug!(path = %path.display(), "Loaded config");
                config
            }
            Err(e) => {
                tracing::warn!("Ignoring invalid {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Defaults plus the `BARBER_API_URL` override, if set.
    pub fn from_env() -> Self {
        Self::default().with_env_overrides()
    }

    fn with_env_overrides(mut self) -> Self {
        if let Some(url) = option_env!("BARBER_API_URL") {
            self.api.base_url = url.to_string();
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            dotenvy::dotenv().ok();
            if let Ok(url) = std::env::var(API_URL_ENV) {
                if !url.trim().is_empty() {
                    self.api.base_url = url;
                }
            }
        }

        self
    }

    /// The well-known filename for the config file.
    pub fn filename() -> &'static str {
        "barber-club.toml"
    }

    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    /// Serialize to TOML string.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    /// Unauthenticated client for the configured backend.
    pub fn client(&self) -> ApiClient {
        ApiClient::new(&self.api.base_url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::policy::Action;

    #[test]
    fn test_empty_toml_is_default() {
        let config = AppConfig::from_toml("").unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.api.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.policy.email_required_for, vec![Action::CreateBooking]);
    }

    #[test]
    fn test_policy_override() {
        let config = AppConfig::from_toml(
            r#"
            [api]
            base_url = "https://api.barber.club/api"

            [policy]
            email_required_for = []
            phone_required_for = ["create_booking", "update_profile"]
            "#,
        )
        .unwrap();
        assert_eq!(config.client().base_url(), "https://api.barber.club/api");
        assert!(config.policy.email_required_for.is_empty());
        assert_eq!(config.policy.phone_required_for.len(), 2);
    }

    #[test]
    fn test_toml_roundtrip() {
        let config = AppConfig::default().with_base_url("http://10.0.0.2:4000/api");
        let text = config.to_toml().unwrap();
        assert_eq!(AppConfig::from_toml(&text).unwrap(), config);
    }

    #[test]
    fn test_load_from_file() {
        let dir = std::env::temp_dir().join(format!("barber_club_config_{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join(AppConfig::filename());

        // Missing file falls back to defaults
        assert_eq!(AppConfig::load_from(&path), AppConfig::default());

        std::fs::write(&path, "[policy]\nemail_required_for = []\n").unwrap();
        let config = AppConfig::load_from(&path);
        assert!(config.policy.email_required_for.is_empty());
        assert_eq!(config.api.base_url, DEFAULT_BASE_URL);

        // Invalid file is ignored rather than fatal
        std::fs::write(&path, "[policy]\nemail_required_for = [\"fly\"]\n").unwrap();
        assert_eq!(AppConfig::load_from(&path), AppConfig::default());

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_unknown_action_is_rejected() {
        assert!(AppConfig::from_toml("[policy]\nemail_required_for = [\"fly\"]").is_err());
    }
}
