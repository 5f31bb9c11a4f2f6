// SPDX-License-Identifier: PMPL-1.0-or-later

//! Layered server settings the client config is built from.
//!
//! Resolution order, later layers winning:
//! 1. built-in defaults
//! 2. `config.yaml` from an explicit path, or the first of
//!    `/etc/wakita/`, `$HOME/.config/wakita/`, `./`
//! 3. environment variables (see [`ENV_BINDINGS`])
//!
//! Sections unrelated to the web client (`db`, `smtp`, `auth.ldap`) may be
//! present in the file and are ignored.

use crate::scalar::{self, parse_bool, parse_value};
use crate::types::{AppConfig, UiConfig};
use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

pub const CONFIG_FILE_NAME: &str = "config.yaml";

/// Environment variable for each overridable setting, as `(setting, variable)`.
pub const ENV_BINDINGS: &[(&str, &str)] = &[
    ("http.cookie_hashkey", "COOKIE_HASHKEY"),
    ("http.port", "PORT"),
    ("http.secure_cookie", "COOKIE_SECURE"),
    ("http.backend_cookie_name", "SECURE_COOKIE_NAME"),
    ("http.frontend_cookie_name", "FRONTEND_COOKIE_NAME"),
    ("http.domain", "APP_DOMAIN"),
    ("http.path_prefix", "PATH_PREFIX"),
    ("analytics.enabled", "ANALYTICS_ENABLED"),
    ("analytics.id", "ANALYTICS_ID"),
    ("config.avatar_service", "CONFIG_AVATAR_SERVICE"),
    ("config.toast_timeout", "CONFIG_TOAST_TIMEOUT"),
    ("config.allow_guests", "CONFIG_ALLOW_GUESTS"),
    ("config.allow_registration", "CONFIG_ALLOW_REGISTRATION"),
    ("config.default_locale", "CONFIG_DEFAULT_LOCALE"),
    ("config.allow_external_api", "CONFIG_ALLOW_EXTERNAL_API"),
    ("config.show_active_countries", "CONFIG_SHOW_ACTIVE_COUNTRIES"),
    ("config.cleanup_retros_days_old", "CONFIG_CLEANUP_RETROS_DAYS_OLD"),
    ("config.cleanup_guests_days_old", "CONFIG_CLEANUP_GUESTS_DAYS_OLD"),
    ("auth.method", "AUTH_METHOD"),
];

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub http: HttpSettings,
    pub analytics: AnalyticsSettings,
    pub config: ClientSettings,
    pub auth: AuthSettings,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HttpSettings {
    pub cookie_hashkey: String,
    #[serde(deserialize_with = "scalar::number")]
    pub port: u16,
    #[serde(deserialize_with = "scalar::boolean")]
    pub secure_cookie: bool,
    pub backend_cookie_name: String,
    pub frontend_cookie_name: String,
    pub domain: String,
    pub path_prefix: String,
}

impl Default for HttpSettings {
    fn default() -> Self {
        Self {
            cookie_hashkey: "twister".to_string(),
            port: 8080,
            secure_cookie: true,
            backend_cookie_name: "userId".to_string(),
            frontend_cookie_name: "user".to_string(),
            domain: "wakita.dev".to_string(),
            path_prefix: String::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyticsSettings {
    #[serde(deserialize_with = "scalar::boolean")]
    pub enabled: bool,
    pub id: String,
}

impl Default for AnalyticsSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            id: "G-43J3W0QC6P".to_string(),
        }
    }
}

/// The `config` section: feature switches exposed to the client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientSettings {
    pub avatar_service: String,
    #[serde(deserialize_with = "scalar::number")]
    pub toast_timeout: u32,
    #[serde(deserialize_with = "scalar::boolean")]
    pub allow_guests: bool,
    #[serde(deserialize_with = "scalar::boolean")]
    pub allow_registration: bool,
    pub default_locale: String,
    #[serde(deserialize_with = "scalar::boolean")]
    pub allow_external_api: bool,
    #[serde(deserialize_with = "scalar::boolean")]
    pub show_active_countries: bool,
    #[serde(deserialize_with = "scalar::number")]
    pub cleanup_retros_days_old: u32,
    #[serde(deserialize_with = "scalar::number")]
    pub cleanup_guests_days_old: u32,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            avatar_service: "goadorable".to_string(),
            toast_timeout: 1000,
            allow_guests: true,
            allow_registration: true,
            default_locale: "en".to_string(),
            allow_external_api: false,
            show_active_countries: false,
            cleanup_retros_days_old: 180,
            cleanup_guests_days_old: 180,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AuthSettings {
    pub method: String,
}

impl Default for AuthSettings {
    fn default() -> Self {
        Self {
            method: "normal".to_string(),
        }
    }
}

impl Settings {
    /// Resolve all layers. A missing config file is not an error, an
    /// unreadable or malformed one is.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let mut settings = match explicit.map(Path::to_path_buf).or_else(discover) {
            Some(path) => Self::from_file(&path)?,
            None => {
                log::debug!("no {} found, using defaults", CONFIG_FILE_NAME);
                Self::default()
            }
        };
        settings.apply_env(|key| env::var(key).ok())?;
        Ok(settings)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        log::debug!("reading settings from {}", path.display());
        let raw = fs::read_to_string(path)
            .with_context(|| format!("reading settings file {}", path.display()))?;
        Self::from_yaml_str(&raw).with_context(|| format!("parsing {}", path.display()))
    }

    pub fn from_yaml_str(raw: &str) -> Result<Self> {
        if raw.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(raw)?)
    }

    /// Apply environment overrides. `lookup` is `std::env::var` in
    /// production and a map in tests.
    pub fn apply_env<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        for &(setting, var) in ENV_BINDINGS {
            if let Some(value) = lookup(var) {
                log::debug!("{} overridden by ${}", setting, var);
                self.set(setting, &value)
                    .with_context(|| format!("applying ${} to {}", var, setting))?;
            }
        }
        Ok(())
    }

    fn set(&mut self, setting: &str, value: &str) -> Result<()> {
        match setting {
            "http.cookie_hashkey" => self.http.cookie_hashkey = value.to_string(),
            "http.port" => self.http.port = parse_value(value)?,
            "http.secure_cookie" => self.http.secure_cookie = parse_bool(value)?,
            "http.backend_cookie_name" => self.http.backend_cookie_name = value.to_string(),
            "http.frontend_cookie_name" => self.http.frontend_cookie_name = value.to_string(),
            "http.domain" => self.http.domain = value.to_string(),
            "http.path_prefix" => self.http.path_prefix = value.to_string(),
            "analytics.enabled" => self.analytics.enabled = parse_bool(value)?,
            "analytics.id" => self.analytics.id = value.to_string(),
            "config.avatar_service" => self.config.avatar_service = value.to_string(),
            "config.toast_timeout" => self.config.toast_timeout = parse_value(value)?,
            "config.allow_guests" => self.config.allow_guests = parse_bool(value)?,
            "config.allow_registration" => self.config.allow_registration = parse_bool(value)?,
            "config.default_locale" => self.config.default_locale = value.to_string(),
            "config.allow_external_api" => self.config.allow_external_api = parse_bool(value)?,
            "config.show_active_countries" => {
                self.config.show_active_countries = parse_bool(value)?
            }
            "config.cleanup_retros_days_old" => {
                self.config.cleanup_retros_days_old = parse_value(value)?
            }
            "config.cleanup_guests_days_old" => {
                self.config.cleanup_guests_days_old = parse_value(value)?
            }
            "auth.method" => self.auth.method = value.to_string(),
            other => return Err(anyhow!("unknown setting {}", other)),
        }
        Ok(())
    }

    /// Registration is only offered with the built-in account store.
    pub fn registration_enabled(&self) -> bool {
        self.config.allow_registration && self.auth.method == "normal"
    }

    /// The object injected into the index page for the client.
    pub fn app_config(&self, version: &str) -> AppConfig {
        AppConfig {
            avatar_service: self.config.avatar_service.clone(),
            toast_timeout: i64::from(self.config.toast_timeout),
            allow_guests: self.config.allow_guests,
            allow_registration: self.registration_enabled(),
            default_locale: Some(self.config.default_locale.clone()),
            auth_method: self.auth.method.clone(),
            app_version: version.to_string(),
            cookie_name: self.http.frontend_cookie_name.clone(),
            path_prefix: Some(self.http.path_prefix.clone()),
            api_enabled: self.config.allow_external_api,
            cleanup_guests_days_old: i64::from(self.config.cleanup_guests_days_old),
            cleanup_retrospectives_days_old: i64::from(self.config.cleanup_retros_days_old),
            show_active_countries: self.config.show_active_countries,
        }
    }

    pub fn ui_config(&self, version: &str) -> UiConfig {
        UiConfig {
            analytics_enabled: self.analytics.enabled,
            analytics_id: self.analytics.id.clone(),
            app_config: self.app_config(version),
            active_alerts: Vec::new(),
        }
    }
}

/// Directories searched for `config.yaml`, in priority order.
pub fn search_paths() -> Vec<PathBuf> {
    let mut dirs = vec![PathBuf::from("/etc/wakita")];
    if let Ok(home) = env::var("HOME") {
        dirs.push(Path::new(&home).join(".config").join("wakita"));
    }
    dirs.push(PathBuf::from("."));
    dirs
}

fn discover() -> Option<PathBuf> {
    search_paths()
        .into_iter()
        .map(|dir| dir.join(CONFIG_FILE_NAME))
        .find(|path| path.is_file())
}
