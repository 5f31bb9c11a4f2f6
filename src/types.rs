// SPDX-License-Identifier: PMPL-1.0-or-later

//! Client-facing configuration objects.
//!
//! `AppConfig` is the object the server injects into the index page and the
//! web client reads at startup. Field names follow the injected JSON
//! (PascalCase). Every field may be absent on input: the two fields the
//! client derives values from (`PathPrefix`, `DefaultLocale`) stay `None`
//! when missing, the rest fall back to their type default. A field of the
//! wrong type is read the same way as a missing one, so decoding an object
//! never fails.

use crate::scalar;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct AppConfig {
    #[serde(deserialize_with = "scalar::lenient_string")]
    pub avatar_service: String,
    #[serde(deserialize_with = "scalar::lenient_int")]
    pub toast_timeout: i64,
    #[serde(deserialize_with = "scalar::lenient_bool")]
    pub allow_guests: bool,
    #[serde(deserialize_with = "scalar::lenient_bool")]
    pub allow_registration: bool,
    #[serde(deserialize_with = "scalar::lenient_opt_string")]
    pub default_locale: Option<String>,
    #[serde(deserialize_with = "scalar::lenient_string")]
    pub auth_method: String,
    #[serde(deserialize_with = "scalar::lenient_string")]
    pub app_version: String,
    #[serde(deserialize_with = "scalar::lenient_string")]
    pub cookie_name: String,
    #[serde(deserialize_with = "scalar::lenient_opt_string")]
    pub path_prefix: Option<String>,
    #[serde(rename = "APIEnabled", deserialize_with = "scalar::lenient_bool")]
    pub api_enabled: bool,
    #[serde(deserialize_with = "scalar::lenient_int")]
    pub cleanup_guests_days_old: i64,
    #[serde(deserialize_with = "scalar::lenient_int")]
    pub cleanup_retrospectives_days_old: i64,
    #[serde(deserialize_with = "scalar::lenient_bool")]
    pub show_active_countries: bool,
}

impl AppConfig {
    /// Config carrying only the two values the client derives from.
    pub fn with_prefix_and_locale(path_prefix: &str, default_locale: &str) -> Self {
        Self {
            path_prefix: Some(path_prefix.to_string()),
            default_locale: Some(default_locale.to_string()),
            ..Self::default()
        }
    }
}

/// Envelope rendered into the index page alongside `AppConfig`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct UiConfig {
    #[serde(deserialize_with = "scalar::lenient_bool")]
    pub analytics_enabled: bool,
    #[serde(rename = "AnalyticsID", deserialize_with = "scalar::lenient_string")]
    pub analytics_id: String,
    pub app_config: AppConfig,
    /// Site-wide alerts; owned by the alert store and passed through as-is.
    pub active_alerts: Vec<serde_json::Value>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_injected_field_names() {
        let raw = r#"{
            "AvatarService": "dicebear",
            "ToastTimeout": 2500,
            "AllowGuests": false,
            "AllowRegistration": true,
            "DefaultLocale": "ru",
            "AuthMethod": "ldap",
            "AppVersion": "1.2.3",
            "CookieName": "user",
            "PathPrefix": "/retro",
            "APIEnabled": true,
            "CleanupGuestsDaysOld": 30,
            "CleanupRetrospectivesDaysOld": 90,
            "ShowActiveCountries": true
        }"#;
        let config: AppConfig = serde_json::from_str(raw).expect("parse");
        assert_eq!(config.avatar_service, "dicebear");
        assert_eq!(config.toast_timeout, 2500);
        assert_eq!(config.default_locale.as_deref(), Some("ru"));
        assert_eq!(config.path_prefix.as_deref(), Some("/retro"));
        assert!(config.api_enabled);
        assert_eq!(config.cleanup_retrospectives_days_old, 90);
    }

    #[test]
    fn missing_fields_are_permitted() {
        let config: AppConfig = serde_json::from_str("{}").expect("parse");
        assert_eq!(config.path_prefix, None);
        assert_eq!(config.default_locale, None);
        assert_eq!(config.toast_timeout, 0);
    }

    #[test]
    fn wrong_typed_fields_fall_back() {
        let raw = r#"{
            "PathPrefix": "/app",
            "DefaultLocale": 42,
            "ToastTimeout": "1000",
            "CleanupGuestsDaysOld": -1,
            "AllowGuests": "yes",
            "AvatarService": ["not", "a", "string"],
            "APIEnabled": null
        }"#;
        let config: AppConfig = serde_json::from_str(raw).expect("lenient parse");
        assert_eq!(config.path_prefix.as_deref(), Some("/app"));
        assert_eq!(config.default_locale.as_deref(), Some("42"));
        assert_eq!(config.toast_timeout, 1000);
        assert_eq!(config.cleanup_guests_days_old, -1);
        assert!(config.allow_guests);
        assert_eq!(config.avatar_service, "");
        assert!(!config.api_enabled);
    }

    #[test]
    fn ui_config_field_names() {
        let ui = UiConfig {
            analytics_enabled: true,
            analytics_id: "G-TEST".to_string(),
            ..UiConfig::default()
        };
        let value = serde_json::to_value(&ui).expect("serialize");
        assert_eq!(value["AnalyticsID"], "G-TEST");
        assert_eq!(value["AnalyticsEnabled"], true);
        assert!(value["AppConfig"]["PathPrefix"].is_null());
        assert_eq!(value["ActiveAlerts"], serde_json::json!([]));
    }
}
