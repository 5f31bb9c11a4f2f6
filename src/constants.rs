// SPDX-License-Identifier: PMPL-1.0-or-later

//! Values the web client derives from its injected configuration.
//!
//! [`WebConstants`] is built once at startup and then shared by reference
//! with the router and the i18n layer. Nothing here validates the input:
//! a missing prefix or locale propagates as `None`.

use crate::i18n::{Locale, LocaleCatalog};
use crate::routes::{Route, RouteTable};
use crate::types::AppConfig;
use anyhow::{anyhow, Context, Result};
use serde::Serialize;
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WebConstants {
    pub locales: LocaleCatalog,
    #[serde(rename = "fallbackLocale")]
    pub fallback_locale: Option<String>,
    #[serde(rename = "appRoutes")]
    pub app_routes: RouteTable,
    #[serde(rename = "PathPrefix")]
    pub path_prefix: Option<String>,
}

impl WebConstants {
    /// Derive the exported values from `config`.
    ///
    /// A missing `PathPrefix` builds routes under the empty prefix while
    /// `path_prefix` itself stays `None`.
    pub fn derive(config: &AppConfig) -> Self {
        let path_prefix = config.path_prefix.clone();
        let app_routes = RouteTable::with_prefix(path_prefix.as_deref().unwrap_or(""));
        log::debug!(
            "derived {} routes (prefix {:?}, fallback locale {:?})",
            app_routes.len(),
            path_prefix,
            config.default_locale
        );
        Self {
            locales: LocaleCatalog,
            fallback_locale: config.default_locale.clone(),
            app_routes,
            path_prefix,
        }
    }

    /// Parse an injected `AppConfig` JSON object and derive from it.
    ///
    /// Input that is not a JSON object is treated as a missing
    /// configuration and fails. Absent or wrong-typed fields inside the
    /// object do not.
    pub fn from_json(raw: &str) -> Result<Self> {
        let value: serde_json::Value =
            serde_json::from_str(raw).context("parsing injected app config")?;
        if !value.is_object() {
            return Err(anyhow!("app config is missing: expected a JSON object"));
        }
        let config: AppConfig =
            serde_json::from_value(value).context("decoding injected app config")?;
        Ok(Self::derive(&config))
    }

    pub fn load(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("reading app config {}", path.display()))?;
        Self::from_json(&raw).with_context(|| format!("loading {}", path.display()))
    }

    pub fn route(&self, route: Route) -> &str {
        self.app_routes.get(route)
    }

    /// The fallback locale, if it is set and names a catalog entry.
    pub fn fallback(&self) -> Option<Locale> {
        self.fallback_locale.as_deref().and_then(Locale::from_code)
    }
}
