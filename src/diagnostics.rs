// SPDX-License-Identifier: PMPL-1.0-or-later

//! Advisory consistency checks over derived client values.
//!
//! Derivation never validates its input, so a fallback locale without
//! translations or a malformed prefix only shows up in the browser. These
//! checks surface such cases ahead of time. They are warnings only and
//! never turn a config into an error.

use crate::constants::WebConstants;
use crate::i18n::{is_valid_iso639_1, Locale};
use crate::routes::Route;
use anyhow::Result;
use colored::Colorize;
use regex::Regex;
use std::sync::OnceLock;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Ok,
    Warn,
}

impl Level {
    fn tag(&self) -> String {
        match self {
            Level::Ok => "OK".green().to_string(),
            Level::Warn => "WARN".yellow().to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub label: &'static str,
    pub level: Level,
    pub detail: String,
}

impl Diagnostic {
    fn ok(label: &'static str, detail: String) -> Self {
        Self {
            label,
            level: Level::Ok,
            detail,
        }
    }

    fn warning(label: &'static str, detail: String) -> Self {
        log::warn!("{}: {}", label, detail);
        Self {
            label,
            level: Level::Warn,
            detail,
        }
    }

    fn print(&self) {
        println!("  [{}] {:18} {}", self.level.tag(), self.label, self.detail);
    }
}

pub fn check(constants: &WebConstants) -> Vec<Diagnostic> {
    vec![
        check_fallback_locale(constants.fallback_locale.as_deref()),
        check_path_prefix(constants.path_prefix.as_deref()),
        check_routes(constants),
    ]
}

/// Print every check. Always `Ok`: findings are advisory.
pub fn run_check(constants: &WebConstants) -> Result<()> {
    println!("wakita-webconfig check");
    println!();
    let checks = check(constants);
    for entry in &checks {
        entry.print();
    }
    let warnings = checks
        .iter()
        .filter(|entry| entry.level == Level::Warn)
        .count();
    println!();
    println!("{} check(s), {} warning(s)", checks.len(), warnings);
    Ok(())
}

fn check_fallback_locale(fallback: Option<&str>) -> Diagnostic {
    const LABEL: &str = "fallback locale";
    match fallback {
        None => Diagnostic::warning(LABEL, "not set (client has no fallback)".to_string()),
        Some(code) => match Locale::from_code(code) {
            Some(locale) => {
                Diagnostic::ok(LABEL, format!("{} ({})", code, locale.display_name()))
            }
            None if is_valid_iso639_1(code) => Diagnostic::warning(
                LABEL,
                format!("{} is not in the locale catalog (no translations)", code),
            ),
            None => Diagnostic::warning(
                LABEL,
                format!("{:?} is not an ISO 639-1 language code", code),
            ),
        },
    }
}

fn prefix_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^(/[A-Za-z0-9._~%!$&'()*+,;=:@-]+)+$").expect("prefix pattern compiles")
    })
}

fn check_path_prefix(prefix: Option<&str>) -> Diagnostic {
    const LABEL: &str = "path prefix";
    match prefix {
        None => Diagnostic::warning(LABEL, "not set (routes served from /)".to_string()),
        Some("") => Diagnostic::ok(LABEL, "empty (served from /)".to_string()),
        Some(value) if prefix_pattern().is_match(value) => {
            Diagnostic::ok(LABEL, value.to_string())
        }
        Some(value) if value.ends_with('/') => Diagnostic::warning(
            LABEL,
            format!("{} has a trailing slash (routes will contain //)", value),
        ),
        Some(value) if !value.starts_with('/') => {
            Diagnostic::warning(LABEL, format!("{} does not start with /", value))
        }
        Some(value) => Diagnostic::warning(
            LABEL,
            format!("{} contains characters that need URL encoding", value),
        ),
    }
}

fn check_routes(constants: &WebConstants) -> Diagnostic {
    Diagnostic::ok(
        "routes",
        format!(
            "{} routes, landing at {}",
            constants.app_routes.len(),
            constants.route(Route::Landing)
        ),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::AppConfig;

    fn levels(prefix: &str, locale: &str) -> Vec<Level> {
        let constants = WebConstants::derive(&AppConfig::with_prefix_and_locale(prefix, locale));
        check(&constants).into_iter().map(|d| d.level).collect()
    }

    #[test]
    fn clean_config_has_no_warnings() {
        assert_eq!(levels("/app", "ru"), vec![Level::Ok, Level::Ok, Level::Ok]);
        assert_eq!(levels("", "de"), vec![Level::Ok, Level::Ok, Level::Ok]);
        assert_eq!(levels("/a/b", "en"), vec![Level::Ok, Level::Ok, Level::Ok]);
    }

    #[test]
    fn fallback_outside_catalog_is_a_warning() {
        let result = check_fallback_locale(Some("fr"));
        assert_eq!(result.level, Level::Warn);
        assert!(result.detail.contains("not in the locale catalog"));

        let result = check_fallback_locale(Some("english"));
        assert_eq!(result.level, Level::Warn);
        assert!(result.detail.contains("ISO 639-1"));

        assert_eq!(check_fallback_locale(None).level, Level::Warn);
    }

    #[test]
    fn prefix_shapes() {
        assert_eq!(check_path_prefix(None).level, Level::Warn);
        assert!(check_path_prefix(Some("/app/")).detail.contains("trailing slash"));
        assert!(check_path_prefix(Some("app")).detail.contains("does not start"));
        assert!(check_path_prefix(Some("/my app")).detail.contains("URL encoding"));
    }

    #[test]
    fn run_check_never_fails() {
        let constants = WebConstants::derive(&AppConfig::default());
        assert!(run_check(&constants).is_ok());
    }
}
