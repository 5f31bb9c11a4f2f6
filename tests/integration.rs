// SPDX-License-Identifier: PMPL-1.0-or-later

//! Integration tests for deriving client values from the injected config

use wakita_webconfig::i18n::Locale;
use wakita_webconfig::routes::Route;
use wakita_webconfig::{AppConfig, WebConstants};

#[test]
fn test_prefixed_deployment() {
    let constants = WebConstants::derive(&AppConfig::with_prefix_and_locale("/app", "en"));

    assert_eq!(constants.fallback_locale.as_deref(), Some("en"));
    assert_eq!(constants.path_prefix.as_deref(), Some("/app"));
    assert_eq!(constants.route(Route::Landing), "/app/");
    assert_eq!(constants.route(Route::Login), "/app/login");
}

#[test]
fn test_empty_prefix_routes_are_bare_suffixes() {
    let constants = WebConstants::derive(&AppConfig::with_prefix_and_locale("", "en"));

    for (route, path) in constants.app_routes.iter() {
        assert_eq!(path, route.suffix(), "{} should be its bare suffix", route);
    }
    assert_eq!(constants.app_routes.get_by_name("register"), Some("/register"));
}

#[test]
fn test_locales_independent_of_config() {
    let configs = [
        AppConfig::default(),
        AppConfig::with_prefix_and_locale("/x", "fr"),
        AppConfig::with_prefix_and_locale("", "ru"),
    ];
    for config in &configs {
        let constants = WebConstants::derive(config);
        let entries: Vec<_> = constants.locales.iter().collect();
        assert_eq!(entries.len(), 3);
        for code in ["de", "en", "ru"] {
            let name = constants.locales.get(code).expect("locale present");
            assert!(!name.is_empty(), "{} should have a display name", code);
        }
    }
}

#[test]
fn test_every_route_starts_with_prefix() {
    for prefix in ["", "/app", "/deep/nested/base", "relative"] {
        let constants = WebConstants::derive(&AppConfig::with_prefix_and_locale(prefix, "en"));
        assert_eq!(constants.app_routes.len(), 12);
        for (route, path) in constants.app_routes.iter() {
            assert!(
                path.starts_with(prefix),
                "{} = {} should start with {:?}",
                route,
                path,
                prefix
            );
        }
    }
}

#[test]
fn test_derivation_is_deterministic() {
    let config = AppConfig::with_prefix_and_locale("/retro", "de");
    let first = WebConstants::derive(&config);
    let second = WebConstants::derive(&config);
    assert_eq!(first, second);
    assert_eq!(
        serde_json::to_string(&first).expect("serialize"),
        serde_json::to_string(&second).expect("serialize")
    );
}

#[test]
fn test_missing_default_locale_is_not_an_error() {
    let constants =
        WebConstants::from_json(r#"{"PathPrefix": "/app"}"#).expect("missing field is permitted");
    assert_eq!(constants.fallback_locale, None);
    assert_eq!(constants.fallback(), None);
    assert_eq!(constants.route(Route::Team), "/app/team");
}

#[test]
fn test_missing_config_object_is_fatal() {
    let err = WebConstants::from_json("null").expect_err("null is not a config object");
    assert!(format!("{:#}", err).contains("missing"));
}

#[test]
fn test_fallback_not_validated_against_catalog() {
    let constants = WebConstants::from_json(r#"{"DefaultLocale": "ja", "PathPrefix": ""}"#)
        .expect("unknown locale passes through");
    assert_eq!(constants.fallback_locale.as_deref(), Some("ja"));
    assert!(!constants.locales.contains("ja"));
    assert_eq!(
        WebConstants::from_json(r#"{"DefaultLocale": "ru"}"#)
            .expect("parse")
            .fallback(),
        Some(Locale::Ru)
    );
}

#[test]
fn test_serialized_export_names() {
    let constants = WebConstants::derive(&AppConfig::with_prefix_and_locale("/app", "en"));
    let value = serde_json::to_value(&constants).expect("serialize");
    let object = value.as_object().expect("object");
    let mut keys: Vec<_> = object.keys().map(String::as_str).collect();
    keys.sort_unstable();
    assert_eq!(keys, vec!["PathPrefix", "appRoutes", "fallbackLocale", "locales"]);
    assert_eq!(value["appRoutes"]["verifyAct"], "/app/verify-account");
}

#[test]
fn test_wrong_typed_unrelated_fields_still_derive() {
    let constants = WebConstants::from_json(
        r#"{"PathPrefix": "/app", "DefaultLocale": "en", "ToastTimeout": "1000"}"#,
    )
    .expect("quoted timeout must not block derivation");
    assert_eq!(constants.route(Route::Login), "/app/login");
    assert_eq!(constants.fallback_locale.as_deref(), Some("en"));

    let constants = WebConstants::from_json(
        r#"{"PathPrefix": "/app", "ToastTimeout": -1, "AllowGuests": "maybe", "CookieName": {}}"#,
    )
    .expect("negative and malformed fields must not block derivation");
    assert_eq!(constants.route(Route::Landing), "/app/");
    assert_eq!(constants.fallback_locale, None);
}

#[test]
fn test_non_string_prefix_and_locale_are_not_fatal() {
    let constants = WebConstants::from_json(r#"{"PathPrefix": null, "DefaultLocale": ["en"]}"#)
        .expect("wrong-typed derived fields read as missing");
    assert_eq!(constants.path_prefix, None);
    assert_eq!(constants.fallback_locale, None);
    assert_eq!(constants.route(Route::Register), "/register");
}
