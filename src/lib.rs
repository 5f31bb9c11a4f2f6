// SPDX-License-Identifier: PMPL-1.0-or-later

//! Wakita web client configuration.
//!
//! Derives the values the client needs at startup from the config object
//! the server injects into the index page:
//!
//! - **Locale catalog**: the static set of UI locales ([`i18n`]).
//! - **Fallback locale**: passed through from `DefaultLocale`.
//! - **Route table**: twelve named routes under the deployment prefix
//!   ([`routes`]).
//! - **Path prefix**: passed through from `PathPrefix`.
//!
//! [`constants::WebConstants`] bundles all four. [`config::Settings`]
//! resolves the server-side settings the injected object is built from.

pub mod config;
pub mod constants;
pub mod diagnostics;
pub mod i18n;
pub mod output;
pub mod routes;
mod scalar;
pub mod types;

pub use constants::WebConstants;
pub use types::AppConfig;
