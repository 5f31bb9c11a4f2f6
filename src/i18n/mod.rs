// SPDX-License-Identifier: PMPL-1.0-or-later

//! Internationalisation data for the web client.
//!
//! ## Supported locales
//!
//! | Code | Native name |
//! |------|-------------|
//! | de   | Deutsch     |
//! | en   | English     |
//! | ru   | Русский     |
//!
//! The catalog is static data. Which locale is used as the fallback comes
//! from configuration and is deliberately not checked here; see
//! [`crate::diagnostics`] for the advisory check.

mod catalog;
mod iso639;

pub use catalog::{Locale, LocaleCatalog};
pub use iso639::is_valid_iso639_1;
