// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Internationalization (i18n) support for Carillon.
//!
//! This crate holds the static translation catalog for schedule
//! descriptions, field labels, and validation messages, in English and
//! Simplified Chinese.
//!
//! # String Naming Convention
//!
//! All translatable strings use a hierarchical dot-notation key format
//! under the `schedule.` prefix:
//!
//! - `schedule.field.` for field labels and tooltips
//! - `schedule.cadence.` for cadence words ("every day", "every week")
//! - `schedule.describe.` for description phrasing templates
//! - `schedule.error.` for validation messages
//!
//! # Example
//!
//! ```
//! use carillon_i18n::{t, t_fmt, resolve_locale};
//!
//! // Simple translation
//! let word = t("zh", "schedule.cadence.every_day");
//! assert_eq!(word, "每天");
//!
//! // Translation with variables
//! let label = t_fmt("en", "schedule.label.hour", &[("value", "9")]);
//! assert_eq!(label, "hour 9");
//!
//! // Resolve the effective locale
//! let locale = resolve_locale(Some("zh"), "en");
//! assert_eq!(locale, "zh");
//! ```

mod catalog;
mod locale;
mod resolve;

pub use catalog::{t, t_fmt};
pub use locale::{available_locales, is_supported, locale_info, LocaleInfo};
pub use resolve::resolve_locale;

pub use locale::{DEFAULT_LOCALE, LOCALES};
