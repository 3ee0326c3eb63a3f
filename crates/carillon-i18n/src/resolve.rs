// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Locale resolution logic.

use crate::locale::{is_supported, DEFAULT_LOCALE};

/// Resolve the effective locale from a request and a configured default.
///
/// Resolution order (highest to lowest priority):
/// 1. The requested locale (if supported)
/// 2. The configured default (if supported)
/// 3. English ("en")
///
/// The returned code is always supported, so it can be passed straight
/// to [`t`](crate::t).
///
/// # Example
///
/// ```
/// use carillon_i18n::resolve_locale;
///
/// assert_eq!(resolve_locale(Some("zh"), "en"), "zh");
/// assert_eq!(resolve_locale(None, "zh"), "zh");
/// assert_eq!(resolve_locale(Some("zh-TW"), "fr"), "en");
/// ```
pub fn resolve_locale(requested: Option<&str>, default: &str) -> &'static str {
	if let Some(locale) = requested {
		if is_supported(locale) {
			return locale_to_static(locale);
		}
	}

	if is_supported(default) {
		return locale_to_static(default);
	}

	DEFAULT_LOCALE
}

fn locale_to_static(locale: &str) -> &'static str {
	match locale {
		"en" => "en",
		"zh" => "zh",
		_ => DEFAULT_LOCALE,
	}
}
