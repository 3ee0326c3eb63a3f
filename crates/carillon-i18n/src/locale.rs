// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Supported locales.

/// Fallback locale used when no supported locale matches.
pub const DEFAULT_LOCALE: &str = "en";

/// All supported locale codes.
pub const LOCALES: &[&str] = &["en", "zh"];

/// Metadata about a supported locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocaleInfo {
	/// ISO 639-1 code: "en"
	pub code: &'static str,
	/// English name: "Chinese (Simplified)"
	pub name: &'static str,
	/// Name in the locale itself: "简体中文"
	pub native_name: &'static str,
}

const LOCALE_INFOS: [LocaleInfo; 2] = [
	LocaleInfo {
		code: "en",
		name: "English",
		native_name: "English",
	},
	LocaleInfo {
		code: "zh",
		name: "Chinese (Simplified)",
		native_name: "简体中文",
	},
];

/// Whether the locale code is supported.
pub fn is_supported(locale: &str) -> bool {
	LOCALES.contains(&locale)
}

/// Metadata for a locale code, if supported.
pub fn locale_info(locale: &str) -> Option<&'static LocaleInfo> {
	LOCALE_INFOS.iter().find(|info| info.code == locale)
}

/// All supported locales with their metadata.
pub fn available_locales() -> &'static [LocaleInfo] {
	&LOCALE_INFOS
}
