// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Six-field cron expression value type.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Result, ScheduleError};
use crate::Field;

/// The editor's initial expression: every day at midnight.
pub const DEFAULT_EXPRESSION: &str = "0 0 0 * * ?";

/// A cron expression split into its six tokens:
/// `second minute hour day-of-month month day-of-week`.
///
/// Tokens are stored verbatim. Holding a `CronExpr` only guarantees the
/// field count; token syntax and cross-field rules are checked by the
/// validator.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema), schema(value_type = String))]
pub struct CronExpr {
	tokens: [String; 6],
}

impl CronExpr {
	/// Parse a raw string with exactly six whitespace-separated tokens.
	pub fn parse(raw: &str) -> Result<Self> {
		let parts: Vec<String> = raw.split_whitespace().map(str::to_string).collect();
		let found = parts.len();
		let tokens: [String; 6] = parts
			.try_into()
			.map_err(|_| ScheduleError::WrongFieldCount { found })?;
		Ok(Self { tokens })
	}

	/// Parse a raw string, padding a five-token Unix expression with a
	/// leading `"0"` seconds token.
	pub fn parse_lenient(raw: &str) -> Result<Self> {
		Self::from_parts(raw.split_whitespace().map(str::to_string).collect())
	}

	/// Assemble an expression from individual tokens.
	///
	/// Five tokens are accepted and padded with a leading `"0"` seconds
	/// token, mirroring how Unix-style expressions are promoted to the
	/// six-field form.
	pub fn from_parts(mut parts: Vec<String>) -> Result<Self> {
		if parts.len() == 5 {
			parts.insert(0, "0".to_string());
		}
		let found = parts.len();
		let tokens: [String; 6] = parts
			.try_into()
			.map_err(|_| ScheduleError::WrongFieldCount { found })?;
		Ok(Self { tokens })
	}

	/// Token of a single field.
	pub fn token(&self, field: Field) -> &str {
		self.tokens[field.index()].as_str()
	}

	/// Copy of this expression with one token replaced.
	pub fn with_token(&self, field: Field, token: &str) -> Self {
		let mut updated = self.clone();
		updated.set_token(field, token);
		updated
	}

	/// Replace one token in place.
	pub fn set_token(&mut self, field: Field, token: &str) {
		self.tokens[field.index()] = token.to_string();
	}

	/// All six tokens in wire order.
	pub fn tokens(&self) -> [&str; 6] {
		let mut out = [""; 6];
		for (slot, token) in out.iter_mut().zip(self.tokens.iter()) {
			*slot = token.as_str();
		}
		out
	}
}

impl Default for CronExpr {
	fn default() -> Self {
		Self {
			tokens: ["0", "0", "0", "*", "*", "?"].map(str::to_string),
		}
	}
}

impl fmt::Display for CronExpr {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.tokens.join(" "))
	}
}

impl FromStr for CronExpr {
	type Err = ScheduleError;

	fn from_str(s: &str) -> Result<Self> {
		Self::parse(s)
	}
}

impl Serialize for CronExpr {
	fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
	where
		S: serde::Serializer,
	{
		serializer.collect_str(self)
	}
}

impl<'de> Deserialize<'de> for CronExpr {
	fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
	where
		D: serde::Deserializer<'de>,
	{
		let raw = String::deserialize(deserializer)?;
		raw.parse().map_err(serde::de::Error::custom)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use proptest::prelude::*;

	#[test]
	fn parse_splits_six_tokens() {
		let expr = CronExpr::parse("0 15 10 ? * 3").unwrap();
		assert_eq!(expr.token(Field::Second), "0");
		assert_eq!(expr.token(Field::Minute), "15");
		assert_eq!(expr.token(Field::Hour), "10");
		assert_eq!(expr.token(Field::DayOfMonth), "?");
		assert_eq!(expr.token(Field::Month), "*");
		assert_eq!(expr.token(Field::DayOfWeek), "3");
	}

	#[test]
	fn parse_rejects_wrong_field_count() {
		assert_eq!(
			CronExpr::parse("0 0 12 * *"),
			Err(ScheduleError::WrongFieldCount { found: 5 })
		);
		assert_eq!(
			CronExpr::parse("0 0 12 * * ? 2026"),
			Err(ScheduleError::WrongFieldCount { found: 7 })
		);
		assert_eq!(CronExpr::parse(""), Err(ScheduleError::WrongFieldCount { found: 0 }));
	}

	#[test]
	fn parse_lenient_pads_unix_form() {
		let expr = CronExpr::parse_lenient("0 12 * * 1").unwrap();
		assert_eq!(expr.to_string(), "0 0 12 * * 1");
		assert_eq!(expr.token(Field::Second), "0");
	}

	#[test]
	fn from_parts_pads_five_tokens() {
		let parts = vec!["30".into(), "9".into(), "*".into(), "*".into(), "?".into()];
		let expr = CronExpr::from_parts(parts).unwrap();
		assert_eq!(expr.to_string(), "0 30 9 * * ?");
	}

	#[test]
	fn from_parts_rejects_other_counts() {
		let parts: Vec<String> = vec!["0".into(), "0".into(), "0".into()];
		assert_eq!(
			CronExpr::from_parts(parts),
			Err(ScheduleError::WrongFieldCount { found: 3 })
		);
	}

	#[test]
	fn default_is_daily_at_midnight() {
		assert_eq!(CronExpr::default().to_string(), DEFAULT_EXPRESSION);
	}

	#[test]
	fn with_token_replaces_one_field() {
		let expr = CronExpr::default().with_token(Field::Hour, "6,18");
		assert_eq!(expr.to_string(), "0 0 6,18 * * ?");
	}

	#[test]
	fn serde_roundtrips_as_string() {
		let expr = CronExpr::parse("0 0 9 ? * 1-5").unwrap();
		let json = serde_json::to_string(&expr).unwrap();
		assert_eq!(json, "\"0 0 9 ? * 1-5\"");
		let back: CronExpr = serde_json::from_str(&json).unwrap();
		assert_eq!(back, expr);
	}

	#[test]
	fn serde_rejects_short_strings() {
		let result: std::result::Result<CronExpr, _> = serde_json::from_str("\"* * *\"");
		assert!(result.is_err());
	}

	proptest! {
		#[test]
		fn display_parse_roundtrip(tokens in proptest::collection::vec("[0-9*,/?L#-]{1,6}", 6)) {
			let expr = CronExpr::from_parts(tokens).unwrap();
			let reparsed = CronExpr::parse(&expr.to_string()).unwrap();
			prop_assert_eq!(reparsed, expr);
		}
	}
}
