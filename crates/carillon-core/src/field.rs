// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! The six cron fields and their per-field token syntax.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

/// Characters allowed in second, minute, hour, and month tokens.
static NUMERIC_TOKEN_REGEX: LazyLock<Regex> =
	LazyLock::new(|| Regex::new(r"^[0-9*,/\-]+$").unwrap());

/// Day-of-month additionally allows `?` and the last-day marker `L`.
static DAY_OF_MONTH_TOKEN_REGEX: LazyLock<Regex> =
	LazyLock::new(|| Regex::new(r"^[0-9*,/\-?L]+$").unwrap());

/// Day-of-week additionally allows `?`, `L`, and the nth-week marker `#`.
static DAY_OF_WEEK_TOKEN_REGEX: LazyLock<Regex> =
	LazyLock::new(|| Regex::new(r"^[0-9*,/\-?L#]+$").unwrap());

/// One of the six fields of a cron expression, in wire order:
/// `second minute hour day-of-month month day-of-week`.
///
/// Day-of-week tokens use the Unix convention where both `0` and `7`
/// mean Sunday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "snake_case")]
pub enum Field {
	Second,
	Minute,
	Hour,
	DayOfMonth,
	Month,
	DayOfWeek,
}

impl Field {
	/// All six fields in wire order.
	pub const ALL: [Field; 6] = [
		Field::Second,
		Field::Minute,
		Field::Hour,
		Field::DayOfMonth,
		Field::Month,
		Field::DayOfWeek,
	];

	/// Position of this field within the expression.
	pub fn index(&self) -> usize {
		match self {
			Self::Second => 0,
			Self::Minute => 1,
			Self::Hour => 2,
			Self::DayOfMonth => 3,
			Self::Month => 4,
			Self::DayOfWeek => 5,
		}
	}

	/// Field at the given wire position, if any.
	pub fn from_index(index: usize) -> Option<Field> {
		Field::ALL.get(index).copied()
	}

	/// Inclusive numeric range of this field.
	///
	/// Day-of-week reports `(0, 6)`; `7` is additionally accepted in
	/// tokens as a Sunday alias.
	pub fn bounds(&self) -> (u32, u32) {
		match self {
			Self::Second => (0, 59),
			Self::Minute => (0, 59),
			Self::Hour => (0, 23),
			Self::DayOfMonth => (1, 31),
			Self::Month => (1, 12),
			Self::DayOfWeek => (0, 6),
		}
	}

	/// Pattern restricting the characters a token of this field may use.
	pub fn pattern(&self) -> &'static Regex {
		match self {
			Self::Second | Self::Minute | Self::Hour | Self::Month => &NUMERIC_TOKEN_REGEX,
			Self::DayOfMonth => &DAY_OF_MONTH_TOKEN_REGEX,
			Self::DayOfWeek => &DAY_OF_WEEK_TOKEN_REGEX,
		}
	}

	/// Whether `token` only uses characters this field permits.
	///
	/// This is a character-set check, not a full parse. A token that
	/// passes here can still be rejected when the whole expression is
	/// validated.
	pub fn accepts(&self, token: &str) -> bool {
		self.pattern().is_match(token)
	}

	/// Catalog key for the field's short label.
	pub fn label_key(&self) -> &'static str {
		match self {
			Self::Second => "schedule.field.second.label",
			Self::Minute => "schedule.field.minute.label",
			Self::Hour => "schedule.field.hour.label",
			Self::DayOfMonth => "schedule.field.day_of_month.label",
			Self::Month => "schedule.field.month.label",
			Self::DayOfWeek => "schedule.field.day_of_week.label",
		}
	}

	/// Catalog key for the field's allowed-syntax tooltip.
	pub fn tip_key(&self) -> &'static str {
		match self {
			Self::Second => "schedule.field.second.tip",
			Self::Minute => "schedule.field.minute.tip",
			Self::Hour => "schedule.field.hour.tip",
			Self::DayOfMonth => "schedule.field.day_of_month.tip",
			Self::Month => "schedule.field.month.tip",
			Self::DayOfWeek => "schedule.field.day_of_week.tip",
		}
	}

	/// Catalog key for the cadence word a plain `*` reads as.
	pub fn wildcard_key(&self) -> &'static str {
		match self {
			Self::Second => "schedule.cadence.every_second",
			Self::Minute => "schedule.cadence.every_minute",
			Self::Hour => "schedule.cadence.every_hour",
			Self::DayOfMonth => "schedule.cadence.every_day",
			Self::Month => "schedule.cadence.every_month",
			Self::DayOfWeek => "schedule.cadence.every_day_of_week",
		}
	}

	/// Catalog key for the unit used by interval phrasing.
	pub fn unit_key(&self) -> &'static str {
		match self {
			Self::Second => "schedule.unit.seconds",
			Self::Minute => "schedule.unit.minutes",
			Self::Hour => "schedule.unit.hours",
			Self::DayOfMonth => "schedule.unit.days",
			Self::Month => "schedule.unit.months",
			Self::DayOfWeek => "schedule.unit.weekdays",
		}
	}
}

impl fmt::Display for Field {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Second => write!(f, "second"),
			Self::Minute => write!(f, "minute"),
			Self::Hour => write!(f, "hour"),
			Self::DayOfMonth => write!(f, "day_of_month"),
			Self::Month => write!(f, "month"),
			Self::DayOfWeek => write!(f, "day_of_week"),
		}
	}
}

impl FromStr for Field {
	type Err = String;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s {
			"second" => Ok(Self::Second),
			"minute" => Ok(Self::Minute),
			"hour" => Ok(Self::Hour),
			"day_of_month" => Ok(Self::DayOfMonth),
			"month" => Ok(Self::Month),
			"day_of_week" => Ok(Self::DayOfWeek),
			_ => Err(format!("unknown field: {}", s)),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use proptest::prelude::*;

	#[test]
	fn index_roundtrip() {
		for field in Field::ALL {
			assert_eq!(Field::from_index(field.index()), Some(field));
		}
		assert_eq!(Field::from_index(6), None);
	}

	#[test]
	fn display_roundtrip() {
		for field in Field::ALL {
			assert_eq!(field.to_string().parse::<Field>(), Ok(field));
		}
		assert!("dayofweek".parse::<Field>().is_err());
	}

	#[test]
	fn serde_uses_snake_case() {
		let json = serde_json::to_string(&Field::DayOfMonth).unwrap();
		assert_eq!(json, "\"day_of_month\"");
		let field: Field = serde_json::from_str("\"day_of_week\"").unwrap();
		assert_eq!(field, Field::DayOfWeek);
	}

	#[test]
	fn question_mark_only_in_day_fields() {
		for field in Field::ALL {
			let allowed = matches!(field, Field::DayOfMonth | Field::DayOfWeek);
			assert_eq!(field.accepts("?"), allowed, "field: {}", field);
		}
	}

	#[test]
	fn hash_only_in_day_of_week() {
		for field in Field::ALL {
			assert_eq!(field.accepts("6#3"), field == Field::DayOfWeek);
		}
	}

	#[test]
	fn last_marker_only_in_day_fields() {
		for field in Field::ALL {
			let allowed = matches!(field, Field::DayOfMonth | Field::DayOfWeek);
			assert_eq!(field.accepts("L"), allowed);
		}
	}

	#[test]
	fn empty_token_rejected() {
		for field in Field::ALL {
			assert!(!field.accepts(""));
		}
	}

	#[test]
	fn bounds_are_inclusive_ranges() {
		assert_eq!(Field::Second.bounds(), (0, 59));
		assert_eq!(Field::Hour.bounds(), (0, 23));
		assert_eq!(Field::DayOfMonth.bounds(), (1, 31));
		assert_eq!(Field::Month.bounds(), (1, 12));
		assert_eq!(Field::DayOfWeek.bounds(), (0, 6));
	}

	proptest! {
		#[test]
		fn numeric_tokens_accepted_everywhere(token in "[0-9]{1,3}(-[0-9]{1,3})?(/[0-9]{1,2})?") {
			for field in Field::ALL {
				prop_assert!(field.accepts(&token));
			}
		}

		#[test]
		fn alphabetic_tokens_rejected(token in "[A-KM-Za-z]{1,8}") {
			for field in Field::ALL {
				prop_assert!(!field.accepts(&token));
			}
		}
	}
}
