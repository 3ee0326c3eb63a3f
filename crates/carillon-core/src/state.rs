// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Editor state for simple and custom schedule modes.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use crate::error::{Result, ScheduleError};
use crate::{CronExpr, Field};

/// Which day picker the simple mode shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "snake_case")]
pub enum DateType {
	Day,
	Week,
	Month,
}

impl fmt::Display for DateType {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Day => write!(f, "day"),
			Self::Week => write!(f, "week"),
			Self::Month => write!(f, "month"),
		}
	}
}

impl FromStr for DateType {
	type Err = String;

	fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
		match s {
			"day" => Ok(Self::Day),
			"week" => Ok(Self::Week),
			"month" => Ok(Self::Month),
			_ => Err(format!("unknown date type: {}", s)),
		}
	}
}

/// How the schedule is being edited.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "snake_case")]
pub enum ScheduleMode {
	/// Structured pickers for cadence, days, and hours.
	Simple,
	/// Direct per-field editing of the cron expression.
	Custom,
}

impl fmt::Display for ScheduleMode {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Simple => write!(f, "simple"),
			Self::Custom => write!(f, "custom"),
		}
	}
}

impl FromStr for ScheduleMode {
	type Err = String;

	fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
		match s {
			"simple" => Ok(Self::Simple),
			"custom" => Ok(Self::Custom),
			_ => Err(format!("unknown schedule mode: {}", s)),
		}
	}
}

/// Simple-mode picker state.
///
/// Weekdays use the picker convention 1 (Monday) through 7 (Sunday);
/// the builder maps 7 to the wire token `0` when serializing.
/// `days_of_week` and `days_of_month` are mutually exclusive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct SimpleSchedule {
	pub date_type: DateType,
	#[serde(default)]
	pub hours: Vec<u32>,
	#[serde(default)]
	pub days_of_week: Vec<u32>,
	#[serde(default)]
	pub days_of_month: Vec<u32>,
}

impl SimpleSchedule {
	/// Switch the cadence, dropping day selections the new cadence
	/// cannot express.
	pub fn set_date_type(&mut self, date_type: DateType) {
		self.date_type = date_type;
		match date_type {
			DateType::Day => {
				self.days_of_week.clear();
				self.days_of_month.clear();
			}
			DateType::Week => self.days_of_month.clear(),
			DateType::Month => self.days_of_week.clear(),
		}
	}

	pub fn set_hours(&mut self, hours: Vec<u32>) {
		self.hours = hours;
	}

	/// Select weekdays, clearing any day-of-month selection.
	pub fn set_days_of_week(&mut self, days: Vec<u32>) {
		self.days_of_week = days;
		if !self.days_of_week.is_empty() {
			self.days_of_month.clear();
		}
	}

	/// Select days of the month, clearing any weekday selection.
	pub fn set_days_of_month(&mut self, days: Vec<u32>) {
		self.days_of_month = days;
		if !self.days_of_month.is_empty() {
			self.days_of_week.clear();
		}
	}

	/// Check value ranges and the day/week exclusion.
	pub fn validate(&self) -> Result<()> {
		let (hour_min, hour_max) = Field::Hour.bounds();
		for &hour in &self.hours {
			if !(hour_min..=hour_max).contains(&hour) {
				return Err(ScheduleError::ValueOutOfRange {
					field: Field::Hour,
					value: hour,
				});
			}
		}
		for &day in &self.days_of_week {
			if !(1..=7).contains(&day) {
				return Err(ScheduleError::ValueOutOfRange {
					field: Field::DayOfWeek,
					value: day,
				});
			}
		}
		let (dom_min, dom_max) = Field::DayOfMonth.bounds();
		for &day in &self.days_of_month {
			if !(dom_min..=dom_max).contains(&day) {
				return Err(ScheduleError::ValueOutOfRange {
					field: Field::DayOfMonth,
					value: day,
				});
			}
		}
		if !self.days_of_week.is_empty() && !self.days_of_month.is_empty() {
			return Err(ScheduleError::DayWeekConflict);
		}
		Ok(())
	}
}

impl Default for SimpleSchedule {
	fn default() -> Self {
		Self {
			date_type: DateType::Day,
			hours: vec![0],
			days_of_week: Vec::new(),
			days_of_month: Vec::new(),
		}
	}
}

/// Complete editor state: mode, expression, picker state, and any
/// per-field validation messages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct ScheduleDescriptor {
	pub mode: ScheduleMode,
	pub expr: CronExpr,
	pub simple: SimpleSchedule,
	#[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
	pub errors: BTreeMap<Field, String>,
}

impl ScheduleDescriptor {
	pub fn set_mode(&mut self, mode: ScheduleMode) {
		self.mode = mode;
	}

	/// Record a validation message against one field.
	pub fn set_error(&mut self, field: Field, message: String) {
		self.errors.insert(field, message);
	}

	pub fn clear_errors(&mut self) {
		self.errors.clear();
	}

	pub fn is_valid(&self) -> bool {
		self.errors.is_empty()
	}
}

impl Default for ScheduleDescriptor {
	fn default() -> Self {
		Self {
			mode: ScheduleMode::Simple,
			expr: CronExpr::default(),
			simple: SimpleSchedule::default(),
			errors: BTreeMap::new(),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use proptest::prelude::*;

	#[test]
	fn default_is_daily_at_midnight() {
		let state = SimpleSchedule::default();
		assert_eq!(state.date_type, DateType::Day);
		assert_eq!(state.hours, vec![0]);
		assert!(state.days_of_week.is_empty());
		assert!(state.days_of_month.is_empty());
		assert!(state.validate().is_ok());
	}

	#[test]
	fn selecting_weekdays_clears_month_days() {
		let mut state = SimpleSchedule::default();
		state.set_days_of_month(vec![1, 15]);
		state.set_days_of_week(vec![1, 7]);
		assert!(state.days_of_month.is_empty());
		assert_eq!(state.days_of_week, vec![1, 7]);
	}

	#[test]
	fn selecting_month_days_clears_weekdays() {
		let mut state = SimpleSchedule::default();
		state.set_days_of_week(vec![3]);
		state.set_days_of_month(vec![10]);
		assert!(state.days_of_week.is_empty());
		assert_eq!(state.days_of_month, vec![10]);
	}

	#[test]
	fn switching_to_daily_drops_day_selections() {
		let mut state = SimpleSchedule::default();
		state.set_days_of_week(vec![2, 4]);
		state.set_date_type(DateType::Day);
		assert!(state.days_of_week.is_empty());
		assert!(state.days_of_month.is_empty());
	}

	#[test]
	fn validate_rejects_out_of_range_values() {
		let mut state = SimpleSchedule::default();
		state.set_hours(vec![24]);
		assert_eq!(
			state.validate(),
			Err(ScheduleError::ValueOutOfRange {
				field: Field::Hour,
				value: 24,
			})
		);

		let mut state = SimpleSchedule::default();
		state.set_days_of_week(vec![0]);
		assert_eq!(
			state.validate(),
			Err(ScheduleError::ValueOutOfRange {
				field: Field::DayOfWeek,
				value: 0,
			})
		);

		let mut state = SimpleSchedule::default();
		state.set_days_of_month(vec![32]);
		assert_eq!(
			state.validate(),
			Err(ScheduleError::ValueOutOfRange {
				field: Field::DayOfMonth,
				value: 32,
			})
		);
	}

	#[test]
	fn validate_rejects_day_week_conflict() {
		let state = SimpleSchedule {
			date_type: DateType::Week,
			hours: vec![9],
			days_of_week: vec![1],
			days_of_month: vec![1],
		};
		assert_eq!(state.validate(), Err(ScheduleError::DayWeekConflict));
	}

	#[test]
	fn descriptor_default_is_simple_daily() {
		let descriptor = ScheduleDescriptor::default();
		assert_eq!(descriptor.mode, ScheduleMode::Simple);
		assert_eq!(descriptor.expr.to_string(), "0 0 0 * * ?");
		assert!(descriptor.is_valid());
	}

	#[test]
	fn descriptor_serde_roundtrip() {
		let mut descriptor = ScheduleDescriptor::default();
		descriptor.set_mode(ScheduleMode::Custom);
		descriptor.set_error(Field::Minute, "invalid minute token".to_string());
		let json = serde_json::to_string(&descriptor).unwrap();
		let back: ScheduleDescriptor = serde_json::from_str(&json).unwrap();
		assert_eq!(back, descriptor);
	}

	#[test]
	fn descriptor_serde_omits_empty_errors() {
		let json = serde_json::to_value(ScheduleDescriptor::default()).unwrap();
		assert!(json.get("errors").is_none());
		assert_eq!(json["expr"], "0 0 0 * * ?");
	}

	proptest! {
		#[test]
		fn day_lists_stay_mutually_exclusive(
			weeks in proptest::collection::vec(1u32..=7, 0..5),
			months in proptest::collection::vec(1u32..=31, 0..5),
		) {
			let mut state = SimpleSchedule::default();
			state.set_days_of_week(weeks);
			state.set_days_of_month(months);
			prop_assert!(state.days_of_week.is_empty() || state.days_of_month.is_empty());
			prop_assert!(state.validate().is_ok());
		}

		#[test]
		fn date_type_roundtrip(date_type in prop_oneof![
			Just(DateType::Day),
			Just(DateType::Week),
			Just(DateType::Month),
		]) {
			let parsed: DateType = date_type.to_string().parse().unwrap();
			prop_assert_eq!(parsed, date_type);
		}
	}
}
