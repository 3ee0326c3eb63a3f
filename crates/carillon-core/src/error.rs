// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Error types for cron schedule editing.

use thiserror::Error;

use crate::Field;

/// Result type for schedule operations.
pub type Result<T> = std::result::Result<T, ScheduleError>;

/// Errors raised while parsing, validating, or building a schedule.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScheduleError {
	#[error("expected 6 fields, found {found}")]
	WrongFieldCount { found: usize },

	#[error("invalid {field} token")]
	InvalidField { field: Field },

	#[error("day-of-month and day-of-week cannot both be '*'")]
	DayWeekBothWildcard,

	#[error("day-of-month and day-of-week cannot both be '?'")]
	DayWeekBothUnspecified,

	#[error("day-of-month and day-of-week cannot both name days")]
	DayWeekConflict,

	#[error("{field} value {value} is out of range")]
	ValueOutOfRange { field: Field, value: u32 },
}

impl ScheduleError {
	/// Catalog key for the user-facing message.
	pub fn message_key(&self) -> &'static str {
		match self {
			Self::WrongFieldCount { .. } => "schedule.error.field_count",
			Self::InvalidField { .. } => "schedule.error.invalid_field",
			Self::DayWeekBothWildcard => "schedule.error.day_week_both_star",
			Self::DayWeekBothUnspecified => "schedule.error.day_week_both_unset",
			Self::DayWeekConflict => "schedule.error.day_week_conflict",
			Self::ValueOutOfRange { .. } => "schedule.error.value_out_of_range",
		}
	}
}
