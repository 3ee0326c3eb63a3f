// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Build wire expressions from simple-mode state and apply per-field
//! edits in custom mode.

use carillon_core::{CronExpr, Field, ScheduleDescriptor, ScheduleError, SimpleSchedule};

use crate::error::{EngineError, Result};
use crate::validate;

/// Baseline for day and month cadences: daily at midnight.
pub const DAILY_BASELINE: &str = "0 0 0 * * ?";

/// Baseline once weekdays are selected: day-of-month unspecified.
pub const WEEKLY_BASELINE: &str = "0 0 0 ? * *";

/// Serialize simple-mode state into a wire expression.
///
/// Hour selections overwrite minute and second with `"0"`; value lists
/// are sorted and deduplicated; picker weekday 7 (Sunday) becomes the
/// wire token `0`.
pub fn build(state: &SimpleSchedule) -> Result<CronExpr> {
	state.validate()?;
	let baseline = if state.days_of_week.is_empty() {
		DAILY_BASELINE
	} else {
		WEEKLY_BASELINE
	};
	let mut parts: Vec<String> = baseline.split_whitespace().map(str::to_string).collect();
	if !state.hours.is_empty() {
		parts[Field::Hour.index()] = join_sorted(&state.hours);
		parts[Field::Minute.index()] = "0".to_string();
		parts[Field::Second.index()] = "0".to_string();
	}
	if !state.days_of_week.is_empty() {
		let wire: Vec<u32> = state.days_of_week.iter().map(|&day| day % 7).collect();
		parts[Field::DayOfWeek.index()] = join_sorted(&wire);
	}
	if !state.days_of_month.is_empty() {
		parts[Field::DayOfMonth.index()] = join_sorted(&state.days_of_month);
	}
	Ok(CronExpr::from_parts(parts)?)
}

fn join_sorted(values: &[u32]) -> String {
	let mut values = values.to_vec();
	values.sort_unstable();
	values.dedup();
	values
		.iter()
		.map(u32::to_string)
		.collect::<Vec<_>>()
		.join(",")
}

/// Splice one edited token into an expression.
///
/// A token that fails the field's character check reports against that
/// field without running full validation. Structural day/week failures
/// report against day-of-month, which is where the editor surfaces
/// them; everything else reports against the edited field.
pub fn apply_field_edit(
	expr: &CronExpr,
	field: Field,
	token: &str,
) -> (CronExpr, Option<(Field, EngineError)>) {
	let token = token.trim();
	let updated = expr.with_token(field, token);
	if !field.accepts(token) {
		let err = ScheduleError::InvalidField { field };
		return (updated, Some((field, err.into())));
	}
	match validate::validate_expr(&updated) {
		Ok(()) => (updated, None),
		Err(err) => {
			let target = if is_structural(&err) {
				Field::DayOfMonth
			} else {
				field
			};
			(updated, Some((target, err)))
		}
	}
}

fn is_structural(err: &EngineError) -> bool {
	matches!(
		err,
		EngineError::Schedule(
			ScheduleError::DayWeekBothWildcard
				| ScheduleError::DayWeekBothUnspecified
				| ScheduleError::DayWeekConflict
		)
	)
}

/// Apply an edit to a descriptor, refreshing its error map.
///
/// The map carries the outcome of the most recent edit: it is cleared
/// on every call and repopulated when the edit leaves the expression
/// invalid.
pub fn edit_descriptor(
	descriptor: &mut ScheduleDescriptor,
	field: Field,
	token: &str,
	locale: &str,
) {
	let (expr, outcome) = apply_field_edit(&descriptor.expr, field, token);
	descriptor.expr = expr;
	descriptor.clear_errors();
	if let Some((target, err)) = outcome {
		descriptor.set_error(target, err.localized_message(locale));
	}
}
