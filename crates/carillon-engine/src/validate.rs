// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Whole-expression validation.

use cron::Schedule;
use serde::Serialize;

use carillon_core::{CronExpr, Field, ScheduleError};

use crate::error::Result;
use crate::schedule::{self, FireFilter};

/// Outcome of validating a raw expression, shaped for UI consumption.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Validation {
	pub valid: bool,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub error: Option<String>,
}

/// Validate a raw six-field expression.
///
/// Checks, in order: field count, the day/week structural rules, and
/// finally whether the engine can parse the rewritten expression. When
/// several structural rules are violated, the last one wins.
pub fn validate(raw: &str) -> Result<CronExpr> {
	let expr = CronExpr::parse(raw)?;
	validate_expr(&expr)?;
	Ok(expr)
}

/// Validate an already-split expression.
pub fn validate_expr(expr: &CronExpr) -> Result<()> {
	checked_schedule(expr).map(|_| ())
}

/// Validate for display, localizing the failure if any.
pub fn validate_cron_string(raw: &str, locale: &str) -> Validation {
	match validate(raw) {
		Ok(_) => Validation {
			valid: true,
			error: None,
		},
		Err(err) => Validation {
			valid: false,
			error: Some(err.localized_message(locale)),
		},
	}
}

/// Structural day/week rule violations, in the order the rules run.
///
/// The rules are pairwise exclusive in practice, but callers that want
/// a different precedence than [`validate`] can inspect the full list.
pub fn structural_violations(expr: &CronExpr) -> Vec<ScheduleError> {
	let day = expr.token(Field::DayOfMonth);
	let week = expr.token(Field::DayOfWeek);
	let day_value = day.parse::<u32>().ok();
	let week_value = week.parse::<u32>().ok();

	let mut violations = Vec::new();
	if day == "*" && week == "*" {
		violations.push(ScheduleError::DayWeekBothWildcard);
	}
	if day == "?" && week == "?" {
		violations.push(ScheduleError::DayWeekBothUnspecified);
	}
	if day_value.is_some() && week_value.is_some() {
		violations.push(ScheduleError::DayWeekConflict);
	}
	if day_value.is_some() && week == "*" {
		violations.push(ScheduleError::DayWeekConflict);
	}
	if week_value.is_some() && day == "*" {
		violations.push(ScheduleError::DayWeekConflict);
	}
	violations
}

/// Run the structural checks, then hand the expression to the engine.
pub(crate) fn checked_schedule(expr: &CronExpr) -> Result<(Schedule, FireFilter)> {
	if let Some(violation) = structural_violations(expr).pop() {
		return Err(violation.into());
	}
	schedule::to_schedule(expr)
}
