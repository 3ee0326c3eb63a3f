// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Bridge from wire expressions to the `cron` crate's engine format.
//!
//! The wire format follows the Unix day-of-week convention (0 and 7
//! both mean Sunday) and allows `?`, `L`, and `#`. The engine expects
//! Quartz-style ordinals (1 = Sunday) and supports none of the special
//! markers, so day tokens are rewritten before parsing and the markers
//! become [`FireFilter`] rules applied to the engine's output.

use chrono::{Datelike, NaiveDate};
use cron::Schedule;
use std::collections::BTreeSet;
use std::str::FromStr;
use tracing::debug;

use carillon_core::{CronExpr, Field};

use crate::error::{EngineError, Result};

/// Parse a wire expression into an engine schedule plus the filter
/// that narrows its fires back down to the requested days.
pub(crate) fn to_schedule(expr: &CronExpr) -> Result<(Schedule, FireFilter)> {
	let (engine_expr, filter) = to_engine(expr)?;
	let schedule = Schedule::from_str(&engine_expr).map_err(|e| {
		debug!(expression = %expr, engine = %engine_expr, "engine rejected expression: {}", e);
		EngineError::Expression(e.to_string())
	})?;
	Ok((schedule, filter))
}

/// Rewrite a wire expression into the form the engine parses.
pub(crate) fn to_engine(expr: &CronExpr) -> Result<(String, FireFilter)> {
	let mut filter = FireFilter::default();
	let mut tokens: Vec<String> = Vec::with_capacity(6);
	for field in Field::ALL {
		let token = expr.token(field);
		let engine_token = match field {
			Field::DayOfMonth => day_of_month_token(token, &mut filter)?,
			Field::DayOfWeek => day_of_week_token(token, &mut filter)?,
			_ => token.to_string(),
		};
		tokens.push(engine_token);
	}
	Ok((tokens.join(" "), filter))
}

fn day_of_month_token(token: &str, filter: &mut FireFilter) -> Result<String> {
	if token == "?" {
		return Ok("*".to_string());
	}
	if token == "L" {
		filter.rules.push(FilterRule::LastDayOfMonth);
		// Only the 28th through 31st can be a month's final day.
		return Ok("28-31".to_string());
	}
	if token.contains('L') {
		return Err(EngineError::Expression(
			"day-of-month 'L' must stand alone".to_string(),
		));
	}
	Ok(token.to_string())
}

fn day_of_week_token(token: &str, filter: &mut FireFilter) -> Result<String> {
	if token == "?" || token == "*" {
		return Ok("*".to_string());
	}
	if token.contains('L') || token.contains('#') {
		return special_day_of_week_token(token, filter);
	}
	numeric_day_of_week_token(token)
}

/// Shift plain day-of-week subtokens to the engine's 1 = Sunday
/// ordinals. Ranges and steps are expanded to comma lists so the shift
/// cannot reorder endpoints (wire `5-7` maps to engine 6, 7, and 1).
fn numeric_day_of_week_token(token: &str) -> Result<String> {
	let mut engine = BTreeSet::new();
	for sub in token.split(',') {
		let days = expand_weekdays(sub).ok_or_else(|| unsupported(token))?;
		for day in days {
			engine.insert(day + 1);
		}
	}
	Ok(join_ordinals(&engine))
}

/// Day-of-week token containing `L` or `#`. Every subtoken becomes a
/// filter arm; the engine token widens to the union of the underlying
/// weekdays.
fn special_day_of_week_token(token: &str, filter: &mut FireFilter) -> Result<String> {
	let mut arms = Vec::new();
	let mut engine = BTreeSet::new();
	for sub in token.split(',') {
		if sub == "L" {
			// Bare L is the Unix alias for Sunday.
			arms.push(DowMatch::Weekday(0));
			engine.insert(1);
		} else if let Some(head) = sub.strip_suffix('L') {
			let weekday = weekday_ordinal(head).ok_or_else(|| unsupported(token))? % 7;
			arms.push(DowMatch::LastWeekday { weekday });
			engine.insert(weekday + 1);
		} else if let Some((day, nth)) = sub.split_once('#') {
			let weekday = weekday_ordinal(day).ok_or_else(|| unsupported(token))? % 7;
			let nth: u32 = nth.parse().map_err(|_| unsupported(token))?;
			if !(1..=5).contains(&nth) {
				return Err(unsupported(token));
			}
			arms.push(DowMatch::NthWeekday { weekday, nth });
			engine.insert(weekday + 1);
		} else {
			let days = expand_weekdays(sub).ok_or_else(|| unsupported(token))?;
			for day in days {
				arms.push(DowMatch::Weekday(day));
				engine.insert(day + 1);
			}
		}
	}
	filter.rules.push(FilterRule::DayOfWeek(arms));
	Ok(join_ordinals(&engine))
}

/// Expand one plain day-of-week subtoken into normalized wire ordinals
/// (0-6, Sunday = 0). Returns `None` for syntax the engine must reject.
fn expand_weekdays(sub: &str) -> Option<Vec<u32>> {
	if sub == "*" || sub == "?" {
		return Some((0..=6).collect());
	}
	if let Some((head, step)) = sub.split_once('/') {
		let step: u32 = step.parse().ok()?;
		if step == 0 {
			return None;
		}
		let (start, end) = if head == "*" {
			(0, 7)
		} else if let Some((begin, finish)) = head.split_once('-') {
			(weekday_ordinal(begin)?, weekday_ordinal(finish)?)
		} else {
			// "n/step" runs from n to the end of the week.
			(weekday_ordinal(head)?, 7)
		};
		if start > end {
			return None;
		}
		return Some((start..=end).step_by(step as usize).map(|day| day % 7).collect());
	}
	if let Some((begin, finish)) = sub.split_once('-') {
		let start = weekday_ordinal(begin)?;
		let end = weekday_ordinal(finish)?;
		if start > end {
			return None;
		}
		return Some((start..=end).map(|day| day % 7).collect());
	}
	Some(vec![weekday_ordinal(sub)? % 7])
}

/// Wire ordinal (0-7) for a digit or weekday name.
fn weekday_ordinal(s: &str) -> Option<u32> {
	if let Ok(n) = s.parse::<u32>() {
		return (n <= 7).then_some(n);
	}
	match s.to_ascii_uppercase().as_str() {
		"SUN" => Some(0),
		"MON" => Some(1),
		"TUE" => Some(2),
		"WED" => Some(3),
		"THU" => Some(4),
		"FRI" => Some(5),
		"SAT" => Some(6),
		_ => None,
	}
}

fn join_ordinals(ordinals: &BTreeSet<u32>) -> String {
	ordinals
		.iter()
		.map(u32::to_string)
		.collect::<Vec<_>>()
		.join(",")
}

fn unsupported(token: &str) -> EngineError {
	EngineError::Expression(format!("unsupported day-of-week token: {}", token))
}

/// Date-level refinements the engine cannot express.
///
/// The engine schedule is widened to a superset of the requested days;
/// these rules narrow each candidate fire back down. An empty filter
/// passes everything.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub(crate) struct FireFilter {
	rules: Vec<FilterRule>,
}

impl FireFilter {
	/// Whether a candidate fire date survives all rules.
	pub fn matches<D: Datelike>(&self, date: &D) -> bool {
		self.rules.iter().all(|rule| rule.matches(date))
	}
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum FilterRule {
	/// `L` in day-of-month: only the month's final day.
	LastDayOfMonth,
	/// Day-of-week token with special markers; any arm may accept.
	DayOfWeek(Vec<DowMatch>),
}

impl FilterRule {
	fn matches<D: Datelike>(&self, date: &D) -> bool {
		match self {
			Self::LastDayOfMonth => date.day() == last_day_of_month(date.year(), date.month()),
			Self::DayOfWeek(arms) => arms.iter().any(|arm| arm.matches(date)),
		}
	}
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum DowMatch {
	/// Normalized wire ordinal, Sunday = 0.
	Weekday(u32),
	/// `day#nth`: the nth occurrence of the weekday in the month.
	NthWeekday { weekday: u32, nth: u32 },
	/// `dayL`: the final occurrence of the weekday in the month.
	LastWeekday { weekday: u32 },
}

impl DowMatch {
	fn matches<D: Datelike>(&self, date: &D) -> bool {
		let day = date.weekday().num_days_from_sunday();
		match self {
			Self::Weekday(weekday) => day == *weekday,
			Self::NthWeekday { weekday, nth } => {
				day == *weekday && (date.day() - 1) / 7 + 1 == *nth
			}
			Self::LastWeekday { weekday } => {
				day == *weekday && date.day() + 7 > last_day_of_month(date.year(), date.month())
			}
		}
	}
}

fn last_day_of_month(year: i32, month: u32) -> u32 {
	let (next_year, next_month) = if month == 12 {
		(year + 1, 1)
	} else {
		(year, month + 1)
	};
	NaiveDate::from_ymd_opt(next_year, next_month, 1)
		.and_then(|first| first.pred_opt())
		.map(|last| last.day())
		.unwrap_or(31)
}
