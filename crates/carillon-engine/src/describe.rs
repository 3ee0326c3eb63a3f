// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Natural-language schedule descriptions.
//!
//! An expression is read out as a cadence word followed by the fields
//! that matter for that cadence, most significant first. Each field
//! token is decomposed into [`FieldNode`]s whose range and step pieces
//! drive the phrasing.

use carillon_core::{CronExpr, DateType, Field, ScheduleDescriptor, ScheduleMode, SimpleSchedule};
use carillon_i18n::{t, t_fmt};

use crate::error::Result;

/// One parsed subtoken of a field: the raw text plus the range and
/// step pieces used for phrasing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldNode {
	pub raw: String,
	pub min: Option<u32>,
	pub max: Option<u32>,
	pub interval: Option<u32>,
}

/// Split a field token into nodes, decomposing steps and ranges.
///
/// `*` and `?` substitute the field's full range first, so `*/5` in
/// the minute field reads as 0 through 59 every 5.
pub fn parse_nodes(field: Field, token: &str) -> Vec<FieldNode> {
	token.split(',').map(|sub| parse_node(field, sub)).collect()
}

fn parse_node(field: Field, sub: &str) -> FieldNode {
	let (min, max) = field.bounds();
	let range = format!("{}-{}", min, max);
	let substituted = sub.replace('*', &range).replace('?', &range);

	let mut node = FieldNode {
		raw: sub.to_string(),
		min: None,
		max: None,
		interval: None,
	};
	let head = match substituted.split_once('/') {
		Some((head, step)) => {
			node.interval = step.parse().ok();
			head.to_string()
		}
		None => substituted,
	};
	match head.split_once('-') {
		Some((begin, end)) => {
			node.min = begin.parse().ok();
			node.max = end.parse().ok();
		}
		None => {
			if node.interval.is_some() {
				node.min = head.parse().ok();
			}
		}
	}
	node
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Cadence {
	Daily,
	Weekly,
	Monthly,
	Yearly,
}

impl Cadence {
	fn key(self) -> &'static str {
		match self {
			Self::Daily => "schedule.cadence.every_day",
			Self::Weekly => "schedule.cadence.every_week",
			Self::Monthly => "schedule.cadence.every_month",
			Self::Yearly => "schedule.cadence.every_year",
		}
	}
}

fn is_wildcard(token: &str) -> bool {
	token == "*" || token == "?"
}

/// Pick the cadence word and the fields worth reading out.
///
/// A day-of-week token with `L` or `#` reads as a monthly schedule
/// even though day-of-month is wildcarded, since those markers repeat
/// per month rather than per week.
fn classify(expr: &CronExpr) -> (Cadence, Vec<Field>) {
	let day_wild = is_wildcard(expr.token(Field::DayOfMonth));
	let month_wild = is_wildcard(expr.token(Field::Month));
	let week = expr.token(Field::DayOfWeek);
	let week_wild = is_wildcard(week);

	if day_wild && month_wild && week_wild {
		(Cadence::Daily, vec![Field::Hour, Field::Minute, Field::Second])
	} else if day_wild && month_wild {
		let cadence = if week.contains('L') || week.contains('#') {
			Cadence::Monthly
		} else {
			Cadence::Weekly
		};
		(
			cadence,
			vec![Field::DayOfWeek, Field::Hour, Field::Minute, Field::Second],
		)
	} else if month_wild {
		(
			Cadence::Monthly,
			vec![Field::DayOfMonth, Field::Hour, Field::Minute, Field::Second],
		)
	} else {
		(
			Cadence::Yearly,
			vec![
				Field::Month,
				Field::DayOfMonth,
				Field::DayOfWeek,
				Field::Hour,
				Field::Minute,
				Field::Second,
			],
		)
	}
}

/// Describe a raw custom-mode expression.
pub fn describe_custom(raw: &str, locale: &str) -> Result<String> {
	Ok(describe_expr(&CronExpr::parse(raw)?, locale))
}

/// Describe a parsed expression.
pub fn describe_expr(expr: &CronExpr, locale: &str) -> String {
	let (cadence, fields) = classify(expr);
	let separator = t(locale, "schedule.describe.list_separator");
	let mut parts = vec![t(locale, cadence.key())];
	for field in fields {
		let nodes = parse_nodes(field, expr.token(field));
		let rendered: Vec<String> = nodes
			.iter()
			.map(|node| render_node(field, node, locale))
			.filter(|text| !text.is_empty())
			.collect();
		if !rendered.is_empty() {
			parts.push(rendered.join(&separator));
		}
	}
	parts.join(" ")
}

/// Describe simple-mode picker state.
pub fn describe_simple(state: &SimpleSchedule, locale: &str) -> String {
	let separator = t(locale, "schedule.describe.list_separator");
	let cadence_key = match state.date_type {
		DateType::Day => "schedule.cadence.every_day",
		DateType::Week => "schedule.cadence.every_week",
		DateType::Month => "schedule.cadence.every_month",
	};
	let mut parts = vec![t(locale, cadence_key)];
	if !state.days_of_week.is_empty() {
		let labels: Vec<String> = sorted(&state.days_of_week)
			.iter()
			.map(|&day| picker_weekday_label(day, locale))
			.collect();
		parts.push(labels.join(&separator));
	}
	if !state.days_of_month.is_empty() {
		let labels: Vec<String> = sorted(&state.days_of_month)
			.iter()
			.map(|&day| value_label(Field::DayOfMonth, day, locale))
			.collect();
		parts.push(labels.join(&separator));
	}
	if !state.hours.is_empty() {
		let labels: Vec<String> = sorted(&state.hours)
			.iter()
			.map(|&hour| {
				t_fmt(
					locale,
					"schedule.label.hour_of_day",
					&[("hour", &format!("{:02}", hour))],
				)
			})
			.collect();
		parts.push(labels.join(&separator));
	}
	parts.join(" ")
}

/// Describe a descriptor according to its mode.
pub fn describe_descriptor(descriptor: &ScheduleDescriptor, locale: &str) -> String {
	match descriptor.mode {
		ScheduleMode::Simple => describe_simple(&descriptor.simple, locale),
		ScheduleMode::Custom => describe_expr(&descriptor.expr, locale),
	}
}

fn render_node(field: Field, node: &FieldNode, locale: &str) -> String {
	if is_wildcard(&node.raw) && node.interval.is_none() {
		if node.raw == "?" {
			return String::new();
		}
		return t(locale, field.wildcard_key());
	}
	match (node.min, node.max, node.interval) {
		(Some(min), Some(max), Some(interval)) => t_fmt(
			locale,
			"schedule.describe.step_range",
			&[
				("begin", &value_label(field, min, locale)),
				("end", &value_label(field, max, locale)),
				("interval", &interval.to_string()),
				("unit", &t(locale, field.unit_key())),
			],
		),
		(Some(min), None, Some(interval)) => t_fmt(
			locale,
			"schedule.describe.step_from",
			&[
				("begin", &value_label(field, min, locale)),
				("interval", &interval.to_string()),
				("unit", &t(locale, field.unit_key())),
			],
		),
		(Some(min), Some(max), None) => t_fmt(
			locale,
			"schedule.describe.range",
			&[
				("begin", &value_label(field, min, locale)),
				("end", &value_label(field, max, locale)),
			],
		),
		_ => raw_label(field, &node.raw, locale),
	}
}

/// Label for one plain numeric value in the given field.
fn value_label(field: Field, value: u32, locale: &str) -> String {
	match field {
		Field::Second => t_fmt(locale, "schedule.label.second", &[("value", &value.to_string())]),
		Field::Minute => t_fmt(locale, "schedule.label.minute", &[("value", &value.to_string())]),
		Field::Hour => t_fmt(locale, "schedule.label.hour", &[("value", &value.to_string())]),
		Field::DayOfMonth => t_fmt(
			locale,
			"schedule.label.day_of_month",
			&[("value", &value.to_string())],
		),
		Field::Month => month_label(value, locale),
		Field::DayOfWeek => wire_weekday_label(value, locale),
	}
}

/// Label for a subtoken that did not decompose into range pieces:
/// plain values and the day special markers.
fn raw_label(field: Field, raw: &str, locale: &str) -> String {
	if let Ok(value) = raw.parse::<u32>() {
		return value_label(field, value, locale);
	}
	match field {
		Field::DayOfMonth if raw == "L" => t(locale, "schedule.label.last_day_of_month"),
		Field::DayOfWeek => {
			day_of_week_special_label(raw, locale).unwrap_or_else(|| raw.to_string())
		}
		_ => raw.to_string(),
	}
}

fn day_of_week_special_label(raw: &str, locale: &str) -> Option<String> {
	if raw == "L" {
		return Some(t(locale, "schedule.label.last_week_of_month"));
	}
	if let Some(day) = raw.strip_suffix('L') {
		let weekday = day.parse::<u32>().ok()?;
		return Some(t_fmt(
			locale,
			"schedule.label.last_weekday_of_month",
			&[("weekday", &wire_weekday_label(weekday, locale))],
		));
	}
	if let Some((day, nth)) = raw.split_once('#') {
		let weekday = day.parse::<u32>().ok()?;
		let nth = nth.parse::<u32>().ok()?;
		return Some(t_fmt(
			locale,
			"schedule.label.nth_weekday_of_month",
			&[
				("weekday", &wire_weekday_label(weekday, locale)),
				("nth", &nth.to_string()),
			],
		));
	}
	None
}

fn month_label(month: u32, locale: &str) -> String {
	let key = match month {
		1 => "schedule.month.january",
		2 => "schedule.month.february",
		3 => "schedule.month.march",
		4 => "schedule.month.april",
		5 => "schedule.month.may",
		6 => "schedule.month.june",
		7 => "schedule.month.july",
		8 => "schedule.month.august",
		9 => "schedule.month.september",
		10 => "schedule.month.october",
		11 => "schedule.month.november",
		12 => "schedule.month.december",
		_ => return month.to_string(),
	};
	t(locale, key)
}

/// Weekday label for a wire ordinal (0 and 7 both mean Sunday).
fn wire_weekday_label(day: u32, locale: &str) -> String {
	let key = match day {
		0 | 7 => "schedule.weekday.sunday",
		1 => "schedule.weekday.monday",
		2 => "schedule.weekday.tuesday",
		3 => "schedule.weekday.wednesday",
		4 => "schedule.weekday.thursday",
		5 => "schedule.weekday.friday",
		6 => "schedule.weekday.saturday",
		_ => return day.to_string(),
	};
	t(locale, key)
}

/// Weekday label for a picker ordinal (1 = Monday through 7 = Sunday).
fn picker_weekday_label(day: u32, locale: &str) -> String {
	let key = match day {
		1 => "schedule.weekday.monday",
		2 => "schedule.weekday.tuesday",
		3 => "schedule.weekday.wednesday",
		4 => "schedule.weekday.thursday",
		5 => "schedule.weekday.friday",
		6 => "schedule.weekday.saturday",
		7 => "schedule.weekday.sunday",
		_ => return day.to_string(),
	};
	t(locale, key)
}

fn sorted(values: &[u32]) -> Vec<u32> {
	let mut values = values.to_vec();
	values.sort_unstable();
	values.dedup();
	values
}

#[cfg(test)]
mod tests {
	use super::*;

	fn node(field: Field, token: &str) -> FieldNode {
		parse_nodes(field, token).remove(0)
	}

	#[test]
	fn nodes_decompose_steps_and_ranges() {
		assert_eq!(
			node(Field::Minute, "*/5"),
			FieldNode {
				raw: "*/5".to_string(),
				min: Some(0),
				max: Some(59),
				interval: Some(5),
			}
		);
		assert_eq!(
			node(Field::Minute, "10-30"),
			FieldNode {
				raw: "10-30".to_string(),
				min: Some(10),
				max: Some(30),
				interval: None,
			}
		);
		assert_eq!(
			node(Field::Minute, "30/5"),
			FieldNode {
				raw: "30/5".to_string(),
				min: Some(30),
				max: None,
				interval: Some(5),
			}
		);
		assert_eq!(
			node(Field::Minute, "15"),
			FieldNode {
				raw: "15".to_string(),
				min: None,
				max: None,
				interval: None,
			}
		);
	}

	#[test]
	fn comma_tokens_split_into_multiple_nodes() {
		let nodes = parse_nodes(Field::Hour, "6,18");
		assert_eq!(nodes.len(), 2);
		assert_eq!(nodes[0].raw, "6");
		assert_eq!(nodes[1].raw, "18");
	}

	#[test]
	fn daily_expression() {
		assert_eq!(
			describe_custom("0 0 0 * * ?", "en").unwrap(),
			"every day hour 0 minute 0 second 0"
		);
		assert_eq!(describe_custom("0 0 0 * * ?", "zh").unwrap(), "每天 0时 0分 0秒");
	}

	#[test]
	fn weekly_expression() {
		assert_eq!(
			describe_custom("0 0 9 ? * 1", "en").unwrap(),
			"every week Monday hour 9 minute 0 second 0"
		);
		assert_eq!(
			describe_custom("0 0 9 ? * 1", "zh").unwrap(),
			"每周 周一 9时 0分 0秒"
		);
	}

	#[test]
	fn monthly_expression() {
		assert_eq!(
			describe_custom("0 0 0 1,15 * ?", "en").unwrap(),
			"every month day 1, day 15 hour 0 minute 0 second 0"
		);
		assert_eq!(
			describe_custom("0 0 0 1,15 * ?", "zh").unwrap(),
			"每月 1日、15日 0时 0分 0秒"
		);
	}

	#[test]
	fn yearly_expression() {
		assert_eq!(
			describe_custom("0 0 0 1 1 ?", "en").unwrap(),
			"every year January day 1 hour 0 minute 0 second 0"
		);
		assert_eq!(
			describe_custom("0 0 0 1 1 ?", "zh").unwrap(),
			"每年 1月 1日 0时 0分 0秒"
		);
	}

	#[test]
	fn nth_weekday_reads_as_monthly() {
		assert_eq!(
			describe_custom("0 0 0 ? * 6#3", "en").unwrap(),
			"every month Saturday of week 3 of the month hour 0 minute 0 second 0"
		);
		assert_eq!(
			describe_custom("0 0 0 ? * 6#3", "zh").unwrap(),
			"每月 第3周周六 0时 0分 0秒"
		);
	}

	#[test]
	fn last_weekday_reads_as_monthly() {
		assert_eq!(
			describe_custom("0 0 0 ? * 6L", "en").unwrap(),
			"every month Saturday of the last week of the month hour 0 minute 0 second 0"
		);
		assert_eq!(
			describe_custom("0 0 0 ? * 6L", "zh").unwrap(),
			"每月 最后一周周六 0时 0分 0秒"
		);
	}

	#[test]
	fn last_day_of_month_label() {
		assert_eq!(
			describe_custom("0 0 0 L * ?", "en").unwrap(),
			"every month the last day of the month hour 0 minute 0 second 0"
		);
	}

	#[test]
	fn interval_phrasing() {
		assert_eq!(
			describe_custom("0 0/5 * * * ?", "en").unwrap(),
			"every day every hour minute 0 onward every 5 minutes second 0"
		);
		assert_eq!(
			describe_custom("0 10-30/5 * * * ?", "en").unwrap(),
			"every day every hour minute 10 to minute 30 every 5 minutes second 0"
		);
		assert_eq!(
			describe_custom("0 0 9-17 * * ?", "en").unwrap(),
			"every day hour 9 to hour 17 minute 0 second 0"
		);
	}

	#[test]
	fn sunday_aliases_share_a_label() {
		assert_eq!(
			describe_custom("0 0 0 ? * 0", "en").unwrap(),
			describe_custom("0 0 0 ? * 7", "en").unwrap()
		);
	}

	#[test]
	fn descriptions_are_stable() {
		let first = describe_custom("0 30 9 ? * 1-5", "en").unwrap();
		let second = describe_custom("0 30 9 ? * 1-5", "en").unwrap();
		assert_eq!(first, second);
	}

	#[test]
	fn invalid_raw_input_errors() {
		assert!(describe_custom("* * *", "en").is_err());
	}

	#[test]
	fn simple_state_descriptions() {
		let state = SimpleSchedule::default();
		assert_eq!(describe_simple(&state, "en"), "every day 00:00");
		assert_eq!(describe_simple(&state, "zh"), "每天 00:00");

		let mut state = SimpleSchedule::default();
		state.set_date_type(DateType::Week);
		state.set_days_of_week(vec![7, 1]);
		state.set_hours(vec![18, 9]);
		assert_eq!(
			describe_simple(&state, "en"),
			"every week Monday, Sunday 09:00, 18:00"
		);
		assert_eq!(describe_simple(&state, "zh"), "每周 周一、周日 09:00、18:00");

		let mut state = SimpleSchedule::default();
		state.set_date_type(DateType::Month);
		state.set_days_of_month(vec![15, 1]);
		assert_eq!(describe_simple(&state, "en"), "every month day 1, day 15 00:00");
		assert_eq!(describe_simple(&state, "zh"), "每月 1日、15日 00:00");
	}

	#[test]
	fn descriptor_description_follows_mode() {
		let mut descriptor = ScheduleDescriptor::default();
		assert_eq!(describe_descriptor(&descriptor, "en"), "every day 00:00");

		descriptor.set_mode(ScheduleMode::Custom);
		assert_eq!(
			describe_descriptor(&descriptor, "en"),
			"every day hour 0 minute 0 second 0"
		);
	}
}
