// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Static translation catalog.
//!
//! Keys use hierarchical dot notation under the `schedule.` prefix,
//! e.g. `schedule.error.day_week_conflict`. Lookups fall back to the
//! default locale and finally to the key itself, so rendering never
//! fails outright on a missing entry.

use tracing::debug;

use crate::locale::DEFAULT_LOCALE;

/// Translate `key` into `locale`.
///
/// Falls back to the default locale, then to the key itself.
pub fn t(locale: &str, key: &str) -> String {
	if let Some(text) = lookup(locale, key) {
		return text.to_string();
	}
	if let Some(text) = lookup(DEFAULT_LOCALE, key) {
		return text.to_string();
	}
	debug!(locale, key, "missing translation");
	key.to_string()
}

/// Translate `key` and substitute `{name}` placeholders.
///
/// Unknown placeholders are left in place.
pub fn t_fmt(locale: &str, key: &str, vars: &[(&str, &str)]) -> String {
	let mut text = t(locale, key);
	for (name, value) in vars {
		text = text.replace(&format!("{{{}}}", name), value);
	}
	text
}

fn lookup(locale: &str, key: &str) -> Option<&'static str> {
	match locale {
		"en" => lookup_en(key),
		"zh" => lookup_zh(key),
		_ => None,
	}
}

fn lookup_en(key: &str) -> Option<&'static str> {
	let text = match key {
		"schedule.field.second.label" => "Second",
		"schedule.field.minute.label" => "Minute",
		"schedule.field.hour.label" => "Hour",
		"schedule.field.day_of_month.label" => "Day",
		"schedule.field.month.label" => "Month",
		"schedule.field.day_of_week.label" => "Week",

		"schedule.field.second.tip" => "Allowed values 0-59 and characters * , - /",
		"schedule.field.minute.tip" => "Allowed values 0-59 and characters * , - /",
		"schedule.field.hour.tip" => "Allowed values 0-23 and characters * , - /",
		"schedule.field.day_of_month.tip" => "Allowed values 1-31 and characters * , - / ? L",
		"schedule.field.month.tip" => "Allowed values 1-12 and characters * , - /",
		"schedule.field.day_of_week.tip" => {
			"Allowed values 0-7 and characters * , - / ? L # (0 and 7 both mean Sunday)"
		}

		"schedule.cadence.every_day" => "every day",
		"schedule.cadence.every_week" => "every week",
		"schedule.cadence.every_month" => "every month",
		"schedule.cadence.every_year" => "every year",
		"schedule.cadence.every_second" => "every second",
		"schedule.cadence.every_minute" => "every minute",
		"schedule.cadence.every_hour" => "every hour",
		"schedule.cadence.every_day_of_week" => "every day of the week",

		"schedule.unit.seconds" => "seconds",
		"schedule.unit.minutes" => "minutes",
		"schedule.unit.hours" => "hours",
		"schedule.unit.days" => "days",
		"schedule.unit.months" => "months",
		"schedule.unit.weekdays" => "days of the week",

		"schedule.weekday.sunday" => "Sunday",
		"schedule.weekday.monday" => "Monday",
		"schedule.weekday.tuesday" => "Tuesday",
		"schedule.weekday.wednesday" => "Wednesday",
		"schedule.weekday.thursday" => "Thursday",
		"schedule.weekday.friday" => "Friday",
		"schedule.weekday.saturday" => "Saturday",

		"schedule.month.january" => "January",
		"schedule.month.february" => "February",
		"schedule.month.march" => "March",
		"schedule.month.april" => "April",
		"schedule.month.may" => "May",
		"schedule.month.june" => "June",
		"schedule.month.july" => "July",
		"schedule.month.august" => "August",
		"schedule.month.september" => "September",
		"schedule.month.october" => "October",
		"schedule.month.november" => "November",
		"schedule.month.december" => "December",

		"schedule.label.second" => "second {value}",
		"schedule.label.minute" => "minute {value}",
		"schedule.label.hour" => "hour {value}",
		"schedule.label.day_of_month" => "day {value}",
		"schedule.label.hour_of_day" => "{hour}:00",
		"schedule.label.last_day_of_month" => "the last day of the month",
		"schedule.label.last_week_of_month" => "the last week of the month",
		"schedule.label.last_weekday_of_month" => "{weekday} of the last week of the month",
		"schedule.label.nth_weekday_of_month" => "{weekday} of week {nth} of the month",

		"schedule.describe.range" => "{begin} to {end}",
		"schedule.describe.step_range" => "{begin} to {end} every {interval} {unit}",
		"schedule.describe.step_from" => "{begin} onward every {interval} {unit}",
		"schedule.describe.list_separator" => ", ",

		"schedule.error.field_count" => "the expression must have 6 space-separated fields",
		"schedule.error.invalid_field" => "the expression is invalid",
		"schedule.error.day_week_both_star" => "day and week cannot both be '*'",
		"schedule.error.day_week_both_unset" => "day and week cannot both be '?'",
		"schedule.error.day_week_conflict" => "day and week cannot both be set",
		"schedule.error.value_out_of_range" => "a selected value is out of range",
		"schedule.error.expression" => "the cron expression is invalid",
		"schedule.error.timezone" => "unknown timezone",
		"schedule.error.unsatisfiable" => "the expression never fires",

		_ => return None,
	};
	Some(text)
}

fn lookup_zh(key: &str) -> Option<&'static str> {
	let text = match key {
		"schedule.field.second.label" => "秒",
		"schedule.field.minute.label" => "分",
		"schedule.field.hour.label" => "时",
		"schedule.field.day_of_month.label" => "日",
		"schedule.field.month.label" => "月",
		"schedule.field.day_of_week.label" => "周",

		"schedule.field.second.tip" => "可填写0-59以及字符* , - /",
		"schedule.field.minute.tip" => "可填写0-59以及字符* , - /",
		"schedule.field.hour.tip" => "可填写0-23以及字符* , - /",
		"schedule.field.day_of_month.tip" => "可填写1-31以及字符* , - / ? L",
		"schedule.field.month.tip" => "可填写1-12以及字符* , - /",
		"schedule.field.day_of_week.tip" => "可填写0-7以及字符* , - / ? L #（0和7均表示周日）",

		"schedule.cadence.every_day" => "每天",
		"schedule.cadence.every_week" => "每周",
		"schedule.cadence.every_month" => "每月",
		"schedule.cadence.every_year" => "每年",
		"schedule.cadence.every_second" => "每秒",
		"schedule.cadence.every_minute" => "每分钟",
		"schedule.cadence.every_hour" => "每小时",
		"schedule.cadence.every_day_of_week" => "每周每天",

		"schedule.unit.seconds" => "秒",
		"schedule.unit.minutes" => "分钟",
		"schedule.unit.hours" => "小时",
		"schedule.unit.days" => "天",
		"schedule.unit.months" => "个月",
		"schedule.unit.weekdays" => "天",

		"schedule.weekday.sunday" => "周日",
		"schedule.weekday.monday" => "周一",
		"schedule.weekday.tuesday" => "周二",
		"schedule.weekday.wednesday" => "周三",
		"schedule.weekday.thursday" => "周四",
		"schedule.weekday.friday" => "周五",
		"schedule.weekday.saturday" => "周六",

		"schedule.month.january" => "1月",
		"schedule.month.february" => "2月",
		"schedule.month.march" => "3月",
		"schedule.month.april" => "4月",
		"schedule.month.may" => "5月",
		"schedule.month.june" => "6月",
		"schedule.month.july" => "7月",
		"schedule.month.august" => "8月",
		"schedule.month.september" => "9月",
		"schedule.month.october" => "10月",
		"schedule.month.november" => "11月",
		"schedule.month.december" => "12月",

		"schedule.label.second" => "{value}秒",
		"schedule.label.minute" => "{value}分",
		"schedule.label.hour" => "{value}时",
		"schedule.label.day_of_month" => "{value}日",
		"schedule.label.hour_of_day" => "{hour}:00",
		"schedule.label.last_day_of_month" => "每月最后一天",
		"schedule.label.last_week_of_month" => "每月最后一周",
		"schedule.label.last_weekday_of_month" => "最后一周{weekday}",
		"schedule.label.nth_weekday_of_month" => "第{nth}周{weekday}",

		"schedule.describe.range" => "{begin}至{end}",
		"schedule.describe.step_range" => "{begin}至{end}每隔{interval}{unit}",
		"schedule.describe.step_from" => "{begin}开始每隔{interval}{unit}",
		"schedule.describe.list_separator" => "、",

		"schedule.error.field_count" => "表达式必须由6个字段组成",
		"schedule.error.invalid_field" => "表达式不合法",
		"schedule.error.day_week_both_star" => "日和周不能同时为*",
		"schedule.error.day_week_both_unset" => "日和周不能同时为?",
		"schedule.error.day_week_conflict" => "日和周不能同时指定",
		"schedule.error.value_out_of_range" => "取值超出范围",
		"schedule.error.expression" => "cron表达式不合法",
		"schedule.error.timezone" => "未知时区",
		"schedule.error.unsatisfiable" => "表达式没有可执行的时间",

		_ => return None,
	};
	Some(text)
}
