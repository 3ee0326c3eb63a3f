// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Upcoming fire-time previews.

use chrono::{DateTime, TimeZone, Utc};
use chrono_tz::Tz;
use cron::Schedule;
use tracing::warn;

use carillon_core::CronExpr;

use crate::error::{EngineError, Result};
use crate::schedule::FireFilter;
use crate::validate;

/// Number of previews shown by default.
pub const DEFAULT_PLAN_COUNT: usize = 5;

/// Display format for previews: "2026-01-20 00:00:00".
pub const PLAN_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Candidate fires scanned before concluding a schedule never matches
/// its filter.
const SCAN_LIMIT: usize = 10_000;

/// The next `count` fire instants strictly after `after`.
pub fn next_fire_instants(
	raw: &str,
	count: usize,
	after: DateTime<Utc>,
) -> Result<Vec<DateTime<Utc>>> {
	let expr = CronExpr::parse(raw)?;
	let (schedule, filter) = validate::checked_schedule(&expr)?;
	collect_fires(&schedule, &filter, &after, count)
}

/// Format the next `count` fires from now, in UTC.
pub fn next_fire_times(raw: &str, count: usize) -> Result<Vec<String>> {
	let fires = next_fire_instants(raw, count, Utc::now())?;
	Ok(fires
		.iter()
		.map(|fire| fire.format(PLAN_TIME_FORMAT).to_string())
		.collect())
}

/// Format the next `count` fires from now in an IANA timezone.
pub fn next_fire_times_in_tz(raw: &str, count: usize, timezone: &str) -> Result<Vec<String>> {
	let tz: Tz = timezone
		.parse()
		.map_err(|_| EngineError::Timezone(timezone.to_string()))?;
	let expr = CronExpr::parse(raw)?;
	let (schedule, filter) = validate::checked_schedule(&expr)?;
	let after = Utc::now().with_timezone(&tz);
	let fires = collect_fires(&schedule, &filter, &after, count)?;
	Ok(fires
		.iter()
		.map(|fire| fire.format(PLAN_TIME_FORMAT).to_string())
		.collect())
}

/// Minutes between the next two fires.
///
/// Fails when the schedule cannot produce two more fires, which also
/// covers expressions that never fire at all.
pub fn interval_minutes(raw: &str) -> Result<i64> {
	let mut fires = next_fire_instants(raw, 2, Utc::now())?.into_iter();
	match (fires.next(), fires.next()) {
		(Some(first), Some(second)) => Ok((second - first).num_minutes()),
		_ => Err(EngineError::Unsatisfiable),
	}
}

fn collect_fires<Z: TimeZone>(
	schedule: &Schedule,
	filter: &FireFilter,
	after: &DateTime<Z>,
	count: usize,
) -> Result<Vec<DateTime<Z>>> {
	if count == 0 {
		return Ok(Vec::new());
	}
	let mut fires = Vec::with_capacity(count);
	for fire in schedule.after(after).take(SCAN_LIMIT) {
		if filter.matches(&fire) {
			fires.push(fire);
			if fires.len() == count {
				return Ok(fires);
			}
		}
	}
	warn!(requested = count, found = fires.len(), "schedule ran out of fire times");
	Err(EngineError::Unsatisfiable)
}
