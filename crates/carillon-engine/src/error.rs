// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Error types for the schedule engine.

use thiserror::Error;

use carillon_core::ScheduleError;
use carillon_i18n::t;

/// Result type for engine operations.
pub type Result<T> = std::result::Result<T, EngineError>;

/// Errors raised while validating, building, or previewing schedules.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
	#[error("{0}")]
	Schedule(#[from] ScheduleError),

	#[error("invalid cron expression: {0}")]
	Expression(String),

	#[error("invalid timezone: {0}")]
	Timezone(String),

	#[error("no upcoming fire times")]
	Unsatisfiable,
}

impl EngineError {
	/// Catalog key for the user-facing message.
	pub fn message_key(&self) -> &'static str {
		match self {
			Self::Schedule(err) => err.message_key(),
			Self::Expression(_) => "schedule.error.expression",
			Self::Timezone(_) => "schedule.error.timezone",
			Self::Unsatisfiable => "schedule.error.unsatisfiable",
		}
	}

	/// Localized user-facing message.
	///
	/// Engine parse details stay in logs; users see the catalog text
	/// for the error class.
	pub fn localized_message(&self, locale: &str) -> String {
		t(locale, self.message_key())
	}
}
