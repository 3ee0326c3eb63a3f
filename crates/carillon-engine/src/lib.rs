// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Cron schedule engine for Carillon.
//!
//! Validates six-field cron expressions, builds them from simple-mode
//! picker state, renders natural-language descriptions, and previews
//! upcoming fire times.
//!
//! ```
//! use carillon_engine::{describe_custom, validate_cron_string};
//!
//! let outcome = validate_cron_string("0 0 9 ? * 1-5", "en");
//! assert!(outcome.valid);
//!
//! let text = describe_custom("0 0 9 ? * 1", "en").unwrap();
//! assert_eq!(text, "every week Monday hour 9 minute 0 second 0");
//! ```

pub mod build;
pub mod describe;
pub mod error;
pub mod plan;
mod schedule;
pub mod validate;

pub use build::{apply_field_edit, build, edit_descriptor, DAILY_BASELINE, WEEKLY_BASELINE};
pub use describe::{
	describe_custom, describe_descriptor, describe_expr, describe_simple, parse_nodes, FieldNode,
};
pub use error::{EngineError, Result};
pub use plan::{
	interval_minutes, next_fire_instants, next_fire_times, next_fire_times_in_tz,
	DEFAULT_PLAN_COUNT, PLAN_TIME_FORMAT,
};
pub use validate::{
	structural_violations, validate, validate_cron_string, validate_expr, Validation,
};
