// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Core types for the Carillon cron schedule editor.
//!
//! A schedule is a six-field cron expression
//! (`second minute hour day-of-month month day-of-week`) plus the
//! picker state the simple editing mode works from. This crate holds
//! the value types shared by the engine and any API surface; the
//! validation, building, and preview logic lives in `carillon-engine`.
//!
//! ```
//! use carillon_core::{CronExpr, Field};
//!
//! let expr = CronExpr::parse("0 30 9 ? * 1").unwrap();
//! assert_eq!(expr.token(Field::Hour), "9");
//! assert_eq!(expr.with_token(Field::Hour, "18").to_string(), "0 30 18 ? * 1");
//! ```

pub mod error;
pub mod expr;
pub mod field;
pub mod state;

pub use error::{Result, ScheduleError};
pub use expr::{CronExpr, DEFAULT_EXPRESSION};
pub use field::Field;
pub use state::{DateType, ScheduleDescriptor, ScheduleMode, SimpleSchedule};
