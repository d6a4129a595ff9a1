//! # worktime-engine
//!
//! Business-calendar arithmetic over fixed-offset timestamps.
//!
//! The engine answers three questions about instants under a configurable
//! calendar (work week, daily work-hour windows, holidays, per-date
//! overrides): is this instant inside working time, how much working time
//! elapsed between two instants, and where does an instant land after
//! shifting it by a working-time offset.
//!
//! All operations are pure functions taking a [`CalendarConfig`] snapshot by
//! reference. Parsing, timezone-database lookups, and config-file loading are
//! the caller's job — the engine works on already-resolved
//! `DateTime<FixedOffset>` values.
//!
//! ## Modules
//!
//! - [`config`] — calendar rule snapshot and its builder
//! - [`classify`] — working-day / within-window predicates
//! - [`window`] — effective work-hour window for a calendar date
//! - [`roll`] — snap an instant to the nearest valid business instant
//! - [`duration`] — signed business durations and duration offsetting
//! - [`error`] — error types

pub mod classify;
pub mod config;
pub mod duration;
pub mod error;
pub mod roll;
pub mod window;

pub use classify::{is_within_window, is_work_week_day, is_working_day};
pub use config::{CalendarConfig, CalendarConfigBuilder, WorkWindow};
pub use duration::{business_duration_between, offset_by};
pub use error::{Result, WorktimeError};
pub use roll::{next_business_day, previous_business_day, roll, RollDirection};
pub use window::{beginning_of_workday, end_of_workday, window_for, DayWindow};
