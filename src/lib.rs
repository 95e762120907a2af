// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Time Difference
//!
//! Elapsed time between two instants, viewed in several units.
//!
//! # Core types
//!
//! - [`TimeDifference`] — absolute duration between two instants, with
//!   ratio queries, a greedy breakdown, and a humanized phrase.
//!   [`DurationCalculator`] is an alias.
//! - [`Instant`] — trait for points in time (epoch-seconds conversion).
//! - [`TimeUnit`] — the fixed units, longest first.
//! - [`UnitTable`] — ordered `(unit, length)` pairs driving the breakdown.
//! - [`Breakdown`] — whole-unit counts produced by the breakdown.
//! - [`DurationError`] — errors from the fallible constructors.
//!
//! # Units
//!
//! All lengths are fixed averages; there is no calendar arithmetic.
//!
//! | Unit | Length |
//! |------|--------|
//! | years | 365.25 days |
//! | months | 30.42 days |
//! | weeks | 7 days |
//! | days | 86 400 s |
//! | hours | 3 600 s |
//! | minutes | 60 s |
//! | seconds | 1 s |
//!
//! # Quick example
//!
//! ```rust
//! use chrono::{TimeZone, Utc};
//! use timediff::TimeDifference;
//!
//! let start = Utc.with_ymd_and_hms(2024, 1, 1, 9, 0, 0).unwrap();
//! let end = Utc.with_ymd_and_hms(2024, 1, 2, 11, 15, 0).unwrap();
//!
//! let diff = TimeDifference::between(start, end);
//! assert_eq!(diff.in_hours(), 26.25);
//! assert_eq!(diff.humanize().as_deref(), Some("1 day, 2 hours and 15 minutes"));
//! ```
//!
//! # Features
//!
//! - `serde`: `Serialize`/`Deserialize` for [`TimeUnit`], [`UnitTable`] and
//!   [`Breakdown`].

mod breakdown;
mod difference;
mod error;
mod instant;
mod unit;

// ── Re-exports ────────────────────────────────────────────────────────────

pub use breakdown::Breakdown;
pub use difference::{DurationCalculator, TimeDifference};
pub use error::{DurationError, Result};
pub use instant::Instant;
pub use unit::{TimeUnit, UnitTable, AVERAGE_MONTH_DAYS, JULIAN_YEAR_DAYS, SECONDS_PER_DAY};
