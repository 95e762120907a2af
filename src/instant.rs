// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Points in time accepted by [`TimeDifference::between`](crate::TimeDifference::between).
//!
//! The duration maths only needs one thing from an instant: its position on
//! the Unix time axis, as a floating-point number of seconds. [`Instant`]
//! captures exactly that and is implemented for the usual chrono and std
//! types, plus raw epoch values.
//!
//! Parsing strings or other loose representations into one of these types
//! is left to the caller.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, TimeZone};
use qtty::Seconds;
use std::time::{SystemTime, UNIX_EPOCH};

/// Trait for types that represent a point in time.
///
/// Implementors map themselves to seconds since the Unix epoch
/// (1970-01-01T00:00:00Z). Fractional seconds are kept.
pub trait Instant {
    /// Seconds since the Unix epoch.
    fn epoch_seconds(&self) -> f64;
}

impl<T: Instant + ?Sized> Instant for &T {
    #[inline]
    fn epoch_seconds(&self) -> f64 {
        (**self).epoch_seconds()
    }
}

// ── Raw epoch values ──────────────────────────────────────────────────────

impl Instant for f64 {
    #[inline]
    fn epoch_seconds(&self) -> f64 {
        *self
    }
}

impl Instant for i64 {
    #[inline]
    fn epoch_seconds(&self) -> f64 {
        *self as f64
    }
}

impl Instant for Seconds {
    #[inline]
    fn epoch_seconds(&self) -> f64 {
        self.value()
    }
}

// ── chrono ────────────────────────────────────────────────────────────────

impl<Tz: TimeZone> Instant for DateTime<Tz> {
    fn epoch_seconds(&self) -> f64 {
        let seconds = self.timestamp() as f64;
        let nanos = self.timestamp_subsec_nanos() as f64 / 1e9;
        seconds + nanos
    }
}

/// Naive date-times are read as UTC.
impl Instant for NaiveDateTime {
    #[inline]
    fn epoch_seconds(&self) -> f64 {
        self.and_utc().epoch_seconds()
    }
}

/// A bare date stands for midnight UTC at the start of that day.
impl Instant for NaiveDate {
    #[inline]
    fn epoch_seconds(&self) -> f64 {
        self.and_time(NaiveTime::default()).epoch_seconds()
    }
}

// ── std ───────────────────────────────────────────────────────────────────

impl Instant for SystemTime {
    fn epoch_seconds(&self) -> f64 {
        match self.duration_since(UNIX_EPOCH) {
            Ok(after) => after.as_secs_f64(),
            Err(before) => -before.duration().as_secs_f64(),
        }
    }
}
