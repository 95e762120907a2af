// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Elapsed time between two instants.
//!
//! [`TimeDifference`] stores a single non-negative [`Seconds`] quantity and
//! derives every view from it:
//!
//! - **ratios**: [`in_years`](TimeDifference::in_years) …
//!   [`in_minutes`](TimeDifference::in_minutes), rounded to two decimals,
//!   and the raw [`in_seconds`](TimeDifference::in_seconds);
//! - **breakdown**: [`in_general`](TimeDifference::in_general), a greedy
//!   whole-unit decomposition, longest unit first;
//! - **phrase**: [`humanize`](TimeDifference::humanize), e.g.
//!   `"2 hours and 30 minutes"`.
//!
//! # Rounding
//!
//! Two-decimal rounding is half away from zero (`f64::round` on the value
//! scaled by 100), so `0.125` rounds to `0.13`.
//!
//! The breakdown rounds each ratio to two decimals *before* flooring it.
//! A ratio that should be exactly 3 but comes out of the float division as
//! `2.9999999999999996` therefore still counts as 3.

use crate::breakdown::Breakdown;
use crate::error::{DurationError, Result};
use crate::instant::Instant;
use crate::unit::{TimeUnit, UnitTable, AVERAGE_MONTH_DAYS, SECONDS_PER_DAY};
use indexmap::IndexMap;
use qtty::Seconds;
use std::fmt;

/// Round to two decimals, half away from zero.
#[inline]
pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Absolute elapsed time between two instants.
///
/// # Examples
///
/// ```
/// use timediff::{TimeDifference, TimeUnit};
///
/// let diff = TimeDifference::between(0.0, 9_000.0);
/// assert_eq!(diff.in_hours(), 2.5);
/// assert_eq!(diff.in_general().get(TimeUnit::Minutes), Some(30));
/// assert_eq!(diff.humanize().as_deref(), Some("2 hours and 30 minutes"));
/// ```
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd)]
pub struct TimeDifference {
    seconds: Seconds,
}

/// Alias naming the calculator by its role.
pub type DurationCalculator = TimeDifference;

impl TimeDifference {
    // ── constructors ──────────────────────────────────────────────────

    /// Elapsed time between `start` and `end`, in either order.
    pub fn between<A: Instant, B: Instant>(start: A, end: B) -> Self {
        let start = start.epoch_seconds();
        let end = end.epoch_seconds();
        let diff = Self::from_seconds(end - start);
        log::trace!("time difference {start} -> {end}: {} s", diff.in_seconds());
        diff
    }

    /// Like [`between`](Self::between), but rejects instants that do not
    /// map to a finite epoch value.
    pub fn try_between<A: Instant, B: Instant>(start: A, end: B) -> Result<Self> {
        let start = finite(start.epoch_seconds())?;
        let end = finite(end.epoch_seconds())?;
        Ok(Self::between(start, end))
    }

    /// Build straight from an elapsed number of seconds (sign dropped).
    #[inline]
    pub fn from_seconds(seconds: f64) -> Self {
        Self {
            seconds: Seconds::new(seconds.abs()),
        }
    }

    /// Like [`from_seconds`](Self::from_seconds), rejecting NaN and infinities.
    pub fn try_from_seconds(seconds: f64) -> Result<Self> {
        finite(seconds).map(Self::from_seconds)
    }

    // ── accessors ─────────────────────────────────────────────────────

    /// The elapsed time as a quantity.
    #[inline]
    pub fn duration(&self) -> Seconds {
        self.seconds
    }

    // ── single-unit ratios ────────────────────────────────────────────

    /// Years of 365.25 days, rounded to two decimals.
    #[inline]
    pub fn in_years(&self) -> f64 {
        self.ratio(TimeUnit::Years)
    }

    /// Months of 30.42 days, rounded to two decimals.
    ///
    /// Always uses the fixed average month, whatever table is in use
    /// elsewhere.
    #[inline]
    pub fn in_months(&self) -> f64 {
        round2(self.seconds.value() / (AVERAGE_MONTH_DAYS * SECONDS_PER_DAY))
    }

    /// Weeks, rounded to two decimals.
    #[inline]
    pub fn in_weeks(&self) -> f64 {
        self.ratio(TimeUnit::Weeks)
    }

    /// Days, rounded to two decimals.
    #[inline]
    pub fn in_days(&self) -> f64 {
        self.ratio(TimeUnit::Days)
    }

    /// Hours, rounded to two decimals. Not capped at 24.
    #[inline]
    pub fn in_hours(&self) -> f64 {
        self.ratio(TimeUnit::Hours)
    }

    /// Minutes, rounded to two decimals.
    #[inline]
    pub fn in_minutes(&self) -> f64 {
        self.ratio(TimeUnit::Minutes)
    }

    /// Seconds, unrounded.
    #[inline]
    pub fn in_seconds(&self) -> f64 {
        self.seconds.value()
    }

    /// The `in_<unit>()` value for `unit`.
    pub fn in_unit(&self, unit: TimeUnit) -> f64 {
        match unit {
            TimeUnit::Months => self.in_months(),
            TimeUnit::Seconds => self.in_seconds(),
            other => self.ratio(other),
        }
    }

    /// Every unit mapped to its own ratio, longest unit first.
    ///
    /// The ratios are independent views of the same duration; they do not
    /// add up to it.
    pub fn in_each_component(&self) -> IndexMap<TimeUnit, f64> {
        TimeUnit::ALL
            .iter()
            .map(|&unit| (unit, self.in_unit(unit)))
            .collect()
    }

    // ── breakdown ─────────────────────────────────────────────────────

    /// Greedy whole-unit breakdown over the standard unit table.
    pub fn in_general(&self) -> Breakdown {
        self.in_general_with(&UnitTable::standard())
    }

    /// Greedy whole-unit breakdown over `table`.
    ///
    /// Walks the table longest unit first. While time remains, each unit
    /// takes `floor(round2(remaining / length))` and its share is taken off
    /// the remainder. Once nothing remains, the rest of the units get 0.
    /// A count that was rounded up can push the remainder slightly below
    /// zero; the remaining units are then 0 as well.
    ///
    /// Counts are clamped to `u64::MAX`, and only the clamped share is
    /// taken off the remainder.
    pub fn in_general_with(&self, table: &UnitTable) -> Breakdown {
        let mut remaining = self.seconds.value();
        let mut breakdown = Breakdown::with_capacity(table.len());

        for (unit, length) in table.iter() {
            let length = length.value();
            let count = if remaining > 0.0 {
                let count = round2(remaining / length).floor().min(u64::MAX as f64);
                remaining -= count * length;
                count as u64
            } else {
                0
            };
            log::trace!("{unit}: {count} (remaining {remaining} s)");
            breakdown.push(unit, count);
        }

        breakdown
    }

    // ── rendering ─────────────────────────────────────────────────────

    /// English phrase for [`in_general`](Self::in_general), e.g.
    /// `"1 year, 2 weeks and 1 second"`.
    ///
    /// Returns `None` when no unit has a non-zero count, which includes a
    /// zero duration.
    pub fn humanize(&self) -> Option<String> {
        self.in_general().humanize()
    }

    /// English phrase for [`in_general_with`](Self::in_general_with).
    pub fn humanize_with(&self, table: &UnitTable) -> Option<String> {
        self.in_general_with(table).humanize()
    }

    // ── internals ─────────────────────────────────────────────────────

    #[inline]
    fn ratio(&self, unit: TimeUnit) -> f64 {
        round2(self.seconds.value() / unit.seconds())
    }
}

fn finite(value: f64) -> Result<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(DurationError::NonFiniteInstant { value })
    }
}

/// Writes the humanized phrase, or `0 seconds` when there is none.
impl fmt::Display for TimeDifference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.humanize() {
            Some(phrase) => f.write_str(&phrase),
            None => f.write_str("0 seconds"),
        }
    }
}

impl From<Seconds> for TimeDifference {
    #[inline]
    fn from(seconds: Seconds) -> Self {
        Self::from_seconds(seconds.value())
    }
}

impl From<TimeDifference> for Seconds {
    #[inline]
    fn from(diff: TimeDifference) -> Self {
        diff.seconds
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, TimeZone, Utc};
    use test_log::test;

    fn counts(diff: &TimeDifference) -> Vec<u64> {
        diff.in_general().iter().map(|(_, c)| c).collect()
    }

    #[test]
    fn round2_is_half_away_from_zero() {
        assert_eq!(round2(0.125), 0.13);
        assert_eq!(round2(2.5), 2.5);
        assert_eq!(round2(0.004), 0.0);
        assert_eq!(round2(-0.125), -0.13);
    }

    #[test]
    fn between_is_absolute_and_symmetric() {
        let forward = TimeDifference::between(100.0, 160.5);
        let backward = TimeDifference::between(160.5, 100.0);
        assert_eq!(forward.in_seconds(), 60.5);
        assert_eq!(forward, backward);
    }

    #[test]
    fn same_instant_is_zero() {
        let t = Utc.with_ymd_and_hms(2024, 2, 29, 8, 0, 0).unwrap();
        let diff = TimeDifference::between(t, t);
        assert_eq!(diff.in_seconds(), 0.0);
        assert_eq!(counts(&diff), vec![0; 7]);
        assert_eq!(diff.humanize(), None);
        assert_eq!(diff.to_string(), "0 seconds");
    }

    #[test]
    fn mixes_instant_types() {
        let start = DateTime::from_timestamp(0, 0).unwrap();
        let diff = TimeDifference::between(start, 86_400_i64);
        assert_eq!(diff.in_days(), 1.0);
    }

    #[test]
    fn ratios_for_two_and_a_half_hours() {
        let diff = TimeDifference::from_seconds(9_000.0);
        assert_eq!(diff.in_years(), 0.0);
        assert_eq!(diff.in_months(), 0.0);
        assert_eq!(diff.in_weeks(), 0.01);
        assert_eq!(diff.in_days(), 0.1);
        assert_eq!(diff.in_hours(), 2.5);
        assert_eq!(diff.in_minutes(), 150.0);
        assert_eq!(diff.in_seconds(), 9_000.0);
    }

    #[test]
    fn ratios_are_not_capped_by_larger_units() {
        let diff = TimeDifference::from_seconds(30.0 * 3_600.0);
        assert_eq!(diff.in_hours(), 30.0);
        assert_eq!(diff.in_days(), 1.25);
    }

    #[test]
    fn one_average_month() {
        let diff = TimeDifference::from_seconds(30.42 * 86_400.0);
        assert_eq!(diff.in_months(), 1.0);
        assert_eq!(diff.in_days(), 30.42);
        assert_eq!(diff.in_weeks(), 4.35);
    }

    #[test]
    fn in_unit_matches_named_queries() {
        let diff = TimeDifference::from_seconds(47_336_400.0);
        assert_eq!(diff.in_unit(TimeUnit::Years), diff.in_years());
        assert_eq!(diff.in_unit(TimeUnit::Months), diff.in_months());
        assert_eq!(diff.in_unit(TimeUnit::Seconds), diff.in_seconds());
        assert_eq!(diff.in_years(), 1.5);
        assert_eq!(diff.in_months(), 18.01);
    }

    #[test]
    fn each_component_lists_every_unit_in_order() {
        let diff = TimeDifference::from_seconds(9_000.0);
        let components = diff.in_each_component();
        assert!(components.keys().copied().eq(TimeUnit::ALL));
        assert_eq!(
            components.values().copied().collect::<Vec<_>>(),
            vec![0.0, 0.0, 0.01, 0.1, 2.5, 150.0, 9_000.0]
        );
    }

    #[test]
    fn general_two_and_a_half_hours() {
        let diff = TimeDifference::from_seconds(9_000.0);
        assert_eq!(counts(&diff), vec![0, 0, 0, 0, 2, 30, 0]);
        assert_eq!(diff.humanize().as_deref(), Some("2 hours and 30 minutes"));
    }

    #[test]
    fn general_one_of_each() {
        let secs = 31_557_600.0 + 2_628_288.0 + 604_800.0 + 86_400.0 + 3_600.0 + 60.0 + 1.0;
        let diff = TimeDifference::from_seconds(secs);
        assert_eq!(counts(&diff), vec![1; 7]);
        assert_eq!(
            diff.humanize().as_deref(),
            Some("1 year, 1 month, 1 week, 1 day, 1 hour, 1 minute and 1 second")
        );
    }

    #[test]
    fn general_skips_zero_units_in_the_middle() {
        let diff = TimeDifference::from_seconds(100_000_000.0);
        assert_eq!(counts(&diff), vec![3, 2, 0, 0, 19, 37, 4]);
        assert_eq!(
            diff.humanize().as_deref(),
            Some("3 years, 2 months, 19 hours, 37 minutes and 4 seconds")
        );
    }

    #[test]
    fn single_second_is_singular() {
        let diff = TimeDifference::from_seconds(1.0);
        assert_eq!(diff.humanize().as_deref(), Some("1 second"));
    }

    #[test]
    fn float_error_still_counts_whole_units() {
        // 4.1 - 1.1 == 2.9999999999999996
        let diff = TimeDifference::between(1.1, 4.1);
        assert!(diff.in_seconds() < 3.0);
        assert_eq!(diff.in_general().get(TimeUnit::Seconds), Some(3));
        assert_eq!(diff.humanize().as_deref(), Some("3 seconds"));
    }

    #[test]
    fn near_whole_ratio_rounds_up_and_zeroes_the_rest() {
        let diff = TimeDifference::from_seconds(59.999);
        assert_eq!(counts(&diff), vec![0, 0, 0, 0, 0, 1, 0]);
        assert_eq!(diff.humanize().as_deref(), Some("1 minute"));
    }

    #[test]
    fn sub_second_remainder_is_dropped() {
        assert_eq!(
            TimeDifference::from_seconds(1.5).humanize().as_deref(),
            Some("1 second")
        );
        assert_eq!(TimeDifference::from_seconds(0.3).humanize(), None);
    }

    #[test]
    fn huge_counts_are_clamped() {
        let diff = TimeDifference::from_seconds(1e300);
        let breakdown = diff.in_general();
        assert_eq!(breakdown.get(TimeUnit::Years), Some(u64::MAX));
        // The clamped years leave the rest for the shorter units.
        assert_eq!(breakdown.get(TimeUnit::Months), Some(u64::MAX));
    }

    #[test]
    fn custom_table_breakdown() {
        let table = UnitTable::new([
            (TimeUnit::Hours, Seconds::new(3_600.0)),
            (TimeUnit::Minutes, Seconds::new(60.0)),
        ])
        .unwrap();
        let diff = TimeDifference::from_seconds(2.0 * 86_400.0 + 90.0);
        let breakdown = diff.in_general_with(&table);
        assert_eq!(breakdown.len(), 2);
        assert_eq!(breakdown.get(TimeUnit::Hours), Some(48));
        assert_eq!(breakdown.get(TimeUnit::Minutes), Some(1));
        assert_eq!(breakdown.get(TimeUnit::Days), None);
        assert_eq!(
            diff.humanize_with(&table).as_deref(),
            Some("48 hours and 1 minute")
        );
    }

    #[test]
    fn custom_table_float_error() {
        // 0.3 / 0.1 == 2.9999999999999996
        let table = UnitTable::new([(TimeUnit::Seconds, Seconds::new(0.1))]).unwrap();
        let diff = TimeDifference::from_seconds(0.3);
        assert_eq!(diff.in_general_with(&table).get(TimeUnit::Seconds), Some(3));
    }

    #[test]
    fn fallible_constructors_reject_non_finite_values() {
        assert_eq!(
            TimeDifference::try_between(0.0, f64::INFINITY),
            Err(DurationError::NonFiniteInstant {
                value: f64::INFINITY
            })
        );
        assert!(TimeDifference::try_between(f64::NAN, 0.0).is_err());
        assert!(TimeDifference::try_from_seconds(f64::NEG_INFINITY).is_err());

        let ok = TimeDifference::try_from_seconds(-42.0).unwrap();
        assert_eq!(ok.in_seconds(), 42.0);
        assert_eq!(
            TimeDifference::try_between(10_i64, 4_i64),
            Ok(TimeDifference::from_seconds(6.0))
        );
    }

    #[test]
    fn seconds_conversions() {
        let diff = TimeDifference::from(Seconds::new(-5.0));
        assert_eq!(diff.duration(), Seconds::new(5.0));
        let back: Seconds = diff.into();
        assert_eq!(back, Seconds::new(5.0));
    }
}
