// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Time units and the ordered unit table.
//!
//! Every unit has a **fixed average length** in seconds. No calendar is
//! consulted: a year is always 365.25 days and a month always 30.42 days.
//!
//! | Unit | Length |
//! |------|--------|
//! | [`TimeUnit::Years`] | 365.25 × 86 400 s |
//! | [`TimeUnit::Months`] | 30.42 × 86 400 s |
//! | [`TimeUnit::Weeks`] | 7 × 86 400 s |
//! | [`TimeUnit::Days`] | 86 400 s |
//! | [`TimeUnit::Hours`] | 3 600 s |
//! | [`TimeUnit::Minutes`] | 60 s |
//! | [`TimeUnit::Seconds`] | 1 s |
//!
//! The greedy breakdown walks a [`UnitTable`] from the longest unit to the
//! shortest, so the order of the table matters.

use crate::error::{DurationError, Result};
use qtty::Seconds;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{ser::SerializeSeq, Deserialize, Deserializer, Serialize, Serializer};

/// Seconds in one day.
pub const SECONDS_PER_DAY: f64 = 86_400.0;

/// Days in the average month used by every month-based query.
pub const AVERAGE_MONTH_DAYS: f64 = 30.42;

/// Days in one Julian year.
pub const JULIAN_YEAR_DAYS: f64 = 365.25;

const YEAR_SECONDS: f64 = JULIAN_YEAR_DAYS * SECONDS_PER_DAY;
const MONTH_SECONDS: f64 = AVERAGE_MONTH_DAYS * SECONDS_PER_DAY;
const WEEK_SECONDS: f64 = 7.0 * SECONDS_PER_DAY;

// ═══════════════════════════════════════════════════════════════════════════
// TimeUnit
// ═══════════════════════════════════════════════════════════════════════════

/// One of the fixed units a duration can be expressed in.
///
/// Variants are declared from longest to shortest; [`TimeUnit::ALL`] keeps
/// that order.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum TimeUnit {
    Years,
    Months,
    Weeks,
    Days,
    Hours,
    Minutes,
    Seconds,
}

impl TimeUnit {
    /// All units, longest first.
    pub const ALL: [TimeUnit; 7] = [
        TimeUnit::Years,
        TimeUnit::Months,
        TimeUnit::Weeks,
        TimeUnit::Days,
        TimeUnit::Hours,
        TimeUnit::Minutes,
        TimeUnit::Seconds,
    ];

    /// Fixed length of this unit.
    #[inline]
    pub const fn length(self) -> Seconds {
        Seconds::new(self.seconds())
    }

    /// Fixed length of this unit as a raw number of seconds.
    pub const fn seconds(self) -> f64 {
        match self {
            TimeUnit::Years => YEAR_SECONDS,
            TimeUnit::Months => MONTH_SECONDS,
            TimeUnit::Weeks => WEEK_SECONDS,
            TimeUnit::Days => SECONDS_PER_DAY,
            TimeUnit::Hours => 3_600.0,
            TimeUnit::Minutes => 60.0,
            TimeUnit::Seconds => 1.0,
        }
    }

    /// English singular name (`"year"`, `"month"`, ...).
    pub const fn singular(self) -> &'static str {
        match self {
            TimeUnit::Years => "year",
            TimeUnit::Months => "month",
            TimeUnit::Weeks => "week",
            TimeUnit::Days => "day",
            TimeUnit::Hours => "hour",
            TimeUnit::Minutes => "minute",
            TimeUnit::Seconds => "second",
        }
    }

    /// English plural name (`"years"`, `"months"`, ...).
    pub const fn plural(self) -> &'static str {
        match self {
            TimeUnit::Years => "years",
            TimeUnit::Months => "months",
            TimeUnit::Weeks => "weeks",
            TimeUnit::Days => "days",
            TimeUnit::Hours => "hours",
            TimeUnit::Minutes => "minutes",
            TimeUnit::Seconds => "seconds",
        }
    }

    /// Name to print next to `count`: singular for counts up to one.
    #[inline]
    pub const fn name_for(self, count: u64) -> &'static str {
        if count <= 1 {
            self.singular()
        } else {
            self.plural()
        }
    }
}

impl fmt::Display for TimeUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.plural())
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// UnitTable
// ═══════════════════════════════════════════════════════════════════════════

/// Ordered list of `(unit, length)` pairs driving the greedy breakdown.
///
/// [`UnitTable::standard`] holds the fixed lengths listed in the module
/// docs. Custom tables can drop units or change lengths, e.g. to break a
/// duration down into days and hours only:
///
/// ```
/// use qtty::Seconds;
/// use timediff::{TimeDifference, TimeUnit, UnitTable};
///
/// let table = UnitTable::new([
///     (TimeUnit::Days, Seconds::new(86_400.0)),
///     (TimeUnit::Hours, Seconds::new(3_600.0)),
/// ])?;
/// let diff = TimeDifference::from_seconds(3.0 * 86_400.0 + 7_200.0);
/// assert_eq!(diff.humanize_with(&table).as_deref(), Some("3 days and 2 hours"));
/// # Ok::<(), timediff::DurationError>(())
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct UnitTable {
    entries: Vec<(TimeUnit, Seconds)>,
}

impl UnitTable {
    /// Build a table, checking that it is usable for a greedy breakdown.
    ///
    /// The table must be non-empty, every length must be positive and
    /// finite, units must not repeat, and both the units (in [`TimeUnit`]
    /// order) and their lengths must strictly decrease.
    pub fn new<I>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = (TimeUnit, Seconds)>,
    {
        let entries: Vec<(TimeUnit, Seconds)> = entries.into_iter().collect();
        if entries.is_empty() {
            return Err(DurationError::EmptyUnitTable);
        }

        let mut previous: Option<(TimeUnit, f64)> = None;
        for (i, &(unit, length)) in entries.iter().enumerate() {
            let length = length.value();
            if !(length.is_finite() && length > 0.0) {
                return Err(DurationError::InvalidUnitLength { unit, length });
            }
            if entries[..i].iter().any(|&(seen, _)| seen == unit) {
                return Err(DurationError::DuplicateUnit { unit });
            }
            if previous.is_some_and(|(before, longer)| unit < before || length >= longer) {
                return Err(DurationError::UnorderedUnitTable { unit });
            }
            previous = Some((unit, length));
        }

        Ok(Self { entries })
    }

    /// The fixed-length table covering every [`TimeUnit`], longest first.
    pub fn standard() -> Self {
        Self {
            entries: TimeUnit::ALL.iter().map(|&u| (u, u.length())).collect(),
        }
    }

    /// Length of `unit` in this table, if the table contains it.
    pub fn length(&self, unit: TimeUnit) -> Option<Seconds> {
        self.entries
            .iter()
            .find(|&&(u, _)| u == unit)
            .map(|&(_, length)| length)
    }

    /// `(unit, length)` pairs in table order.
    pub fn iter(&self) -> impl Iterator<Item = (TimeUnit, Seconds)> + '_ {
        self.entries.iter().copied()
    }

    /// Units in table order.
    pub fn units(&self) -> impl Iterator<Item = TimeUnit> + '_ {
        self.entries.iter().map(|&(u, _)| u)
    }

    /// Number of units in the table.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always `false` for a validated table.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for UnitTable {
    fn default() -> Self {
        Self::standard()
    }
}

// Tables serialize as `[{ "unit": "days", "seconds": 86400.0 }, ...]` and
// go back through `UnitTable::new` on the way in.
#[cfg(feature = "serde")]
#[derive(Serialize, Deserialize)]
struct RawEntry {
    unit: TimeUnit,
    seconds: f64,
}

#[cfg(feature = "serde")]
impl Serialize for UnitTable {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut seq = serializer.serialize_seq(Some(self.entries.len()))?;
        for (unit, length) in self.iter() {
            seq.serialize_element(&RawEntry {
                unit,
                seconds: length.value(),
            })?;
        }
        seq.end()
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for UnitTable {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Vec::<RawEntry>::deserialize(deserializer)?;
        UnitTable::new(raw.into_iter().map(|e| (e.unit, Seconds::new(e.seconds))))
            .map_err(serde::de::Error::custom)
    }
}
