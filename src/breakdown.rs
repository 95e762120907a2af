// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Whole-unit breakdown of a duration and its English rendering.

use crate::unit::{TimeUnit, UnitTable};
use indexmap::IndexMap;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize};

/// Integer count per unit, in table order (longest unit first).
///
/// Produced by [`TimeDifference::in_general`](crate::TimeDifference::in_general).
/// Every unit of the table used has an entry, including zero counts.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Breakdown {
    counts: IndexMap<TimeUnit, u64>,
}

impl Breakdown {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            counts: IndexMap::with_capacity(capacity),
        }
    }

    pub(crate) fn push(&mut self, unit: TimeUnit, count: u64) {
        self.counts.insert(unit, count);
    }

    /// Count for `unit`, or `None` if the unit was not part of the table.
    pub fn get(&self, unit: TimeUnit) -> Option<u64> {
        self.counts.get(&unit).copied()
    }

    /// `(unit, count)` pairs, longest unit first.
    pub fn iter(&self) -> impl Iterator<Item = (TimeUnit, u64)> + '_ {
        self.counts.iter().map(|(&u, &c)| (u, c))
    }

    /// Number of units, zero counts included.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// `true` when every count is zero.
    pub fn is_zero(&self) -> bool {
        self.counts.values().all(|&c| c == 0)
    }

    /// Seconds covered by the counts, using the lengths in `table`.
    ///
    /// Units missing from `table` contribute nothing.
    pub fn total_seconds(&self, table: &UnitTable) -> f64 {
        self.iter()
            .filter_map(|(unit, count)| table.length(unit).map(|len| count as f64 * len.value()))
            .sum()
    }

    /// English phrase such as `"1 day, 3 hours and 1 minute"`.
    ///
    /// Zero counts are skipped. A count of one (or less) takes the singular
    /// form. Returns `None` when every count is zero, never `"0 seconds"`.
    pub fn humanize(&self) -> Option<String> {
        let mut parts: Vec<String> = self
            .iter()
            .filter(|&(_, count)| count > 0)
            .map(|(unit, count)| format!("{count} {}", unit.name_for(count)))
            .collect();

        let last = parts.pop()?;
        if parts.is_empty() {
            Some(last)
        } else {
            Some(format!("{} and {last}", parts.join(", ")))
        }
    }
}

impl IntoIterator for Breakdown {
    type Item = (TimeUnit, u64);
    type IntoIter = indexmap::map::IntoIter<TimeUnit, u64>;

    fn into_iter(self) -> Self::IntoIter {
        self.counts.into_iter()
    }
}

// Breakdowns deserialize from an object keyed by unit name. Units must
// come longest first, the same order `in_general` produces.
#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for Breakdown {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let counts = IndexMap::<TimeUnit, u64>::deserialize(deserializer)?;
        let mut units = counts.keys().copied();
        if let Some(mut previous) = units.next() {
            for unit in units {
                if unit <= previous {
                    return Err(serde::de::Error::custom(
                        crate::DurationError::UnorderedUnitTable { unit },
                    ));
                }
                previous = unit;
            }
        }
        Ok(Self { counts })
    }
}

/// Writes the humanized phrase; an all-zero breakdown writes nothing.
impl fmt::Display for Breakdown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.humanize() {
            Some(phrase) => f.write_str(&phrase),
            None => Ok(()),
        }
    }
}
