// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Error type for the fallible constructors.
//!
//! The duration queries themselves never fail. Errors only arise when an
//! instant does not map to a finite epoch value, or when a custom
//! [`UnitTable`](crate::UnitTable) is malformed.

use crate::TimeUnit;

/// Errors returned by [`TimeDifference::try_between`](crate::TimeDifference::try_between),
/// [`TimeDifference::try_from_seconds`](crate::TimeDifference::try_from_seconds)
/// and [`UnitTable::new`](crate::UnitTable::new).
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DurationError {
    /// An instant converted to NaN or an infinite number of epoch seconds.
    #[error("instant is not a finite epoch value: {value}")]
    NonFiniteInstant { value: f64 },

    /// A unit table must contain at least one unit.
    #[error("unit table is empty")]
    EmptyUnitTable,

    /// A unit length must be positive and finite.
    #[error("invalid length for {unit}: {length} s")]
    InvalidUnitLength { unit: TimeUnit, length: f64 },

    /// The same unit appears twice in a table.
    #[error("unit {unit} appears more than once")]
    DuplicateUnit { unit: TimeUnit },

    /// Unit lengths must strictly decrease along the table.
    #[error("unit {unit} is not shorter than the unit before it")]
    UnorderedUnitTable { unit: TimeUnit },
}

/// Result helper type.
pub type Result<T> = std::result::Result<T, DurationError>;
