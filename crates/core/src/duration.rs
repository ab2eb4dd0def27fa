// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Calendar duration value and its compact human-readable rendering.

use serde::{Serialize, Serializer};
use std::fmt;

/// A calendar-aware span broken into years, months, days and clock units.
///
/// Produced by [`between`](crate::between) and [`since`](crate::since).
/// `minutes` and `seconds` stay below 60; `hours` is the whole-hour count of
/// whatever remains after day stepping and is not capped at 23.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Duration {
    pub years: u32,
    pub months: u32,
    pub days: u32,
    pub hours: u32,
    pub minutes: u32,
    pub seconds: u32,
}

impl Duration {
    /// Build a duration from its six fields, largest unit first.
    pub const fn new(
        years: u32,
        months: u32,
        days: u32,
        hours: u32,
        minutes: u32,
        seconds: u32,
    ) -> Self {
        Self {
            years,
            months,
            days,
            hours,
            minutes,
            seconds,
        }
    }

    /// Returns true when every field is zero.
    pub fn is_zero(&self) -> bool {
        *self == Self::default()
    }

    /// JSON string value of the formatted form, e.g. `"\"2d 1h\""`.
    pub fn to_json(&self) -> String {
        serde_json::Value::String(self.to_string()).to_string()
    }
}

/// Format as `"1y 6m 8d 5h 8m 17s"`, omitting zero fields; `"0s"` when empty.
///
/// Months and minutes both render as `m`; their position tells them apart.
impl fmt::Display for Duration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let fields = [
            (self.years, 'y'),
            (self.months, 'm'),
            (self.days, 'd'),
            (self.hours, 'h'),
            (self.minutes, 'm'),
            (self.seconds, 's'),
        ];

        let mut wrote = false;
        for (value, unit) in fields.into_iter().filter(|(v, _)| *v != 0) {
            if wrote {
                f.write_str(" ")?;
            }
            write!(f, "{}{}", value, unit)?;
            wrote = true;
        }

        if !wrote {
            f.write_str("0s")?;
        }
        Ok(())
    }
}

/// Serializes as the formatted string, never as numeric fields.
impl Serialize for Duration {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(test)]
#[path = "duration_tests.rs"]
mod tests;
