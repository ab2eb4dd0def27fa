// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Timezone reference used to place instants on a local calendar.
//!
//! A [`Zone`] only needs to do two things: turn an absolute instant into
//! local wall-clock fields, and turn wall-clock fields back into an instant.
//! It parses from and renders to a short string (`"UTC"`, `"+05:30"`,
//! `"America/New_York"`), which is also its serde form.

use chrono::{DateTime, FixedOffset, NaiveDateTime, Offset, TimeDelta, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Errors from parsing a [`Zone`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ZoneError {
    #[error("unknown timezone: {0}")]
    Unknown(String),
    #[error("invalid UTC offset: {0}")]
    InvalidOffset(String),
}

/// Timezone context for calendar arithmetic. Defaults to UTC.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Zone {
    #[default]
    Utc,
    /// Constant offset from UTC, no daylight saving.
    Fixed(FixedOffset),
    /// IANA timezone database entry.
    Named(chrono_tz::Tz),
}

impl Zone {
    /// Local wall-clock fields of `instant` in this zone.
    pub fn to_local<T: TimeZone>(&self, instant: &DateTime<T>) -> NaiveDateTime {
        match self {
            Zone::Utc => instant.naive_utc(),
            Zone::Fixed(offset) => instant.with_timezone(offset).naive_local(),
            Zone::Named(tz) => instant.with_timezone(tz).naive_local(),
        }
    }

    /// Instant at which this zone's wall clock reads `local`.
    ///
    /// Overlapping wall times (clocks turned back) resolve to the earlier
    /// instant. Skipped wall times (clocks turned forward) are read with the
    /// offset in force after the jump, landing before it by the jump's length.
    /// Returns `None` only when the result leaves chrono's supported range.
    pub fn from_local(&self, local: NaiveDateTime) -> Option<DateTime<Utc>> {
        match self {
            Zone::Utc => Some(local.and_utc()),
            Zone::Fixed(offset) => resolve_local(offset, local),
            Zone::Named(tz) => resolve_local(tz, local),
        }
    }
}

fn resolve_local<T: TimeZone>(tz: &T, local: NaiveDateTime) -> Option<DateTime<Utc>> {
    if let Some(t) = tz.from_local_datetime(&local).earliest() {
        return Some(t.with_timezone(&Utc));
    }

    // Inside a gap: use the offset from a day later.
    let offset = local
        .checked_add_signed(TimeDelta::days(1))
        .and_then(|after| tz.offset_from_local_datetime(&after).earliest())
        .unwrap_or_else(|| tz.offset_from_utc_datetime(&local));
    let shift = TimeDelta::seconds(i64::from(offset.fix().local_minus_utc()));
    local.checked_sub_signed(shift).map(|utc| utc.and_utc())
}

/// Parse `"+HH:MM"`, `"+HHMM"` or `"+HH"` (either sign) into seconds east of UTC.
fn parse_offset(text: &str) -> Option<i32> {
    let (sign, rest) = match text.as_bytes().first()? {
        b'+' => (1, &text[1..]),
        b'-' => (-1, &text[1..]),
        _ => return None,
    };
    if !rest.is_ascii() {
        return None;
    }

    let (hours, minutes) = match rest.len() {
        2 => (rest, "00"),
        4 => (&rest[..2], &rest[2..]),
        5 if rest.as_bytes()[2] == b':' => (&rest[..2], &rest[3..]),
        _ => return None,
    };
    if !hours.bytes().chain(minutes.bytes()).all(|b| b.is_ascii_digit()) {
        return None;
    }

    let hours = hours.parse::<i32>().ok()?;
    let minutes = minutes.parse::<i32>().ok()?;
    if hours > 23 || minutes > 59 {
        return None;
    }
    Some(sign * (hours * 3600 + minutes * 60))
}

impl FromStr for Zone {
    type Err = ZoneError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("utc") || s.eq_ignore_ascii_case("z") {
            return Ok(Zone::Utc);
        }
        if s.starts_with('+') || s.starts_with('-') {
            return parse_offset(s)
                .and_then(FixedOffset::east_opt)
                .map(Zone::Fixed)
                .ok_or_else(|| ZoneError::InvalidOffset(s.to_string()));
        }
        s.parse::<chrono_tz::Tz>()
            .map(Zone::Named)
            .map_err(|_| ZoneError::Unknown(s.to_string()))
    }
}

impl fmt::Display for Zone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Zone::Utc => f.write_str("UTC"),
            Zone::Fixed(offset) => write!(f, "{}", offset),
            Zone::Named(tz) => f.write_str(tz.name()),
        }
    }
}

impl TryFrom<String> for Zone {
    type Error = ZoneError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Zone> for String {
    fn from(zone: Zone) -> Self {
        zone.to_string()
    }
}

impl From<FixedOffset> for Zone {
    fn from(offset: FixedOffset) -> Self {
        Zone::Fixed(offset)
    }
}

impl From<chrono_tz::Tz> for Zone {
    fn from(tz: chrono_tz::Tz) -> Self {
        Zone::Named(tz)
    }
}

#[cfg(test)]
#[path = "zone_tests.rs"]
mod tests;
