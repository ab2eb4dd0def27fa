// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Calendar-accurate difference between two instants.
//!
//! Years, months and days are counted by greedy stepping: the largest count
//! of each unit that, added on top of the larger units, does not pass the
//! end instant. Calendar addition normalizes rather than clamps, so
//! Feb 29 plus one year is Mar 1 and a year from Feb 29 2020 to Feb 28 2021
//! comes out as 11 months.

use crate::clock::Clock;
use crate::duration::Duration;
use crate::zone::Zone;
use chrono::{DateTime, Datelike, Days, NaiveDate, NaiveDateTime, TimeDelta, TimeZone, Utc};

/// Duration between two instants in `zone` (UTC when `None`).
///
/// Argument order does not matter; the span is always non-negative.
pub fn between<A: TimeZone, B: TimeZone>(
    start: &DateTime<A>,
    end: &DateTime<B>,
    zone: Option<&Zone>,
) -> Duration {
    let zone = zone.copied().unwrap_or_default();
    let (start, end) = (start.with_timezone(&Utc), end.with_timezone(&Utc));
    let (start, end) = if start > end { (end, start) } else { (start, end) };

    let from = zone.to_local(&start);
    let to = zone.to_local(&end);
    let fits = |years, months, days| {
        shift(from, years, months, days)
            .and_then(|local| zone.from_local(local))
            .is_some_and(|t| t <= end)
    };

    let years = greatest(saturate(i64::from(to.year()) - i64::from(from.year())), |y| {
        fits(y, 0, 0)
    });
    let months = greatest(months_estimate(shift(from, years, 0, 0), to), |m| {
        fits(years, m, 0)
    });
    let days = greatest(days_estimate(shift(from, years, months, 0), to), |d| {
        fits(years, months, d)
    });

    let anchor = shift(from, years, months, days)
        .and_then(|local| zone.from_local(local))
        .unwrap_or(start);
    let residual = (end - anchor).max(TimeDelta::zero());

    let duration = Duration {
        years,
        months,
        days,
        hours: saturate(residual.num_hours()),
        minutes: saturate(residual.num_minutes() % 60),
        seconds: saturate(residual.num_seconds() % 60),
    };

    tracing::trace!(
        target: "hd_core::calendar",
        start = %from,
        end = %to,
        zone = %zone,
        duration = %duration,
        "calendar difference"
    );
    duration
}

/// Duration from `start` until the clock's current instant.
pub fn since<T: TimeZone>(start: &DateTime<T>, zone: Option<&Zone>, clock: &impl Clock) -> Duration {
    between(start, &clock.now(), zone)
}

/// `instant` advanced by whole calendar units on `zone`'s wall clock.
///
/// Months past December carry into the year, and a day-of-month the target
/// month lacks spills into the next month (Jan 31 + 1 month = Mar 3 in a
/// common year). The time of day is kept. Returns `None` outside chrono's
/// supported range.
pub fn add_date<T: TimeZone>(
    instant: &DateTime<T>,
    years: u32,
    months: u32,
    days: u32,
    zone: Option<&Zone>,
) -> Option<DateTime<Utc>> {
    let zone = zone.copied().unwrap_or_default();
    shift(zone.to_local(instant), years, months, days).and_then(|local| zone.from_local(local))
}

fn shift(local: NaiveDateTime, years: u32, months: u32, days: u32) -> Option<NaiveDateTime> {
    let month0 = i64::from(local.month0()) + i64::from(months);
    let year = i64::from(local.year()) + i64::from(years) + month0 / 12;
    let month = u32::try_from(month0 % 12).ok()? + 1;

    let first = NaiveDate::from_ymd_opt(i32::try_from(year).ok()?, month, 1)?;
    let offset = u64::from(local.day0()) + u64::from(days);
    let date = first.checked_add_days(Days::new(offset))?;
    Some(date.and_time(local.time()))
}

/// Largest `n` with `fits(n)`, searched outward from `estimate`.
///
/// `fits` must be monotonic and hold for zero.
fn greatest(estimate: u32, fits: impl Fn(u32) -> bool) -> u32 {
    let mut n = estimate;
    while n > 0 && !fits(n) {
        n -= 1;
    }
    while n < u32::MAX && fits(n + 1) {
        n += 1;
    }
    n
}

fn months_estimate(from: Option<NaiveDateTime>, to: NaiveDateTime) -> u32 {
    let index = |t: NaiveDateTime| i64::from(t.year()) * 12 + i64::from(t.month0());
    from.map_or(0, |from| saturate(index(to) - index(from)))
}

fn days_estimate(from: Option<NaiveDateTime>, to: NaiveDateTime) -> u32 {
    from.map_or(0, |from| saturate((to.date() - from.date()).num_days()))
}

fn saturate(n: i64) -> u32 {
    u32::try_from(n.max(0)).unwrap_or(u32::MAX)
}

#[cfg(test)]
#[path = "calendar_tests.rs"]
mod tests;
