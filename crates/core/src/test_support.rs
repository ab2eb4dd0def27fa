// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Shared test helpers for use across crates.
//!
//! Gated behind `#[cfg(any(test, feature = "test-support"))]`.

#![allow(clippy::expect_used)]

use crate::Zone;
use chrono::{DateTime, TimeZone, Utc};

/// UTC instant from calendar fields.
pub fn utc(year: i32, month: u32, day: u32, hour: u32, minute: u32, second: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, hour, minute, second)
        .single()
        .expect("valid UTC calendar fields")
}

/// Instant at which `zone`'s wall clock shows the given fields.
pub fn zoned(
    zone: &str,
    year: i32,
    month: u32,
    day: u32,
    hour: u32,
    minute: u32,
    second: u32,
) -> DateTime<Utc> {
    let zone: Zone = zone.parse().expect("valid zone");
    let local = utc(year, month, day, hour, minute, second).naive_utc();
    zone.from_local(local).expect("local time within range")
}
