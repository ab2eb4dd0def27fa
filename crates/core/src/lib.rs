// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! hd-core: calendar-accurate human-readable durations
//!
//! [`between`] breaks the span between two instants into years, months,
//! days, hours, minutes and seconds on a chosen [`Zone`]'s calendar, and
//! [`Duration`] renders the result as `"1y 6m 8d 5h 8m 17s"`.

pub mod calendar;
pub mod clock;
pub mod duration;
pub mod zone;

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use calendar::{add_date, between, since};
#[cfg(any(test, feature = "test-support"))]
pub use clock::FakeClock;
pub use clock::{Clock, SystemClock};
pub use duration::Duration;
pub use zone::{Zone, ZoneError};
