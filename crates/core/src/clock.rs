// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Wall-clock abstraction so "time since" computations stay deterministic in tests.

use chrono::{DateTime, Utc};

#[cfg(any(test, feature = "test-support"))]
use chrono::TimeDelta;
#[cfg(any(test, feature = "test-support"))]
use parking_lot::Mutex;
#[cfg(any(test, feature = "test-support"))]
use std::sync::Arc;

/// Source of the current instant.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// Reads the system wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Clock that only moves when told to.
///
/// Clones share the same time, so a clone handed to code under test observes
/// every [`advance`](FakeClock::advance) and [`set`](FakeClock::set).
#[cfg(any(test, feature = "test-support"))]
#[derive(Debug, Clone)]
pub struct FakeClock {
    current: Arc<Mutex<DateTime<Utc>>>,
}

#[cfg(any(test, feature = "test-support"))]
impl FakeClock {
    /// Starts at the Unix epoch.
    pub fn new() -> Self {
        Self::at(DateTime::<Utc>::UNIX_EPOCH)
    }

    pub fn at(now: DateTime<Utc>) -> Self {
        Self {
            current: Arc::new(Mutex::new(now)),
        }
    }

    pub fn advance(&self, by: TimeDelta) {
        let mut current = self.current.lock();
        *current += by;
    }

    pub fn set(&self, now: DateTime<Utc>) {
        *self.current.lock() = now;
    }
}

#[cfg(any(test, feature = "test-support"))]
impl Default for FakeClock {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(any(test, feature = "test-support"))]
impl Clock for FakeClock {
    fn now(&self) -> DateTime<Utc> {
        *self.current.lock()
    }
}

#[cfg(test)]
#[path = "clock_tests.rs"]
mod tests;
