use crate::prelude::*;
use chrono::TimeDelta;

#[test]
fn since_two_days_and_an_hour() {
    let start = utc(2025, 6, 1, 8, 0, 0);
    let clock = FakeClock::at(start + TimeDelta::days(2) + TimeDelta::hours(1));
    assert_eq!(since(&start, None, &clock).to_string(), "2d 1h");
}

#[test]
fn since_follows_clock_updates() {
    let start = utc(2025, 6, 1, 8, 0, 0);
    let clock = FakeClock::at(start);
    assert_eq!(since(&start, None, &clock).to_string(), "0s");

    clock.advance(TimeDelta::seconds(90));
    assert_eq!(since(&start, None, &clock).to_string(), "1m 30s");

    clock.set(utc(2026, 6, 1, 8, 0, 0));
    assert_eq!(since(&start, None, &clock).to_string(), "1y");
}
