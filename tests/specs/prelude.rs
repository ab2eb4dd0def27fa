//! Test helpers for behavioral specifications.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic, dead_code)]

pub use hd_core::test_support::{utc, zoned};
pub use hd_core::{between, since, Duration, FakeClock, Zone};

/// Render the difference between two instants as a caller would display it.
pub fn render(
    start: chrono::DateTime<chrono::Utc>,
    end: chrono::DateTime<chrono::Utc>,
    zone: Option<&str>,
) -> String {
    let zone = zone.map(|z| z.parse::<Zone>().unwrap());
    between(&start, &end, zone.as_ref()).to_string()
}

/// Assert the rendered difference, with a readable diff on mismatch.
pub fn assert_renders(
    start: chrono::DateTime<chrono::Utc>,
    end: chrono::DateTime<chrono::Utc>,
    zone: Option<&str>,
    expected: &str,
) {
    similar_asserts::assert_eq!(render(start, end, zone), expected);
}
