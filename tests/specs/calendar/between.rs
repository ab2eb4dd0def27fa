use crate::prelude::*;

#[test]
fn years_months_days_and_clock() {
    assert_renders(
        utc(2020, 1, 1, 0, 0, 0),
        utc(2023, 4, 15, 6, 30, 15),
        None,
        "3y 3m 14d 6h 30m 15s",
    );
}

#[test]
fn argument_order_does_not_matter() {
    let a = utc(2019, 7, 4, 18, 0, 0);
    let b = utc(2024, 12, 25, 7, 45, 9);
    assert_eq!(render(a, b, None), render(b, a, None));
    assert_renders(b, a, None, "5y 5m 20d 13h 45m 9s");
}

#[test]
fn identical_instants() {
    let t = utc(2030, 1, 1, 0, 0, 0);
    assert_renders(t, t, None, "0s");
}

#[test]
fn leap_day_anniversary_falls_short_of_a_year() {
    let d = between(&utc(2020, 2, 29, 0, 0, 0), &utc(2021, 2, 28, 0, 0, 0), None);
    assert_eq!(d.years, 0);
    assert_eq!(d.months, 11);
    assert_eq!(d.to_string(), "11m 30d");
}

#[test]
fn exact_year() {
    assert_renders(utc(2022, 3, 14, 10, 0, 0), utc(2023, 3, 14, 12, 0, 0), None, "1y 2h");
}
