use crate::prelude::*;

#[test]
fn omits_zero_fields_in_fixed_order() {
    assert_eq!(Duration { hours: 7, ..Duration::default() }.to_string(), "7h");
    assert_eq!(
        Duration { days: 3, minutes: 5, ..Duration::default() }.to_string(),
        "3d 5m"
    );
    assert_eq!(Duration::new(1, 2, 3, 4, 5, 6).to_string(), "1y 2m 3d 4h 5m 6s");
}

#[test]
fn empty_duration_is_zero_seconds() {
    assert_eq!(Duration::default().to_string(), "0s");
}
