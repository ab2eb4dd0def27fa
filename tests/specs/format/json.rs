use crate::prelude::*;
use serde::Serialize;

#[derive(Serialize)]
struct Uptime {
    service: &'static str,
    duration: Duration,
}

#[test]
fn embeds_as_string_field() {
    let report = Uptime {
        service: "api",
        duration: between(&utc(2020, 1, 1, 0, 0, 0), &utc(2023, 4, 15, 6, 30, 15), None),
    };
    assert_eq!(
        serde_json::to_string(&report).unwrap(),
        r#"{"service":"api","duration":"3y 3m 14d 6h 30m 15s"}"#
    );
}

#[test]
fn to_json_is_quoted_format() {
    let d = Duration { seconds: 42, ..Duration::default() };
    assert_eq!(d.to_json(), r#""42s""#);
}
