//! Wire-format tests for the shared chart data types

use playgraph_common::{AveragePoint, PlayPoint, WeekCount};

#[test]
fn test_week_count_wire_format() {
    let wc = WeekCount::new(42, 17);
    let json = serde_json::to_string(&wc).unwrap();
    assert_eq!(json, "[42,17]");

    let back: WeekCount = serde_json::from_str("[42,17]").unwrap();
    assert_eq!(back, wc);
}

#[test]
fn test_play_point_wire_format() {
    let point = PlayPoint::new(1_108_252_800_000, 5);
    let json = serde_json::to_string(&point).unwrap();
    assert_eq!(json, "[1108252800000,5]");

    let back: PlayPoint = serde_json::from_str(&json).unwrap();
    assert_eq!(back, point);
}

#[test]
fn test_average_point_wire_format() {
    let point = AveragePoint::new(1_108_252_800_000, 7.5);
    let json = serde_json::to_string(&point).unwrap();
    assert_eq!(json, "[1108252800000,7.5]");

    let back: AveragePoint = serde_json::from_str(&json).unwrap();
    assert_eq!(back.timestamp_ms, point.timestamp_ms);
    assert!((back.average - point.average).abs() < f64::EPSILON);
}

#[test]
fn test_observation_list_parses_from_backend_payload() {
    let payload = "[[0,10],[1,20],[4,3]]";
    let observations: Vec<WeekCount> = serde_json::from_str(payload).unwrap();

    assert_eq!(observations.len(), 3);
    assert_eq!(observations[0], WeekCount::new(0, 10));
    assert_eq!(observations[2], WeekCount::new(4, 3));
}
