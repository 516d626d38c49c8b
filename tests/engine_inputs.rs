use chrono::{DateTime, TimeZone, Utc};
use geofusion_core::engine::resolve_timestamp;
use geofusion_core::types::Coordinate;
use geofusion_core::{EngineConfig, FusionEngine, PredictionRequest};

fn engine() -> FusionEngine {
    FusionEngine::new(EngineConfig::v0()).unwrap()
}

fn fixed() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 1, 15, 9, 30, 0).unwrap()
}

#[test]
fn nan_input_uses_fallback_location() {
    let engine = engine();

    let fallback = engine.predict(22.4180, 114.2106, Some(fixed()));
    let nan = engine.predict(f64::NAN, f64::NAN, Some(fixed()));

    assert_eq!(nan.center, Coordinate::new(22.4180, 114.2106));
    assert_eq!(nan, fallback);
}

#[test]
fn each_axis_falls_back_independently() {
    let engine = engine();

    let result = engine.predict(22.30, f64::INFINITY, Some(fixed()));
    assert_eq!(result.center, Coordinate::new(22.30, 114.2106));

    let result = engine.predict(f64::NEG_INFINITY, 114.17, Some(fixed()));
    assert_eq!(result.center, Coordinate::new(22.4180, 114.17));
}

#[test]
fn out_of_range_input_is_clamped() {
    let result = engine().predict(123.0, -500.0, Some(fixed()));

    assert_eq!(result.center, Coordinate::new(90.0, -180.0));
    assert_eq!(result.sensors.len(), 5);
    for sensor in &result.sensors {
        assert!((-90.0..=90.0).contains(&sensor.lat));
        assert!((-180.0..=180.0).contains(&sensor.lon));
    }
}

#[test]
fn empty_request_uses_fallback_and_now() {
    let before = Utc::now();
    let result = engine().predict_request(&PredictionRequest::default());
    let after = Utc::now();

    assert_eq!(result.center, Coordinate::new(22.4180, 114.2106));
    assert!(result.timestamp >= before && result.timestamp <= after);
}

#[test]
fn missing_timestamp_means_now() {
    let before = Utc::now();
    let result = engine().predict(22.4180, 114.2106, None);
    let after = Utc::now();

    assert!(result.timestamp >= before && result.timestamp <= after);
}

#[test]
fn request_timestamp_is_honoured() {
    let engine = engine();

    let request = PredictionRequest::at(22.4180, 114.2106).with_timestamp("2026-01-15T09:30:00Z");
    let from_request = engine.predict_request(&request);
    let direct = engine.predict(22.4180, 114.2106, Some(fixed()));

    assert_eq!(from_request.timestamp, fixed());
    assert_eq!(from_request, direct);
}

#[test]
fn timestamp_parsing() {
    assert_eq!(resolve_timestamp(Some("2026-01-15T09:30:00Z")), fixed());
    assert_eq!(resolve_timestamp(Some("2026-01-15T17:30:00+08:00")), fixed());
    assert_eq!(resolve_timestamp(Some("2026-01-15T09:30:00")), fixed());
    assert_eq!(resolve_timestamp(Some(" 2026-01-15T09:30:00.000Z ")), fixed());
}

#[test]
fn unparseable_timestamp_falls_back_to_now() {
    let before = Utc::now();
    let parsed = resolve_timestamp(Some("yesterday-ish"));
    let after = Utc::now();

    assert!(parsed >= before && parsed <= after);
}

#[test]
fn request_deserializes_from_partial_json() {
    let request: PredictionRequest = serde_json::from_str(r#"{"lat": 22.3}"#).unwrap();

    assert_eq!(request.lat, Some(22.3));
    assert_eq!(request.lon, None);
    assert_eq!(request.timestamp, None);

    let result = engine().predict_request(&request);
    assert_eq!(result.center, Coordinate::new(22.3, 114.2106));
}

#[test]
fn range_invariants_across_the_globe() {
    let engine = engine();

    for hour in [0, 3, 6, 10, 13, 18, 23] {
        let at = Utc.with_ymd_and_hms(2026, 6, 1, hour, 0, 0).unwrap();
        for (lat, lon) in [(-90.0, -180.0), (-45.0, 30.0), (0.0, 0.0), (22.4, 114.18), (89.9, 179.9)] {
            let result = engine.predict(lat, lon, Some(at));

            assert!((18.0..=33.0).contains(&result.reference_temperature));
            assert!((0.0..=1.0).contains(&result.traffic_index));
            assert_eq!(result.sensors.len(), 5);
        }
    }
}
