use std::io::Write;

use roam_core::error::RoamError;
use roam_core::geo::{normalize, normalize_all, RawListing, RawValue};
use roam_core::listing::{load_listings, parse_listings};

fn raw(id: &str, lat: RawValue, lon: RawValue, price: RawValue) -> RawListing {
    RawListing {
        id: Some(id.into()),
        latitude: Some(lat),
        longitude: Some(lon),
        price: Some(price),
    }
}

#[test]
fn test_normalize_numeric_fields() {
    let p = normalize(&raw("a", 52.5.into(), 13.4.into(), 80.0.into())).unwrap();
    assert_eq!(p.id, "a");
    assert_eq!(p.latitude, 52.5);
    assert_eq!(p.longitude, 13.4);
    assert_eq!(p.price, 80.0);
}

#[test]
fn test_normalize_numeric_strings() {
    let p = normalize(&raw("a", " 52.5 ".into(), "-13.25".into(), "42".into())).unwrap();
    assert_eq!(p.latitude, 52.5);
    assert_eq!(p.longitude, -13.25);
    assert_eq!(p.price, 42.0);
}

#[test]
fn test_normalize_rejects_out_of_range_latitude() {
    let err = normalize(&raw("a", 91.0.into(), 0.0.into(), 1.0.into())).unwrap_err();
    assert!(
        matches!(err, RoamError::InvalidCoordinate { field: "latitude", .. }),
        "got: {err}"
    );
}

#[test]
fn test_normalize_rejects_non_numeric_longitude() {
    let err = normalize(&raw("a", 0.0.into(), "east".into(), 1.0.into())).unwrap_err();
    assert!(
        matches!(err, RoamError::InvalidCoordinate { field: "longitude", .. }),
        "got: {err}"
    );
}

#[test]
fn test_normalize_rejects_missing_coordinate() {
    let listing = RawListing {
        id: Some("a".into()),
        latitude: None,
        longitude: Some(0.0.into()),
        price: Some(1.0.into()),
    };
    assert!(matches!(
        normalize(&listing),
        Err(RoamError::InvalidCoordinate { .. })
    ));
}

#[test]
fn test_normalize_rejects_negative_price() {
    let err = normalize(&raw("a", 0.0.into(), 0.0.into(), (-5.0).into())).unwrap_err();
    assert!(matches!(err, RoamError::InvalidPrice { .. }), "got: {err}");
}

#[test]
fn test_normalize_rejects_empty_id() {
    let err = normalize(&raw("  ", 0.0.into(), 0.0.into(), 1.0.into())).unwrap_err();
    assert!(matches!(err, RoamError::InvalidId));
}

#[test]
fn test_normalize_all_drops_invalid_and_duplicates() {
    let raws = vec![
        raw("a", 1.0.into(), 1.0.into(), 1.0.into()),
        raw("b", 100.0.into(), 1.0.into(), 1.0.into()),
        raw("a", 2.0.into(), 2.0.into(), 1.0.into()),
        raw("c", 3.0.into(), 3.0.into(), 1.0.into()),
    ];
    let report = normalize_all(&raws);
    let ids: Vec<&str> = report.points.iter().map(|p| p.id.as_str()).collect();
    assert_eq!(ids, ["a", "c"]);
    assert_eq!(report.points[0].latitude, 1.0);

    assert_eq!(report.rejected.len(), 2);
    assert_eq!(report.rejected[0].0, 1);
    assert!(matches!(report.rejected[1], (2, RoamError::DuplicateId(ref id)) if id == "a"));
}

const FEATURES: &str = r#"{
  "type": "FeatureCollection",
  "features": [
    { "type": "Feature",
      "properties": { "id": "1001", "latitude": "52.53", "longitude": "13.41", "price": 75 } },
    { "type": "Feature",
      "properties": { "id": 1002, "latitude": 52.51, "longitude": 13.39, "price": "120" } },
    { "type": "Feature",
      "properties": { "id": "1003", "latitude": "n/a", "longitude": 13.0, "price": 10 } }
  ]
}"#;

#[test]
fn test_parse_feature_collection() {
    let collection = parse_listings(FEATURES).unwrap();
    assert_eq!(collection.features.len(), 3);

    let report = collection.normalize();
    let ids: Vec<&str> = report.points.iter().map(|p| p.id.as_str()).collect();
    assert_eq!(ids, ["1001", "1002"]);
    assert_eq!(report.points[1].price, 120.0);
    assert_eq!(report.rejected.len(), 1);
}

#[test]
fn test_load_listings_from_file() {
    let mut f = tempfile::NamedTempFile::new().unwrap();
    f.write_all(FEATURES.as_bytes()).unwrap();
    f.flush().unwrap();

    let collection = load_listings(f.path()).unwrap();
    assert_eq!(collection.raw_listings().count(), 3);
}

#[test]
fn test_parse_rejects_malformed_json() {
    assert!(matches!(parse_listings("{ nope"), Err(RoamError::Json(_))));
}
