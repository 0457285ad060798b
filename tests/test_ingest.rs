//! Tests for decoding observation batches.

use price_tracker_core::ingest::{observations_from_value, parse_observations};
use price_tracker_core::{PriceTrackerError, ValidationMode};
use serde_json::json;

#[test]
fn parses_well_formed_records() {
    let text = json!([
        {"model": "PIXEL_8", "color": "Obsidian", "ram": "8GB", "storage": "128GB",
         "price": 59999.0, "timestamp": "2024-01-01T10:00:00.123456"},
        {"model": "PIXEL_8", "color": "Hazel", "ram": "8GB", "storage": "256GB",
         "price": 64999, "timestamp": "2024-01-02"}
    ])
    .to_string();

    for mode in [ValidationMode::Permissive, ValidationMode::Strict] {
        let batch = parse_observations(&text, mode).unwrap();
        assert_eq!(batch.len(), 2);
        assert_eq!(batch[0].color, "Obsidian");
        assert_eq!(batch[1].price, 64999.0);
        assert_eq!(batch[1].timestamp, "2024-01-02");
    }
}

#[test]
fn empty_array_is_not_an_error() {
    let batch = parse_observations("[]", ValidationMode::Strict).unwrap();
    assert!(batch.is_empty());
}

#[test]
fn non_array_is_invalid_input() {
    let err = parse_observations(r#"{"model": "X"}"#, ValidationMode::Permissive).unwrap_err();
    assert!(matches!(err, PriceTrackerError::InvalidInput(_)));
    assert!(err.to_string().contains("an object"));

    let err = observations_from_value(&json!(42), ValidationMode::Permissive).unwrap_err();
    assert!(matches!(err, PriceTrackerError::InvalidInput(_)));
}

#[test]
fn malformed_json_is_json_error() {
    let err = parse_observations("[{", ValidationMode::Permissive).unwrap_err();
    assert!(matches!(err, PriceTrackerError::Json(_)));
}

// ---------------------------------------------------------------------------
// Permissive degradation
// ---------------------------------------------------------------------------

#[test]
fn permissive_missing_color_becomes_empty_key() {
    let value = json!([
        {"model": "X", "ram": "8GB", "storage": "128GB", "price": 10.0, "timestamp": "2024-01-01"}
    ]);
    let batch = observations_from_value(&value, ValidationMode::Permissive).unwrap();
    assert_eq!(batch[0].color, "");
    assert_eq!(batch[0].variant_key().label(), " - 8GB/128GB");
}

#[test]
fn permissive_wrong_typed_fields_degrade() {
    let value = json!([
        {"model": "X", "color": "Black", "ram": 8, "storage": null,
         "price": "not a price", "timestamp": "2024-01-01"},
        {"model": "X", "color": "Black", "ram": "8GB", "storage": "128GB",
         "price": " 12.5 ", "timestamp": "2024-01-01"},
        "just a string"
    ]);
    let batch = observations_from_value(&value, ValidationMode::Permissive).unwrap();
    assert_eq!(batch.len(), 3);

    assert_eq!(batch[0].ram, "8");
    assert_eq!(batch[0].storage, "");
    assert!(batch[0].price.is_nan());

    assert_eq!(batch[1].price, 12.5);

    assert_eq!(batch[2].model, "");
    assert_eq!(batch[2].timestamp, "");
    assert!(batch[2].price.is_nan());
}

// ---------------------------------------------------------------------------
// Strict validation
// ---------------------------------------------------------------------------

fn strict_err(value: serde_json::Value) -> (usize, String) {
    match observations_from_value(&value, ValidationMode::Strict) {
        Err(PriceTrackerError::InvalidRecord { index, reason }) => (index, reason),
        other => panic!("expected InvalidRecord, got {:?}", other),
    }
}

fn good() -> serde_json::Value {
    json!({"model": "X", "color": "Black", "ram": "8GB", "storage": "128GB",
           "price": 10.0, "timestamp": "2024-01-01"})
}

#[test]
fn strict_rejects_missing_field() {
    let mut bad = good();
    bad.as_object_mut().unwrap().remove("color");
    let (index, reason) = strict_err(json!([good(), bad]));
    assert_eq!(index, 1);
    assert!(reason.contains("color"));
}

#[test]
fn strict_rejects_blank_field() {
    let mut bad = good();
    bad["storage"] = json!("  ");
    let (index, reason) = strict_err(json!([bad]));
    assert_eq!(index, 0);
    assert!(reason.contains("storage"));
}

#[test]
fn strict_rejects_negative_and_string_prices() {
    let mut negative = good();
    negative["price"] = json!(-1.0);
    let (_, reason) = strict_err(json!([negative]));
    assert!(reason.contains("non-negative"));

    let mut text = good();
    text["price"] = json!("10");
    let (_, reason) = strict_err(json!([text]));
    assert!(reason.contains("price"));
}

#[test]
fn strict_rejects_unparseable_timestamp() {
    let mut bad = good();
    bad["timestamp"] = json!("01/02/2024");
    let (_, reason) = strict_err(json!([bad]));
    assert!(reason.contains("timestamp"));
}
