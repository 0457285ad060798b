//! Decoding a JSON observation batch at the ingestion boundary.
//!
//! In permissive mode malformed fields degrade instead of failing: text
//! fields fall back to their string rendering (or `""`), prices to `NaN`.
//! Strict mode rejects the batch at the first malformed record.

use serde_json::Value;
use tracing::warn;

use crate::config::ValidationMode;
use crate::error::{PriceTrackerError, Result};
use crate::models::Observation;
use crate::timeline::local_datetime;

const TEXT_FIELDS: [&str; 5] = ["model", "color", "ram", "storage", "timestamp"];

/// Parse a JSON array of observation records.
pub fn parse_observations(json: &str, mode: ValidationMode) -> Result<Vec<Observation>> {
    let value: Value = serde_json::from_str(json)?;
    observations_from_value(&value, mode)
}

/// Convert an already-decoded JSON value into observations.
///
/// Fails with [`PriceTrackerError::InvalidInput`] unless `value` is an array.
pub fn observations_from_value(value: &Value, mode: ValidationMode) -> Result<Vec<Observation>> {
    let rows = value.as_array().ok_or_else(|| {
        PriceTrackerError::InvalidInput(format!(
            "expected an array of observations, got {}",
            json_type_name(value)
        ))
    })?;

    let mut observations = Vec::with_capacity(rows.len());
    for (index, row) in rows.iter().enumerate() {
        let (obs, degraded) = observation_from_row(row);
        match mode {
            ValidationMode::Permissive => {
                if !degraded.is_empty() {
                    warn!(index, fields = ?degraded, "degraded observation record");
                }
            }
            ValidationMode::Strict => {
                if let Some(reason) = reject_reason(&obs, &degraded) {
                    warn!(index, %reason, "rejected observation record");
                    return Err(PriceTrackerError::InvalidRecord { index, reason });
                }
            }
        }
        observations.push(obs);
    }
    Ok(observations)
}

/// Build an observation from one JSON row, returning the names of fields
/// that had to be degraded.
fn observation_from_row(row: &Value) -> (Observation, Vec<&'static str>) {
    let mut degraded = Vec::new();
    let mut text = |name: &'static str| -> String {
        match row.get(name) {
            Some(Value::String(s)) => s.clone(),
            Some(Value::Null) | None => {
                degraded.push(name);
                String::new()
            }
            Some(other) => {
                degraded.push(name);
                other.to_string()
            }
        }
    };

    let model = text("model");
    let color = text("color");
    let ram = text("ram");
    let storage = text("storage");
    let timestamp = text("timestamp");

    let price = match row.get("price") {
        Some(Value::Number(n)) => n.as_f64().unwrap_or(f64::NAN),
        Some(Value::String(s)) => {
            degraded.push("price");
            s.trim().parse::<f64>().unwrap_or(f64::NAN)
        }
        _ => {
            degraded.push("price");
            f64::NAN
        }
    };

    let obs = Observation {
        model,
        color,
        ram,
        storage,
        price,
        timestamp,
    };
    (obs, degraded)
}

fn reject_reason(obs: &Observation, degraded: &[&'static str]) -> Option<String> {
    if let Some(field) = degraded.iter().find(|f| TEXT_FIELDS.contains(*f)) {
        return Some(format!("field `{}` is missing or not a string", field));
    }
    for (name, value) in [
        ("model", &obs.model),
        ("color", &obs.color),
        ("ram", &obs.ram),
        ("storage", &obs.storage),
    ] {
        if value.trim().is_empty() {
            return Some(format!("field `{}` is empty", name));
        }
    }
    if degraded.contains(&"price") {
        return Some("field `price` is missing or not a number".to_string());
    }
    if !obs.price.is_finite() || obs.price < 0.0 {
        return Some(format!("price {} is not a finite non-negative number", obs.price));
    }
    if local_datetime(&obs.timestamp, None).is_none() {
        return Some(format!("timestamp `{}` is not ISO-8601", obs.timestamp));
    }
    None
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
