//! Numeric coercion over heterogeneous wire values.
//!
//! Everything the engine does arithmetic on (item prices, quantities,
//! document fields, configured costs) arrives as untyped JSON. Coercion is
//! a **total** function: any input becomes either a finite number or the
//! invalid marker (`f64::NAN`). It never panics and never errors.

use serde::{Deserialize, Deserializer};
use serde_json::Value as JsonValue;

/// Coerce an arbitrary JSON value to a number.
///
/// - numbers pass through
/// - strings are trimmed and parsed
/// - booleans map to 1/0
/// - anything else (null, arrays, objects) is NaN
///
/// NaN is the invalid marker; downstream arithmetic propagates it per IEEE
/// semantics and only the aggregator's sum step filters it out.
pub fn coerce(value: &JsonValue) -> f64 {
    match value {
        JsonValue::Number(n) => n.as_f64().unwrap_or(f64::NAN),
        JsonValue::String(s) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                return f64::NAN;
            }
            // Overflowing literals like "1e999" parse to infinity; the
            // coercion contract is finite-or-invalid, so fold them in.
            match trimmed.parse::<f64>() {
                Ok(parsed) if parsed.is_finite() => parsed,
                _ => f64::NAN,
            }
        }
        JsonValue::Bool(b) => {
            if *b {
                1.0
            } else {
                0.0
            }
        }
        _ => f64::NAN,
    }
}

/// Coerce an optional document/record field; an absent field is invalid.
pub fn coerce_field(value: Option<&JsonValue>) -> f64 {
    value.map(coerce).unwrap_or(f64::NAN)
}

/// Round to two decimal places, half away from zero.
///
/// Floating-point rounding, not decimal-exact. Applied only inside the
/// return-rate and percent-fallback branches, never to the final aggregate.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Serde deserializer routing configuration numbers through [`coerce`],
/// so `"2.5"` is as acceptable as `2.5` for cost/percent fields.
pub fn lenient_f64<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = JsonValue::deserialize(deserializer)?;
    Ok(coerce(&value))
}
