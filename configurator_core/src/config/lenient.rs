//! Lenient deserialization for numeric configuration fields.
//!
//! UI layers send whatever the form holds: numbers, numeric strings, `null`,
//! or nothing at all. Rejecting the whole document would hide every other
//! field's feedback, so anything that is not a finite number becomes `NaN`.
//! The validator turns a `NaN` into an error on that field and the BOM and
//! pricing stages carry on best-effort.
//!
//! ```rust
//! use configurator_core::config::ShedConfiguration;
//!
//! let config: ShedConfiguration =
//!     serde_json::from_str(r#"{ "width": "3.5", "length": null }"#).unwrap();
//! assert_eq!(config.width, 3.5);
//! assert!(config.length.is_nan());
//! assert!(config.wall_height.is_nan());
//! ```

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Default for a numeric field that is absent from the document.
pub fn missing() -> f64 {
    f64::NAN
}

/// Accept a number, a numeric string or `null`.
pub fn number<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<Value>::deserialize(deserializer)?;
    Ok(match raw {
        Some(Value::Number(n)) => n.as_f64().unwrap_or(f64::NAN),
        Some(Value::String(s)) => s.trim().replace(',', ".").parse().unwrap_or(f64::NAN),
        _ => f64::NAN,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Deserialize)]
    struct Probe {
        #[serde(default = "missing", deserialize_with = "number")]
        value: f64,
    }

    fn probe(json: &str) -> f64 {
        serde_json::from_str::<Probe>(json).unwrap().value
    }

    #[test]
    fn test_accepts_numbers_and_strings() {
        assert_eq!(probe(r#"{"value": 2.5}"#), 2.5);
        assert_eq!(probe(r#"{"value": 3}"#), 3.0);
        assert_eq!(probe(r#"{"value": " 4.2 "}"#), 4.2);
        assert_eq!(probe(r#"{"value": "4,2"}"#), 4.2);
    }

    #[test]
    fn test_malformed_becomes_nan() {
        assert!(probe(r#"{"value": null}"#).is_nan());
        assert!(probe(r#"{"value": "wide"}"#).is_nan());
        assert!(probe(r#"{"value": true}"#).is_nan());
        assert!(probe(r#"{}"#).is_nan());
    }
}
