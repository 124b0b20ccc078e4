//! Fail-soft JSON decoding of response bodies.
//!
//! Callers can always treat the result as a JSON value: anything that cannot
//! be parsed becomes an empty object.

use serde_json::{Map, Value};

fn empty() -> Value {
    Value::Object(Map::new())
}

/// Parse a raw response body. Empty or malformed input yields `{}`.
pub fn decode(raw: &str) -> Value {
    if raw.is_empty() {
        return empty();
    }

    match serde_json::from_str(raw) {
        Ok(value) => value,
        Err(e) => {
            tracing::debug!("Unparsable body: {raw:?}");
            tracing::error!(
                "An empty dict will be returned, because an error occurred while parsing JSON: {e}"
            );
            empty()
        }
    }
}

/// Decode a value that is expected to hold JSON source text.
///
/// A string is parsed like [`decode`]; any already-structured value
/// (array, number, null, ...) is not JSON source text and yields `{}`.
pub fn decode_value(raw: &Value) -> Value {
    match raw {
        Value::String(text) => decode(text),
        other => {
            tracing::error!(
                "An empty dict will be returned, because JSON source text was expected, got: {other}"
            );
            empty()
        }
    }
}
