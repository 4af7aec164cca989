//! Strict decoding of the inference reply against the college contract.
//!
//! All-or-nothing: one bad element rejects the whole batch. A partially
//! accepted array would blur where the guaranteed-inclusion entry came from,
//! so the caller only ever sees a fully valid list or a ParseError.

use serde_json::Value;
use thiserror::Error;

use crate::models::college::College;

/// Fields every element must carry as non-null strings. `website` is the one
/// optional field and defaults to the empty string.
const REQUIRED_FIELDS: [&str; 5] = ["name", "city", "cutoffRange", "description", "logoUrl"];

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The reply was not JSON, or not a JSON array.
    #[error("malformed inference reply: {0}")]
    Malformed(String),
    /// The reply decoded as an array, but an element violated the contract.
    #[error("schema violation at element {index}: field `{field}` missing or not a string")]
    SchemaViolation { index: usize, field: &'static str },
}

/// Parses raw inference output into a list of colleges, preserving element
/// order. An empty array is a valid outcome (no colleges found), distinct
/// from any error.
pub fn parse_colleges(raw: &str) -> Result<Vec<College>, ParseError> {
    let value: Value =
        serde_json::from_str(raw).map_err(|e| ParseError::Malformed(e.to_string()))?;

    let items = value
        .as_array()
        .ok_or_else(|| ParseError::Malformed("top-level value is not an array".to_string()))?;

    let mut colleges = Vec::with_capacity(items.len());
    for (index, item) in items.iter().enumerate() {
        let object = item.as_object().ok_or(ParseError::SchemaViolation {
            index,
            field: "name",
        })?;

        for field in REQUIRED_FIELDS {
            let present = object.get(field).map_or(false, Value::is_string);
            if !present {
                return Err(ParseError::SchemaViolation { index, field });
            }
        }

        // Required fields are verified above; `website` defaults via serde.
        let college: College = serde_json::from_value(item.clone())
            .map_err(|e| ParseError::Malformed(e.to_string()))?;
        colleges.push(college);
    }

    Ok(colleges)
}
