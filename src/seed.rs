//! Seed-state decoding.
//!
//! At startup the embedding layer hands over the initial-state text it
//! pulled from its document. Absent or blank text degenerates to an empty
//! object; anything else must parse as a JSON object.

use crate::bridge::BridgeError;
use crate::message::MESSAGES_FIELD;
use serde_json::{Map, Value};

/// Decode the host-embedded seed into the root state.
///
/// The `messages` field is always present in the result: a seed that omits
/// it gets an empty sequence, so the first `add_message` appends into `[]`
/// rather than relying on the lens-write path to invent the field.
pub fn decode_seed(text: Option<&str>) -> Result<Value, BridgeError> {
    let text = match text {
        Some(text) if !text.trim().is_empty() => text,
        _ => return Ok(default_root()),
    };
    let root: Value =
        serde_json::from_str(text).map_err(|source| BridgeError::InvalidSeed { source })?;
    match root {
        Value::Object(mut fields) => {
            fields
                .entry(MESSAGES_FIELD)
                .or_insert_with(|| Value::Array(Vec::new()));
            Ok(Value::Object(fields))
        }
        _ => Err(BridgeError::SeedNotObject),
    }
}

fn default_root() -> Value {
    let mut fields = Map::new();
    fields.insert(MESSAGES_FIELD.to_string(), Value::Array(Vec::new()));
    Value::Object(fields)
}
