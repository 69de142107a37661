//! Message payload normalization.
//!
//! The host's serialization layer cannot represent an empty JSON array: a
//! field that should be an empty or absent sequence arrives as an empty
//! string instead. [`clean`] reconciles that with the shape the view tree
//! expects, once, at the bridge's entry edge.

use serde_json::Value;

/// Root-state field holding the ordered message sequence.
pub const MESSAGES_FIELD: &str = "messages";

/// Message fields that must be a sequence or absent.
pub const SEQUENCE_FIELDS: [&str; 5] = ["to", "cc", "bcc", "from", "body"];

/// Normalize a raw host message.
///
/// Each recognized sequence field that is present but not a JSON array
/// (the empty-string degenerate case included) is removed — absent, not an
/// empty array, not a falsy scalar. Arrays pass through unchanged, as does
/// every other field, unknown ones included. Non-object payloads are
/// returned untouched.
///
/// Pure and idempotent; malformed shape is the defined input here, not an
/// error.
pub fn clean(message: Value) -> Value {
    match message {
        Value::Object(mut fields) => {
            for field in SEQUENCE_FIELDS {
                if fields.get(field).is_some_and(|value| !value.is_array()) {
                    fields.remove(field);
                }
            }
            Value::Object(fields)
        }
        other => other,
    }
}
