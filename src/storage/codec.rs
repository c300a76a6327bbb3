//! Item Payload Codec
//!
//! Turns a raw request body into an `ItemPayload`. The rules are deliberately lenient:
//! - The `Content-Type` header is not consulted.
//! - Only the first JSON value in the body is read; anything after it is ignored.
//! - A `null` body, a `null` field, or a missing field all leave that content empty.
//! - Field names match case-insensitively (`"Name"`, `"VALUE"`); when several keys
//!   match the same field, the last one in the document wins.
//! - Unknown fields, including `id`, are skipped.
//!
//! Anything else (empty body, invalid JSON, a non-object, a non-string field) is malformed.

use serde_json::{Map, Value};

use super::errors::CodecError;
use super::types::ItemPayload;

const FIELD_NAME: &str = "name";
const FIELD_VALUE: &str = "value";

pub fn decode_payload(body: &[u8]) -> Result<ItemPayload, CodecError> {
    let first = serde_json::Deserializer::from_slice(body)
        .into_iter::<Value>()
        .next()
        .ok_or(CodecError::EmptyBody)??;

    match first {
        Value::Null => Ok(ItemPayload::default()),
        Value::Object(fields) => payload_from_fields(fields),
        other => Err(CodecError::NotAnObject(json_kind(&other))),
    }
}

fn payload_from_fields(fields: Map<String, Value>) -> Result<ItemPayload, CodecError> {
    let mut payload = ItemPayload::default();

    for (key, value) in fields {
        let (field, slot) = if key.eq_ignore_ascii_case(FIELD_NAME) {
            (FIELD_NAME, &mut payload.name)
        } else if key.eq_ignore_ascii_case(FIELD_VALUE) {
            (FIELD_VALUE, &mut payload.value)
        } else {
            continue;
        };

        match value {
            Value::Null => {}
            Value::String(s) => *slot = s,
            other => {
                return Err(CodecError::FieldType {
                    field,
                    found: json_kind(&other),
                });
            }
        }
    }

    Ok(payload)
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
