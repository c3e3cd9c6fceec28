//! Bridges between [`JsonValue`] and `serde_json::Value`.

use serde_json::{Map, Number, Value};

use super::value::{JsonNumber, JsonValue};
use crate::number::format_float;
use crate::Element;

impl From<Value> for JsonValue {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => JsonValue::Null,
            Value::Bool(b) => JsonValue::Bool(b),
            Value::Number(n) => JsonValue::Number(number_from_serde(&n)),
            Value::String(s) => JsonValue::Str(s),
            Value::Array(items) => {
                JsonValue::Array(items.into_iter().map(JsonValue::from).collect())
            }
            Value::Object(map) => JsonValue::Object(
                map.into_iter()
                    .map(|(k, v)| (k, JsonValue::from(v)))
                    .collect(),
            ),
        }
    }
}

/// serde_json keeps floats apart from integers; the float case is rendered
/// with a point so the lexeme still classifies as a float.
fn number_from_serde(n: &Number) -> JsonNumber {
    match n.as_f64() {
        Some(x) if n.is_f64() => JsonNumber::new(format_float(x)),
        _ => JsonNumber::new(n.to_string()),
    }
}

/// Duplicate object keys collapse: the last value wins.
impl From<&JsonValue> for Value {
    fn from(value: &JsonValue) -> Self {
        match value {
            JsonValue::Null => Value::Null,
            JsonValue::Bool(b) => Value::Bool(*b),
            JsonValue::Number(n) => match n.to_element() {
                Ok(Element::Integer(i)) => Value::from(i),
                Ok(Element::Float(x)) => Number::from_f64(x).map_or(Value::Null, Value::Number),
                _ => Value::Null,
            },
            JsonValue::Str(s) => Value::String(s.clone()),
            JsonValue::Array(items) => Value::Array(items.iter().map(Value::from).collect()),
            JsonValue::Object(members) => {
                let mut map = Map::with_capacity(members.len());
                for (key, member) in members {
                    map.insert(key.clone(), Value::from(member));
                }
                Value::Object(map)
            }
        }
    }
}
