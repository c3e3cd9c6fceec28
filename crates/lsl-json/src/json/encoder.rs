//! Canonical JSON text encoder.
//!
//! Output is compact: no whitespace between tokens. Numbers go through
//! [`crate::number`] so integers never carry a decimal point and floats
//! always do.

use super::value::{JsonNumber, JsonValue};
use crate::number::{format_float, format_integer};
use crate::Element;

/// JSON text encoder writing into an internal buffer.
#[derive(Debug, Default)]
pub struct JsonEncoder {
    out: String,
}

impl JsonEncoder {
    pub fn new() -> Self {
        Self { out: String::new() }
    }

    /// Encodes one value and returns the text, leaving the encoder empty.
    pub fn encode(&mut self, value: &JsonValue) -> String {
        self.out.clear();
        self.write_any(value);
        self.flush()
    }

    /// Takes the text written so far.
    pub fn flush(&mut self) -> String {
        std::mem::take(&mut self.out)
    }

    /// Appends already-encoded JSON text.
    pub fn write_raw(&mut self, text: &str) {
        self.out.push_str(text);
    }

    pub fn write_any(&mut self, value: &JsonValue) {
        match value {
            JsonValue::Null => self.write_null(),
            JsonValue::Bool(b) => self.write_boolean(*b),
            JsonValue::Number(n) => self.write_number(n),
            JsonValue::Str(s) => self.write_str(s),
            JsonValue::Array(items) => self.write_arr(items),
            JsonValue::Object(members) => self.write_obj(members),
        }
    }

    pub fn write_null(&mut self) {
        self.out.push_str("null");
    }

    pub fn write_boolean(&mut self, value: bool) {
        self.out.push_str(if value { "true" } else { "false" });
    }

    /// Re-formats the lexeme through its element form (`1e2` -> `100.0`).
    /// A lexeme that does not convert is written as `null`.
    pub fn write_number(&mut self, number: &JsonNumber) {
        match number.to_element() {
            Ok(Element::Integer(n)) => self.write_integer(n),
            Ok(Element::Float(x)) => self.write_float(x),
            _ => self.write_null(),
        }
    }

    pub fn write_integer(&mut self, value: i64) {
        self.out.push_str(&format_integer(value));
    }

    pub fn write_float(&mut self, value: f64) {
        self.out.push_str(&format_float(value));
    }

    pub fn write_arr(&mut self, items: &[JsonValue]) {
        self.out.push('[');
        for (i, item) in items.iter().enumerate() {
            if i > 0 {
                self.out.push(',');
            }
            self.write_any(item);
        }
        self.out.push(']');
    }

    pub fn write_obj(&mut self, members: &[(String, JsonValue)]) {
        self.out.push('{');
        for (i, (key, value)) in members.iter().enumerate() {
            if i > 0 {
                self.out.push(',');
            }
            self.write_str(key);
            self.out.push(':');
            self.write_any(value);
        }
        self.out.push('}');
    }

    /// Writes a quoted string literal, escaping `"`, `\` and control
    /// characters.
    pub fn write_str(&mut self, s: &str) {
        self.out.reserve(s.len() + 2);
        self.out.push('"');
        for ch in s.chars() {
            match ch {
                '"' => self.out.push_str("\\\""),
                '\\' => self.out.push_str("\\\\"),
                '\n' => self.out.push_str("\\n"),
                '\r' => self.out.push_str("\\r"),
                '\t' => self.out.push_str("\\t"),
                '\u{0008}' => self.out.push_str("\\b"),
                '\u{000C}' => self.out.push_str("\\f"),
                c if (c as u32) < 0x20 => {
                    self.out.push_str(&format!("\\u{:04x}", c as u32));
                }
                c => self.out.push(c),
            }
        }
        self.out.push('"');
    }

    /// Writes a list element as a JSON value. The null/true/false sentinels
    /// become JSON literals.
    pub fn write_element(&mut self, element: &Element) {
        match element {
            Element::Integer(n) => self.write_integer(*n),
            Element::Float(x) => self.write_float(*x),
            Element::Str(s) => match element.json_literal() {
                Some(literal) => self.write_raw(literal),
                None => self.write_str(s),
            },
            Element::Opaque(s) => self.write_str(s),
        }
    }

    /// Writes a list element as an object key, always a quoted string.
    pub fn write_key(&mut self, element: &Element) {
        match element {
            Element::Str(s) | Element::Opaque(s) => self.write_str(s),
            other => self.write_str(&other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::JSON_NULL;

    fn num(lexeme: &str) -> JsonValue {
        JsonValue::Number(JsonNumber::new(lexeme))
    }

    #[test]
    fn compact_canonical_output() {
        let mut encoder = JsonEncoder::new();
        let value = JsonValue::Object(vec![
            ("a".into(), JsonValue::Array(vec![num("1"), num("1.50"), num("1e2")])),
            ("b".into(), JsonValue::Null),
            ("b".into(), JsonValue::Bool(false)),
            ("c".into(), JsonValue::Object(vec![])),
        ]);
        assert_eq!(
            encoder.encode(&value),
            r#"{"a":[1,1.5,100.0],"b":null,"b":false,"c":{}}"#
        );
        assert_eq!(encoder.encode(&JsonValue::Array(vec![])), "[]");
    }

    #[test]
    fn unconvertible_number_is_null() {
        let mut encoder = JsonEncoder::new();
        assert_eq!(encoder.encode(&num("1e999")), "null");
        assert_eq!(encoder.encode(&num("abc")), "null");
    }

    #[test]
    fn string_escaping() {
        let mut encoder = JsonEncoder::new();
        encoder.write_str("q\"b\\s/\n\r\t\u{8}\u{c}\u{1}\u{1f} é😀");
        assert_eq!(
            encoder.flush(),
            r#""q\"b\\s/\n\r\t\b\f\u0001\u001f é😀""#
        );
    }

    #[test]
    fn elements_and_sentinels() {
        let mut encoder = JsonEncoder::new();
        encoder.write_element(&Element::Integer(0));
        encoder.write_raw(",");
        encoder.write_element(&Element::Float(0.0));
        encoder.write_raw(",");
        encoder.write_element(&Element::null());
        encoder.write_raw(",");
        encoder.write_element(&Element::from(true));
        encoder.write_raw(",");
        encoder.write_element(&Element::from(false));
        encoder.write_raw(",");
        encoder.write_element(&Element::Opaque(JSON_NULL.to_owned()));
        encoder.write_raw(",");
        encoder.write_element(&Element::str("true"));
        assert_eq!(
            encoder.flush(),
            format!("0,0.0,null,true,false,\"{JSON_NULL}\",\"true\"")
        );
    }

    #[test]
    fn keys_use_canonical_text() {
        let mut encoder = JsonEncoder::new();
        encoder.write_key(&Element::Integer(3));
        encoder.write_key(&Element::Float(3.0));
        encoder.write_key(&Element::str("k\""));
        encoder.write_key(&Element::Opaque("<0, 0, 1>".into()));
        assert_eq!(encoder.flush(), r#""3""3.0""k\"""<0, 0, 1>""#);
    }
}
