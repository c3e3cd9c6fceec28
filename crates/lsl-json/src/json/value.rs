//! JSON parse tree.

use crate::number::{classify_lexeme, is_float_lexeme, NumberError};
use crate::Element;

/// A number as it was written in the source text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JsonNumber {
    lexeme: String,
    is_float: bool,
}

impl JsonNumber {
    pub fn new(lexeme: impl Into<String>) -> Self {
        let lexeme = lexeme.into();
        let is_float = is_float_lexeme(&lexeme);
        Self { lexeme, is_float }
    }

    pub fn lexeme(&self) -> &str {
        &self.lexeme
    }

    /// The lexeme carries a fraction and/or an exponent.
    pub fn is_float(&self) -> bool {
        self.is_float
    }

    /// Convert to an `Integer` or `Float` element at full precision.
    pub fn to_element(&self) -> Result<Element, NumberError> {
        classify_lexeme(&self.lexeme)
    }
}

/// Parsed JSON value.
///
/// Objects are member lists, not maps: source order is kept and duplicate
/// keys survive.
#[derive(Debug, Clone, PartialEq)]
pub enum JsonValue {
    Null,
    Bool(bool),
    Number(JsonNumber),
    Str(String),
    Array(Vec<JsonValue>),
    Object(Vec<(String, JsonValue)>),
}

impl JsonValue {
    pub fn is_container(&self) -> bool {
        matches!(self, JsonValue::Array(_) | JsonValue::Object(_))
    }
}
