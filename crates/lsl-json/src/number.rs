//! Numeric lexeme classification and formatting.
//!
//! The integer/float split is decided by how a number is written, never by
//! its value: `0` is an integer, `0.0` and `0e0` are floats.

use thiserror::Error;

use crate::Element;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum NumberError {
    #[error("malformed number `{0}`")]
    Malformed(String),
    #[error("number `{0}` is out of range")]
    OutOfRange(String),
}

/// True when the literal carries a fraction or an exponent.
pub fn is_float_lexeme(text: &str) -> bool {
    text.bytes().any(|b| matches!(b, b'.' | b'e' | b'E'))
}

/// Classify a numeric literal into an `Integer` or `Float` element.
///
/// - `"0"`   -> `Integer(0)`
/// - `"0.0"` -> `Float(0.0)`
/// - `"1e2"` -> `Float(100.0)`
///
/// Integers must fit `i64`; floats must stay finite.
pub fn classify_lexeme(text: &str) -> Result<Element, NumberError> {
    if is_float_lexeme(text) {
        let value: f64 = text
            .parse()
            .map_err(|_| NumberError::Malformed(text.to_owned()))?;
        if !value.is_finite() {
            return Err(NumberError::OutOfRange(text.to_owned()));
        }
        return Ok(Element::Float(value));
    }
    let digits = text.strip_prefix('-').unwrap_or(text);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(NumberError::Malformed(text.to_owned()));
    }
    text.parse::<i64>()
        .map(Element::Integer)
        .map_err(|_| NumberError::OutOfRange(text.to_owned()))
}

/// Minimal decimal form, never with a decimal point.
pub fn format_integer(value: i64) -> String {
    value.to_string()
}

/// Shortest round-tripping decimal form, always with a decimal point.
///
/// Non-finite values have no JSON spelling and render as `null`.
pub fn format_float(value: f64) -> String {
    if !value.is_finite() {
        return "null".to_owned();
    }
    let mut out = value.to_string();
    if !out.contains('.') {
        out.push_str(".0");
    }
    out
}

/// Format a numeric element as JSON number text. `None` for non-numeric elements.
pub fn format_number(element: &Element) -> Option<String> {
    match element {
        Element::Integer(n) => Some(format_integer(*n)),
        Element::Float(x) => Some(format_float(*x)),
        Element::Str(_) | Element::Opaque(_) => None,
    }
}
