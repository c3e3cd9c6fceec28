//! [`Element`] — one item of a flat script list.

use std::fmt;

use crate::constants::{JSON_FALSE, JSON_INVALID, JSON_NULL, JSON_TRUE};
use crate::number::{format_float, format_integer};

/// A single entry of the host's flat list type.
///
/// The numeric variant is part of the element's identity: `Integer(0)` and
/// `Float(0.0)` compare unequal and serialize differently (`0` vs `0.0`).
///
/// JSON has no counterpart for `Opaque`; such elements (vectors, rotations,
/// keys) are carried as their canonical text.
#[derive(Debug, Clone, PartialEq)]
pub enum Element {
    Integer(i64),
    Float(f64),
    Str(String),
    Opaque(String),
}

impl Element {
    pub fn str(text: impl Into<String>) -> Self {
        Element::Str(text.into())
    }

    /// The `JSON_NULL` sentinel.
    pub fn null() -> Self {
        Element::Str(JSON_NULL.to_owned())
    }

    /// The `JSON_INVALID` sentinel.
    pub fn invalid() -> Self {
        Element::Str(JSON_INVALID.to_owned())
    }

    /// Returns the text of a `Str` element.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Element::Str(s) => Some(s),
            _ => None,
        }
    }

    /// JSON literal text for a `Str` holding one of the null/true/false
    /// sentinels.
    ///
    /// Note that a script string equal to a sentinel text is indistinguishable
    /// from the sentinel itself.
    pub fn json_literal(&self) -> Option<&'static str> {
        match self.as_str()? {
            JSON_NULL => Some("null"),
            JSON_TRUE => Some("true"),
            JSON_FALSE => Some("false"),
            _ => None,
        }
    }
}

impl fmt::Display for Element {
    /// Canonical text of the element, used when it appears as an object key.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Element::Integer(n) => f.write_str(&format_integer(*n)),
            Element::Float(x) => f.write_str(&format_float(*x)),
            Element::Str(s) | Element::Opaque(s) => f.write_str(s),
        }
    }
}

impl From<i64> for Element {
    fn from(value: i64) -> Self {
        Element::Integer(value)
    }
}

impl From<i32> for Element {
    fn from(value: i32) -> Self {
        Element::Integer(i64::from(value))
    }
}

impl From<f64> for Element {
    fn from(value: f64) -> Self {
        Element::Float(value)
    }
}

impl From<f32> for Element {
    fn from(value: f32) -> Self {
        Element::Float(f64::from(value))
    }
}

impl From<bool> for Element {
    fn from(value: bool) -> Self {
        Element::Str(if value { JSON_TRUE } else { JSON_FALSE }.to_owned())
    }
}

impl From<&str> for Element {
    fn from(value: &str) -> Self {
        Element::Str(value.to_owned())
    }
}

impl From<String> for Element {
    fn from(value: String) -> Self {
        Element::Str(value)
    }
}
