//! JSON codec for flat script lists.
//!
//! Converts between JSON text and the flat, dynamically typed list used by
//! LSL scripts. Integer and float literals keep their identity through the
//! round trip: `{"a":0}` parses to `Integer(0)` and `{"a":0.0}` to
//! `Float(0.0)`, and each serializes back the way it was written.
//!
//! JSON `null`, `true` and `false` travel through the list as the sentinel
//! texts [`JSON_NULL`], [`JSON_TRUE`] and [`JSON_FALSE`]. A script string that
//! happens to equal a sentinel is indistinguishable from it.
//!
//! ```
//! use lsl_json::{json_parse, json_serialize, ContainerKind, Element};
//!
//! let list = json_parse(r#"{ "dummy" : 0.0 }"#);
//! assert_eq!(list, vec![Element::str("dummy"), Element::Float(0.0)]);
//! assert_eq!(
//!     json_serialize(ContainerKind::Object, &list).unwrap(),
//!     r#"{"dummy":0.0}"#
//! );
//! ```

mod constants;
mod container;
mod element;

pub mod json;
pub mod list;
pub mod number;
pub mod options;

pub use constants::{
    DEFAULT_MAX_DEPTH, JSON_ARRAY, JSON_FALSE, JSON_INVALID, JSON_NULL, JSON_OBJECT, JSON_TRUE,
};
pub use container::ContainerKind;
pub use element::Element;
pub use json::{JsonValue, ParseError, SerializeError};
pub use list::{flatten, JsonListCodec};
pub use options::{ParseOptions, SerializeOptions};

/// Parses JSON text into list elements with default settings.
///
/// Never fails: malformed text yields `[JSON_INVALID]`.
pub fn json_parse(text: &str) -> Vec<Element> {
    JsonListCodec::default().parse(text)
}

/// Parses JSON text into list elements, returning the parse error on failure.
pub fn try_json_parse(text: &str) -> Result<Vec<Element>, ParseError> {
    JsonListCodec::default().try_parse(text)
}

/// Frames list elements as a JSON object or array with default settings.
pub fn json_serialize(kind: ContainerKind, elements: &[Element]) -> Result<String, SerializeError> {
    JsonListCodec::default().serialize(kind, elements)
}

/// Like [`json_serialize`], with the kind given as a `JSON_OBJECT` /
/// `JSON_ARRAY` token.
pub fn json_serialize_token(token: &str, elements: &[Element]) -> Result<String, SerializeError> {
    JsonListCodec::default().serialize_token(token, elements)
}
