//! Conversion between JSON text and flat element lists.
//!
//! Parsing flattens one level: object members become alternating key/value
//! elements, array items become one element each. Anything nested deeper is
//! kept as its canonical JSON text inside a `Str` element.

use crate::constants::{JSON_FALSE, JSON_NULL, JSON_TRUE};
use crate::json::{JsonDecoder, JsonEncoder, JsonValue, ParseError, SerializeError};
use crate::options::{ParseOptions, SerializeOptions};
use crate::{ContainerKind, Element};

/// List codec with its parse and serialize settings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct JsonListCodec {
    pub parse: ParseOptions,
    pub serialize: SerializeOptions,
}

impl JsonListCodec {
    pub fn new(parse: ParseOptions, serialize: SerializeOptions) -> Self {
        Self { parse, serialize }
    }

    fn decoder(&self) -> JsonDecoder {
        JsonDecoder::with_max_depth(self.parse.max_depth)
    }

    /// Parses JSON text into list elements, reporting why it failed.
    pub fn try_parse(&self, text: &str) -> Result<Vec<Element>, ParseError> {
        let value = self.decoder().decode(text)?;
        flatten(&value)
    }

    /// Parses JSON text into list elements. Malformed text yields the single
    /// element `JSON_INVALID`.
    pub fn parse(&self, text: &str) -> Vec<Element> {
        match self.try_parse(text) {
            Ok(list) => list,
            Err(error) => {
                tracing::debug!(%error, len = text.len(), "json text rejected");
                vec![Element::invalid()]
            }
        }
    }

    /// Frames `elements` as a JSON object (alternating key/value) or array.
    pub fn serialize(
        &self,
        kind: ContainerKind,
        elements: &[Element],
    ) -> Result<String, SerializeError> {
        let mut encoder = JsonEncoder::new();
        match kind {
            ContainerKind::Array => {
                encoder.write_raw("[");
                for (i, element) in elements.iter().enumerate() {
                    if i > 0 {
                        encoder.write_raw(",");
                    }
                    self.write_value(&mut encoder, element);
                }
                encoder.write_raw("]");
            }
            ContainerKind::Object => {
                if elements.len() % 2 != 0 {
                    tracing::debug!(len = elements.len(), "odd element count for object");
                    return Err(SerializeError::OddElementCount(elements.len()));
                }
                encoder.write_raw("{");
                for (i, pair) in elements.chunks_exact(2).enumerate() {
                    if i > 0 {
                        encoder.write_raw(",");
                    }
                    encoder.write_key(&pair[0]);
                    encoder.write_raw(":");
                    self.write_value(&mut encoder, &pair[1]);
                }
                encoder.write_raw("}");
            }
        }
        Ok(encoder.flush())
    }

    /// Like [`JsonListCodec::serialize`], with the kind given as the host's
    /// `JSON_OBJECT` / `JSON_ARRAY` token.
    pub fn serialize_token(
        &self,
        token: &str,
        elements: &[Element],
    ) -> Result<String, SerializeError> {
        let kind = ContainerKind::try_from(token).inspect_err(|error| {
            tracing::debug!(%error, "unknown container token");
        })?;
        self.serialize(kind, elements)
    }

    fn write_value(&self, encoder: &mut JsonEncoder, element: &Element) {
        if self.serialize.embed_json_fragments {
            if let Some(fragment) = self.json_fragment(element) {
                encoder.write_any(&fragment);
                return;
            }
        }
        encoder.write_element(element);
    }

    /// A `Str` element holding a JSON object or array, decoded.
    fn json_fragment(&self, element: &Element) -> Option<JsonValue> {
        let Element::Str(text) = element else {
            return None;
        };
        if !matches!(text.trim_start().as_bytes().first(), Some(b'[' | b'{')) {
            return None;
        }
        self.decoder().decode(text).ok().filter(JsonValue::is_container)
    }
}

/// Flattens a parsed JSON value into list elements.
///
/// - object: key, value, key, value, ... in source order, duplicates kept;
/// - array: one element per item;
/// - scalar: a single element.
pub fn flatten(value: &JsonValue) -> Result<Vec<Element>, ParseError> {
    let mut encoder = JsonEncoder::new();
    match value {
        JsonValue::Object(members) => {
            let mut list = Vec::with_capacity(members.len() * 2);
            for (key, member) in members {
                list.push(Element::Str(key.clone()));
                list.push(flatten_leaf(member, &mut encoder)?);
            }
            Ok(list)
        }
        JsonValue::Array(items) => items
            .iter()
            .map(|item| flatten_leaf(item, &mut encoder))
            .collect(),
        scalar => Ok(vec![flatten_leaf(scalar, &mut encoder)?]),
    }
}

fn flatten_leaf(value: &JsonValue, encoder: &mut JsonEncoder) -> Result<Element, ParseError> {
    let element = match value {
        JsonValue::Null => Element::str(JSON_NULL),
        JsonValue::Bool(true) => Element::str(JSON_TRUE),
        JsonValue::Bool(false) => Element::str(JSON_FALSE),
        JsonValue::Str(s) => Element::Str(s.clone()),
        JsonValue::Number(n) => n.to_element()?,
        nested @ (JsonValue::Array(_) | JsonValue::Object(_)) => {
            check_numbers(nested)?;
            Element::Str(encoder.encode(nested))
        }
    };
    Ok(element)
}

/// Rejects unconvertible numbers anywhere in `value`. The encoder would
/// otherwise write them as `null`.
fn check_numbers(value: &JsonValue) -> Result<(), ParseError> {
    match value {
        JsonValue::Number(n) => n.to_element().map(drop).map_err(ParseError::from),
        JsonValue::Array(items) => items.iter().try_for_each(check_numbers),
        JsonValue::Object(members) => members.iter().try_for_each(|(_, v)| check_numbers(v)),
        JsonValue::Null | JsonValue::Bool(_) | JsonValue::Str(_) => Ok(()),
    }
}
