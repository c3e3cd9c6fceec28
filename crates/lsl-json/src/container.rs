//! Container framing selected by the caller on serialization.

use crate::constants::{JSON_ARRAY, JSON_OBJECT};
use crate::json::SerializeError;

/// How a flat element sequence is framed as JSON.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContainerKind {
    /// Elements are alternating key/value pairs.
    Object,
    Array,
}

impl ContainerKind {
    /// The host token (`JSON_OBJECT` / `JSON_ARRAY`) for this kind.
    pub fn token(self) -> &'static str {
        match self {
            ContainerKind::Object => JSON_OBJECT,
            ContainerKind::Array => JSON_ARRAY,
        }
    }
}

impl TryFrom<&str> for ContainerKind {
    type Error = SerializeError;

    fn try_from(token: &str) -> Result<Self, Self::Error> {
        match token {
            JSON_OBJECT => Ok(ContainerKind::Object),
            JSON_ARRAY => Ok(ContainerKind::Array),
            other => Err(SerializeError::InvalidContainerKind(other.to_owned())),
        }
    }
}
