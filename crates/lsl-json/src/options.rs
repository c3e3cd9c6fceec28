//! Codec settings a host can set in code or load from its own config.

use serde::Deserialize;

use crate::constants::DEFAULT_MAX_DEPTH;

/// Settings for JSON text -> list conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ParseOptions {
    /// Deepest container nesting accepted; the top-level container is depth 1.
    pub max_depth: usize,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl ParseOptions {
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }
}

/// Settings for list -> JSON text conversion.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SerializeOptions {
    /// Write `Str` elements that hold a JSON object or array as nested JSON
    /// rather than as quoted strings.
    pub embed_json_fragments: bool,
}

impl SerializeOptions {
    pub fn with_embed_json_fragments(mut self, embed: bool) -> Self {
        self.embed_json_fragments = embed;
        self
    }
}
