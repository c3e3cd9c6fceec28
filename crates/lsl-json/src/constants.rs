//! Reserved sentinel texts and default limits.
//!
//! The sentinels are Unicode noncharacters, matching the values the host
//! script runtime exposes as `JSON_*` constants.

/// Returned as the single list element when JSON text cannot be parsed.
pub const JSON_INVALID: &str = "\u{FDD0}";
/// Container token selecting object framing.
pub const JSON_OBJECT: &str = "\u{FDD1}";
/// Container token selecting array framing.
pub const JSON_ARRAY: &str = "\u{FDD2}";
/// Stands in for JSON `null`.
pub const JSON_NULL: &str = "\u{FDD5}";
/// Stands in for JSON `true`.
pub const JSON_TRUE: &str = "\u{FDD6}";
/// Stands in for JSON `false`.
pub const JSON_FALSE: &str = "\u{FDD7}";

/// Default nesting limit, same as serde_json's recursion limit.
pub const DEFAULT_MAX_DEPTH: usize = 128;
