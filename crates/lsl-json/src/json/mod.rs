//! JSON text codec over [`JsonValue`].
//!
//! The decoder keeps number lexemes intact and object members in source
//! order (duplicates included); the encoder writes canonical compact text.

pub mod convert;
pub mod decoder;
pub mod encoder;
pub mod error;
pub mod value;

pub use decoder::JsonDecoder;
pub use encoder::JsonEncoder;
pub use error::{ParseError, SerializeError};
pub use value::{JsonNumber, JsonValue};
