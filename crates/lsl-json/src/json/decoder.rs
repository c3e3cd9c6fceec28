//! Strict JSON text decoder.
//!
//! Recursive descent over the RFC 8259 grammar. Numbers keep their lexeme so
//! the integer/float split survives; object members keep source order and
//! duplicates. Nesting is capped by [`JsonDecoder::max_depth`].

use super::error::ParseError;
use super::value::{JsonNumber, JsonValue};
use crate::constants::DEFAULT_MAX_DEPTH;
use crate::number::classify_lexeme;

/// JSON text decoder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JsonDecoder {
    pub max_depth: usize,
}

impl Default for JsonDecoder {
    fn default() -> Self {
        Self::new()
    }
}

impl JsonDecoder {
    pub fn new() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }

    pub fn with_max_depth(max_depth: usize) -> Self {
        Self { max_depth }
    }

    /// Decodes exactly one JSON value; only whitespace may follow it.
    pub fn decode(&self, text: &str) -> Result<JsonValue, ParseError> {
        let mut reader = Reader {
            text,
            data: text.as_bytes(),
            x: 0,
            depth: 0,
            max_depth: self.max_depth,
        };
        reader.ws();
        let value = reader.read_any()?;
        reader.ws();
        if reader.x < reader.data.len() {
            return Err(ParseError::TrailingData(reader.x));
        }
        Ok(value)
    }
}

struct Reader<'a> {
    text: &'a str,
    data: &'a [u8],
    x: usize,
    depth: usize,
    max_depth: usize,
}

impl Reader<'_> {
    fn peek(&self) -> Option<u8> {
        self.data.get(self.x).copied()
    }

    /// Error for whatever sits at the cursor.
    fn unexpected(&self) -> ParseError {
        if self.x >= self.data.len() {
            ParseError::UnexpectedEnd
        } else {
            ParseError::UnexpectedToken(self.x)
        }
    }

    fn ws(&mut self) {
        while let Some(b' ' | b'\t' | b'\n' | b'\r') = self.peek() {
            self.x += 1;
        }
    }

    fn expect(&mut self, byte: u8) -> Result<(), ParseError> {
        if self.peek() == Some(byte) {
            self.x += 1;
            Ok(())
        } else {
            Err(self.unexpected())
        }
    }

    fn read_any(&mut self) -> Result<JsonValue, ParseError> {
        match self.peek() {
            Some(b'{') => self.read_obj(),
            Some(b'[') => self.read_arr(),
            Some(b'"') => self.read_str().map(JsonValue::Str),
            Some(b'-' | b'0'..=b'9') => self.read_num(),
            Some(b't') => self.read_literal("true", JsonValue::Bool(true)),
            Some(b'f') => self.read_literal("false", JsonValue::Bool(false)),
            Some(b'n') => self.read_literal("null", JsonValue::Null),
            _ => Err(self.unexpected()),
        }
    }

    fn read_literal(&mut self, word: &str, value: JsonValue) -> Result<JsonValue, ParseError> {
        if self.data[self.x..].starts_with(word.as_bytes()) {
            self.x += word.len();
            Ok(value)
        } else {
            Err(ParseError::UnexpectedToken(self.x))
        }
    }

    fn enter(&mut self) -> Result<(), ParseError> {
        self.depth += 1;
        if self.depth > self.max_depth {
            return Err(ParseError::NestingTooDeep(self.max_depth));
        }
        Ok(())
    }

    fn read_arr(&mut self) -> Result<JsonValue, ParseError> {
        self.enter()?;
        self.x += 1; // [
        let mut items = Vec::new();
        self.ws();
        if self.peek() == Some(b']') {
            self.x += 1;
            self.depth -= 1;
            return Ok(JsonValue::Array(items));
        }
        loop {
            self.ws();
            items.push(self.read_any()?);
            self.ws();
            match self.peek() {
                Some(b',') => self.x += 1,
                Some(b']') => {
                    self.x += 1;
                    break;
                }
                _ => return Err(self.unexpected()),
            }
        }
        self.depth -= 1;
        Ok(JsonValue::Array(items))
    }

    fn read_obj(&mut self) -> Result<JsonValue, ParseError> {
        self.enter()?;
        self.x += 1; // {
        let mut members = Vec::new();
        self.ws();
        if self.peek() == Some(b'}') {
            self.x += 1;
            self.depth -= 1;
            return Ok(JsonValue::Object(members));
        }
        loop {
            self.ws();
            if self.peek() != Some(b'"') {
                return Err(self.unexpected());
            }
            let key = self.read_str()?;
            self.ws();
            self.expect(b':')?;
            self.ws();
            let value = self.read_any()?;
            members.push((key, value));
            self.ws();
            match self.peek() {
                Some(b',') => self.x += 1,
                Some(b'}') => {
                    self.x += 1;
                    break;
                }
                _ => return Err(self.unexpected()),
            }
        }
        self.depth -= 1;
        Ok(JsonValue::Object(members))
    }

    fn read_str(&mut self) -> Result<String, ParseError> {
        let start = self.x;
        self.x += 1; // "
        let mut out = String::new();
        let mut run = self.x;
        loop {
            let Some(ch) = self.peek() else {
                return Err(ParseError::UnterminatedString(start));
            };
            match ch {
                b'"' => {
                    out.push_str(&self.text[run..self.x]);
                    self.x += 1;
                    return Ok(out);
                }
                b'\\' => {
                    out.push_str(&self.text[run..self.x]);
                    self.read_escape(start, &mut out)?;
                    run = self.x;
                }
                0x00..=0x1f => return Err(ParseError::UnexpectedToken(self.x)),
                _ => self.x += 1,
            }
        }
    }

    /// Decodes one escape sequence; the cursor sits on the backslash.
    fn read_escape(&mut self, start: usize, out: &mut String) -> Result<(), ParseError> {
        let at = self.x;
        self.x += 1;
        let Some(ch) = self.peek() else {
            return Err(ParseError::UnterminatedString(start));
        };
        self.x += 1;
        let decoded = match ch {
            b'"' => '"',
            b'\\' => '\\',
            b'/' => '/',
            b'b' => '\u{0008}',
            b'f' => '\u{000C}',
            b'n' => '\n',
            b'r' => '\r',
            b't' => '\t',
            b'u' => self.read_unicode_escape(start, at)?,
            _ => return Err(ParseError::InvalidEscape(at)),
        };
        out.push(decoded);
        Ok(())
    }

    fn read_unicode_escape(&mut self, start: usize, at: usize) -> Result<char, ParseError> {
        let hi = self.read_hex4(start, at)?;
        let code = match hi {
            0xD800..=0xDBFF => {
                if !self.data[self.x..].starts_with(b"\\u") {
                    return Err(ParseError::InvalidEscape(at));
                }
                self.x += 2;
                let lo = self.read_hex4(start, at)?;
                if !(0xDC00..=0xDFFF).contains(&lo) {
                    return Err(ParseError::InvalidEscape(at));
                }
                0x10000 + ((hi - 0xD800) << 10) + (lo - 0xDC00)
            }
            0xDC00..=0xDFFF => return Err(ParseError::InvalidEscape(at)),
            _ => hi,
        };
        char::from_u32(code).ok_or(ParseError::InvalidEscape(at))
    }

    fn read_hex4(&mut self, start: usize, at: usize) -> Result<u32, ParseError> {
        if self.x + 4 > self.data.len() {
            return Err(ParseError::UnterminatedString(start));
        }
        let mut code = 0u32;
        for &b in &self.data[self.x..self.x + 4] {
            let digit = (b as char).to_digit(16).ok_or(ParseError::InvalidEscape(at))?;
            code = (code << 4) | digit;
        }
        self.x += 4;
        Ok(code)
    }

    fn digits(&mut self) -> usize {
        let from = self.x;
        while let Some(b'0'..=b'9') = self.peek() {
            self.x += 1;
        }
        self.x - from
    }

    fn read_num(&mut self) -> Result<JsonValue, ParseError> {
        let start = self.x;
        if self.peek() == Some(b'-') {
            self.x += 1;
        }
        match self.peek() {
            Some(b'0') => self.x += 1,
            Some(b'1'..=b'9') => {
                self.digits();
            }
            _ => return Err(ParseError::TruncatedNumber(start)),
        }
        if self.peek() == Some(b'.') {
            self.x += 1;
            if self.digits() == 0 {
                return Err(ParseError::TruncatedNumber(start));
            }
        }
        if let Some(b'e' | b'E') = self.peek() {
            self.x += 1;
            if let Some(b'+' | b'-') = self.peek() {
                self.x += 1;
            }
            if self.digits() == 0 {
                return Err(ParseError::TruncatedNumber(start));
            }
        }
        let lexeme = &self.text[start..self.x];
        classify_lexeme(lexeme)?;
        Ok(JsonValue::Number(JsonNumber::new(lexeme)))
    }
}
