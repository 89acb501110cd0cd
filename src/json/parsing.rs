use std::collections::HashMap;

use bstr::ByteSlice;

use crate::base;
use crate::data::{Data, Id, StringId};
use crate::json::error::{Error, ErrorKind};
use crate::number::NumberKind;
use crate::raw::{self, Raw};
use crate::Document;

type Result<T, E = Error> = std::result::Result<T, E>;

const EOF: u8 = b'\0';

/// Maximum nesting of arrays and objects.
const RECURSION_LIMIT: usize = 128;

/// Ascii whitespace as defined by JSON.
macro_rules! ws {
    () => {
        b' ' | b'\t' | b'\n' | b'\r'
    };
}

/// A JSON parser.
#[derive(Clone)]
pub(crate) struct Parser<'a> {
    scratch: Vec<u8>,
    data: Data,
    parser: base::Parser<'a>,
    depth: usize,
}

impl<'a> Parser<'a> {
    /// Construct a new default parser.
    pub(crate) fn new(input: &'a [u8]) -> Self {
        Self {
            scratch: Vec::new(),
            data: Data::default(),
            parser: base::Parser::new(input),
            depth: 0,
        }
    }

    /// Parses a single document.
    pub(crate) fn parse(mut self) -> Result<Document> {
        self.ws();
        let root = self.value()?;
        self.ws();

        if !self.parser.is_eof() {
            return Err(Error::new(
                self.parser.pos()..self.parser.input().len(),
                ErrorKind::ExpectedEof,
            ));
        }

        Ok(Document::new(root, self.data))
    }

    /// Consume whitespace.
    fn ws(&mut self) {
        while matches!(self.parser.peek(), ws!()) {
            self.parser.bump(1);
        }
    }

    /// Construct an error spanning the byte at the current position.
    fn error(&self, kind: ErrorKind) -> Error {
        Error::new(self.parser.span_one(), kind)
    }

    /// Consume a single value.
    fn value(&mut self) -> Result<Id> {
        let raw = match self.parser.peek() {
            b'{' => return self.object(),
            b'[' => return self.array(),
            b'"' => Raw::String(self.string()?),
            b'-' | b'0'..=b'9' => self.number()?,
            b't' if self.parser.eat(b"true") => Raw::Boolean(true),
            b'f' if self.parser.eat(b"false") => Raw::Boolean(false),
            b'n' if self.parser.eat(b"null") => Raw::Null,
            _ => return Err(self.error(ErrorKind::ExpectedValue)),
        };

        Ok(self.data.insert(raw))
    }

    /// Enter a nested array or object.
    fn enter(&mut self) -> Result<()> {
        if self.depth == RECURSION_LIMIT {
            return Err(self.error(ErrorKind::RecursionLimitExceeded));
        }

        self.depth += 1;
        Ok(())
    }

    /// Parse an array.
    fn array(&mut self) -> Result<Id> {
        self.enter()?;
        self.parser.bump(1);
        self.ws();

        let mut items = Vec::new();

        if self.parser.peek() != b']' {
            loop {
                items.push(self.value()?);
                self.ws();

                match self.parser.peek() {
                    b',' => {
                        let comma = self.parser.pos();
                        self.parser.bump(1);
                        self.ws();

                        if self.parser.peek() == b']' {
                            return Err(Error::new(comma..comma + 1, ErrorKind::TrailingComma));
                        }
                    }
                    b']' => break,
                    _ => return Err(self.error(ErrorKind::ExpectedArraySeparator)),
                }
            }
        }

        self.parser.bump(1);
        self.depth -= 1;
        Ok(self.data.insert(raw::Sequence { items }))
    }

    /// Parse an object.
    ///
    /// A repeated key keeps the position of its first occurrence and the
    /// value of its last.
    fn object(&mut self) -> Result<Id> {
        self.enter()?;
        self.parser.bump(1);
        self.ws();

        let mut items = Vec::<raw::MappingItem>::new();
        let mut index = HashMap::<StringId, usize>::new();

        if self.parser.peek() != b'}' {
            loop {
                if self.parser.peek() != b'"' {
                    return Err(self.error(ErrorKind::ExpectedObjectKey));
                }

                let key = self.string()?.id;
                self.ws();

                if self.parser.peek() != b':' {
                    return Err(self.error(ErrorKind::ExpectedColon));
                }

                self.parser.bump(1);
                self.ws();
                let value = self.value()?;

                if let Some(&n) = index.get(&key) {
                    let previous = std::mem::replace(&mut items[n].value, value);
                    self.data.drop(previous);
                } else {
                    index.insert(key, items.len());
                    items.push(raw::MappingItem { key, value });
                }

                self.ws();

                match self.parser.peek() {
                    b',' => {
                        let comma = self.parser.pos();
                        self.parser.bump(1);
                        self.ws();

                        if self.parser.peek() == b'}' {
                            return Err(Error::new(comma..comma + 1, ErrorKind::TrailingComma));
                        }
                    }
                    b'}' => break,
                    _ => return Err(self.error(ErrorKind::ExpectedObjectSeparator)),
                }
            }
        }

        self.parser.bump(1);
        self.depth -= 1;
        Ok(self.data.insert(raw::Mapping { items }))
    }

    /// Consume a number.
    fn number(&mut self) -> Result<Raw> {
        let start = self.parser.pos();
        let mut kind = NumberKind::Integer;

        if self.parser.peek() == b'-' {
            self.parser.bump(1);
        }

        match self.parser.peek() {
            b'0' => {
                self.parser.bump(1);
            }
            b'1'..=b'9' => {
                self.digits();
            }
            _ => return Err(self.number_error(start)),
        }

        if self.parser.peek() == b'.' {
            kind = NumberKind::Float;
            self.parser.bump(1);

            if !self.digits() {
                return Err(self.number_error(start));
            }
        }

        if matches!(self.parser.peek(), b'e' | b'E') {
            kind = NumberKind::Float;
            self.parser.bump(1);

            if matches!(self.parser.peek(), b'+' | b'-') {
                self.parser.bump(1);
            }

            if !self.digits() {
                return Err(self.number_error(start));
            }
        }

        let string = self.data.insert_str(self.parser.string(start));
        Ok(Raw::Number(raw::Number::new(string, kind)))
    }

    /// Consume a run of ascii digits, returning `true` if any were consumed.
    fn digits(&mut self) -> bool {
        let start = self.parser.pos();

        while self.parser.peek().is_ascii_digit() {
            self.parser.bump(1);
        }

        self.parser.pos() != start
    }

    fn number_error(&self, start: usize) -> Error {
        let end = self.parser.span_one().end;
        Error::new(start..end, ErrorKind::BadNumber)
    }

    /// Read a double-quoted string.
    fn string(&mut self) -> Result<raw::String> {
        let open = self.parser.pos();
        self.parser.bump(1);
        let start = self.parser.pos();

        self.parser.find2(b'"', b'\\');

        match self.parser.peek() {
            b'"' => {}
            b'\\' => return self.string_escaped(start, open),
            _ => {
                return Err(Error::new(
                    open..self.parser.pos(),
                    ErrorKind::UnterminatedString,
                ))
            }
        }

        let string = self.parser.string(start);
        self.check_unescaped(start, string)?;

        if string.to_str().is_err() {
            return Err(Error::new(open..self.parser.pos(), ErrorKind::InvalidUtf8));
        }

        let id = self.data.insert_str(string);
        self.parser.bump(1);
        Ok(raw::String::new(id))
    }

    /// Read a double-quoted string containing escape sequences.
    fn string_escaped(&mut self, start: usize, open: usize) -> Result<raw::String> {
        let mut start = start;

        loop {
            let run = self.parser.string(start);
            self.check_unescaped(start, run)?;
            self.scratch.extend_from_slice(run);

            match self.parser.peek() {
                b'"' => break,
                b'\\' => {
                    let escape = self.parser.pos();
                    self.parser.bump(1);
                    self.unescape(escape)?;
                }
                _ => {
                    self.scratch.clear();
                    return Err(Error::new(
                        open..self.parser.pos(),
                        ErrorKind::UnterminatedString,
                    ));
                }
            }

            start = self.parser.pos();
            self.parser.find2(b'"', b'\\');
        }

        if self.scratch.to_str().is_err() {
            self.scratch.clear();
            return Err(Error::new(open..self.parser.pos(), ErrorKind::InvalidUtf8));
        }

        let id = self.data.insert_str(&self.scratch);
        self.scratch.clear();
        self.parser.bump(1);
        Ok(raw::String::new(id))
    }

    /// Strings may not contain raw control characters.
    fn check_unescaped(&mut self, start: usize, run: &[u8]) -> Result<()> {
        if let Some(n) = run.iter().position(|&b| b < 0x20) {
            self.scratch.clear();
            let at = start + n;
            return Err(Error::new(at..at + 1, ErrorKind::ControlCharacter));
        }

        Ok(())
    }

    /// Unescape into the scratch buffer.
    fn unescape(&mut self, start: usize) -> Result<()> {
        let b = match self.parser.peek() {
            b'"' => b'"',
            b'\\' => b'\\',
            b'/' => b'/',
            b'b' => b'\x08',
            b'f' => b'\x0c',
            b'n' => b'\n',
            b'r' => b'\r',
            b't' => b'\t',
            b'u' => {
                self.parser.bump(1);
                return self.unescape_unicode(start);
            }
            EOF if self.parser.is_eof() => {
                self.scratch.clear();
                return Err(Error::new(start..self.parser.pos(), ErrorKind::BadEscape));
            }
            _ => {
                self.parser.bump(1);
                self.scratch.clear();
                return Err(Error::new(start..self.parser.pos(), ErrorKind::BadEscape));
            }
        };

        self.scratch.push(b);
        self.parser.bump(1);
        Ok(())
    }

    /// Unescape a `\uXXXX` sequence, combining surrogate pairs, into the
    /// scratch buffer.
    fn unescape_unicode(&mut self, start: usize) -> Result<()> {
        let high = self.hex4(start)?;

        let c = match high {
            0xd800..=0xdbff => {
                if !self.parser.eat(b"\\u") {
                    return Err(self.surrogate_error(start));
                }

                let low = self.hex4(start)?;

                if !(0xdc00..=0xdfff).contains(&low) {
                    return Err(self.surrogate_error(start));
                }

                0x10000 + ((high - 0xd800) << 10) + (low - 0xdc00)
            }
            0xdc00..=0xdfff => {
                return Err(self.surrogate_error(start));
            }
            c => c,
        };

        let Some(c) = char::from_u32(c) else {
            self.scratch.clear();
            return Err(Error::new(
                start..self.parser.pos(),
                ErrorKind::BadUnicodeEscape,
            ));
        };

        self.scratch
            .extend_from_slice(c.encode_utf8(&mut [0; 4]).as_bytes());
        Ok(())
    }

    /// Read four hex digits.
    fn hex4(&mut self, start: usize) -> Result<u32> {
        let mut c: u32 = 0;

        for _ in 0..4 {
            c <<= 4;

            c |= match self.parser.peek() {
                b @ b'0'..=b'9' => u32::from(b - b'0'),
                b @ b'a'..=b'f' => u32::from(b - b'a') + 0xa,
                b @ b'A'..=b'F' => u32::from(b - b'A') + 0xa,
                _ => {
                    self.parser.bump(1);
                    self.scratch.clear();
                    return Err(Error::new(
                        start..self.parser.pos(),
                        ErrorKind::BadUnicodeEscape,
                    ));
                }
            };

            self.parser.bump(1);
        }

        Ok(c)
    }

    fn surrogate_error(&mut self, start: usize) -> Error {
        self.scratch.clear();
        Error::new(start..self.parser.pos(), ErrorKind::LoneSurrogate)
    }
}
