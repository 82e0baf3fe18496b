//! Recursive-descent JSON parser.
//!
//! The grammar is dispatched on the first character of each value:
//! - `{` object, `[` array, `"` string
//! - `-` or an ASCII digit: number (no exponent part)
//! - `true`, `false`, `null`
//!
//! The parser stops once a complete root value has been read; whatever
//! follows it is left unconsumed and is not checked.

use crate::cursor::Cursor;
use crate::error::{ParseError, Result};
use crate::options::{EscapeMode, ParseOptions};
use crate::value::{Number, Value};
use indexmap::IndexMap;
use tracing::{debug, trace};

const KEYWORDS: [&str; 3] = ["true", "false", "null"];

/// Characters stripped from both ends of the input: everything up to and
/// including the ASCII space.
fn is_trimmed(c: char) -> bool {
    c <= ' '
}

/// A single-use parser over one input.
///
/// Each parser owns its cursor, so separate inputs can be parsed on separate
/// threads without coordination.
pub struct Parser<'a> {
    cursor: Cursor<'a>,
    /// Bytes of leading whitespace removed before parsing.
    base: usize,
    options: ParseOptions,
    depth: usize,
}

impl<'a> Parser<'a> {
    /// Create a parser with default options.
    pub fn new(input: &'a str) -> Self {
        Self::with_options(input, ParseOptions::default())
    }

    /// Create a parser with explicit options.
    pub fn with_options(input: &'a str, options: ParseOptions) -> Self {
        let base = input.len() - input.trim_start_matches(is_trimmed).len();
        Self {
            cursor: Cursor::new(input.trim_matches(is_trimmed)),
            base,
            options,
            depth: 0,
        }
    }

    /// Parse one value. Error offsets are relative to the untrimmed input.
    pub fn parse(mut self) -> Result<Value> {
        debug!(
            len = self.cursor.rest().len(),
            escapes = ?self.options.escapes,
            max_depth = ?self.options.max_depth,
            "parsing JSON"
        );
        let base = self.base;
        self.parse_value().map_err(|e| {
            let e = e.shifted(base);
            debug!(offset = e.offset(), error = %e, "parse failed");
            e
        })
    }

    fn parse_value(&mut self) -> Result<Value> {
        self.cursor.skip_whitespace();
        match self.cursor.peek_required()? {
            '{' => self.parse_object(),
            '[' => self.parse_array(),
            '"' => self.parse_string().map(Value::String),
            '-' | '0'..='9' => self.parse_number().map(Value::Number),
            c => self.parse_keyword(c),
        }
    }

    fn parse_keyword(&mut self, first: char) -> Result<Value> {
        if self.cursor.eat_keyword("true") {
            return Ok(Value::Bool(true));
        }
        if self.cursor.eat_keyword("false") {
            return Ok(Value::Bool(false));
        }
        if self.cursor.eat_keyword("null") {
            return Ok(Value::Null);
        }

        // A keyword cut short by the end of input
        let rest = self.cursor.rest();
        if KEYWORDS.iter().any(|k| k.starts_with(rest)) {
            return Err(ParseError::UnexpectedEof {
                offset: self.cursor.pos() + rest.len(),
            });
        }
        Err(ParseError::UnexpectedToken {
            found: first,
            offset: self.cursor.pos(),
        })
    }

    fn enter(&mut self, kind: &'static str) -> Result<()> {
        self.depth += 1;
        if let Some(limit) = self.options.max_depth {
            if self.depth > limit {
                return Err(ParseError::TooDeep {
                    limit,
                    offset: self.cursor.pos(),
                });
            }
        }
        trace!(kind, depth = self.depth, offset = self.cursor.pos(), "enter");
        Ok(())
    }

    fn leave(&mut self) {
        self.depth -= 1;
    }

    fn parse_object(&mut self) -> Result<Value> {
        self.enter("object")?;
        self.cursor.expect('{')?;
        let mut map = IndexMap::new();

        self.cursor.skip_whitespace();
        if self.cursor.eat('}') {
            self.leave();
            return Ok(Value::Object(map));
        }

        loop {
            self.cursor.skip_whitespace();
            let key = self.parse_string()?;
            self.cursor.skip_whitespace();
            self.cursor.expect(':')?;
            let value = self.parse_value()?;
            // Replacing keeps the first position and takes the last value
            map.insert(key, value);

            self.cursor.skip_whitespace();
            match self.cursor.peek_required()? {
                '}' => {
                    self.cursor.bump();
                    break;
                }
                ',' => {
                    self.cursor.bump();
                }
                _ => {
                    return Err(ParseError::ExpectedSeparator {
                        close: '}',
                        offset: self.cursor.pos(),
                    })
                }
            }
        }

        self.leave();
        Ok(Value::Object(map))
    }

    fn parse_array(&mut self) -> Result<Value> {
        self.enter("array")?;
        self.cursor.expect('[')?;
        let mut items = Vec::new();

        self.cursor.skip_whitespace();
        if self.cursor.eat(']') {
            self.leave();
            return Ok(Value::Array(items));
        }

        loop {
            items.push(self.parse_value()?);

            self.cursor.skip_whitespace();
            match self.cursor.peek_required()? {
                ']' => {
                    self.cursor.bump();
                    break;
                }
                ',' => {
                    self.cursor.bump();
                }
                _ => {
                    return Err(ParseError::ExpectedSeparator {
                        close: ']',
                        offset: self.cursor.pos(),
                    })
                }
            }
        }

        self.leave();
        Ok(Value::Array(items))
    }

    fn parse_string(&mut self) -> Result<String> {
        self.cursor.expect('"')?;
        let mut out = String::new();

        loop {
            out.push_str(self.cursor.take_while(|c| c != '"' && c != '\\'));
            match self.cursor.bump() {
                Some('"') => return Ok(out),
                Some(_) => self.parse_escape(&mut out)?,
                None => {
                    return Err(ParseError::UnterminatedString {
                        offset: self.cursor.pos(),
                    })
                }
            }
        }
    }

    /// Decode the escape following a backslash.
    fn parse_escape(&mut self, out: &mut String) -> Result<()> {
        let offset = self.cursor.pos();
        let escape = self
            .cursor
            .bump()
            .ok_or(ParseError::UnterminatedString { offset })?;

        match escape {
            '"' => out.push('"'),
            '\\' => out.push('\\'),
            '/' => out.push('/'),
            'b' => out.push('\x08'),
            'f' => out.push('\x0C'),
            'n' => out.push('\n'),
            'r' => out.push('\r'),
            't' => out.push('\t'),
            'u' => out.push(self.parse_unicode_escape()?),
            other => match self.options.escapes {
                EscapeMode::Lax => out.push(other),
                EscapeMode::Strict => {
                    return Err(ParseError::BadEscapedChar {
                        escape: other,
                        offset,
                    })
                }
            },
        }
        Ok(())
    }

    /// Decode the four hex digits of a `\u` escape as one UTF-16 code unit.
    ///
    /// Surrogate pairs are not combined; a lone surrogate has no `char`
    /// representation and decodes to U+FFFD.
    fn parse_unicode_escape(&mut self) -> Result<char> {
        let offset = self.cursor.pos();
        let rest = self.cursor.rest();
        if rest.len() < 4 {
            return Err(ParseError::UnterminatedString {
                offset: offset + rest.len(),
            });
        }

        let code = rest
            .get(..4)
            .filter(|hex| hex.bytes().all(|b| b.is_ascii_hexdigit()))
            .and_then(|hex| u32::from_str_radix(hex, 16).ok())
            .ok_or(ParseError::BadUnicodeEscape { offset })?;
        self.cursor.advance(4);

        Ok(char::from_u32(code).unwrap_or(char::REPLACEMENT_CHARACTER))
    }

    /// Integer literals take the narrowest of `i32` and `i64` that holds them;
    /// literals with a decimal point are always `f64`.
    fn parse_number(&mut self) -> Result<Number> {
        let start = self.cursor.pos();
        let invalid = ParseError::InvalidNumber { offset: start };

        self.cursor.eat('-');
        self.cursor.skip_while(|c| c.is_ascii_digit());

        if self.cursor.eat('.') {
            self.cursor.skip_while(|c| c.is_ascii_digit());
            let span = self.cursor.since(start);
            if !span.bytes().any(|b| b.is_ascii_digit()) {
                return Err(invalid);
            }
            return span.parse::<f64>().map(Number::F64).map_err(|_| invalid);
        }

        let span = self.cursor.since(start);
        if let Ok(n) = span.parse::<i32>() {
            return Ok(Number::I32(n));
        }
        span.parse::<i64>().map(Number::I64).map_err(|_| invalid)
    }
}
