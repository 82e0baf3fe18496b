//! Forward-only cursor over the input text.
//!
//! The cursor owns nothing: it borrows the input and tracks a byte offset.
//! Lookahead is limited to the next character, except for keyword matching,
//! which compares a fixed prefix of the remaining input.

use crate::error::{ParseError, Result};

/// A byte position into a borrowed input string.
#[derive(Clone, Debug)]
pub struct Cursor<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> Cursor<'a> {
    /// Create a cursor at the start of `input`.
    pub fn new(input: &'a str) -> Self {
        Self { input, pos: 0 }
    }

    /// Current byte offset.
    pub fn pos(&self) -> usize {
        self.pos
    }

    /// Unconsumed input.
    pub fn rest(&self) -> &'a str {
        &self.input[self.pos..]
    }

    /// Input consumed since `start`.
    pub fn since(&self, start: usize) -> &'a str {
        &self.input[start..self.pos]
    }

    /// Look at the next character without consuming it.
    pub fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    /// Like [`peek`](Self::peek), but end of input is an error.
    pub fn peek_required(&self) -> Result<char> {
        self.peek()
            .ok_or(ParseError::UnexpectedEof { offset: self.pos })
    }

    /// Consume and return the next character.
    pub fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        Some(c)
    }

    /// Consume `c` if it is next.
    pub fn eat(&mut self, c: char) -> bool {
        if self.peek() == Some(c) {
            self.pos += c.len_utf8();
            true
        } else {
            false
        }
    }

    /// Consume `c` or fail.
    pub fn expect(&mut self, c: char) -> Result<()> {
        let found = self.peek_required()?;
        if found != c {
            return Err(ParseError::Expected {
                expected: c,
                offset: self.pos,
            });
        }
        self.pos += c.len_utf8();
        Ok(())
    }

    /// Consume `keyword` if the remaining input starts with it.
    pub fn eat_keyword(&mut self, keyword: &str) -> bool {
        if self.rest().starts_with(keyword) {
            self.pos += keyword.len();
            true
        } else {
            false
        }
    }

    /// Skip `n` bytes. `n` must land on a character boundary.
    pub fn advance(&mut self, n: usize) {
        debug_assert!(self.input.is_char_boundary(self.pos + n));
        self.pos += n;
    }

    /// Consume and return the run of characters for which `pred` holds.
    pub fn take_while(&mut self, pred: impl Fn(char) -> bool) -> &'a str {
        let rest = self.rest();
        let len = rest.find(|c: char| !pred(c)).unwrap_or(rest.len());
        self.pos += len;
        &rest[..len]
    }

    pub fn skip_while(&mut self, pred: impl Fn(char) -> bool) {
        self.take_while(pred);
    }

    pub fn skip_whitespace(&mut self) {
        self.skip_while(is_whitespace);
    }
}

/// Separator between tokens: ASCII controls `\t`..`\r` and `\x1C`..`\x1F`,
/// plus Unicode space, line and paragraph separators. Non-breaking spaces
/// (U+00A0, U+2007, U+202F) and NEL (U+0085) are not whitespace.
pub fn is_whitespace(c: char) -> bool {
    match c {
        '\t'..='\r' | '\u{1c}'..='\u{1f}' => true,
        '\u{85}' | '\u{a0}' | '\u{2007}' | '\u{202f}' => false,
        c => c.is_whitespace(),
    }
}
