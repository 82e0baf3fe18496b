//! Parser configuration.

/// Suggested bound on container nesting for untrusted input.
///
/// [`ParseOptions::default`] leaves nesting unbounded; callers opt in with
/// [`ParseOptions::with_max_depth`].
pub const DEFAULT_MAX_DEPTH: usize = 128;

/// How the string scanner treats a backslash followed by an unknown character.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum EscapeMode {
    /// Append the escaped character literally (`"\q"` reads as `q`).
    #[default]
    Lax,
    /// Reject unknown escapes with [`ParseError::BadEscapedChar`](crate::ParseError::BadEscapedChar).
    Strict,
}

/// Options accepted by [`parse_with_options`](crate::parse_with_options).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseOptions {
    pub escapes: EscapeMode,
    /// Maximum container depth, `None` (the default) for unbounded.
    pub max_depth: Option<usize>,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            escapes: EscapeMode::Lax,
            max_depth: None,
        }
    }
}

impl ParseOptions {
    /// Default options with strict escape handling.
    pub fn strict() -> Self {
        Self::default().with_escapes(EscapeMode::Strict)
    }

    /// Set how unknown escape sequences are handled.
    pub fn with_escapes(mut self, escapes: EscapeMode) -> Self {
        self.escapes = escapes;
        self
    }

    /// Bound container nesting; deeper input fails with `TooDeep`.
    pub fn with_max_depth(mut self, max_depth: Option<usize>) -> Self {
        self.max_depth = max_depth;
        self
    }
}
