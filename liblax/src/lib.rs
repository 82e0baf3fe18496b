//! A small recursive-descent JSON parser.
//!
//! Parsing produces a [`Value`] tree whose objects keep their keys in
//! insertion order. The tree is read through type predicates, narrowing
//! accessors and a safe navigation API that never fails:
//!
//! ```
//! use liblax::parse;
//!
//! let order = parse(r#"{"orderId": "ORD-001", "items": [{"quantity": 3}]}"#).unwrap();
//! assert_eq!(order.get("orderId").as_str(), "ORD-001");
//! assert_eq!(order.get("items").get(0).get("quantity").as_number().to_i32(), 3);
//! assert!(order.get("discount").is_null());
//! ```
//!
//! # Grammar
//!
//! The recognized grammar is narrower and laxer than RFC 8259:
//!
//! - Numbers have no exponent part. Integer literals become 32-bit or 64-bit
//!   integers, literals with a decimal point become `f64`.
//! - Unknown escapes such as `\q` are kept as the escaped character, unless
//!   [`EscapeMode::Strict`] is selected.
//! - Each `\uXXXX` escape decodes on its own; surrogate pairs are not joined.
//! - Parsing stops after the first complete value. Trailing content is
//!   neither consumed nor rejected.
//!
//! # Errors
//!
//! Every failure is a [`ParseError`] carrying a message and the byte offset
//! at which parsing stopped. The first error aborts the parse.

mod cursor;
mod error;
mod options;
mod parser;
pub mod value;

pub use error::{Location, ParseError, Result};
pub use options::{EscapeMode, ParseOptions, DEFAULT_MAX_DEPTH};
pub use parser::Parser;
pub use value::{Index, Number, Value};

/// Parse a JSON document with default options.
///
/// # Example
///
/// ```
/// use liblax::parse;
///
/// let value = parse("[1, 2, 3]").unwrap();
/// assert_eq!(value.get(1).as_number().to_i32(), 2);
/// ```
pub fn parse(input: &str) -> Result<Value> {
    Parser::new(input).parse()
}

/// Parse a JSON document with explicit options.
pub fn parse_with_options(input: &str, options: &ParseOptions) -> Result<Value> {
    Parser::with_options(input, options.clone()).parse()
}
