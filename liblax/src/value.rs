//! JSON value representation.

use indexmap::IndexMap;
use std::fmt;
use std::ops;

static NULL: Value = Value::Null;

/// A parsed JSON number, kept in the narrowest payload that holds it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Number {
    /// Integer literal within 32-bit range.
    I32(i32),
    /// Integer literal beyond 32-bit but within 64-bit range.
    I64(i64),
    /// Literal with a decimal point.
    F64(f64),
}

impl Number {
    /// Returns `true` for a 32-bit integer.
    pub fn is_i32(&self) -> bool {
        matches!(self, Number::I32(_))
    }

    /// Returns `true` for a 64-bit integer.
    pub fn is_i64(&self) -> bool {
        matches!(self, Number::I64(_))
    }

    /// Returns `true` for a floating-point number.
    pub fn is_f64(&self) -> bool {
        matches!(self, Number::F64(_))
    }

    /// Convert to `i32`. Wider integers wrap, floats truncate toward zero
    /// and saturate.
    pub fn to_i32(self) -> i32 {
        match self {
            Number::I32(n) => n,
            Number::I64(n) => n as i32,
            Number::F64(f) => f as i32,
        }
    }

    /// Convert to `i64`. Floats truncate toward zero and saturate.
    pub fn to_i64(self) -> i64 {
        match self {
            Number::I32(n) => n.into(),
            Number::I64(n) => n,
            Number::F64(f) => f as i64,
        }
    }

    /// Convert to `f64`, rounding 64-bit integers that do not fit the mantissa.
    pub fn to_f64(self) -> f64 {
        match self {
            Number::I32(n) => n.into(),
            Number::I64(n) => n as f64,
            Number::F64(f) => f,
        }
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::I32(n) => write!(f, "{}", n),
            Number::I64(n) => write!(f, "{}", n),
            // Debug keeps the fractional part: 1.0 rather than 1
            Number::F64(n) => write!(f, "{:?}", n),
        }
    }
}

/// A JSON value.
///
/// A value tree is built once by the parser and never changes shape
/// afterwards. Objects keep their keys in insertion order.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum Value {
    /// Null value.
    #[default]
    Null,
    /// Boolean value.
    Bool(bool),
    /// Numeric value.
    Number(Number),
    /// String with escapes decoded.
    String(String),
    /// Array of values.
    Array(Vec<Value>),
    /// Object (insertion-ordered key-value map).
    Object(IndexMap<String, Value>),
}

impl Value {
    /// Name of the variant, as used in diagnostics.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "boolean",
            Value::Number(_) => "number",
            Value::String(_) => "string",
            Value::Array(_) => "array",
            Value::Object(_) => "object",
        }
    }

    /// Returns `true` if this value is null.
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Returns `true` if this value is a boolean.
    pub fn is_bool(&self) -> bool {
        matches!(self, Value::Bool(_))
    }

    /// Returns `true` if this value is a number.
    pub fn is_number(&self) -> bool {
        matches!(self, Value::Number(_))
    }

    /// Returns `true` if this value is a string.
    pub fn is_string(&self) -> bool {
        matches!(self, Value::String(_))
    }

    /// Returns `true` if this value is an array.
    pub fn is_array(&self) -> bool {
        matches!(self, Value::Array(_))
    }

    /// Returns `true` if this value is an object.
    pub fn is_object(&self) -> bool {
        matches!(self, Value::Object(_))
    }

    /// Returns the boolean payload.
    ///
    /// # Panics
    ///
    /// Panics if this is not a `Bool`. Check [`is_bool`](Self::is_bool) first.
    #[track_caller]
    pub fn as_bool(&self) -> bool {
        match self {
            Value::Bool(b) => *b,
            other => other.mismatch("as_bool"),
        }
    }

    /// Returns the numeric payload.
    ///
    /// # Panics
    ///
    /// Panics if this is not a `Number`.
    #[track_caller]
    pub fn as_number(&self) -> Number {
        match self {
            Value::Number(n) => *n,
            other => other.mismatch("as_number"),
        }
    }

    /// Returns the string payload.
    ///
    /// # Panics
    ///
    /// Panics if this is not a `String`.
    #[track_caller]
    pub fn as_str(&self) -> &str {
        match self {
            Value::String(s) => s,
            other => other.mismatch("as_str"),
        }
    }

    /// Returns the array elements.
    ///
    /// # Panics
    ///
    /// Panics if this is not an `Array`.
    #[track_caller]
    pub fn as_array(&self) -> &[Value] {
        match self {
            Value::Array(items) => items,
            other => other.mismatch("as_array"),
        }
    }

    /// Returns the object entries.
    ///
    /// # Panics
    ///
    /// Panics if this is not an `Object`.
    #[track_caller]
    pub fn as_object(&self) -> &IndexMap<String, Value> {
        match self {
            Value::Object(map) => map,
            other => other.mismatch("as_object"),
        }
    }

    #[track_caller]
    fn mismatch(&self, accessor: &str) -> ! {
        panic!(
            "called `Value::{}()` on a value of type {}",
            accessor,
            self.type_name()
        )
    }

    /// Look up a key in an object or an index in an array.
    ///
    /// Never fails: a missing key, an index out of range (including negative
    /// indexes) or a receiver of the wrong shape all yield `Null`, so lookups
    /// can be chained through absent structure.
    ///
    /// ```
    /// use liblax::parse;
    ///
    /// let v = parse(r#"{"user": {"roles": ["admin"]}}"#).unwrap();
    /// assert_eq!(v.get("user").get("roles").get(0).as_str(), "admin");
    /// assert!(v.get("user").get("email").get(3).is_null());
    /// ```
    pub fn get<I: Index>(&self, index: I) -> &Value {
        index.index_into(self).unwrap_or(&NULL)
    }

    /// Number of elements or entries; zero for scalars.
    pub fn len(&self) -> usize {
        match self {
            Value::Array(items) => items.len(),
            Value::Object(map) => map.len(),
            _ => 0,
        }
    }

    /// Returns `true` when [`len`](Self::len) is zero.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

mod private {
    pub trait Sealed {}
    impl Sealed for str {}
    impl Sealed for String {}
    impl Sealed for usize {}
    impl Sealed for i32 {}
    impl Sealed for i64 {}
    impl<T: ?Sized + Sealed> Sealed for &T {}
}

/// Types that can navigate into a [`Value`] with [`Value::get`].
///
/// Strings look up object keys; integers index arrays.
pub trait Index: private::Sealed {
    #[doc(hidden)]
    fn index_into<'v>(&self, v: &'v Value) -> Option<&'v Value>;
}

impl Index for str {
    fn index_into<'v>(&self, v: &'v Value) -> Option<&'v Value> {
        match v {
            Value::Object(map) => map.get(self),
            _ => None,
        }
    }
}

impl Index for String {
    fn index_into<'v>(&self, v: &'v Value) -> Option<&'v Value> {
        self.as_str().index_into(v)
    }
}

impl Index for usize {
    fn index_into<'v>(&self, v: &'v Value) -> Option<&'v Value> {
        match v {
            Value::Array(items) => items.get(*self),
            _ => None,
        }
    }
}

impl Index for i32 {
    fn index_into<'v>(&self, v: &'v Value) -> Option<&'v Value> {
        usize::try_from(*self).ok()?.index_into(v)
    }
}

impl Index for i64 {
    fn index_into<'v>(&self, v: &'v Value) -> Option<&'v Value> {
        usize::try_from(*self).ok()?.index_into(v)
    }
}

impl<T: ?Sized + Index> Index for &T {
    fn index_into<'v>(&self, v: &'v Value) -> Option<&'v Value> {
        (**self).index_into(v)
    }
}

/// Same contract as [`Value::get`]: indexing never panics.
impl<I: Index> ops::Index<I> for Value {
    type Output = Value;

    fn index(&self, index: I) -> &Value {
        self.get(index)
    }
}

/// Diagnostic rendering. Strings are quoted but not escaped, so the output is
/// not JSON.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => f.write_str("null"),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Number(n) => write!(f, "{}", n),
            Value::String(s) => write!(f, "\"{}\"", s),
            Value::Array(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}", item)?;
                }
                f.write_str("]")
            }
            Value::Object(map) => {
                f.write_str("{")?;
                for (i, (key, value)) in map.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}={}", key, value)?;
                }
                f.write_str("}")
            }
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<Number> for Value {
    fn from(n: Number) -> Self {
        Value::Number(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Number(Number::I32(n))
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Number(Number::I64(n))
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Number(Number::F64(f))
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<Vec<Value>> for Value {
    fn from(arr: Vec<Value>) -> Self {
        Value::Array(arr)
    }
}

impl From<IndexMap<String, Value>> for Value {
    fn from(obj: IndexMap<String, Value>) -> Self {
        Value::Object(obj)
    }
}
