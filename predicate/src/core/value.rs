use std::{cmp::Ordering, fmt, sync::Arc};

use arrow::array::{
    ArrayRef, BooleanArray, Float64Array, Int64Array, NullArray, StringArray, UInt64Array,
};

/// Literal values accepted by range bounds and membership sets.
#[derive(Clone, Debug, PartialEq)]
pub enum ScalarValue {
    /// Represents Arrow `NULL`.
    Null,
    /// Boolean literal.
    Boolean(bool),
    /// Signed 64-bit integer.
    Int64(i64),
    /// Unsigned 64-bit integer.
    UInt64(u64),
    /// 64-bit floating point.
    Float64(f64),
    /// UTF-8 string.
    Utf8(String),
}

impl ScalarValue {
    /// Returns true when the literal is the `Null` variant.
    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self, ScalarValue::Null)
    }

    /// Compares this scalar with another, returning the ordering when both sides are comparable.
    pub fn compare(&self, other: &Self) -> Option<Ordering> {
        self.as_ref().compare(other.as_ref())
    }

    /// Returns a borrowed view over this scalar value.
    #[must_use]
    pub fn as_ref(&self) -> ScalarValueRef<'_> {
        match self {
            ScalarValue::Null => ScalarValueRef::Null,
            ScalarValue::Boolean(value) => ScalarValueRef::Boolean(*value),
            ScalarValue::Int64(value) => ScalarValueRef::Int64(*value),
            ScalarValue::UInt64(value) => ScalarValueRef::UInt64(*value),
            ScalarValue::Float64(value) => ScalarValueRef::Float64(*value),
            ScalarValue::Utf8(value) => ScalarValueRef::Utf8(value.as_str()),
        }
    }

    /// Materialises the literal as a single-element Arrow array in its natural type.
    ///
    /// Callers cast the result to the target column type before comparing.
    #[must_use]
    pub fn to_arrow_array(&self) -> ArrayRef {
        match self {
            ScalarValue::Null => Arc::new(NullArray::new(1)),
            ScalarValue::Boolean(v) => Arc::new(BooleanArray::from(vec![*v])),
            ScalarValue::Int64(v) => Arc::new(Int64Array::from(vec![*v])),
            ScalarValue::UInt64(v) => Arc::new(UInt64Array::from(vec![*v])),
            ScalarValue::Float64(v) => Arc::new(Float64Array::from(vec![*v])),
            ScalarValue::Utf8(v) => Arc::new(StringArray::from(vec![v.as_str()])),
        }
    }
}

impl fmt::Display for ScalarValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScalarValue::Null => f.write_str("NULL"),
            ScalarValue::Boolean(v) => write!(f, "{v}"),
            ScalarValue::Int64(v) => write!(f, "{v}"),
            ScalarValue::UInt64(v) => write!(f, "{v}"),
            ScalarValue::Float64(v) => write!(f, "{v}"),
            ScalarValue::Utf8(v) => write!(f, "{v:?}"),
        }
    }
}

impl From<bool> for ScalarValue {
    fn from(value: bool) -> Self {
        ScalarValue::Boolean(value)
    }
}

impl From<i32> for ScalarValue {
    fn from(value: i32) -> Self {
        ScalarValue::Int64(i64::from(value))
    }
}

impl From<i64> for ScalarValue {
    fn from(value: i64) -> Self {
        ScalarValue::Int64(value)
    }
}

impl From<u32> for ScalarValue {
    fn from(value: u32) -> Self {
        ScalarValue::UInt64(u64::from(value))
    }
}

impl From<u64> for ScalarValue {
    fn from(value: u64) -> Self {
        ScalarValue::UInt64(value)
    }
}

impl From<f64> for ScalarValue {
    fn from(value: f64) -> Self {
        ScalarValue::Float64(value)
    }
}

impl From<&str> for ScalarValue {
    fn from(value: &str) -> Self {
        ScalarValue::Utf8(value.to_string())
    }
}

impl From<String> for ScalarValue {
    fn from(value: String) -> Self {
        ScalarValue::Utf8(value)
    }
}

impl<T> From<Option<T>> for ScalarValue
where
    T: Into<ScalarValue>,
{
    fn from(value: Option<T>) -> Self {
        value.map_or(ScalarValue::Null, Into::into)
    }
}

/// Borrowed view over a scalar value.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ScalarValueRef<'a> {
    /// Represents Arrow `NULL`.
    Null,
    /// Boolean literal.
    Boolean(bool),
    /// Signed 64-bit integer.
    Int64(i64),
    /// Unsigned 64-bit integer.
    UInt64(u64),
    /// 64-bit floating point.
    Float64(f64),
    /// UTF-8 string slice.
    Utf8(&'a str),
}

impl<'a> ScalarValueRef<'a> {
    /// Returns true when the literal is the `Null` variant.
    #[must_use]
    pub fn is_null(self) -> bool {
        matches!(self, ScalarValueRef::Null)
    }

    /// Compares this scalar with another, returning the ordering when both sides are comparable.
    ///
    /// Mixed integer widths and integer/float pairs compare numerically.
    pub fn compare(self, other: ScalarValueRef<'_>) -> Option<Ordering> {
        use ScalarValueRef::*;
        match (self, other) {
            (Null, _) | (_, Null) => None,
            (Boolean(lhs), Boolean(rhs)) => Some(lhs.cmp(&rhs)),
            (Int64(lhs), Int64(rhs)) => Some(lhs.cmp(&rhs)),
            (UInt64(lhs), UInt64(rhs)) => Some(lhs.cmp(&rhs)),
            (Int64(lhs), UInt64(rhs)) => Some(i128::from(lhs).cmp(&i128::from(rhs))),
            (UInt64(lhs), Int64(rhs)) => Some(i128::from(lhs).cmp(&i128::from(rhs))),
            (Float64(lhs), Float64(rhs)) => lhs.partial_cmp(&rhs),
            (Int64(lhs), Float64(rhs)) => (lhs as f64).partial_cmp(&rhs),
            (Float64(lhs), Int64(rhs)) => lhs.partial_cmp(&(rhs as f64)),
            (UInt64(lhs), Float64(rhs)) => (lhs as f64).partial_cmp(&rhs),
            (Float64(lhs), UInt64(rhs)) => lhs.partial_cmp(&(rhs as f64)),
            (Utf8(lhs), Utf8(rhs)) => Some(lhs.cmp(rhs)),
            _ => None,
        }
    }
}

impl<'a> From<&'a ScalarValue> for ScalarValueRef<'a> {
    fn from(value: &'a ScalarValue) -> Self {
        value.as_ref()
    }
}
