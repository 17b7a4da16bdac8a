//! Generic value tree
//!
//! Every JSON document maps onto [`Value`]: arrays become [`Value::Vector`],
//! objects become [`Value::SubDict`] and every scalar becomes
//! [`Value::String`] holding its textual form.

use crate::dict::Dict;
use crate::error::Result;

/// Tagged value with exactly one active payload
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    /// Text leaf (JSON strings, numbers and booleans)
    String(String),
    /// Ordered sequence of values
    Vector(ValueVec),
    /// Mapping from key to value
    SubDict(Dict),
}

impl Value {
    /// Borrow the text payload
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// Borrow the vector payload
    pub fn as_vector(&self) -> Option<&ValueVec> {
        match self {
            Value::Vector(v) => Some(v),
            _ => None,
        }
    }

    /// Borrow the sub-dictionary payload
    pub fn as_subdict(&self) -> Option<&Dict> {
        match self {
            Value::SubDict(d) => Some(d),
            _ => None,
        }
    }

    /// Move the sub-dictionary out, leaving an empty one in its place
    ///
    /// Returns `None` (and leaves `self` untouched) for other variants.
    pub fn take_subdict(&mut self) -> Option<Dict> {
        match self {
            Value::SubDict(d) => Some(std::mem::take(d)),
            _ => None,
        }
    }

    /// Deep copy that reports allocation failure instead of aborting
    pub fn try_clone(&self) -> Result<Value> {
        match self {
            Value::String(s) => Ok(Value::String(try_copy_str(s)?)),
            Value::Vector(v) => Ok(Value::Vector(v.try_clone()?)),
            Value::SubDict(d) => Ok(Value::SubDict(d.dup()?)),
        }
    }

    /// Short name of the active variant, for diagnostics
    pub fn kind_name(&self) -> &'static str {
        match self {
            Value::String(_) => "string",
            Value::Vector(_) => "vector",
            Value::SubDict(_) => "subdict",
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

/// Owned copy of `s`, allocated fallibly
pub(crate) fn try_copy_str(s: &str) -> Result<String> {
    let mut copy = String::new();
    copy.try_reserve(s.len())?;
    copy.push_str(s);
    Ok(copy)
}

/// Growable, insertion-ordered sequence of values
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValueVec {
    items: Vec<Value>,
}

impl ValueVec {
    /// Create an empty vector
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Create an empty vector with room for `capacity` values
    pub fn with_capacity(capacity: usize) -> Result<Self> {
        let mut items = Vec::new();
        items.try_reserve(capacity)?;
        Ok(Self { items })
    }

    /// Append a value
    pub fn push(&mut self, value: Value) -> Result<()> {
        self.items.try_reserve(1)?;
        self.items.push(value);
        Ok(())
    }

    /// Deep copy that reports allocation failure instead of aborting
    pub fn try_clone(&self) -> Result<ValueVec> {
        let mut copy = ValueVec::with_capacity(self.len())?;
        for value in &self.items {
            copy.push(value.try_clone()?)?;
        }
        Ok(copy)
    }

    /// Value at `index`
    pub fn get(&self, index: usize) -> Option<&Value> {
        self.items.get(index)
    }

    /// Number of values
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// True when the vector holds no values
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterate over values in insertion order
    pub fn iter(&self) -> std::slice::Iter<'_, Value> {
        self.items.iter()
    }

    /// Borrow the values as a slice
    pub fn as_slice(&self) -> &[Value] {
        &self.items
    }
}

impl<'a> IntoIterator for &'a ValueVec {
    type Item = &'a Value;
    type IntoIter = std::slice::Iter<'a, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl IntoIterator for ValueVec {
    type Item = Value;
    type IntoIter = std::vec::IntoIter<Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}
