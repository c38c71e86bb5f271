use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A scalar attribute value accepted by the metric ingest API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AttributeValue {
    Bool(bool),
    Int(i64),
    Double(f64),
    String(String),
}

impl From<&str> for AttributeValue {
    fn from(v: &str) -> Self {
        AttributeValue::String(v.to_owned())
    }
}

impl From<String> for AttributeValue {
    fn from(v: String) -> Self {
        AttributeValue::String(v)
    }
}

impl From<i64> for AttributeValue {
    fn from(v: i64) -> Self {
        AttributeValue::Int(v)
    }
}

impl From<f64> for AttributeValue {
    fn from(v: f64) -> Self {
        AttributeValue::Double(v)
    }
}

impl From<bool> for AttributeValue {
    fn from(v: bool) -> Self {
        AttributeValue::Bool(v)
    }
}

/// Attribute set attached to an outgoing metric.
///
/// Keys are kept sorted so that two sets built in a different order compare
/// and serialize identically.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Attributes(BTreeMap<String, AttributeValue>);

impl Attributes {
    pub fn new() -> Self {
        Self(BTreeMap::new())
    }

    /// Builder-style insert, overwriting any previous value of `key`.
    pub fn put<K, V>(mut self, key: K, value: V) -> Self
    where
        K: Into<String>,
        V: Into<AttributeValue>,
    {
        self.insert(key, value);
        self
    }

    pub fn insert<K, V>(&mut self, key: K, value: V)
    where
        K: Into<String>,
        V: Into<AttributeValue>,
    {
        self.0.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&AttributeValue> {
        self.0.get(key)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>, V: Into<AttributeValue>> Extend<(K, V)> for Attributes {
    fn extend<T: IntoIterator<Item = (K, V)>>(&mut self, iter: T) {
        for (k, v) in iter {
            self.insert(k, v);
        }
    }
}

/// Attribute value as produced by the instrumentation SDK.
///
/// Wider than [`AttributeValue`]: array kinds have no counterpart in the
/// ingest API and get dropped on the way out.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnyValue {
    String(String),
    Bool(bool),
    Long(i64),
    Double(f64),
    StringArray(Vec<String>),
    BoolArray(Vec<bool>),
    LongArray(Vec<i64>),
    DoubleArray(Vec<f64>),
}

impl AnyValue {
    /// The scalar ingest value, if this kind has one.
    pub fn to_scalar(&self) -> Option<AttributeValue> {
        match self {
            AnyValue::String(s) => Some(AttributeValue::String(s.clone())),
            AnyValue::Bool(b) => Some(AttributeValue::Bool(*b)),
            AnyValue::Long(l) => Some(AttributeValue::Int(*l)),
            AnyValue::Double(d) => Some(AttributeValue::Double(*d)),
            AnyValue::StringArray(_)
            | AnyValue::BoolArray(_)
            | AnyValue::LongArray(_)
            | AnyValue::DoubleArray(_) => None,
        }
    }
}

impl From<AttributeValue> for AnyValue {
    fn from(v: AttributeValue) -> Self {
        match v {
            AttributeValue::String(s) => AnyValue::String(s),
            AttributeValue::Bool(b) => AnyValue::Bool(b),
            AttributeValue::Int(i) => AnyValue::Long(i),
            AttributeValue::Double(d) => AnyValue::Double(d),
        }
    }
}

pub type SourceAttributes = BTreeMap<String, AnyValue>;
