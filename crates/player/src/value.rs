//! [`CapturedValue`]: an arbitrary, untyped value recorded in a snapshot.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A value captured by the trace producer at snapshot time.
///
/// Producers record whatever the traced program held at that moment, so no
/// schema is assumed: a value is any JSON-shaped datum, nested to arbitrary
/// depth, with no homogeneity guarantee inside a collection. Mappings keep
/// insertion order (the producer's order is the display order).
///
/// Values are deserialized snapshots, not live object graphs, so they are
/// acyclic by construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CapturedValue {
    Null,
    Bool(bool),
    // Int before Float: untagged deserialization tries variants in order,
    // so JSON integers land here and render without a decimal point.
    Int(i64),
    Float(f64),
    Text(String),
    Sequence(Vec<CapturedValue>),
    Mapping(IndexMap<String, CapturedValue>),
}

impl CapturedValue {
    /// Build a mapping from `(key, value)` pairs, keeping the given order.
    pub fn mapping<K, I>(entries: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, CapturedValue)>,
    {
        CapturedValue::Mapping(entries.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }

    /// Build a sequence of integers (the most common producer payload).
    pub fn int_sequence<I: IntoIterator<Item = i64>>(items: I) -> Self {
        CapturedValue::Sequence(items.into_iter().map(CapturedValue::Int).collect())
    }
}

impl From<bool> for CapturedValue {
    fn from(b: bool) -> Self {
        CapturedValue::Bool(b)
    }
}

impl From<i64> for CapturedValue {
    fn from(i: i64) -> Self {
        CapturedValue::Int(i)
    }
}

impl From<f64> for CapturedValue {
    fn from(f: f64) -> Self {
        CapturedValue::Float(f)
    }
}

impl From<&str> for CapturedValue {
    fn from(s: &str) -> Self {
        CapturedValue::Text(s.to_string())
    }
}

impl From<String> for CapturedValue {
    fn from(s: String) -> Self {
        CapturedValue::Text(s)
    }
}
