//! Typed access to a flat preference map
//!
//! Values are scalars. Reading a key through a [`PrefKey`] of the wrong
//! type yields `None`, the same as a missing key.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::marker::PhantomData;

/// A scalar preference value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PrefValue {
    /// A flag.
    Bool(bool),
    /// Any integer, including epoch milliseconds.
    Int(i64),
    /// A string.
    Text(String),
}

impl PrefValue {
    /// Convert a JSON value, dropping anything that is not a scalar we
    /// know how to hold.
    pub fn from_json(value: serde_json::Value) -> Option<Self> {
        match value {
            serde_json::Value::Bool(b) => Some(Self::Bool(b)),
            serde_json::Value::Number(n) => n.as_i64().map(Self::Int),
            serde_json::Value::String(s) => Some(Self::Text(s)),
            _ => None,
        }
    }
}

/// Rust types that map onto a [`PrefValue`] variant.
pub trait PrefType: Sized {
    /// Read the value back, or `None` if the variant does not match.
    fn from_pref(value: &PrefValue) -> Option<Self>;
    /// Wrap the value for storage.
    fn into_pref(self) -> PrefValue;
}

impl PrefType for i64 {
    fn from_pref(value: &PrefValue) -> Option<Self> {
        match value {
            PrefValue::Int(i) => Some(*i),
            _ => None,
        }
    }

    fn into_pref(self) -> PrefValue {
        PrefValue::Int(self)
    }
}

impl PrefType for String {
    fn from_pref(value: &PrefValue) -> Option<Self> {
        match value {
            PrefValue::Text(s) => Some(s.clone()),
            _ => None,
        }
    }

    fn into_pref(self) -> PrefValue {
        PrefValue::Text(self)
    }
}

impl PrefType for bool {
    fn from_pref(value: &PrefValue) -> Option<Self> {
        match value {
            PrefValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    fn into_pref(self) -> PrefValue {
        PrefValue::Bool(self)
    }
}

/// A named key with a value type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrefKey<T> {
    name: String,
    _marker: PhantomData<T>,
}

impl<T> PrefKey<T> {
    /// Key named `name`.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            _marker: PhantomData,
        }
    }

    /// Name the value is stored under.
    pub fn name(&self) -> &str {
        &self.name
    }
}

/// A flat, ordered preference map.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Preferences {
    values: BTreeMap<String, PrefValue>,
}

impl Preferences {
    /// Empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Decode a JSON object, keeping only scalar entries.
    pub fn from_json_object(object: serde_json::Map<String, serde_json::Value>) -> Self {
        let values = object
            .into_iter()
            .filter_map(|(k, v)| PrefValue::from_json(v).map(|v| (k, v)))
            .collect();
        Self { values }
    }

    /// Typed read; a missing or mistyped key is `None`.
    pub fn get<T: PrefType>(&self, key: &PrefKey<T>) -> Option<T> {
        self.values.get(key.name()).and_then(T::from_pref)
    }

    /// Typed read with a fallback.
    pub fn get_or<T: PrefType>(&self, key: &PrefKey<T>, default: T) -> T {
        self.get(key).unwrap_or(default)
    }

    /// Insert or overwrite a value.
    pub fn set<T: PrefType>(&mut self, key: &PrefKey<T>, value: T) {
        self.values.insert(key.name().to_string(), value.into_pref());
    }

    /// Remove a key of any type. Returns whether it was present.
    pub fn remove(&mut self, name: &str) -> bool {
        self.values.remove(name).is_some()
    }

    /// Whether a value of any type is stored under `name`.
    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the map has no entries.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Entry names in order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }

    /// Largest `n` among keys of the form `{prefix}_{n}_id`, or 0.
    pub fn highest_slot(&self, prefix: &str) -> u32 {
        self.keys()
            .filter_map(|key| key.strip_prefix(prefix)?.strip_prefix('_'))
            .filter_map(|rest| rest.strip_suffix("_id")?.parse::<u32>().ok())
            .max()
            .unwrap_or(0)
    }
}
