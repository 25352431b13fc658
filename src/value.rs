//! The parsed value tree and its ordered object type.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A JSON-like value recovered from (possibly malformed) input.
///
/// `Absent` is a private sentinel the dispatcher uses to tell an enclosing
/// container reader "I refused to consume a byte that belongs to you"; it
/// must never reach a caller. Every public constructor and every trait impl
/// below treats it as an implementation detail, not a seventh public case.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    Null,
    Bool(bool),
    Number(f64),
    String(String),
    Array(Vec<Value>),
    Object(Object),
    /// Internal-only: refused to consume a container-closing byte.
    #[serde(skip)]
    Absent,
}

impl Value {
    pub(crate) fn is_absent(&self) -> bool {
        matches!(self, Value::Absent)
    }
}

impl Default for Value {
    fn default() -> Self {
        Value::Null
    }
}

/// An insertion-ordered mapping from string keys to [`Value`]s.
///
/// Duplicate keys overwrite the earlier binding's value but keep its
/// original position: `last write wins`, no reordering.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Object {
    entries: Vec<(String, Value)>,
    index: std::collections::HashMap<String, usize>,
}

impl Object {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Insert or overwrite `key`. Overwriting preserves the original slot.
    pub fn insert(&mut self, key: String, value: Value) {
        if let Some(&i) = self.index.get(&key) {
            self.entries[i].1 = value;
        } else {
            self.index.insert(key.clone(), self.entries.len());
            self.entries.push((key, value));
        }
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.index.get(key).map(|&i| &self.entries[i].1)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.index.contains_key(key)
    }

    /// Iterate in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn into_iter(self) -> impl Iterator<Item = (String, Value)> {
        self.entries.into_iter()
    }
}

impl FromIterator<(String, Value)> for Object {
    fn from_iter<T: IntoIterator<Item = (String, Value)>>(iter: T) -> Self {
        let mut obj = Object::new();
        for (k, v) in iter {
            obj.insert(k, v);
        }
        obj
    }
}

impl Serialize for Object {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeMap;
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (k, v) in &self.entries {
            map.serialize_entry(k, v)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for Object {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let entries: Vec<(String, Value)> = {
            struct ObjVisitor;
            impl<'de> serde::de::Visitor<'de> for ObjVisitor {
                type Value = Vec<(String, Value)>;

                fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                    f.write_str("a JSON object")
                }

                fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
                where
                    A: serde::de::MapAccess<'de>,
                {
                    let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
                    while let Some((k, v)) = map.next_entry()? {
                        entries.push((k, v));
                    }
                    Ok(entries)
                }
            }
            deserializer.deserialize_map(ObjVisitor)?
        };
        Ok(entries.into_iter().collect())
    }
}
