//! Binding resolution.
//!
//! [`Bindings`] is the merged view of a printer's default source plus the
//! call-supplied sources. Merging is "last write wins": sources are folded
//! in order and a later source overwrites earlier entries for the same key,
//! so the rightmost source has the highest precedence.

use std::collections::HashMap;

use mapfmt_core::PrintError;

use crate::value::Value;

/// Merged key/value bindings for one render call.
#[derive(Debug, Default)]
pub struct Bindings {
    entries: HashMap<String, Value>,
}

impl Bindings {
    /// Creates an empty binding set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Folds a binding source into this set; its entries overwrite existing
    /// ones for the same key.
    ///
    /// Accepted sources: records (own fields, one level deep), mappings with
    /// text keys, pointers to either, and null / nil pointers (which provide
    /// no keys). A mapping with a non-text key or any other value kind is
    /// rejected and contributes nothing.
    ///
    /// # Errors
    ///
    /// `InvalidMappingKey` for a mapping with non-text keys,
    /// `InvalidBindingSource` for any other unacceptable source kind.
    pub fn merge(&mut self, source: &Value) -> Result<(), PrintError> {
        match source {
            Value::Null | Value::Pointer(None) => Ok(()),
            Value::Pointer(Some(inner)) => self.merge(inner),
            Value::Record(fields) => {
                // One level deep only: nested records stay opaque values.
                for (name, value) in fields {
                    self.entries.insert(name.clone(), value.clone());
                }
                Ok(())
            }
            Value::Map(map) => {
                // Validate every key before inserting anything, so a bad
                // mapping contributes no bindings at all.
                for (key, _) in map {
                    if !matches!(key, Value::Text(_)) {
                        return Err(PrintError::InvalidMappingKey {
                            kind: key.kind_name().to_string(),
                        });
                    }
                }
                for (key, value) in map {
                    if let Value::Text(name) = key {
                        self.entries.insert(name.clone(), value.clone());
                    }
                }
                Ok(())
            }
            other => Err(PrintError::InvalidBindingSource {
                kind: other.kind_name().to_string(),
            }),
        }
    }

    /// Looks up a key. Exact string match only.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.get(key)
    }

    /// Returns the number of bound keys.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if no keys are bound.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
