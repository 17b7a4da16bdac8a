//! String-keyed dictionary of values

use crate::constants::{DICT_BUCKET_HINT, DICT_VAR_FLAG_NO_ESCAPE};
use crate::error::{CdmiError, Result};
use crate::value::{try_copy_str, Value};
use ahash::RandomState;
use std::collections::HashMap;

/// Dictionary entry: a value plus per-entry flags
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DictVar {
    /// Stored value
    pub value: Value,
    /// Entry flags (see `DICT_VAR_FLAG_*`)
    pub flags: u32,
}

impl DictVar {
    /// Create an entry without flags
    pub fn new(value: Value) -> Self {
        Self { value, flags: 0 }
    }

    /// True when the entry must be emitted without escaping
    pub fn no_escape(&self) -> bool {
        self.flags & DICT_VAR_FLAG_NO_ESCAPE != 0
    }
}

/// Unordered mapping from string key to [`DictVar`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dict {
    entries: HashMap<String, DictVar, RandomState>,
}

impl Dict {
    /// Create an empty dictionary
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty dictionary sized for about `buckets` entries
    pub fn with_bucket_hint(buckets: usize) -> Result<Self> {
        let mut entries = HashMap::with_hasher(RandomState::new());
        entries.try_reserve(buckets)?;
        Ok(Self { entries })
    }

    /// Insert or replace `key`
    pub fn add_value(&mut self, key: impl Into<String>, value: Value, flags: u32) -> Result<()> {
        self.entries.try_reserve(1)?;
        self.entries.insert(key.into(), DictVar { value, flags });
        Ok(())
    }

    /// Insert or replace `key` with a text value
    pub fn add(&mut self, key: impl Into<String>, value: &str) -> Result<()> {
        self.add_value(key, Value::from(value), 0)
    }

    /// Exact lookup
    pub fn get(&self, key: &str) -> Option<&DictVar> {
        self.entries.get(key)
    }

    /// Exact lookup returning the value only
    pub fn get_value(&self, key: &str) -> Option<&Value> {
        self.entries.get(key).map(|var| &var.value)
    }

    /// Case-insensitive lookup
    ///
    /// An exact match wins; otherwise, among keys equal to `key` ignoring
    /// ASCII case, the lexicographically smallest is returned.
    pub fn get_lowered(&self, key: &str) -> Result<&DictVar> {
        if let Some(var) = self.entries.get(key) {
            return Ok(var);
        }

        self.entries
            .iter()
            .filter(|(k, _)| k.eq_ignore_ascii_case(key))
            .min_by(|a, b| a.0.cmp(b.0))
            .map(|(_, var)| var)
            .ok_or_else(|| CdmiError::NotFound(format!("member '{}'", key)))
    }

    /// Remove `key`, returning its entry
    pub fn remove(&mut self, key: &str) -> Option<DictVar> {
        self.entries.remove(key)
    }

    /// New dictionary holding the entries whose key starts with `prefix`
    ///
    /// Matching is case-sensitive and the prefix is stripped from the copied
    /// keys. Entries whose key equals the prefix are skipped.
    pub fn filter_prefix(&self, prefix: &str) -> Result<Dict> {
        let mut filtered = Dict::with_bucket_hint(self.len().min(DICT_BUCKET_HINT))?;
        for (key, var) in &self.entries {
            if let Some(stripped) = key.strip_prefix(prefix) {
                if stripped.is_empty() {
                    continue;
                }
                filtered.add_value(
                    try_copy_str(stripped)?,
                    var.value.try_clone()?,
                    var.flags,
                )?;
            }
        }
        Ok(filtered)
    }

    /// Deep copy
    ///
    /// Every key and nested value is allocated fallibly, so exhaustion
    /// surfaces as `OutOfMemory` rather than an abort.
    pub fn dup(&self) -> Result<Dict> {
        let mut copy = Dict::with_bucket_hint(self.len())?;
        for (key, var) in &self.entries {
            copy.add_value(try_copy_str(key)?, var.value.try_clone()?, var.flags)?;
        }
        Ok(copy)
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when the dictionary holds no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over entries in unspecified order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &DictVar)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Keys in lexicographic order
    pub fn sorted_keys(&self) -> Vec<&str> {
        let mut keys: Vec<&str> = self.entries.keys().map(String::as_str).collect();
        keys.sort_unstable();
        keys
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn test_add_replaces_existing_key() {
        let mut dict = Dict::with_bucket_hint(13).unwrap();
        dict.add("a", "1").unwrap();
        dict.add("a", "2").unwrap();
        assert_eq!(dict.len(), 1);
        assert_eq!(dict.get_value("a"), Some(&Value::from("2")));
    }

    #[test]
    fn test_get_lowered_is_case_insensitive() {
        for key in ["metadata", "Metadata", "METADATA"] {
            let mut dict = Dict::new();
            dict.add(key, "x").unwrap();
            let var = dict.get_lowered("metadata").unwrap();
            assert_eq!(var.value.as_str(), Some("x"));
        }
    }

    #[test]
    fn test_get_lowered_prefers_exact_match() {
        let mut dict = Dict::new();
        dict.add("METADATA", "upper").unwrap();
        dict.add("metadata", "exact").unwrap();
        assert_eq!(
            dict.get_lowered("metadata").unwrap().value.as_str(),
            Some("exact")
        );
    }

    #[test]
    fn test_get_lowered_missing() {
        let dict = Dict::new();
        assert_eq!(
            dict.get_lowered("metadata").unwrap_err().kind(),
            ErrorKind::NotFound
        );
    }

    #[test]
    fn test_filter_prefix_strips_prefix() {
        let mut headers = Dict::new();
        headers.add("X-Object-Meta-Foo", "1").unwrap();
        headers.add("Other", "2").unwrap();
        headers.add("x-object-meta-bar", "3").unwrap();

        let filtered = headers.filter_prefix("X-Object-Meta-").unwrap();
        assert_eq!(filtered.sorted_keys(), vec!["Foo"]);
        assert_eq!(filtered.get_value("Foo"), Some(&Value::from("1")));
    }

    #[test]
    fn test_filter_prefix_keeps_flags() {
        let mut headers = Dict::new();
        headers
            .add_value("X-Object-Meta-Raw", Value::from("<a>"), DICT_VAR_FLAG_NO_ESCAPE)
            .unwrap();
        let filtered = headers.filter_prefix("X-Object-Meta-").unwrap();
        assert!(filtered.get("Raw").unwrap().no_escape());
    }

    #[test]
    fn test_dup_is_deep() {
        let mut inner = Dict::new();
        inner.add("size", "42").unwrap();
        let mut dict = Dict::new();
        dict.add_value("metadata", Value::SubDict(inner), 0).unwrap();

        let copy = dict.dup().unwrap();
        dict.remove("metadata");

        assert!(dict.is_empty());
        let md = copy.get_value("metadata").and_then(Value::as_subdict).unwrap();
        assert_eq!(md.get_value("size"), Some(&Value::from("42")));
    }
}
