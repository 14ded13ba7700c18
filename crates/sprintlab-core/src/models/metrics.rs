// ABOUTME: Sparse metric storage keyed by test identifier
// ABOUTME: Absent keys mean "not measured"; non-finite values are never stored
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::trace;

/// Sparse mapping from test identifier to a measured value
///
/// Keys are the identifiers in [`crate::constants::metric_keys`]; unknown keys
/// are kept so external collaborators can round-trip their own measurements.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MetricsSet(BTreeMap<String, f64>);

impl MetricsSet {
    /// Empty set
    #[must_use]
    pub const fn new() -> Self {
        Self(BTreeMap::new())
    }

    /// Measured value for `key`
    ///
    /// Zero, negative and non-finite entries count as unmeasured.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<f64> {
        self.0
            .get(key)
            .copied()
            .filter(|value| value.is_finite() && *value > 0.0)
    }

    /// Whether a usable value exists for `key`
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Set or clear a value
    ///
    /// `None` and non-finite values remove the key.
    pub fn set(&mut self, key: impl Into<String>, value: Option<f64>) {
        let key = key.into();
        match value.filter(|v| v.is_finite()) {
            Some(v) => {
                self.0.insert(key, v);
            }
            None => {
                if value.is_some() {
                    trace!(%key, "dropping non-finite metric value");
                }
                self.0.remove(&key);
            }
        }
    }

    /// Builder-style insert
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: f64) -> Self {
        self.set(key, Some(value));
        self
    }

    /// Number of stored entries
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether nothing is stored
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Stored entries in key order
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.0.iter().map(|(k, v)| (k.as_str(), *v))
    }
}

impl<K: Into<String>> FromIterator<(K, f64)> for MetricsSet {
    fn from_iter<I: IntoIterator<Item = (K, f64)>>(iter: I) -> Self {
        let mut set = Self::new();
        for (key, value) in iter {
            set.set(key, Some(value));
        }
        set
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_none_removes_key() {
        let mut metrics = MetricsSet::new().with("pb_100m", 10.5);
        assert_eq!(metrics.get("pb_100m"), Some(10.5));
        metrics.set("pb_100m", None);
        assert!(metrics.is_empty());
    }

    #[test]
    fn test_non_finite_values_rejected() {
        let metrics: MetricsSet = [("a", f64::NAN), ("b", f64::INFINITY), ("c", 1.0)]
            .into_iter()
            .collect();
        assert_eq!(metrics.len(), 1);
        assert!(metrics.contains("c"));
    }

    #[test]
    fn test_zero_counts_as_unmeasured() {
        let metrics = MetricsSet::new().with("test_30m_fly", 0.0);
        assert_eq!(metrics.get("test_30m_fly"), None);
    }

    #[test]
    fn test_transparent_json() {
        let metrics: MetricsSet = serde_json::from_str(r#"{"pb_60m": 6.9}"#).unwrap();
        assert_eq!(metrics.get("pb_60m"), Some(6.9));
    }
}
