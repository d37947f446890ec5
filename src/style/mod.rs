// SPDX-License-Identifier: MPL-2.0
//! Style trees and the options merge.
//!
//! Display options are modeled as a tree of CSS-flavored string leaves
//! grouped by nested maps. A toast's effective configuration is produced by
//! merging a caller-supplied override tree into the default tree.
//!
//! The merge rule: the result carries the union of keys from both trees.
//! Where a key exists on both sides and both values are maps, the merge
//! recurses. In every other case the override value wins verbatim — in
//! particular, a leaf override replaces a whole default subtree without
//! recursion.

mod resolve;

pub use resolve::{resolve, ResolvedStyle};

use std::collections::BTreeMap;

/// An ordered style tree: property name to value.
pub type StyleMap = BTreeMap<String, StyleValue>;

/// A single node of a style tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StyleValue {
    /// A property value, e.g. `"rgba(0, 0, 0, 0.85)"` or `"3px"`.
    Leaf(String),
    /// A nested group of properties, e.g. the `border` group.
    Map(StyleMap),
}

impl StyleValue {
    /// Creates a leaf node.
    pub fn leaf(value: impl Into<String>) -> Self {
        StyleValue::Leaf(value.into())
    }

    /// Returns the leaf value, if this node is a leaf.
    #[must_use]
    pub fn as_leaf(&self) -> Option<&str> {
        match self {
            StyleValue::Leaf(value) => Some(value),
            StyleValue::Map(_) => None,
        }
    }

    /// Returns the nested map, if this node is a group.
    #[must_use]
    pub fn as_map(&self) -> Option<&StyleMap> {
        match self {
            StyleValue::Leaf(_) => None,
            StyleValue::Map(map) => Some(map),
        }
    }
}

/// Merges an override tree into a default tree, producing the effective
/// style for one toast.
///
/// The default tree is never mutated; the override is consumed. An empty
/// override yields a clone of the default.
#[must_use]
pub fn merge(default: &StyleMap, override_: StyleMap) -> StyleMap {
    let mut result = default.clone();
    for (key, value) in override_ {
        match (result.remove(&key), value) {
            // Both sides are groups: recurse.
            (Some(StyleValue::Map(base)), StyleValue::Map(over)) => {
                result.insert(key, StyleValue::Map(merge(&base, over)));
            }
            // Leaf on either side: the override wins verbatim.
            (_, value) => {
                result.insert(key, value);
            }
        }
    }
    result
}
