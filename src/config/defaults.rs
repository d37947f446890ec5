// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the crate. Constants are organized by category.
//!
//! # Categories
//!
//! - **Duration**: How long a toast stays visible
//! - **Animation**: Entry/exit transition timing
//! - **Diagnostics**: Event buffer capacity bounds
//! - **Style**: The default style tree

use crate::style::{StyleMap, StyleValue};

// ==========================================================================
// Duration Defaults
// ==========================================================================

/// Default display duration before auto-hide (in milliseconds).
pub const DEFAULT_DURATION_MS: u64 = 3000;

/// Display duration for warnings, which need more reading time (in milliseconds).
pub const WARNING_DURATION_MS: u64 = 5000;

// ==========================================================================
// Animation Defaults
// ==========================================================================

/// Default entry/exit transition duration (in milliseconds).
pub const DEFAULT_ANIMATION_MS: u64 = 400;

/// Minimum transition duration (in milliseconds).
pub const MIN_ANIMATION_MS: u64 = 50;

/// Maximum transition duration (in milliseconds). Longer transitions make
/// the queue feel unresponsive.
pub const MAX_ANIMATION_MS: u64 = 1000;

// ==========================================================================
// Diagnostics Defaults
// ==========================================================================

/// Default capacity of the diagnostic event buffer.
pub const DEFAULT_EVENT_BUFFER_CAPACITY: usize = 256;

/// Minimum event buffer capacity.
pub const MIN_EVENT_BUFFER_CAPACITY: usize = 16;

/// Maximum event buffer capacity.
pub const MAX_EVENT_BUFFER_CAPACITY: usize = 4096;

// ==========================================================================
// Style Defaults
// ==========================================================================

/// The default style tree: a dark translucent card with light text, rounded
/// corners and a soft shadow.
#[must_use]
pub fn default_style() -> StyleMap {
    let mut border = StyleMap::new();
    border.insert("radius".into(), StyleValue::leaf("3px"));
    border.insert("width".into(), StyleValue::leaf("2px"));

    let mut padding = StyleMap::new();
    padding.insert("vertical".into(), StyleValue::leaf("10px"));
    padding.insert("horizontal".into(), StyleValue::leaf("15px"));

    let mut shadow = StyleMap::new();
    shadow.insert("color".into(), StyleValue::leaf("rgba(0, 0, 0, 0.8)"));
    shadow.insert("blur".into(), StyleValue::leaf("10px"));

    let mut style = StyleMap::new();
    style.insert("background".into(), StyleValue::leaf("rgba(0, 0, 0, 0.85)"));
    style.insert("color".into(), StyleValue::leaf("rgba(255, 255, 255, 0.9)"));
    style.insert("border".into(), StyleValue::Map(border));
    style.insert("padding".into(), StyleValue::Map(padding));
    style.insert("shadow".into(), StyleValue::Map(shadow));
    style.insert("max-width".into(), StyleValue::leaf("320px"));
    style
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_style_groups_are_nested_maps() {
        let style = default_style();
        assert!(style.get("border").and_then(StyleValue::as_map).is_some());
        assert!(style.get("padding").and_then(StyleValue::as_map).is_some());
        assert!(style.get("shadow").and_then(StyleValue::as_map).is_some());
    }

    #[test]
    fn animation_bounds_bracket_default() {
        assert!(MIN_ANIMATION_MS <= DEFAULT_ANIMATION_MS);
        assert!(DEFAULT_ANIMATION_MS <= MAX_ANIMATION_MS);
    }

    #[test]
    fn warning_duration_exceeds_default() {
        assert!(WARNING_DURATION_MS > DEFAULT_DURATION_MS);
    }
}
