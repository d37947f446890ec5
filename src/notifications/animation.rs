// SPDX-License-Identifier: MPL-2.0
//! The shared animation sheet and transition interpolation.
//!
//! Every toast animates between two rule sets: "gone" (transparent, shifted
//! toward the screen edge) and "visible" (opaque, at rest). The sheet
//! bundles both rule sets with the transition speed and is built once per
//! controller, on the first show; all subsequent toasts reuse it.

use std::time::{Duration, Instant};

use crate::ui::design_tokens::{opacity, sizing};

/// One animation rule set: the visual state at an endpoint of a transition.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransitionStyle {
    /// Overall opacity multiplier, `0.0..=1.0`.
    pub opacity: f32,
    /// Displacement toward the screen edge, in logical pixels. `0.0` is the
    /// resting position.
    pub offset: f32,
}

impl TransitionStyle {
    /// The hidden state: fully transparent, shifted toward the edge.
    #[must_use]
    pub const fn gone() -> Self {
        Self {
            opacity: opacity::TRANSPARENT,
            offset: sizing::TOAST_SLIDE_DISTANCE,
        }
    }

    /// The shown state: opaque, at rest.
    #[must_use]
    pub const fn visible() -> Self {
        Self {
            opacity: opacity::OPAQUE,
            offset: 0.0,
        }
    }

    /// Linear interpolation between two rule sets.
    #[must_use]
    pub fn lerp(from: Self, to: Self, t: f32) -> Self {
        let t = t.clamp(0.0, 1.0);
        Self {
            opacity: from.opacity + (to.opacity - from.opacity) * t,
            offset: from.offset + (to.offset - from.offset) * t,
        }
    }
}

/// Per-request override of the entry/exit style deltas.
///
/// `entry` is the state a toast animates *from* when appearing; `exit` is
/// the state it animates *to* when disappearing. The transition speed is
/// not overridable per request; it always comes from the shared sheet.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransitionSet {
    pub entry: TransitionStyle,
    pub exit: TransitionStyle,
}

impl Default for TransitionSet {
    fn default() -> Self {
        Self {
            entry: TransitionStyle::gone(),
            exit: TransitionStyle::gone(),
        }
    }
}

/// The shared animation sheet: both rule sets plus the transition speed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationSheet {
    pub gone: TransitionStyle,
    pub visible: TransitionStyle,
    pub speed: Duration,
}

impl AnimationSheet {
    /// Builds the sheet for the given transition speed.
    #[must_use]
    pub fn new(speed: Duration) -> Self {
        Self {
            gone: TransitionStyle::gone(),
            visible: TransitionStyle::visible(),
            speed,
        }
    }

    /// Fraction of a transition elapsed at `now`, clamped to `0.0..=1.0`.
    #[must_use]
    pub fn progress(&self, started: Instant, now: Instant) -> f32 {
        if self.speed.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(started);
        (elapsed.as_secs_f32() / self.speed.as_secs_f32()).clamp(0.0, 1.0)
    }
}
