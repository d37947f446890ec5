// SPDX-License-Identifier: MPL-2.0
//! Severity glyphs and visual primitives.
//!
//! Icons are single characters rather than embedded image assets, with
//! ASCII fallbacks for environments whose fonts lack the symbols.

use crate::notifications::Severity;

/// Returns the glyph for a severity level.
#[must_use]
pub fn severity_glyph(severity: Severity) -> char {
    match severity {
        Severity::Success => '\u{2713}', // ✓
        Severity::Info => 'i',
        Severity::Warning => '!',
        Severity::Error => '\u{2717}', // ✗
    }
}

/// Returns the ASCII fallback for a severity level.
#[must_use]
pub fn severity_ascii(severity: Severity) -> char {
    match severity {
        Severity::Success => '+',
        Severity::Info => 'i',
        Severity::Warning => '!',
        Severity::Error => 'x',
    }
}

/// The dismiss-button glyph.
#[must_use]
pub fn cross() -> char {
    '\u{2715}' // ✕
}
