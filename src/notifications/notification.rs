// SPDX-License-Identifier: MPL-2.0
//! Core toast data structures.
//!
//! This module defines the request types a caller hands to the controller:
//! content, severity, display options, and the handle returned for later
//! dismissal.

use std::time::Duration;

use iced::Color;

use crate::config::defaults::WARNING_DURATION_MS;
use crate::config::Settings;
use crate::style::{self, StyleMap};
use crate::ui::design_tokens::palette;

use super::animation::TransitionSet;

/// Unique identifier for a toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ToastId(u64);

impl ToastId {
    /// Creates a new unique toast ID.
    pub fn new() -> Self {
        use std::sync::atomic::{AtomicU64, Ordering};
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for ToastId {
    fn default() -> Self {
        Self::new()
    }
}

/// Severity level determines the accent color, the icon glyph and the
/// default display duration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Severity {
    /// Operation completed successfully (green).
    Success,
    /// Informational message (blue).
    #[default]
    Info,
    /// Warning that doesn't block operation (orange, longer duration).
    Warning,
    /// Error requiring attention (red, manual dismiss).
    Error,
}

impl Severity {
    /// Returns the accent color for this severity level.
    #[must_use]
    pub fn color(&self) -> Color {
        match self {
            Severity::Success => palette::SUCCESS_500,
            Severity::Info => palette::INFO_500,
            Severity::Warning => palette::WARNING_500,
            Severity::Error => palette::ERROR_500,
        }
    }

    /// Returns the default display duration for this severity.
    ///
    /// Success and info use the configured base duration. Warnings get more
    /// reading time. Errors return `None`: they stay until dismissed.
    #[must_use]
    pub fn default_duration(&self, settings: &Settings) -> Option<Duration> {
        match self {
            Severity::Success | Severity::Info => settings.effective_duration(),
            Severity::Warning => Some(Duration::from_millis(WARNING_DURATION_MS)),
            Severity::Error => None,
        }
    }
}

/// What a toast displays.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToastContent {
    /// A plain message.
    Text(String),
    /// A titled message card.
    Rich { title: String, body: String },
}

impl ToastContent {
    /// The message body.
    #[must_use]
    pub fn body(&self) -> &str {
        match self {
            ToastContent::Text(body) | ToastContent::Rich { body, .. } => body,
        }
    }

    /// The title, for rich content.
    #[must_use]
    pub fn title(&self) -> Option<&str> {
        match self {
            ToastContent::Text(_) => None,
            ToastContent::Rich { title, .. } => Some(title),
        }
    }
}

impl From<&str> for ToastContent {
    fn from(body: &str) -> Self {
        ToastContent::Text(body.to_string())
    }
}

impl From<String> for ToastContent {
    fn from(body: String) -> Self {
        ToastContent::Text(body)
    }
}

/// Caller-supplied display options for one toast request.
///
/// All fields are optional overrides; whatever is absent falls back to the
/// severity preset and the controller settings.
#[derive(Debug, Clone, Default)]
pub struct ToastOptions {
    severity: Severity,
    duration: Option<Duration>,
    style: Option<StyleMap>,
    transitions: Option<TransitionSet>,
}

impl ToastOptions {
    /// Options with the given severity preset.
    #[must_use]
    pub fn new(severity: Severity) -> Self {
        Self {
            severity,
            ..Self::default()
        }
    }

    /// Success preset.
    #[must_use]
    pub fn success() -> Self {
        Self::new(Severity::Success)
    }

    /// Info preset.
    #[must_use]
    pub fn info() -> Self {
        Self::new(Severity::Info)
    }

    /// Warning preset.
    #[must_use]
    pub fn warning() -> Self {
        Self::new(Severity::Warning)
    }

    /// Error preset.
    #[must_use]
    pub fn error() -> Self {
        Self::new(Severity::Error)
    }

    /// Sets an explicit display duration, overriding the severity default.
    /// `Duration::ZERO` means the toast never auto-hides.
    #[must_use]
    pub fn duration(mut self, duration: Duration) -> Self {
        self.duration = Some(duration);
        self
    }

    /// Keeps the toast visible until explicitly dismissed.
    #[must_use]
    pub fn persistent(mut self) -> Self {
        self.duration = Some(Duration::ZERO);
        self
    }

    /// Sets a style override tree, merged into the default style.
    #[must_use]
    pub fn style(mut self, style: StyleMap) -> Self {
        self.style = Some(style);
        self
    }

    /// Overrides the entry/exit transition style deltas.
    #[must_use]
    pub fn transitions(mut self, transitions: TransitionSet) -> Self {
        self.transitions = Some(transitions);
        self
    }
}

/// A fully resolved toast request: content plus effective configuration.
///
/// Requests are immutable once built; a queued request displays exactly as
/// it was requested, regardless of later settings changes.
#[derive(Debug, Clone)]
pub struct ToastRequest {
    id: ToastId,
    content: ToastContent,
    severity: Severity,
    style: StyleMap,
    duration: Option<Duration>,
    transitions: Option<TransitionSet>,
}

impl ToastRequest {
    /// Builds a request by merging the options against the defaults.
    #[must_use]
    pub fn build(content: ToastContent, options: ToastOptions, settings: &Settings) -> Self {
        let ToastOptions {
            severity,
            duration,
            style: style_override,
            transitions,
        } = options;

        let style = style::merge(
            &crate::config::defaults::default_style(),
            style_override.unwrap_or_default(),
        );

        // An explicit zero duration means "never auto-hide".
        let duration = match duration {
            Some(d) if d.is_zero() => None,
            Some(d) => Some(d),
            None => severity.default_duration(settings),
        };

        Self {
            id: ToastId::new(),
            content,
            severity,
            style,
            duration,
            transitions,
        }
    }

    /// The request's unique ID.
    #[must_use]
    pub fn id(&self) -> ToastId {
        self.id
    }

    /// The displayed content.
    #[must_use]
    pub fn content(&self) -> &ToastContent {
        &self.content
    }

    /// The severity preset.
    #[must_use]
    pub fn severity(&self) -> Severity {
        self.severity
    }

    /// The effective style tree (defaults merged with the caller override).
    #[must_use]
    pub fn style(&self) -> &StyleMap {
        &self.style
    }

    /// The display duration; `None` means the toast never auto-hides.
    #[must_use]
    pub fn duration(&self) -> Option<Duration> {
        self.duration
    }

    /// The per-request transition override, if any.
    #[must_use]
    pub fn transitions(&self) -> Option<&TransitionSet> {
        self.transitions.as_ref()
    }

    /// The handle a caller can use to dismiss this toast.
    #[must_use]
    pub fn handle(&self) -> ToastHandle {
        ToastHandle { id: self.id }
    }
}

/// Handle returned from a toast request.
///
/// Passing the handle to [`Controller::hide`](super::Controller::hide)
/// dismisses the toast it names — but only once that toast occupies the
/// display slot. Hiding a request that is still queued is a silent no-op;
/// queued requests cannot be cancelled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToastHandle {
    id: ToastId,
}

impl ToastHandle {
    /// The ID of the toast this handle names.
    #[must_use]
    pub fn id(&self) -> ToastId {
        self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::defaults::DEFAULT_DURATION_MS;
    use crate::style::StyleValue;

    #[test]
    fn toast_ids_are_unique() {
        assert_ne!(ToastId::new(), ToastId::new());
    }

    #[test]
    fn severity_colors_are_distinct() {
        let success = Severity::Success.color();
        let info = Severity::Info.color();
        let warning = Severity::Warning.color();
        let error = Severity::Error.color();

        assert_ne!(success, info);
        assert_ne!(success, warning);
        assert_ne!(success, error);
        assert_ne!(info, warning);
        assert_ne!(info, error);
        assert_ne!(warning, error);
    }

    #[test]
    fn error_severity_has_no_auto_dismiss() {
        assert!(Severity::Error
            .default_duration(&Settings::default())
            .is_none());
    }

    #[test]
    fn warning_duration_is_longer_than_info() {
        let settings = Settings::default();
        let info = Severity::Info.default_duration(&settings).unwrap();
        let warning = Severity::Warning.default_duration(&settings).unwrap();
        assert!(warning > info);
    }

    #[test]
    fn build_applies_severity_default_duration() {
        let request = ToastRequest::build(
            "saved".into(),
            ToastOptions::success(),
            &Settings::default(),
        );
        assert_eq!(
            request.duration(),
            Some(Duration::from_millis(DEFAULT_DURATION_MS))
        );
    }

    #[test]
    fn build_normalizes_zero_duration_to_persistent() {
        let request = ToastRequest::build(
            "pinned".into(),
            ToastOptions::info().duration(Duration::ZERO),
            &Settings::default(),
        );
        assert_eq!(request.duration(), None);
    }

    #[test]
    fn build_explicit_duration_overrides_severity() {
        let request = ToastRequest::build(
            "quick".into(),
            ToastOptions::error().duration(Duration::from_millis(100)),
            &Settings::default(),
        );
        assert_eq!(request.duration(), Some(Duration::from_millis(100)));
    }

    #[test]
    fn build_merges_style_override_into_defaults() {
        let mut over = StyleMap::new();
        over.insert("background".into(), StyleValue::leaf("pink"));

        let request = ToastRequest::build(
            "styled".into(),
            ToastOptions::info().style(over),
            &Settings::default(),
        );

        assert_eq!(
            request.style().get("background").and_then(StyleValue::as_leaf),
            Some("pink")
        );
        // Defaults the override didn't touch are present.
        assert!(request.style().contains_key("color"));
        assert!(request.style().contains_key("border"));
    }

    #[test]
    fn rich_content_exposes_title_and_body() {
        let content = ToastContent::Rich {
            title: "Export".into(),
            body: "3 files written".into(),
        };
        assert_eq!(content.title(), Some("Export"));
        assert_eq!(content.body(), "3 files written");

        let plain: ToastContent = "hello".into();
        assert_eq!(plain.title(), None);
        assert_eq!(plain.body(), "hello");
    }

    #[test]
    fn handle_names_the_request() {
        let request = ToastRequest::build("x".into(), ToastOptions::default(), &Settings::default());
        assert_eq!(request.handle().id(), request.id());
    }
}
