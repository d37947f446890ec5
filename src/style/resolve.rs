// SPDX-License-Identifier: MPL-2.0
//! Lowering of a merged style tree into concrete render properties.
//!
//! Leaves are CSS-flavored strings: colors in any form `csscolorparser`
//! understands, lengths as `"NNpx"`. Resolution never fails — a missing or
//! unparsable leaf falls back to the corresponding design-token default, so
//! malformed configuration degrades instead of erroring.

use iced::{Color, Padding, Shadow, Vector};

use super::{StyleMap, StyleValue};
use crate::ui::design_tokens::{opacity, palette, radius, sizing, spacing};

/// Concrete display properties for one toast, resolved from its effective
/// style tree.
#[derive(Debug, Clone)]
pub struct ResolvedStyle {
    pub background: Color,
    pub text_color: Color,
    pub border_radius: f32,
    pub border_width: f32,
    pub padding: Padding,
    pub max_width: f32,
    pub shadow: Shadow,
}

/// Resolves a merged style tree.
#[must_use]
pub fn resolve(style: &StyleMap) -> ResolvedStyle {
    let border = group(style, "border");
    let padding = group(style, "padding");
    let shadow = group(style, "shadow");

    let padding_v = padding.map_or(spacing::XS, |p| px(p, "vertical", spacing::XS));
    let padding_h = padding.map_or(spacing::SM, |p| px(p, "horizontal", spacing::SM));

    ResolvedStyle {
        background: color(
            style,
            "background",
            Color {
                a: opacity::TOAST_SURFACE,
                ..palette::BLACK
            },
        ),
        text_color: color(
            style,
            "color",
            Color {
                a: opacity::TOAST_TEXT,
                ..palette::WHITE
            },
        ),
        border_radius: border.map_or(radius::SM, |b| px(b, "radius", radius::SM)),
        border_width: border.map_or(0.0, |b| px(b, "width", 0.0)),
        padding: Padding {
            top: padding_v,
            bottom: padding_v,
            left: padding_h,
            right: padding_h,
        },
        max_width: px(style, "max-width", sizing::TOAST_WIDTH),
        shadow: Shadow {
            color: shadow.map_or(palette::BLACK, |s| {
                color(s, "color", palette::BLACK)
            }),
            offset: Vector::ZERO,
            blur_radius: shadow.map_or(0.0, |s| px(s, "blur", 0.0)),
        },
    }
}

fn leaf<'a>(map: &'a StyleMap, key: &str) -> Option<&'a str> {
    map.get(key).and_then(StyleValue::as_leaf)
}

fn group<'a>(map: &'a StyleMap, key: &str) -> Option<&'a StyleMap> {
    map.get(key).and_then(StyleValue::as_map)
}

fn color(map: &StyleMap, key: &str, fallback: Color) -> Color {
    leaf(map, key).and_then(parse_css_color).unwrap_or(fallback)
}

fn px(map: &StyleMap, key: &str, fallback: f32) -> f32 {
    leaf(map, key).and_then(parse_px).unwrap_or(fallback)
}

fn parse_css_color(input: &str) -> Option<Color> {
    let parsed: csscolorparser::Color = input.parse().ok()?;
    let [r, g, b, a] = parsed.to_rgba8();
    Some(Color::from_rgba8(r, g, b, f32::from(a) / 255.0))
}

fn parse_px(input: &str) -> Option<f32> {
    input.trim().strip_suffix("px")?.trim().parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::defaults::default_style;

    #[test]
    fn default_style_resolves_to_historical_look() {
        let resolved = resolve(&default_style());

        // Dark translucent card with light text.
        assert!(resolved.background.a > 0.8 && resolved.background.a < 0.9);
        assert_eq!(resolved.background.r, 0.0);
        assert!(resolved.text_color.r > 0.99);
        assert_eq!(resolved.border_radius, 3.0);
        assert!(resolved.shadow.blur_radius > 0.0);
    }

    #[test]
    fn unparsable_color_falls_back() {
        let mut style = default_style();
        style.insert("background".into(), StyleValue::leaf("not-a-color"));

        let resolved = resolve(&style);
        assert_eq!(
            resolved.background,
            Color {
                a: opacity::TOAST_SURFACE,
                ..palette::BLACK
            }
        );
    }

    #[test]
    fn percentage_length_falls_back_to_token() {
        let mut style = default_style();
        style.insert("max-width".into(), StyleValue::leaf("40%"));

        let resolved = resolve(&style);
        assert_eq!(resolved.max_width, sizing::TOAST_WIDTH);
    }

    #[test]
    fn padding_group_resolves_both_axes() {
        let resolved = resolve(&default_style());
        assert_eq!(resolved.padding.top, 10.0);
        assert_eq!(resolved.padding.bottom, 10.0);
        assert_eq!(resolved.padding.left, 15.0);
        assert_eq!(resolved.padding.right, 15.0);
    }

    #[test]
    fn named_and_hex_colors_parse() {
        let mut style = StyleMap::new();
        style.insert("background".into(), StyleValue::leaf("pink"));
        style.insert("color".into(), StyleValue::leaf("#ff00ff"));

        let resolved = resolve(&style);
        assert!(resolved.background.r > 0.9);
        assert_eq!(resolved.text_color.g, 0.0);
        assert!(resolved.text_color.b > 0.99);
    }

    #[test]
    fn missing_groups_use_token_defaults() {
        let resolved = resolve(&StyleMap::new());
        assert_eq!(resolved.border_radius, radius::SM);
        assert_eq!(resolved.border_width, 0.0);
        assert_eq!(resolved.max_width, sizing::TOAST_WIDTH);
        assert_eq!(resolved.shadow.blur_radius, 0.0);
    }
}
