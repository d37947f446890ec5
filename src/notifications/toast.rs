// SPDX-License-Identifier: MPL-2.0
//! Toast widget for rendering the active notification.
//!
//! Toasts are the visual representation of the display slot: a small card
//! with a severity-colored accent, the message text and a dismiss button.
//! Entry and exit transitions are rendered by interpolating opacity and a
//! slide offset from the controller's animation sheet.

use std::time::Instant;

use iced::widget::{button, container, text, Column, Container, Row, Text};
use iced::{alignment, Background, Border, Color, Element, Length, Shadow, Theme};
use serde::{Deserialize, Serialize};

use crate::style::{resolve, ResolvedStyle};
use crate::ui::design_tokens::{border, opacity, palette, radius, shadow, spacing, typography};
use crate::ui::icons;

use super::animation::TransitionStyle;
use super::manager::{Controller, Message};
use super::notification::ToastRequest;

/// Where the toast overlay sits within the window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ToastPosition {
    /// Top-left corner.
    TopLeft,
    /// Top center.
    TopCenter,
    /// Top-right corner.
    TopRight,
    /// Bottom-left corner.
    BottomLeft,
    /// Bottom center.
    #[default]
    BottomCenter,
    /// Bottom-right corner.
    BottomRight,
}

impl ToastPosition {
    fn align_x(self) -> alignment::Horizontal {
        match self {
            Self::TopLeft | Self::BottomLeft => alignment::Horizontal::Left,
            Self::TopCenter | Self::BottomCenter => alignment::Horizontal::Center,
            Self::TopRight | Self::BottomRight => alignment::Horizontal::Right,
        }
    }

    fn align_y(self) -> alignment::Vertical {
        match self {
            Self::TopLeft | Self::TopCenter | Self::TopRight => alignment::Vertical::Top,
            Self::BottomLeft | Self::BottomCenter | Self::BottomRight => {
                alignment::Vertical::Bottom
            }
        }
    }
}

/// Toast widget.
pub struct Toast;

impl Toast {
    /// Renders a single toast card in the given transition state.
    pub fn view<'a>(
        request: &'a ToastRequest,
        transition: TransitionStyle,
    ) -> Element<'a, Message> {
        let resolved = resolve(request.style());
        let accent = request.severity().color();
        let fade = transition.opacity;

        // Severity icon glyph
        let icon_widget = Text::new(icons::severity_glyph(request.severity()).to_string())
            .size(typography::BODY)
            .style(move |_theme: &Theme| text::Style {
                color: Some(faded(accent, fade)),
            });

        // Message text, with an optional title line
        let text_color = faded(resolved.text_color, fade);
        let mut message = Column::new().spacing(spacing::XXS);
        if let Some(title) = request.content().title() {
            message = message.push(
                Text::new(title)
                    .size(typography::BODY)
                    .style(move |_theme: &Theme| text::Style {
                        color: Some(text_color),
                    }),
            );
        }
        message = message.push(
            Text::new(request.content().body())
                .size(typography::BODY)
                .style(move |_theme: &Theme| text::Style {
                    color: Some(text_color),
                }),
        );

        // Dismiss button
        let dismiss_button = button(
            Text::new(icons::cross().to_string())
                .size(typography::CAPTION)
                .style(move |_theme: &Theme| text::Style {
                    color: Some(text_color),
                }),
        )
        .on_press(Message::Dismiss(request.id()))
        .padding(spacing::XXS)
        .style(dismiss_button_style);

        // Layout: [icon] [message] [dismiss]
        let content = Row::new()
            .spacing(spacing::SM)
            .align_y(alignment::Vertical::Center)
            .push(Container::new(icon_widget).padding(spacing::XXS))
            .push(
                Container::new(message)
                    .width(Length::Fill)
                    .align_x(alignment::Horizontal::Left),
            )
            .push(dismiss_button);

        Container::new(content)
            .max_width(resolved.max_width)
            .padding(resolved.padding)
            .style(move |_theme: &Theme| toast_container_style(&resolved, accent, fade))
            .into()
    }

    /// Renders the toast overlay for a controller.
    ///
    /// Positions the active toast per the controller settings, applying its
    /// transition state at `now`. An empty display slot renders nothing.
    pub fn view_overlay(controller: &Controller, now: Instant) -> Element<'_, Message> {
        let (Some(request), Some(transition)) =
            (controller.active(), controller.transition_at(now))
        else {
            // An empty container that takes no space
            return Container::new(text(""))
                .width(Length::Shrink)
                .height(Length::Shrink)
                .into();
        };

        let position = controller.settings().effective_position();

        // The slide transition moves the card toward the anchored edge as
        // it fades out.
        let mut padding = iced::Padding::new(spacing::MD);
        let inset = spacing::MD + (TransitionStyle::gone().offset - transition.offset);
        match position.align_y() {
            alignment::Vertical::Top => padding.top = inset,
            _ => padding.bottom = inset,
        }

        Container::new(Self::view(request, transition))
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(position.align_x())
            .align_y(position.align_y())
            .padding(padding)
            .into()
    }
}

fn faded(color: Color, opacity: f32) -> Color {
    Color {
        a: color.a * opacity,
        ..color
    }
}

/// Style function for the toast container.
fn toast_container_style(resolved: &ResolvedStyle, accent: Color, fade: f32) -> container::Style {
    let border_width = if resolved.border_width > 0.0 {
        resolved.border_width
    } else {
        border::WIDTH_MD
    };

    container::Style {
        background: Some(Background::Color(faded(resolved.background, fade))),
        border: Border {
            color: faded(accent, fade),
            width: border_width,
            radius: resolved.border_radius.into(),
        },
        shadow: Shadow {
            color: faded(resolved.shadow.color, fade),
            ..resolved.shadow
        },
        text_color: Some(faded(resolved.text_color, fade)),
        ..Default::default()
    }
}

/// Style function for the dismiss button.
fn dismiss_button_style(theme: &Theme, status: button::Status) -> button::Style {
    let base = theme.extended_palette().background.base;

    match status {
        button::Status::Active | button::Status::Disabled => button::Style {
            background: None,
            text_color: base.text,
            border: Border::default(),
            shadow: shadow::NONE,
            snap: true,
        },
        button::Status::Hovered => button::Style {
            background: Some(Background::Color(Color {
                a: opacity::OVERLAY_SUBTLE,
                ..palette::GRAY_400
            })),
            text_color: base.text,
            border: Border {
                radius: radius::SM.into(),
                ..Default::default()
            },
            shadow: shadow::NONE,
            snap: true,
        },
        button::Status::Pressed => button::Style {
            background: Some(Background::Color(Color {
                a: opacity::OVERLAY_MEDIUM,
                ..palette::GRAY_400
            })),
            text_color: base.text,
            border: Border {
                radius: radius::SM.into(),
                ..Default::default()
            },
            shadow: shadow::NONE,
            snap: true,
        },
    }
}
