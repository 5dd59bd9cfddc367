//! Button styling for the modal widget
//!
//! - Floating trigger: round raised button with a pressed-in look while held
//! - Close glyph: flat, text-only button inside the dialog header

use iced::widget::button::{Status, Style};
use iced::{Background, Border, Color, Shadow, Vector};

use crate::theme::{CLOSE_FG, TRIGGER_BG};

/// Shadow offset for the raised trigger
const SHADOW_OFFSET: Vector = Vector::new(2.0, 2.0);

/// Shadow blur for the raised trigger
const SHADOW_BLUR: f32 = 3.0;

/// Lighten a color by a factor (0.0-1.0)
fn lighten(color: Color, factor: f32) -> Color {
    Color::from_rgb(
        (color.r + factor).min(1.0),
        (color.g + factor).min(1.0),
        (color.b + factor).min(1.0),
    )
}

/// Darken a color by a factor (0.0-1.0)
fn darken(color: Color, factor: f32) -> Color {
    Color::from_rgb(
        (color.r * (1.0 - factor)).max(0.0),
        (color.g * (1.0 - factor)).max(0.0),
        (color.b * (1.0 - factor)).max(0.0),
    )
}

/// Raised round style (shadow on bottom-right)
fn raised_style(base_color: Color, radius: f32) -> Style {
    Style {
        background: Some(Background::Color(base_color)),
        text_color: Color::WHITE,
        border: Border {
            color: Color::TRANSPARENT,
            width: 0.0,
            radius: radius.into(),
        },
        shadow: Shadow {
            color: Color::from_rgba(0.0, 0.0, 0.0, 0.4),
            offset: SHADOW_OFFSET,
            blur_radius: SHADOW_BLUR,
        },
        snap: false,
    }
}

/// Pressed round style (reduced shadow, darker fill)
fn pressed_style(base_color: Color, radius: f32) -> Style {
    Style {
        background: Some(Background::Color(darken(base_color, 0.15))),
        text_color: Color::WHITE,
        border: Border {
            color: Color::TRANSPARENT,
            width: 0.0,
            radius: radius.into(),
        },
        shadow: Shadow {
            color: Color::from_rgba(0.0, 0.0, 0.0, 0.2),
            offset: Vector::new(0.5, 0.5),
            blur_radius: 1.0,
        },
        snap: false,
    }
}

/// Style for the floating trigger button
///
/// `size` is the button diameter; the border radius is half of it so the
/// button renders as a circle.
///
/// Use with `.style(move |_theme, status| floating_button_style(status, size))`
pub fn floating_button_style(status: Status, size: f32) -> Style {
    let radius = size / 2.0;
    match status {
        Status::Active => raised_style(TRIGGER_BG, radius),
        Status::Hovered => raised_style(lighten(TRIGGER_BG, 0.08), radius),
        Status::Pressed => pressed_style(TRIGGER_BG, radius),
        Status::Disabled => Style {
            background: Some(Background::Color(Color::from_rgb(0.6, 0.6, 0.6))),
            ..raised_style(TRIGGER_BG, radius)
        },
    }
}

/// Style for the close glyph in the dialog header
pub fn close_button_style(_theme: &iced::Theme, status: Status) -> Style {
    let text_color = match status {
        Status::Hovered | Status::Pressed => Color::BLACK,
        _ => CLOSE_FG,
    };
    Style {
        background: None,
        text_color,
        border: Border::default(),
        shadow: Shadow::default(),
        snap: false,
    }
}
