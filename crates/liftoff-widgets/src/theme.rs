//! Shared theme constants for the modal widget
//!
//! Colors and dimensions for the overlay, the dialog box and the floating
//! trigger button.

use iced::Color;

/// Page background behind the widget (#F0F0F0)
pub const PAGE_BG: Color = Color::from_rgb(0.941, 0.941, 0.941);

/// Overlay backdrop (black at 70% opacity)
pub const OVERLAY_BG: Color = Color::from_rgba(0.0, 0.0, 0.0, 0.7);

/// Dialog box background
pub const DIALOG_BG: Color = Color::WHITE;

/// Dialog drop shadow (black at 50% opacity)
pub const DIALOG_SHADOW: Color = Color::from_rgba(0.0, 0.0, 0.0, 0.5);

/// Floating trigger button fill (#3498DB)
pub const TRIGGER_BG: Color = Color::from_rgb(0.204, 0.596, 0.859);

/// Close glyph color (#333333)
pub const CLOSE_FG: Color = Color::from_rgb(0.2, 0.2, 0.2);

/// Dialog title color
pub const TITLE_FG: Color = Color::from_rgb(0.1, 0.1, 0.1);

/// Trigger button label
pub const TRIGGER_LABEL: &str = "🚀 GO!";

/// Close affordance glyph
pub const CLOSE_GLYPH: &str = "🅧";

/// Dimensions for the overlay, dialog and trigger
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ModalMetrics {
    /// Trigger button diameter in pixels
    pub trigger_size: f32,
    /// Trigger distance from the bottom and right window edges
    pub trigger_margin: f32,
    /// Preferred dialog width
    pub dialog_width: f32,
    /// Maximum dialog width as a fraction of the viewport width
    pub dialog_max_fraction: f32,
    /// Inner dialog padding
    pub dialog_padding: f32,
    /// Dialog corner radius
    pub dialog_radius: f32,
    /// Dialog shadow blur radius
    pub shadow_blur: f32,
    /// Viewports at or below this width top-align the dialog
    pub compact_breakpoint: f32,
    /// Top padding of the dialog on compact viewports
    pub compact_top_padding: f32,
    /// Title font size
    pub title_size: f32,
}

impl Default for ModalMetrics {
    fn default() -> Self {
        Self {
            trigger_size: 50.0,
            trigger_margin: 20.0,
            dialog_width: 300.0,
            dialog_max_fraction: 0.8,
            dialog_padding: 20.0,
            dialog_radius: 5.0,
            shadow_blur: 10.0,
            compact_breakpoint: 768.0,
            compact_top_padding: 16.0,
            title_size: 24.0,
        }
    }
}
