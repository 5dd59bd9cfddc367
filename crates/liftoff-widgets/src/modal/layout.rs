//! View description for the modal widget
//!
//! [`ModalLayout`] is computed from the widget state alone and describes
//! everything the iced view draws. Keeping it separate from the iced
//! elements lets the render contract be checked without a renderer.

use crate::theme::ModalMetrics;

/// Where the dialog sits inside the overlay
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DialogPlacement {
    /// Centered both ways
    Centered,
    /// Horizontally centered, pinned to the top with padding (compact viewports)
    Top { padding: f32 },
}

/// The full-window overlay and the dialog it hosts
#[derive(Debug, Clone, PartialEq)]
pub struct OverlayLayout {
    /// Overlay is displayed (mirrors `visible`)
    pub shown: bool,
    /// Title heading, present only for a non-empty title
    pub heading: Option<String>,
    /// Close glyph in the header row; always present so the dialog can be dismissed
    pub close_glyph: &'static str,
    /// Dialog width after applying the viewport cap
    pub dialog_width: f32,
    pub placement: DialogPlacement,
}

/// The always-visible floating trigger
#[derive(Debug, Clone, PartialEq)]
pub struct TriggerLayout {
    pub label: &'static str,
    pub size: f32,
    /// Distance from the bottom and right window edges
    pub margin: f32,
}

/// Everything the modal widget renders
#[derive(Debug, Clone, PartialEq)]
pub struct ModalLayout {
    pub overlay: OverlayLayout,
    pub trigger: TriggerLayout,
}

impl ModalLayout {
    /// Compute the layout for the given state
    ///
    /// `viewport_width` selects the compact placement and caps the dialog
    /// width; pass `f32::INFINITY` when the window size is unknown.
    pub fn compute(
        visible: bool,
        title: Option<&str>,
        viewport_width: f32,
        metrics: &ModalMetrics,
    ) -> Self {
        let heading = title.filter(|t| !t.is_empty()).map(str::to_owned);

        let placement = if viewport_width <= metrics.compact_breakpoint {
            DialogPlacement::Top {
                padding: metrics.compact_top_padding,
            }
        } else {
            DialogPlacement::Centered
        };

        let dialog_width = metrics
            .dialog_width
            .min(viewport_width * metrics.dialog_max_fraction);

        Self {
            overlay: OverlayLayout {
                shown: visible,
                heading,
                close_glyph: crate::theme::CLOSE_GLYPH,
                dialog_width,
                placement,
            },
            trigger: TriggerLayout {
                label: crate::theme::TRIGGER_LABEL,
                size: metrics.trigger_size,
                margin: metrics.trigger_margin,
            },
        }
    }
}
