//! View function for the modal widget

use iced::alignment::{Horizontal, Vertical};
use iced::font::Weight;
use iced::widget::{button, center, column, container, opaque, row, stack, text, Space};
use iced::{Alignment, Border, Element, Font, Length, Padding, Shadow, Vector};

use super::layout::{DialogPlacement, ModalLayout};
use super::message::ModalMessage;
use crate::button_styles::{close_button_style, floating_button_style};
use crate::theme::{ModalMetrics, DIALOG_BG, DIALOG_SHADOW, OVERLAY_BG, TITLE_FG};

const BOLD: Font = Font {
    weight: Weight::Bold,
    ..Font::DEFAULT
};

/// Render the modal widget
///
/// Layout:
/// ```text
/// ┌──────────────────────────────────────────────┐
/// │ overlay (70% black, only while shown)        │
/// │        ┌──────────────────────────┐          │
/// │        │ Title                  🅧 │          │
/// │        │ <slotted content>        │          │
/// │        └──────────────────────────┘          │
/// │                                      ( GO! ) │  ← trigger, always shown
/// └──────────────────────────────────────────────┘
/// ```
///
/// The returned element fills its parent and is meant to be stacked on top
/// of the page content. While hidden the overlay is collapsed to zero size
/// rather than dropped, so `content` keeps its widget state across toggles.
pub fn modal_view<'a, Message>(
    layout: ModalLayout,
    metrics: &ModalMetrics,
    content: Element<'a, Message>,
    on_message: impl Fn(ModalMessage) -> Message,
) -> Element<'a, Message>
where
    Message: Clone + 'a,
{
    let overlay = overlay_layer(&layout, metrics, content, &on_message);
    let trigger = trigger_layer(&layout, &on_message);

    stack![overlay, trigger]
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

/// Backdrop + dialog, collapsed while hidden
fn overlay_layer<'a, Message>(
    layout: &ModalLayout,
    metrics: &ModalMetrics,
    content: Element<'a, Message>,
    on_message: &impl Fn(ModalMessage) -> Message,
) -> Element<'a, Message>
where
    Message: Clone + 'a,
{
    let overlay = &layout.overlay;

    let heading: Element<'a, Message> = match &overlay.heading {
        Some(title) => text(title.clone())
            .size(metrics.title_size)
            .font(BOLD)
            .color(TITLE_FG)
            .into(),
        None => Space::new().into(),
    };

    let close_btn = button(text(overlay.close_glyph).size(18).font(BOLD))
        .on_press(on_message(ModalMessage::Close))
        .padding(0)
        .style(close_button_style);

    let header = row![heading, Space::new().width(Length::Fill), close_btn]
        .align_y(Alignment::Start)
        .width(Length::Fill);

    let radius = metrics.dialog_radius;
    let blur = metrics.shadow_blur;
    let dialog = container(column![header, content].spacing(12))
        .padding(metrics.dialog_padding)
        .width(Length::Fixed(overlay.dialog_width))
        .style(move |_theme| container::Style {
            background: Some(DIALOG_BG.into()),
            text_color: Some(iced::Color::BLACK),
            border: Border {
                radius: radius.into(),
                ..Default::default()
            },
            shadow: Shadow {
                color: DIALOG_SHADOW,
                offset: Vector::ZERO,
                blur_radius: blur,
            },
            ..Default::default()
        });

    let (align_y, padding) = match overlay.placement {
        DialogPlacement::Centered => (Vertical::Center, Padding::ZERO),
        DialogPlacement::Top { padding } => (
            Vertical::Top,
            Padding {
                top: padding,
                ..Padding::ZERO
            },
        ),
    };

    // Backdrop swallows clicks so the page underneath stays inert
    let backdrop = opaque(
        container(dialog)
            .width(Length::Fill)
            .height(Length::Fill)
            .padding(padding)
            .align_x(Horizontal::Center)
            .align_y(align_y)
            .style(|_theme| container::Style {
                background: Some(OVERLAY_BG.into()),
                ..Default::default()
            }),
    );

    let wrapper = container(backdrop);
    if overlay.shown {
        wrapper.width(Length::Fill).height(Length::Fill).into()
    } else {
        wrapper
            .width(Length::Fixed(0.0))
            .height(Length::Fixed(0.0))
            .clip(true)
            .into()
    }
}

/// Floating round button pinned to the bottom-right corner
fn trigger_layer<'a, Message>(
    layout: &ModalLayout,
    on_message: &impl Fn(ModalMessage) -> Message,
) -> Element<'a, Message>
where
    Message: Clone + 'a,
{
    let trigger = &layout.trigger;
    let size = trigger.size;

    let trigger_btn = button(center(text(trigger.label).size(12)))
        .on_press(on_message(ModalMessage::Open))
        .width(Length::Fixed(size))
        .height(Length::Fixed(size))
        .padding(0)
        .style(move |_theme, status| floating_button_style(status, size));

    container(trigger_btn)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(trigger.margin)
        .align_x(Horizontal::Right)
        .align_y(Vertical::Bottom)
        .into()
}
