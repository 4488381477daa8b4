//! Property panel frames
//!
//! A property panel is a column of frames. Each concrete panel lists its
//! frame builders in display order; [`build_panel`] composes them. The
//! shared frames (index card, button bar) live here so every panel renders
//! them the same way.
//!
//! A locked panel renders its entries read-only and its commands disabled.

use iced::widget::{button, column, container, row, text, text_input, Column, Space};
use iced::{Alignment, Element, Length, Padding};

use novel_core::Translator;

use crate::Message;

/// Edits and commands coming from a property panel.
#[derive(Debug, Clone, PartialEq)]
pub enum PanelMessage {
    TitleChanged(String),
    DescChanged(String),
    ShortNameChanged(String),
    AkaChanged(String),
    /// Commit the buffered edits (Enter, Apply button, focus leaving the panel)
    Apply,
    /// Remove all section assignments from the displayed arc
    ClearSections,
}

/// Builds one frame of a panel of type `V`.
pub type FrameBuilder<V> = for<'a> fn(&'a V, &'a Translator) -> Element<'a, Message>;

/// Stack the frames of a panel in the given order.
pub fn build_panel<'a, V>(view: &'a V, tr: &'a Translator, frames: &[FrameBuilder<V>]) -> Column<'a, Message> {
    frames
        .iter()
        .fold(column![].spacing(10), |panel, build| panel.push(build(view, tr)))
}

/// Title and description entries.
pub fn index_card<'a>(title: &'a str, desc: &'a str, locked: bool, tr: &Translator) -> Element<'a, Message> {
    column![
        labeled_input(tr.translate("Title"), title, locked, |value| {
            Message::Panel(PanelMessage::TitleChanged(value))
        }),
        labeled_input(tr.translate("Description"), desc, locked, |value| {
            Message::Panel(PanelMessage::DescChanged(value))
        }),
    ]
    .spacing(6)
    .into()
}

/// Bottom bar with the explicit Apply command.
pub fn button_bar<'a>(locked: bool, tr: &Translator) -> Element<'a, Message> {
    row![
        Space::new().width(Length::Fill),
        button(text(tr.translate("Apply")).size(11))
            .on_press_maybe((!locked).then_some(Message::Panel(PanelMessage::Apply)))
            .padding(Padding::from([4, 12]))
            .style(button::primary),
    ]
    .align_y(Alignment::Center)
    .into()
}

/// Labeled entry. Enter commits the panel; a locked entry is read-only.
pub fn labeled_input<'a>(
    label: String,
    value: &'a str,
    locked: bool,
    on_change: impl Fn(String) -> Message + 'a,
) -> Element<'a, Message> {
    let mut input = text_input("", value).width(Length::Fill).padding(4).size(11);
    if !locked {
        input = input
            .on_input(on_change)
            .on_submit(Message::Panel(PanelMessage::Apply));
    }
    row![
        text(label).size(11).width(Length::Fixed(140.0)),
        input,
    ]
    .align_y(Alignment::Center)
    .into()
}

/// Frame with a heading, used for element specific widgets.
pub fn element_frame<'a>(heading: String, content: Element<'a, Message>) -> Element<'a, Message> {
    container(column![text(heading).size(13), content].spacing(6))
        .padding(8)
        .width(Length::Fill)
        .style(container::bordered_box)
        .into()
}
