//! Toolbar component
//!
//! Application title, file opening, the application lock and the theme toggle.

use iced::widget::{button, row, text, Space};
use iced::{Alignment, Element, Length, Padding, Theme};

use novel_core::Translator;

use crate::Message;

/// Render the toolbar
pub fn view_toolbar(novel_title: &str, dark_mode: bool, locked: bool, tr: &Translator) -> Element<'static, Message> {
    let theme_label = if dark_mode { tr.translate("Light Mode") } else { tr.translate("Dark Mode") };
    let lock_label = if locked { tr.translate("Unlock") } else { tr.translate("Lock") };

    row![
        text("noveltree").size(22),
        Space::new().width(12),
        text(novel_title.to_string()).size(14),
        Space::new().width(Length::Fill),
        button(text(tr.translate("Open")).size(11))
            .on_press(Message::OpenFile)
            .padding(Padding::from([4, 8]))
            .style(button::secondary),
        button(text(lock_label).size(11))
            .on_press(Message::ToggleLock)
            .padding(Padding::from([4, 8]))
            .style(move |theme: &Theme, status: button::Status| {
                if locked {
                    button::primary(theme, status)
                } else {
                    button::secondary(theme, status)
                }
            }),
        button(text(theme_label).size(11))
            .on_press(Message::ToggleDarkMode)
            .padding(Padding::from([4, 8]))
            .style(button::secondary),
    ]
    .spacing(4)
    .padding(Padding::from([4, 0]))
    .align_y(Alignment::Center)
    .into()
}
