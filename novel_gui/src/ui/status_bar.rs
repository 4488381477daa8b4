//! Status bar: open novel, element counts, lock state and the last message.

use std::path::Path;

use iced::widget::{row, text, Space};
use iced::{Alignment, Element, Length, Padding};

use novel_core::Translator;

use crate::Message;

/// What the status bar shows about the open novel.
pub struct NovelStatus<'a> {
    pub file: Option<&'a Path>,
    pub is_modified: bool,
    pub locked: bool,
    pub arcs: usize,
    pub locations: usize,
}

pub fn view_status_bar<'a>(novel: NovelStatus<'_>, message: &'a str, tr: &Translator) -> Element<'a, Message> {
    let mut left = novel
        .file
        .and_then(Path::file_name)
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| tr.translate("Untitled"));
    if novel.is_modified {
        left.push_str(" *");
    }

    let counts = format!(
        "{}: {}  {}: {}",
        tr.translate("Arcs"),
        novel.arcs,
        tr.translate("Locations"),
        novel.locations
    );
    let lock = if novel.locked { tr.translate("Locked") } else { String::new() };

    row![
        text(left).size(10),
        text(counts).size(10),
        text(lock).size(10).color([0.6, 0.3, 0.0]),
        Space::new().width(Length::Fill),
        text(message).size(10),
    ]
    .spacing(16)
    .align_y(Alignment::Center)
    .padding(Padding::from([4, 0]))
    .into()
}
