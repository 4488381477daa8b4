//! Location properties: index card plus an "Aka" entry.

use iced::Element;

use novel_core::{Novel, NovelResult, Translator};

use crate::ui::panel::{self, FrameBuilder, PanelMessage};
use crate::Message;

#[derive(Debug, Default)]
pub struct LocationView {
    element_id: Option<String>,
    title: String,
    desc: String,
    aka: String,
    locked: bool,
}

impl LocationView {
    pub const FRAMES: [FrameBuilder<LocationView>; 3] = [
        LocationView::index_card_frame,
        LocationView::location_frame,
        LocationView::button_bar_frame,
    ];

    pub fn new() -> Self {
        LocationView::default()
    }

    pub fn element_id(&self) -> Option<&str> {
        self.element_id.as_deref()
    }

    /// Unbind, keeping the lock state.
    pub fn clear(&mut self) {
        *self = LocationView {
            locked: self.locked,
            ..LocationView::default()
        };
    }

    pub fn set_locked(&mut self, locked: bool) {
        self.locked = locked;
    }

    pub fn set_data(&mut self, novel: &Novel, location_id: &str) -> NovelResult<()> {
        let location = novel.location(location_id)?;
        self.element_id = Some(location_id.to_string());
        self.title = location.title.clone();
        self.desc = location.desc.clone();
        self.aka = location.aka.clone();
        Ok(())
    }

    pub fn update(&mut self, message: PanelMessage) {
        match message {
            PanelMessage::TitleChanged(value) => self.title = value,
            PanelMessage::DescChanged(value) => self.desc = value,
            PanelMessage::AkaChanged(value) => self.aka = value,
            _ => {}
        }
    }

    /// Write the buffered entries to the location. Returns whether it changed.
    pub fn apply_changes(&self, novel: &mut Novel) -> NovelResult<bool> {
        let Some(location_id) = self.element_id.as_deref() else {
            return Ok(false);
        };
        let location = novel.location_mut(location_id)?;
        let mut changed = false;
        for (field, value) in [
            (&mut location.title, &self.title),
            (&mut location.desc, &self.desc),
            (&mut location.aka, &self.aka),
        ] {
            if *field != *value {
                field.clone_from(value);
                changed = true;
            }
        }
        Ok(changed)
    }

    pub fn view<'a>(&'a self, tr: &'a Translator) -> Element<'a, Message> {
        panel::build_panel(self, tr, &Self::FRAMES).into()
    }

    fn index_card_frame<'a>(&'a self, tr: &'a Translator) -> Element<'a, Message> {
        panel::index_card(&self.title, &self.desc, self.locked, tr)
    }

    fn location_frame<'a>(&'a self, tr: &'a Translator) -> Element<'a, Message> {
        let aka = panel::labeled_input(tr.translate("Aka"), &self.aka, self.locked, |value| {
            Message::Panel(PanelMessage::AkaChanged(value))
        });
        panel::element_frame(tr.translate("Location"), aka)
    }

    fn button_bar_frame<'a>(&'a self, tr: &'a Translator) -> Element<'a, Message> {
        panel::button_bar(self.locked, tr)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edit_and_apply() {
        let mut novel = Novel::new("Places");
        let lc = novel.add_location("Harbor");
        let mut view = LocationView::new();
        view.set_data(&novel, &lc).unwrap();
        view.update(PanelMessage::AkaChanged("The Docks".to_string()));

        assert!(view.apply_changes(&mut novel).unwrap());
        assert!(!view.apply_changes(&mut novel).unwrap());
        assert_eq!(novel.locations[&lc].aka, "The Docks");
        assert_eq!(novel.locations[&lc].title, "Harbor");
    }

    #[test]
    fn test_switching_discards_buffer() {
        let mut novel = Novel::new("Places");
        let first = novel.add_location("Harbor");
        let second = novel.add_location("Inn");
        let mut view = LocationView::new();
        view.set_data(&novel, &first).unwrap();
        view.update(PanelMessage::TitleChanged("Port".to_string()));

        view.set_data(&novel, &second).unwrap();
        assert!(!view.apply_changes(&mut novel).unwrap());
        assert_eq!(novel.locations[&first].title, "Harbor");
        assert_eq!(view.element_id(), Some(second.as_str()));
    }

    #[test]
    fn test_clear_keeps_lock() {
        let novel = {
            let mut novel = Novel::new("Places");
            novel.add_location("Harbor");
            novel
        };
        let mut view = LocationView::new();
        view.set_locked(true);
        view.set_data(&novel, "lc1").unwrap();

        view.clear();
        assert_eq!(view.element_id(), None);
        assert!(view.locked);
    }
}
