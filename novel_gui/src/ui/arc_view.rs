//! Arc properties
//!
//! Shows one story arc at a time:
//! - index card (title, description)
//! - "Short name" entry and the number of assigned sections
//! - a button removing all section assignments from the arc
//!
//! Entries are buffered. Nothing reaches the novel before
//! [`ArcView::apply_changes`] runs, and [`ArcView::set_data`] always
//! replaces the buffers with the model's values.

use iced::widget::{button, column, row, text, Space};
use iced::{Alignment, Element, Length, Padding};

use novel_core::{Novel, NovelResult, Translator};

use crate::dialogs::UserPrompt;
use crate::ui::panel::{self, FrameBuilder, PanelMessage};
use crate::Message;

#[derive(Debug, Default)]
pub struct ArcView {
    element_id: Option<String>,
    title: String,
    desc: String,
    short_name: String,

    /// `None` when the arc has no section collection
    section_count: Option<usize>,

    /// Set while a bulk update rewrites the model; blocks commits
    do_not_update: bool,

    /// Application lock: entries read-only, commands disabled
    locked: bool,
}

impl ArcView {
    pub const FRAMES: [FrameBuilder<ArcView>; 3] = [
        ArcView::index_card_frame,
        ArcView::arc_frame,
        ArcView::button_bar_frame,
    ];

    pub fn new() -> Self {
        ArcView::default()
    }

    pub fn element_id(&self) -> Option<&str> {
        self.element_id.as_deref()
    }

    /// Bind the view to an arc and load its values.
    pub fn set_data(&mut self, novel: &Novel, arc_id: &str) -> NovelResult<()> {
        let arc = novel.arc(arc_id)?;
        self.element_id = Some(arc_id.to_string());
        self.title = arc.title.clone();
        self.desc = arc.desc.clone();
        self.short_name = arc.short_name.clone();
        self.section_count = arc.section_count();
        Ok(())
    }

    /// Unbind, e.g. after the displayed arc was deleted.
    pub fn clear(&mut self) {
        *self = ArcView {
            do_not_update: self.do_not_update,
            locked: self.locked,
            ..ArcView::default()
        };
    }

    pub fn set_locked(&mut self, locked: bool) {
        self.locked = locked;
    }

    /// Buffer an entry edit.
    pub fn update(&mut self, message: PanelMessage) {
        match message {
            PanelMessage::TitleChanged(value) => self.title = value,
            PanelMessage::DescChanged(value) => self.desc = value,
            PanelMessage::ShortNameChanged(value) => self.short_name = value,
            _ => {}
        }
    }

    /// Write the buffered entries to the arc.
    ///
    /// Returns whether the arc changed.
    pub fn apply_changes(&self, novel: &mut Novel) -> NovelResult<bool> {
        if self.do_not_update {
            return Ok(false);
        }
        let Some(arc_id) = self.element_id.as_deref() else {
            return Ok(false);
        };
        let arc = novel.arc_mut(arc_id)?;
        let mut changed = false;
        for (field, value) in [
            (&mut arc.title, &self.title),
            (&mut arc.desc, &self.desc),
            (&mut arc.short_name, &self.short_name),
        ] {
            if *field != *value {
                field.clone_from(value);
                changed = true;
            }
        }
        if changed {
            tracing::debug!(arc = %arc_id, "arc properties applied");
        }
        Ok(changed)
    }

    /// Remove all section assignments from the displayed arc after asking the user.
    ///
    /// Returns whether the novel changed.
    pub fn remove_sections(
        &mut self,
        novel: &mut Novel,
        prompt: &mut impl UserPrompt,
        tr: &Translator,
    ) -> NovelResult<bool> {
        let Some(arc_id) = self.element_id.clone() else {
            return Ok(false);
        };
        let short_name = novel.arc(&arc_id)?.short_name.clone();
        let question = format!(
            "{} \"{}\"?",
            tr.translate("Remove all sections from the story arc"),
            short_name
        );
        if !prompt.ask_yes_no(&question) {
            return Ok(false);
        }

        self.do_not_update = true;
        let result = novel
            .clear_arc_sections(&arc_id)
            .and_then(|cleared| {
                if cleared {
                    self.set_data(novel, &arc_id)?;
                }
                Ok(cleared)
            });
        self.do_not_update = false;
        result
    }

    /// "Number of sections: N", or nothing if the arc has no section collection.
    pub fn summary(&self, tr: &Translator) -> Option<String> {
        self.section_count
            .map(|count| format!("{}: {}", tr.translate("Number of sections"), count))
    }

    pub fn view<'a>(&'a self, tr: &'a Translator) -> Element<'a, Message> {
        panel::build_panel(self, tr, &Self::FRAMES).into()
    }

    fn index_card_frame<'a>(&'a self, tr: &'a Translator) -> Element<'a, Message> {
        panel::index_card(&self.title, &self.desc, self.locked, tr)
    }

    fn arc_frame<'a>(&'a self, tr: &'a Translator) -> Element<'a, Message> {
        let short_name =
            panel::labeled_input(tr.translate("Short name"), &self.short_name, self.locked, |value| {
                Message::Panel(PanelMessage::ShortNameChanged(value))
            });
        let sections = row![
            text(self.summary(tr).unwrap_or_default()).size(11),
            Space::new().width(Length::Fill),
            button(text(tr.translate("Clear section assignments")).size(11))
                .on_press_maybe((!self.locked).then_some(Message::Panel(PanelMessage::ClearSections)))
                .padding(Padding::from([4, 8]))
                .style(button::secondary),
        ]
        .align_y(Alignment::Center);

        panel::element_frame(tr.translate("Arc"), column![short_name, sections].spacing(6).into())
    }

    fn button_bar_frame<'a>(&'a self, tr: &'a Translator) -> Element<'a, Message> {
        panel::button_bar(self.locked, tr)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct ScriptedPrompt {
        answer: bool,
        asked: Vec<String>,
    }

    impl ScriptedPrompt {
        fn answering(answer: bool) -> Self {
            ScriptedPrompt { answer, asked: Vec::new() }
        }
    }

    impl UserPrompt for ScriptedPrompt {
        fn ask_yes_no(&mut self, message: &str) -> bool {
            self.asked.push(message.to_string());
            self.answer
        }
    }

    /// ac1 "A" with sections sc1, sc2 and turning point tp1 -> sc1; ac2 "B" without sections.
    fn sample_novel() -> Novel {
        let mut novel = Novel::new("Sample");
        let ch = novel.add_chapter("One");
        let sc1 = novel.add_section(&ch, "Arrival").unwrap();
        let sc2 = novel.add_section(&ch, "Storm").unwrap();
        let ac1 = novel.add_arc("Main plot", "A");
        novel.assign_section(&ac1, &sc1).unwrap();
        novel.assign_section(&ac1, &sc2).unwrap();
        let tp1 = novel.add_turning_point(&ac1, "Landfall").unwrap();
        novel.associate_turning_point(&tp1, &sc1).unwrap();
        novel.add_arc("Backstory", "B");
        novel
    }

    #[test]
    fn test_set_data_loads_fields_and_summary() {
        let novel = sample_novel();
        let mut view = ArcView::new();
        view.set_data(&novel, "ac1").unwrap();

        assert_eq!(view.element_id(), Some("ac1"));
        assert_eq!(view.short_name, "A");
        assert_eq!(
            view.summary(&Translator::default()).as_deref(),
            Some("Number of sections: 2")
        );
    }

    #[test]
    fn test_absent_sections_suppress_summary() {
        let mut novel = sample_novel();
        novel.arc_mut("ac2").unwrap().sections = None;
        let mut view = ArcView::new();

        view.set_data(&novel, "ac1").unwrap();
        view.set_data(&novel, "ac2").unwrap();
        assert_eq!(view.summary(&Translator::default()), None);
    }

    #[test]
    fn test_empty_sections_show_zero() {
        let novel = sample_novel();
        let mut view = ArcView::new();
        view.set_data(&novel, "ac2").unwrap();
        assert_eq!(
            view.summary(&Translator::default()).as_deref(),
            Some("Number of sections: 0")
        );
    }

    #[test]
    fn test_set_data_unknown_id_fails() {
        let novel = sample_novel();
        let mut view = ArcView::new();
        let err = view.set_data(&novel, "ac9").unwrap_err();
        assert_eq!(err.error_code(), "ELEMENT_NOT_FOUND");
        assert_eq!(view.element_id(), None);
    }

    #[test]
    fn test_unapplied_edit_does_not_leak_across_selection() {
        let mut novel = sample_novel();
        let mut view = ArcView::new();
        view.set_data(&novel, "ac1").unwrap();
        view.update(PanelMessage::ShortNameChanged("Edited".to_string()));

        view.set_data(&novel, "ac2").unwrap();
        assert_eq!(view.short_name, "B");
        assert_eq!(novel.arc("ac1").unwrap().short_name, "A");

        // Nothing buffered for ac2 either
        assert!(!view.apply_changes(&mut novel).unwrap());
        assert_eq!(novel.arc("ac2").unwrap().short_name, "B");
    }

    #[test]
    fn test_apply_changes_writes_fields() {
        let mut novel = sample_novel();
        let mut view = ArcView::new();
        view.set_data(&novel, "ac1").unwrap();
        view.update(PanelMessage::ShortNameChanged("Main".to_string()));
        view.update(PanelMessage::TitleChanged("The main plot".to_string()));

        assert!(view.apply_changes(&mut novel).unwrap());
        let arc = novel.arc("ac1").unwrap();
        assert_eq!(arc.short_name, "Main");
        assert_eq!(arc.title, "The main plot");
    }

    #[test]
    fn test_apply_changes_is_idempotent() {
        let mut novel = sample_novel();
        let mut view = ArcView::new();
        view.set_data(&novel, "ac1").unwrap();
        view.update(PanelMessage::ShortNameChanged("Main".to_string()));

        assert!(view.apply_changes(&mut novel).unwrap());
        let once = novel.clone();
        assert!(!view.apply_changes(&mut novel).unwrap());
        assert_eq!(novel, once);
    }

    #[test]
    fn test_apply_changes_unbound_is_noop() {
        let mut novel = sample_novel();
        let before = novel.clone();
        assert!(!ArcView::new().apply_changes(&mut novel).unwrap());
        assert_eq!(novel, before);
    }

    #[test]
    fn test_apply_changes_suppressed_during_bulk_update() {
        let mut novel = sample_novel();
        let mut view = ArcView::new();
        view.set_data(&novel, "ac1").unwrap();
        view.update(PanelMessage::ShortNameChanged("Stale".to_string()));

        view.do_not_update = true;
        assert!(!view.apply_changes(&mut novel).unwrap());
        assert_eq!(novel.arc("ac1").unwrap().short_name, "A");
    }

    #[test]
    fn test_confirmed_remove_sections_clears_back_references() {
        let mut novel = sample_novel();
        let mut view = ArcView::new();
        view.set_data(&novel, "ac1").unwrap();
        let mut prompt = ScriptedPrompt::answering(true);

        assert!(view
            .remove_sections(&mut novel, &mut prompt, &Translator::default())
            .unwrap());

        assert_eq!(prompt.asked, vec!["Remove all sections from the story arc \"A\"?".to_string()]);
        assert_eq!(novel.arc("ac1").unwrap().sections, Some(Vec::new()));
        assert!(novel.sections["sc1"].sc_arcs.is_empty());
        assert!(novel.sections["sc2"].sc_arcs.is_empty());
        assert!(novel.sections["sc1"].sc_turning_points.is_empty());
        assert_eq!(novel.turning_points["tp1"].section_assoc, None);
        assert_eq!(
            view.summary(&Translator::default()).as_deref(),
            Some("Number of sections: 0")
        );
        assert!(!view.do_not_update);
    }

    #[test]
    fn test_remove_sections_discards_buffered_edits() {
        let mut novel = sample_novel();
        let mut view = ArcView::new();
        view.set_data(&novel, "ac1").unwrap();
        view.update(PanelMessage::ShortNameChanged("Unsaved".to_string()));

        view.remove_sections(&mut novel, &mut ScriptedPrompt::answering(true), &Translator::default())
            .unwrap();
        assert_eq!(view.short_name, "A");
        assert_eq!(novel.arc("ac1").unwrap().short_name, "A");
    }

    #[test]
    fn test_declined_remove_sections_changes_nothing() {
        let mut novel = sample_novel();
        let before = novel.clone();
        let mut view = ArcView::new();
        view.set_data(&novel, "ac1").unwrap();
        let mut prompt = ScriptedPrompt::answering(false);

        assert!(!view
            .remove_sections(&mut novel, &mut prompt, &Translator::default())
            .unwrap());
        assert_eq!(prompt.asked.len(), 1);
        assert_eq!(novel, before);
    }

    #[test]
    fn test_remove_sections_without_sections_is_noop() {
        let mut novel = sample_novel();
        let before = novel.clone();
        let mut view = ArcView::new();
        view.set_data(&novel, "ac2").unwrap();

        assert!(!view
            .remove_sections(&mut novel, &mut ScriptedPrompt::answering(true), &Translator::default())
            .unwrap());
        assert_eq!(novel, before);
    }

    #[test]
    fn test_remove_sections_error_releases_guard() {
        let mut novel = sample_novel();
        let mut view = ArcView::new();
        view.set_data(&novel, "ac1").unwrap();
        novel.sections.remove("sc2");

        let result = view.remove_sections(&mut novel, &mut ScriptedPrompt::answering(true), &Translator::default());
        assert!(result.is_err());
        assert!(!view.do_not_update);
    }

    #[test]
    fn test_clear_unbinds() {
        let novel = sample_novel();
        let mut view = ArcView::new();
        view.set_data(&novel, "ac1").unwrap();
        view.clear();
        assert_eq!(view.element_id(), None);
        assert_eq!(view.short_name, "");
        assert_eq!(view.summary(&Translator::default()), None);
    }

    #[test]
    fn test_clear_keeps_lock() {
        let novel = sample_novel();
        let mut view = ArcView::new();
        view.set_locked(true);
        view.set_data(&novel, "ac1").unwrap();
        view.clear();
        assert!(view.locked);

        view.set_locked(false);
        view.clear();
        assert!(!view.locked);
    }
}
