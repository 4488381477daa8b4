//! Collection Box
//!
//! A single-selection list with a button bar holding up to three commands:
//!
//! - **Open** - activatable, bound to Enter and double-click
//! - **Add** - always active
//! - **Remove** - activatable, bound to Delete
//!
//! Each command exists only if the host configured it; an unconfigured
//! command has neither a button nor a key binding. The box does not own
//! the collection semantics: the host fills and changes the list through
//! [`CollectionBox::set_items`] / [`CollectionBox::items_mut`] and reads
//! [`CollectionBox::selection`] when a command message arrives.
//!
//! Focus entering the list and selection changes run the activation
//! handler. Without a host handler the box enables Open and Remove itself.
//!
//! Add and Remove are input commands: [`CollectionBox::lock_inputs`]
//! disables them (button and binding) until the host unlocks the box again,
//! regardless of activation.

use iced::widget::{button, column, container, mouse_area, row, scrollable, text, Column};
use iced::{Element, Length, Padding, Theme};

use novel_core::Translator;

/// Interaction events raised by the list area.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListEvent {
    /// The list received focus
    Focus,
    /// The user clicked the item at this index
    Select(usize),
}

/// Keys the box reacts to while it has focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListKey {
    Enter,
    Delete,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollectionButton {
    Open,
    Add,
    Remove,
}

/// A host command: the message to emit and an optional label override.
#[derive(Debug, Clone)]
pub struct CollectionCommand<M> {
    pub message: M,
    pub label: Option<String>,
}

impl<M> CollectionCommand<M> {
    pub fn new(message: M) -> Self {
        CollectionCommand { message, label: None }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }
}

/// Construction parameters for a [`CollectionBox`].
pub struct CollectionBoxConfig<M> {
    pub open: Option<CollectionCommand<M>>,
    pub add: Option<CollectionCommand<M>>,
    pub remove: Option<CollectionCommand<M>>,

    /// Replaces the default activation (enable Open and Remove)
    pub activate: Option<M>,

    /// Wraps list events into host messages
    pub on_event: fn(ListEvent) -> M,
}

impl<M> CollectionBoxConfig<M> {
    /// A configuration with no commands.
    pub fn new(on_event: fn(ListEvent) -> M) -> Self {
        CollectionBoxConfig {
            open: None,
            add: None,
            remove: None,
            activate: None,
            on_event,
        }
    }
}

#[derive(Debug, Clone)]
struct ButtonSlot<M> {
    label: String,
    message: Option<M>,
    enabled: bool,
    locked: bool,
}

impl<M> ButtonSlot<M> {
    fn new(command: Option<CollectionCommand<M>>, default_label: &str, tr: &Translator) -> Self {
        match command {
            Some(CollectionCommand { message, label }) => ButtonSlot {
                label: label.unwrap_or_else(|| tr.translate(default_label)),
                message: Some(message),
                enabled: true,
                locked: false,
            },
            None => ButtonSlot {
                label: tr.translate(default_label),
                message: None,
                enabled: true,
                locked: false,
            },
        }
    }
}

/// List with Open / Add / Remove buttons.
pub struct CollectionBox<M> {
    items: Vec<String>,
    selection: Option<usize>,
    open: ButtonSlot<M>,
    add: ButtonSlot<M>,
    remove: ButtonSlot<M>,
    activate: Option<M>,
    on_event: fn(ListEvent) -> M,
}

impl<M: Clone> CollectionBox<M> {
    pub fn new(config: CollectionBoxConfig<M>, tr: &Translator) -> Self {
        CollectionBox {
            items: Vec::new(),
            selection: None,
            open: ButtonSlot::new(config.open, "Open", tr),
            add: ButtonSlot::new(config.add, "Add", tr),
            remove: ButtonSlot::new(config.remove, "Remove", tr),
            activate: config.activate,
            on_event: config.on_event,
        }
    }

    pub fn items(&self) -> &[String] {
        &self.items
    }

    #[allow(dead_code)]
    pub fn items_mut(&mut self) -> &mut Vec<String> {
        &mut self.items
    }

    pub fn set_items(&mut self, items: Vec<String>) {
        self.items = items;
    }

    /// Selected index, if it still points into the list.
    pub fn selection(&self) -> Option<usize> {
        self.selection.filter(|&index| index < self.items.len())
    }

    /// Set the selection without running the activation handler.
    pub fn select(&mut self, index: Option<usize>) {
        self.selection = index.filter(|&i| i < self.items.len());
    }

    /// Process a list event.
    ///
    /// Returns the host's activation message if one was configured.
    pub fn handle(&mut self, event: ListEvent) -> Option<M> {
        if let ListEvent::Select(index) = event {
            if index < self.items.len() {
                self.selection = Some(index);
            }
        }
        self.notify_activation()
    }

    fn notify_activation(&mut self) -> Option<M> {
        match &self.activate {
            Some(message) => Some(message.clone()),
            None => {
                self.activate_buttons();
                None
            }
        }
    }

    /// Enable the activatable buttons (Open, Remove).
    pub fn activate_buttons(&mut self) {
        self.open.enabled = true;
        self.remove.enabled = true;
    }

    /// Disable the activatable buttons (Open, Remove).
    pub fn deactivate_buttons(&mut self) {
        self.open.enabled = false;
        self.remove.enabled = false;
    }

    /// Whether the host configured this command.
    pub fn has_button(&self, which: CollectionButton) -> bool {
        self.slot(which).message.is_some()
    }

    /// Whether the command can run now: activated and not locked.
    pub fn is_enabled(&self, which: CollectionButton) -> bool {
        let slot = self.slot(which);
        slot.enabled && !slot.locked
    }

    pub fn label(&self, which: CollectionButton) -> &str {
        &self.slot(which).label
    }

    /// Message bound to a key, if that binding exists and its command is enabled.
    pub fn key_command(&self, key: ListKey) -> Option<M> {
        let which = match key {
            ListKey::Enter => CollectionButton::Open,
            ListKey::Delete => CollectionButton::Remove,
        };
        if self.is_enabled(which) {
            self.slot(which).message.clone()
        } else {
            None
        }
    }

    /// Message bound to a double-click on an item.
    pub fn double_click_command(&self) -> Option<M> {
        self.open.message.clone()
    }

    /// Configured input commands; a host can lock these.
    pub fn input_widgets(&self) -> Vec<CollectionButton> {
        [CollectionButton::Add, CollectionButton::Remove]
            .into_iter()
            .filter(|&which| self.has_button(which))
            .collect()
    }

    /// Lock or unlock the input commands.
    pub fn lock_inputs(&mut self, locked: bool) {
        for which in self.input_widgets() {
            self.slot_mut(which).locked = locked;
        }
    }

    fn slot(&self, which: CollectionButton) -> &ButtonSlot<M> {
        match which {
            CollectionButton::Open => &self.open,
            CollectionButton::Add => &self.add,
            CollectionButton::Remove => &self.remove,
        }
    }

    fn slot_mut(&mut self, which: CollectionButton) -> &mut ButtonSlot<M> {
        match which {
            CollectionButton::Open => &mut self.open,
            CollectionButton::Add => &mut self.add,
            CollectionButton::Remove => &mut self.remove,
        }
    }

    /// Render the button bar and the list.
    pub fn view<'a>(&'a self) -> Element<'a, M>
    where
        M: 'a,
    {
        let mut buttons: Column<'a, M> = column![].spacing(4).width(Length::Fixed(90.0));
        for which in [CollectionButton::Open, CollectionButton::Add, CollectionButton::Remove] {
            if let Some(message) = &self.slot(which).message {
                buttons = buttons.push(
                    button(text(self.label(which)).size(11))
                        .on_press_maybe(self.is_enabled(which).then(|| message.clone()))
                        .padding(Padding::from([4, 8]))
                        .width(Length::Fill)
                        .style(button::secondary),
                );
            }
        }

        let on_event = self.on_event;
        let selected = self.selection();
        let mut rows: Column<'a, M> = column![].spacing(1);
        for (index, item) in self.items.iter().enumerate() {
            let is_selected = selected == Some(index);
            let label = container(text(item.as_str()).size(11))
                .padding(Padding::from([2, 6]))
                .width(Length::Fill)
                .style(move |theme: &Theme| row_style(theme, is_selected));

            let mut area = mouse_area(label).on_press(on_event(ListEvent::Select(index)));
            if let Some(open) = self.double_click_command() {
                area = area.on_double_click(open);
            }
            rows = rows.push(area);
        }

        let list = mouse_area(
            container(scrollable(rows))
                .width(Length::Fill)
                .height(Length::Fill)
                .padding(2)
                .style(container::bordered_box),
        )
        .on_enter(on_event(ListEvent::Focus));

        row![buttons, list].spacing(5).into()
    }
}

fn row_style(theme: &Theme, selected: bool) -> container::Style {
    if selected {
        let palette = theme.extended_palette();
        container::Style {
            background: Some(palette.primary.weak.color.into()),
            text_color: Some(palette.primary.weak.text),
            ..container::Style::default()
        }
    } else {
        container::Style::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[derive(Debug, Clone, PartialEq)]
    enum TestMsg {
        Open,
        Add,
        Remove,
        Activated,
        List(ListEvent),
    }

    fn full_config() -> CollectionBoxConfig<TestMsg> {
        CollectionBoxConfig {
            open: Some(CollectionCommand::new(TestMsg::Open)),
            add: Some(CollectionCommand::new(TestMsg::Add)),
            remove: Some(CollectionCommand::new(TestMsg::Remove)),
            activate: None,
            on_event: TestMsg::List,
        }
    }

    fn items(names: &[&str]) -> Vec<String> {
        names.iter().map(|n| n.to_string()).collect()
    }

    #[test]
    fn test_omitted_commands_have_no_button_or_binding() {
        let config = CollectionBoxConfig {
            add: Some(CollectionCommand::new(TestMsg::Add)),
            ..CollectionBoxConfig::new(TestMsg::List)
        };
        let cbox = CollectionBox::new(config, &Translator::default());

        assert!(!cbox.has_button(CollectionButton::Open));
        assert!(cbox.has_button(CollectionButton::Add));
        assert!(!cbox.has_button(CollectionButton::Remove));
        assert_eq!(cbox.key_command(ListKey::Enter), None);
        assert_eq!(cbox.key_command(ListKey::Delete), None);
        assert_eq!(cbox.double_click_command(), None);
        assert_eq!(cbox.input_widgets(), vec![CollectionButton::Add]);
    }

    #[test]
    fn test_configured_bindings() {
        let cbox = CollectionBox::new(full_config(), &Translator::default());
        assert_eq!(cbox.key_command(ListKey::Enter), Some(TestMsg::Open));
        assert_eq!(cbox.double_click_command(), Some(TestMsg::Open));
        assert_eq!(cbox.key_command(ListKey::Delete), Some(TestMsg::Remove));
        assert_eq!(
            cbox.input_widgets(),
            vec![CollectionButton::Add, CollectionButton::Remove]
        );
    }

    #[test]
    fn test_activate_then_deactivate_leaves_add_alone() {
        let mut cbox = CollectionBox::new(full_config(), &Translator::default());
        cbox.activate_buttons();
        cbox.deactivate_buttons();

        assert!(!cbox.is_enabled(CollectionButton::Open));
        assert!(!cbox.is_enabled(CollectionButton::Remove));
        assert!(cbox.is_enabled(CollectionButton::Add));

        cbox.activate_buttons();
        assert!(cbox.is_enabled(CollectionButton::Open));
        assert!(cbox.is_enabled(CollectionButton::Add));
    }

    #[test]
    fn test_default_activation_enables_buttons() {
        let mut cbox = CollectionBox::new(full_config(), &Translator::default());
        cbox.set_items(items(&["Harbor", "Inn"]));
        cbox.deactivate_buttons();

        assert_eq!(cbox.handle(ListEvent::Select(1)), None);
        assert_eq!(cbox.selection(), Some(1));
        assert!(cbox.is_enabled(CollectionButton::Open));
        assert!(cbox.is_enabled(CollectionButton::Remove));
    }

    #[test]
    fn test_custom_activation_is_delegated() {
        let config = CollectionBoxConfig {
            activate: Some(TestMsg::Activated),
            ..full_config()
        };
        let mut cbox = CollectionBox::new(config, &Translator::default());
        cbox.deactivate_buttons();

        assert_eq!(cbox.handle(ListEvent::Focus), Some(TestMsg::Activated));
        assert!(!cbox.is_enabled(CollectionButton::Open));
        assert!(!cbox.is_enabled(CollectionButton::Remove));
    }

    #[test]
    fn test_selection_follows_content() {
        let mut cbox = CollectionBox::new(full_config(), &Translator::default());
        cbox.set_items(items(&["a", "b", "c"]));
        cbox.handle(ListEvent::Select(2));
        assert_eq!(cbox.selection(), Some(2));

        cbox.items_mut().pop();
        assert_eq!(cbox.selection(), None);

        cbox.handle(ListEvent::Select(7));
        assert_eq!(cbox.selection(), None);

        cbox.select(Some(0));
        assert_eq!(cbox.selection(), Some(0));
    }

    #[test]
    fn test_lock_disables_input_commands_only() {
        let mut cbox = CollectionBox::new(full_config(), &Translator::default());
        cbox.lock_inputs(true);

        assert!(!cbox.is_enabled(CollectionButton::Add));
        assert!(!cbox.is_enabled(CollectionButton::Remove));
        assert!(cbox.is_enabled(CollectionButton::Open));
        assert_eq!(cbox.key_command(ListKey::Delete), None);
        assert_eq!(cbox.key_command(ListKey::Enter), Some(TestMsg::Open));

        // Activation does not bypass the lock
        cbox.activate_buttons();
        assert!(!cbox.is_enabled(CollectionButton::Remove));

        cbox.lock_inputs(false);
        assert!(cbox.is_enabled(CollectionButton::Add));
        assert_eq!(cbox.key_command(ListKey::Delete), Some(TestMsg::Remove));
    }

    #[test]
    fn test_disabled_command_has_no_key_effect() {
        let mut cbox = CollectionBox::new(full_config(), &Translator::default());
        cbox.deactivate_buttons();
        assert_eq!(cbox.key_command(ListKey::Enter), None);
        assert_eq!(cbox.key_command(ListKey::Delete), None);
    }

    #[test]
    fn test_labels_are_translated_or_overridden() {
        let tr = Translator::from_catalog(HashMap::from([
            ("Open".to_string(), "Öffnen".to_string()),
            ("Remove".to_string(), "Entfernen".to_string()),
        ]));
        let config = CollectionBoxConfig {
            add: Some(CollectionCommand::new(TestMsg::Add).with_label("New arc")),
            ..full_config()
        };
        let cbox = CollectionBox::new(config, &tr);

        assert_eq!(cbox.label(CollectionButton::Open), "Öffnen");
        assert_eq!(cbox.label(CollectionButton::Add), "New arc");
        assert_eq!(cbox.label(CollectionButton::Remove), "Entfernen");
    }
}
