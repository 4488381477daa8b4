//! # noveltree GUI Application
//!
//! Graphical editor for the story arcs and locations of a novel project.
//! Built with the Iced framework.
//!
//! ## Layout
//!
//! ```text
//! ┌ toolbar ───────────────────────────────────────┐
//! │ Arcs      [Open][Add][Remove] │ property view   │
//! │ Locations [Open]              │ of open element │
//! └ status bar ────────────────────────────────────┘
//! ```
//!
//! A novel file can be given as the first command line argument; otherwise
//! the last opened file is reloaded.

mod config;
mod dialogs;
mod logging;
mod ui;

use std::path::{Path, PathBuf};

use iced::widget::{column, row};
use iced::{event, keyboard, window, Element, Length, Subscription, Task, Theme};

use novel_core::{load_novel, Novel, NovelError, Translator};

use config::Config;
use dialogs::{NativePrompt, UserPrompt};
use ui::arc_view::ArcView;
use ui::collection_box::{
    CollectionBox, CollectionBoxConfig, CollectionButton, CollectionCommand, ListEvent, ListKey,
};
use ui::location_view::LocationView;
use ui::panel::PanelMessage;

const APP_NAME: &str = "noveltree";

/// Width of the left sidebar
const ITEMS_PANEL_WIDTH: f32 = 320.0;

/// Collections shown in the sidebar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListId {
    Arcs,
    Locations,
}

/// Element kind shown in the properties panel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpenElement {
    Arc,
    Location,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    // Arc collection
    ArcList(ListEvent),
    ArcListActivated,
    OpenArc,
    AddArc,
    RemoveArc,

    // Location collection
    LocationList(ListEvent),
    OpenLocation,

    /// Enter / Delete outside of any text entry
    ListKey(ListKey),

    /// Property view edits and commands
    Panel(PanelMessage),

    OpenFile,
    /// Application lock: the novel becomes read-only
    ToggleLock,
    ToggleDarkMode,
}

pub struct App {
    config: Config,
    translator: Translator,
    novel: Novel,
    current_file: Option<PathBuf>,
    is_modified: bool,
    locked: bool,
    status: String,

    arc_list: CollectionBox<Message>,
    arc_ids: Vec<String>,
    location_list: CollectionBox<Message>,
    location_ids: Vec<String>,
    focused_list: Option<ListId>,

    arc_view: ArcView,
    location_view: LocationView,
    open_element: Option<OpenElement>,
}

pub fn main() -> iced::Result {
    logging::init();

    let config = Config::load();
    let file = std::env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .or_else(|| config.last_file.clone());
    let size = iced::Size::new(config.window_width, config.window_height);
    tracing::info!(version = env!("CARGO_PKG_VERSION"), "starting {}", APP_NAME);

    iced::application(
        move || App::new(config.clone(), file.clone()),
        App::update,
        App::view,
    )
    .title(App::title)
    .theme(App::theme)
    .subscription(App::subscription)
    .window_size(size)
    .run()
}

impl App {
    fn new(config: Config, file: Option<PathBuf>) -> (Self, Task<Message>) {
        let translator = match &config.catalog {
            Some(path) => Translator::load(path).unwrap_or_else(|e| {
                tracing::warn!(error = %e, "using untranslated messages");
                Translator::default()
            }),
            None => Translator::default(),
        };

        let arc_list = CollectionBox::new(
            CollectionBoxConfig {
                open: Some(CollectionCommand::new(Message::OpenArc)),
                add: Some(CollectionCommand::new(Message::AddArc).with_label(translator.translate("Add arc"))),
                remove: Some(CollectionCommand::new(Message::RemoveArc)),
                activate: Some(Message::ArcListActivated),
                on_event: Message::ArcList,
            },
            &translator,
        );
        let location_list = CollectionBox::new(
            CollectionBoxConfig {
                open: Some(CollectionCommand::new(Message::OpenLocation)),
                ..CollectionBoxConfig::new(Message::LocationList)
            },
            &translator,
        );

        let mut app = App {
            config,
            translator,
            novel: Novel::default(),
            current_file: None,
            is_modified: false,
            locked: false,
            status: String::new(),
            arc_list,
            arc_ids: Vec::new(),
            location_list,
            location_ids: Vec::new(),
            focused_list: None,
            arc_view: ArcView::new(),
            location_view: LocationView::new(),
            open_element: None,
        };
        app.refresh_lists();
        app.update_arc_buttons();
        if let Some(path) = file {
            app.load(&path);
        }
        (app, Task::none())
    }

    fn title(&self) -> String {
        let file = self
            .current_file
            .as_deref()
            .and_then(Path::file_name)
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| "Untitled".to_string());
        let modified = if self.is_modified { " *" } else { "" };
        format!("{} - {}{}", APP_NAME, file, modified)
    }

    fn theme(&self) -> Theme {
        if self.config.dark_mode {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    fn subscription(&self) -> Subscription<Message> {
        event::listen_with(list_key)
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::ArcList(list_event) => {
                self.focused_list = Some(ListId::Arcs);
                if let Some(next) = self.arc_list.handle(list_event) {
                    return self.update(next);
                }
            }
            Message::ArcListActivated => self.update_arc_buttons(),
            Message::OpenArc => {
                if let Some(arc_id) = selected_id(&self.arc_list, &self.arc_ids) {
                    match self.arc_view.set_data(&self.novel, &arc_id) {
                        Ok(()) => self.open_element = Some(OpenElement::Arc),
                        Err(e) => self.report(e),
                    }
                }
            }
            Message::AddArc => {
                if !self.arc_list.is_enabled(CollectionButton::Add) {
                    return Task::none();
                }
                let arc_id = self.novel.add_arc(self.translator.translate("New arc"), "");
                self.mark_modified();
                self.refresh_lists();
                self.arc_list
                    .select(self.arc_ids.iter().position(|id| *id == arc_id));
                self.update_arc_buttons();
                return self.update(Message::OpenArc);
            }
            Message::RemoveArc => {
                if !self.arc_list.is_enabled(CollectionButton::Remove) {
                    return Task::none();
                }
                if let Some(arc_id) = selected_id(&self.arc_list, &self.arc_ids) {
                    self.remove_arc(&arc_id, &mut NativePrompt::new(APP_NAME));
                }
            }
            Message::LocationList(list_event) => {
                self.focused_list = Some(ListId::Locations);
                if let Some(next) = self.location_list.handle(list_event) {
                    return self.update(next);
                }
            }
            Message::OpenLocation => {
                if let Some(location_id) = selected_id(&self.location_list, &self.location_ids) {
                    match self.location_view.set_data(&self.novel, &location_id) {
                        Ok(()) => self.open_element = Some(OpenElement::Location),
                        Err(e) => self.report(e),
                    }
                }
            }
            Message::ListKey(key) => {
                let command = match self.focused_list {
                    Some(ListId::Arcs) => self.arc_list.key_command(key),
                    Some(ListId::Locations) => self.location_list.key_command(key),
                    None => None,
                };
                if let Some(next) = command {
                    return self.update(next);
                }
            }
            Message::Panel(panel_message) => {
                self.update_panel(panel_message, &mut NativePrompt::new(APP_NAME))
            }
            Message::OpenFile => {
                if let Some(path) = dialogs::pick_novel_file() {
                    self.load(&path);
                }
            }
            Message::ToggleLock => self.set_locked(!self.locked),
            Message::ToggleDarkMode => {
                self.config.dark_mode = !self.config.dark_mode;
                self.save_config();
            }
        }
        Task::none()
    }

    fn view(&self) -> Element<'_, Message> {
        let tr = &self.translator;
        let toolbar = ui::toolbar::view_toolbar(&self.novel.title, self.config.dark_mode, self.locked, tr);
        let items = ui::items_panel::view_items_panel(
            tr.translate("Arcs"),
            &self.arc_list,
            tr.translate("Locations"),
            &self.location_list,
            ITEMS_PANEL_WIDTH,
        );
        let properties = ui::properties_panel::view_properties_panel(self, tr);
        let status = ui::status_bar::view_status_bar(
            ui::status_bar::NovelStatus {
                file: self.current_file.as_deref(),
                is_modified: self.is_modified,
                locked: self.locked,
                arcs: self.novel.arcs.len(),
                locations: self.novel.locations.len(),
            },
            &self.status,
            tr,
        );

        column![
            toolbar,
            row![items, properties].spacing(8).height(Length::Fill),
            status,
        ]
        .spacing(4)
        .padding(8)
        .into()
    }

    fn update_panel(&mut self, message: PanelMessage, prompt: &mut impl UserPrompt) {
        match (self.open_element, message) {
            _ if self.locked => {}
            (None, _) => {}
            (Some(_), PanelMessage::Apply) => self.apply_panel(),
            (Some(OpenElement::Arc), PanelMessage::ClearSections) => {
                match self
                    .arc_view
                    .remove_sections(&mut self.novel, prompt, &self.translator)
                {
                    Ok(true) => {
                        self.mark_modified();
                        self.status = self.translator.translate("Section assignments removed");
                    }
                    Ok(false) => {}
                    Err(e) => self.report(e),
                }
            }
            (Some(OpenElement::Arc), edit) => self.arc_view.update(edit),
            (Some(OpenElement::Location), edit) => self.location_view.update(edit),
        }
    }

    /// Commit the buffered edits of the open property view.
    fn apply_panel(&mut self) {
        let result = match self.open_element {
            Some(OpenElement::Arc) => self.arc_view.apply_changes(&mut self.novel),
            Some(OpenElement::Location) => self.location_view.apply_changes(&mut self.novel),
            None => Ok(false),
        };
        match result {
            Ok(true) => {
                self.mark_modified();
                self.refresh_lists();
            }
            Ok(false) => {}
            Err(e) => self.report(e),
        }
    }

    fn remove_arc(&mut self, arc_id: &str, prompt: &mut impl UserPrompt) {
        let title = match self.novel.arc(arc_id) {
            Ok(arc) => arc.title.clone(),
            Err(e) => return self.report(e),
        };
        let question = format!("{} \"{}\"?", self.translator.translate("Delete arc"), title);
        if !prompt.ask_yes_no(&question) {
            return;
        }
        match self.novel.delete_arc(arc_id) {
            Ok(_) => {
                if self.arc_view.element_id() == Some(arc_id) {
                    self.arc_view.clear();
                    if self.open_element == Some(OpenElement::Arc) {
                        self.open_element = None;
                    }
                }
                self.mark_modified();
                self.refresh_lists();
                self.arc_list.select(None);
                self.update_arc_buttons();
                self.status = format!("{}: {}", self.translator.translate("Arc deleted"), title);
            }
            Err(e) => self.report(e),
        }
    }

    fn load(&mut self, path: &Path) {
        match load_novel(path) {
            Ok(novel) => {
                self.novel = novel;
                self.current_file = Some(path.to_path_buf());
                self.is_modified = false;
                self.arc_view.clear();
                self.location_view.clear();
                self.open_element = None;
                self.arc_list.select(None);
                self.location_list.select(None);
                self.refresh_lists();
                self.update_arc_buttons();
                self.status = format!("{} {}", self.translator.translate("Opened"), path.display());
                self.config.last_file = Some(path.to_path_buf());
                self.save_config();
            }
            Err(e) => self.report(e),
        }
    }

    /// Rebuild both collection lists from the novel.
    fn refresh_lists(&mut self) {
        let (ids, titles): (Vec<String>, Vec<String>) = self
            .novel
            .arcs_in_order()
            .map(|(id, arc)| (id.to_string(), arc.title.clone()))
            .unzip();
        self.arc_ids = ids;
        self.arc_list.set_items(titles);

        let (ids, titles): (Vec<String>, Vec<String>) = self
            .novel
            .locations_in_order()
            .map(|(id, location)| (id.to_string(), location.title.clone()))
            .unzip();
        self.location_ids = ids;
        self.location_list.set_items(titles);
    }

    /// Open and Remove only make sense with a selected arc.
    fn update_arc_buttons(&mut self) {
        if self.arc_list.selection().is_some() {
            self.arc_list.activate_buttons();
        } else {
            self.arc_list.deactivate_buttons();
        }
    }

    /// Lock or unlock the novel. Pending panel edits are committed first.
    fn set_locked(&mut self, locked: bool) {
        if locked == self.locked {
            return;
        }
        if locked {
            self.apply_panel();
        }
        self.locked = locked;
        self.arc_list.lock_inputs(locked);
        self.location_list.lock_inputs(locked);
        self.arc_view.set_locked(locked);
        self.location_view.set_locked(locked);
        self.status = self.translator.translate(if locked { "Locked" } else { "Unlocked" });
        tracing::info!(locked, "application lock changed");
    }

    fn mark_modified(&mut self) {
        self.is_modified = true;
    }

    fn save_config(&self) {
        if let Err(e) = self.config.save() {
            tracing::warn!(error = %e, "settings not saved");
        }
    }

    fn report(&mut self, error: NovelError) {
        tracing::error!(code = error.error_code(), "{}", error);
        self.status = format!("Error: {}", error);
    }
}

/// Id behind the selected row of a collection box.
fn selected_id(list: &CollectionBox<Message>, ids: &[String]) -> Option<String> {
    list.selection().and_then(|index| ids.get(index)).cloned()
}

/// Route Enter and Delete to the focused collection unless a widget took them.
fn list_key(event: iced::Event, status: event::Status, _window: window::Id) -> Option<Message> {
    if matches!(status, event::Status::Captured) {
        return None;
    }
    match event {
        iced::Event::Keyboard(keyboard::Event::KeyPressed {
            key: keyboard::Key::Named(named),
            ..
        }) => match named {
            keyboard::key::Named::Enter => Some(Message::ListKey(ListKey::Enter)),
            keyboard::key::Named::Delete => Some(Message::ListKey(ListKey::Delete)),
            _ => None,
        },
        _ => None,
    }
}
