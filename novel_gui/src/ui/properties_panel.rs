//! Properties Panel (Right Side)
//!
//! Dispatches to the property view of the open element:
//! - Arc -> arc_view
//! - Location -> location_view
//! - nothing bound -> hint text
//!
//! Leaving the panel with the pointer counts as focus loss and commits the
//! buffered edits.

use iced::widget::{container, mouse_area, scrollable, text, Column};
use iced::{Element, Length};

use novel_core::Translator;

use crate::ui::panel::PanelMessage;
use crate::{App, OpenElement, Message};

/// Render the property view of the open element
pub fn view_properties_panel<'a>(app: &'a App, tr: &'a Translator) -> Element<'a, Message> {
    let content: Element<'a, Message> = match app.open_element {
        Some(OpenElement::Arc) if app.arc_view.element_id().is_some() => app.arc_view.view(tr),
        Some(OpenElement::Location) if app.location_view.element_id().is_some() => {
            app.location_view.view(tr)
        }
        _ => Column::new()
            .push(
                text(tr.translate("Select an arc or a location from the left panel"))
                    .size(14)
                    .color([0.5, 0.5, 0.5]),
            )
            .into(),
    };

    let panel = container(scrollable(container(content).padding(8)))
        .width(Length::Fill)
        .height(Length::Fill)
        .style(container::bordered_box)
        .padding(5);

    mouse_area(panel)
        .on_exit(Message::Panel(PanelMessage::Apply))
        .into()
}
