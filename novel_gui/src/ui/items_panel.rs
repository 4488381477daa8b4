//! Items Panel (Left Sidebar)
//!
//! Stacks the element collections of the novel:
//! - Arcs (Open, Add, Remove)
//! - Locations (Open)

use iced::widget::{column, container, rule, text, Space};
use iced::{Element, Length};

use crate::ui::collection_box::CollectionBox;
use crate::Message;

/// Render the items panel (left sidebar)
pub fn view_items_panel<'a>(
    arcs_heading: String,
    arcs: &'a CollectionBox<Message>,
    locations_heading: String,
    locations: &'a CollectionBox<Message>,
    width: f32,
) -> Element<'a, Message> {
    let panel_content = column![
        text(format!("{} ({})", arcs_heading, arcs.items().len())).size(12),
        container(arcs.view()).height(Length::FillPortion(1)),
        Space::new().height(4),
        rule::horizontal(1),
        text(format!("{} ({})", locations_heading, locations.items().len())).size(12),
        container(locations.view()).height(Length::FillPortion(1)),
    ]
    .spacing(4);

    container(panel_content)
        .width(Length::Fixed(width))
        .height(Length::Fill)
        .style(container::bordered_box)
        .padding(6)
        .into()
}
