//! UI module for the noveltree GUI
//!
//! # Panel Structure
//! - `toolbar` - Title, Open file, lock, theme toggle
//! - `items_panel` - Left sidebar: arc and location collections
//! - `properties_panel` - Right side: dispatches to the element property views
//! - `status_bar` - File, counts, lock state and status messages
//!
//! # Property Views
//! - `arc_view` - Title, description, short name, section assignments
//! - `location_view` - Title, description, aka
//! - `panel` - Frame builders shared by the property views
//!
//! # Widgets
//! - `collection_box` - List with Open / Add / Remove buttons

// Top-level panels
pub mod toolbar;
pub mod items_panel;
pub mod properties_panel;
pub mod status_bar;

// Property views
pub mod panel;
pub mod arc_view;
pub mod location_view;

// Widgets
pub mod collection_box;
