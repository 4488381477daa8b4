//! # novel_core - noveltree Data Model
//!
//! `novel_core` holds the in-memory model of a novel project: chapters,
//! sections, story arcs with their turning points, and locations, ordered
//! by a [`tree::NovelTree`]. The GUI and CLI front ends bind to it.
//!
//! ## Quick Start
//!
//! ```rust
//! use novel_core::novel::Novel;
//!
//! let mut novel = Novel::new("The Lighthouse");
//! let arc = novel.add_arc("Main plot", "A");
//! novel.arc_mut(&arc).unwrap().short_name = "Main".to_string();
//! assert_eq!(novel.arc(&arc).unwrap().short_name, "Main");
//! ```
//!
//! ## Modules
//!
//! - [`novel`] - Novel container and relation-keeping operations
//! - [`elements`] - Element records (arcs, sections, turning points, ...)
//! - [`tree`] - Element order
//! - [`file_io`] - `.novx` file reading
//! - [`i18n`] - Message translation
//! - [`errors`] - Structured error types

pub mod elements;
pub mod errors;
pub mod file_io;
pub mod i18n;
pub mod novel;
pub mod tree;

// Re-export commonly used types at crate root for convenience
pub use elements::{Chapter, Location, Section, StoryArc, TurningPoint};
pub use errors::{NovelError, NovelResult};
pub use file_io::{load_novel, read_locations};
pub use i18n::Translator;
pub use novel::Novel;
pub use tree::NovelTree;
