//! # Novel Elements
//!
//! Plain data records for the elements of a novel. Relations between
//! elements are stored as id strings; [`Novel`](crate::novel::Novel) keeps
//! both directions of every relation consistent.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// A chapter. Its sections are its children in the tree.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Chapter {
    pub title: String,
    pub desc: String,
}

/// A section (scene) of the novel.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Section {
    pub title: String,
    pub desc: String,

    /// Ids of the arcs this section is assigned to
    pub sc_arcs: Vec<String>,

    /// Turning points associated with this section: turning point id -> arc id
    pub sc_turning_points: HashMap<String, String>,
}

/// A story arc.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct StoryArc {
    pub title: String,
    pub desc: String,

    /// Short name, used as arc label in section views
    pub short_name: String,

    /// Ids of the sections assigned to this arc.
    ///
    /// `None` means the collection was never set up, which is not the
    /// same as an empty assignment list.
    pub sections: Option<Vec<String>>,
}

impl StoryArc {
    pub fn new(title: impl Into<String>, short_name: impl Into<String>) -> Self {
        StoryArc {
            title: title.into(),
            short_name: short_name.into(),
            sections: Some(Vec::new()),
            ..Default::default()
        }
    }

    /// Number of assigned sections, `None` if the collection is absent.
    pub fn section_count(&self) -> Option<usize> {
        self.sections.as_ref().map(Vec::len)
    }
}

/// A turning point. Turning points are tree children of their arc.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct TurningPoint {
    pub title: String,
    pub desc: String,

    /// Id of the section this turning point happens in
    pub section_assoc: Option<String>,
}

/// A location.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Location {
    pub title: String,
    pub desc: String,
    pub aka: String,
}

impl Location {
    pub fn new(title: impl Into<String>) -> Self {
        Location {
            title: title.into(),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_sections_differ_from_empty() {
        let mut arc = StoryArc::new("Main plot", "A");
        assert_eq!(arc.section_count(), Some(0));

        arc.sections = None;
        assert_eq!(arc.section_count(), None);
    }

    #[test]
    fn test_arc_serialization_keeps_absent_sections() {
        let arc = StoryArc {
            title: "Subplot".to_string(),
            short_name: "B".to_string(),
            ..Default::default()
        };
        let json = serde_json::to_string(&arc).unwrap();
        assert!(json.contains("\"sections\":null"));

        let roundtrip: StoryArc = serde_json::from_str(&json).unwrap();
        assert_eq!(roundtrip, arc);
    }
}
