//! # Novel Data Structures
//!
//! The `Novel` struct is the root container for all elements of a novel
//! project. Elements are stored in id-keyed maps; their order lives in the
//! [`NovelTree`].
//!
//! ## Structure
//!
//! ```text
//! Novel
//! ├── chapters / sections        (CH root)
//! ├── arcs / turning_points      (AC root)
//! ├── locations                  (LC root)
//! └── tree: NovelTree
//! ```
//!
//! ## Referential integrity
//!
//! An arc lists its sections in `StoryArc::sections`; every listed section
//! names the arc in `Section::sc_arcs`. A turning point with a section
//! association has a matching `Section::sc_turning_points` entry. All
//! mutating operations here keep both directions in step.
//!
//! ## Example
//!
//! ```rust
//! use novel_core::novel::Novel;
//!
//! let mut novel = Novel::new("The Long Way Home");
//! let ch = novel.add_chapter("Chapter One");
//! let sc = novel.add_section(&ch, "Departure").unwrap();
//! let ac = novel.add_arc("Main plot", "A");
//! novel.assign_section(&ac, &sc).unwrap();
//!
//! assert_eq!(novel.sections[&sc].sc_arcs, vec![ac.clone()]);
//! assert!(novel.clear_arc_sections(&ac).unwrap());
//! assert!(novel.sections[&sc].sc_arcs.is_empty());
//! ```

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::elements::{Chapter, Location, Section, StoryArc, TurningPoint};
use crate::errors::{NovelError, NovelResult};
use crate::tree::{NovelTree, AC_ROOT, CH_ROOT, LC_ROOT};

/// Root container for a novel project.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Novel {
    pub title: String,
    pub author: String,
    pub chapters: HashMap<String, Chapter>,
    pub sections: HashMap<String, Section>,
    pub arcs: HashMap<String, StoryArc>,
    pub turning_points: HashMap<String, TurningPoint>,
    pub locations: HashMap<String, Location>,
    pub tree: NovelTree,
}

impl Default for Novel {
    fn default() -> Self {
        Novel::new("")
    }
}

impl Novel {
    /// Create an empty novel.
    pub fn new(title: impl Into<String>) -> Self {
        Novel {
            title: title.into(),
            author: String::new(),
            chapters: HashMap::new(),
            sections: HashMap::new(),
            arcs: HashMap::new(),
            turning_points: HashMap::new(),
            locations: HashMap::new(),
            tree: NovelTree::new(),
        }
    }

    pub fn arc(&self, id: &str) -> NovelResult<&StoryArc> {
        self.arcs.get(id).ok_or_else(|| NovelError::not_found("Arc", id))
    }

    pub fn arc_mut(&mut self, id: &str) -> NovelResult<&mut StoryArc> {
        self.arcs.get_mut(id).ok_or_else(|| NovelError::not_found("Arc", id))
    }

    pub fn section(&self, id: &str) -> NovelResult<&Section> {
        self.sections.get(id).ok_or_else(|| NovelError::not_found("Section", id))
    }

    pub fn location(&self, id: &str) -> NovelResult<&Location> {
        self.locations.get(id).ok_or_else(|| NovelError::not_found("Location", id))
    }

    pub fn location_mut(&mut self, id: &str) -> NovelResult<&mut Location> {
        self.locations
            .get_mut(id)
            .ok_or_else(|| NovelError::not_found("Location", id))
    }

    /// Arcs in tree order.
    pub fn arcs_in_order(&self) -> impl Iterator<Item = (&str, &StoryArc)> + '_ {
        self.tree
            .get_children(AC_ROOT)
            .iter()
            .filter_map(|id| self.arcs.get(id).map(|arc| (id.as_str(), arc)))
    }

    /// Locations in tree order.
    pub fn locations_in_order(&self) -> impl Iterator<Item = (&str, &Location)> + '_ {
        self.tree
            .get_children(LC_ROOT)
            .iter()
            .filter_map(|id| self.locations.get(id).map(|lc| (id.as_str(), lc)))
    }

    pub fn add_chapter(&mut self, title: impl Into<String>) -> String {
        let id = new_id("ch", &self.chapters);
        self.chapters.insert(
            id.clone(),
            Chapter {
                title: title.into(),
                ..Default::default()
            },
        );
        self.tree.append(CH_ROOT, id.clone());
        id
    }

    pub fn add_section(&mut self, chapter_id: &str, title: impl Into<String>) -> NovelResult<String> {
        if !self.chapters.contains_key(chapter_id) {
            return Err(NovelError::not_found("Chapter", chapter_id));
        }
        let id = new_id("sc", &self.sections);
        self.sections.insert(
            id.clone(),
            Section {
                title: title.into(),
                ..Default::default()
            },
        );
        self.tree.append(chapter_id, id.clone());
        Ok(id)
    }

    pub fn add_arc(&mut self, title: impl Into<String>, short_name: impl Into<String>) -> String {
        let id = new_id("ac", &self.arcs);
        self.arcs.insert(id.clone(), StoryArc::new(title, short_name));
        self.tree.append(AC_ROOT, id.clone());
        tracing::debug!(arc = %id, "arc added");
        id
    }

    pub fn add_turning_point(&mut self, arc_id: &str, title: impl Into<String>) -> NovelResult<String> {
        self.arc(arc_id)?;
        let id = new_id("tp", &self.turning_points);
        self.turning_points.insert(
            id.clone(),
            TurningPoint {
                title: title.into(),
                ..Default::default()
            },
        );
        self.tree.append(arc_id, id.clone());
        Ok(id)
    }

    pub fn add_location(&mut self, title: impl Into<String>) -> String {
        let id = new_id("lc", &self.locations);
        self.locations.insert(id.clone(), Location::new(title));
        self.tree.append(LC_ROOT, id.clone());
        id
    }

    /// Assign a section to an arc, updating the section's back-reference.
    ///
    /// Assigning twice is a no-op. An absent section collection is created.
    pub fn assign_section(&mut self, arc_id: &str, section_id: &str) -> NovelResult<()> {
        self.section(section_id)?;
        let arc = self.arc_mut(arc_id)?;
        let sections = arc.sections.get_or_insert_with(Vec::new);
        if !sections.iter().any(|id| id == section_id) {
            sections.push(section_id.to_string());
        }

        let section = self
            .sections
            .get_mut(section_id)
            .ok_or_else(|| NovelError::not_found("Section", section_id))?;
        if !section.sc_arcs.iter().any(|id| id == arc_id) {
            section.sc_arcs.push(arc_id.to_string());
        }
        Ok(())
    }

    /// Associate a turning point with a section.
    ///
    /// A previous association of the turning point is released first.
    pub fn associate_turning_point(&mut self, tp_id: &str, section_id: &str) -> NovelResult<()> {
        self.section(section_id)?;
        let arc_id = self
            .tree
            .parent(tp_id)
            .map(str::to_string)
            .ok_or_else(|| NovelError::not_found("Turning point", tp_id))?;
        let point = self
            .turning_points
            .get_mut(tp_id)
            .ok_or_else(|| NovelError::not_found("Turning point", tp_id))?;

        if let Some(previous) = point.section_assoc.replace(section_id.to_string()) {
            if let Some(section) = self.sections.get_mut(&previous) {
                section.sc_turning_points.remove(tp_id);
            }
        }
        if let Some(section) = self.sections.get_mut(section_id) {
            section.sc_turning_points.insert(tp_id.to_string(), arc_id);
        }
        Ok(())
    }

    /// Remove all section assignments from an arc.
    ///
    /// Removes the arc from every assigned section's `sc_arcs`, releases the
    /// section associations of the arc's turning points, and leaves the arc
    /// with an empty section list. Returns `false` without touching anything
    /// if the arc has no sections (absent or empty).
    ///
    /// All referenced ids are checked before the first write, so a dangling
    /// id leaves the novel unchanged. A back-reference that is already
    /// missing on the section side is skipped with a warning.
    pub fn clear_arc_sections(&mut self, arc_id: &str) -> NovelResult<bool> {
        let sections = match &self.arc(arc_id)?.sections {
            Some(sections) if !sections.is_empty() => sections.clone(),
            _ => return Ok(false),
        };
        let points: Vec<String> = self.tree.get_children(arc_id).to_vec();

        for sc_id in &sections {
            self.section(sc_id)?;
        }
        for tp_id in &points {
            let point = self
                .turning_points
                .get(tp_id)
                .ok_or_else(|| NovelError::not_found("Turning point", tp_id))?;
            if let Some(sc_id) = &point.section_assoc {
                self.section(sc_id)?;
            }
        }

        for sc_id in &sections {
            if let Some(section) = self.sections.get_mut(sc_id) {
                let before = section.sc_arcs.len();
                section.sc_arcs.retain(|id| id != arc_id);
                if section.sc_arcs.len() == before {
                    tracing::warn!(arc = %arc_id, section = %sc_id, "section has no back-reference to arc");
                }
            }
        }

        for tp_id in &points {
            let Some(point) = self.turning_points.get_mut(tp_id) else {
                continue;
            };
            if let Some(sc_id) = point.section_assoc.take() {
                let removed = self
                    .sections
                    .get_mut(&sc_id)
                    .and_then(|section| section.sc_turning_points.remove(tp_id));
                if removed.is_none() {
                    tracing::warn!(turning_point = %tp_id, section = %sc_id, "section has no entry for turning point");
                }
            }
        }

        self.arc_mut(arc_id)?.sections = Some(Vec::new());
        tracing::info!(arc = %arc_id, cleared = sections.len(), "section assignments removed");
        Ok(true)
    }

    /// Delete an arc together with its turning points.
    ///
    /// Section back-references and turning point associations are cleaned
    /// up first.
    pub fn delete_arc(&mut self, arc_id: &str) -> NovelResult<StoryArc> {
        self.clear_arc_sections(arc_id)?;

        for tp_id in self.tree.delete(arc_id) {
            if let Some(point) = self.turning_points.remove(&tp_id) {
                if let Some(sc_id) = point.section_assoc {
                    if let Some(section) = self.sections.get_mut(&sc_id) {
                        section.sc_turning_points.remove(&tp_id);
                    }
                }
            }
        }

        let arc = self
            .arcs
            .remove(arc_id)
            .ok_or_else(|| NovelError::not_found("Arc", arc_id))?;
        tracing::info!(arc = %arc_id, "arc deleted");
        Ok(arc)
    }
}

/// Next free id of the form `<prefix><n>`, counting from 1.
fn new_id<T>(prefix: &str, existing: &HashMap<String, T>) -> String {
    let mut n = 1usize;
    loop {
        let id = format!("{}{}", prefix, n);
        if !existing.contains_key(&id) {
            return id;
        }
        n += 1;
    }
}
