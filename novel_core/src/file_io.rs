//! # File I/O Module
//!
//! Reads novel projects from `.novx` files (XML).
//!
//! ## File Format
//!
//! ```text
//! <novx version="1.4">
//!   <PROJECT><Title/><Author/></PROJECT>
//!   <CHAPTERS>
//!     <CHAPTER id="ch1"><Title/>
//!       <SECTION id="sc1"><Title/><Desc><p/></Desc></SECTION>
//!     </CHAPTER>
//!   </CHAPTERS>
//!   <ARCS>
//!     <ARC id="ac1"><Title/><ShortName/><Desc/><Sections ids="sc1 sc2"/>
//!       <POINT id="tp1"><Title/><Desc/><Section id="sc1"/></POINT>
//!     </ARC>
//!   </ARCS>
//!   <LOCATIONS>
//!     <LOCATION id="lc1"><Title/><Aka/><Desc/></LOCATION>
//!   </LOCATIONS>
//! </novx>
//! ```
//!
//! Relations are stored on one side only (arc -> sections, turning point ->
//! section). The back-references held by sections are rebuilt on load.
//! An `ARC` without a `Sections` element has an absent section collection.
//!
//! ## Example
//!
//! ```rust,no_run
//! use novel_core::file_io::load_novel;
//! use std::path::Path;
//!
//! let novel = load_novel(Path::new("mynovel.novx"))?;
//! for (_, location) in novel.locations_in_order() {
//!     println!("{}", location.title);
//! }
//! # Ok::<(), novel_core::errors::NovelError>(())
//! ```

use std::fs;
use std::path::Path;

use roxmltree::{Document, Node};

use crate::elements::{Chapter, Location, Section, StoryArc, TurningPoint};
use crate::errors::{NovelError, NovelResult};
use crate::novel::Novel;
use crate::tree::{AC_ROOT, CH_ROOT, LC_ROOT};

/// Newest file format version this reader understands
pub const FORMAT_VERSION: &str = "1.4";

/// Load a novel from a `.novx` file.
///
/// # Returns
///
/// * `Ok(Novel)` - Successfully loaded novel
/// * `Err(NovelError::FileError)` - I/O error
/// * `Err(NovelError::ParseError)` - Not a well-formed novx document
/// * `Err(NovelError::VersionMismatch)` - File version is incompatible
pub fn load_novel(path: &Path) -> NovelResult<Novel> {
    let contents = fs::read_to_string(path).map_err(|e| {
        NovelError::file_error("read", path.display().to_string(), e.to_string())
    })?;
    let novel = parse_novx(&contents, &path.display().to_string())?;
    tracing::info!(
        path = %path.display(),
        arcs = novel.arcs.len(),
        locations = novel.locations.len(),
        "novel loaded"
    );
    Ok(novel)
}

/// Read only the locations of a `.novx` file, in file order.
pub fn read_locations(path: &Path) -> NovelResult<Vec<Location>> {
    let novel = load_novel(path)?;
    Ok(novel.locations_in_order().map(|(_, lc)| lc.clone()).collect())
}

/// Parse novx XML text. `source` names the input in error messages.
pub fn parse_novx(xml: &str, source: &str) -> NovelResult<Novel> {
    let doc = Document::parse(xml).map_err(|e| NovelError::parse_error(source, e.to_string()))?;
    let root = doc.root_element();
    if root.tag_name().name() != "novx" {
        return Err(NovelError::parse_error(
            source,
            format!("expected <novx> root element, found <{}>", root.tag_name().name()),
        ));
    }
    let version = root
        .attribute("version")
        .ok_or_else(|| NovelError::parse_error(source, "missing version attribute"))?;
    validate_version(version)?;

    let mut novel = Novel::new("");
    if let Some(project) = child(root, "PROJECT") {
        novel.title = child_text(project, "Title");
        novel.author = child_text(project, "Author");
    }

    if let Some(chapters) = child(root, "CHAPTERS") {
        for chapter in children_named(chapters, "CHAPTER") {
            let ch_id = element_id(chapter, source)?;
            novel.chapters.insert(
                ch_id.clone(),
                Chapter {
                    title: child_text(chapter, "Title"),
                    desc: paragraphs(chapter),
                },
            );
            novel.tree.append(CH_ROOT, ch_id.clone());
            for section in children_named(chapter, "SECTION") {
                let sc_id = element_id(section, source)?;
                novel.sections.insert(
                    sc_id.clone(),
                    Section {
                        title: child_text(section, "Title"),
                        desc: paragraphs(section),
                        ..Default::default()
                    },
                );
                novel.tree.append(&ch_id, sc_id);
            }
        }
    }

    if let Some(arcs) = child(root, "ARCS") {
        for arc in children_named(arcs, "ARC") {
            read_arc(&mut novel, arc, source)?;
        }
    }

    if let Some(locations) = child(root, "LOCATIONS") {
        for location in children_named(locations, "LOCATION") {
            let lc_id = element_id(location, source)?;
            novel.locations.insert(
                lc_id.clone(),
                Location {
                    title: child_text(location, "Title"),
                    desc: paragraphs(location),
                    aka: child_text(location, "Aka"),
                },
            );
            novel.tree.append(LC_ROOT, lc_id);
        }
    }

    Ok(novel)
}

/// Read one ARC element with its turning points and rebuild the back-references.
fn read_arc(novel: &mut Novel, arc: Node<'_, '_>, source: &str) -> NovelResult<()> {
    let ac_id = element_id(arc, source)?;

    let sections = child(arc, "Sections").map(|node| {
        let mut ids: Vec<String> = Vec::new();
        for sc_id in node.attribute("ids").unwrap_or_default().split_whitespace() {
            if !novel.sections.contains_key(sc_id) {
                tracing::warn!(arc = %ac_id, section = %sc_id, "dropping reference to unknown section");
            } else if ids.iter().any(|id| id == sc_id) {
                tracing::warn!(arc = %ac_id, section = %sc_id, "dropping duplicate section reference");
            } else {
                ids.push(sc_id.to_string());
            }
        }
        ids
    });
    for sc_id in sections.iter().flatten() {
        if let Some(section) = novel.sections.get_mut(sc_id) {
            section.sc_arcs.push(ac_id.clone());
        }
    }

    novel.arcs.insert(
        ac_id.clone(),
        StoryArc {
            title: child_text(arc, "Title"),
            desc: paragraphs(arc),
            short_name: child_text(arc, "ShortName"),
            sections,
        },
    );
    novel.tree.append(AC_ROOT, ac_id.clone());

    for point in children_named(arc, "POINT") {
        let tp_id = element_id(point, source)?;
        let section_assoc = child(point, "Section")
            .and_then(|node| node.attribute("id"))
            .filter(|sc_id| {
                let known = novel.sections.contains_key(*sc_id);
                if !known {
                    tracing::warn!(point = %tp_id, section = %sc_id, "dropping association with unknown section");
                }
                known
            })
            .map(str::to_string);
        if let Some(sc_id) = &section_assoc {
            if let Some(section) = novel.sections.get_mut(sc_id) {
                section.sc_turning_points.insert(tp_id.clone(), ac_id.clone());
            }
        }
        novel.turning_points.insert(
            tp_id.clone(),
            TurningPoint {
                title: child_text(point, "Title"),
                desc: paragraphs(point),
                section_assoc,
            },
        );
        novel.tree.append(&ac_id, tp_id);
    }
    Ok(())
}

fn child<'a, 'input>(node: Node<'a, 'input>, name: &str) -> Option<Node<'a, 'input>> {
    node.children().find(|n| n.is_element() && n.has_tag_name(name))
}

fn children_named<'a, 'input: 'a>(
    node: Node<'a, 'input>,
    name: &'a str,
) -> impl Iterator<Item = Node<'a, 'input>> + 'a {
    node.children().filter(move |n| n.is_element() && n.has_tag_name(name))
}

fn child_text(node: Node<'_, '_>, name: &str) -> String {
    child(node, name)
        .map(|n| inner_text(n).trim().to_string())
        .unwrap_or_default()
}

/// All text below `node`, with inline markup (`<em>`, `<strong>`, ...) stripped.
fn inner_text(node: Node<'_, '_>) -> String {
    node.descendants()
        .filter(|n| n.is_text())
        .filter_map(|n| n.text())
        .collect()
}

/// Text of the `Desc` element, one line per `<p>` paragraph.
fn paragraphs(node: Node<'_, '_>) -> String {
    let Some(desc) = child(node, "Desc") else {
        return String::new();
    };
    let lines: Vec<String> = desc
        .children()
        .filter(|n| n.is_element() && n.has_tag_name("p"))
        .map(inner_text)
        .collect();
    if lines.is_empty() {
        inner_text(desc).trim().to_string()
    } else {
        lines.join("\n")
    }
}

fn element_id(node: Node<'_, '_>, source: &str) -> NovelResult<String> {
    node.attribute("id").map(str::to_string).ok_or_else(|| {
        NovelError::parse_error(
            source,
            format!("<{}> element without id attribute", node.tag_name().name()),
        )
    })
}

/// Validate that a file version is compatible with the reader.
fn validate_version(file_version: &str) -> NovelResult<()> {
    let file_parts: Vec<u32> = file_version
        .split('.')
        .filter_map(|p| p.parse().ok())
        .collect();
    let current_parts: Vec<u32> = FORMAT_VERSION
        .split('.')
        .filter_map(|p| p.parse().ok())
        .collect();

    let mismatch = || NovelError::VersionMismatch {
        file_version: file_version.to_string(),
        expected_version: FORMAT_VERSION.to_string(),
    };

    if file_parts.is_empty() || file_parts[0] != current_parts[0] {
        return Err(mismatch());
    }

    // A newer minor version may carry elements this reader would silently drop
    if file_parts.len() > 1 && file_parts[1] > current_parts[1] {
        return Err(mismatch());
    }

    Ok(())
}
