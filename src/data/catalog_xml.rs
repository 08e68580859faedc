// src/data/catalog_xml.rs
//! Minimal element tree over quick-xml, enough to walk a catalog dump.

use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::error::{LabelerError, Result};

/// One parsed XML element.
///
/// `text` holds the character data that appears before the first child
/// element, or `None` when there is none.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct XmlElement {
    pub tag: String,
    pub text: Option<String>,
    pub children: Vec<XmlElement>,
}

impl XmlElement {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            text: None,
            children: Vec::new(),
        }
    }

    /// First direct child with the given tag
    pub fn find(&self, tag: &str) -> Option<&XmlElement> {
        self.children.iter().find(|c| c.tag == tag)
    }

    pub fn first_child(&self) -> Option<&XmlElement> {
        self.children.first()
    }

    fn push_text(&mut self, text: &str) {
        // Character data after a child element belongs to that child's tail
        if !self.children.is_empty() || text.is_empty() {
            return;
        }
        match &mut self.text {
            Some(existing) => existing.push_str(text),
            None => self.text = Some(text.to_string()),
        }
    }
}

/// Parses a whole catalog file into its root element.
pub fn parse_catalog_file(path: &Path) -> Result<XmlElement> {
    let file = File::open(path).map_err(|source| LabelerError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let reader = BufReader::with_capacity(1024 * 1024, file);

    parse_document(reader).map_err(|reason| LabelerError::MalformedCatalog {
        path: path.to_path_buf(),
        reason,
    })
}

/// Builds the element tree from any buffered source.
///
/// Fails on syntax errors (including bad element names and attributes),
/// mismatched or unclosed tags, a missing root, a second root, or
/// non-whitespace text outside the root.
pub fn parse_document<R: BufRead>(reader: R) -> std::result::Result<XmlElement, String> {
    let mut reader = Reader::from_reader(reader);
    reader.trim_text(false);

    let mut buf = Vec::with_capacity(64 * 1024);
    let mut stack: Vec<XmlElement> = Vec::new();
    let mut root: Option<XmlElement> = None;

    loop {
        buf.clear();

        let event = reader
            .read_event_into(&mut buf)
            .map_err(|e| format!("{} at byte {}", e, reader.buffer_position()))?;

        match event {
            Event::Start(ref e) => {
                if root.is_some() {
                    return Err(format!(
                        "junk after document element at byte {}",
                        reader.buffer_position()
                    ));
                }
                stack.push(open_element(e, reader.buffer_position())?);
            }

            Event::Empty(ref e) => {
                let element = open_element(e, reader.buffer_position())?;
                attach(&mut stack, &mut root, element, reader.buffer_position())?;
            }

            Event::End(_) => {
                let element = stack
                    .pop()
                    .ok_or_else(|| format!("unexpected end tag at byte {}", reader.buffer_position()))?;
                attach(&mut stack, &mut root, element, reader.buffer_position())?;
            }

            Event::Text(ref e) => {
                let text = e.unescape().map_err(|err| err.to_string())?;
                match stack.last_mut() {
                    Some(open) => open.push_text(&text),
                    None if text.trim().is_empty() => {}
                    None => {
                        return Err(format!(
                            "text outside of root element at byte {}",
                            reader.buffer_position()
                        ))
                    }
                }
            }

            Event::CData(ref e) => {
                let text = std::str::from_utf8(e.as_ref()).map_err(|err| err.to_string())?;
                match stack.last_mut() {
                    Some(open) => open.push_text(text),
                    None => return Err("CDATA outside of root element".to_string()),
                }
            }

            Event::Eof => {
                if let Some(open) = stack.last() {
                    return Err(format!("unclosed element <{}> at end of file", open.tag));
                }
                return root.ok_or_else(|| "no root element found".to_string());
            }

            // Declarations, comments, processing instructions, doctype
            _ => {}
        }
    }
}

/// Validates the tag name and every attribute of a start tag.
fn open_element(e: &BytesStart, position: usize) -> std::result::Result<XmlElement, String> {
    let tag = std::str::from_utf8(e.name().as_ref())
        .map_err(|err| format!("{} at byte {}", err, position))?
        .to_string();
    if !is_xml_name(&tag) {
        return Err(format!("invalid element name <{}> at byte {}", tag, position));
    }

    let mut attributes = e.attributes();
    attributes.with_checks(true);
    for attr in attributes {
        let attr = attr.map_err(|err| format!("{} in <{}> at byte {}", err, tag, position))?;
        attr.unescape_value()
            .map_err(|err| format!("{} in <{}> at byte {}", err, tag, position))?;
    }

    Ok(XmlElement::new(tag))
}

fn is_xml_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_alphabetic() || c == '_' || c == ':' || !c.is_ascii() => {}
        _ => return false,
    }
    chars.all(|c| c.is_alphanumeric() || matches!(c, '_' | ':' | '-' | '.') || !c.is_ascii())
}

fn attach(
    stack: &mut [XmlElement],
    root: &mut Option<XmlElement>,
    element: XmlElement,
    position: usize,
) -> std::result::Result<(), String> {
    match stack.last_mut() {
        Some(parent) => {
            parent.children.push(element);
            Ok(())
        }
        None if root.is_none() => {
            *root = Some(element);
            Ok(())
        }
        None => Err(format!("junk after document element at byte {}", position)),
    }
}
