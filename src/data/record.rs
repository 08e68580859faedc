// src/data/record.rs
//! Catalog records and the category-depth labeling rule.

use super::catalog_xml::XmlElement;

/// Product entry extracted from one child of the catalog root.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogRecord {
    pub name: String,
    /// Value of each `categoryPath` node (text of its first child),
    /// shallow to deep. `None` when the node carries no value.
    pub category_path: Vec<Option<String>>,
}

impl CatalogRecord {
    /// Returns `None` for records that must be skipped: missing or empty
    /// `name`, missing or empty `categoryPath`, or a terminal category
    /// without text.
    pub fn from_element(element: &XmlElement) -> Option<Self> {
        let name = element.find("name")?.text.as_ref()?;
        if name.is_empty() {
            return None;
        }

        let path = element.find("categoryPath")?;
        let category_path: Vec<Option<String>> = path
            .children
            .iter()
            .map(|node| node.first_child().and_then(|value| value.text.clone()))
            .collect();

        match category_path.last() {
            Some(Some(leaf)) if !leaf.is_empty() => {}
            _ => return None,
        }

        Some(Self {
            name: name.clone(),
            category_path,
        })
    }

    /// Label at `depth`, falling back to the deepest category when the path
    /// is shorter. `None` if the selected node has no text.
    pub fn label(&self, depth: usize) -> Option<&str> {
        select_category(&self.category_path, depth)?.as_deref()
    }

    /// Name with embedded newlines flattened so the output stays single-line.
    pub fn single_line_name(&self) -> String {
        self.name.replace('\n', " ")
    }
}

/// Picks the node at `depth` when the path is deep enough, otherwise the last one.
pub fn select_category<T>(path: &[T], depth: usize) -> Option<&T> {
    if path.is_empty() {
        return None;
    }
    if path.len() > depth {
        path.get(depth)
    } else {
        path.last()
    }
}

/// Parses every child of a catalog root, in document order; `None` marks a
/// child that is not a valid record.
pub fn catalog_records(root: &XmlElement) -> impl Iterator<Item = Option<CatalogRecord>> + '_ {
    root.children.iter().map(CatalogRecord::from_element)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::catalog_xml::parse_document;

    fn product(xml: &str) -> Option<CatalogRecord> {
        let root = parse_document(format!("<products>{}</products>", xml).as_bytes()).unwrap();
        CatalogRecord::from_element(&root.children[0])
    }

    fn path_xml(names: &[&str]) -> String {
        let nodes: String = names
            .iter()
            .map(|n| format!("<category><name>{}</name></category>", n))
            .collect();
        format!("<categoryPath>{}</categoryPath>", nodes)
    }

    #[test]
    fn test_select_category_depth_and_fallback() {
        let path = ["a", "b", "c", "d"];
        assert_eq!(select_category(&path, 0), Some(&"a"));
        assert_eq!(select_category(&path, 2), Some(&"c"));
        assert_eq!(select_category(&path, 3), Some(&"d"));
        assert_eq!(select_category(&path, 4), Some(&"d"));
        assert_eq!(select_category(&path, 100), Some(&"d"));

        let empty: [&str; 0] = [];
        assert_eq!(select_category(&empty, 0), None);
    }

    #[test]
    fn test_single_node_path_ignores_depth() {
        for depth in 0..5 {
            assert_eq!(select_category(&["only"], depth), Some(&"only"));
        }
    }

    #[test]
    fn test_valid_record() {
        let xml = format!("<product><name>USB Cable</name>{}</product>", path_xml(&["Electronics"]));
        let record = product(&xml).unwrap();
        assert_eq!(record.name, "USB Cable");
        assert_eq!(record.label(1), Some("Electronics"));
    }

    #[test]
    fn test_label_uses_first_child_of_node() {
        let xml = "<product><name>TV</name><categoryPath>\
                   <category><id>cat00000</id><name>Best Buy</name></category>\
                   <category><id>abcat0100000</id><name>TV &amp; Home Theater</name></category>\
                   </categoryPath></product>";
        let record = product(xml).unwrap();
        assert_eq!(record.label(1), Some("abcat0100000"));
        assert_eq!(record.label(0), Some("cat00000"));
    }

    #[test]
    fn test_invalid_records() {
        let path = path_xml(&["Electronics"]);
        // no name
        assert!(product(&format!("<product>{}</product>", path)).is_none());
        // empty name
        assert!(product(&format!("<product><name></name>{}</product>", path)).is_none());
        // no categoryPath
        assert!(product("<product><name>x</name></product>").is_none());
        // empty categoryPath
        assert!(product("<product><name>x</name><categoryPath/></product>").is_none());
        // leaf without text
        let xml = "<product><name>x</name><categoryPath>\
                   <category><name>A</name></category><category><name/></category>\
                   </categoryPath></product>";
        assert!(product(xml).is_none());
        // leaf without children
        let xml = "<product><name>x</name><categoryPath><category/></categoryPath></product>";
        assert!(product(xml).is_none());
    }

    #[test]
    fn test_intermediate_node_without_text_has_no_label() {
        let xml = "<product><name>x</name><categoryPath>\
                   <category><name>A</name></category><category><name/></category>\
                   <category><name>C</name></category></categoryPath></product>";
        let record = product(xml).unwrap();
        assert_eq!(record.label(1), None);
        assert_eq!(record.label(2), Some("C"));
    }

    #[test]
    fn test_catalog_records_yields_one_entry_per_child() {
        let xml = format!(
            "<products><product><name>A</name>{}</product><product/><note>x</note></products>",
            path_xml(&["Root"])
        );
        let root = parse_document(xml.as_bytes()).unwrap();
        let records: Vec<Option<CatalogRecord>> = catalog_records(&root).collect();
        assert_eq!(records.len(), 3);
        assert_eq!(records[0].as_ref().map(|r| r.name.as_str()), Some("A"));
        assert!(records[1].is_none());
        assert!(records[2].is_none());
    }

    #[test]
    fn test_single_line_name() {
        let xml = format!("<product><name>Big\nTV</name>{}</product>", path_xml(&["A"]));
        assert_eq!(product(&xml).unwrap().single_line_name(), "Big TV");
    }
}
