//! Common test utilities and helpers
//!
//! Builds small catalog dumps on disk for the integration tests.

#![allow(dead_code)]

use std::path::{Path, PathBuf};

/// One `<product>` element; `path` holds the category names, shallow to deep.
pub fn product_xml(name: Option<&str>, path: &[&str]) -> String {
    let mut xml = String::from("  <product>\n");
    if let Some(name) = name {
        xml.push_str(&format!("    <name>{}</name>\n", name));
    }
    xml.push_str("    <categoryPath>\n");
    for category in path {
        xml.push_str(&format!(
            "      <category><name>{}</name><id>id-{}</id></category>\n",
            category, category
        ));
    }
    xml.push_str("    </categoryPath>\n  </product>\n");
    xml
}

pub fn catalog_xml(products: &[String]) -> String {
    format!(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<products>\n{}</products>\n",
        products.concat()
    )
}

/// Writes a catalog file named `file_name` into `dir`
pub fn write_catalog(dir: &Path, file_name: &str, products: &[String]) -> PathBuf {
    let path = dir.join(file_name);
    std::fs::write(&path, catalog_xml(products)).expect("Failed to write catalog");
    path
}

pub fn read_lines(path: &Path) -> Vec<String> {
    std::fs::read_to_string(path)
        .expect("Failed to read output")
        .lines()
        .map(str::to_string)
        .collect()
}
