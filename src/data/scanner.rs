// src/data/scanner.rs
//! First pass: count labels across the whole corpus.

use serde::Serialize;
use std::collections::{HashMap, HashSet};
use std::path::Path;

use super::catalog_xml::parse_catalog_file;
use super::corpus::{collect_catalog_files, display_name};
use super::record::catalog_records;
use crate::error::Result;

/// Label -> number of valid records carrying it.
#[derive(Debug, Clone, Default)]
pub struct CategoryDistribution {
    counts: HashMap<String, usize>,
    total_records: usize,
}

impl CategoryDistribution {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, label: &str) {
        *self.counts.entry(label.to_string()).or_insert(0) += 1;
        self.total_records += 1;
    }

    pub fn total_records(&self) -> usize {
        self.total_records
    }

    /// Entries by descending count, ties broken by label.
    pub fn sorted(&self) -> Vec<(&str, usize)> {
        let mut entries: Vec<(&str, usize)> =
            self.counts.iter().map(|(k, v)| (k.as_str(), *v)).collect();
        entries.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        entries
    }

    pub fn allowed(&self, min_products: usize) -> AllowedCategories {
        let labels = self
            .counts
            .iter()
            .filter(|(_, count)| **count >= min_products)
            .map(|(label, _)| label.clone())
            .collect();
        AllowedCategories(labels)
    }

    pub fn report(&self, min_products: usize, category_depth: usize) -> CategoryReport {
        let categories = self
            .sorted()
            .into_iter()
            .map(|(label, count)| CategoryEntry {
                label: label.to_string(),
                count,
                allowed: count >= min_products,
            })
            .collect();

        CategoryReport {
            category_depth,
            min_products,
            total_records: self.total_records,
            categories,
        }
    }
}

/// Labels that passed the frequency threshold. Immutable once built.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AllowedCategories(HashSet<String>);

impl AllowedCategories {
    pub fn contains(&self, label: &str) -> bool {
        self.0.contains(label)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct CategoryEntry {
    pub label: String,
    pub count: usize,
    pub allowed: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct CategoryReport {
    pub category_depth: usize,
    pub min_products: usize,
    pub total_records: usize,
    pub categories: Vec<CategoryEntry>,
}

/// Counts the label of every valid record in every catalog file of `dir`.
///
/// Any file that fails to parse aborts the scan.
pub fn scan_category_distribution(dir: &Path, category_depth: usize) -> Result<CategoryDistribution> {
    let mut distribution = CategoryDistribution::new();

    for path in collect_catalog_files(dir)? {
        tracing::debug!("Scanning {}", display_name(&path));
        let root = parse_catalog_file(&path)?;

        for record in catalog_records(&root).flatten() {
            if let Some(label) = record.label(category_depth) {
                distribution.record(label);
            }
        }
    }

    Ok(distribution)
}

/// Scan pass: labels with at least `min_products` records.
pub fn categories_with_minimum_products(
    dir: &Path,
    min_products: usize,
    category_depth: usize,
) -> Result<AllowedCategories> {
    let distribution = scan_category_distribution(dir, category_depth)?;
    tracing::info!("Products categories distribution:\n{:?}", distribution.sorted());
    Ok(distribution.allowed(min_products))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn distribution(labels: &[&str]) -> CategoryDistribution {
        let mut d = CategoryDistribution::new();
        for label in labels {
            d.record(label);
        }
        d
    }

    #[test]
    fn test_counts_and_sorting() {
        let d = distribution(&["b", "a", "b", "c", "a", "b"]);
        assert_eq!(d.total_records(), 6);
        assert_eq!(d.sorted(), vec![("b", 3), ("a", 2), ("c", 1)]);
    }

    #[test]
    fn test_threshold_zero_keeps_everything_seen() {
        let d = distribution(&["x", "y", "y"]);
        let allowed = d.allowed(0);
        assert_eq!(allowed.len(), 2);
        assert!(allowed.contains("x"));
        assert!(allowed.contains("y"));
        assert!(!allowed.contains("z"));
    }

    #[test]
    fn test_threshold_is_inclusive() {
        let d = distribution(&["x", "y", "y", "z", "z", "z"]);
        let allowed = d.allowed(2);
        assert!(!allowed.contains("x"));
        assert!(allowed.contains("y"));
        assert!(allowed.contains("z"));
    }

    #[test]
    fn test_report_marks_allowed() {
        let report = distribution(&["x", "y", "y"]).report(2, 1);
        assert_eq!(report.total_records, 3);
        assert_eq!(report.categories[0].label, "y");
        assert!(report.categories[0].allowed);
        assert!(!report.categories[1].allowed);
    }
}
