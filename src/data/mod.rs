// src/data/mod.rs

mod catalog_xml;
mod corpus;
mod record;
mod scanner;
mod writer;

pub use catalog_xml::{parse_catalog_file, parse_document, XmlElement};
pub use corpus::{collect_catalog_files, display_name, CATALOG_EXTENSION};
pub use record::{catalog_records, select_category, CatalogRecord};
pub use scanner::{
    categories_with_minimum_products, scan_category_distribution, AllowedCategories,
    CategoryDistribution, CategoryEntry, CategoryReport,
};
pub use writer::{
    ensure_parent_dir, write_labeled_records, LabeledDatasetWriter, WriteStats, LABEL_PREFIX,
};
