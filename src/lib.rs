//! catalog-labeler: fastText training data from product catalog XML dumps

pub mod commands;
pub mod config;
pub mod data;
pub mod error;
pub mod text;
pub mod utils;

// Main re-exports
pub use config::PrepareConfig;
pub use data::{
    categories_with_minimum_products, write_labeled_records, AllowedCategories, CatalogRecord,
    CategoryDistribution, LabeledDatasetWriter, WriteStats,
};
pub use error::{LabelerError, Result};
pub use text::{transform_name, ProductNameNormalizer};
