// src/config.rs
//! Run configuration shared (read-only) by the scan and write passes.

use std::path::PathBuf;

use crate::error::{LabelerError, Result};

pub const DEFAULT_INPUT_DIR: &str = "/workspace/search_with_machine_learning_course/data/pruned_products/";
pub const DEFAULT_OUTPUT_PATH: &str = "/workspace/datasets/fasttext/output.fasttext";
pub const DEFAULT_SAMPLE_RATE: f64 = 1.0;
pub const DEFAULT_MIN_PRODUCTS: usize = 0;
pub const DEFAULT_CATEGORY_DEPTH: usize = 2;

#[derive(Debug, Clone)]
pub struct PrepareConfig {
    /// Directory holding the catalog `.xml` files
    pub input_dir: PathBuf,
    /// fastText file to create (or overwrite)
    pub output_path: PathBuf,
    /// Probability of keeping each record, in [0, 1]
    pub sample_rate: f64,
    /// Minimum corpus-wide record count for a category to be kept
    pub min_products: usize,
    /// Index into `categoryPath` used as the label
    pub category_depth: usize,
    /// Sampling seed; `None` seeds from entropy
    pub seed: Option<u64>,
}

impl Default for PrepareConfig {
    fn default() -> Self {
        Self {
            input_dir: PathBuf::from(DEFAULT_INPUT_DIR),
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
            sample_rate: DEFAULT_SAMPLE_RATE,
            min_products: DEFAULT_MIN_PRODUCTS,
            category_depth: DEFAULT_CATEGORY_DEPTH,
            seed: None,
        }
    }
}

impl PrepareConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_input_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.input_dir = dir.into();
        self
    }

    pub fn with_output_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.output_path = path.into();
        self
    }

    pub fn with_sample_rate(mut self, rate: f64) -> Self {
        self.sample_rate = rate;
        self
    }

    pub fn with_min_products(mut self, min: usize) -> Self {
        self.min_products = min;
        self
    }

    pub fn with_category_depth(mut self, depth: usize) -> Self {
        self.category_depth = depth;
        self
    }

    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if !self.sample_rate.is_finite() || !(0.0..=1.0).contains(&self.sample_rate) {
            return Err(LabelerError::ConfigError(format!(
                "sample_rate must be within [0, 1], got {}",
                self.sample_rate
            )));
        }
        Ok(())
    }
}
