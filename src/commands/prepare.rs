//! Prepare Command
//!
//! Scans the catalog for category frequencies, then writes the
//! fastText training file.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::time::Instant;

use crate::config::PrepareConfig;
use crate::data::{
    categories_with_minimum_products, ensure_parent_dir, write_labeled_records, AllowedCategories,
    LabeledDatasetWriter, WriteStats,
};
use crate::error::Result;
use crate::text::ProductNameNormalizer;
use crate::utils::{format_duration, format_number};

/// Result of a full two-pass run
#[derive(Debug, Clone)]
pub struct PrepareOutcome {
    pub allowed: AllowedCategories,
    pub stats: WriteStats,
}

fn sampling_rng(seed: Option<u64>) -> ChaCha8Rng {
    match seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_entropy(),
    }
}

/// Runs the scan pass to completion, then the write pass against its
/// (now fixed) allowed-category set.
pub fn run(config: &PrepareConfig) -> Result<PrepareOutcome> {
    config.validate()?;
    ensure_parent_dir(&config.output_path)?;

    let allowed = categories_with_minimum_products(
        &config.input_dir,
        config.min_products,
        config.category_depth,
    )?;
    if allowed.is_empty() {
        tracing::warn!(
            "No category reached min_products={}, output will be empty",
            config.min_products
        );
    }

    tracing::info!("Writing results to {}", config.output_path.display());

    let normalizer = ProductNameNormalizer::new();
    let mut rng = sampling_rng(config.seed);
    let mut writer = LabeledDatasetWriter::create(&config.output_path)?;

    let stats = write_labeled_records(
        &config.input_dir,
        &allowed,
        config.sample_rate,
        config.category_depth,
        &normalizer,
        &mut rng,
        &mut writer,
    )?;

    writer.finish()?;

    Ok(PrepareOutcome { allowed, stats })
}

pub fn execute(config: &PrepareConfig) -> Result<()> {
    println!("═══════════════════════════════════════════════════════════");
    println!("  🏷️  Building fastText training data");
    println!("═══════════════════════════════════════════════════════════");
    println!("  Input: {:?}", config.input_dir);
    println!("  Output: {:?}", config.output_path);
    println!("  Sample rate: {}", config.sample_rate);
    println!("  Min products: {}", config.min_products);
    println!("  Category depth: {}", config.category_depth);
    if let Some(seed) = config.seed {
        println!("  Seed: {}", seed);
    }
    println!();

    let start = Instant::now();
    let outcome = run(config)?;
    let stats = outcome.stats;

    println!();
    println!("═══════════════════════════════════════════════════════════");
    println!("  ✅ Dataset ready!");
    println!("  Files: {}", stats.files);
    println!("  Categories kept: {}", format_number(outcome.allowed.len()));
    println!("  Records seen: {}", format_number(stats.seen));
    println!("  Sampled out: {}", format_number(stats.sampled_out));
    println!("  Invalid: {}", format_number(stats.invalid));
    println!("  Filtered by category: {}", format_number(stats.filtered));
    println!("  Written: {}", format_number(stats.written));
    println!("  Time: {}", format_duration(start.elapsed().as_secs_f64()));
    println!("═══════════════════════════════════════════════════════════");

    Ok(())
}
