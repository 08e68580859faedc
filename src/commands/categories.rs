//! Categories Command
//!
//! Runs only the frequency scan and reports the label distribution.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::data::{scan_category_distribution, CategoryReport};
use crate::error::{LabelerError, Result};
use crate::utils::format_number;

pub fn execute(
    input: &Path,
    min_products: usize,
    category_depth: usize,
    top: usize,
    json: Option<&PathBuf>,
) -> Result<CategoryReport> {
    println!("═══════════════════════════════════════════════════════════");
    println!("  📊 Category distribution");
    println!("═══════════════════════════════════════════════════════════");
    println!("  Input: {:?}", input);
    println!("  Category depth: {}", category_depth);
    println!("  Min products: {}", min_products);
    println!();

    let distribution = scan_category_distribution(input, category_depth)?;
    let report = distribution.report(min_products, category_depth);
    let kept = report.categories.iter().filter(|c| c.allowed).count();

    for entry in report.categories.iter().take(top) {
        println!(
            "  {} {:>8}  {}",
            if entry.allowed { "✓" } else { "✗" },
            entry.count,
            entry.label
        );
    }
    if report.categories.len() > top {
        println!("  ... {} more", report.categories.len() - top);
    }

    if let Some(path) = json {
        write_report(&report, path)?;
        println!();
        println!("  Report: {:?}", path);
    }

    println!();
    println!("═══════════════════════════════════════════════════════════");
    println!("  Records: {}", format_number(report.total_records));
    println!("  Categories: {}", format_number(report.categories.len()));
    println!("  Kept (>= {}): {}", min_products, format_number(kept));
    println!("═══════════════════════════════════════════════════════════");

    Ok(report)
}

fn write_report(report: &CategoryReport, path: &Path) -> Result<()> {
    let file = File::create(path).map_err(|source| LabelerError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, report)?;
    writer.flush().map_err(|source| LabelerError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(())
}
