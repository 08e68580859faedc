// src/data/writer.rs
//! Second pass: sample, filter and write `__label__` lines.

use rand::Rng;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use super::catalog_xml::parse_catalog_file;
use super::corpus::{collect_catalog_files, display_name};
use super::record::CatalogRecord;
use super::scanner::AllowedCategories;
use crate::error::{LabelerError, Result};
use crate::text::ProductNameNormalizer;

pub const LABEL_PREFIX: &str = "__label__";

/// Counters for one write pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WriteStats {
    pub files: usize,
    pub seen: usize,
    pub sampled_out: usize,
    pub invalid: usize,
    pub filtered: usize,
    pub written: usize,
}

/// Line sink for fastText training records.
pub struct LabeledDatasetWriter<W: Write> {
    writer: W,
    path: PathBuf,
    lines_written: usize,
}

impl LabeledDatasetWriter<BufWriter<File>> {
    /// Creates (or truncates) `path`, making its parent directory first if missing.
    pub fn create(path: &Path) -> Result<Self> {
        ensure_parent_dir(path)?;
        let file = File::create(path).map_err(|source| LabelerError::Write {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::new(BufWriter::with_capacity(1024 * 1024, file), path))
    }
}

impl<W: Write> LabeledDatasetWriter<W> {
    /// `path` names the destination in error messages.
    pub fn new(writer: W, path: impl Into<PathBuf>) -> Self {
        Self {
            writer,
            path: path.into(),
            lines_written: 0,
        }
    }

    pub fn write_record(&mut self, label: &str, tokens: &str) -> Result<()> {
        // Full line in one call so a failure never leaves half a record behind
        let line = format!("{}{} {}\n", LABEL_PREFIX, label, tokens);
        self.writer
            .write_all(line.as_bytes())
            .map_err(|source| self.write_error(source))?;
        self.lines_written += 1;
        Ok(())
    }

    fn write_error(&self, source: std::io::Error) -> LabelerError {
        LabelerError::Write {
            path: self.path.clone(),
            source,
        }
    }

    pub fn lines_written(&self) -> usize {
        self.lines_written
    }

    pub fn finish(mut self) -> Result<W> {
        self.writer.flush().map_err(|source| self.write_error(source))?;
        Ok(self.writer)
    }
}

/// Creates the output's parent directory (one level only) when absent.
pub fn ensure_parent_dir(path: &Path) -> Result<()> {
    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => return Ok(()),
    };
    if parent.is_dir() {
        return Ok(());
    }
    std::fs::create_dir(parent).map_err(|source| LabelerError::OutputDir {
        path: parent.to_path_buf(),
        source,
    })
}

/// Writes one line per sampled, valid, allowed record of every catalog file.
///
/// Each child of a catalog root consumes exactly one draw from `rng`, before
/// validation, so a given seed always selects the same records.
pub fn write_labeled_records<W: Write, R: Rng>(
    dir: &Path,
    allowed: &AllowedCategories,
    sample_rate: f64,
    category_depth: usize,
    normalizer: &ProductNameNormalizer,
    rng: &mut R,
    out: &mut LabeledDatasetWriter<W>,
) -> Result<WriteStats> {
    let mut stats = WriteStats::default();

    for path in collect_catalog_files(dir)? {
        tracing::info!("Processing {}", display_name(&path));
        let root = parse_catalog_file(&path)?;
        stats.files += 1;

        for child in &root.children {
            stats.seen += 1;

            if rng.gen::<f64>() > sample_rate {
                stats.sampled_out += 1;
                continue;
            }

            let record = match CatalogRecord::from_element(child) {
                Some(r) => r,
                None => {
                    stats.invalid += 1;
                    continue;
                }
            };

            let label = match record.label(category_depth) {
                Some(l) => l,
                None => {
                    stats.invalid += 1;
                    continue;
                }
            };

            if !allowed.contains(label) {
                stats.filtered += 1;
                continue;
            }

            let tokens = normalizer.normalize(&record.single_line_name());
            out.write_record(label, &tokens)?;
            stats.written += 1;
        }
    }

    Ok(stats)
}
