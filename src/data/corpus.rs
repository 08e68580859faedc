// src/data/corpus.rs

use std::path::{Path, PathBuf};

use crate::error::{LabelerError, Result};

pub const CATALOG_EXTENSION: &str = ".xml";

/// Collects catalog files from a directory, sorted by file name.
pub fn collect_catalog_files(dir: &Path) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Err(LabelerError::DirectoryNotFound(dir.to_path_buf()));
    }

    let read_error = |source: std::io::Error| LabelerError::Read {
        path: dir.to_path_buf(),
        source,
    };

    let mut files = Vec::new();
    for entry in std::fs::read_dir(dir).map_err(read_error)? {
        let path = entry.map_err(read_error)?.path();
        let is_catalog = path
            .file_name()
            .and_then(|n| n.to_str())
            .map(|n| n.ends_with(CATALOG_EXTENSION))
            .unwrap_or(false);
        if is_catalog && path.is_file() {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

pub fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_collects_only_xml_files_sorted() {
        let dir = tempdir().unwrap();
        for name in ["b.xml", "a.xml", "notes.txt", "c.xml.bak"] {
            std::fs::write(dir.path().join(name), "<a/>").unwrap();
        }
        std::fs::create_dir(dir.path().join("nested.xml")).unwrap();

        let files = collect_catalog_files(dir.path()).unwrap();
        let names: Vec<String> = files.iter().map(|p| display_name(p)).collect();
        assert_eq!(names, vec!["a.xml", "b.xml"]);
    }

    #[test]
    fn test_missing_directory_is_an_error() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("nope");
        assert!(matches!(
            collect_catalog_files(&missing),
            Err(LabelerError::DirectoryNotFound(_))
        ));
    }
}
