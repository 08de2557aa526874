//! Passthrough source survey.
//!
//! Walks the passthrough sources a build plan registered and reports what
//! the generator would find there: does the path exist, how many files,
//! how many bytes. Used by the `check` subcommand as a pre-build preview.
//!
//! This module only observes. It never copies, deletes, or creates
//! anything — actual passthrough copying is the generator's job — and a
//! missing source is a report line, not an error. Errors here are limited
//! to genuine traversal failures (permissions, races) inside a tree that
//! does exist.

use serde::Serialize;
use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::WalkDir;

#[derive(Error, Debug)]
pub enum SurveyError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("walk error: {0}")]
    Walk(#[from] walkdir::Error),
}

/// What a single passthrough source looks like on disk.
#[derive(Debug, Clone, Serialize)]
pub struct SourceReport {
    /// The registered source path, as registered.
    pub source: String,
    /// Whether the path exists under the project root.
    pub exists: bool,
    /// Number of regular files below the path (0 when missing).
    pub file_count: usize,
    /// Total size of those files in bytes.
    pub total_bytes: u64,
}

/// Survey every registered source path under `root`, in registration order.
pub fn survey(root: &Path, sources: &[PathBuf]) -> Result<Vec<SourceReport>, SurveyError> {
    sources
        .iter()
        .map(|source| survey_one(root, source))
        .collect()
}

fn survey_one(root: &Path, source: &Path) -> Result<SourceReport, SurveyError> {
    let resolved = root.join(source);
    let display = source.display().to_string();

    if !resolved.exists() {
        return Ok(SourceReport {
            source: display,
            exists: false,
            file_count: 0,
            total_bytes: 0,
        });
    }

    let mut file_count = 0;
    let mut total_bytes = 0;
    for entry in WalkDir::new(&resolved) {
        let entry = entry?;
        if entry.file_type().is_file() {
            file_count += 1;
            total_bytes += entry.metadata()?.len();
        }
    }

    Ok(SourceReport {
        source: display,
        exists: true,
        file_count,
        total_bytes,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn write(path: &Path, contents: &str) {
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, contents).unwrap();
    }

    #[test]
    fn missing_source_reports_not_exists() {
        let tmp = TempDir::new().unwrap();
        let reports = survey(tmp.path(), &[PathBuf::from("./src/assets")]).unwrap();

        assert_eq!(reports.len(), 1);
        assert_eq!(reports[0].source, "./src/assets");
        assert!(!reports[0].exists);
        assert_eq!(reports[0].file_count, 0);
        assert_eq!(reports[0].total_bytes, 0);
    }

    #[test]
    fn counts_files_and_bytes_recursively() {
        let tmp = TempDir::new().unwrap();
        write(&tmp.path().join("src/assets/favicon.svg"), "<svg/>");
        write(&tmp.path().join("src/assets/fonts/body.woff2"), "12345678");

        let reports = survey(tmp.path(), &[PathBuf::from("./src/assets")]).unwrap();
        assert!(reports[0].exists);
        assert_eq!(reports[0].file_count, 2);
        assert_eq!(reports[0].total_bytes, 6 + 8);
    }

    #[test]
    fn directories_are_not_counted_as_files() {
        let tmp = TempDir::new().unwrap();
        fs::create_dir_all(tmp.path().join("src/css/vendor")).unwrap();
        write(&tmp.path().join("src/css/site.css"), "body{}");

        let reports = survey(tmp.path(), &[PathBuf::from("./src/css/")]).unwrap();
        assert_eq!(reports[0].file_count, 1);
    }

    #[test]
    fn reports_come_back_in_registration_order() {
        let tmp = TempDir::new().unwrap();
        write(&tmp.path().join("src/css/site.css"), "body{}");

        let sources = [PathBuf::from("./src/assets"), PathBuf::from("./src/css/")];
        let reports = survey(tmp.path(), &sources).unwrap();
        assert_eq!(reports[0].source, "./src/assets");
        assert!(!reports[0].exists);
        assert_eq!(reports[1].source, "./src/css/");
        assert!(reports[1].exists);
    }

    #[test]
    fn empty_existing_source_is_fine() {
        let tmp = TempDir::new().unwrap();
        fs::create_dir_all(tmp.path().join("src/assets")).unwrap();

        let reports = survey(tmp.path(), &[PathBuf::from("./src/assets")]).unwrap();
        assert!(reports[0].exists);
        assert_eq!(reports[0].file_count, 0);
        assert_eq!(reports[0].total_bytes, 0);
    }
}
