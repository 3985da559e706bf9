//! Output formatting and persistence for tables, reports and model artifacts.
//!
//! Supports pretty-printing, JSON serialization, and atomic CSV/JSON writes.

use anyhow::{Context, Result};
use polars::prelude::*;
use serde::Serialize;
use std::fmt::Debug;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Logs a value using Rust's debug pretty-print format.
pub fn print_pretty<T: Debug>(value: &T) {
    debug!("{:#?}", value);
}

/// Logs a value as pretty-printed JSON.
pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    info!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Writes `frame` as CSV with a header row and no index column.
pub fn write_csv<W: Write>(writer: W, frame: &DataFrame) -> PolarsResult<()> {
    let mut frame = frame.clone();
    CsvWriter::new(writer).include_header(true).finish(&mut frame)
}

/// Replaces the file at `path` with `frame` as CSV.
pub fn write_frame(path: &Path, frame: &DataFrame) -> Result<()> {
    let mut buf = Vec::new();
    write_csv(&mut buf, frame)?;
    write_atomic(path, &buf)
}

/// Replaces the file at `path` with `value` as pretty JSON.
pub fn write_json(path: &Path, value: &impl Serialize) -> Result<()> {
    let body = serde_json::to_vec_pretty(value)?;
    write_atomic(path, &body)
}

/// Writes `bytes` to a sibling temporary file, then renames it over `path`,
/// so readers see either the old file or the complete new one.
///
/// Missing parent directories are created.
pub fn write_atomic(path: &Path, bytes: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("creating directory {}", parent.display()))?;
    }

    let tmp = temp_sibling(path);
    debug!(path = %path.display(), tmp = %tmp.display(), bytes = bytes.len(), "Writing file");

    let written = fs::File::create(&tmp)
        .and_then(|mut file| {
            file.write_all(bytes)?;
            file.sync_all()
        })
        .with_context(|| format!("writing {}", tmp.display()));
    if let Err(e) = written {
        let _ = fs::remove_file(&tmp);
        return Err(e);
    }

    if let Err(e) = fs::rename(&tmp, path) {
        let _ = fs::remove_file(&tmp);
        return Err(e).with_context(|| format!("renaming into {}", path.display()));
    }
    Ok(())
}

fn temp_sibling(path: &Path) -> PathBuf {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "output".to_string());
    path.with_file_name(format!(".{name}.tmp"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;

    fn temp_path(name: &str) -> PathBuf {
        env::temp_dir().join(name)
    }

    fn sample_frame() -> DataFrame {
        df!(
            "gender" => ["Female", "Male, Jr"],
            "score" => [70.0, 80.5],
        )
        .unwrap()
    }

    #[test]
    fn test_print_pretty_does_not_panic() {
        print_pretty(&sample_frame());
    }

    #[test]
    fn test_print_json_does_not_panic() {
        print_json(&vec![1.0, 2.5]).unwrap();
    }

    #[test]
    fn test_write_csv_header_and_quoting() {
        let mut buf = Vec::new();
        write_csv(&mut buf, &sample_frame()).unwrap();

        let content = String::from_utf8(buf).unwrap();
        assert_eq!(content, "gender,score\nFemale,70.0\n\"Male, Jr\",80.5\n");
    }

    #[test]
    fn test_write_frame_overwrites_existing_file() {
        let path = temp_path("student_performance_test_overwrite.csv");
        fs::write(&path, "stale contents that are longer than the table\n").unwrap();

        write_frame(&path, &sample_frame()).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert!(content.starts_with("gender,score\n"));
        assert!(!content.contains("stale"));
        assert!(!temp_sibling(&path).exists());

        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_write_atomic_creates_parent_dirs() {
        let dir = temp_path("student_performance_test_nested");
        let _ = fs::remove_dir_all(&dir);
        let path = dir.join("a/b/out.json");

        write_json(&path, &vec!["x"]).unwrap();
        assert!(path.exists());

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_write_atomic_fails_under_a_file() {
        let blocker = temp_path("student_performance_test_blocker");
        fs::write(&blocker, "not a directory").unwrap();

        let result = write_atomic(&blocker.join("out.csv"), b"data");
        assert!(result.is_err());

        fs::remove_file(&blocker).unwrap();
    }

    #[test]
    fn test_failed_rename_removes_temp_file() {
        let dir = temp_path("student_performance_test_rename_target");
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(dir.join("occupied")).unwrap();

        let result = write_atomic(&dir, b"data");
        assert!(result.is_err());
        assert!(!temp_sibling(&dir).exists());

        fs::remove_dir_all(&dir).unwrap();
    }
}
