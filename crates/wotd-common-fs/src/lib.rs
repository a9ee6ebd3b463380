//! File system utilities for the word data store and generated site.

use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;
use wotd_common_core::{Error, Result};

/// Upper bound for a single word file.
pub const MAX_WORD_FILE_SIZE: usize = 1024 * 1024;

fn read_error(path: &Path, e: io::Error) -> Error {
    let message = match e.kind() {
        io::ErrorKind::NotFound => "file not found",
        io::ErrorKind::PermissionDenied => "permission denied",
        _ => "failed to read file",
    };
    Error::file_system(message, path, Some(e))
}

/// Read a file to string with size limit.
pub fn read_to_string(path: impl AsRef<Path>, max_size: usize) -> Result<String> {
    let path = path.as_ref();

    let metadata = fs::metadata(path).map_err(|e| read_error(path, e))?;

    if metadata.len() as usize > max_size {
        return Err(Error::file_system(
            format!("file too large: {} bytes (max: {})", metadata.len(), max_size),
            path,
            None,
        ));
    }

    fs::read_to_string(path).map_err(|e| read_error(path, e))
}

/// Write to a file atomically (write to temp, then rename).
pub fn write_atomic(path: impl AsRef<Path>, contents: &[u8]) -> Result<()> {
    let path = path.as_ref();
    let parent = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or(Path::new("."));

    ensure_dir(parent)?;

    let mut temp_path = path.to_path_buf();
    match path.file_name() {
        Some(name) => temp_path.set_file_name(format!(".{}.tmp", name.to_string_lossy())),
        None => temp_path.push(".tmp"),
    }

    {
        let mut file = File::create(&temp_path).map_err(|e| {
            Error::file_system("failed to create temporary file", &temp_path, Some(e))
        })?;

        file.write_all(contents).map_err(|e| {
            Error::file_system("failed to write temporary file", &temp_path, Some(e))
        })?;

        file.sync_all().map_err(|e| {
            Error::file_system("failed to sync temporary file", &temp_path, Some(e))
        })?;
    }

    fs::rename(&temp_path, path).map_err(|e| {
        let _ = fs::remove_file(&temp_path);
        Error::file_system("failed to move temporary file into place", path, Some(e))
    })?;

    tracing::trace!(path = %path.display(), bytes = contents.len(), "wrote file");
    Ok(())
}

/// Write string to file atomically.
pub fn write_string_atomic(path: impl AsRef<Path>, contents: &str) -> Result<()> {
    write_atomic(path, contents.as_bytes())
}

/// Ensure a directory exists.
pub fn ensure_dir(path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    if !path.exists() {
        fs::create_dir_all(path)
            .map_err(|e| Error::file_system("failed to create directory", path, Some(e)))?;
    }
    Ok(())
}

/// Recursively list files under `dir` with the given extension, sorted by path.
///
/// A missing directory yields an empty list. Unreadable entries are logged
/// and skipped.
pub fn list_files_with_extension(dir: impl AsRef<Path>, extension: &str) -> Vec<PathBuf> {
    let dir = dir.as_ref();
    if !dir.is_dir() {
        tracing::debug!(dir = %dir.display(), "directory does not exist");
        return Vec::new();
    }

    let mut files: Vec<PathBuf> = WalkDir::new(dir)
        .follow_links(true)
        .into_iter()
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(e) => {
                tracing::warn!(error = %e, "skipping unreadable directory entry");
                None
            }
        })
        .filter(|entry| entry.file_type().is_file())
        .map(|entry| entry.into_path())
        .filter(|path| path.extension().and_then(|e| e.to_str()) == Some(extension))
        .collect();

    files.sort();
    files
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_atomic_write() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("test.txt");

        write_atomic(&file_path, b"hello world").unwrap();
        assert_eq!(fs::read_to_string(&file_path).unwrap(), "hello world");

        write_string_atomic(&file_path, "replaced").unwrap();
        assert_eq!(fs::read_to_string(&file_path).unwrap(), "replaced");

        assert!(!dir.path().join(".test.txt.tmp").exists());
    }

    #[test]
    fn test_atomic_write_creates_parents() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("2024").join("20240115.json");

        write_atomic(&file_path, b"{}").unwrap();
        assert!(file_path.exists());
    }

    #[test]
    fn test_file_not_found() {
        let dir = tempdir().unwrap();
        let err = read_to_string(dir.path().join("missing.json"), 1024).unwrap_err();
        assert!(err.is_not_found());
        assert!(err.to_string().contains("file not found"));
    }

    #[test]
    fn test_read_with_size_limit() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("large.txt");
        fs::write(&file_path, "x".repeat(100)).unwrap();

        assert_eq!(read_to_string(&file_path, 200).unwrap().len(), 100);

        let err = read_to_string(&file_path, 50).unwrap_err();
        assert!(err.to_string().contains("file too large"));
        assert!(!err.is_not_found());
    }

    #[test]
    fn test_list_files_recurses_and_filters() {
        let dir = tempdir().unwrap();
        fs::create_dir_all(dir.path().join("2023")).unwrap();
        fs::create_dir_all(dir.path().join("2024")).unwrap();
        fs::write(dir.path().join("2024/20240102.json"), "{}").unwrap();
        fs::write(dir.path().join("2023/20231231.json"), "{}").unwrap();
        fs::write(dir.path().join("2024/notes.txt"), "").unwrap();

        let files = list_files_with_extension(dir.path(), "json");
        assert_eq!(
            files,
            vec![
                dir.path().join("2023").join("20231231.json"),
                dir.path().join("2024").join("20240102.json"),
            ]
        );
    }

    #[test]
    fn test_list_files_missing_dir_is_empty() {
        let dir = tempdir().unwrap();
        assert!(list_files_with_extension(dir.path().join("nope"), "json").is_empty());
    }
}
