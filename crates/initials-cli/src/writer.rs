//! Filesystem output.

use std::path::{Path, PathBuf};

/// A directory or file could not be written.
#[derive(Debug, thiserror::Error)]
#[error("Failed to write {}: {source}", .path.display())]
pub struct WriteError {
    pub path: PathBuf,
    #[source]
    pub source: std::io::Error,
}

/// Write `contents` to `path`, creating parent directories as needed.
pub fn write_file(path: &Path, contents: &str) -> Result<(), WriteError> {
    let with_path = |source| WriteError {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(with_path)?;
    }
    std::fs::write(path, contents).map_err(with_path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_creates_parent_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("dist/nested/all.cjs.js");
        write_file(&path, "module.exports = {};").unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "module.exports = {};");
    }

    #[test]
    fn test_overwrites_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("all.css");
        write_file(&path, "old").unwrap();
        write_file(&path, "new").unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "new");
    }

    #[test]
    fn test_error_names_path() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("file");
        std::fs::write(&file, "").unwrap();

        let err = write_file(&file.join("child.css"), "x").unwrap_err();
        assert_eq!(err.path, file.join("child.css"));
        assert!(err.to_string().starts_with("Failed to write"));
    }
}
