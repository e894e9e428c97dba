use crate::utils::error::Result;
use std::path::Path;

/// Creates `path` and any missing parents. Existing directories are left alone.
pub fn ensure_directory<P: AsRef<Path>>(path: P) -> Result<()> {
    let path = path.as_ref();
    if path.is_dir() {
        return Ok(());
    }

    std::fs::create_dir_all(path)?;
    tracing::debug!("Created directory {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::NotionError;
    use tempfile::TempDir;

    #[test]
    fn test_creates_nested_directories() {
        let root = TempDir::new().unwrap();
        let target = root.path().join("exports").join("2024").join("pages");

        ensure_directory(&target).unwrap();
        assert!(target.is_dir());
    }

    #[test]
    fn test_existing_directory_is_noop() {
        let root = TempDir::new().unwrap();
        std::fs::write(root.path().join("keep.md"), "content").unwrap();

        ensure_directory(root.path()).unwrap();
        ensure_directory(root.path()).unwrap();
        assert!(root.path().join("keep.md").exists());
    }

    #[test]
    fn test_file_in_the_way_is_an_error() {
        let root = TempDir::new().unwrap();
        let file = root.path().join("taken");
        std::fs::write(&file, "").unwrap();

        let err = ensure_directory(&file).unwrap_err();
        assert!(matches!(err, NotionError::IoError(_)));
    }
}
