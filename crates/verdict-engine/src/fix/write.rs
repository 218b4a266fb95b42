use std::fs;
use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;

use crate::error::EngineError;

/// Replace `path` with `content` via a temp file in the same directory.
///
/// Readers see either the old file or the new one, never a partial write.
/// Existing permissions carry over to the new file.
pub fn write_atomic(path: &Path, content: &str) -> Result<(), EngineError> {
    let failed = |source| EngineError::Write {
        path: path.to_path_buf(),
        source,
    };
    let dir = path
        .parent()
        .filter(|dir| !dir.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    fs::create_dir_all(dir).map_err(failed)?;

    let mut temp = NamedTempFile::new_in(dir).map_err(failed)?;
    temp.write_all(content.as_bytes()).map_err(failed)?;
    temp.as_file().sync_all().map_err(failed)?;

    if let Ok(metadata) = fs::metadata(path) {
        fs::set_permissions(temp.path(), metadata.permissions()).map_err(failed)?;
    }

    temp.persist(path).map_err(|error| failed(error.error))?;
    tracing::debug!(path = %path.display(), bytes = content.len(), "wrote file");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn replaces_existing_file_and_leaves_no_temp_files() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("ADR-0001.md");
        fs::write(&path, "old").unwrap();

        write_atomic(&path, "new content\n").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "new content\n");
        let entries: Vec<_> = fs::read_dir(tmp.path()).unwrap().collect();
        assert_eq!(entries.len(), 1);
    }

    #[test]
    fn creates_missing_parent_directories() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("docs/decisions/README.md");
        write_atomic(&path, "# Index\n").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "# Index\n");
    }
}
