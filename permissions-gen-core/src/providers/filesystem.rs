//! Native filesystem provider implementation using `std::fs`.

use std::fs;
use std::path::Path;

use super::FileSystem;
use crate::error::{PermissionsGenError, PermissionsGenResult};

/// Files are written with the process umask applied to `0o666`, which for the
/// usual umask matches the `0o644` of a hand-edited dotfile.
#[derive(Debug, Clone, Copy, Default)]
pub struct NativeFileSystemProvider;

impl FileSystem for NativeFileSystemProvider {
    fn read_to_string(&self, path: &Path) -> PermissionsGenResult<String> {
        fs::read_to_string(path).map_err(|e| PermissionsGenError::file_system("read", path, e))
    }

    fn write(&self, path: &Path, contents: &str) -> PermissionsGenResult<()> {
        fs::write(path, contents).map_err(|e| PermissionsGenError::file_system("write", path, e))
    }

    fn is_file(&self, path: &Path) -> bool {
        fs::metadata(path).is_ok_and(|metadata| metadata.is_file())
    }

    fn is_dir(&self, path: &Path) -> bool {
        fs::metadata(path).is_ok_and(|metadata| metadata.is_dir())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_read_write_roundtrip() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("settings.json.tmpl");

        NativeFileSystemProvider.write(&path, "{}\n").unwrap();
        let content = NativeFileSystemProvider.read_to_string(&path).unwrap();

        assert_eq!(content, "{}\n");
    }

    #[test]
    fn test_read_file_not_found() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nonexistent_file.txt");

        let error = NativeFileSystemProvider.read_to_string(&path).unwrap_err();

        assert!(matches!(error, PermissionsGenError::FileSystem { .. }));
        assert!(error.to_string().contains("nonexistent_file.txt"));
    }

    #[test]
    fn test_is_file_and_is_dir() {
        let temp_dir = TempDir::new().unwrap();
        let file = temp_dir.path().join("opencode.json");
        fs::write(&file, "{}").unwrap();

        assert!(NativeFileSystemProvider.is_file(&file));
        assert!(!NativeFileSystemProvider.is_dir(&file));
        assert!(NativeFileSystemProvider.is_dir(temp_dir.path()));
        assert!(!NativeFileSystemProvider.is_file(temp_dir.path()));
        assert!(!NativeFileSystemProvider.is_file(&temp_dir.path().join("missing")));
    }
}
