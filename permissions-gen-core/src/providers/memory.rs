//! In-memory filesystem provider.

use std::cell::{Cell, RefCell};
use std::collections::{BTreeMap, BTreeSet};
use std::io;
use std::path::{Path, PathBuf};

use super::FileSystem;
use crate::error::{PermissionsGenError, PermissionsGenResult};

/// Files and directories held in memory. Counts every write so callers can
/// check that unchanged artifacts were left alone.
#[derive(Debug, Default)]
pub struct InMemoryFileSystemProvider {
    files: RefCell<BTreeMap<PathBuf, String>>,
    dirs: RefCell<BTreeSet<PathBuf>>,
    writes: Cell<usize>,
}

impl InMemoryFileSystemProvider {
    /// Create an empty filesystem.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a file, registering its parent directories.
    pub fn with_file(self, path: impl Into<PathBuf>, contents: impl Into<String>) -> Self {
        let path = path.into();
        if let Some(parent) = path.parent() {
            self.add_dir(parent);
        }
        self.files.borrow_mut().insert(path, contents.into());
        self
    }

    /// Add a directory and its ancestors.
    pub fn with_dir(self, path: impl Into<PathBuf>) -> Self {
        self.add_dir(&path.into());
        self
    }

    /// Current contents of a file, if it exists.
    pub fn contents(&self, path: impl AsRef<Path>) -> Option<String> {
        self.files.borrow().get(path.as_ref()).cloned()
    }

    /// Number of successful writes so far.
    pub fn write_count(&self) -> usize {
        self.writes.get()
    }

    fn add_dir(&self, path: &Path) {
        let mut dirs = self.dirs.borrow_mut();
        for ancestor in path.ancestors() {
            if ancestor.as_os_str().is_empty() {
                continue;
            }
            dirs.insert(ancestor.to_path_buf());
        }
    }
}

impl FileSystem for InMemoryFileSystemProvider {
    fn read_to_string(&self, path: &Path) -> PermissionsGenResult<String> {
        self.contents(path).ok_or_else(|| {
            PermissionsGenError::file_system(
                "read",
                path,
                io::Error::new(io::ErrorKind::NotFound, "no such file"),
            )
        })
    }

    fn write(&self, path: &Path, contents: &str) -> PermissionsGenResult<()> {
        let parent_missing = path
            .parent()
            .is_some_and(|parent| !parent.as_os_str().is_empty() && !self.is_dir(parent));
        if parent_missing {
            return Err(PermissionsGenError::file_system(
                "write",
                path,
                io::Error::new(io::ErrorKind::NotFound, "parent directory missing"),
            ));
        }
        self.files
            .borrow_mut()
            .insert(path.to_path_buf(), contents.to_string());
        self.writes.set(self.writes.get() + 1);
        Ok(())
    }

    fn is_file(&self, path: &Path) -> bool {
        self.files.borrow().contains_key(path)
    }

    fn is_dir(&self, path: &Path) -> bool {
        self.dirs.borrow().contains(path)
    }
}
