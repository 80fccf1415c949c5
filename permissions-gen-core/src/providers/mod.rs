//! Filesystem access behind a trait, so the pipeline can run against memory in tests

use std::path::Path;

use crate::error::PermissionsGenResult;

// Native filesystem provider implementation
pub(crate) mod filesystem;

// In-memory provider implementation
pub(crate) mod memory;

pub use filesystem::NativeFileSystemProvider;
pub use memory::InMemoryFileSystemProvider;

/// The disk operations the pipeline needs.
pub trait FileSystem {
    fn read_to_string(&self, path: &Path) -> PermissionsGenResult<String>;

    /// Replace the whole file.
    fn write(&self, path: &Path, contents: &str) -> PermissionsGenResult<()>;

    /// True for an existing regular file (not a directory).
    fn is_file(&self, path: &Path) -> bool;

    fn is_dir(&self, path: &Path) -> bool;
}
