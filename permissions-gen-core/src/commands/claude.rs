//! Claude settings template: the `permissions` object

use std::path::Path;

use super::service::{Artifact, ArtifactOutcome, PermissionsGenService};
use crate::error::{PermissionsGenError, PermissionsGenResult};
use crate::providers::FileSystem;
use crate::render::{render_permission_set, RenderedBlock};
use crate::splice::splice_block;
use crate::types::PermissionSet;

/// Key whose object value is replaced when the file has no markers.
pub const CLAUDE_PERMISSIONS_KEY: &str = "permissions";

impl<F: FileSystem> PermissionsGenService<F> {
    /// Splice the permission set into the Claude settings template at `path`.
    pub fn write_claude_permissions(
        &self,
        permissions: &PermissionSet,
        path: &Path,
    ) -> PermissionsGenResult<ArtifactOutcome> {
        self.update_file_if_changed(Artifact::Claude, path, |contents| {
            let block = RenderedBlock::from_json(render_permission_set(permissions)?)?;
            splice_block(contents, CLAUDE_PERMISSIONS_KEY, &block)
                .map_err(|e| PermissionsGenError::locate(Artifact::Claude.name(), e))
        })
    }
}
