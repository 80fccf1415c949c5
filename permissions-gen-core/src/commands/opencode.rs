//! OpenCode config: the `permission` object

use std::path::Path;

use super::service::{Artifact, ArtifactOutcome, PermissionsGenService};
use crate::error::{PermissionsGenError, PermissionsGenResult};
use crate::providers::FileSystem;
use crate::render::{render_section_map, RenderedBlock};
use crate::splice::splice_block;
use crate::types::SectionSpec;

/// Key whose object value is replaced when the file has no markers.
pub const OPENCODE_PERMISSION_KEY: &str = "permission";

impl<F: FileSystem> PermissionsGenService<F> {
    /// Splice the section map into the OpenCode config at `path`.
    pub fn write_opencode_permissions(
        &self,
        sections: &[SectionSpec],
        path: &Path,
    ) -> PermissionsGenResult<ArtifactOutcome> {
        let block = RenderedBlock::from_json(render_section_map(sections))?;

        self.update_file_if_changed(Artifact::Opencode, path, |contents| {
            splice_block(contents, OPENCODE_PERMISSION_KEY, &block)
                .map_err(|e| PermissionsGenError::locate(Artifact::Opencode.name(), e))
        })
    }
}
