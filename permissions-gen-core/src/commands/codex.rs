//! Codex rules file, regenerated whole

use std::path::Path;

use log::info;

use super::service::{Artifact, ArtifactOutcome, PermissionsGenService};
use crate::error::PermissionsGenResult;
use crate::providers::FileSystem;
use crate::render::render_codex_rules;
use crate::types::CommandRule;

impl<F: FileSystem> PermissionsGenService<F> {
    /// Write the rules file at `path`. Skipped when its directory does not exist.
    pub fn write_codex_rules(
        &self,
        rules: &[CommandRule],
        path: &Path,
    ) -> PermissionsGenResult<ArtifactOutcome> {
        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        if !self.fs.is_dir(dir) {
            info!("skipping {}: {} not found", Artifact::Codex, dir.display());
            return Ok(ArtifactOutcome::Skipped);
        }

        let content = render_codex_rules(rules);
        let current = if self.fs.is_file(path) {
            Some(self.fs.read_to_string(path)?)
        } else {
            None
        };
        self.write_if_changed(Artifact::Codex, path, current.as_deref(), &content)
    }
}
