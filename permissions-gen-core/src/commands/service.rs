//! Service layer: loads the document and drives every artifact in sequence

use std::fmt;
use std::path::{Path, PathBuf};

use log::{debug, info};

use crate::config::PolicyDocument;
use crate::error::PermissionsGenResult;
use crate::normalize::build_permission_set;
use crate::providers::FileSystem;
use crate::rules::build_codex_rules;
use crate::sections::build_sections;

/// The generated artifacts, in processing order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Artifact {
    Claude,
    Codex,
    Opencode,
}

impl Artifact {
    /// Short name used in log lines and errors.
    pub fn name(self) -> &'static str {
        match self {
            Artifact::Claude => "claude",
            Artifact::Codex => "codex",
            Artifact::Opencode => "opencode",
        }
    }
}

impl fmt::Display for Artifact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// What happened to one artifact during a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArtifactOutcome {
    /// The target file (or, for Codex, its directory) does not exist.
    Skipped,
    /// The computed content equals what is already on disk; nothing was written.
    Unchanged,
    Written,
}

/// Default locations, relative to the repository root.
pub const DEFAULT_DATA_PATH: &str = ".chezmoidata/permissions.yaml";
pub const DEFAULT_CLAUDE_PATH: &str = "dot_claude/settings.json.tmpl";
pub const DEFAULT_CODEX_PATH: &str = "dot_codex/rules/default.rules";
pub const DEFAULT_OPENCODE_PATH: &str = "dot_config/opencode/opencode.json";

/// Target files of one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetPaths {
    pub claude: PathBuf,
    pub codex: PathBuf,
    pub opencode: PathBuf,
}

impl TargetPaths {
    /// The default targets under `root`.
    pub fn under_root(root: &Path) -> Self {
        Self {
            claude: root.join(DEFAULT_CLAUDE_PATH),
            codex: root.join(DEFAULT_CODEX_PATH),
            opencode: root.join(DEFAULT_OPENCODE_PATH),
        }
    }
}

/// Outcome of every artifact of a completed run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunReport {
    pub claude: ArtifactOutcome,
    pub codex: ArtifactOutcome,
    pub opencode: ArtifactOutcome,
}

impl RunReport {
    /// How many artifacts were written.
    pub fn written(&self) -> usize {
        [self.claude, self.codex, self.opencode]
            .iter()
            .filter(|outcome| **outcome == ArtifactOutcome::Written)
            .count()
    }
}

/// Compiles the permissions document into the Claude, Codex and OpenCode artifacts.
///
/// Artifacts are processed strictly in order and the first error aborts the
/// run. Files already written by earlier steps stay written.
#[derive(Debug)]
pub struct PermissionsGenService<F: FileSystem> {
    pub(crate) fs: F,
}

impl<F: FileSystem> PermissionsGenService<F> {
    /// Create a service over `fs`.
    pub fn new(fs: F) -> Self {
        Self { fs }
    }

    /// The underlying filesystem.
    pub fn file_system(&self) -> &F {
        &self.fs
    }

    /// Read and decode the permissions document.
    pub fn load_document(&self, path: &Path) -> PermissionsGenResult<PolicyDocument> {
        debug!("Loading permissions document from {}", path.display());
        let data = self.fs.read_to_string(path)?;
        PolicyDocument::from_yaml_str(&data)
    }

    /// Update all three artifacts from `doc`.
    pub fn run(
        &self,
        doc: &PolicyDocument,
        targets: &TargetPaths,
    ) -> PermissionsGenResult<RunReport> {
        let claude = self.write_claude_permissions(&build_permission_set(doc), &targets.claude)?;
        let codex = self.write_codex_rules(&build_codex_rules(doc), &targets.codex)?;
        let opencode = self.write_opencode_permissions(&build_sections(doc), &targets.opencode)?;

        Ok(RunReport {
            claude,
            codex,
            opencode,
        })
    }

    /// Read `path`, transform it, and write it back only if the content changed.
    /// A missing file is skipped, not an error.
    pub(crate) fn update_file_if_changed(
        &self,
        artifact: Artifact,
        path: &Path,
        transform: impl FnOnce(&str) -> PermissionsGenResult<String>,
    ) -> PermissionsGenResult<ArtifactOutcome> {
        if !self.fs.is_file(path) {
            info!("skipping {}: {} not found", artifact, path.display());
            return Ok(ArtifactOutcome::Skipped);
        }

        let contents = self.fs.read_to_string(path)?;
        let updated = transform(&contents)?;
        self.write_if_changed(artifact, path, Some(&contents), &updated)
    }

    pub(crate) fn write_if_changed(
        &self,
        artifact: Artifact,
        path: &Path,
        current: Option<&str>,
        updated: &str,
    ) -> PermissionsGenResult<ArtifactOutcome> {
        if current == Some(updated) {
            debug!("{}: {} is up to date", artifact, path.display());
            return Ok(ArtifactOutcome::Unchanged);
        }

        self.fs.write(path, updated)?;
        info!("{}: updated {}", artifact, path.display());
        Ok(ArtifactOutcome::Written)
    }
}
