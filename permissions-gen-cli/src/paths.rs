//! Path resolution: repository root discovery, `~` expansion and defaults

use std::env;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, bail, Context, Result};
use log::debug;
use permissions_gen_core::DEFAULT_DATA_PATH;

/// Walk up from `start` until a directory containing the permissions document is found.
pub fn find_repo_root(start: &Path) -> Result<PathBuf> {
    start
        .ancestors()
        .find(|dir| dir.join(DEFAULT_DATA_PATH).is_file())
        .map(Path::to_path_buf)
        .ok_or_else(|| anyhow!("could not locate repo root from {}", start.display()))
}

/// Expand a leading `~` or `~/`. `~user` forms are not supported.
pub fn expand_home(path: &str, home: Option<&Path>) -> Result<PathBuf> {
    let Some(rest) = path.strip_prefix('~') else {
        return Ok(PathBuf::from(path));
    };
    if !rest.is_empty() && !rest.starts_with('/') {
        bail!("unsupported home path: {}", path);
    }

    let home = home.context("resolve home: HOME is not set")?;
    Ok(match rest.trim_start_matches('/') {
        "" => home.to_path_buf(),
        relative => home.join(relative),
    })
}

/// Resolves the paths of one run against a working directory and home directory.
#[derive(Debug)]
pub struct PathResolver {
    cwd: PathBuf,
    home: Option<PathBuf>,
    root: Option<PathBuf>,
}

impl PathResolver {
    /// Resolve against `cwd`, expanding `~` to `home`.
    pub fn new(cwd: impl Into<PathBuf>, home: Option<PathBuf>) -> Self {
        Self {
            cwd: cwd.into(),
            home,
            root: None,
        }
    }

    /// Use the process working directory and `$HOME`.
    pub fn from_env() -> Result<Self> {
        let cwd = env::current_dir().context("get working directory")?;
        let home = env::var_os("HOME")
            .filter(|home| !home.is_empty())
            .map(PathBuf::from);
        Ok(Self::new(cwd, home))
    }

    /// The repository root, discovered on first use.
    pub fn repo_root(&mut self) -> Result<&Path> {
        if self.root.is_none() {
            let root = find_repo_root(&self.cwd)?;
            debug!("Repository root: {}", root.display());
            self.root = Some(root);
        }
        self.root
            .as_deref()
            .ok_or_else(|| anyhow!("repository root unavailable"))
    }

    /// Expand `~` and make `path` absolute against the working directory.
    pub fn resolve(&self, path: &str) -> Result<PathBuf> {
        let expanded = expand_home(path, self.home.as_deref())?;
        if expanded.is_absolute() {
            Ok(expanded)
        } else {
            Ok(self.cwd.join(expanded))
        }
    }

    /// Resolve `path` when given, else join `default` to the repository root.
    pub fn resolve_or_default(&mut self, path: Option<&str>, default: &str) -> Result<PathBuf> {
        match path.filter(|path| !path.is_empty()) {
            Some(path) => self.resolve(path),
            None => Ok(self.repo_root()?.join(default)),
        }
    }
}
