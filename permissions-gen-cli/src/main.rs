use anyhow::{Context, Result};
use clap::Parser;
use log::{debug, LevelFilter};
use permissions_gen_core::{
    NativeFileSystemProvider, PermissionsGenService, TargetPaths, DEFAULT_CLAUDE_PATH,
    DEFAULT_CODEX_PATH, DEFAULT_DATA_PATH, DEFAULT_OPENCODE_PATH,
};

mod paths;

use paths::PathResolver;

/// Regenerate the Claude, Codex and OpenCode permission configurations from
/// the repository's permissions document.
#[derive(Parser, Debug)]
#[command(name = "permissions-gen", version, about, long_about = None)]
struct Cli {
    /// Path to the permissions YAML document [default: <repo>/.chezmoidata/permissions.yaml]
    #[arg(long, env = "PERMISSIONS_GEN_DATA", value_name = "PATH")]
    data: Option<String>,

    /// Path to the Claude settings template [default: <repo>/dot_claude/settings.json.tmpl]
    #[arg(long, env = "PERMISSIONS_GEN_TARGET", value_name = "PATH")]
    target: Option<String>,

    /// Path to the Codex rules file [default: <repo>/dot_codex/rules/default.rules]
    #[arg(long, env = "PERMISSIONS_GEN_CODEX", value_name = "PATH")]
    codex: Option<String>,

    /// Path to the OpenCode config [default: <repo>/dot_config/opencode/opencode.json]
    #[arg(long, env = "PERMISSIONS_GEN_OPENCODE", value_name = "PATH")]
    opencode: Option<String>,

    /// Suppress skip messages
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,

    /// Log every decision, including unchanged files
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn log_level(&self) -> LevelFilter {
        if self.quiet {
            LevelFilter::Warn
        } else if self.verbose {
            LevelFilter::Debug
        } else {
            LevelFilter::Info
        }
    }
}

fn init_logging(level: LevelFilter) {
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format_timestamp(None)
        .format_target(false)
        .init();
}

fn run(cli: &Cli) -> Result<()> {
    let mut resolver = PathResolver::from_env()?;
    let data = resolver.resolve_or_default(cli.data.as_deref(), DEFAULT_DATA_PATH)?;
    let targets = TargetPaths {
        claude: resolver.resolve_or_default(cli.target.as_deref(), DEFAULT_CLAUDE_PATH)?,
        codex: resolver.resolve_or_default(cli.codex.as_deref(), DEFAULT_CODEX_PATH)?,
        opencode: resolver.resolve_or_default(cli.opencode.as_deref(), DEFAULT_OPENCODE_PATH)?,
    };

    let service = PermissionsGenService::new(NativeFileSystemProvider);
    let doc = service
        .load_document(&data)
        .with_context(|| format!("load {}", data.display()))?;
    let report = service
        .run(&doc, &targets)
        .context("generate permissions")?;

    debug!("{} file(s) written", report.written());
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.log_level());
    run(&cli)
}
