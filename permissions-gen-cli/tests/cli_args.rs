use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const PERMISSIONS_YAML: &str = "\
bash:
  allow:
    - git status
    - git log
  deny:
    - rm -rf
claude:
  allow:
    - Read
    - __BASH__
opencode:
  bash:
    default: ask
  webfetch: allow
";

const CLAUDE_TEMPLATE: &str = "\
{
  \"model\": \"opus\",
  \"permissions\": {
    {{/* PERMISSIONS:START */}}
    {{/* PERMISSIONS:END */}}
  }
}
";

const OPENCODE_CONFIG: &str = "\
{
  \"$schema\": \"https://opencode.ai/config.json\",
  \"permission\": {}
}
";

fn permissions_gen(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("permissions-gen").expect("binary should be built");
    cmd.current_dir(dir)
        .env_remove("RUST_LOG")
        .env_remove("PERMISSIONS_GEN_DATA")
        .env_remove("PERMISSIONS_GEN_TARGET")
        .env_remove("PERMISSIONS_GEN_CODEX")
        .env_remove("PERMISSIONS_GEN_OPENCODE");
    cmd
}

fn write(root: &Path, relative: &str, contents: &str) {
    let path = root.join(relative);
    fs::create_dir_all(path.parent().expect("path has a parent")).expect("create dir");
    fs::write(path, contents).expect("write file");
}

fn full_repo() -> TempDir {
    let temp_dir = TempDir::new().expect("temp dir");
    let root = temp_dir.path();
    write(root, ".chezmoidata/permissions.yaml", PERMISSIONS_YAML);
    write(root, "dot_claude/settings.json.tmpl", CLAUDE_TEMPLATE);
    write(root, "dot_config/opencode/opencode.json", OPENCODE_CONFIG);
    fs::create_dir_all(root.join("dot_codex/rules")).expect("create codex dir");
    temp_dir
}

#[test]
fn help_lists_path_flags() {
    let temp_dir = TempDir::new().expect("temp dir");
    permissions_gen(temp_dir.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--data"))
        .stdout(predicate::str::contains("--opencode"))
        .stdout(predicate::str::contains("PERMISSIONS_GEN_CODEX"));
}

#[test]
fn fails_outside_a_repository() {
    let temp_dir = TempDir::new().expect("temp dir");
    permissions_gen(temp_dir.path())
        .assert()
        .code(1)
        .stderr(predicate::str::contains("could not locate repo root"));
}

#[test]
fn generates_all_three_artifacts() {
    let temp_dir = full_repo();
    let root = temp_dir.path();

    permissions_gen(root).assert().success();

    let claude = fs::read_to_string(root.join("dot_claude/settings.json.tmpl")).expect("claude");
    assert!(claude.contains(
        "    \"allow\": [\n      \"Read\",\n      \"Bash(git status:*)\",\n      \"Bash(git log:*)\"\n    ],"
    ));
    assert!(claude.contains("\"Bash(rm -rf:*)\""));
    assert!(claude.starts_with(
        "{\n  \"model\": \"opus\",\n  \"permissions\": {\n    {{/* PERMISSIONS:START */}}\n"
    ));

    let codex = fs::read_to_string(root.join("dot_codex/rules/default.rules")).expect("codex");
    assert!(codex.starts_with("# ~/.codex/rules/default.rules\n"));
    assert!(codex.contains("  pattern = [\"git\", [\n    \"status\",\n    \"log\",\n  ]],"));
    assert!(codex.contains("  decision = \"forbidden\","));

    let opencode =
        fs::read_to_string(root.join("dot_config/opencode/opencode.json")).expect("opencode");
    assert!(opencode.contains(
        "    \"bash\": {\n      \"*\": \"ask\",\n      \"git status\": \"allow\",\n      \"git status *\": \"allow\","
    ));
    assert!(opencode.contains("    \"webfetch\": \"allow\"\n  }\n}\n"));
}

#[test]
fn second_run_changes_nothing() {
    let temp_dir = full_repo();
    let root = temp_dir.path();
    permissions_gen(root).assert().success();

    let before: Vec<String> = [
        "dot_claude/settings.json.tmpl",
        "dot_codex/rules/default.rules",
        "dot_config/opencode/opencode.json",
    ]
    .iter()
    .map(|relative| fs::read_to_string(root.join(relative)).expect("read artifact"))
    .collect();

    permissions_gen(root)
        .assert()
        .success()
        .stderr(predicate::str::contains("updated").not());

    let after: Vec<String> = [
        "dot_claude/settings.json.tmpl",
        "dot_codex/rules/default.rules",
        "dot_config/opencode/opencode.json",
    ]
    .iter()
    .map(|relative| fs::read_to_string(root.join(relative)).expect("read artifact"))
    .collect();
    assert_eq!(before, after);
}

#[test]
fn missing_targets_are_skipped_and_quiet_hides_it() {
    let temp_dir = TempDir::new().expect("temp dir");
    let root = temp_dir.path();
    write(root, ".chezmoidata/permissions.yaml", PERMISSIONS_YAML);

    permissions_gen(root)
        .assert()
        .success()
        .stderr(predicate::str::contains("skipping claude:"))
        .stderr(predicate::str::contains("skipping codex:"))
        .stderr(predicate::str::contains("skipping opencode:"));

    permissions_gen(root)
        .arg("-q")
        .assert()
        .success()
        .stderr(predicate::str::is_empty());
}

#[test]
fn explicit_paths_from_flags_and_env() {
    let temp_dir = TempDir::new().expect("temp dir");
    let root = temp_dir.path();
    write(root, "policy/permissions.yaml", PERMISSIONS_YAML);
    write(root, "out/settings.json.tmpl", CLAUDE_TEMPLATE);

    permissions_gen(root)
        .args(["--data", "policy/permissions.yaml", "--target", "out/settings.json.tmpl"])
        .env("PERMISSIONS_GEN_CODEX", root.join("out/default.rules"))
        .env("PERMISSIONS_GEN_OPENCODE", root.join("out/opencode.json"))
        .assert()
        .success();

    assert!(root.join("out/default.rules").is_file());
    let claude = fs::read_to_string(root.join("out/settings.json.tmpl")).expect("claude");
    assert!(claude.contains("\"Bash(git log:*)\""));
}

#[test]
fn unlocatable_block_is_an_error() {
    let temp_dir = full_repo();
    let root = temp_dir.path();
    write(root, "dot_config/opencode/opencode.json", "{\n  \"theme\": \"system\"\n}\n");

    permissions_gen(root)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("opencode"))
        .stderr(predicate::str::contains("\"permission\" not found"));

    // Earlier artifacts are kept.
    assert!(root.join("dot_codex/rules/default.rules").is_file());
}
