//! Configuration discovery and effective settings resolution.
//!
//! The tool reads `eslint-scaffold.toml|yaml|yml` from the project root
//! (or closest ancestor) and merges it with CLI flags to produce an
//! `Effective` config. Defaults:
//! - `output`: `human`
//! - `install.packageManager`: `npm`
//! - `install.skip`: false
//! - dry-run: false (CLI only)
//!
//! Overrides precedence: CLI > config file > defaults.

use crate::install::PackageManager;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Default, Deserialize, Clone)]
/// Install-related configuration section under `[install]`.
pub struct InstallCfg {
    pub skip: Option<bool>,
    #[serde(rename = "packageManager")]
    pub package_manager: Option<String>,
}

#[derive(Debug, Default, Deserialize, Clone)]
/// Root configuration loaded from `eslint-scaffold.toml|yaml`.
pub struct ScaffoldConfig {
    pub output: Option<String>,
    #[serde(default)]
    pub install: Option<InstallCfg>,
}

#[derive(Debug, Clone)]
/// Fully-resolved configuration used by the setup run after applying
/// precedence. Every step receives the root from here rather than reading
/// the process working directory.
pub struct Effective {
    pub project_root: PathBuf,
    pub output: String,
    pub package_manager: PackageManager,
    pub skip_install: bool,
    pub dry_run: bool,
}

/// Walk upward from `start` to detect the project root.
///
/// Stops when an `eslint-scaffold.toml|yaml|yml`, a `package.json`, or a
/// `.git` directory is found.
pub fn detect_project_root(start: &Path) -> PathBuf {
    let mut cur = start;
    loop {
        if cur.join("eslint-scaffold.toml").exists()
            || cur.join("eslint-scaffold.yaml").exists()
            || cur.join("eslint-scaffold.yml").exists()
        {
            return cur.to_path_buf();
        }
        if cur.join("package.json").exists() || cur.join(".git").exists() {
            return cur.to_path_buf();
        }
        match cur.parent() {
            Some(p) => cur = p,
            None => return start.to_path_buf(),
        }
    }
}

/// Load `ScaffoldConfig` from `eslint-scaffold.toml` or `.yaml|.yml` if present.
pub fn load_config(root: &Path) -> Option<ScaffoldConfig> {
    let toml_path = root.join("eslint-scaffold.toml");
    if toml_path.exists() {
        let s = fs::read_to_string(&toml_path).ok()?;
        let cfg: ScaffoldConfig = toml::from_str(&s).ok()?;
        return Some(cfg);
    }
    for yml in ["eslint-scaffold.yaml", "eslint-scaffold.yml"] {
        let p = root.join(yml);
        if p.exists() {
            let s = fs::read_to_string(&p).ok()?;
            let cfg: ScaffoldConfig = serde_yaml::from_str(&s).ok()?;
            return Some(cfg);
        }
    }
    None
}

/// Resolve `Effective` by merging CLI flags, discovered config, and defaults.
pub fn resolve_effective(
    cli_project_root: Option<&str>,
    cli_output: Option<&str>,
    cli_package_manager: Option<&str>,
    cli_skip_install: Option<bool>,
    cli_dry_run: Option<bool>,
) -> Effective {
    let start = PathBuf::from(cli_project_root.unwrap_or("."));
    let project_root = detect_project_root(&start);
    let cfg = load_config(&project_root).unwrap_or_default();

    let output = cli_output
        .map(|s| s.to_string())
        .or(cfg.output)
        .unwrap_or_else(|| "human".to_string());

    // Unrecognized package-manager names fall back to npm.
    let package_manager = cli_package_manager
        .map(|s| s.to_string())
        .or_else(|| cfg.install.as_ref().and_then(|i| i.package_manager.clone()))
        .as_deref()
        .and_then(PackageManager::parse)
        .unwrap_or(PackageManager::Npm);

    let skip_install = cli_skip_install
        .or_else(|| cfg.install.as_ref().and_then(|i| i.skip))
        .unwrap_or(false);

    let dry_run = cli_dry_run.unwrap_or(false);

    Effective {
        project_root,
        output,
        package_manager,
        skip_install,
        dry_run,
    }
}
