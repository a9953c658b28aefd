//! Local ESLint detection and package-manager installation.
//!
//! Detection is an existence check on the package's directory inside
//! `node_modules`; no version check is performed. Installation spawns the
//! package manager synchronously with the child's standard streams
//! inherited, so installer output reaches the user's console live.

use std::path::Path;
use std::process::{Command, ExitStatus};

/// Package installed and looked up in the local dependency store.
pub const LINTER_PACKAGE: &str = "eslint";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Supported package managers for the install step.
pub enum PackageManager {
    Npm,
    Yarn,
    Pnpm,
}

impl PackageManager {
    /// Parse a package-manager name; returns `None` for unknown names.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "npm" => Some(PackageManager::Npm),
            "yarn" => Some(PackageManager::Yarn),
            "pnpm" => Some(PackageManager::Pnpm),
            _ => None,
        }
    }

    pub fn program(&self) -> &'static str {
        match self {
            PackageManager::Npm => "npm",
            PackageManager::Yarn => "yarn",
            PackageManager::Pnpm => "pnpm",
        }
    }

    fn install_args(&self) -> &'static [&'static str] {
        match self {
            PackageManager::Npm => &["install", LINTER_PACKAGE],
            PackageManager::Yarn => &["add", LINTER_PACKAGE],
            PackageManager::Pnpm => &["add", LINTER_PACKAGE],
        }
    }

    /// The command line the install step would run, for previews and logs.
    pub fn install_command_line(&self) -> String {
        format!("{} {}", self.program(), self.install_args().join(" "))
    }
}

/// Check for the linter package inside the local dependency store.
pub fn eslint_installed(root: &Path) -> bool {
    root.join("node_modules").join(LINTER_PACKAGE).exists()
}

/// Build the install subprocess without spawning it.
pub(crate) fn install_command(root: &Path, pm: PackageManager) -> Command {
    let mut cmd = Command::new(pm.program());
    cmd.args(pm.install_args()).current_dir(root);
    cmd
}

/// Install the linter package, blocking until the package manager exits.
///
/// Standard streams are inherited from the parent process. The caller
/// inspects the returned `ExitStatus`; spawn failures surface as `Err`.
pub fn install_eslint(root: &Path, pm: PackageManager) -> std::io::Result<ExitStatus> {
    install_command(root, pm).status()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_detects_local_install() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        assert!(!eslint_installed(root));

        std::fs::create_dir_all(root.join("node_modules/eslint")).unwrap();
        assert!(eslint_installed(root));
    }

    #[test]
    fn test_parse_names() {
        assert_eq!(PackageManager::parse("npm"), Some(PackageManager::Npm));
        assert_eq!(PackageManager::parse("Yarn"), Some(PackageManager::Yarn));
        assert_eq!(PackageManager::parse(" pnpm "), Some(PackageManager::Pnpm));
        assert_eq!(PackageManager::parse("cargo"), None);
    }

    #[test]
    fn test_install_command_shape() {
        let dir = tempdir().unwrap();
        let root = dir.path();

        let cmd = install_command(root, PackageManager::Npm);
        assert_eq!(cmd.get_program(), "npm");
        let args: Vec<String> = cmd
            .get_args()
            .map(|a| a.to_string_lossy().to_string())
            .collect();
        assert_eq!(args, vec!["install", "eslint"]);
        assert_eq!(cmd.get_current_dir(), Some(root));

        let cmd = install_command(root, PackageManager::Pnpm);
        let args: Vec<String> = cmd
            .get_args()
            .map(|a| a.to_string_lossy().to_string())
            .collect();
        assert_eq!(args, vec!["add", "eslint"]);
    }

    #[test]
    fn test_install_command_line_preview() {
        assert_eq!(
            PackageManager::Npm.install_command_line(),
            "npm install eslint"
        );
        assert_eq!(
            PackageManager::Yarn.install_command_line(),
            "yarn add eslint"
        );
    }
}
