//! Lint configuration materialization.
//!
//! Writes `.eslintrc.cjs` from a fixed template, renaming a legacy
//! `.eslintrc.js` into the new name when one is found first. The file is
//! fully regenerated on every run; manual edits to the `rules` section
//! are not merged and will be discarded.

use std::fs;
use std::io;
use std::path::Path;

/// Canonical configuration filename.
pub const CONFIG_FILE: &str = ".eslintrc.cjs";
/// Previous-generation configuration filename superseded by `CONFIG_FILE`.
pub const LEGACY_CONFIG_FILE: &str = ".eslintrc.js";

/// Fixed configuration payload written on every run.
pub const CONFIG_TEMPLATE: &str = r#"
  module.exports = {
    "env": {
      "browser": true,
      "es2021": true,
      "node": true
    },
    "extends": [
      "eslint:recommended",
      "plugin:react/recommended",
      "plugin:@typescript-eslint/recommended"
    ],
    "parserOptions": {
      "ecmaVersion": 2021,
      "sourceType": "module",
      "ecmaFeatures": {
        "jsx": true
      }
    },
    "settings": {
      "react": {
        "version": "detect"
      }
    },
    "rules": {
      // Add your custom rules here
    }
  };
"#;

/// What the materialization did (or would do, when `write` is false).
pub struct ConfigAction {
    pub renamed_legacy: bool,
}

/// Rename a legacy config when present, then write the template.
///
/// When `write` is false the filesystem is left untouched and the action
/// only reports what a real run would do. A completed rename is not
/// rolled back if the subsequent write fails.
pub fn materialize_config(root: &Path, write: bool) -> io::Result<ConfigAction> {
    let legacy = root.join(LEGACY_CONFIG_FILE);
    let target = root.join(CONFIG_FILE);

    let renamed_legacy = legacy.exists();
    if renamed_legacy && write {
        fs::rename(&legacy, &target)?;
    }
    if write {
        fs::write(&target, CONFIG_TEMPLATE)?;
    }
    Ok(ConfigAction { renamed_legacy })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_writes_template() {
        let dir = tempdir().unwrap();
        let root = dir.path();

        let action = materialize_config(root, true).unwrap();
        assert!(!action.renamed_legacy);
        let written = fs::read_to_string(root.join(CONFIG_FILE)).unwrap();
        assert_eq!(written, CONFIG_TEMPLATE);
        assert!(written.contains("\"eslint:recommended\""));
        assert!(written.contains("\"ecmaVersion\": 2021"));
    }

    #[test]
    fn test_renames_legacy_then_overwrites() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        fs::write(root.join(LEGACY_CONFIG_FILE), "module.exports = {};").unwrap();

        let action = materialize_config(root, true).unwrap();
        assert!(action.renamed_legacy);
        assert!(!root.join(LEGACY_CONFIG_FILE).exists());
        // Template wins over whatever the legacy file held
        let written = fs::read_to_string(root.join(CONFIG_FILE)).unwrap();
        assert_eq!(written, CONFIG_TEMPLATE);
    }

    #[test]
    fn test_overwrites_manual_edits() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        fs::write(root.join(CONFIG_FILE), "module.exports = { rules: { x: 1 } };").unwrap();

        materialize_config(root, true).unwrap();
        let written = fs::read_to_string(root.join(CONFIG_FILE)).unwrap();
        assert_eq!(written, CONFIG_TEMPLATE);
    }

    #[test]
    fn test_runs_are_idempotent() {
        let dir = tempdir().unwrap();
        let root = dir.path();

        materialize_config(root, true).unwrap();
        let first = fs::read(root.join(CONFIG_FILE)).unwrap();
        materialize_config(root, true).unwrap();
        let second = fs::read(root.join(CONFIG_FILE)).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_dry_run_leaves_files_alone() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        fs::write(root.join(LEGACY_CONFIG_FILE), "module.exports = {};").unwrap();

        let action = materialize_config(root, false).unwrap();
        assert!(action.renamed_legacy);
        assert!(root.join(LEGACY_CONFIG_FILE).exists());
        assert!(!root.join(CONFIG_FILE).exists());
    }
}
