//! VS Code task generation for the lint watcher.
//!
//! Produces `.vscode/tasks.json` with a single background task that runs
//! the watcher script from the local dependency store on folder open. The
//! problem matcher is a permissive catch-all, not a precise diagnostic
//! format. The file is always overwritten.

use serde_json::{json, Value as Json};
use std::fs;
use std::io;
use std::path::Path;

/// Editor dotfile directory holding the task file.
pub const TASKS_DIR: &str = ".vscode";
/// Task-runner descriptor filename.
pub const TASKS_FILE: &str = "tasks.json";
/// Label of the generated watcher task.
pub const WATCHER_TASK_LABEL: &str = "Start ESLint Watcher";

/// Shell command launching the watcher, relative to the project root.
const WATCHER_COMMAND: &str = "node node_modules/eslint-watcher/scripts/eslint-watcher.js";

/// The full task document written to disk.
///
/// Key order is the serialization order; `serde_json` is built with
/// `preserve_order`, so repeated runs produce identical bytes.
pub fn tasks_document() -> Json {
    json!({
        "version": "2.0.0",
        "tasks": [
            {
                "label": WATCHER_TASK_LABEL,
                "type": "shell",
                "command": WATCHER_COMMAND,
                "isBackground": true,
                "problemMatcher": {
                    "owner": "custom",
                    "pattern": {
                        "regexp": ".*",
                        "file": 1,
                        "location": 2,
                        "message": 3
                    },
                    "background": {
                        "activeOnStart": true,
                        "beginsPattern": ".*",
                        "endsPattern": ".*"
                    }
                },
                "presentation": {
                    "reveal": "always",
                    "panel": "new",
                    "group": "eslint-watcher"
                },
                "runOptions": {
                    "runOn": "folderOpen"
                }
            }
        ]
    })
}

/// What the task generation did (or would do, when `write` is false).
pub struct TasksAction {
    pub created_dir: bool,
}

/// Ensure the dotfile directory exists and overwrite the task file.
pub fn write_tasks(root: &Path, write: bool) -> io::Result<TasksAction> {
    let dir = root.join(TASKS_DIR);
    let created_dir = !dir.exists();
    if created_dir && write {
        fs::create_dir_all(&dir)?;
    }
    if write {
        let body = serde_json::to_string_pretty(&tasks_document()).unwrap();
        fs::write(dir.join(TASKS_FILE), body)?;
    }
    Ok(TasksAction { created_dir })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_creates_dir_and_file() {
        let dir = tempdir().unwrap();
        let root = dir.path();

        let action = write_tasks(root, true).unwrap();
        assert!(action.created_dir);
        let body = fs::read_to_string(root.join(TASKS_DIR).join(TASKS_FILE)).unwrap();
        let doc: Json = serde_json::from_str(&body).unwrap();
        assert_eq!(doc["version"], "2.0.0");
        assert_eq!(doc["tasks"].as_array().unwrap().len(), 1);
        assert_eq!(doc["tasks"][0]["label"], WATCHER_TASK_LABEL);
        assert_eq!(doc["tasks"][0]["isBackground"], true);
        assert_eq!(doc["tasks"][0]["runOptions"]["runOn"], "folderOpen");
    }

    #[test]
    fn test_existing_dir_is_reused() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        fs::create_dir_all(root.join(TASKS_DIR)).unwrap();

        let action = write_tasks(root, true).unwrap();
        assert!(!action.created_dir);
        assert!(root.join(TASKS_DIR).join(TASKS_FILE).exists());
    }

    #[test]
    fn test_overwrites_and_stays_byte_identical() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        let path = root.join(TASKS_DIR);
        fs::create_dir_all(&path).unwrap();
        fs::write(path.join(TASKS_FILE), "{ \"version\": \"1.0.0\" }").unwrap();

        write_tasks(root, true).unwrap();
        let first = fs::read(path.join(TASKS_FILE)).unwrap();
        write_tasks(root, true).unwrap();
        let second = fs::read(path.join(TASKS_FILE)).unwrap();
        assert_eq!(first, second);
        assert!(String::from_utf8(first).unwrap().contains(WATCHER_TASK_LABEL));
    }

    #[test]
    fn test_dry_run_writes_nothing() {
        let dir = tempdir().unwrap();
        let root = dir.path();

        let action = write_tasks(root, false).unwrap();
        assert!(action.created_dir);
        assert!(!root.join(TASKS_DIR).exists());
    }

    #[test]
    fn test_write_fails_when_dir_path_is_a_file() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        fs::write(root.join(TASKS_DIR), "not a directory").unwrap();

        assert!(write_tasks(root, true).is_err());
    }
}
