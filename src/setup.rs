//! Setup orchestration: detect, install, configure, generate.
//!
//! Runs the four bootstrap steps in fixed order against an explicit
//! `Effective` config, so no step reads ambient process state. Every
//! fallible step is caught and recorded as a `StepOutcome`; one failure
//! never aborts the remaining steps, and the run always completes with a
//! full report.

use crate::config::Effective;
use crate::models::{SetupReport, StepOutcome, Summary};
use crate::{eslintrc, install, tasks, utils};

/// Execute the full bootstrap and return its report.
pub fn run_setup(eff: &Effective) -> SetupReport {
    let root = &eff.project_root;
    let write = !eff.dry_run;
    let chatty = eff.output != "json";
    let mut steps: Vec<StepOutcome> = Vec::new();

    // Step A: dependency presence check. Presence alone is sufficient;
    // no version check is performed.
    if chatty {
        eprintln!(
            "{} {}",
            utils::info_prefix(),
            "Checking for a local ESLint install..."
        );
    }
    let present = install::eslint_installed(root);
    steps.push(StepOutcome {
        step: "detect".into(),
        status: "ok".into(),
        detail: if present {
            "ESLint is already installed locally".into()
        } else {
            "ESLint is not installed locally".into()
        },
    });

    // Step B: conditional install, gated on absence.
    if present {
        steps.push(StepOutcome {
            step: "install".into(),
            status: "skipped".into(),
            detail: "ESLint already present in node_modules".into(),
        });
    } else if eff.skip_install {
        steps.push(StepOutcome {
            step: "install".into(),
            status: "skipped".into(),
            detail: "install disabled by configuration".into(),
        });
    } else if eff.dry_run {
        steps.push(StepOutcome {
            step: "install".into(),
            status: "planned".into(),
            detail: format!("would run `{}`", eff.package_manager.install_command_line()),
        });
    } else {
        if chatty {
            eprintln!(
                "{} {}",
                utils::info_prefix(),
                format!("Installing ESLint with `{}`...", eff.package_manager.install_command_line())
            );
        }
        match install::install_eslint(root, eff.package_manager) {
            Ok(status) if status.success() => steps.push(StepOutcome {
                step: "install".into(),
                status: "ok".into(),
                detail: format!("ran `{}`", eff.package_manager.install_command_line()),
            }),
            Ok(status) => {
                eprintln!(
                    "{} {}",
                    utils::error_prefix(),
                    format!("ESLint install failed: {}", status)
                );
                steps.push(StepOutcome {
                    step: "install".into(),
                    status: "failed".into(),
                    detail: format!("installer exited with {}", status),
                });
            }
            Err(e) => {
                eprintln!(
                    "{} {}",
                    utils::error_prefix(),
                    format!(
                        "could not launch {}: {}",
                        eff.package_manager.program(),
                        e
                    )
                );
                steps.push(StepOutcome {
                    step: "install".into(),
                    status: "failed".into(),
                    detail: format!("could not launch {}: {}", eff.package_manager.program(), e),
                });
            }
        }
    }

    // Step C: configuration materialization.
    if chatty {
        eprintln!(
            "{} {}",
            utils::info_prefix(),
            format!("Creating or updating {}...", eslintrc::CONFIG_FILE)
        );
    }
    match eslintrc::materialize_config(root, write) {
        Ok(action) => {
            if chatty && action.renamed_legacy && write {
                eprintln!(
                    "{} {}",
                    utils::info_prefix(),
                    format!(
                        "Renamed {} to {}.",
                        eslintrc::LEGACY_CONFIG_FILE,
                        eslintrc::CONFIG_FILE
                    )
                );
            }
            let detail = match (write, action.renamed_legacy) {
                (true, true) => format!(
                    "renamed {} and wrote {}",
                    eslintrc::LEGACY_CONFIG_FILE,
                    eslintrc::CONFIG_FILE
                ),
                (true, false) => format!("wrote {}", eslintrc::CONFIG_FILE),
                (false, true) => format!(
                    "would rename {} and write {}",
                    eslintrc::LEGACY_CONFIG_FILE,
                    eslintrc::CONFIG_FILE
                ),
                (false, false) => format!("would write {}", eslintrc::CONFIG_FILE),
            };
            steps.push(StepOutcome {
                step: "eslintrc".into(),
                status: if write { "ok" } else { "planned" }.into(),
                detail,
            });
        }
        Err(e) => {
            eprintln!(
                "{} {}",
                utils::error_prefix(),
                format!("could not write {}: {}", eslintrc::CONFIG_FILE, e)
            );
            steps.push(StepOutcome {
                step: "eslintrc".into(),
                status: "failed".into(),
                detail: format!("could not write {}: {}", eslintrc::CONFIG_FILE, e),
            });
        }
    }

    // Step D: editor task generation.
    if chatty {
        eprintln!(
            "{} {}",
            utils::info_prefix(),
            format!("Creating {}/{}...", tasks::TASKS_DIR, tasks::TASKS_FILE)
        );
    }
    match tasks::write_tasks(root, write) {
        Ok(action) => {
            let target = format!("{}/{}", tasks::TASKS_DIR, tasks::TASKS_FILE);
            let detail = match (write, action.created_dir) {
                (true, true) => format!("created {} and wrote {}", tasks::TASKS_DIR, target),
                (true, false) => format!("wrote {}", target),
                (false, true) => format!("would create {} and write {}", tasks::TASKS_DIR, target),
                (false, false) => format!("would write {}", target),
            };
            steps.push(StepOutcome {
                step: "tasks".into(),
                status: if write { "ok" } else { "planned" }.into(),
                detail,
            });
        }
        Err(e) => {
            eprintln!(
                "{} {}",
                utils::error_prefix(),
                format!(
                    "could not write {}/{}: {}",
                    tasks::TASKS_DIR,
                    tasks::TASKS_FILE,
                    e
                )
            );
            steps.push(StepOutcome {
                step: "tasks".into(),
                status: "failed".into(),
                detail: format!(
                    "could not write {}/{}: {}",
                    tasks::TASKS_DIR,
                    tasks::TASKS_FILE,
                    e
                ),
            });
        }
    }

    let summary = summarize(&steps);
    SetupReport { steps, summary }
}

fn summarize(steps: &[StepOutcome]) -> Summary {
    let mut s = Summary {
        ok: 0,
        skipped: 0,
        planned: 0,
        failed: 0,
    };
    for st in steps {
        match st.status.as_str() {
            "ok" => s.ok += 1,
            "skipped" => s.skipped += 1,
            "planned" => s.planned += 1,
            _ => s.failed += 1,
        }
    }
    s
}
