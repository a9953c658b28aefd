//! eslint-scaffold CLI binary entry point.
//! Delegates to modules for detection/install/config/tasks and prints the report.

mod cli;
mod config;
mod eslintrc;
mod install;
mod models;
mod output;
mod setup;
mod tasks;
mod utils;

use clap::Parser;
use cli::{Cli, Commands};
// Colorization centralized in utils; no direct owo_colors usage here

fn main() {
    let cli = Cli::parse();
    // No subcommand means the full bootstrap, matching a bare invocation
    // from the target project directory.
    match cli.cmd.unwrap_or_default() {
        Commands::Version => {
            println!("{}", env!("CARGO_PKG_VERSION"));
        }
        Commands::Setup {
            project_root,
            output,
            package_manager,
            skip_install,
            dry_run,
        } => {
            let eff = config::resolve_effective(
                project_root.as_deref(),
                output.as_deref(),
                package_manager.as_deref(),
                if skip_install { Some(true) } else { None },
                if dry_run { Some(true) } else { None },
            );
            // Friendly note if no scaffold config was found
            if eff.output != "json" && config::load_config(&eff.project_root).is_none() {
                eprintln!(
                    "{} {}",
                    crate::utils::note_prefix(),
                    "No eslint-scaffold.toml found; using defaults."
                );
            }
            let report = setup::run_setup(&eff);
            output::print_report(&report, &eff.output);
            // Partial failures stay visible in the report only; the
            // process still exits with the default success code.
        }
    }
}
