//! CLI argument parsing via `clap`.

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "eslint-scaffold",
    version,
    about = "Bootstrap ESLint for a JS/TS project",
    long_about = "eslint-scaffold — a tiny CLI that installs ESLint when missing, writes .eslintrc.cjs, and generates a VS Code watcher task.\n\nRunning with no arguments performs the full setup against the current directory.\n\nConfiguration precedence: CLI > eslint-scaffold.toml > defaults.",
    after_help = "Examples:\n  eslint-scaffold\n  eslint-scaffold setup --project-root ../app\n  eslint-scaffold setup --package-manager pnpm --output json\n  eslint-scaffold setup --dry-run"
)]
/// Top-level CLI options and subcommands.
pub struct Cli {
    #[command(subcommand)]
    pub cmd: Option<Commands>,
}

#[derive(Subcommand)]
/// Supported subcommands. `setup` is implied when none is given.
pub enum Commands {
    /// Show version
    #[command(
        about = "Show version",
        long_about = "Print the current eslint-scaffold version."
    )]
    Version,
    /// Run the full ESLint bootstrap
    #[command(
        about = "Run the full ESLint bootstrap",
        long_about = "Detect a local ESLint install, install it when missing, write .eslintrc.cjs (renaming a legacy .eslintrc.js), and generate .vscode/tasks.json. Step failures are reported but never abort the run.",
        after_help = "Examples:\n  eslint-scaffold setup\n  eslint-scaffold setup --skip-install --output json\n  eslint-scaffold setup --project-root ../app --dry-run"
    )]
    Setup {
        #[arg(long, help = "Project root (default: current dir)")]
        project_root: Option<String>,
        #[arg(long, help = "Output mode: human|json (default: human)")]
        output: Option<String>,
        #[arg(long, help = "Package manager: npm|yarn|pnpm (default: npm)")]
        package_manager: Option<String>,
        #[arg(long, action = clap::ArgAction::SetTrue, help = "Never invoke the package manager, even when ESLint is missing")]
        skip_install: bool,
        #[arg(long, action = clap::ArgAction::SetTrue, help = "Report planned actions without touching the filesystem")]
        dry_run: bool,
    },
}

impl Default for Commands {
    fn default() -> Self {
        // Zero-argument invocation runs the whole bootstrap with defaults.
        Commands::Setup {
            project_root: None,
            output: None,
            package_manager: None,
            skip_install: false,
            dry_run: false,
        }
    }
}
