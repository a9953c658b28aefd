//! ESLint scaffolding core library.
//!
//! This crate exposes programmatic APIs for bootstrapping ESLint in a
//! JavaScript/TypeScript project: local install detection, conditional
//! package installation, lint configuration materialization, and VS Code
//! watcher task generation.
//!
//! High-level modules:
//! - `cli`: CLI argument parsing (binary uses this).
//! - `config`: Discovery and effective configuration resolution.
//! - `setup`: Step orchestration producing a `SetupReport`.
//! - `install`: Local dependency detection and package-manager execution.
//! - `eslintrc`: Lint configuration template, including legacy renames.
//! - `tasks`: VS Code watcher task file generation.
//! - `models`: Data models for step outcomes and the run report.
//! - `output`: Human/JSON printers for the report.
//! - `utils`: Supporting helpers.
pub mod cli;
pub mod config;
pub mod eslintrc;
pub mod install;
pub mod models;
pub mod output;
pub mod setup;
pub mod tasks;
pub mod utils;
