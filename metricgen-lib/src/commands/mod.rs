//! Command-line interface and orchestration for metricgen
//!
//! This module implements the CLI commands and drives the translation pipeline from input
//! to generated files. It handles argument parsing, configuration management, and the
//! high-level workflows.
//!
//! # Implementation Model
//!
//! ## Commands
//!
//! - **generate**: Translate a declaration file and write the C header, the C source, or both
//! - **check**: Translate a declaration file without writing anything and summarize the result
//! - **init**: Generate a default configuration file
//!
//! ## Execution Flow
//!
//! The `run` function parses command-line arguments using clap and routes to the
//! appropriate command handler. A translation always runs to completion in one pass:
//!
//! 1. Read the whole declaration file (or standard input)
//! 2. Build and validate the model, reporting skipped lines on the error stream
//! 3. Derive identifiers and project the tables
//! 4. Render every requested artifact in memory
//! 5. Open all targets, then write them
//!
//! Any failure before step 5 leaves the file system untouched.
//!
//! All I/O with the outside world goes through the [`Host`] trait so commands can be run
//! in-process by tests.

mod check;
mod common;
mod config;
mod generate;
mod host;
mod init;
mod run;

#[cfg(debug_assertions)]
pub use config::Config;

pub use check::{CheckArgs, check_declarations};
pub use generate::{GenerateArgs, generate_artifacts};
pub use host::Host;
pub use init::{InitArgs, init_config};
pub use run::run;
