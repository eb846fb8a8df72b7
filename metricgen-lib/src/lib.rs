#![doc(hidden)]
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Core library for metricgen
//!
//! This library holds everything the metricgen tool does. It reads a metric declaration file
//! and produces a C header and source pair describing each metric: dense integer identifiers,
//! a descriptor table, and sorted per-label lookup tables for resolving label values at
//! runtime.
//!
//! # Module Organization
//!
//! - [`decl`]: Parsing and validation of declaration files
//! - [`derivation`]: Identifier and label-marker numbering
//! - [`projection`]: Descriptor and lookup table construction
//! - [`emit`]: Rendering and writing of the generated artifacts
//! - `commands`: Command-line interface and orchestration
//!
//! The translation modules are public so that build scripts can drive them directly without
//! going through the command line.

pub type Result<T, E = ohno::AppError> = core::result::Result<T, E>;

#[cfg(any(debug_assertions, test))]
pub mod commands;
#[cfg(not(any(debug_assertions, test)))]
mod commands;

pub mod decl;
pub mod derivation;
pub mod emit;
pub mod projection;

pub use crate::commands::{Host, run};
