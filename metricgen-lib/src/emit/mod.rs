//! Rendering of the generated C artifacts
//!
//! The emitters turn a model's [`Tables`](crate::projection::Tables) into source text. They do
//! no translation work of their own: every ordinal, row and sort order they print was decided
//! by the derivation and projection stages.
//!
//! # Implementation Model
//!
//! Two generators are provided, each exposed as a `generate` function writing to any
//! [`core::fmt::Write`]:
//! - **Header**: the declarations artifact. The kind enumeration, the dense identifier and
//!   label enumerations with their count sentinels, the descriptor, counter, counter-set and
//!   lookup-entry record shapes, and `extern` declarations for the tables.
//! - **Source**: the definitions artifact. The kind-name strings, the descriptor table closed
//!   by an all-zero row, one sorted lookup array per label closed by `{ NULL, 0 }`, and the
//!   array indexing those lookup arrays by label identifier. Lookup arrays are named after
//!   their label's ordinal, so they never clash.
//!
//! Rendering happens entirely in memory. [`write_artifacts`] then puts the results on disk,
//! opening every target before writing any of them.

mod common;
mod header;
mod output;
mod source;

pub use common::reserved_names;
pub use header::generate as generate_header;
pub use output::{Artifact, EmitError, write_artifacts};
pub use source::generate as generate_source;

/// Settings that shape the generated text but not the tables themselves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmitOptions {
    /// Prefix of generated type, table and sentinel names.
    pub prefix: String,

    /// Preprocessor guard wrapping the header.
    pub include_guard: String,

    /// Name the source file uses to `#include` the header.
    pub header_include: String,

    /// Name of the declaration file, quoted in the banner comment.
    pub source_name: String,
}

impl EmitOptions {
    /// Names these options define in the generated code that declarations must not produce.
    #[must_use]
    pub fn reserved_names(&self) -> Vec<String> {
        reserved_names(&self.prefix, &self.include_guard)
    }
}
