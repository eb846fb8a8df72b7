//! Parsing and validation of metric declaration files
//!
//! This module turns the text of a declaration file into a validated [`Model`].
//!
//! # Input Language
//!
//! The language is line oriented. `#` starts a comment that runs to the end of the line, and
//! blank lines are ignored:
//!
//! ```text
//! metric <counter|gauge> <metric_name> <help text...>
//! label  <metric_name> <label_name> <value1> <value2> ...
//! ```
//!
//! Metric names, label names, and label values must all match `^[a-z][a-z0-9_]*$`.
//!
//! # Implementation Model
//!
//! Input flows through three stages:
//!
//! 1. The line filter drops comments, trailing whitespace and blank lines while keeping the
//!    physical line number of everything it yields.
//! 2. The statement parser classifies each line by its leading keyword and validates its
//!    fields. Lines it doesn't understand are reported as [`Diagnostic::SyntaxUnrecognized`]
//!    and skipped.
//! 3. The [`ModelBuilder`] appends metrics in encounter order and attaches labels to the
//!    metrics they name. A metric may carry at most one label, and a label may only refer to a
//!    metric declared on an earlier line. Once all lines are in, it rejects declarations
//!    whose generated C names would clash.
//!
//! Any [`DeclError`] aborts the whole parse; no partial model is ever handed out.

mod builder;
mod definition;
mod diagnostic;
mod error;
mod ident;
mod line_filter;
mod metric_kind;
mod statement;

pub use builder::{Model, ModelBuilder};
pub use definition::{LabelDefinition, MetricDefinition};
pub use diagnostic::Diagnostic;
pub use error::DeclError;
pub use ident::is_identifier;
pub use line_filter::{SourceLine, filter_lines};
pub use metric_kind::MetricKind;
pub use statement::{LabelStatement, MetricStatement, Statement, parse_statement};
