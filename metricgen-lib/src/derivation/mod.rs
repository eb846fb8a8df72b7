//! Identifier derivation
//!
//! Expands a validated [`Model`](crate::decl::Model) into the two dense numberings the
//! generated code is built on:
//!
//! - [`ConcreteIdentifier`]s: one per unlabelled metric and one per declared value of a
//!   labelled metric, numbered by a single running counter in declaration order.
//! - [`LabelledMetricMarker`]s: one per label, numbered independently in the order labels
//!   were attached.
//!
//! Both counts double as the sentinels that close the generated enumerations. Derivation
//! depends only on declaration order, so the same input always yields the same numbering.
//!
//! Every generated enumerator name must be unique, since C puts identifiers and markers in
//! one namespace. [`check_names`] rejects a model whose names would clash.
//!
//! Naming lives in its own pure functions so that the spelling of generated names can be
//! tested apart from how ordinals are assigned.

mod collision;
mod enumeration;
mod naming;

pub use collision::check_names;
pub use enumeration::{ConcreteIdentifier, Enumeration, LabelledMetricMarker};
pub use naming::{identifier_name, label_expression, marker_name};
