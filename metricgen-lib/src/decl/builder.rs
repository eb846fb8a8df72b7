use super::line_filter::{SourceLine, filter_lines};
use super::statement::{LabelStatement, MetricStatement, Statement, parse_statement};
use super::{DeclError, Diagnostic, LabelDefinition, MetricDefinition};
use crate::derivation::check_names;
use std::collections::{HashMap, HashSet};

/// Accumulates statements into a [`Model`], enforcing the declaration invariants as it goes.
///
/// Every check runs against the state built so far, so a label must come after the metric
/// it refers to. Generated names are checked for clashes once all input is in.
#[derive(Debug, Default)]
pub struct ModelBuilder {
    metrics: Vec<MetricDefinition>,
    by_name: HashMap<String, usize>,
    labelled: Vec<usize>,
    diagnostics: Vec<Diagnostic>,
    reserved: Vec<String>,
}

impl ModelBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A builder that also rejects declarations whose generated names equal one of `reserved`.
    #[must_use]
    pub fn reserving(reserved: impl IntoIterator<Item = String>) -> Self {
        Self {
            reserved: reserved.into_iter().collect(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn is_declared(&self, name: &str) -> bool {
        self.by_name.contains_key(name)
    }

    /// Parse one filtered line and apply the resulting statement.
    ///
    /// # Errors
    ///
    /// Returns the first invariant the line violates.
    pub fn push_line(&mut self, line: &SourceLine<'_>) -> Result<(), DeclError> {
        match parse_statement(line, |name| self.is_declared(name))? {
            Statement::Metric(stmt) => self.add_metric(&stmt, line.number),
            Statement::Label(stmt) => self.add_label(&stmt, line.number),
            Statement::Unrecognized => {
                log::warn!("line {}: ignoring unrecognized line '{}'", line.number, line.text);
                self.diagnostics.push(Diagnostic::SyntaxUnrecognized {
                    line: line.number,
                    text: line.text.to_string(),
                });
                Ok(())
            }
        }
    }

    /// Append a metric definition.
    ///
    /// # Errors
    ///
    /// Fails with [`DeclError::DuplicateMetric`] if the name is already taken.
    pub fn add_metric(&mut self, stmt: &MetricStatement<'_>, line: usize) -> Result<(), DeclError> {
        if self.is_declared(stmt.name) {
            return Err(DeclError::DuplicateMetric {
                token: stmt.name.to_string(),
                line,
            });
        }

        log::debug!("line {line}: {} '{}'", stmt.kind, stmt.name);

        let _ = self.by_name.insert(stmt.name.to_string(), self.metrics.len());
        self.metrics.push(MetricDefinition {
            kind: stmt.kind,
            name: stmt.name.to_string(),
            help: stmt.help.map(str::to_string),
            label: None,
            line,
        });

        Ok(())
    }

    /// Attach a label to an already declared metric.
    ///
    /// # Errors
    ///
    /// Fails with [`DeclError::UnknownMetric`] if the metric has not been declared yet, and with
    /// [`DeclError::DuplicateLabel`] if it already carries a label.
    pub fn add_label(&mut self, stmt: &LabelStatement<'_>, line: usize) -> Result<(), DeclError> {
        let Some(&index) = self.by_name.get(stmt.metric) else {
            return Err(DeclError::UnknownMetric {
                token: stmt.metric.to_string(),
                line,
            });
        };

        let metric = &mut self.metrics[index];
        if metric.label.is_some() {
            return Err(DeclError::DuplicateLabel {
                token: stmt.metric.to_string(),
                line,
            });
        }

        let mut seen = HashSet::new();
        let mut reported = HashSet::new();
        for value in &stmt.values {
            if !seen.insert(*value) && reported.insert(*value) {
                log::warn!("line {line}: label of metric '{}' lists value '{value}' more than once", stmt.metric);
                self.diagnostics.push(Diagnostic::DuplicateValue {
                    metric: stmt.metric.to_string(),
                    value: (*value).to_string(),
                    line,
                });
            }
        }

        log::debug!("line {line}: label '{}' on '{}' with {} value(s)", stmt.label, stmt.metric, stmt.values.len());

        metric.label = Some(LabelDefinition {
            metric_name: stmt.metric.to_string(),
            label_name: stmt.label.to_string(),
            values: stmt.values.iter().map(|value| (*value).to_string()).collect(),
            line,
        });
        self.labelled.push(index);

        Ok(())
    }

    /// Complete the model.
    ///
    /// # Errors
    ///
    /// Fails with [`DeclError::NameCollision`] if two declarations would generate the same C
    /// name, or one would generate a reserved name.
    pub fn finish(self) -> Result<Model, DeclError> {
        let model = Model {
            metrics: self.metrics,
            labelled: self.labelled,
            diagnostics: self.diagnostics,
        };

        check_names(&model, &self.reserved)?;
        Ok(model)
    }
}

/// The validated declarations of one input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Model {
    metrics: Vec<MetricDefinition>,
    labelled: Vec<usize>,
    diagnostics: Vec<Diagnostic>,
}

impl Model {
    /// Build a model from the full text of a declaration file.
    ///
    /// # Errors
    ///
    /// Stops at the first fatal error; nothing built up to that point is returned.
    pub fn parse(input: &str) -> Result<Self, DeclError> {
        Self::parse_reserving(input, Vec::new())
    }

    /// Like [`Model::parse`], also rejecting declarations that would generate one of the
    /// `reserved` names, such as the sentinels of the emitted code.
    ///
    /// # Errors
    ///
    /// Stops at the first fatal error; nothing built up to that point is returned.
    pub fn parse_reserving(input: &str, reserved: impl IntoIterator<Item = String>) -> Result<Self, DeclError> {
        let mut builder = ModelBuilder::reserving(reserved);
        for line in filter_lines(input) {
            builder.push_line(&line)?;
        }

        builder.finish()
    }

    /// Metrics in declaration order.
    #[must_use]
    pub fn metrics(&self) -> &[MetricDefinition] {
        &self.metrics
    }

    /// Labelled metrics in the order their labels were attached.
    pub fn labelled_metrics(&self) -> impl Iterator<Item = (usize, &MetricDefinition)> {
        self.labelled.iter().map(|&index| (index, &self.metrics[index]))
    }

    /// Label definitions in the order they were attached.
    pub fn labels(&self) -> impl Iterator<Item = &LabelDefinition> {
        self.labelled_metrics().filter_map(|(_, metric)| metric.label())
    }

    #[must_use]
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }
}
