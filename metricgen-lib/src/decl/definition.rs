use super::MetricKind;

/// One declared metric.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetricDefinition {
    pub(super) kind: MetricKind,
    pub(super) name: String,
    pub(super) help: Option<String>,
    pub(super) label: Option<LabelDefinition>,
    pub(super) line: usize,
}

impl MetricDefinition {
    #[must_use]
    pub const fn kind(&self) -> MetricKind {
        self.kind
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn help(&self) -> Option<&str> {
        self.help.as_deref()
    }

    #[must_use]
    pub const fn label(&self) -> Option<&LabelDefinition> {
        self.label.as_ref()
    }

    /// Line the metric was declared on.
    #[must_use]
    pub const fn line(&self) -> usize {
        self.line
    }
}

/// The single label partitioning a metric.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelDefinition {
    pub(super) metric_name: String,
    pub(super) label_name: String,
    pub(super) values: Vec<String>,
    pub(super) line: usize,
}

impl LabelDefinition {
    /// Name of the metric this label belongs to.
    #[must_use]
    pub fn metric_name(&self) -> &str {
        &self.metric_name
    }

    #[must_use]
    pub fn label_name(&self) -> &str {
        &self.label_name
    }

    /// Values in declaration order. May contain repeats.
    #[must_use]
    pub fn values(&self) -> &[String] {
        &self.values
    }

    #[must_use]
    pub const fn line(&self) -> usize {
        self.line
    }
}
