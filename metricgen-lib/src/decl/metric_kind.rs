use strum::{Display, EnumIter, EnumString, IntoStaticStr};

/// The kind of a declared metric, as spelled by the `metric` statement's type keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, EnumString, IntoStaticStr)]
#[strum(serialize_all = "lowercase")]
pub enum MetricKind {
    /// A monotonically increasing count.
    Counter,

    /// A value that may go up and down.
    Gauge,
}

impl MetricKind {
    #[must_use]
    pub fn keyword(self) -> &'static str {
        self.into()
    }
}
