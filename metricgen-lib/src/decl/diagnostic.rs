use core::fmt;

/// A non-fatal finding recorded while building the model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// A line that is neither a metric nor a label statement; it was skipped.
    SyntaxUnrecognized { line: usize, text: String },

    /// A label lists the same value more than once. Runtime lookups of that value are ambiguous.
    DuplicateValue { metric: String, value: String, line: usize },
}

impl Diagnostic {
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::SyntaxUnrecognized { line, .. } | Self::DuplicateValue { line, .. } => *line,
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SyntaxUnrecognized { line, text } => write!(f, "line {line}: ignoring unrecognized line '{text}'"),
            Self::DuplicateValue { metric, value, line } => {
                write!(f, "line {line}: label of metric '{metric}' lists value '{value}' more than once")
            }
        }
    }
}
