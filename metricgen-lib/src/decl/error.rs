use thiserror::Error;

/// A fatal problem found while reading metric declarations.
///
/// Every variant carries the offending token and the 1-based line it was found on.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DeclError {
    #[error("line {line}: unknown metric type '{token}'")]
    InvalidType { token: String, line: usize },

    #[error("line {line}: invalid metric name '{token}'")]
    InvalidName { token: String, line: usize },

    #[error("line {line}: invalid label name '{token}'")]
    InvalidLabel { token: String, line: usize },

    #[error("line {line}: invalid label value '{token}'")]
    InvalidValue { token: String, line: usize },

    #[error("line {line}: label refers to undeclared metric '{token}'")]
    UnknownMetric { token: String, line: usize },

    #[error("line {line}: metric '{token}' already has a label")]
    DuplicateLabel { token: String, line: usize },

    #[error("line {line}: metric '{token}' is already declared")]
    DuplicateMetric { token: String, line: usize },

    /// Two declarations, or a declaration and a fixed generated name, map to the same C name.
    #[error("line {line}: generated name '{token}' is already in use")]
    NameCollision { token: String, line: usize },
}

impl DeclError {
    /// The 1-based input line the error was found on.
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::InvalidType { line, .. }
            | Self::InvalidName { line, .. }
            | Self::InvalidLabel { line, .. }
            | Self::InvalidValue { line, .. }
            | Self::UnknownMetric { line, .. }
            | Self::DuplicateLabel { line, .. }
            | Self::DuplicateMetric { line, .. }
            | Self::NameCollision { line, .. } => *line,
        }
    }

    /// The token that caused the error.
    #[must_use]
    pub fn token(&self) -> &str {
        match self {
            Self::InvalidType { token, .. }
            | Self::InvalidName { token, .. }
            | Self::InvalidLabel { token, .. }
            | Self::InvalidValue { token, .. }
            | Self::UnknownMetric { token, .. }
            | Self::DuplicateLabel { token, .. }
            | Self::DuplicateMetric { token, .. }
            | Self::NameCollision { token, .. } => token,
        }
    }
}
