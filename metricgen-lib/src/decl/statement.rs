//! Classification of filtered lines into declaration statements.

use super::ident::is_identifier;
use super::line_filter::SourceLine;
use super::{DeclError, MetricKind};
use core::str::FromStr;

const METRIC_KEYWORD: &str = "metric";
const LABEL_KEYWORD: &str = "label";

/// A `metric <type> <name> [help...]` statement with validated fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetricStatement<'a> {
    pub kind: MetricKind,
    pub name: &'a str,
    pub help: Option<&'a str>,
}

/// A `label <metric> <label> <value>...` statement with validated fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelStatement<'a> {
    pub metric: &'a str,
    pub label: &'a str,
    pub values: Vec<&'a str>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Statement<'a> {
    Metric(MetricStatement<'a>),
    Label(LabelStatement<'a>),

    /// The line is not a statement this parser understands.
    Unrecognized,
}

/// Split off the first whitespace-delimited field of `text`.
fn next_field(text: &str) -> Option<(&str, &str)> {
    let text = text.trim_start();
    if text.is_empty() {
        return None;
    }

    Some(text.split_once(char::is_whitespace).unwrap_or((text, "")))
}

/// Parse one filtered line.
///
/// `is_declared` reports whether a metric name has been declared by an earlier line; label
/// statements may only refer to those.
///
/// # Errors
///
/// Returns the first invalid field of a metric or label statement. Lines that are not
/// statements at all come back as [`Statement::Unrecognized`] rather than as an error.
pub fn parse_statement<'a>(line: &SourceLine<'a>, is_declared: impl Fn(&str) -> bool) -> Result<Statement<'a>, DeclError> {
    let Some((keyword, rest)) = next_field(line.text) else {
        return Ok(Statement::Unrecognized);
    };

    match keyword {
        METRIC_KEYWORD => parse_metric(rest, line.number),
        LABEL_KEYWORD => parse_label(rest, line.number, is_declared),
        _ => Ok(Statement::Unrecognized),
    }
}

fn parse_metric(rest: &str, line: usize) -> Result<Statement<'_>, DeclError> {
    let Some((kind, rest)) = next_field(rest) else {
        return Ok(Statement::Unrecognized);
    };
    let Some((name, rest)) = next_field(rest) else {
        return Ok(Statement::Unrecognized);
    };

    let kind = MetricKind::from_str(kind).map_err(|_parse_err| DeclError::InvalidType {
        token: kind.to_string(),
        line,
    })?;

    if !is_identifier(name) {
        return Err(DeclError::InvalidName {
            token: name.to_string(),
            line,
        });
    }

    let help = rest.trim();
    Ok(Statement::Metric(MetricStatement {
        kind,
        name,
        help: (!help.is_empty()).then_some(help),
    }))
}

fn parse_label(rest: &str, line: usize, is_declared: impl Fn(&str) -> bool) -> Result<Statement<'_>, DeclError> {
    let mut fields = rest.split_whitespace();
    let (Some(metric), Some(label)) = (fields.next(), fields.next()) else {
        return Ok(Statement::Unrecognized);
    };
    let values: Vec<&str> = fields.collect();
    if values.is_empty() {
        return Ok(Statement::Unrecognized);
    }

    if !is_declared(metric) {
        return Err(DeclError::UnknownMetric {
            token: metric.to_string(),
            line,
        });
    }

    if !is_identifier(label) {
        return Err(DeclError::InvalidLabel {
            token: label.to_string(),
            line,
        });
    }

    if let Some(bad) = values.iter().find(|value| !is_identifier(value)) {
        return Err(DeclError::InvalidValue {
            token: (*bad).to_string(),
            line,
        });
    }

    Ok(Statement::Label(LabelStatement { metric, label, values }))
}
