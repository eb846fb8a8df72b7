//! Generated names, as a pure function of validated identifiers.

/// Enumerator name of a concrete identifier: `METRIC` or `METRIC_LABEL_VALUE`.
#[must_use]
pub fn identifier_name(metric: &str, labelled: Option<(&str, &str)>) -> String {
    match labelled {
        None => metric.to_ascii_uppercase(),
        Some((label, value)) => join_upper(&[metric, label, value]),
    }
}

/// Enumerator name of a labelled-metric marker: `METRIC_LABEL`.
#[must_use]
pub fn marker_name(metric: &str, label: &str) -> String {
    join_upper(&[metric, label])
}

/// The label selector stored in descriptor rows, e.g. `result="ok"`.
#[must_use]
pub fn label_expression(label: &str, value: &str) -> String {
    format!("{label}=\"{value}\"")
}

fn join_upper(parts: &[&str]) -> String {
    parts.join("_").to_ascii_uppercase()
}
