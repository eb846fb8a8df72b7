use crate::decl::MetricKind;
use crate::derivation::Enumeration;

/// One row of the descriptor table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DescriptorRow<'m> {
    /// The first (or only) row of a metric, carrying its metadata.
    Metric {
        name: &'m str,
        kind: MetricKind,
        help: Option<&'m str>,
        label: Option<String>,
    },

    /// A further value of the labelled metric described by the row before it.
    Continuation { name: &'m str, label: String },

    /// Closes the table.
    End,
}

impl<'m> DescriptorRow<'m> {
    #[must_use]
    pub const fn name(&self) -> Option<&'m str> {
        match self {
            Self::Metric { name, .. } | Self::Continuation { name, .. } => Some(*name),
            Self::End => None,
        }
    }

    #[must_use]
    pub fn label(&self) -> Option<&str> {
        match self {
            Self::Metric { label, .. } => label.as_deref(),
            Self::Continuation { label, .. } => Some(label),
            Self::End => None,
        }
    }
}

/// Build one row per concrete identifier, in ordinal order, followed by [`DescriptorRow::End`].
#[must_use]
pub fn descriptor_rows<'m>(enumeration: &Enumeration<'m>) -> Vec<DescriptorRow<'m>> {
    let mut rows = Vec::with_capacity(enumeration.identifier_count() + 1);

    for id in enumeration.identifiers() {
        let metric = id.metric();
        let label = id.label_expression();

        let row = match label {
            Some(label) if !id.is_first_of_metric() => DescriptorRow::Continuation { name: metric.name(), label },
            label => DescriptorRow::Metric {
                name: metric.name(),
                kind: metric.kind(),
                help: metric.help(),
                label,
            },
        };

        rows.push(row);
    }

    rows.push(DescriptorRow::End);
    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decl::Model;

    #[test]
    fn test_labelled_metric_rows() {
        let model = Model::parse("metric counter requests_total The total requests\nlabel requests_total result ok fail\n").unwrap();
        let enumeration = Enumeration::derive(&model);
        let rows = descriptor_rows(&enumeration);

        assert_eq!(
            rows,
            [
                DescriptorRow::Metric {
                    name: "requests_total",
                    kind: MetricKind::Counter,
                    help: Some("The total requests"),
                    label: Some("result=\"ok\"".to_string()),
                },
                DescriptorRow::Continuation {
                    name: "requests_total",
                    label: "result=\"fail\"".to_string(),
                },
                DescriptorRow::End,
            ]
        );
    }

    #[test]
    fn test_unlabelled_metric_row() {
        let model = Model::parse("metric gauge pool_size Current pool size\n").unwrap();
        let enumeration = Enumeration::derive(&model);

        assert_eq!(
            descriptor_rows(&enumeration),
            [
                DescriptorRow::Metric {
                    name: "pool_size",
                    kind: MetricKind::Gauge,
                    help: Some("Current pool size"),
                    label: None,
                },
                DescriptorRow::End,
            ]
        );
    }

    #[test]
    fn test_row_count_matches_identifier_count() {
        let model = Model::parse(
            "metric counter a\n\
             metric gauge b level\n\
             label a kind x y z\n\
             metric counter c\n\
             label c dir in\n",
        )
        .unwrap();
        let enumeration = Enumeration::derive(&model);
        let rows = descriptor_rows(&enumeration);

        assert_eq!(rows.last(), Some(&DescriptorRow::End));
        assert_eq!(rows.iter().filter(|row| row.name().is_some()).count(), enumeration.identifier_count());
    }

    #[test]
    fn test_only_first_row_of_metric_carries_metadata() {
        let model = Model::parse("metric counter a help a\nlabel a kind x y z\nmetric gauge b help b\nlabel b k v\n").unwrap();
        let enumeration = Enumeration::derive(&model);
        let rows = descriptor_rows(&enumeration);

        let mut previous: Option<&str> = None;
        for row in &rows {
            match row {
                DescriptorRow::Metric { name, help, .. } => {
                    assert_ne!(previous, Some(*name));
                    assert!(help.is_some());
                }
                DescriptorRow::Continuation { name, .. } => assert_eq!(previous, Some(*name)),
                DescriptorRow::End => {}
            }
            previous = row.name();
        }
    }

    #[test]
    fn test_empty_table_has_only_terminator() {
        let model = Model::parse("").unwrap();
        assert_eq!(descriptor_rows(&Enumeration::derive(&model)), [DescriptorRow::End]);
    }
}
