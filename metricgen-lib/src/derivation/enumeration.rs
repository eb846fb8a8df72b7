use super::naming;
use crate::decl::{LabelDefinition, MetricDefinition, Model};

/// One enumerable slot: a whole unlabelled metric, or one value of a labelled metric.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConcreteIdentifier<'m> {
    ordinal: usize,
    metric: &'m MetricDefinition,
    value_index: Option<usize>,
}

impl<'m> ConcreteIdentifier<'m> {
    #[must_use]
    pub const fn ordinal(&self) -> usize {
        self.ordinal
    }

    #[must_use]
    pub const fn metric(&self) -> &'m MetricDefinition {
        self.metric
    }

    /// The label and the value this identifier stands for, if the metric is labelled.
    #[must_use]
    pub fn labelled(&self) -> Option<(&'m LabelDefinition, &'m str)> {
        let index = self.value_index?;
        let label = self.metric.label()?;
        Some((label, label.values()[index].as_str()))
    }

    /// Whether this is the first identifier derived from its metric.
    #[must_use]
    pub fn is_first_of_metric(&self) -> bool {
        self.value_index.is_none_or(|index| index == 0)
    }

    #[must_use]
    pub fn name(&self) -> String {
        naming::identifier_name(
            self.metric.name(),
            self.labelled().map(|(label, value)| (label.label_name(), value)),
        )
    }

    /// The `label="value"` selector for labelled identifiers.
    #[must_use]
    pub fn label_expression(&self) -> Option<String> {
        self.labelled().map(|(label, value)| naming::label_expression(label.label_name(), value))
    }
}

/// One entry per label definition, numbered separately from the concrete identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LabelledMetricMarker<'m> {
    ordinal: usize,
    metric: &'m MetricDefinition,
    label: &'m LabelDefinition,
    first_identifier: usize,
}

impl<'m> LabelledMetricMarker<'m> {
    #[must_use]
    pub const fn ordinal(&self) -> usize {
        self.ordinal
    }

    #[must_use]
    pub const fn metric(&self) -> &'m MetricDefinition {
        self.metric
    }

    #[must_use]
    pub const fn label(&self) -> &'m LabelDefinition {
        self.label
    }

    /// Ordinal of the concrete identifier derived from the label's `value_index`th value.
    #[must_use]
    pub const fn identifier_for(&self, value_index: usize) -> usize {
        self.first_identifier + value_index
    }

    #[must_use]
    pub fn name(&self) -> String {
        naming::marker_name(self.metric.name(), self.label.label_name())
    }
}

/// The dense, declaration-ordered numbering of a model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Enumeration<'m> {
    identifiers: Vec<ConcreteIdentifier<'m>>,
    markers: Vec<LabelledMetricMarker<'m>>,
}

impl<'m> Enumeration<'m> {
    /// Number a model's identifiers and markers.
    ///
    /// Identifiers follow metric declaration order and, within a labelled metric, the declared
    /// value order. Markers follow the order labels were attached.
    #[must_use]
    pub fn derive(model: &'m Model) -> Self {
        let mut identifiers = Vec::new();
        let mut first_identifier = Vec::with_capacity(model.metrics().len());

        for metric in model.metrics() {
            first_identifier.push(identifiers.len());

            match metric.label() {
                None => identifiers.push(ConcreteIdentifier {
                    ordinal: identifiers.len(),
                    metric,
                    value_index: None,
                }),
                Some(label) => {
                    for value_index in 0..label.values().len() {
                        identifiers.push(ConcreteIdentifier {
                            ordinal: identifiers.len(),
                            metric,
                            value_index: Some(value_index),
                        });
                    }
                }
            }
        }

        let markers = model
            .labelled_metrics()
            .filter_map(|(index, metric)| metric.label().map(|label| (index, metric, label)))
            .enumerate()
            .map(|(ordinal, (index, metric, label))| LabelledMetricMarker {
                ordinal,
                metric,
                label,
                first_identifier: first_identifier[index],
            })
            .collect();

        log::debug!("derived {} identifier(s) and {} label marker(s)", identifiers.len(), model.labels().count());

        Self { identifiers, markers }
    }

    #[must_use]
    pub fn identifiers(&self) -> &[ConcreteIdentifier<'m>] {
        &self.identifiers
    }

    #[must_use]
    pub fn markers(&self) -> &[LabelledMetricMarker<'m>] {
        &self.markers
    }

    /// The identifier sentinel: one past the last identifier ordinal.
    #[must_use]
    pub const fn identifier_count(&self) -> usize {
        self.identifiers.len()
    }

    /// The marker sentinel: one past the last marker ordinal.
    #[must_use]
    pub const fn marker_count(&self) -> usize {
        self.markers.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(enumeration: &Enumeration<'_>) -> Vec<(String, usize)> {
        enumeration.identifiers().iter().map(|id| (id.name(), id.ordinal())).collect()
    }

    #[test]
    fn test_labelled_values_keep_declared_order() {
        let model = Model::parse("metric counter requests_total The total requests\nlabel requests_total result ok fail\n").unwrap();
        let enumeration = Enumeration::derive(&model);

        assert_eq!(
            names(&enumeration),
            [("REQUESTS_TOTAL_RESULT_OK".to_string(), 0), ("REQUESTS_TOTAL_RESULT_FAIL".to_string(), 1)]
        );
        assert_eq!(enumeration.identifier_count(), 2);
        assert_eq!(enumeration.marker_count(), 1);
        assert_eq!(enumeration.markers()[0].name(), "REQUESTS_TOTAL_RESULT");
    }

    #[test]
    fn test_unlabelled_metric() {
        let model = Model::parse("metric gauge pool_size Current pool size\n").unwrap();
        let enumeration = Enumeration::derive(&model);

        assert_eq!(names(&enumeration), [("POOL_SIZE".to_string(), 0)]);
        assert!(enumeration.identifiers()[0].labelled().is_none());
        assert!(enumeration.identifiers()[0].label_expression().is_none());
        assert!(enumeration.identifiers()[0].is_first_of_metric());
        assert_eq!(enumeration.marker_count(), 0);
    }

    #[test]
    fn test_counter_runs_across_metrics() {
        let model = Model::parse(
            "metric counter a\n\
             metric gauge b\n\
             metric counter c\n\
             label b dir in out\n\
             label a kind x y z\n",
        )
        .unwrap();
        let enumeration = Enumeration::derive(&model);

        assert_eq!(
            names(&enumeration),
            [
                ("A_KIND_X".to_string(), 0),
                ("A_KIND_Y".to_string(), 1),
                ("A_KIND_Z".to_string(), 2),
                ("B_DIR_IN".to_string(), 3),
                ("B_DIR_OUT".to_string(), 4),
                ("C".to_string(), 5),
            ]
        );
        assert_eq!(enumeration.identifier_count(), 6);

        let markers: Vec<_> = enumeration.markers().iter().map(|m| (m.name(), m.ordinal())).collect();
        assert_eq!(markers, [("B_DIR".to_string(), 0), ("A_KIND".to_string(), 1)]);

        assert_eq!(enumeration.markers()[0].identifier_for(1), 4);
        assert_eq!(enumeration.markers()[1].identifier_for(0), 0);
    }

    #[test]
    fn test_first_of_metric_and_label_expression() {
        let model = Model::parse("metric counter x\nlabel x status ok fail\n").unwrap();
        let enumeration = Enumeration::derive(&model);
        let ids = enumeration.identifiers();

        assert!(ids[0].is_first_of_metric());
        assert!(!ids[1].is_first_of_metric());
        assert_eq!(ids[1].label_expression().as_deref(), Some("status=\"fail\""));
    }

    #[test]
    fn test_empty_model() {
        let model = Model::parse("").unwrap();
        let enumeration = Enumeration::derive(&model);

        assert_eq!(enumeration.identifier_count(), 0);
        assert_eq!(enumeration.marker_count(), 0);
    }

    #[test]
    fn test_derivation_is_deterministic() {
        let input = "metric counter a\nlabel a k v w\nmetric gauge b\n";
        let first = Model::parse(input).unwrap();
        let second = Model::parse(input).unwrap();

        assert_eq!(names(&Enumeration::derive(&first)), names(&Enumeration::derive(&second)));
    }
}
