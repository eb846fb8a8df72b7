//! Detection of generated names that would clash in C.
//!
//! Identifier and marker enumerators share one C namespace with each other and with the
//! fixed names the emitters define, so every one of them must be unique.

use super::naming::{identifier_name, marker_name};
use crate::decl::{DeclError, Model};
use std::collections::HashSet;

/// Check that the identifier and marker names of `model` are distinct from each other and
/// from every name in `reserved`.
///
/// Repeated values of one label are not collisions here; they are reported as
/// [`Diagnostic::DuplicateValue`](crate::decl::Diagnostic::DuplicateValue) instead.
///
/// # Errors
///
/// Fails with [`DeclError::NameCollision`] for the first name issued twice, in line order,
/// carrying the later of the two declaration lines.
pub fn check_names(model: &Model, reserved: &[String]) -> Result<(), DeclError> {
    let mut issued: Vec<(String, usize)> = Vec::new();

    for metric in model.metrics() {
        match metric.label() {
            None => issued.push((identifier_name(metric.name(), None), metric.line())),
            Some(label) => {
                let mut values = HashSet::new();
                for value in label.values() {
                    if values.insert(value.as_str()) {
                        issued.push((
                            identifier_name(metric.name(), Some((label.label_name(), value))),
                            label.line(),
                        ));
                    }
                }
                issued.push((marker_name(metric.name(), label.label_name()), label.line()));
            }
        }
    }

    issued.sort_by_key(|(_, line)| *line);

    let mut seen: HashSet<&str> = reserved.iter().map(String::as_str).collect();
    for (name, line) in &issued {
        if !seen.insert(name.as_str()) {
            return Err(DeclError::NameCollision {
                token: name.clone(),
                line: *line,
            });
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collision(input: &str) -> DeclError {
        Model::parse(input).unwrap_err()
    }

    #[test]
    fn test_labelled_identifier_against_metric() {
        let err = collision("metric counter a_b_x\nmetric counter a\nlabel a b x y\n");
        assert_eq!(
            err,
            DeclError::NameCollision {
                token: "A_B_X".to_string(),
                line: 3
            }
        );
    }

    #[test]
    fn test_metric_declared_after_label() {
        let err = collision("metric counter a\nlabel a b x\nmetric gauge a_b_x\n");
        assert_eq!(
            err,
            DeclError::NameCollision {
                token: "A_B_X".to_string(),
                line: 3
            }
        );
    }

    #[test]
    fn test_marker_against_metric() {
        let err = collision("metric counter a_b\nmetric counter a\nlabel a b x\n");
        assert_eq!(
            err,
            DeclError::NameCollision {
                token: "A_B".to_string(),
                line: 3
            }
        );
    }

    #[test]
    fn test_markers_of_two_labels() {
        let err = collision("metric counter q_r\nlabel q_r s v\nmetric counter q\nlabel q r_s w\n");
        assert_eq!(
            err,
            DeclError::NameCollision {
                token: "Q_R_S".to_string(),
                line: 4
            }
        );
    }

    #[test]
    fn test_metric_replaced_by_its_label_is_free() {
        // once labelled, `a` no longer issues `A` itself
        let model = Model::parse("metric counter a\nlabel a b x\n").unwrap();
        check_names(&model, &["A".to_string()]).unwrap();
    }

    #[test]
    fn test_reserved_names() {
        let model = Model::parse("metric gauge metric_id_count\nmetric counter m\nlabel m kind x\n").unwrap();
        let reserved = ["METRIC_ID_COUNT".to_string(), "METRIC_LABEL_ID_COUNT".to_string()];

        assert_eq!(
            check_names(&model, &reserved).unwrap_err(),
            DeclError::NameCollision {
                token: "METRIC_ID_COUNT".to_string(),
                line: 1
            }
        );

        let model = Model::parse("metric counter metric\nlabel metric label_id count\n").unwrap();
        assert_eq!(
            check_names(&model, &reserved).unwrap_err(),
            DeclError::NameCollision {
                token: "METRIC_LABEL_ID_COUNT".to_string(),
                line: 2
            }
        );
    }

    #[test]
    fn test_repeated_values_are_not_collisions() {
        let model = Model::parse("metric counter x\nlabel x status ok ok\n").unwrap();
        check_names(&model, &[]).unwrap();
        assert_eq!(model.diagnostics().len(), 1);
    }

    #[test]
    fn test_distinct_names_pass() {
        let model = Model::parse(
            "metric counter requests_total\nlabel requests_total result ok fail\nmetric gauge pool_size\n",
        )
        .unwrap();
        check_names(&model, &["METRIC_ID_COUNT".to_string()]).unwrap();
    }
}
