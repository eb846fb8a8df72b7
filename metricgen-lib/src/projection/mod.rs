//! Table projection
//!
//! Builds the runtime tables the generated definitions are rendered from:
//!
//! - The descriptor table, one [`DescriptorRow`] per concrete identifier in ordinal order. The
//!   first row of a labelled metric carries its kind and help text; the metric's remaining
//!   values get [`DescriptorRow::Continuation`] rows so that metadata is never repeated.
//!   [`DescriptorRow::End`] closes the table.
//! - One [`LookupTable`] per label, mapping each value string to its identifier. Entries are
//!   sorted by value so generated code can binary search them; this order is unrelated to the
//!   identifier order. [`LookupEntry::End`] closes each table.
//!
//! Lookup tables are ordered by labelled-metric marker, so a marker ordinal selects the table
//! for its metric.

mod descriptor;
mod lookup;

pub use descriptor::{DescriptorRow, descriptor_rows};
pub use lookup::{LookupEntry, LookupTable, lookup_tables};

use crate::decl::Model;
use crate::derivation::Enumeration;

/// Everything derived from a model that the artifact emitters consume.
#[derive(Debug, Clone)]
pub struct Tables<'m> {
    pub enumeration: Enumeration<'m>,
    pub descriptors: Vec<DescriptorRow<'m>>,
    pub lookups: Vec<LookupTable<'m>>,
}

impl<'m> Tables<'m> {
    /// Derive the identifiers of `model` and project its tables.
    #[must_use]
    pub fn build(model: &'m Model) -> Self {
        let enumeration = Enumeration::derive(model);
        let descriptors = descriptor_rows(&enumeration);
        let lookups = lookup_tables(&enumeration);

        Self {
            enumeration,
            descriptors,
            lookups,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_entries_round_trip_to_descriptor_rows() {
        let model = Model::parse(
            "metric counter requests_total The total requests\n\
             label requests_total result ok fail retry\n\
             metric gauge pool_size Current pool size\n\
             metric counter bytes_total Bytes moved\n\
             label bytes_total direction tx rx\n",
        )
        .unwrap();
        let tables = Tables::build(&model);

        for table in &tables.lookups {
            let label = table.marker().label().label_name();
            for entry in table.entries() {
                if let LookupEntry::Value { value, identifier } = entry {
                    let row = &tables.descriptors[*identifier];
                    assert_eq!(row.name(), Some(table.marker().metric().name()));
                    assert_eq!(row.label(), Some(format!("{label}=\"{value}\"").as_str()));
                }
            }
        }
    }

    #[test]
    fn test_lookup_tables_sorted() {
        let model = Model::parse("metric counter x\nlabel x k delta alpha charlie bravo\n").unwrap();
        let tables = Tables::build(&model);

        let values: Vec<_> = tables.lookups[0]
            .entries()
            .iter()
            .filter_map(|entry| match entry {
                LookupEntry::Value { value, .. } => Some(*value),
                LookupEntry::End => None,
            })
            .collect();

        assert!(values.is_sorted());
        assert_eq!(values.len(), 4);
    }
}
