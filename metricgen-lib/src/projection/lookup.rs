use crate::derivation::{Enumeration, LabelledMetricMarker};

/// One entry of a label lookup table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LookupEntry<'m> {
    Value { value: &'m str, identifier: usize },

    /// Closes the table.
    End,
}

/// Value-to-identifier table for one label, sorted by value string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupTable<'m> {
    marker: LabelledMetricMarker<'m>,
    entries: Vec<LookupEntry<'m>>,
}

impl<'m> LookupTable<'m> {
    /// Build the table for one label.
    ///
    /// The sort is stable, so a value declared twice keeps its declaration order.
    #[must_use]
    pub fn new(marker: LabelledMetricMarker<'m>) -> Self {
        let mut values: Vec<(&'m str, usize)> = marker
            .label()
            .values()
            .iter()
            .enumerate()
            .map(|(index, value)| (value.as_str(), marker.identifier_for(index)))
            .collect();

        values.sort_by(|a, b| a.0.cmp(b.0));

        let mut entries: Vec<_> = values
            .into_iter()
            .map(|(value, identifier)| LookupEntry::Value { value, identifier })
            .collect();
        entries.push(LookupEntry::End);

        Self { marker, entries }
    }

    #[must_use]
    pub const fn marker(&self) -> &LabelledMetricMarker<'m> {
        &self.marker
    }

    /// Entries sorted by value, followed by [`LookupEntry::End`].
    #[must_use]
    pub fn entries(&self) -> &[LookupEntry<'m>] {
        &self.entries
    }

    /// Resolve a value the way the generated code does, by binary search.
    ///
    /// With repeated values, whichever match the search lands on is returned.
    #[must_use]
    pub fn resolve(&self, value: &str) -> Option<usize> {
        let values = &self.entries[..self.entries.len() - 1];
        values
            .binary_search_by(|entry| match entry {
                LookupEntry::Value { value: candidate, .. } => (*candidate).cmp(value),
                LookupEntry::End => core::cmp::Ordering::Greater,
            })
            .ok()
            .and_then(|index| match values[index] {
                LookupEntry::Value { identifier, .. } => Some(identifier),
                LookupEntry::End => None,
            })
    }
}

/// Build one lookup table per label, in marker order.
#[must_use]
pub fn lookup_tables<'m>(enumeration: &Enumeration<'m>) -> Vec<LookupTable<'m>> {
    enumeration.markers().iter().copied().map(LookupTable::new).collect()
}
