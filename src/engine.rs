use crate::catalog::FilterDef;
use crate::state::{FilterState, Selection};
use crate::types::Record;

/// Apply the current selections to a record set.
///
/// A record matches when, for every catalog filter, the selection is
/// inactive or the record's normalized field contains the selected
/// value (membership, not substring). Filters combine with AND; record
/// order is preserved. Pure function over its inputs.
pub fn apply_filters<'a>(
    records: &'a [Record],
    state: &FilterState,
    catalog: &[FilterDef],
) -> Vec<&'a Record> {
    records
        .iter()
        .filter(|record| {
            catalog.iter().all(|def| match state.get(&def.source_field) {
                Selection::All => true,
                Selection::Value(value) => record.facet(&def.source_field).contains(value),
            })
        })
        .collect()
}
