use crate::catalog::{FilterDef, SortOrder};
use crate::types::{FieldValue, Record};

/// Derive the distinct values available for one filter's control.
///
/// Walks the records in order, de-duplicates by equality keeping the
/// first occurrence, then sorts by the filter's declared order. Returns
/// a sequence so consumers iterate deterministically.
pub fn filter_options(def: &FilterDef, records: &[Record]) -> Vec<FieldValue> {
    let mut options: Vec<FieldValue> = Vec::new();

    for record in records {
        for value in record.facet(&def.source_field) {
            if !options.contains(value) {
                options.push(value.clone());
            }
        }
    }

    match def.order {
        SortOrder::Ascending => options.sort(),
        SortOrder::Descending => options.sort_by(|a, b| b.cmp(a)),
    }

    options
}
