use crate::catalog::{FieldKind, FilterDef};
use crate::error::{Error, Result};
use crate::types::{FieldValue, Record};
use indexmap::IndexMap;

/// Normalize one raw row into a record.
///
/// Every catalog column is split on ';' into a sequence of trimmed,
/// typed values; an empty or missing cell becomes an empty sequence.
/// Remaining columns are carried raw. The record is tagged with its
/// load-order position as its id.
pub fn normalize_row(
    mut raw: IndexMap<String, String>,
    index: usize,
    catalog: &[FilterDef],
) -> Result<Record> {
    let mut facets = IndexMap::with_capacity(catalog.len());

    for def in catalog {
        let cell = raw.shift_remove(def.source_field.as_str()).unwrap_or_default();
        facets.insert(def.source_field.clone(), split_cell(def, &cell)?);
    }

    Ok(Record {
        id: index,
        facets,
        fields: raw,
    })
}

/// Split a raw cell into typed values.
///
/// A number that fails to parse fails the whole load; the source data
/// is expected to be well formed.
fn split_cell(def: &FilterDef, cell: &str) -> Result<Vec<FieldValue>> {
    if cell.is_empty() {
        return Ok(Vec::new());
    }

    cell.split(';')
        .map(str::trim)
        .map(|piece| match def.kind {
            FieldKind::Text => Ok(FieldValue::Text(piece.to_string())),
            FieldKind::Number => {
                piece
                    .parse::<i64>()
                    .map(FieldValue::Number)
                    .map_err(|_| Error::InvalidNumber {
                        field: def.source_field.clone(),
                        value: piece.to_string(),
                    })
            }
        })
        .collect()
}
