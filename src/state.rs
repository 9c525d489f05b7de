use crate::catalog::{find_filter, FilterDef};
use crate::error::{Error, Result};
use crate::types::FieldValue;
use indexmap::IndexMap;

/// Raw sentinel accepted from the outside for an inactive filter
pub const ALL: &str = "_all";

static INACTIVE: Selection = Selection::All;

/// Current selection of one filter
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    /// The filter is inactive and matches everything
    All,
    /// Only records whose field contains this value match
    Value(FieldValue),
}

impl Selection {
    pub fn is_all(&self) -> bool {
        matches!(self, Selection::All)
    }
}

/// Current selection per filter, keyed by source column name.
///
/// An explicit state object passed into the engine on each call, so
/// multiple sessions can filter the same dataset independently.
#[derive(Debug, Clone)]
pub struct FilterState {
    selections: IndexMap<String, Selection>,
}

impl FilterState {
    /// Create a state with every filter inactive
    pub fn new(catalog: &[FilterDef]) -> Self {
        let selections = catalog
            .iter()
            .map(|def| (def.source_field.clone(), Selection::All))
            .collect();
        Self { selections }
    }

    /// Selection for a source column; unknown columns are inactive
    pub fn get(&self, source_field: &str) -> &Selection {
        self.selections.get(source_field).unwrap_or(&INACTIVE)
    }

    /// Write a selection into a filter's slot.
    ///
    /// Unknown column names are rejected rather than silently ignored.
    pub fn set(&mut self, source_field: &str, selection: Selection) -> Result<()> {
        match self.selections.get_mut(source_field) {
            Some(slot) => {
                *slot = selection;
                Ok(())
            }
            None => Err(Error::UnknownFilter(source_field.to_string())),
        }
    }

    /// Apply a raw selection string addressed by control or column name.
    ///
    /// "_all" clears the filter; any other value is coerced through the
    /// matching definition's declared type.
    pub fn select_raw(&mut self, catalog: &[FilterDef], name: &str, raw: &str) -> Result<()> {
        let def = find_filter(catalog, name)?;
        let selection = if raw == ALL {
            Selection::All
        } else {
            Selection::Value(def.coerce(raw)?)
        };
        self.set(&def.source_field, selection)
    }

    /// Return every filter to the inactive state
    pub fn reset(&mut self) {
        for slot in self.selections.values_mut() {
            *slot = Selection::All;
        }
    }

    /// True when no filter constrains the record set
    pub fn is_inactive(&self) -> bool {
        self.selections.values().all(Selection::is_all)
    }
}
