use crate::catalog::{default_catalog, find_filter, FilterDef};
use crate::config::Config;
use crate::engine::apply_filters;
use crate::error::{Error, Result};
use crate::loader::load_all;
use crate::options::filter_options;
use crate::state::{FilterState, ALL};
use crate::types::{FieldValue, Record};

/// Split a raw "NAME=VALUE" selection argument into its parts.
///
/// Hosts (the CLI among them) pass selections as single strings; the
/// parts are trimmed and fed through `Session::set_filter`.
pub fn parse_selection(raw: &str) -> Result<(&str, &str)> {
    match raw.split_once('=') {
        Some((name, value)) if !name.trim().is_empty() => Ok((name.trim(), value.trim())),
        _ => Err(Error::Config(format!(
            "Invalid selection '{}': expected NAME=VALUE",
            raw
        ))),
    }
}

/// One filtering session over an immutable dataset.
///
/// Holds the loaded records, the filter catalog and the only mutable
/// piece of the system, the filter state. Sessions are independent:
/// several can share a dataset by cloning the records.
pub struct Session {
    records: Vec<Record>,
    catalog: Vec<FilterDef>,
    state: FilterState,
}

impl Session {
    /// Create a session over already-loaded records
    pub fn new(records: Vec<Record>, catalog: Vec<FilterDef>) -> Self {
        let state = FilterState::new(&catalog);
        Self {
            records,
            catalog,
            state,
        }
    }

    /// Load the configured dataset and open a session over it with the
    /// default catalog
    pub async fn open(config: &Config) -> Result<Self> {
        let catalog = default_catalog();
        let records = load_all(config, &catalog).await?;
        Ok(Self::new(records, catalog))
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn catalog(&self) -> &[FilterDef] {
        &self.catalog
    }

    pub fn state(&self) -> &FilterState {
        &self.state
    }

    /// Apply a raw selection to the named filter ("_all" clears it)
    pub fn set_filter(&mut self, name: &str, raw: &str) -> Result<()> {
        self.state.select_raw(&self.catalog, name, raw)
    }

    /// Return the named filter to the inactive state
    pub fn clear_filter(&mut self, name: &str) -> Result<()> {
        self.set_filter(name, ALL)
    }

    /// Return every filter to the inactive state
    pub fn reset(&mut self) {
        self.state.reset();
    }

    /// Records satisfying every active filter, in load order
    pub fn matching(&self) -> Vec<&Record> {
        apply_filters(&self.records, &self.state, &self.catalog)
    }

    /// Distinct values available for the named filter's control
    pub fn options_for(&self, name: &str) -> Result<Vec<FieldValue>> {
        let def = find_filter(&self.catalog, name)?;
        Ok(filter_options(def, &self.records))
    }
}
