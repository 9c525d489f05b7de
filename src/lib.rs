//! Load, normalize and filter legislation records from delimited datasets.
//!
//! The dataset is parsed once at startup into immutable records; the
//! only mutable state is the per-session filter selection. Filtering,
//! option derivation and normalization are pure functions, with the
//! file load as the single async boundary.

pub mod catalog;
pub mod config;
pub mod engine;
pub mod error;
pub mod loader;
pub mod normalize;
pub mod options;
pub mod render;
pub mod session;
pub mod state;
pub mod types;

pub use catalog::{default_catalog, find_filter, FieldKind, FilterDef, SortOrder};
pub use config::{Config, ConfigBuilder};
pub use engine::apply_filters;
pub use error::{Error, Result};
pub use loader::{load_all, load_records};
pub use normalize::normalize_row;
pub use options::filter_options;
pub use render::{JsonLines, Presenter, TextCards};
pub use session::{parse_selection, Session};
pub use state::{FilterState, Selection, ALL};
pub use types::{FieldValue, Record};

/// Re-export commonly used types for convenience
pub mod prelude {
    pub use crate::catalog::{default_catalog, FieldKind, FilterDef, SortOrder};
    pub use crate::config::{Config, ConfigBuilder};
    pub use crate::error::{Error, Result};
    pub use crate::session::{parse_selection, Session};
    pub use crate::state::{FilterState, Selection, ALL};
    pub use crate::types::{FieldValue, Record};
    pub use futures::StreamExt;
}
