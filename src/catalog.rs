use crate::error::{Error, Result};
use crate::types::FieldValue;

/// Value type carried by a filterable column
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Number,
}

/// Sort order for presenting filter options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Ascending,
    Descending,
}

/// Static descriptor of one filterable column
#[derive(Debug, Clone)]
pub struct FilterDef {
    /// Display label for the filter control
    pub label: String,
    /// Control name used to address the filter from the outside
    pub name: String,
    /// Column name in the source dataset
    pub source_field: String,
    pub kind: FieldKind,
    pub order: SortOrder,
}

impl FilterDef {
    pub fn new(
        label: impl Into<String>,
        name: impl Into<String>,
        source_field: impl Into<String>,
        kind: FieldKind,
        order: SortOrder,
    ) -> Self {
        Self {
            label: label.into(),
            name: name.into(),
            source_field: source_field.into(),
            kind,
            order,
        }
    }

    /// Coerce a raw selection string into this filter's value type
    pub fn coerce(&self, raw: &str) -> Result<FieldValue> {
        let raw = raw.trim();
        match self.kind {
            FieldKind::Text => Ok(FieldValue::Text(raw.to_string())),
            FieldKind::Number => raw
                .parse::<i64>()
                .map(FieldValue::Number)
                .map_err(|_| Error::InvalidNumber {
                    field: self.source_field.clone(),
                    value: raw.to_string(),
                }),
        }
    }
}

/// The five filterable columns of the legislation dataset.
///
/// This is configuration, not logic: the engine and the option deriver
/// are generic over any catalog slice.
pub fn default_catalog() -> Vec<FilterDef> {
    vec![
        FilterDef::new(
            "elemento",
            "elemento",
            "Elementos",
            FieldKind::Text,
            SortOrder::Ascending,
        ),
        FilterDef::new(
            "aspecto",
            "aspecto",
            "Aspectos",
            FieldKind::Text,
            SortOrder::Ascending,
        ),
        FilterDef::new(
            "esfera de governo",
            "esfera-de-governo",
            "Esfera de Governo",
            FieldKind::Text,
            SortOrder::Ascending,
        ),
        FilterDef::new(
            "local",
            "local",
            "Local",
            FieldKind::Text,
            SortOrder::Ascending,
        ),
        FilterDef::new(
            "ano",
            "ano",
            "Ano",
            FieldKind::Number,
            SortOrder::Descending,
        ),
    ]
}

/// Look up a definition by control name or source column name
pub fn find_filter<'a>(catalog: &'a [FilterDef], name: &str) -> Result<&'a FilterDef> {
    catalog
        .iter()
        .find(|def| def.name == name || def.source_field == name)
        .ok_or_else(|| Error::UnknownFilter(name.to_string()))
}
