use serde::{Deserialize, Serialize};
use ustr::Ustr;

use crate::TableError;

/// A single cell value.
///
/// Records come from JSON-shaped backends, so values are kept loose; the
/// column kind decides how a value is rendered, not the value itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CellValue {
    Text(Ustr),
    Integer(i64),
}

impl CellValue {
    /// Render the value as display text.
    pub fn display(&self) -> String {
        match self {
            Self::Text(text) => text.as_str().to_owned(),
            Self::Integer(number) => number.to_string(),
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text.as_str()),
            Self::Integer(_) => None,
        }
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        Self::Text(Ustr::from(value))
    }
}

impl From<Ustr> for CellValue {
    fn from(value: Ustr) -> Self {
        Self::Text(value)
    }
}

impl From<i64> for CellValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

/// One row of table data: an ordered field -> value mapping.
///
/// The shape is caller-defined and opaque to the table beyond what the
/// column descriptors name. Field order is preserved so a record can be
/// shown or serialized the way the backend produced it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Record {
    fields: Vec<(Ustr, CellValue)>,
}

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert; replaces the value when the field exists.
    #[must_use]
    pub fn with(mut self, field: &str, value: impl Into<CellValue>) -> Self {
        self.set(field, value);
        self
    }

    pub fn set(&mut self, field: &str, value: impl Into<CellValue>) {
        let field = Ustr::from(field);
        let value = value.into();
        if let Some(slot) = self.fields.iter_mut().find(|(name, _)| *name == field) {
            slot.1 = value;
        } else {
            self.fields.push((field, value));
        }
    }

    pub fn get(&self, field: &str) -> Option<&CellValue> {
        let field = Ustr::from(field);
        self.fields
            .iter()
            .find(|(name, _)| *name == field)
            .map(|(_, value)| value)
    }

    /// Like [`get`](Self::get) but an error when the field is absent, for
    /// callers that treat a missing field as a data bug.
    pub fn require(&self, field: &str) -> Result<&CellValue, TableError> {
        self.get(field).ok_or(TableError::MissingField {
            field: Ustr::from(field),
        })
    }

    /// Display text for a field, empty when absent. This is the lenient
    /// path cells use: a missing field renders as an empty cell, it never
    /// takes the whole table down.
    pub fn display(&self, field: &str) -> String {
        self.get(field).map(CellValue::display).unwrap_or_default()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn fields(&self) -> impl Iterator<Item = (&Ustr, &CellValue)> {
        self.fields.iter().map(|(name, value)| (name, value))
    }
}
