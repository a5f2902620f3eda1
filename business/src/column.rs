use serde::{Deserialize, Serialize};
use ustr::Ustr;

use crate::TableError;

/// How a column's cells are rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColumnKind {
    /// Literal field value.
    Text,
    /// Field value is an image source, shown with a bounded max dimension.
    Image,
    /// Field value is a video source. Shown as a source link; egui has no
    /// inline video playback.
    Video,
    /// Field value is an M/F/O/Z code mapped to its display label.
    Gender,
    /// No field lookup; renders the action buttons the caller enabled.
    Action,
}

impl ColumnKind {
    /// Action columns are the only kind that does not read a row field.
    pub fn needs_field(self) -> bool {
        !matches!(self, Self::Action)
    }
}

/// Describes one table column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnSpec {
    /// Header label.
    pub header: Ustr,
    /// Field looked up in each row. Unused (and allowed empty) for
    /// `ColumnKind::Action`.
    pub field: Ustr,
    pub kind: ColumnKind,
}

impl ColumnSpec {
    pub fn new(header: &str, field: &str, kind: ColumnKind) -> Self {
        Self {
            header: Ustr::from(header),
            field: Ustr::from(field),
            kind,
        }
    }

    pub fn text(header: &str, field: &str) -> Self {
        Self::new(header, field, ColumnKind::Text)
    }

    pub fn image(header: &str, field: &str) -> Self {
        Self::new(header, field, ColumnKind::Image)
    }

    pub fn video(header: &str, field: &str) -> Self {
        Self::new(header, field, ColumnKind::Video)
    }

    pub fn gender(header: &str, field: &str) -> Self {
        Self::new(header, field, ColumnKind::Gender)
    }

    pub fn action(header: &str) -> Self {
        Self::new(header, "", ColumnKind::Action)
    }

    /// A non-action column without a field can never render a cell.
    pub fn validate(&self) -> Result<(), TableError> {
        if self.kind.needs_field() && self.field.is_empty() {
            return Err(TableError::InvalidColumnSpec {
                reason: format!("column '{}' ({:?}) has no field", self.header, self.kind),
            });
        }
        Ok(())
    }

    /// Validate a full column set: non-empty, and every descriptor valid.
    /// Pages call this once when they define their columns.
    pub fn validate_all(columns: &[Self]) -> Result<(), TableError> {
        if columns.is_empty() {
            return Err(TableError::InvalidColumnSpec {
                reason: "column list is empty".to_owned(),
            });
        }
        for column in columns {
            column.validate()?;
        }
        Ok(())
    }
}
