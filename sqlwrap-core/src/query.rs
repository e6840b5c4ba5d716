use crate::Value;
use std::sync::Arc;

/// Shared reference-counted column name list.
pub type RowNames = Arc<[String]>;
/// Row cells aligned with `RowNames`, `None` is SQL NULL.
pub type Row = Box<[Option<Value>]>;

/// A result row with its corresponding column labels.
#[derive(Debug, Clone, PartialEq)]
pub struct RowLabeled {
    pub labels: RowNames,
    pub values: Row,
}

impl RowLabeled {
    pub fn new(labels: RowNames, values: Row) -> Self {
        Self { labels, values }
    }
    pub fn names(&self) -> &[String] {
        &self.labels
    }
    pub fn values(&self) -> &[Option<Value>] {
        &self.values
    }
    /// Cell of the column `name`. The outer `None` means there is no such
    /// column, the inner one that the cell is NULL.
    pub fn get_column(&self, name: &str) -> Option<Option<&Value>> {
        self.labels
            .iter()
            .position(|v| v == name)
            .map(|i| self.values[i].as_ref())
    }
}

impl From<RowLabeled> for Row {
    fn from(value: RowLabeled) -> Self {
        value.values
    }
}
