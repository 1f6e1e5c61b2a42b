use super::trip::{Column, TripRecord};
use crate::errors::{AppError, AppResult};

/// An ordered set of trips plus the columns their source provided.
///
/// Narrowing never mutates a table; it builds a new one that shares the
/// column set (see [`TripTable::retain_into`]).
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TripTable {
    columns: Vec<Column>,
    records: Vec<TripRecord>,
}

impl TripTable {
    pub fn new(columns: Vec<Column>, records: Vec<TripRecord>) -> Self {
        Self { columns, records }
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn has_column(&self, column: Column) -> bool {
        self.columns.contains(&column)
    }

    /// `MissingColumn` when `column` was not in the source file.
    pub fn require(&self, column: Column) -> AppResult<()> {
        if self.has_column(column) {
            Ok(())
        } else {
            Err(AppError::MissingColumn(column.header()))
        }
    }

    pub fn records(&self) -> &[TripRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records `[start, start + len)`, clamped to the table; past the end
    /// this is an empty slice.
    pub fn window(&self, start: usize, len: usize) -> &[TripRecord] {
        let from = start.min(self.records.len());
        let to = start.saturating_add(len).min(self.records.len());
        &self.records[from..to]
    }

    /// A new table holding clones of the records matching `keep`.
    pub fn retain_into<F>(&self, mut keep: F) -> TripTable
    where
        F: FnMut(&TripRecord) -> bool,
    {
        TripTable {
            columns: self.columns.clone(),
            records: self.records.iter().filter(|r| keep(*r)).cloned().collect(),
        }
    }
}
