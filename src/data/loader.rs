//! CSV → TripTable.
//!
//! Loads are all-or-nothing: the first bad row aborts the whole file with a
//! `DataSource` error naming the row and the column at fault. A row is bad
//! when its start time is blank or unparsable, or when a filled cell cannot
//! be parsed. Other blank cells load as `None`.

use crate::errors::{AppError, AppResult};
use crate::models::{City, Column, TripRecord, TripTable};
use crate::utils::time::parse_timestamp;
use csv::StringRecord;
use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Load the dataset of `city` from `data_dir`.
pub fn load(city: City, data_dir: &Path) -> AppResult<TripTable> {
    let path = data_dir.join(city.file_name());
    load_from_path(&path)
}

pub fn load_from_path(path: &Path) -> AppResult<TripTable> {
    let label = path.display().to_string();
    let file = File::open(path).map_err(|e| AppError::data_source(&label, e))?;
    let table = load_from_reader(file, &label)?;

    log::info!("loaded {} trips from {}", table.len(), label);
    Ok(table)
}

/// Parse a whole CSV stream. `label` names the source in error messages.
pub fn load_from_reader<R: Read>(reader: R, label: &str) -> AppResult<TripTable> {
    let mut rdr = csv::ReaderBuilder::new().has_headers(true).from_reader(reader);

    let headers = rdr
        .headers()
        .map_err(|e| AppError::data_source(label, e))?
        .clone();
    let layout = ColumnLayout::from_headers(&headers);

    for required in Column::REQUIRED {
        if !layout.contains(required) {
            return Err(AppError::data_source(
                label,
                format!("missing required column '{}'", required.header()),
            ));
        }
    }

    let mut records = Vec::new();
    for (row, result) in rdr.records().enumerate() {
        let raw = result.map_err(|e| AppError::data_source(label, e))?;
        let trip = layout
            .parse_row(row, &raw)
            .map_err(|reason| AppError::data_source(label, format!("row {}: {}", row, reason)))?;
        records.push(trip);
    }

    Ok(TripTable::new(layout.columns(), records))
}

/// Header name → field index for the columns we understand.
struct ColumnLayout {
    index: HashMap<Column, usize>,
}

impl ColumnLayout {
    fn from_headers(headers: &StringRecord) -> Self {
        let mut index = HashMap::new();
        for (i, h) in headers.iter().enumerate() {
            if let Some(col) = Column::from_header(h) {
                index.entry(col).or_insert(i);
            }
        }
        Self { index }
    }

    fn contains(&self, column: Column) -> bool {
        self.index.contains_key(&column)
    }

    /// Present columns, in canonical order
    fn columns(&self) -> Vec<Column> {
        Column::ALL
            .into_iter()
            .filter(|c| self.contains(*c))
            .collect()
    }

    /// Trimmed cell; `None` when the column is absent or the cell is blank.
    fn cell<'r>(&self, raw: &'r StringRecord, column: Column) -> Option<&'r str> {
        let i = *self.index.get(&column)?;
        raw.get(i).map(str::trim).filter(|v| !v.is_empty())
    }

    fn required<'r>(&self, raw: &'r StringRecord, column: Column) -> Result<&'r str, String> {
        self.cell(raw, column)
            .ok_or_else(|| format!("empty value in '{}'", column.header()))
    }

    fn parse_row(&self, row: usize, raw: &StringRecord) -> Result<TripRecord, String> {
        let start_raw = self.required(raw, Column::StartTime)?;
        let start_time = parse_timestamp(start_raw)
            .ok_or_else(|| format!("unparsable 'Start Time' value '{}'", start_raw))?;

        let end_time = match self.cell(raw, Column::EndTime) {
            Some(v) => Some(
                parse_timestamp(v)
                    .ok_or_else(|| format!("unparsable 'End Time' value '{}'", v))?,
            ),
            None => None,
        };

        let duration_secs = match self.cell(raw, Column::TripDuration) {
            Some(v) => Some(
                v.parse::<f64>()
                    .map_err(|_| format!("unparsable 'Trip Duration' value '{}'", v))?,
            ),
            None => None,
        };

        let birth_year = match self.cell(raw, Column::BirthYear) {
            Some(v) => Some(parse_year(v)?),
            None => None,
        };

        Ok(TripRecord::new(row, start_time)
            .with_end_time(end_time)
            .with_duration(duration_secs)
            .with_stations(
                self.cell(raw, Column::StartStation).map(String::from),
                self.cell(raw, Column::EndStation).map(String::from),
            )
            .with_user_type(self.cell(raw, Column::UserType).map(String::from))
            .with_gender(self.cell(raw, Column::Gender).map(String::from))
            .with_birth_year(birth_year))
    }
}

/// Birth years are often exported as floats ("1989.0").
fn parse_year(v: &str) -> Result<i32, String> {
    if let Ok(y) = v.parse::<i32>() {
        return Ok(y);
    }
    match v.parse::<f64>() {
        Ok(f)
            if f.is_finite()
                && f.fract() == 0.0
                && f >= f64::from(i32::MIN)
                && f <= f64::from(i32::MAX) =>
        {
            Ok(f as i32)
        }
        _ => Err(format!("unparsable 'Birth Year' value '{}'", v)),
    }
}
