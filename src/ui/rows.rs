//! Raw row pages shown when the user asks to see trip data.

use crate::models::calendar::weekday_name;
use crate::models::{Column, TripRecord, TripTable};
use crate::utils::table::{Column as TextColumn, Table};

const TIMESTAMP_FMT: &str = "%Y-%m-%d %H:%M:%S";

/// Render `page` with the source row index, every column the dataset
/// provides, and the derived month / day_of_week / hour columns.
pub fn render_page(table: &TripTable, page: &[TripRecord]) -> String {
    let columns = table.columns();

    let mut headers = vec![TextColumn::right("")];
    for col in columns {
        headers.push(match col {
            Column::TripDuration | Column::BirthYear => TextColumn::right(col.header()),
            _ => TextColumn::left(col.header()),
        });
    }
    headers.push(TextColumn::right("month"));
    headers.push(TextColumn::left("day_of_week"));
    headers.push(TextColumn::right("hour"));

    let mut out = Table::new(headers);
    for trip in page {
        let mut row = vec![trip.row.to_string()];
        row.extend(columns.iter().map(|c| cell(trip, *c)));
        row.push(trip.month().to_string());
        row.push(weekday_name(trip.weekday()).to_string());
        row.push(trip.hour().to_string());
        out.add_row(row);
    }
    out.render()
}

fn cell(trip: &TripRecord, column: Column) -> String {
    match column {
        Column::StartTime => trip.start_time.format(TIMESTAMP_FMT).to_string(),
        Column::EndTime => trip
            .end_time
            .map(|t| t.format(TIMESTAMP_FMT).to_string())
            .unwrap_or_default(),
        Column::TripDuration => trip
            .duration_secs
            .map(|d| d.to_string())
            .unwrap_or_default(),
        Column::StartStation => trip.start_station.clone().unwrap_or_default(),
        Column::EndStation => trip.end_station.clone().unwrap_or_default(),
        Column::UserType => trip.user_type.clone().unwrap_or_default(),
        Column::Gender => trip.gender.clone().unwrap_or_default(),
        Column::BirthYear => trip.birth_year.map(|y| y.to_string()).unwrap_or_default(),
    }
}
