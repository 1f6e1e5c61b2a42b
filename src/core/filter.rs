//! Filter engine: narrow a table by month and/or weekday.

use crate::models::{DayFilter, FilterSelection, MonthFilter, TripTable};

/// Keep the trips whose derived month and weekday match the filters.
///
/// `All` on both axes returns an identical copy. The source table is left
/// untouched; an empty result is valid.
pub fn narrow(table: &TripTable, month: MonthFilter, day: DayFilter) -> TripTable {
    let month_no = match month {
        MonthFilter::All => None,
        MonthFilter::Only(m) => Some(m.number_from_month()),
    };
    let weekday = match day {
        DayFilter::All => None,
        DayFilter::Only(d) => Some(d),
    };

    let narrowed = table.retain_into(|t| {
        month_no.is_none_or(|m| t.month() == m) && weekday.is_none_or(|d| t.weekday() == d)
    });

    log::debug!(
        "filter month={} day={}: {} of {} trips kept",
        month,
        day,
        narrowed.len(),
        table.len()
    );
    narrowed
}

/// Convenience wrapper taking the whole selection.
pub fn apply(table: &TripTable, selection: &FilterSelection) -> TripTable {
    narrow(table, selection.month, selection.day)
}
