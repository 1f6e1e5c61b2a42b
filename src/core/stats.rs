//! Statistics engine: the four reports printed for every selection.
//!
//! Each function only computes; rendering and timing live in `ui::report`.
//! A report whose structural column is absent returns `MissingColumn`;
//! an empty table yields `None` fields instead of failing.

use crate::core::frequency::Frequency;
use crate::errors::AppResult;
use crate::models::calendar::month_from_number;
use crate::models::{Column, TripTable};
use crate::utils::formatting::whole_secs;
use chrono::{Month, Weekday};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeStats {
    pub common_month: Option<Month>,
    pub common_day: Option<Weekday>,
    pub common_hour: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StationStats {
    pub common_start: Option<String>,
    pub common_end: Option<String>,
    /// `"<start> to <end>"`
    pub common_route: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DurationStats {
    /// Trips that carry a duration
    pub trips: usize,
    /// Whole seconds, truncated
    pub total_secs: u64,
    /// `None` when no trip carries a duration
    pub mean_secs: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BirthYears {
    /// The dataset has no birth year column at all
    Unavailable,
    /// Column present, but no row in the selection has a value
    NoValues,
    Summary {
        earliest: i32,
        most_recent: i32,
        most_common: i32,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserStats {
    /// Descending by count
    pub user_types: Vec<(String, usize)>,
    /// `None` when the dataset has no gender column
    pub genders: Option<Vec<(String, usize)>>,
    pub birth_years: BirthYears,
}

pub fn time_stats(table: &TripTable) -> AppResult<TimeStats> {
    table.require(Column::StartTime)?;

    let trips = table.records();
    let months: Frequency<u32> = trips.iter().map(|t| t.month()).collect();
    let days: Frequency<Weekday> = trips.iter().map(|t| t.weekday()).collect();
    let hours: Frequency<u32> = trips.iter().map(|t| t.hour()).collect();

    Ok(TimeStats {
        common_month: months.mode().and_then(|m| month_from_number(*m)),
        common_day: days.mode().copied(),
        common_hour: hours.mode().copied(),
    })
}

pub fn station_stats(table: &TripTable) -> AppResult<StationStats> {
    table.require(Column::StartStation)?;
    table.require(Column::EndStation)?;

    let trips = table.records();
    let starts: Frequency<&str> = trips.iter().filter_map(|t| t.start_station.as_deref()).collect();
    let ends: Frequency<&str> = trips.iter().filter_map(|t| t.end_station.as_deref()).collect();
    let routes: Frequency<String> = trips.iter().filter_map(|t| t.route()).collect();

    Ok(StationStats {
        common_start: starts.mode().map(|s| s.to_string()),
        common_end: ends.mode().map(|s| s.to_string()),
        common_route: routes.mode().cloned(),
    })
}

pub fn duration_stats(table: &TripTable) -> AppResult<DurationStats> {
    table.require(Column::TripDuration)?;

    let values: Vec<f64> = table.records().iter().filter_map(|t| t.duration_secs).collect();
    let trips = values.len();
    let total: f64 = values.iter().sum();
    let mean_secs = (trips > 0).then(|| whole_secs(total / trips as f64));

    Ok(DurationStats {
        trips,
        total_secs: whole_secs(total),
        mean_secs,
    })
}

pub fn user_stats(table: &TripTable) -> AppResult<UserStats> {
    table.require(Column::UserType)?;

    let trips = table.records();
    let user_types = owned_ranking(trips.iter().filter_map(|t| t.user_type.as_deref()).collect());

    let genders = table.has_column(Column::Gender).then(|| {
        owned_ranking(trips.iter().filter_map(|t| t.gender.as_deref()).collect())
    });

    let birth_years = if table.has_column(Column::BirthYear) {
        let years: Vec<i32> = trips.iter().filter_map(|t| t.birth_year).collect();
        summarize_years(&years)
    } else {
        BirthYears::Unavailable
    };

    Ok(UserStats {
        user_types,
        genders,
        birth_years,
    })
}

fn owned_ranking(freq: Frequency<&str>) -> Vec<(String, usize)> {
    freq.ranked()
        .into_iter()
        .map(|(k, c)| (k.to_string(), c))
        .collect()
}

fn summarize_years(years: &[i32]) -> BirthYears {
    let (Some(earliest), Some(most_recent)) = (years.iter().min(), years.iter().max()) else {
        return BirthYears::NoValues;
    };
    let freq: Frequency<i32> = years.iter().copied().collect();
    match freq.mode() {
        Some(most_common) => BirthYears::Summary {
            earliest: *earliest,
            most_recent: *most_recent,
            most_common: *most_common,
        },
        None => BirthYears::NoValues,
    }
}
