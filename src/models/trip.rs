use chrono::{Datelike, NaiveDateTime, Timelike, Weekday};

/// One bikeshare rental.
///
/// The calendar fields (`month`, `weekday`, `hour`) are derived from
/// `start_time` in [`TripRecord::new`] and have no setters, so they always
/// agree with the timestamp they come from.
#[derive(Debug, Clone, PartialEq)]
pub struct TripRecord {
    /// Zero-based position of the row in its source file
    pub row: usize,
    pub start_time: NaiveDateTime,
    pub end_time: Option<NaiveDateTime>,
    /// Seconds; some exports carry fractional values. Blank cells are `None`
    /// and are left out of the duration totals.
    pub duration_secs: Option<f64>,
    pub start_station: Option<String>,
    pub end_station: Option<String>,
    pub user_type: Option<String>,
    pub gender: Option<String>,
    pub birth_year: Option<i32>,

    month: u32,
    weekday: Weekday,
    hour: u32,
}

impl TripRecord {
    pub fn new(row: usize, start_time: NaiveDateTime) -> Self {
        Self {
            row,
            start_time,
            end_time: None,
            duration_secs: None,
            start_station: None,
            end_station: None,
            user_type: None,
            gender: None,
            birth_year: None,
            month: start_time.month(),
            weekday: start_time.weekday(),
            hour: start_time.hour(),
        }
    }

    pub fn with_end_time(mut self, end_time: Option<NaiveDateTime>) -> Self {
        self.end_time = end_time;
        self
    }

    pub fn with_duration(mut self, duration_secs: Option<f64>) -> Self {
        self.duration_secs = duration_secs;
        self
    }

    pub fn with_stations(mut self, start: Option<String>, end: Option<String>) -> Self {
        self.start_station = start;
        self.end_station = end;
        self
    }

    pub fn with_user_type(mut self, user_type: Option<String>) -> Self {
        self.user_type = user_type;
        self
    }

    pub fn with_gender(mut self, gender: Option<String>) -> Self {
        self.gender = gender;
        self
    }

    pub fn with_birth_year(mut self, birth_year: Option<i32>) -> Self {
        self.birth_year = birth_year;
        self
    }

    /// 1..=12
    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn weekday(&self) -> Weekday {
        self.weekday
    }

    /// 0..=23
    pub fn hour(&self) -> u32 {
        self.hour
    }

    /// `"<start> to <end>"`, the key used for the popular trip statistic;
    /// `None` unless both stations are known.
    pub fn route(&self) -> Option<String> {
        match (&self.start_station, &self.end_station) {
            (Some(start), Some(end)) => Some(format!("{} to {}", start, end)),
            _ => None,
        }
    }
}

/// Columns a trip file may carry. `REQUIRED` headers must be present; only
/// `Start Time` must also be filled in on every row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Column {
    StartTime,
    TripDuration,
    StartStation,
    EndStation,
    EndTime,
    UserType,
    Gender,
    BirthYear,
}

impl Column {
    pub const REQUIRED: [Column; 4] = [
        Column::StartTime,
        Column::TripDuration,
        Column::StartStation,
        Column::EndStation,
    ];

    pub const ALL: [Column; 8] = [
        Column::StartTime,
        Column::EndTime,
        Column::TripDuration,
        Column::StartStation,
        Column::EndStation,
        Column::UserType,
        Column::Gender,
        Column::BirthYear,
    ];

    /// Header as it appears in the CSV files
    pub fn header(&self) -> &'static str {
        match self {
            Column::StartTime => "Start Time",
            Column::EndTime => "End Time",
            Column::TripDuration => "Trip Duration",
            Column::StartStation => "Start Station",
            Column::EndStation => "End Station",
            Column::UserType => "User Type",
            Column::Gender => "Gender",
            Column::BirthYear => "Birth Year",
        }
    }

    pub fn from_header(h: &str) -> Option<Self> {
        let h = h.trim();
        Column::ALL.into_iter().find(|c| c.header() == h)
    }
}
