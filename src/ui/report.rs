//! Rendering of the four statistics sections.
//!
//! Every section prints a title, its lines, the elapsed time and the
//! separator. A `MissingColumn` from the engine skips that section only.

use crate::core::stats::{
    self, BirthYears, DurationStats, StationStats, TimeStats, UserStats,
};
use crate::errors::{AppError, AppResult};
use crate::models::TripTable;
use crate::models::calendar::weekday_name;
use crate::ui::messages::Console;
use crate::utils::formatting::secs2readable;
use crate::utils::table::{Column, Table};
use std::io::{self, Write};
use std::time::Instant;

/// Time, station, duration and user reports, in that order.
pub fn print_all<W: Write>(console: &mut Console<W>, table: &TripTable) -> AppResult<()> {
    if table.is_empty() {
        console.warning("No trips match this selection; statistics will be empty.")?;
    }

    section(
        console,
        "Calculating The Most Frequent Times of Travel...",
        || stats::time_stats(table),
        render_time,
    )?;
    section(
        console,
        "Calculating The Most Popular Stations and Trip...",
        || stats::station_stats(table),
        render_stations,
    )?;
    section(
        console,
        "Calculating Trip Duration...",
        || stats::duration_stats(table),
        render_duration,
    )?;
    section(
        console,
        "Calculating User Stats...",
        || stats::user_stats(table),
        render_users,
    )?;
    Ok(())
}

fn section<W, T, C, R>(console: &mut Console<W>, title: &str, compute: C, render: R) -> AppResult<()>
where
    W: Write,
    C: FnOnce() -> AppResult<T>,
    R: FnOnce(&mut Console<W>, &T) -> io::Result<()>,
{
    console.blank()?;
    console.line(title)?;
    console.blank()?;

    let started = Instant::now();
    match compute() {
        Ok(result) => render(console, &result)?,
        Err(e @ AppError::MissingColumn(_)) => {
            log::warn!("report skipped: {}", e);
            console.warning(format!("Report skipped: {}", e))?;
        }
        Err(e) => return Err(e),
    }
    let elapsed = started.elapsed().as_secs_f64();
    log::debug!("{} {:.6}s", title, elapsed);

    console.blank()?;
    console.note(format!("This took {:.6} seconds.", elapsed))?;
    console.separator()?;
    Ok(())
}

pub fn render_time<W: Write>(console: &mut Console<W>, s: &TimeStats) -> io::Result<()> {
    if let Some(month) = s.common_month {
        console.field("Most common month", month.name())?;
    }
    if let Some(day) = s.common_day {
        console.field("Most common day of week", weekday_name(day))?;
    }
    if let Some(hour) = s.common_hour {
        console.field("Most common start hour", hour)?;
    }
    Ok(())
}

pub fn render_stations<W: Write>(console: &mut Console<W>, s: &StationStats) -> io::Result<()> {
    if let Some(start) = &s.common_start {
        console.field("Most common start station", start)?;
    }
    if let Some(end) = &s.common_end {
        console.field("Most common end station", end)?;
    }
    if let Some(route) = &s.common_route {
        console.field("Most frequent combination", route)?;
    }
    Ok(())
}

pub fn render_duration<W: Write>(console: &mut Console<W>, s: &DurationStats) -> io::Result<()> {
    console.field("Total travel time", secs2readable(s.total_secs))?;
    if let Some(mean) = s.mean_secs {
        console.field("Mean travel time", secs2readable(mean))?;
    }
    Ok(())
}

pub fn render_users<W: Write>(console: &mut Console<W>, s: &UserStats) -> io::Result<()> {
    counts_table(console, "User Type", &s.user_types)?;

    if let Some(genders) = &s.genders {
        console.blank()?;
        counts_table(console, "Gender", genders)?;
    }

    console.blank()?;
    match s.birth_years {
        BirthYears::Summary {
            earliest,
            most_recent,
            most_common,
        } => {
            console.field("Earliest birth year", earliest)?;
            console.field("Most recent birth year", most_recent)?;
            console.field("Most common birth year", most_common)?;
        }
        BirthYears::NoValues => console.line("No birth year values in this selection.")?,
        BirthYears::Unavailable => console.line("No birth year information for this dataset.")?,
    }
    Ok(())
}

fn counts_table<W: Write>(
    console: &mut Console<W>,
    header: &str,
    counts: &[(String, usize)],
) -> io::Result<()> {
    if counts.is_empty() {
        return console.line(format!("No {} values in this selection.", header));
    }

    let mut table = Table::new(vec![Column::left(header), Column::right("Count")]);
    for (value, count) in counts {
        table.add_row(vec![value.clone(), count.to_string()]);
    }
    console.line(table.render().trim_end())
}
