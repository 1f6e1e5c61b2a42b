//! Session controller: filter prompts, the load → narrow → report pipeline,
//! raw row paging and the restart question.

use crate::config::Config;
use crate::core::filter;
use crate::data;
use crate::errors::{AppError, AppResult};
use crate::models::calendar::{MONTHS, WEEKDAYS, parse_month, parse_weekday, weekday_name};
use crate::models::{City, FilterSelection, TripRecord, TripTable};
use crate::ui::messages::Console;
use crate::ui::{report, rows};
use std::io::{BufRead, Write};
use std::path::PathBuf;

/// Filter collection state machine.
///
/// Invalid input never changes state: [`FilterState::advance`] returns a
/// recoverable error and the caller asks again.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterState {
    AwaitCity,
    AwaitFilterAxis(City),
    AwaitMonthValue(City),
    AwaitDayValue(City),
    Complete(FilterSelection),
}

impl FilterState {
    pub fn advance(self, input: &str) -> AppResult<FilterState> {
        let input = input.trim();
        match self {
            FilterState::AwaitCity => City::from_input(input)
                .map(FilterState::AwaitFilterAxis)
                .ok_or_else(|| AppError::UnknownCity(input.to_string())),

            FilterState::AwaitFilterAxis(city) => match input.to_lowercase().as_str() {
                "month" => Ok(FilterState::AwaitMonthValue(city)),
                "day" => Ok(FilterState::AwaitDayValue(city)),
                "all" => Ok(FilterState::Complete(FilterSelection::all(city))),
                _ => Err(AppError::UnknownFilterAxis(input.to_string())),
            },

            FilterState::AwaitMonthValue(city) => parse_month(input)
                .map(|m| FilterState::Complete(FilterSelection::by_month(city, m)))
                .ok_or_else(|| AppError::UnknownMonth(input.to_string())),

            FilterState::AwaitDayValue(city) => parse_weekday(input)
                .map(|d| FilterState::Complete(FilterSelection::by_day(city, d)))
                .ok_or_else(|| AppError::UnknownDay(input.to_string())),

            FilterState::Complete(_) => Ok(self),
        }
    }

    pub fn prompt(&self) -> String {
        match self {
            FilterState::AwaitCity => {
                let names: Vec<&str> = City::ALL.iter().map(|c| c.display_name()).collect();
                format!("Enter a city name ({}): ", names.join(", "))
            }
            FilterState::AwaitFilterAxis(_) => "Filter by month, day, or all: ".to_string(),
            FilterState::AwaitMonthValue(_) => {
                let names: Vec<&str> = MONTHS.iter().map(|m| m.name()).collect();
                format!("Choose one of these months: {}: ", names.join(", "))
            }
            FilterState::AwaitDayValue(_) => {
                let names: Vec<&str> = WEEKDAYS.iter().map(|d| weekday_name(*d)).collect();
                format!("Choose one of these days: {}: ", names.join(", "))
            }
            FilterState::Complete(_) => String::new(),
        }
    }
}

/// yes / no / anything else
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Answer {
    Yes,
    No,
    Other,
}

impl Answer {
    pub fn from_input(input: &str) -> Self {
        match input.trim().to_lowercase().as_str() {
            "yes" => Answer::Yes,
            "no" => Answer::No,
            _ => Answer::Other,
        }
    }
}

/// Zero-based row cursor over a table, advanced one page per request.
/// Pages past the end are empty, never an error.
#[derive(Debug, Clone)]
pub struct Pager {
    cursor: usize,
    page_size: usize,
}

impl Pager {
    pub fn new(page_size: usize) -> Self {
        Self {
            cursor: 0,
            page_size,
        }
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn next_page<'t>(&mut self, table: &'t TripTable) -> &'t [TripRecord] {
        let page = table.window(self.cursor, self.page_size);
        self.cursor += self.page_size;
        page
    }
}

/// Interactive driver. Reads answers from `input`, writes everything to
/// `out`; `run` blocks until the user declines to restart or input ends.
pub struct Session<'c, R: BufRead, W: Write> {
    cfg: &'c Config,
    data_dir: PathBuf,
    input: R,
    console: Console<W>,
}

impl<'c, R: BufRead, W: Write> Session<'c, R, W> {
    pub fn new(cfg: &'c Config, input: R, out: W) -> Self {
        Self {
            cfg,
            data_dir: cfg.data_path(),
            input,
            console: Console::new(out, cfg),
        }
    }

    pub fn into_output(self) -> W {
        self.console.into_inner()
    }

    pub fn run(&mut self) -> AppResult<()> {
        match self.run_loop() {
            Err(AppError::InputClosed) => {
                log::info!("input closed, ending session");
                self.console.blank()?;
                Ok(())
            }
            other => other,
        }
    }

    fn run_loop(&mut self) -> AppResult<()> {
        self.console.header("Hello! Let's explore some US bikeshare data!")?;

        loop {
            let selection = self.collect_filters()?;

            let table = match data::load(selection.city, &self.data_dir) {
                Ok(t) => t,
                Err(e @ AppError::DataSource { .. }) => {
                    log::warn!("{}", e);
                    self.console.error(&e)?;
                    self.console.info("Returning to city selection.")?;
                    continue;
                }
                Err(e) => return Err(e),
            };

            let view = filter::apply(&table, &selection);
            self.console
                .info(format!("{} of {} trips match.", view.len(), table.len()))?;

            report::print_all(&mut self.console, &view)?;
            self.browse_rows(&view)?;

            let again = self.ask("\nWould you like to restart? Enter yes or no.\n")?;
            if Answer::from_input(&again) != Answer::Yes {
                return Ok(());
            }
        }
    }

    fn collect_filters(&mut self) -> AppResult<FilterSelection> {
        let mut state = FilterState::AwaitCity;
        loop {
            if let FilterState::Complete(selection) = state {
                self.console.field("City", selection.city)?;
                self.console.field("Month", selection.month)?;
                self.console.field("Day", selection.day)?;
                self.console.separator()?;
                return Ok(selection);
            }

            let answer = self.ask(&state.prompt())?;
            match state.advance(&answer) {
                Ok(next) => {
                    if let FilterState::AwaitFilterAxis(city) = next
                        && state == FilterState::AwaitCity
                    {
                        self.console.success(format!("You selected the city: {}", city))?;
                    }
                    state = next;
                }
                Err(e) if e.is_invalid_input() => self.console.warning(&e)?,
                Err(e) => return Err(e),
            }
        }
    }

    fn browse_rows(&mut self, view: &TripTable) -> AppResult<()> {
        let mut pager = Pager::new(self.cfg.page_size);
        let question = format!(
            "\nWould you like to see {} rows of trip data? Enter yes or no.\n",
            self.cfg.page_size
        );

        loop {
            match Answer::from_input(&self.ask(&question)?) {
                Answer::Yes => {
                    let from = pager.cursor();
                    let page = pager.next_page(view);
                    if page.is_empty() {
                        self.console
                            .note(format!("No more rows (row {} is past the end).", from))?;
                    } else {
                        self.console.line(rows::render_page(view, page).trim_end())?;
                    }
                }
                Answer::No => return Ok(()),
                Answer::Other => {}
            }
        }
    }

    fn ask(&mut self, prompt: &str) -> AppResult<String> {
        self.console.prompt(prompt)?;
        // invalid UTF-8 reads as an unrecognized answer
        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            return Err(AppError::InputClosed);
        }
        Ok(String::from_utf8_lossy(&buf).trim().to_string())
    }
}
