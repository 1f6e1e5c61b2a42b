pub mod calendar;
pub mod city;
pub mod filter;
pub mod table;
pub mod trip;

pub use city::City;
pub use filter::{DayFilter, FilterSelection, MonthFilter};
pub use table::TripTable;
pub use trip::{Column, TripRecord};
