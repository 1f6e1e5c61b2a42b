//! Record store: one city's trip file as an in-memory table.

pub mod loader;

pub use loader::{load, load_from_path, load_from_reader};
