use clap::Parser;

/// Command-line interface definition for rbikeshare.
/// Everything else is asked interactively.
#[derive(Parser, Debug)]
#[command(
    name = "rbikeshare",
    version = env!("CARGO_PKG_VERSION"),
    about = "Explore US bikeshare data: pick a city and a month or weekday, get travel statistics",
    long_about = None
)]
pub struct Cli {
    /// Override the directory holding chicago.csv, new_york_city.csv and washington.csv
    #[arg(long = "data-dir", value_name = "DIR")]
    pub data_dir: Option<String>,
}
