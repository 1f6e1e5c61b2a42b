//! rbikeshare library root.
//! Exposes the CLI parser, the high-level run() function, and the
//! load / filter / statistics modules.

pub mod cli;
pub mod config;
pub mod core;
pub mod data;
pub mod errors;
pub mod models;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::Cli;
use config::Config;
use crate::core::session::Session;
use errors::AppResult;
use std::io::{self, IsTerminal};

fn init_logging(cfg: &Config) {
    let mut builder = env_logger::Builder::new();
    builder.parse_filters(&cfg.log_level).format_timestamp(None);
    if let Err(e) = builder.try_init() {
        log::debug!("logger already initialized: {}", e);
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    // 1️⃣ parse CLI
    let cli = Cli::parse();

    // 2️⃣ load config once
    let mut cfg = Config::load()?;

    // 3️⃣ command-line override of the data directory
    if let Some(dir) = &cli.data_dir {
        cfg.data_dir = dir.clone();
    }

    // no ANSI codes when output is piped
    cfg.color = cfg.color && io::stdout().is_terminal();

    init_logging(&cfg);
    log::debug!("configuration: {:?}", cfg);

    // 4️⃣ interactive session on the terminal
    let stdin = io::stdin();
    let mut session = Session::new(&cfg, stdin.lock(), io::stdout());
    session.run()
}
