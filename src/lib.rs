//! jot - a small self-hosted note-taking web application

pub mod cli;
pub mod domain;
pub mod infra;
pub mod store;
pub mod web;

use anyhow::Result;
use clap::Parser;
use tracing::Level;

use cli::{
    Cli, Command,
    config::Config,
    handlers::{handle_add_user, handle_serve},
};

/// Main entry point for the CLI application.
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = Config::load()?;
    let db_path = config.database_path(cli.db.as_ref());

    match &cli.command {
        Command::Serve(args) => handle_serve(args, &db_path, &config),
        Command::AddUser(args) => handle_add_user(args, &db_path),
    }
}

/// Maps `-v` occurrences to a tracing level and installs the subscriber.
fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => Level::INFO,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt().with_max_level(level).init();
}
