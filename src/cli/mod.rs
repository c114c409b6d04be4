//! CLI command definitions and handlers

pub mod config;
pub mod handlers;

use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

/// jot - a small self-hosted notes server
#[derive(Parser, Debug)]
#[command(name = "jotd", version, about, long_about = None)]
pub struct Cli {
    /// Database file (overrides config file)
    #[arg(long, global = true)]
    pub db: Option<PathBuf>,

    /// Increase verbosity (-v, -vv)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run the web server
    Serve(ServeArgs),

    /// Create a user account
    AddUser(AddUserArgs),
}

/// Arguments for the `serve` command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Address to listen on (overrides config file)
    #[arg(short, long)]
    pub bind: Option<String>,
}

/// Arguments for the `add-user` command
#[derive(Parser, Debug)]
pub struct AddUserArgs {
    /// Username for the new account
    pub username: String,

    /// Password for the new account (read from stdin when omitted)
    #[arg(long)]
    pub password: Option<String>,
}
