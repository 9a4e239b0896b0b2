use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::cli::{LocationCommands, TripCommands};

/// Command-line trip planner
///
/// Trekker keeps your trips and the waypoints you pin along the way in a
/// local SQLite database. Run without a subcommand to list your trips, or
/// start an MCP (Model Context Protocol) server so an AI assistant can plan
/// with you.
#[derive(Parser)]
#[command(version, about, name = "trekker")]
pub struct Args {
    /// Path to the SQLite database file. Defaults to
    /// $XDG_DATA_HOME/trekker/trekker.db
    #[arg(long, global = true)]
    pub database_file: Option<PathBuf>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    /// ID of the signed-in user
    #[arg(long, global = true, env = "TREKKER_USER")]
    pub user: Option<u64>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands for the Trekker CLI
#[derive(Subcommand)]
pub enum Commands {
    /// Create, list and show trips
    #[command(alias = "t")]
    Trip {
        #[command(subcommand)]
        command: TripCommands,
    },
    /// Pin waypoints on a trip
    #[command(alias = "loc")]
    Location {
        #[command(subcommand)]
        command: LocationCommands,
    },
    /// Start the MCP server
    Serve,
}
