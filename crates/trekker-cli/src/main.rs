//! Trekker CLI Application
//!
//! Command-line interface and MCP server for the trekker trip planner.

mod args;
mod cli;
mod mcp;
mod renderer;

use anyhow::{Context, Result};
use args::{Args, Commands};
use clap::Parser;
use cli::Cli;
use log::info;
use mcp::{run_stdio_server, TrekkerMcpServer};
use renderer::TerminalRenderer;
use trekker_core::{models::User, Session, TripDbBuilder};
use Commands::*;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args {
        database_file,
        no_color,
        user,
        command,
    } = Args::parse();

    let store = TripDbBuilder::new()
        .with_database_path(database_file)
        .build()
        .await
        .context("Failed to initialize trip database")?;

    let session = match user {
        Some(id) => Session::signed_in(User::new(id)),
        None => Session::new(),
    };
    let renderer = TerminalRenderer::new(!no_color);

    info!("Trekker started");

    match command {
        Some(Trip { command }) => {
            Cli::new(store, session, renderer)
                .handle_trip_command(command)
                .await
        }
        Some(Location { command }) => {
            Cli::new(store, session, renderer)
                .handle_location_command(command)
                .await
        }
        Some(Serve) => {
            info!("Starting Trekker MCP server");
            run_stdio_server(TrekkerMcpServer::new(store, session))
                .await
                .context("MCP server failed")
        }
        None => Cli::new(store, session, renderer).list_trips().await,
    }
}
