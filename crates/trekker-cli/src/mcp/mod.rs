//! MCP server implementation for Trekker
//!
//! Exposes trip planning to AI assistants over the Model Context Protocol.
//! Every tool acts on behalf of the user the server was started with
//! (`--user`), through the same screen controllers as the command line.

use anyhow::Result;
use log::{debug, error, info};
use rmcp::{
    handler::server::{router::tool::ToolRouter, wrapper::Parameters},
    model::{Implementation, ProtocolVersion, ServerCapabilities, ServerInfo},
    tool, tool_handler, tool_router, ServerHandler,
};
use tokio::signal::unix::{signal, SignalKind};
use trekker_core::{Session, TripDb};

pub mod errors;
pub mod handlers;

pub use handlers::{AddLocation, CreateTrip, Id, McpResult};

/// MCP server for Trekker
#[derive(Clone)]
pub struct TrekkerMcpServer {
    store: TripDb,
    session: Session,
    tool_router: ToolRouter<Self>,
}

#[tool_router]
impl TrekkerMcpServer {
    pub fn new(store: TripDb, session: Session) -> Self {
        Self {
            store,
            session,
            tool_router: Self::tool_router(),
        }
    }

    fn handlers(&self) -> handlers::McpHandlers<'_> {
        handlers::McpHandlers::new(&self.store, &self.session)
    }

    #[tool(
        name = "create_trip",
        description = "Create a trip for the signed-in user. Provide a name and the first and last day formatted DD/MM/YYYY (for example 15/06/2024). The end date must not be before the start date. Returns the new trip ID for adding waypoints."
    )]
    async fn create_trip(&self, Parameters(params): Parameters<CreateTrip>) -> McpResult {
        self.handlers().create_trip(params).await
    }

    #[tool(
        name = "list_trips",
        description = "List the signed-in user's trips in creation order, with their dates, duration in days and number of planned activities."
    )]
    async fn list_trips(&self) -> McpResult {
        self.handlers().list_trips().await
    }

    #[tool(
        name = "show_trip",
        description = "Show one trip with all of its waypoints: names, coordinates and descriptions. Use the trip ID from list_trips or create_trip."
    )]
    async fn show_trip(&self, Parameters(params): Parameters<Id>) -> McpResult {
        self.handlers().show_trip(params).await
    }

    #[tool(
        name = "add_location",
        description = "Pin a waypoint on an existing trip. Requires trip_id, latitude (-90 to 90), longitude (-180 to 180) and a non-empty name; description is optional. Waypoints are kept in the order they were added."
    )]
    async fn add_location(&self, Parameters(params): Parameters<AddLocation>) -> McpResult {
        self.handlers().add_location(params).await
    }
}

#[tool_handler(router = self.tool_router)]
impl ServerHandler for TrekkerMcpServer {
    fn get_info(&self) -> ServerInfo {
        let mut server_info = Implementation::from_build_env();
        server_info.name = "trekker".to_string();
        server_info.version = env!("CARGO_PKG_VERSION").to_string();

        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info,
            instructions: Some(
                r#"Trekker keeps a traveller's trips and the waypoints pinned along the way.

## Core Concepts
- **Trips**: a named date range owned by the signed-in user
- **Waypoints**: named points (latitude/longitude) attached to one trip

## Workflow
1. Create a trip with `create_trip` (dates as DD/MM/YYYY)
2. Review trips with `list_trips`
3. Pin places with `add_location`
4. Review a trip and its waypoints with `show_trip`

Messages meant for the traveller are in French."#
                    .to_string(),
            ),
        }
    }
}

/// Run the MCP server with stdio transport
pub async fn run_stdio_server(server: TrekkerMcpServer) -> Result<()> {
    use rmcp::{transport::stdio, ServiceExt};

    info!("Starting Trekker MCP server on stdio");
    debug!(
        "Server created with {} tools",
        server.tool_router.list_all().len()
    );

    let service = server.serve(stdio()).await.inspect_err(|e| {
        error!("serving error: {e:?}");
    })?;

    let mut sigint = signal(SignalKind::interrupt())?;
    let mut sigterm = signal(SignalKind::terminate())?;

    tokio::select! {
        result = service.waiting() => {
            match result {
                Ok(_) => info!("MCP server stopped normally"),
                Err(e) => error!("MCP server error: {e:?}"),
            }
        }
        _ = sigint.recv() => {
            info!("Received SIGINT, shutting down gracefully...");
        }
        _ = sigterm.recv() => {
            info!("Received SIGTERM, shutting down gracefully...");
        }
    }

    info!("MCP server shutdown complete");
    Ok(())
}
