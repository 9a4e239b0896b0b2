//! Command-line subcommands and their handlers
//!
//! The clap argument structs here are thin wrappers around the core
//! parameter types; each converts into its core counterpart with `From`, so
//! clap attributes never leak into `trekker-core`:
//!
//! ```text
//! User Input → CLI Args (clap) → Core Params → Screen controller → Store
//! ```
//!
//! Handlers drive the same screen controllers a UI would and print their
//! results as markdown through the [`TerminalRenderer`].

use anyhow::{anyhow, bail, Result};
use clap::{Args, Subcommand};
use log::debug;
use trekker_core::{
    display::{CreateResult, OperationStatus, TripOverview},
    params::{AddLocation, CreateTrip, Id},
    require_user,
    screens::{detail::NOT_FOUND, DetailState},
    Alert, Session, TripCreation, TripDb, TripDetail, TripError, TripList,
};

use crate::renderer::TerminalRenderer;

/// Trip subcommands
#[derive(Subcommand)]
pub enum TripCommands {
    /// Create a new trip
    #[command(alias = "c")]
    Create(CreateTripArgs),
    /// List your trips
    #[command(aliases = ["l", "ls"])]
    List,
    /// Show a trip and its waypoints
    #[command(alias = "s")]
    Show(ShowTripArgs),
}

/// Waypoint subcommands
#[derive(Subcommand)]
pub enum LocationCommands {
    /// Pin a waypoint on a trip
    #[command(alias = "a")]
    Add(AddLocationArgs),
}

/// Create a new trip
#[derive(Args)]
pub struct CreateTripArgs {
    /// Name of the trip
    pub name: String,
    /// First day, as DD/MM/YYYY
    #[arg(help = "First day of the trip, formatted DD/MM/YYYY")]
    pub start_date: String,
    /// Last day, as DD/MM/YYYY
    #[arg(help = "Last day of the trip, formatted DD/MM/YYYY")]
    pub end_date: String,
}

impl From<CreateTripArgs> for CreateTrip {
    fn from(val: CreateTripArgs) -> Self {
        CreateTrip {
            name: val.name,
            start_date: val.start_date,
            end_date: val.end_date,
        }
    }
}

/// Show a trip
#[derive(Args)]
pub struct ShowTripArgs {
    /// ID of the trip to display
    pub id: u64,
}

impl From<ShowTripArgs> for Id {
    fn from(val: ShowTripArgs) -> Self {
        Id { id: val.id }
    }
}

/// Pin a waypoint on a trip
#[derive(Args)]
pub struct AddLocationArgs {
    /// ID of the trip
    pub trip_id: u64,
    /// Latitude in degrees
    #[arg(allow_negative_numbers = true)]
    pub latitude: f64,
    /// Longitude in degrees
    #[arg(allow_negative_numbers = true)]
    pub longitude: f64,
    /// Name of the waypoint
    pub name: String,
    /// Notes about the waypoint
    #[arg(short, long)]
    pub description: Option<String>,
}

impl From<AddLocationArgs> for AddLocation {
    fn from(val: AddLocationArgs) -> Self {
        AddLocation {
            trip_id: val.trip_id,
            latitude: val.latitude,
            longitude: val.longitude,
            name: val.name,
            description: val.description,
        }
    }
}

/// Runs commands against one store on behalf of the signed-in user.
pub struct Cli {
    store: TripDb,
    session: Session,
    renderer: TerminalRenderer,
}

impl Cli {
    pub fn new(store: TripDb, session: Session, renderer: TerminalRenderer) -> Self {
        Self {
            store,
            session,
            renderer,
        }
    }

    pub async fn handle_trip_command(&self, command: TripCommands) -> Result<()> {
        match command {
            TripCommands::Create(args) => self.create_trip(&args.into()).await,
            TripCommands::List => self.list_trips().await,
            TripCommands::Show(args) => self.show_trip(&args.into()).await,
        }
    }

    pub async fn handle_location_command(&self, command: LocationCommands) -> Result<()> {
        match command {
            LocationCommands::Add(args) => self.add_location(&args.into()).await,
        }
    }

    async fn create_trip(&self, params: &CreateTrip) -> Result<()> {
        debug!("create_trip: {params:?}");

        let mut form = TripCreation::new().with_fields(
            params.name.as_str(),
            params.start_date.as_str(),
            params.end_date.as_str(),
        );
        let trip = form.submit(&self.session, &self.store).await?;

        self.renderer.render(&CreateResult::new(trip).to_string())?;
        self.render_alert(form.alert())
    }

    pub async fn list_trips(&self) -> Result<()> {
        let mut list = TripList::new();
        list.load(&self.session, &self.store).await?;

        self.renderer
            .render(&format!("# Trips\n\n{}", list.cards()))
    }

    async fn show_trip(&self, params: &Id) -> Result<()> {
        debug!("show_trip: {params:?}");
        require_user(&self.session)?;

        let mut detail = TripDetail::new();
        detail.load(&self.store, params.id).await?;

        match detail.state() {
            DetailState::Loaded { trip, locations } => self
                .renderer
                .render(&TripOverview { trip, locations }.to_string()),
            _ => bail!(NOT_FOUND),
        }
    }

    async fn add_location(&self, params: &AddLocation) -> Result<()> {
        debug!("add_location: {params:?}");
        require_user(&self.session)?;
        params.coordinate().validate()?;

        let mut detail = TripDetail::new();
        detail.load(&self.store, params.trip_id).await?;
        if !detail.press_map(params.coordinate()) {
            bail!(NOT_FOUND);
        }
        detail.set_name(params.name.as_str());
        detail.set_description(params.description());

        let location = detail.confirm(&self.store).await?.ok_or_else(|| {
            anyhow!(TripError::invalid_input("name").with_reason("must not be empty"))
        })?;

        self.renderer
            .render(&CreateResult::new(location).to_string())?;
        self.render_alert(detail.alert())
    }

    fn render_alert(&self, alert: Option<&Alert>) -> Result<()> {
        match alert {
            Some(alert) => self
                .renderer
                .render(&OperationStatus::from(alert).to_string()),
            None => Ok(()),
        }
    }
}
