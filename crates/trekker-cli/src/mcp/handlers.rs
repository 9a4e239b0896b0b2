//! MCP tool handlers implementation

use log::debug;
use rmcp::{
    model::{CallToolResult, Content},
    ErrorData,
};
use schemars::JsonSchema;
use serde::Deserialize;
use trekker_core::{
    display::{CreateResult, OperationStatus, TripOverview},
    params as core,
    screens::{detail::NOT_FOUND, DetailState},
    Session, TripCreation, TripDb, TripDetail, TripList,
};

use super::errors::{screen_error, signed_in_user};

/// Generic MCP wrapper for core parameter types with serde integration
///
/// Provides JSON deserialization and schema generation for the core
/// parameter structs without adding MCP concerns to `trekker-core`.
#[derive(Debug, Deserialize)]
#[serde(transparent)]
pub struct McpParams<T>(T)
where
    T: JsonSchema;

impl<T> JsonSchema for McpParams<T>
where
    T: JsonSchema,
{
    fn schema_name() -> std::borrow::Cow<'static, str> {
        T::schema_name()
    }

    fn json_schema(g: &mut schemars::SchemaGenerator) -> schemars::Schema {
        T::json_schema(g)
    }
}

impl<T> AsRef<T> for McpParams<T>
where
    T: JsonSchema,
{
    fn as_ref(&self) -> &T {
        &self.0
    }
}

pub type Id = McpParams<core::Id>;
pub type CreateTrip = McpParams<core::CreateTrip>;
pub type AddLocation = McpParams<core::AddLocation>;

pub type McpResult = Result<CallToolResult, ErrorData>;

fn text(body: impl ToString) -> McpResult {
    Ok(CallToolResult::success(vec![Content::text(body.to_string())]))
}

/// Handler implementations for the MCP server
pub struct McpHandlers<'a> {
    store: &'a TripDb,
    session: &'a Session,
}

impl<'a> McpHandlers<'a> {
    pub fn new(store: &'a TripDb, session: &'a Session) -> Self {
        Self { store, session }
    }

    pub async fn create_trip(&self, params: CreateTrip) -> McpResult {
        debug!("create_trip: {params:?}");
        let params = params.as_ref();

        let mut form = TripCreation::new().with_fields(
            params.name.as_str(),
            params.start_date.as_str(),
            params.end_date.as_str(),
        );
        let trip = form
            .submit(self.session, self.store)
            .await
            .map_err(screen_error)?;

        let mut body = CreateResult::new(trip).to_string();
        if let Some(alert) = form.alert() {
            body.push('\n');
            body.push_str(&OperationStatus::from(alert).to_string());
        }
        text(body)
    }

    pub async fn list_trips(&self) -> McpResult {
        debug!("list_trips");

        let mut list = TripList::new();
        list.load(self.session, self.store)
            .await
            .map_err(screen_error)?;

        text(format!("# Trips\n\n{}", list.cards()))
    }

    pub async fn show_trip(&self, params: Id) -> McpResult {
        debug!("show_trip: {params:?}");
        signed_in_user(self.session)?;
        let id = params.as_ref().id;

        let mut detail = TripDetail::new();
        detail.load(self.store, id).await.map_err(screen_error)?;

        match detail.state() {
            DetailState::Loaded { trip, locations } => text(TripOverview { trip, locations }),
            _ => Err(ErrorData::invalid_params(
                format!("{NOT_FOUND} (ID {id})"),
                None,
            )),
        }
    }

    pub async fn add_location(&self, params: AddLocation) -> McpResult {
        debug!("add_location: {params:?}");
        signed_in_user(self.session)?;
        let params = params.as_ref();

        params
            .coordinate()
            .validate()
            .map_err(|e| ErrorData::invalid_params(e.to_string(), None))?;
        if params.name.is_empty() {
            return Err(ErrorData::invalid_params(
                "Waypoint name must not be empty",
                None,
            ));
        }

        let mut detail = TripDetail::new();
        detail
            .load(self.store, params.trip_id)
            .await
            .map_err(screen_error)?;
        if !detail.press_map(params.coordinate()) {
            return Err(ErrorData::invalid_params(
                format!("{NOT_FOUND} (ID {})", params.trip_id),
                None,
            ));
        }
        detail.set_name(params.name.as_str());
        detail.set_description(params.description());

        let location = detail
            .confirm(self.store)
            .await
            .map_err(screen_error)?
            .ok_or_else(|| ErrorData::internal_error("Waypoint was not saved", None))?;

        text(CreateResult::new(location))
    }
}
