//! Error handling utilities for MCP server

use rmcp::ErrorData;
use trekker_core::{models::User, require_user, ScreenError, Session, TripError};

/// Helper to convert store errors to MCP errors
pub fn to_mcp_error(message: &str, error: &TripError) -> ErrorData {
    ErrorData::internal_error(format!("{message}: {error}"), None)
}

/// The server's user, or an invalid-request error when it was started
/// without `--user`.
pub fn signed_in_user(session: &Session) -> Result<User, ErrorData> {
    require_user(session).map_err(|e| ErrorData::invalid_request(e.to_string(), None))
}

/// Rejected input becomes an invalid-params error carrying the screen's
/// message; everything else is internal.
pub fn screen_error(error: ScreenError) -> ErrorData {
    match error {
        ScreenError::Validation(message) => ErrorData::invalid_params(message, None),
        ScreenError::Persistence {
            message,
            source: Some(source),
        } => to_mcp_error(&message, &source),
        other => ErrorData::internal_error(other.to_string(), None),
    }
}
