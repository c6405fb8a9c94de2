//! Dashboard handler.

use axum::{
    extract::State,
    response::{IntoResponse, Json, Redirect, Response},
    routing::get,
    Router,
};

use crate::api::extractors::SessionContext;
use crate::api::AppState;
use crate::config::ROUTE_INDEX;
use crate::errors::AppResult;

/// Create dashboard routes
pub fn dashboard_routes() -> Router<AppState> {
    Router::new().route("/dashboard", get(dashboard))
}

/// Role-routed dashboard view; visitors without a session go back to the landing page
pub async fn dashboard(State(state): State<AppState>, session: SessionContext) -> AppResult<Response> {
    let Some(user) = session.actor() else {
        return Ok(Redirect::to(ROUTE_INDEX).into_response());
    };

    let view = state.dashboard_service.for_user(user).await?;
    Ok(Json(view).into_response())
}
