//! Donation lifecycle handlers.
//!
//! Every action answers with a redirect to the dashboard whether it was
//! applied or rejected. Only storage failures produce an error response.

use axum::{
    extract::{Path, State},
    response::Redirect,
    routing::{get, post},
    Form, Router,
};
use uuid::Uuid;

use crate::api::extractors::SessionContext;
use crate::api::AppState;
use crate::config::ROUTE_DASHBOARD;
use crate::errors::AppResult;
use domain::{Action, DonationDetails};

/// Create donation routes
pub fn donation_routes() -> Router<AppState> {
    Router::new()
        .route("/post_donation", post(post_donation))
        .route("/accept_donation/:donation_id", get(accept_donation))
        .route("/complete_donation/:donation_id", get(complete_donation))
}

/// A malformed id cannot name a stored donation.
fn parse_donation_id(action: Action, raw: &str) -> Option<Uuid> {
    let parsed = Uuid::parse_str(raw).ok();
    if parsed.is_none() {
        tracing::info!(%action, donation_id = raw, "Donation action rejected: malformed id");
    }
    parsed
}

/// Post a new donation
pub async fn post_donation(
    State(state): State<AppState>,
    session: SessionContext,
    Form(details): Form<DonationDetails>,
) -> AppResult<Redirect> {
    state.donation_service.post(session.actor(), details).await?;
    Ok(Redirect::to(ROUTE_DASHBOARD))
}

/// Accept a pending donation
pub async fn accept_donation(
    State(state): State<AppState>,
    session: SessionContext,
    Path(donation_id): Path<String>,
) -> AppResult<Redirect> {
    if let Some(id) = parse_donation_id(Action::Accept, &donation_id) {
        state.donation_service.accept(session.actor(), id).await?;
    }
    Ok(Redirect::to(ROUTE_DASHBOARD))
}

/// Complete an accepted donation
pub async fn complete_donation(
    State(state): State<AppState>,
    session: SessionContext,
    Path(donation_id): Path<String>,
) -> AppResult<Redirect> {
    if let Some(id) = parse_donation_id(Action::Complete, &donation_id) {
        state.donation_service.complete(session.actor(), id).await?;
    }
    Ok(Redirect::to(ROUTE_DASHBOARD))
}
