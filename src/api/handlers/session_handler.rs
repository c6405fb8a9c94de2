//! Landing, registration and logout handlers.

use axum::{
    extract::State,
    response::{IntoResponse, Json, Redirect, Response},
    routing::{get, post},
    Form, Router,
};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use serde::{Deserialize, Serialize};

use crate::api::extractors::SessionContext;
use crate::api::AppState;
use crate::config::{ROUTE_DASHBOARD, ROUTE_INDEX, SESSION_COOKIE_NAME};
use crate::errors::{AppError, AppResult};
use domain::{NewUser, UserRole, VALID_ROLES};

/// Registration form
#[derive(Debug, Deserialize)]
pub struct RegisterForm {
    pub role: String,
    pub name: String,
    pub contact: String,
    pub location: String,
}

impl RegisterForm {
    fn into_new_user(self) -> AppResult<NewUser> {
        let role: UserRole = self.role.parse().map_err(|_| {
            AppError::validation(format!("role must be one of: {}", VALID_ROLES.join(", ")))
        })?;

        Ok(NewUser {
            role,
            name: self.name,
            contact: self.contact,
            location: self.location,
        })
    }
}

/// Landing view for visitors without a session
#[derive(Debug, Serialize)]
pub struct Landing {
    pub message: &'static str,
    pub roles: &'static [&'static str],
}

/// Create landing and session routes
pub fn session_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(index))
        .route("/register", post(register))
        .route("/logout", get(logout))
}

/// Landing page, or straight to the dashboard with an active session
pub async fn index(session: SessionContext) -> Response {
    if session.is_anonymous() {
        Json(Landing {
            message: "Welcome to NourishNet. Register as a donor or an NGO to get started.",
            roles: VALID_ROLES,
        })
        .into_response()
    } else {
        Redirect::to(ROUTE_DASHBOARD).into_response()
    }
}

/// Register a new user and start their session
pub async fn register(
    State(state): State<AppState>,
    jar: CookieJar,
    Form(form): Form<RegisterForm>,
) -> AppResult<(CookieJar, Redirect)> {
    let user = state.identity_service.register(form.into_new_user()?).await?;
    let token = state.session_service.issue(&user)?;

    let cookie = Cookie::build((SESSION_COOKIE_NAME, token))
        .path(ROUTE_INDEX)
        .http_only(true)
        .same_site(SameSite::Lax);

    Ok((jar.add(cookie), Redirect::to(ROUTE_DASHBOARD)))
}

/// End the session
pub async fn logout(jar: CookieJar) -> (CookieJar, Redirect) {
    let jar = jar.remove(Cookie::build(SESSION_COOKIE_NAME).path(ROUTE_INDEX));
    (jar, Redirect::to(ROUTE_INDEX))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(role: &str) -> RegisterForm {
        RegisterForm {
            role: role.to_string(),
            name: "Bakery".to_string(),
            contact: "555-0100".to_string(),
            location: "Main St".to_string(),
        }
    }

    #[test]
    fn known_roles_parse() {
        assert_eq!(form("donor").into_new_user().unwrap().role, UserRole::Donor);
        assert_eq!(form("ngo").into_new_user().unwrap().role, UserRole::Ngo);
    }

    #[test]
    fn unknown_role_is_a_validation_error() {
        let err = form("admin").into_new_user().unwrap_err();
        assert!(matches!(err, AppError::Validation(ref msg) if msg.contains("donor, ngo")));
    }
}
