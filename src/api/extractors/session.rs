//! Session extractor - Resolves the acting user from the session cookie.

use axum::{async_trait, extract::FromRequestParts, http::request::Parts};
use axum_extra::extract::cookie::CookieJar;

use crate::api::AppState;
use crate::config::SESSION_COOKIE_NAME;
use crate::errors::AppError;
use domain::User;

/// The user acting on this request, if any.
///
/// A missing cookie, an invalid or expired token and a token naming an
/// unknown user all resolve to `actor: None`. Only storage failures reject
/// the request.
#[derive(Debug, Clone, Default)]
pub struct SessionContext {
    pub actor: Option<User>,
}

impl SessionContext {
    pub fn actor(&self) -> Option<&User> {
        self.actor.as_ref()
    }

    pub fn is_anonymous(&self) -> bool {
        self.actor.is_none()
    }
}

#[async_trait]
impl FromRequestParts<AppState> for SessionContext {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        let jar = CookieJar::from_headers(&parts.headers);
        let actor = match jar.get(SESSION_COOKIE_NAME) {
            Some(cookie) => state.session_service.resolve(cookie.value()).await?,
            None => None,
        };

        Ok(Self { actor })
    }
}
