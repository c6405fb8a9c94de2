//! Session service - Issues and resolves signed session tokens.
//!
//! A session token is an HS256 JWT naming the user. Resolution is silent:
//! any token that does not verify, or that names an unknown user, simply
//! yields no actor.

use async_trait::async_trait;
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;

use crate::config::Config;
use crate::errors::AppResult;
use crate::infra::UnitOfWork;
use domain::User;

/// JWT claims payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionClaims {
    pub sub: Uuid,
    pub role: String,
    pub exp: i64,
    pub iat: i64,
}

/// Session service trait for dependency injection.
#[async_trait]
pub trait SessionService: Send + Sync {
    /// Sign a fresh session token for `user`
    fn issue(&self, user: &User) -> AppResult<String>;

    /// Verify a token's signature and expiry and return its claims
    fn verify(&self, token: &str) -> AppResult<SessionClaims>;

    /// Map a token to the user it names, if any
    async fn resolve(&self, token: &str) -> AppResult<Option<User>>;
}

/// Concrete implementation of SessionService using Unit of Work.
pub struct SessionManager<U: UnitOfWork> {
    uow: Arc<U>,
    config: Config,
}

impl<U: UnitOfWork> SessionManager<U> {
    pub fn new(uow: Arc<U>, config: Config) -> Self {
        Self { uow, config }
    }
}

#[async_trait]
impl<U: UnitOfWork> SessionService for SessionManager<U> {
    fn issue(&self, user: &User) -> AppResult<String> {
        let now = Utc::now();
        let expires_at = now + Duration::hours(self.config.session_expiration_hours);

        let claims = SessionClaims {
            sub: user.id,
            role: user.role.to_string(),
            exp: expires_at.timestamp(),
            iat: now.timestamp(),
        };

        Ok(encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.config.session_secret_bytes()),
        )?)
    }

    fn verify(&self, token: &str) -> AppResult<SessionClaims> {
        let token_data = decode::<SessionClaims>(
            token,
            &DecodingKey::from_secret(self.config.session_secret_bytes()),
            &Validation::default(),
        )?;

        Ok(token_data.claims)
    }

    async fn resolve(&self, token: &str) -> AppResult<Option<User>> {
        let claims = match self.verify(token) {
            Ok(claims) => claims,
            Err(e) => {
                tracing::debug!(error = %e, "Ignoring invalid session token");
                return Ok(None);
            }
        };

        let user = self.uow.users().find_by_id(claims.sub).await?;
        if user.is_none() {
            tracing::debug!(user_id = %claims.sub, "Session names an unknown user");
        }
        Ok(user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::MockUserRepository;
    use crate::services::testing::{user, MockUow};
    use domain::UserRole;
    use mockall::predicate::eq;

    const SECRET: &str = "test-session-secret-at-least-32-chars";

    fn donor() -> User {
        user(UserRole::Donor, "Bakery")
    }

    fn manager(users: MockUserRepository, secret: &str) -> SessionManager<MockUow> {
        let config = Config::new("sqlite::memory:", secret).unwrap();
        SessionManager::new(MockUow::with_users(users), config)
    }

    #[test]
    fn issued_token_verifies_with_user_claims() {
        let user = donor();
        let sessions = manager(MockUserRepository::new(), SECRET);

        let token = sessions.issue(&user).unwrap();
        let claims = sessions.verify(&token).unwrap();

        assert_eq!(claims.sub, user.id);
        assert_eq!(claims.role, "donor");
        assert!(claims.exp > claims.iat);
    }

    #[test]
    fn token_signed_with_other_secret_is_rejected() {
        let user = donor();
        let forger = manager(MockUserRepository::new(), "another-secret-that-is-32-chars-long");
        let token = forger.issue(&user).unwrap();

        let sessions = manager(MockUserRepository::new(), SECRET);
        assert!(sessions.verify(&token).is_err());
    }

    #[tokio::test]
    async fn resolve_returns_named_user() {
        let user = donor();
        let expected = user.clone();
        let mut users = MockUserRepository::new();
        users
            .expect_find_by_id()
            .with(eq(user.id))
            .times(1)
            .returning(move |_| Ok(Some(expected.clone())));

        let sessions = manager(users, SECRET);
        let token = sessions.issue(&user).unwrap();

        assert_eq!(sessions.resolve(&token).await.unwrap(), Some(user));
    }

    #[tokio::test]
    async fn resolve_garbage_is_silent_and_skips_lookup() {
        let mut users = MockUserRepository::new();
        users.expect_find_by_id().never();

        let sessions = manager(users, SECRET);
        assert_eq!(sessions.resolve("not-a-token").await.unwrap(), None);
    }

    #[tokio::test]
    async fn resolve_unknown_user_is_none() {
        let mut users = MockUserRepository::new();
        users.expect_find_by_id().returning(|_| Ok(None));

        let sessions = manager(users, SECRET);
        let token = sessions.issue(&donor()).unwrap();

        assert_eq!(sessions.resolve(&token).await.unwrap(), None);
    }
}
