//! Identity service - Registration and user lookup.
//!
//! Users are created once and never updated or deleted. There is no
//! duplicate detection: registering the same name twice yields two users.

use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

use crate::errors::AppResult;
use crate::infra::UnitOfWork;
use domain::{NewUser, User};

/// Identity service trait for dependency injection.
#[async_trait]
pub trait IdentityService: Send + Sync {
    /// Register a new user under a fresh id
    async fn register(&self, new_user: NewUser) -> AppResult<User>;

    /// Look a user up by id; absence is not an error
    async fn find_user(&self, id: Uuid) -> AppResult<Option<User>>;
}

/// Concrete implementation of IdentityService using Unit of Work.
pub struct IdentityManager<U: UnitOfWork> {
    uow: Arc<U>,
}

impl<U: UnitOfWork> IdentityManager<U> {
    pub fn new(uow: Arc<U>) -> Self {
        Self { uow }
    }
}

#[async_trait]
impl<U: UnitOfWork> IdentityService for IdentityManager<U> {
    async fn register(&self, new_user: NewUser) -> AppResult<User> {
        let user = self.uow.users().create(new_user).await?;
        tracing::info!(user_id = %user.id, role = %user.role, "Registered user");
        Ok(user)
    }

    async fn find_user(&self, id: Uuid) -> AppResult<Option<User>> {
        self.uow.users().find_by_id(id).await
    }
}
