//! User repository implementation.
//!
//! Users are insert-only: there is no update or delete.

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ActiveValue::NotSet, ColumnTrait, DatabaseConnection, EntityTrait,
    PaginatorTrait, QueryFilter, Set,
};
use uuid::Uuid;

use super::entities::user::{self, ActiveModel, Entity as UserEntity};
use crate::errors::AppResult;
use domain::{NewUser, User};

#[cfg(test)]
use mockall::automock;

/// User repository trait for dependency injection.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Persist a new user under a freshly allocated id
    async fn create(&self, new_user: NewUser) -> AppResult<User>;

    /// Find user by domain id; absence is not an error
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<User>>;

    /// Count all registered users
    async fn count(&self) -> AppResult<u64>;
}

/// Concrete implementation of UserRepository
pub struct UserStore {
    db: DatabaseConnection,
}

impl UserStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserRepository for UserStore {
    async fn create(&self, new_user: NewUser) -> AppResult<User> {
        let active_model = ActiveModel {
            id: NotSet,
            uid: Set(Uuid::new_v4()),
            role: Set(new_user.role.to_string()),
            name: Set(new_user.name),
            contact: Set(new_user.contact),
            location: Set(new_user.location),
            created_at: Set(chrono::Utc::now()),
        };

        let model = active_model.insert(&self.db).await?;
        User::try_from(model)
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<User>> {
        UserEntity::find()
            .filter(user::Column::Uid.eq(id))
            .one(&self.db)
            .await?
            .map(User::try_from)
            .transpose()
    }

    async fn count(&self) -> AppResult<u64> {
        Ok(UserEntity::find().count(&self.db).await?)
    }
}
