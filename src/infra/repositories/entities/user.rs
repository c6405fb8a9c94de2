//! User database entity for SeaORM.

use sea_orm::entity::prelude::*;

use crate::errors::AppError;
use domain::User;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    /// Storage row key; never leaves the repository
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub uid: Uuid,
    pub role: String,
    pub name: String,
    pub contact: String,
    pub location: String,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Convert database model to domain entity
impl TryFrom<Model> for User {
    type Error = AppError;

    fn try_from(model: Model) -> Result<Self, Self::Error> {
        Ok(User {
            id: model.uid,
            role: model.role.parse()?,
            name: model.name,
            contact: model.contact,
            location: model.location,
            created_at: model.created_at,
        })
    }
}
