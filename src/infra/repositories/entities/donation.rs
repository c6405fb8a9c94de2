//! Donation database entity for SeaORM.

use sea_orm::entity::prelude::*;

use crate::errors::AppError;
use domain::Donation;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "donations")]
pub struct Model {
    /// Storage row key; never leaves the repository
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub donation_id: Uuid,
    pub donor_id: Uuid,
    pub donor_name: String,
    pub donor_contact: String,
    #[sea_orm(column_type = "Text")]
    pub food_details: String,
    pub pickup_address: String,
    pub pickup_time: String,
    pub status: String,
    pub accepted_by: Option<Uuid>,
    pub ngo_name: Option<String>,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Convert database model to domain entity
impl TryFrom<Model> for Donation {
    type Error = AppError;

    fn try_from(model: Model) -> Result<Self, Self::Error> {
        Ok(Donation {
            id: model.donation_id,
            donor_id: model.donor_id,
            donor_name: model.donor_name,
            donor_contact: model.donor_contact,
            food_details: model.food_details,
            pickup_address: model.pickup_address,
            pickup_time: model.pickup_time,
            status: model.status.parse()?,
            accepted_by: model.accepted_by,
            ngo_name: model.ngo_name,
            created_at: model.created_at,
        })
    }
}
