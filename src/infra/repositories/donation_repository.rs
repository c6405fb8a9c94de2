//! Donation repository implementation.
//!
//! Every list query returns most recent first. `created_at` ties are broken
//! by insertion order so the ordering is stable.

use async_trait::async_trait;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue::NotSet, ColumnTrait, DatabaseConnection,
    EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, Select, Set,
};
use uuid::Uuid;

use super::entities::donation::{self as donations, ActiveModel, Entity as DonationEntity};
use crate::errors::{AppResult, OptionExt};
use domain::{Donation, DonationStatus};

#[cfg(test)]
use mockall::automock;

/// Donation repository trait for dependency injection.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait DonationRepository: Send + Sync {
    /// Persist a new donation
    async fn create(&self, donation: Donation) -> AppResult<Donation>;

    /// Find donation by domain id; absence is not an error
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Donation>>;

    /// Donations posted by a donor
    async fn list_by_donor(&self, donor_id: Uuid) -> AppResult<Vec<Donation>>;

    /// Donations currently in `status`
    async fn list_by_status(&self, status: DonationStatus) -> AppResult<Vec<Donation>>;

    /// Donations accepted by an NGO, whatever their current status
    async fn list_by_accepted_by(&self, ngo_id: Uuid) -> AppResult<Vec<Donation>>;

    /// Count all donations
    async fn count_all(&self) -> AppResult<u64>;

    /// Count donations currently in `status`
    async fn count_by_status(&self, status: DonationStatus) -> AppResult<u64>;

    /// Persist the mutable fields of an existing donation
    async fn update(&self, donation: Donation) -> AppResult<Donation>;

    /// Persist the mutable fields only if the stored status is still `expected`.
    ///
    /// Returns `false` when no row matched, i.e. another writer got there first
    /// or the donation does not exist.
    async fn update_if_status(&self, donation: Donation, expected: DonationStatus)
        -> AppResult<bool>;
}

/// Concrete implementation of DonationRepository
pub struct DonationStore {
    db: DatabaseConnection,
}

impl DonationStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    async fn list(&self, query: Select<DonationEntity>) -> AppResult<Vec<Donation>> {
        query
            .order_by_desc(donations::Column::CreatedAt)
            .order_by_desc(donations::Column::Id)
            .all(&self.db)
            .await?
            .into_iter()
            .map(Donation::try_from)
            .collect()
    }
}

#[async_trait]
impl DonationRepository for DonationStore {
    async fn create(&self, donation: Donation) -> AppResult<Donation> {
        let active_model = ActiveModel {
            id: NotSet,
            donation_id: Set(donation.id),
            donor_id: Set(donation.donor_id),
            donor_name: Set(donation.donor_name),
            donor_contact: Set(donation.donor_contact),
            food_details: Set(donation.food_details),
            pickup_address: Set(donation.pickup_address),
            pickup_time: Set(donation.pickup_time),
            status: Set(donation.status.to_string()),
            accepted_by: Set(donation.accepted_by),
            ngo_name: Set(donation.ngo_name),
            created_at: Set(donation.created_at),
        };

        let model = active_model.insert(&self.db).await?;
        Donation::try_from(model)
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Donation>> {
        DonationEntity::find()
            .filter(donations::Column::DonationId.eq(id))
            .one(&self.db)
            .await?
            .map(Donation::try_from)
            .transpose()
    }

    async fn list_by_donor(&self, donor_id: Uuid) -> AppResult<Vec<Donation>> {
        self.list(DonationEntity::find().filter(donations::Column::DonorId.eq(donor_id)))
            .await
    }

    async fn list_by_status(&self, status: DonationStatus) -> AppResult<Vec<Donation>> {
        self.list(DonationEntity::find().filter(donations::Column::Status.eq(status.as_str())))
            .await
    }

    async fn list_by_accepted_by(&self, ngo_id: Uuid) -> AppResult<Vec<Donation>> {
        self.list(DonationEntity::find().filter(donations::Column::AcceptedBy.eq(ngo_id)))
            .await
    }

    async fn count_all(&self) -> AppResult<u64> {
        Ok(DonationEntity::find().count(&self.db).await?)
    }

    async fn count_by_status(&self, status: DonationStatus) -> AppResult<u64> {
        Ok(DonationEntity::find()
            .filter(donations::Column::Status.eq(status.as_str()))
            .count(&self.db)
            .await?)
    }

    async fn update(&self, donation: Donation) -> AppResult<Donation> {
        let existing = DonationEntity::find()
            .filter(donations::Column::DonationId.eq(donation.id))
            .one(&self.db)
            .await?
            .ok_or_not_found()?;

        let mut active: ActiveModel = existing.into();
        active.status = Set(donation.status.to_string());
        active.accepted_by = Set(donation.accepted_by);
        active.ngo_name = Set(donation.ngo_name);

        let model = active.update(&self.db).await?;
        Donation::try_from(model)
    }

    async fn update_if_status(
        &self,
        donation: Donation,
        expected: DonationStatus,
    ) -> AppResult<bool> {
        let result = DonationEntity::update_many()
            .col_expr(donations::Column::Status, Expr::value(donation.status.as_str()))
            .col_expr(donations::Column::AcceptedBy, Expr::value(donation.accepted_by))
            .col_expr(donations::Column::NgoName, Expr::value(donation.ngo_name))
            .filter(donations::Column::DonationId.eq(donation.id))
            .filter(donations::Column::Status.eq(expected.as_str()))
            .exec(&self.db)
            .await?;

        Ok(result.rows_affected == 1)
    }
}
