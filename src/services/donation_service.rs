//! Donation service - Drives the donation lifecycle against storage.
//!
//! Decisions are made by [`domain::lifecycle`]; this service supplies the
//! inputs (actor, current record, fresh id, clock) and persists applied
//! transitions. Accept and Complete write through a conditional update, so
//! two actors racing on the same donation cannot both succeed.

use async_trait::async_trait;
use chrono::Utc;
use std::sync::Arc;
use uuid::Uuid;

use crate::errors::AppResult;
use crate::infra::UnitOfWork;
use domain::{lifecycle, Action, Donation, DonationDetails, DonationStatus, Rejection, Transition, User};

/// Donation lifecycle service trait for dependency injection.
#[async_trait]
pub trait DonationService: Send + Sync {
    /// Post a new pending donation on behalf of a donor
    async fn post(
        &self,
        actor: Option<&User>,
        details: DonationDetails,
    ) -> AppResult<Transition<Donation>>;

    /// Claim a pending donation for an NGO
    async fn accept(&self, actor: Option<&User>, donation_id: Uuid)
        -> AppResult<Transition<Donation>>;

    /// Mark an accepted donation completed by the NGO that claimed it
    async fn complete(
        &self,
        actor: Option<&User>,
        donation_id: Uuid,
    ) -> AppResult<Transition<Donation>>;
}

/// Concrete implementation of DonationService using Unit of Work.
pub struct DonationManager<U: UnitOfWork> {
    uow: Arc<U>,
}

impl<U: UnitOfWork> DonationManager<U> {
    pub fn new(uow: Arc<U>) -> Self {
        Self { uow }
    }

    /// Persist `next` only if the stored donation is still in `expected`.
    async fn swap(
        &self,
        next: Donation,
        expected: DonationStatus,
    ) -> AppResult<Transition<Donation>> {
        if self
            .uow
            .donations()
            .update_if_status(next.clone(), expected)
            .await?
        {
            Ok(Transition::Applied(next))
        } else {
            Ok(Transition::Rejected(Rejection::Conflict))
        }
    }
}

fn log_outcome(
    action: Action,
    actor: Option<&User>,
    donation_id: Option<Uuid>,
    outcome: &Transition<Donation>,
) {
    let actor_id = actor.map(|user| user.id.to_string());
    let donation_id = donation_id.map(|id| id.to_string());
    match outcome {
        Transition::Applied(donation) => tracing::info!(
            %action,
            donation_id = %donation.id,
            actor_id = actor_id.as_deref(),
            status = %donation.status,
            "Donation action applied"
        ),
        Transition::Rejected(reason) => tracing::info!(
            %action,
            donation_id = donation_id.as_deref(),
            actor_id = actor_id.as_deref(),
            %reason,
            "Donation action rejected"
        ),
    }
}

#[async_trait]
impl<U: UnitOfWork> DonationService for DonationManager<U> {
    async fn post(
        &self,
        actor: Option<&User>,
        details: DonationDetails,
    ) -> AppResult<Transition<Donation>> {
        let outcome = match lifecycle::post(actor, details, Uuid::new_v4(), Utc::now()) {
            Transition::Applied(donation) => {
                Transition::Applied(self.uow.donations().create(donation).await?)
            }
            rejected => rejected,
        };

        log_outcome(Action::Post, actor, None, &outcome);
        Ok(outcome)
    }

    async fn accept(
        &self,
        actor: Option<&User>,
        donation_id: Uuid,
    ) -> AppResult<Transition<Donation>> {
        let current = self.uow.donations().find_by_id(donation_id).await?;
        let outcome = match lifecycle::accept(actor, current.as_ref()) {
            Transition::Applied(next) => self.swap(next, DonationStatus::Pending).await?,
            rejected => rejected,
        };

        log_outcome(Action::Accept, actor, Some(donation_id), &outcome);
        Ok(outcome)
    }

    async fn complete(
        &self,
        actor: Option<&User>,
        donation_id: Uuid,
    ) -> AppResult<Transition<Donation>> {
        let current = self.uow.donations().find_by_id(donation_id).await?;
        let outcome = match lifecycle::complete(actor, current.as_ref()) {
            Transition::Applied(next) => self.swap(next, DonationStatus::Accepted).await?,
            rejected => rejected,
        };

        log_outcome(Action::Complete, actor, Some(donation_id), &outcome);
        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::MockDonationRepository;
    use crate::services::testing::{user, MockUow};
    use domain::UserRole;
    use mockall::predicate::{always, eq};

    fn details() -> DonationDetails {
        DonationDetails {
            food_details: "20 loaves".to_string(),
            pickup_address: "1 Main St".to_string(),
            pickup_time: "18:00".to_string(),
        }
    }

    fn pending_from(donor: &User) -> Donation {
        match lifecycle::post(Some(donor), details(), Uuid::new_v4(), Utc::now()) {
            Transition::Applied(donation) => donation,
            Transition::Rejected(reason) => panic!("fixture post rejected: {reason}"),
        }
    }

    fn accepted_by(donation: &Donation, ngo: &User) -> Donation {
        let mut accepted = donation.clone();
        accepted.status = DonationStatus::Accepted;
        accepted.accepted_by = Some(ngo.id);
        accepted.ngo_name = Some(ngo.name.clone());
        accepted
    }

    #[tokio::test]
    async fn post_by_donor_creates_pending_donation() {
        let donor = user(UserRole::Donor, "Bakery");
        let donor_id = donor.id;

        let mut donations = MockDonationRepository::new();
        donations
            .expect_create()
            .withf(move |d| d.donor_id == donor_id && d.is_pending() && d.accepted_by.is_none())
            .times(1)
            .returning(Ok);

        let service = DonationManager::new(MockUow::with_donations(donations));
        let outcome = service.post(Some(&donor), details()).await.unwrap();

        let donation = outcome.applied().unwrap();
        assert_eq!(donation.donor_name, "Bakery");
        assert_eq!(donation.food_details, "20 loaves");
    }

    #[tokio::test]
    async fn post_by_ngo_creates_nothing() {
        let ngo = user(UserRole::Ngo, "Shelter");

        let mut donations = MockDonationRepository::new();
        donations.expect_create().never();

        let service = DonationManager::new(MockUow::with_donations(donations));
        let outcome = service.post(Some(&ngo), details()).await.unwrap();

        assert!(matches!(
            outcome.rejection(),
            Some(Rejection::WrongRole { required: UserRole::Donor, .. })
        ));
    }

    #[tokio::test]
    async fn post_without_session_is_rejected() {
        let mut donations = MockDonationRepository::new();
        donations.expect_create().never();

        let service = DonationManager::new(MockUow::with_donations(donations));
        let outcome = service.post(None, details()).await.unwrap();

        assert_eq!(outcome.rejection(), Some(Rejection::NoActor));
    }

    #[tokio::test]
    async fn accept_swaps_from_pending() {
        let donor = user(UserRole::Donor, "Bakery");
        let ngo = user(UserRole::Ngo, "Shelter");
        let pending = pending_from(&donor);
        let id = pending.id;
        let ngo_id = ngo.id;

        let mut donations = MockDonationRepository::new();
        let stored = pending.clone();
        donations
            .expect_find_by_id()
            .with(eq(id))
            .returning(move |_| Ok(Some(stored.clone())));
        donations
            .expect_update_if_status()
            .withf(move |d, expected| {
                *expected == DonationStatus::Pending
                    && d.status == DonationStatus::Accepted
                    && d.accepted_by == Some(ngo_id)
                    && d.ngo_name.as_deref() == Some("Shelter")
            })
            .times(1)
            .returning(|_, _| Ok(true));

        let service = DonationManager::new(MockUow::with_donations(donations));
        let outcome = service.accept(Some(&ngo), id).await.unwrap();

        assert!(outcome.is_applied());
        assert!(outcome.applied().unwrap().is_consistent());
    }

    #[tokio::test]
    async fn accept_losing_the_race_is_a_conflict() {
        let donor = user(UserRole::Donor, "Bakery");
        let ngo = user(UserRole::Ngo, "Shelter");
        let pending = pending_from(&donor);
        let id = pending.id;

        let mut donations = MockDonationRepository::new();
        donations
            .expect_find_by_id()
            .returning(move |_| Ok(Some(pending.clone())));
        donations
            .expect_update_if_status()
            .with(always(), eq(DonationStatus::Pending))
            .returning(|_, _| Ok(false));

        let service = DonationManager::new(MockUow::with_donations(donations));
        let outcome = service.accept(Some(&ngo), id).await.unwrap();

        assert_eq!(outcome.rejection(), Some(Rejection::Conflict));
    }

    #[tokio::test]
    async fn accept_of_accepted_donation_never_writes() {
        let donor = user(UserRole::Donor, "Bakery");
        let first = user(UserRole::Ngo, "Shelter");
        let second = user(UserRole::Ngo, "Pantry");
        let accepted = accepted_by(&pending_from(&donor), &first);
        let id = accepted.id;

        let mut donations = MockDonationRepository::new();
        donations
            .expect_find_by_id()
            .returning(move |_| Ok(Some(accepted.clone())));
        donations.expect_update_if_status().never();
        donations.expect_update().never();

        let service = DonationManager::new(MockUow::with_donations(donations));
        let outcome = service.accept(Some(&second), id).await.unwrap();

        assert_eq!(
            outcome.rejection(),
            Some(Rejection::WrongStatus {
                expected: DonationStatus::Pending,
                actual: DonationStatus::Accepted,
            })
        );
    }

    #[tokio::test]
    async fn accept_missing_donation_is_rejected() {
        let ngo = user(UserRole::Ngo, "Shelter");

        let mut donations = MockDonationRepository::new();
        donations.expect_find_by_id().returning(|_| Ok(None));
        donations.expect_update_if_status().never();

        let service = DonationManager::new(MockUow::with_donations(donations));
        let outcome = service.accept(Some(&ngo), Uuid::new_v4()).await.unwrap();

        assert_eq!(outcome.rejection(), Some(Rejection::DonationNotFound));
    }

    #[tokio::test]
    async fn complete_by_other_ngo_never_writes() {
        let donor = user(UserRole::Donor, "Bakery");
        let owner = user(UserRole::Ngo, "Shelter");
        let intruder = user(UserRole::Ngo, "Pantry");
        let accepted = accepted_by(&pending_from(&donor), &owner);
        let id = accepted.id;

        let mut donations = MockDonationRepository::new();
        donations
            .expect_find_by_id()
            .returning(move |_| Ok(Some(accepted.clone())));
        donations.expect_update_if_status().never();

        let service = DonationManager::new(MockUow::with_donations(donations));
        let outcome = service.complete(Some(&intruder), id).await.unwrap();

        assert_eq!(outcome.rejection(), Some(Rejection::NotAcceptingNgo));
    }

    #[tokio::test]
    async fn complete_by_owner_swaps_from_accepted() {
        let donor = user(UserRole::Donor, "Bakery");
        let owner = user(UserRole::Ngo, "Shelter");
        let accepted = accepted_by(&pending_from(&donor), &owner);
        let id = accepted.id;

        let mut donations = MockDonationRepository::new();
        donations
            .expect_find_by_id()
            .returning(move |_| Ok(Some(accepted.clone())));
        donations
            .expect_update_if_status()
            .withf(|d, expected| {
                *expected == DonationStatus::Accepted && d.status == DonationStatus::Completed
            })
            .times(1)
            .returning(|_, _| Ok(true));

        let service = DonationManager::new(MockUow::with_donations(donations));
        let outcome = service.complete(Some(&owner), id).await.unwrap();

        let completed = outcome.applied().unwrap();
        assert_eq!(completed.ngo_name.as_deref(), Some("Shelter"));
        assert!(completed.status.is_terminal());
    }
}
