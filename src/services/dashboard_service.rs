//! Dashboard service - Read-only per-role views over both stores.
//!
//! Nothing is cached: every call re-reads the stores.

use async_trait::async_trait;
use std::sync::Arc;

use crate::errors::AppResult;
use crate::infra::UnitOfWork;
use domain::{Dashboard, DashboardStats, DonationStatus, DonorDashboard, NgoDashboard, User, UserRole};

/// Dashboard service trait for dependency injection.
#[async_trait]
pub trait DashboardService: Send + Sync {
    /// Global user and donation counts
    async fn stats(&self) -> AppResult<DashboardStats>;

    /// The dashboard for `user`, routed by role
    async fn for_user(&self, user: &User) -> AppResult<Dashboard>;
}

/// Concrete implementation of DashboardService using Unit of Work.
pub struct DashboardManager<U: UnitOfWork> {
    uow: Arc<U>,
}

impl<U: UnitOfWork> DashboardManager<U> {
    pub fn new(uow: Arc<U>) -> Self {
        Self { uow }
    }
}

#[async_trait]
impl<U: UnitOfWork> DashboardService for DashboardManager<U> {
    async fn stats(&self) -> AppResult<DashboardStats> {
        let users = self.uow.users();
        let donations = self.uow.donations();

        let (total_users, total_donations, pending, accepted, completed) = tokio::try_join!(
            users.count(),
            donations.count_all(),
            donations.count_by_status(DonationStatus::Pending),
            donations.count_by_status(DonationStatus::Accepted),
            donations.count_by_status(DonationStatus::Completed),
        )?;

        Ok(DashboardStats {
            total_users,
            total_donations,
            pending,
            accepted,
            completed,
        })
    }

    async fn for_user(&self, user: &User) -> AppResult<Dashboard> {
        let donations = self.uow.donations();

        let dashboard = match user.role {
            UserRole::Donor => {
                let (own, stats) = tokio::try_join!(donations.list_by_donor(user.id), self.stats())?;
                Dashboard::Donor(DonorDashboard {
                    user: user.clone(),
                    donations: own,
                    stats,
                })
            }
            UserRole::Ngo => {
                let (pending, claimed, stats) = tokio::try_join!(
                    donations.list_by_status(DonationStatus::Pending),
                    donations.list_by_accepted_by(user.id),
                    self.stats(),
                )?;
                Dashboard::Ngo(NgoDashboard {
                    user: user.clone(),
                    pending_donations: pending,
                    accepted_donations: claimed,
                    stats,
                })
            }
        };

        Ok(dashboard)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::{MockDonationRepository, MockUserRepository};
    use crate::services::testing::{user, MockUow};
    use mockall::predicate::eq;

    fn counting_repos() -> (MockUserRepository, MockDonationRepository) {
        let mut users = MockUserRepository::new();
        users.expect_count().returning(|| Ok(3));

        let mut donations = MockDonationRepository::new();
        donations.expect_count_all().returning(|| Ok(6));
        donations
            .expect_count_by_status()
            .with(eq(DonationStatus::Pending))
            .returning(|_| Ok(3));
        donations
            .expect_count_by_status()
            .with(eq(DonationStatus::Accepted))
            .returning(|_| Ok(2));
        donations
            .expect_count_by_status()
            .with(eq(DonationStatus::Completed))
            .returning(|_| Ok(1));

        (users, donations)
    }

    #[tokio::test]
    async fn stats_gathers_every_count() {
        let (users, donations) = counting_repos();
        let service = DashboardManager::new(MockUow::new(users, donations));

        let stats = service.stats().await.unwrap();

        assert_eq!(
            stats,
            DashboardStats {
                total_users: 3,
                total_donations: 6,
                pending: 3,
                accepted: 2,
                completed: 1,
            }
        );
        assert!(stats.is_consistent());
    }

    #[tokio::test]
    async fn donor_sees_only_own_donations() {
        let donor = user(UserRole::Donor, "Bakery");
        let (users, mut donations) = counting_repos();
        donations
            .expect_list_by_donor()
            .with(eq(donor.id))
            .times(1)
            .returning(|_| Ok(Vec::new()));
        donations.expect_list_by_status().never();

        let service = DashboardManager::new(MockUow::new(users, donations));
        let dashboard = service.for_user(&donor).await.unwrap();

        assert!(matches!(dashboard, Dashboard::Donor(_)));
        assert_eq!(dashboard.user().id, donor.id);
    }

    #[tokio::test]
    async fn ngo_sees_queue_and_own_claims() {
        let ngo = user(UserRole::Ngo, "Shelter");
        let (users, mut donations) = counting_repos();
        donations
            .expect_list_by_status()
            .with(eq(DonationStatus::Pending))
            .times(1)
            .returning(|_| Ok(Vec::new()));
        donations
            .expect_list_by_accepted_by()
            .with(eq(ngo.id))
            .times(1)
            .returning(|_| Ok(Vec::new()));
        donations.expect_list_by_donor().never();

        let service = DashboardManager::new(MockUow::new(users, donations));
        let dashboard = service.for_user(&ngo).await.unwrap();

        assert!(matches!(dashboard, Dashboard::Ngo(_)));
        assert_eq!(dashboard.stats().pending, 3);
    }
}
