//! Unit of Work pattern implementation.
//!
//! Centralizes access to all repositories over one shared connection pool.
//! Lifecycle writes that must not race go through
//! [`DonationRepository::update_if_status`] instead of a transaction.

use sea_orm::DatabaseConnection;
use std::sync::Arc;

use super::repositories::{DonationRepository, DonationStore, UserRepository, UserStore};

/// Unit of Work trait for dependency injection.
pub trait UnitOfWork: Send + Sync {
    /// Get user repository
    fn users(&self) -> Arc<dyn UserRepository>;

    /// Get donation repository
    fn donations(&self) -> Arc<dyn DonationRepository>;
}

/// Concrete implementation of UnitOfWork
pub struct Persistence {
    user_repo: Arc<UserStore>,
    donation_repo: Arc<DonationStore>,
}

impl Persistence {
    /// Create new UnitOfWork instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            user_repo: Arc::new(UserStore::new(db.clone())),
            donation_repo: Arc::new(DonationStore::new(db)),
        }
    }
}

impl UnitOfWork for Persistence {
    fn users(&self) -> Arc<dyn UserRepository> {
        self.user_repo.clone()
    }

    fn donations(&self) -> Arc<dyn DonationRepository> {
        self.donation_repo.clone()
    }
}
