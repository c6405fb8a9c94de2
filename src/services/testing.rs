//! Shared fixtures for service unit tests.

use chrono::Utc;
use std::sync::Arc;
use uuid::Uuid;

use crate::infra::{
    DonationRepository, MockDonationRepository, MockUserRepository, UnitOfWork, UserRepository,
};
use domain::{User, UserRole};

/// Unit of work backed by mockall repositories.
pub struct MockUow {
    users: Arc<MockUserRepository>,
    donations: Arc<MockDonationRepository>,
}

impl MockUow {
    pub fn new(users: MockUserRepository, donations: MockDonationRepository) -> Arc<Self> {
        Arc::new(Self {
            users: Arc::new(users),
            donations: Arc::new(donations),
        })
    }

    pub fn with_users(users: MockUserRepository) -> Arc<Self> {
        Self::new(users, MockDonationRepository::new())
    }

    pub fn with_donations(donations: MockDonationRepository) -> Arc<Self> {
        Self::new(MockUserRepository::new(), donations)
    }
}

impl UnitOfWork for MockUow {
    fn users(&self) -> Arc<dyn UserRepository> {
        self.users.clone()
    }

    fn donations(&self) -> Arc<dyn DonationRepository> {
        self.donations.clone()
    }
}

pub fn user(role: UserRole, name: &str) -> User {
    User {
        id: Uuid::new_v4(),
        role,
        name: name.to_string(),
        contact: "555-0100".to_string(),
        location: "Riverside".to_string(),
        created_at: Utc::now(),
    }
}
