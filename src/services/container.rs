//! Service Container - Centralized service access.
//!
//! Every service shares one [`Persistence`] unit of work, and with it one
//! connection pool.

use std::sync::Arc;

use super::{
    DashboardManager, DashboardService, DonationManager, DonationService, IdentityManager,
    IdentityService, SessionManager, SessionService,
};
use crate::config::Config;
use crate::infra::Persistence;

/// Service container trait for dependency injection.
pub trait ServiceContainer: Send + Sync {
    /// Get identity service
    fn identity(&self) -> Arc<dyn IdentityService>;

    /// Get session service
    fn sessions(&self) -> Arc<dyn SessionService>;

    /// Get donation lifecycle service
    fn donations(&self) -> Arc<dyn DonationService>;

    /// Get dashboard service
    fn dashboard(&self) -> Arc<dyn DashboardService>;
}

/// Concrete implementation of ServiceContainer
pub struct Services {
    identity_service: Arc<dyn IdentityService>,
    session_service: Arc<dyn SessionService>,
    donation_service: Arc<dyn DonationService>,
    dashboard_service: Arc<dyn DashboardService>,
}

impl Services {
    /// Create a new service container from already built services
    pub fn new(
        identity_service: Arc<dyn IdentityService>,
        session_service: Arc<dyn SessionService>,
        donation_service: Arc<dyn DonationService>,
        dashboard_service: Arc<dyn DashboardService>,
    ) -> Self {
        Self {
            identity_service,
            session_service,
            donation_service,
            dashboard_service,
        }
    }

    /// Create service container from database connection and config
    pub fn from_connection(db: sea_orm::DatabaseConnection, config: Config) -> Self {
        let uow = Arc::new(Persistence::new(db));

        Self::new(
            Arc::new(IdentityManager::new(uow.clone())),
            Arc::new(SessionManager::new(uow.clone(), config)),
            Arc::new(DonationManager::new(uow.clone())),
            Arc::new(DashboardManager::new(uow)),
        )
    }
}

impl ServiceContainer for Services {
    fn identity(&self) -> Arc<dyn IdentityService> {
        self.identity_service.clone()
    }

    fn sessions(&self) -> Arc<dyn SessionService> {
        self.session_service.clone()
    }

    fn donations(&self) -> Arc<dyn DonationService> {
        self.donation_service.clone()
    }

    fn dashboard(&self) -> Arc<dyn DashboardService> {
        self.dashboard_service.clone()
    }
}
