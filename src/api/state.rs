//! Application state - Dependency injection container.
//!
//! Provides centralized access to all application services and infrastructure.

use std::sync::Arc;

use crate::config::Config;
use crate::infra::Database;
use crate::services::{
    DashboardService, DonationService, IdentityService, ServiceContainer, Services, SessionService,
};

/// Application state containing all services (DI container).
#[derive(Clone)]
pub struct AppState {
    /// Registration and user lookup
    pub identity_service: Arc<dyn IdentityService>,
    /// Session token issue and resolution
    pub session_service: Arc<dyn SessionService>,
    /// Donation lifecycle
    pub donation_service: Arc<dyn DonationService>,
    /// Per-role dashboards
    pub dashboard_service: Arc<dyn DashboardService>,
    /// Database connection
    pub database: Arc<Database>,
}

impl AppState {
    /// Create application state from a database and config.
    ///
    /// All services share one unit of work over the database's pool.
    pub fn from_config(database: Arc<Database>, config: Config) -> Self {
        let container = Services::from_connection(database.get_connection(), config);
        Self::from_container(&container, database)
    }

    /// Create application state from any service container.
    pub fn from_container(container: &dyn ServiceContainer, database: Arc<Database>) -> Self {
        Self {
            identity_service: container.identity(),
            session_service: container.sessions(),
            donation_service: container.donations(),
            dashboard_service: container.dashboard(),
            database,
        }
    }
}
