//! Application services layer - Use cases and business logic.
//!
//! Services orchestrate domain logic and infrastructure to fulfill
//! application use cases. They depend on abstractions (traits) for
//! dependency inversion and reach storage through the Unit of Work.

pub mod container;
mod dashboard_service;
mod donation_service;
mod identity_service;
mod session_service;

#[cfg(test)]
mod testing;

// Service Container
pub use container::{ServiceContainer, Services};

// Service traits and implementations
pub use dashboard_service::{DashboardManager, DashboardService};
pub use donation_service::{DonationManager, DonationService};
pub use identity_service::{IdentityManager, IdentityService};
pub use session_service::{SessionClaims, SessionManager, SessionService};
