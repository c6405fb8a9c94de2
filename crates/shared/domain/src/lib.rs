//! Domain layer - Core business entities and the donation lifecycle.
//!
//! This crate contains pure domain logic with no infrastructure dependencies.
//! Storage, HTTP and session handling live in the application crate.

pub mod constants;
pub mod dashboard;
pub mod donation;
pub mod error;
pub mod lifecycle;
pub mod user;

pub use constants::*;
pub use dashboard::{Dashboard, DashboardStats, DonorDashboard, NgoDashboard};
pub use donation::{Donation, DonationDetails, DonationStatus};
pub use error::DomainError;
pub use lifecycle::{Action, Rejection, Transition};
pub use user::{NewUser, User, UserRole};
