//! Per-role dashboard views.

use serde::Serialize;

use crate::donation::Donation;
use crate::user::User;

/// Global counts shown on every dashboard.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DashboardStats {
    pub total_users: u64,
    pub total_donations: u64,
    pub pending: u64,
    pub accepted: u64,
    pub completed: u64,
}

impl DashboardStats {
    /// Per-status counts partition the donation total.
    pub fn is_consistent(&self) -> bool {
        self.pending + self.accepted + self.completed == self.total_donations
    }
}

/// A donor's own donations, most recent first.
#[derive(Debug, Clone, Serialize)]
pub struct DonorDashboard {
    pub user: User,
    pub donations: Vec<Donation>,
    pub stats: DashboardStats,
}

/// The claimable queue plus the NGO's own work list, both most recent first.
#[derive(Debug, Clone, Serialize)]
pub struct NgoDashboard {
    pub user: User,
    pub pending_donations: Vec<Donation>,
    pub accepted_donations: Vec<Donation>,
    pub stats: DashboardStats,
}

/// Role-routed dashboard view
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "role", rename_all = "lowercase")]
pub enum Dashboard {
    Donor(DonorDashboard),
    Ngo(NgoDashboard),
}

impl Dashboard {
    pub fn user(&self) -> &User {
        match self {
            Dashboard::Donor(view) => &view.user,
            Dashboard::Ngo(view) => &view.user,
        }
    }

    pub fn stats(&self) -> &DashboardStats {
        match self {
            Dashboard::Donor(view) => &view.stats,
            Dashboard::Ngo(view) => &view.stats,
        }
    }
}
