//! Domain-level constants.
//!
//! Wire and storage spellings for roles and donation statuses.

// =============================================================================
// User Roles
// =============================================================================

/// Role of users who post surplus food
pub const ROLE_DONOR: &str = "donor";

/// Role of organisations that claim and fulfil donations
pub const ROLE_NGO: &str = "ngo";

/// All valid role values
pub const VALID_ROLES: &[&str] = &[ROLE_DONOR, ROLE_NGO];

// =============================================================================
// Donation Status
// =============================================================================

/// Freshly posted, claimable by any NGO
pub const STATUS_PENDING: &str = "pending";

/// Claimed by exactly one NGO
pub const STATUS_ACCEPTED: &str = "accepted";

/// Picked up; terminal
pub const STATUS_COMPLETED: &str = "completed";
