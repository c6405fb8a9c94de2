//! Donation domain entity and its status.

use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::constants::{STATUS_ACCEPTED, STATUS_COMPLETED, STATUS_PENDING};
use crate::error::DomainError;

/// Donation lifecycle status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DonationStatus {
    Pending,
    Accepted,
    Completed,
}

impl DonationStatus {
    /// Storage and wire spelling
    pub fn as_str(&self) -> &'static str {
        match self {
            DonationStatus::Pending => STATUS_PENDING,
            DonationStatus::Accepted => STATUS_ACCEPTED,
            DonationStatus::Completed => STATUS_COMPLETED,
        }
    }

    /// The only state reachable from this one, if any.
    pub fn next(&self) -> Option<DonationStatus> {
        match self {
            DonationStatus::Pending => Some(DonationStatus::Accepted),
            DonationStatus::Accepted => Some(DonationStatus::Completed),
            DonationStatus::Completed => None,
        }
    }

    pub fn can_transition_to(&self, target: DonationStatus) -> bool {
        self.next() == Some(target)
    }

    pub fn is_terminal(&self) -> bool {
        self.next().is_none()
    }
}

impl FromStr for DonationStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            STATUS_PENDING => Ok(DonationStatus::Pending),
            STATUS_ACCEPTED => Ok(DonationStatus::Accepted),
            STATUS_COMPLETED => Ok(DonationStatus::Completed),
            other => Err(DomainError::UnknownStatus(other.to_string())),
        }
    }
}

impl std::fmt::Display for DonationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Donation domain entity.
///
/// `donor_name`, `donor_contact` and `ngo_name` are snapshots taken when the
/// donation was posted or accepted; they are never re-synced from the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Donation {
    pub id: Uuid,
    pub donor_id: Uuid,
    pub donor_name: String,
    pub donor_contact: String,
    pub food_details: String,
    pub pickup_address: String,
    pub pickup_time: String,
    pub status: DonationStatus,
    pub accepted_by: Option<Uuid>,
    pub ngo_name: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Donation {
    pub fn is_pending(&self) -> bool {
        self.status == DonationStatus::Pending
    }

    /// `accepted_by` and `ngo_name` are set exactly when the donation has left Pending.
    pub fn is_consistent(&self) -> bool {
        let unclaimed = self.is_pending();
        self.accepted_by.is_none() == unclaimed && self.ngo_name.is_none() == unclaimed
    }

    /// Whether `ngo_id` is the NGO that claimed this donation.
    pub fn is_accepted_by(&self, ngo_id: Uuid) -> bool {
        self.accepted_by == Some(ngo_id)
    }
}

/// Donor-supplied fields of a new donation. Free-form and unvalidated.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DonationDetails {
    pub food_details: String,
    pub pickup_address: String,
    pub pickup_time: String,
}
