//! Donation lifecycle engine.
//!
//! Pure functions mapping (actor, current donation, action) to either the
//! donation as it should be persisted, or a rejection. Nothing here touches
//! storage, the clock or the id generator; callers pass those values in.
//!
//! ```text
//!   Post ──► Pending ──Accept──► Accepted ──Complete──► Completed
//! ```
//!
//! A rejected action leaves its input untouched.

use chrono::{DateTime, Utc};
use thiserror::Error;
use uuid::Uuid;

use crate::donation::{Donation, DonationDetails, DonationStatus};
use crate::user::{User, UserRole};

/// Lifecycle actions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Post,
    Accept,
    Complete,
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Action::Post => "post",
            Action::Accept => "accept",
            Action::Complete => "complete",
        })
    }
}

/// Why an action was refused.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    #[error("no user in session")]
    NoActor,

    #[error("requires role {required}, actor is {actual}")]
    WrongRole { required: UserRole, actual: UserRole },

    #[error("donation not found")]
    DonationNotFound,

    #[error("donation is {actual}, expected {expected}")]
    WrongStatus {
        expected: DonationStatus,
        actual: DonationStatus,
    },

    #[error("donation was accepted by another NGO")]
    NotAcceptingNgo,

    /// The stored status changed between read and write.
    #[error("donation changed concurrently")]
    Conflict,
}

/// Outcome of a lifecycle action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transition<T> {
    Applied(T),
    Rejected(Rejection),
}

impl<T> Transition<T> {
    pub fn is_applied(&self) -> bool {
        matches!(self, Transition::Applied(_))
    }

    pub fn applied(&self) -> Option<&T> {
        match self {
            Transition::Applied(value) => Some(value),
            Transition::Rejected(_) => None,
        }
    }

    pub fn rejection(&self) -> Option<Rejection> {
        match self {
            Transition::Applied(_) => None,
            Transition::Rejected(reason) => Some(*reason),
        }
    }
}

fn require_role(actor: Option<&User>, required: UserRole) -> Result<&User, Rejection> {
    let actor = actor.ok_or(Rejection::NoActor)?;
    if actor.role != required {
        return Err(Rejection::WrongRole {
            required,
            actual: actor.role,
        });
    }
    Ok(actor)
}

fn require_status(donation: &Donation, expected: DonationStatus) -> Result<(), Rejection> {
    if donation.status != expected {
        return Err(Rejection::WrongStatus {
            expected,
            actual: donation.status,
        });
    }
    Ok(())
}

/// Post a new donation on behalf of a donor.
///
/// The donor's name and contact are copied into the donation as a snapshot.
pub fn post(
    actor: Option<&User>,
    details: DonationDetails,
    id: Uuid,
    now: DateTime<Utc>,
) -> Transition<Donation> {
    let donor = match require_role(actor, UserRole::Donor) {
        Ok(donor) => donor,
        Err(reason) => return Transition::Rejected(reason),
    };

    Transition::Applied(Donation {
        id,
        donor_id: donor.id,
        donor_name: donor.name.clone(),
        donor_contact: donor.contact.clone(),
        food_details: details.food_details,
        pickup_address: details.pickup_address,
        pickup_time: details.pickup_time,
        status: DonationStatus::Pending,
        accepted_by: None,
        ngo_name: None,
        created_at: now,
    })
}

/// Claim a pending donation for an NGO.
pub fn accept(actor: Option<&User>, donation: Option<&Donation>) -> Transition<Donation> {
    let checked = require_role(actor, UserRole::Ngo).and_then(|ngo| {
        let donation = donation.ok_or(Rejection::DonationNotFound)?;
        require_status(donation, DonationStatus::Pending)?;
        Ok((ngo, donation))
    });

    match checked {
        Ok((ngo, donation)) => {
            let mut next = donation.clone();
            next.status = DonationStatus::Accepted;
            next.accepted_by = Some(ngo.id);
            next.ngo_name = Some(ngo.name.clone());
            Transition::Applied(next)
        }
        Err(reason) => Transition::Rejected(reason),
    }
}

/// Mark a donation completed by the NGO that accepted it.
///
/// Ownership is checked before status, so an NGO never completes a donation
/// it did not claim; the status check then keeps `Completed` terminal.
pub fn complete(actor: Option<&User>, donation: Option<&Donation>) -> Transition<Donation> {
    let checked = require_role(actor, UserRole::Ngo).and_then(|ngo| {
        let donation = donation.ok_or(Rejection::DonationNotFound)?;
        if !donation.is_accepted_by(ngo.id) {
            return Err(Rejection::NotAcceptingNgo);
        }
        require_status(donation, DonationStatus::Accepted)?;
        Ok(donation)
    });

    match checked {
        Ok(donation) => {
            let mut next = donation.clone();
            next.status = DonationStatus::Completed;
            Transition::Applied(next)
        }
        Err(reason) => Transition::Rejected(reason),
    }
}
