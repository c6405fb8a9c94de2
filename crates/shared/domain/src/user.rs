//! User domain entity and related types.

use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::constants::{ROLE_DONOR, ROLE_NGO};
use crate::error::DomainError;

/// User roles enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Donor,
    Ngo,
}

impl UserRole {
    /// Storage and wire spelling
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Donor => ROLE_DONOR,
            UserRole::Ngo => ROLE_NGO,
        }
    }

    pub fn is_donor(&self) -> bool {
        matches!(self, UserRole::Donor)
    }

    pub fn is_ngo(&self) -> bool {
        matches!(self, UserRole::Ngo)
    }
}

impl FromStr for UserRole {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            ROLE_DONOR => Ok(UserRole::Donor),
            ROLE_NGO => Ok(UserRole::Ngo),
            other => Err(DomainError::UnknownRole(other.to_string())),
        }
    }
}

impl From<UserRole> for String {
    fn from(role: UserRole) -> Self {
        role.as_str().to_string()
    }
}

impl std::fmt::Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// User domain entity.
///
/// Created once at registration and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub role: UserRole,
    pub name: String,
    pub contact: String,
    pub location: String,
    pub created_at: DateTime<Utc>,
}

impl User {
    pub fn is_donor(&self) -> bool {
        self.role.is_donor()
    }

    pub fn is_ngo(&self) -> bool {
        self.role.is_ngo()
    }
}

/// Registration data transfer object
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NewUser {
    pub role: UserRole,
    pub name: String,
    pub contact: String,
    pub location: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_round_trips_through_storage_spelling() {
        for role in [UserRole::Donor, UserRole::Ngo] {
            assert_eq!(role.as_str().parse::<UserRole>().unwrap(), role);
        }
    }

    #[test]
    fn unknown_role_is_rejected() {
        let err = "admin".parse::<UserRole>().unwrap_err();
        assert_eq!(err, DomainError::UnknownRole("admin".to_string()));
        // Spellings are case sensitive, as stored.
        assert!("Donor".parse::<UserRole>().is_err());
    }

    #[test]
    fn role_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&UserRole::Ngo).unwrap(), "\"ngo\"");
        assert_eq!(UserRole::Donor.to_string(), "donor");
    }
}
