//! Fixed role enumeration.
//!
//! DESIGN
//! ======
//! Identities keep the role string exactly as the backend sent it; this enum
//! is the normalized view used for comparisons and routing. Parsing is
//! forgiving about case, surrounding whitespace and `-`/space separators.

#[cfg(test)]
#[path = "role_test.rs"]
mod tests;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Error returned when a string does not name a known role.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown role: {0}")]
pub struct ParseRoleError(pub String);

/// A clinic staff or patient role.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Admin,
    Doctor,
    Nurse,
    Patient,
    LabTechnician,
    Pharmacist,
    Receptionist,
    Finance,
}

impl Role {
    /// Every role, in display order.
    pub const ALL: [Role; 8] = [
        Role::Admin,
        Role::Doctor,
        Role::Nurse,
        Role::Patient,
        Role::LabTechnician,
        Role::Pharmacist,
        Role::Receptionist,
        Role::Finance,
    ];

    /// Canonical lowercase wire tag.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Doctor => "doctor",
            Self::Nurse => "nurse",
            Self::Patient => "patient",
            Self::LabTechnician => "lab_technician",
            Self::Pharmacist => "pharmacist",
            Self::Receptionist => "receptionist",
            Self::Finance => "finance",
        }
    }

    /// Human-readable label for headers and menus.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Admin => "Administrator",
            Self::Doctor => "Doctor",
            Self::Nurse => "Nurse",
            Self::Patient => "Patient",
            Self::LabTechnician => "Lab Technician",
            Self::Pharmacist => "Pharmacist",
            Self::Receptionist => "Receptionist",
            Self::Finance => "Finance",
        }
    }

    /// Whether this role belongs to clinic staff (everything except patients).
    #[must_use]
    pub fn is_staff(self) -> bool {
        !matches!(self, Self::Patient)
    }

    /// Parse a role leniently, returning `None` for unknown tags.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        let normalized = normalize(raw);
        Self::ALL.into_iter().find(|role| role.as_str() == normalized)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = ParseRoleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| ParseRoleError(s.to_owned()))
    }
}

impl AsRef<str> for Role {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

/// Normalize a role string for comparison: trimmed, lowercase, `_` separators.
#[must_use]
pub fn normalize(raw: &str) -> String {
    raw.trim()
        .chars()
        .map(|c| match c {
            '-' | ' ' => '_',
            other => other.to_ascii_lowercase(),
        })
        .collect()
}
