//! Authenticated user identity as returned by the auth endpoints.

#[cfg(test)]
#[path = "identity_test.rs"]
mod tests;

use serde::{Deserialize, Serialize};

use crate::role::{Role, normalize};

/// The currently authenticated user.
///
/// `role` is stored exactly as received; use [`UserIdentity::role_kind`] or
/// [`UserIdentity::normalized_role`] for comparisons.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "RawIdentity")]
pub struct UserIdentity {
    /// Backend user identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Login email address.
    pub email: String,
    /// Role tag as sent by the backend (e.g. `"Doctor"`).
    pub role: String,
    /// Role-specific sub-profile reference (doctor profile, patient record, ...).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_id: Option<String>,
}

/// Wire shape of a user. Document stores often send the same value under
/// several keys (`_id` and `id`), so every spelling is its own field.
#[derive(Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct RawIdentity {
    id: Option<String>,
    #[serde(rename = "_id")]
    underscore_id: Option<String>,
    name: Option<String>,
    full_name: Option<String>,
    display_name: Option<String>,
    email: Option<String>,
    role: Option<String>,
    profile_id: Option<String>,
    doctor_id: Option<String>,
    patient_id: Option<String>,
}

impl From<RawIdentity> for UserIdentity {
    fn from(raw: RawIdentity) -> Self {
        Self {
            id: raw.id.or(raw.underscore_id).unwrap_or_default(),
            name: raw.name.or(raw.full_name).or(raw.display_name).unwrap_or_default(),
            email: raw.email.unwrap_or_default(),
            role: raw.role.unwrap_or_default(),
            profile_id: raw.profile_id.or(raw.doctor_id).or(raw.patient_id),
        }
    }
}

impl UserIdentity {
    /// Lowercased, `_`-joined role tag.
    #[must_use]
    pub fn normalized_role(&self) -> String {
        normalize(&self.role)
    }

    /// The role as a known enum variant, if recognized.
    #[must_use]
    pub fn role_kind(&self) -> Option<Role> {
        Role::parse(&self.role)
    }

    /// Whether the payload carries the fields a session needs.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        !self.id.trim().is_empty() && !self.role.trim().is_empty()
    }
}
