//! REST wire envelopes for the auth endpoints.
//!
//! DESIGN
//! ======
//! The backend wraps identity checks as `{ success, message, data: { user } }`
//! but login/register as `{ message, user }`, and every error as `{ message }`.
//! These types mirror that shape; conversion helpers collapse malformed or
//! unsuccessful envelopes into `None` so drivers never branch on raw JSON.

#[cfg(test)]
#[path = "wire_test.rs"]
mod tests;

use serde::{Deserialize, Serialize};

use crate::identity::UserIdentity;
use crate::role::Role;

pub const ME_ENDPOINT: &str = "/auth/me";
pub const LOGIN_ENDPOINT: &str = "/auth/login";
pub const STAFF_REGISTER_ENDPOINT: &str = "/auth/register";
pub const PATIENT_REGISTER_ENDPOINT: &str = "/auth/patient/register";

/// Minimum accepted password length for new accounts.
pub const MIN_PASSWORD_LEN: usize = 6;

// =============================================================================
// RESPONSES
// =============================================================================

/// `GET /auth/me` response.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct MeResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub data: Option<MeData>,
}

#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct MeData {
    #[serde(default)]
    pub user: Option<UserIdentity>,
}

impl MeResponse {
    /// The identity carried by a successful, well-formed response.
    #[must_use]
    pub fn into_identity(self) -> Option<UserIdentity> {
        if !self.success {
            return None;
        }
        self.data?.user.filter(UserIdentity::is_valid)
    }
}

/// `POST /auth/login` and `POST /auth/*register` success body.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct AuthResponse {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub user: Option<UserIdentity>,
}

/// Result of a successful registration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RegistrationOutcome {
    /// Backend confirmation message.
    pub message: String,
    /// The created account, when the backend echoes it.
    pub user: Option<UserIdentity>,
}

impl From<AuthResponse> for RegistrationOutcome {
    fn from(resp: AuthResponse) -> Self {
        Self {
            message: resp.message.unwrap_or_else(|| "Registration successful".to_owned()),
            user: resp.user.filter(UserIdentity::is_valid),
        }
    }
}

/// Error body returned with 4xx/5xx statuses.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub message: Option<String>,
}

/// Extract the backend's `message` from a raw error body, if present.
#[must_use]
pub fn error_message(body: &str) -> Option<String> {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.message)
        .map(|m| m.trim().to_owned())
        .filter(|m| !m.is_empty())
}

// =============================================================================
// REQUESTS
// =============================================================================

/// `POST /auth/login` body.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Error returned by form validation before any request is sent.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    #[error("Enter your name.")]
    MissingName,
    #[error("Enter a valid email address.")]
    InvalidEmail,
    #[error("Enter your password.")]
    MissingPassword,
    #[error("Password must be at least 6 characters.")]
    PasswordTooShort,
    #[error("Choose a staff role.")]
    MissingRole,
    #[error("Patients register through the patient sign-up page.")]
    PatientAsStaff,
}

fn valid_email(email: &str) -> bool {
    match email.split_once('@') {
        Some((local, domain)) => !local.is_empty() && !domain.is_empty() && !email.contains(char::is_whitespace),
        None => false,
    }
}

impl LoginRequest {
    /// Build a login request from raw form input, trimming the email.
    ///
    /// # Errors
    ///
    /// Returns [`FormError`] when the email is malformed or the password empty.
    pub fn from_form(email: &str, password: &str) -> Result<Self, FormError> {
        let email = email.trim();
        if !valid_email(email) {
            return Err(FormError::InvalidEmail);
        }
        if password.is_empty() {
            return Err(FormError::MissingPassword);
        }
        Ok(Self { email: email.to_owned(), password: password.to_owned() })
    }
}

/// Staff account created by an administrator.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StaffRegistration {
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: Role,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub specialization: Option<String>,
}

/// Self-service patient account.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PatientRegistration {
    pub name: String,
    pub email: String,
    pub password: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_of_birth: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
}

/// A role-tagged registration payload.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Registration {
    Staff(StaffRegistration),
    Patient(PatientRegistration),
}

impl Registration {
    /// Endpoint the payload is submitted to.
    #[must_use]
    pub fn endpoint(&self) -> &'static str {
        match self {
            Self::Staff(_) => STAFF_REGISTER_ENDPOINT,
            Self::Patient(_) => PATIENT_REGISTER_ENDPOINT,
        }
    }

    /// Role the new account will carry.
    #[must_use]
    pub fn role(&self) -> Role {
        match self {
            Self::Staff(s) => s.role,
            Self::Patient(_) => Role::Patient,
        }
    }

    /// Email of the account being created.
    #[must_use]
    pub fn email(&self) -> &str {
        match self {
            Self::Staff(s) => &s.email,
            Self::Patient(p) => &p.email,
        }
    }

    /// JSON body with the `role` tag filled in.
    #[must_use]
    pub fn payload(&self) -> serde_json::Value {
        let mut value = match self {
            Self::Staff(s) => serde_json::to_value(s),
            Self::Patient(p) => serde_json::to_value(p),
        }
        .unwrap_or_default();
        if let Some(obj) = value.as_object_mut() {
            obj.insert("role".to_owned(), serde_json::Value::from(self.role().as_str()));
        }
        value
    }

    /// Check the fields every registration needs.
    ///
    /// # Errors
    ///
    /// Returns the first [`FormError`] found.
    pub fn validate(&self) -> Result<(), FormError> {
        let (name, email, password) = match self {
            Self::Staff(s) => (&s.name, &s.email, &s.password),
            Self::Patient(p) => (&p.name, &p.email, &p.password),
        };
        if name.trim().is_empty() {
            return Err(FormError::MissingName);
        }
        if !valid_email(email.trim()) {
            return Err(FormError::InvalidEmail);
        }
        if password.chars().count() < MIN_PASSWORD_LEN {
            return Err(FormError::PasswordTooShort);
        }
        if let Self::Staff(s) = self {
            if !s.role.is_staff() {
                return Err(FormError::PatientAsStaff);
            }
        }
        Ok(())
    }
}
