//! Client-side session state machine.
//!
//! DESIGN
//! ======
//! Drivers (the native `SessionService`, the browser `SessionStore`) own one
//! `Session` each and change it only through the transitions below. The
//! transitions are pure so both drivers share the same rules:
//!
//! - `new` / `default`: identity unknown, check pending (`loading = true`)
//! - `resolve`: identity check finished (success or not)
//! - `begin_submission` / `finish_submission`: login or register in flight
//! - `clear`: local logout
//! - `expire`: backend reported "unauthorized" while signed in

#[cfg(test)]
#[path = "session_test.rs"]
mod tests;

use crate::identity::UserIdentity;

/// Who is signed in, and whether a backend round-trip is outstanding.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Session {
    pub identity: Option<UserIdentity>,
    pub loading: bool,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    /// A session whose identity check has not resolved yet.
    #[must_use]
    pub fn new() -> Self {
        Self { identity: None, loading: true }
    }

    /// A settled session with no identity.
    #[must_use]
    pub fn signed_out() -> Self {
        Self { identity: None, loading: false }
    }

    /// A settled session for `identity`.
    #[must_use]
    pub fn signed_in(identity: UserIdentity) -> Self {
        Self { identity: Some(identity), loading: false }
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.identity.is_some()
    }

    /// Whether the guard must hold off deciding (no identity yet, check pending).
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.loading && self.identity.is_none()
    }

    /// Apply the result of the identity check. Invalid payloads count as absent.
    ///
    /// An absent result never clobbers an identity a login already stored.
    pub fn resolve(&mut self, identity: Option<UserIdentity>) {
        if let Some(identity) = identity.filter(UserIdentity::is_valid) {
            self.identity = Some(identity);
        }
        self.loading = false;
    }

    /// Mark a credential submission as in flight.
    pub fn begin_submission(&mut self) {
        self.loading = true;
    }

    /// Finish a credential submission. `Some` stores the new identity; `None`
    /// leaves the current identity alone.
    pub fn finish_submission(&mut self, identity: Option<UserIdentity>) {
        if let Some(identity) = identity.filter(UserIdentity::is_valid) {
            self.identity = Some(identity);
        }
        self.loading = false;
    }

    /// Drop the identity locally.
    pub fn clear(&mut self) {
        self.identity = None;
        self.loading = false;
    }

    /// React to an "unauthorized" response. Returns `true` if an identity was dropped.
    pub fn expire(&mut self) -> bool {
        if self.identity.is_none() {
            return false;
        }
        self.identity = None;
        true
    }
}
