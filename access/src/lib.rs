//! Session and access-control policy for the clinic portal.
//!
//! This crate owns the pieces shared by the native session service (root
//! crate) and the browser UI (`client`): the role enumeration, the
//! authenticated identity, the session state machine, the route guard, the
//! default-route resolver, the REST wire envelopes, the error taxonomy and the
//! unauthorized-response hub. Nothing here performs I/O, so every rule can be
//! exercised with plain unit tests.

pub mod error;
pub mod guard;
pub mod hook;
pub mod identity;
pub mod role;
pub mod routes;
pub mod session;
pub mod wire;

pub use error::{ApiError, AuthError};
pub use guard::{GuardDecision, decide, evaluate};
pub use hook::{UnauthorizedHub, UnauthorizedSubscription};
pub use identity::UserIdentity;
pub use role::{ParseRoleError, Role};
pub use routes::{LOGIN_ROUTE, default_route};
pub use session::Session;
