//! Role-to-landing-route resolver and the protected route catalog.
//!
//! SYSTEM CONTEXT
//! ==============
//! The index route, the guard's denial branch, the catch-all route and the
//! post-login redirect all resolve through [`default_route`], so they can
//! never disagree about where a role lands.

#[cfg(test)]
#[path = "routes_test.rs"]
mod tests;

use crate::role::Role;

/// Sign-in page.
pub const LOGIN_ROUTE: &str = "/login";
/// Patient self-registration page.
pub const REGISTER_ROUTE: &str = "/register";
/// Landing path for roles without a dashboard.
pub const FALLBACK_ROUTE: &str = "/";
/// Admin-only staff registration form.
pub const STAFF_REGISTRATION_ROUTE: &str = "/admin/staff/new";

/// Dashboard path for a known role.
#[must_use]
pub fn dashboard_route(role: Role) -> &'static str {
    match role {
        Role::Admin => "/admin",
        Role::Doctor => "/doctor",
        Role::Nurse => "/nurse",
        Role::Patient => "/patient",
        Role::LabTechnician => "/lab",
        Role::Pharmacist => "/pharmacy",
        Role::Receptionist => "/reception",
        Role::Finance => "/finance",
    }
}

/// Default landing path for a role string; unknown roles land on `/`.
#[must_use]
pub fn default_route(role: &str) -> &'static str {
    Role::parse(role).map_or(FALLBACK_ROUTE, dashboard_route)
}

/// A protected path and the roles allowed to reach it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RouteSpec {
    pub path: &'static str,
    pub allowed: &'static [Role],
}

/// Every protected path in the portal.
pub const PROTECTED_ROUTES: &[RouteSpec] = &[
    RouteSpec { path: "/admin", allowed: &[Role::Admin] },
    RouteSpec { path: STAFF_REGISTRATION_ROUTE, allowed: &[Role::Admin] },
    RouteSpec { path: "/doctor", allowed: &[Role::Doctor] },
    RouteSpec { path: "/nurse", allowed: &[Role::Nurse] },
    RouteSpec { path: "/patient", allowed: &[Role::Patient] },
    RouteSpec { path: "/lab", allowed: &[Role::LabTechnician] },
    RouteSpec { path: "/pharmacy", allowed: &[Role::Pharmacist] },
    RouteSpec { path: "/reception", allowed: &[Role::Receptionist] },
    RouteSpec { path: "/finance", allowed: &[Role::Finance] },
];

/// Allowed roles for a protected path, ignoring a trailing `/`.
///
/// Returns `None` for paths that are not in the catalog.
#[must_use]
pub fn allowed_roles(path: &str) -> Option<&'static [Role]> {
    let trimmed = match path.trim_end_matches('/') {
        "" => "/",
        p => p,
    };
    PROTECTED_ROUTES
        .iter()
        .find(|spec| spec.path == trimmed)
        .map(|spec| spec.allowed)
}
