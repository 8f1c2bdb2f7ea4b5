//! # Route guard: render, wait, or redirect
//!
//! [`guard`] decides what a navigation to a route shows, given the session's
//! [`AuthStatus`] and the route's [`RouteAccess`]. The checks run in a fixed order:
//!
//! 1. still loading → [`GuardDecision::Loading`]
//! 2. not authenticated → redirect to [`Landing::Login`]
//! 3. role not allowed → redirect to the role's own landing route
//! 4. otherwise → [`GuardDecision::Render`]
//!
//! Public routes skip all of this and always render.
//!
//! [`landing_for`] is the single role → landing mapping. Both the guard's role
//! redirect and [`home_redirect`] (used for `/` and unmatched paths) go through it.
//! Redirects are always history replacements, and mismatches are never reported as
//! errors.

use api::Role;

pub const LOGIN_PATH: &str = "/login";
pub const OWNER_HOME_PATH: &str = "/owner";
pub const CLIENT_HOME_PATH: &str = "/app/new-booking";

/// What the session looks like to the router.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthStatus {
    Loading,
    Anonymous,
    Authenticated(Role),
}

/// Where a redirect goes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Landing {
    Login,
    OwnerHome,
    ClientHome,
}

impl Landing {
    pub fn path(&self) -> &'static str {
        match self {
            Landing::Login => LOGIN_PATH,
            Landing::OwnerHome => OWNER_HOME_PATH,
            Landing::ClientHome => CLIENT_HOME_PATH,
        }
    }
}

/// Default landing route for a role.
pub fn landing_for(role: Role) -> Landing {
    match role {
        Role::Owner => Landing::OwnerHome,
        _ => Landing::ClientHome,
    }
}

/// Access rule declared by a route.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteAccess {
    /// No session required.
    Public,
    /// Any authenticated session.
    Authenticated,
    /// Authenticated with one of these roles.
    Roles(&'static [Role]),
}

impl RouteAccess {
    pub const OWNER: RouteAccess = RouteAccess::Roles(&[Role::Owner]);
    pub const CLIENT: RouteAccess = RouteAccess::Roles(&[Role::Client]);

    pub fn allows(&self, role: Role) -> bool {
        match self {
            RouteAccess::Public | RouteAccess::Authenticated => true,
            RouteAccess::Roles(roles) => roles.contains(&role),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardDecision {
    /// Show the waiting indicator and nothing else.
    Loading,
    Render,
    /// Replace the current history entry with this landing route.
    Redirect(Landing),
}

impl GuardDecision {
    pub fn redirect_path(&self) -> Option<&'static str> {
        match self {
            GuardDecision::Redirect(landing) => Some(landing.path()),
            _ => None,
        }
    }
}

pub fn guard(status: AuthStatus, access: RouteAccess) -> GuardDecision {
    if access == RouteAccess::Public {
        return GuardDecision::Render;
    }
    match status {
        AuthStatus::Loading => GuardDecision::Loading,
        AuthStatus::Anonymous => GuardDecision::Redirect(Landing::Login),
        AuthStatus::Authenticated(role) if !access.allows(role) => {
            GuardDecision::Redirect(landing_for(role))
        }
        AuthStatus::Authenticated(_) => GuardDecision::Render,
    }
}

/// Destination for `/` and unmatched paths.
pub fn home_redirect(status: AuthStatus) -> GuardDecision {
    match status {
        AuthStatus::Loading => GuardDecision::Loading,
        AuthStatus::Anonymous => GuardDecision::Redirect(Landing::Login),
        AuthStatus::Authenticated(role) => GuardDecision::Redirect(landing_for(role)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_ACCESS: [RouteAccess; 3] = [
        RouteAccess::Authenticated,
        RouteAccess::OWNER,
        RouteAccess::CLIENT,
    ];

    #[test]
    fn test_loading_wins_over_everything() {
        for access in ALL_ACCESS {
            assert_eq!(guard(AuthStatus::Loading, access), GuardDecision::Loading);
        }
        assert_eq!(home_redirect(AuthStatus::Loading), GuardDecision::Loading);
    }

    #[test]
    fn test_anonymous_redirects_to_login() {
        for access in ALL_ACCESS {
            let decision = guard(AuthStatus::Anonymous, access);
            assert_eq!(decision, GuardDecision::Redirect(Landing::Login));
            assert_eq!(decision.redirect_path(), Some("/login"));
        }
    }

    #[test]
    fn test_client_on_owner_route_goes_to_client_home() {
        let decision = guard(AuthStatus::Authenticated(Role::Client), RouteAccess::OWNER);
        assert_eq!(decision.redirect_path(), Some(CLIENT_HOME_PATH));
    }

    #[test]
    fn test_owner_on_client_route_goes_to_owner_home() {
        let decision = guard(AuthStatus::Authenticated(Role::Owner), RouteAccess::CLIENT);
        assert_eq!(decision.redirect_path(), Some("/owner"));
    }

    #[test]
    fn test_allowed_roles_render() {
        assert_eq!(
            guard(AuthStatus::Authenticated(Role::Owner), RouteAccess::OWNER),
            GuardDecision::Render
        );
        assert_eq!(
            guard(AuthStatus::Authenticated(Role::Client), RouteAccess::Authenticated),
            GuardDecision::Render
        );
        let both = RouteAccess::Roles(&[Role::Client, Role::Owner]);
        assert_eq!(
            guard(AuthStatus::Authenticated(Role::Owner), both),
            GuardDecision::Render
        );
    }

    #[test]
    fn test_public_routes_always_render() {
        for status in [
            AuthStatus::Loading,
            AuthStatus::Anonymous,
            AuthStatus::Authenticated(Role::Client),
        ] {
            assert_eq!(guard(status, RouteAccess::Public), GuardDecision::Render);
        }
    }

    #[test]
    fn test_home_redirect_matches_guard_mapping() {
        for role in [Role::Client, Role::Owner] {
            let home = home_redirect(AuthStatus::Authenticated(role));
            assert_eq!(home, GuardDecision::Redirect(landing_for(role)));

            // A mismatched protected route lands in the same place
            let other = if role == Role::Owner {
                RouteAccess::CLIENT
            } else {
                RouteAccess::OWNER
            };
            assert_eq!(guard(AuthStatus::Authenticated(role), other), home);
        }
        assert_eq!(
            home_redirect(AuthStatus::Anonymous),
            GuardDecision::Redirect(Landing::Login)
        );
    }
}
