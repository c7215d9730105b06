//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Read by the route gate on every evaluation. Written only by the auth
//! provider (session check) and by the login, register and logout flows.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::types::User;

/// Authentication state tracking the current user and loading status.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthState {
    pub user: Option<User>,
    pub loading: bool,
}

impl AuthState {
    /// State at startup, before the session check has completed.
    pub fn resolving() -> Self {
        Self { user: None, loading: true }
    }

    /// State once the session check (or a login/logout) has completed.
    pub fn resolved(user: Option<User>) -> Self {
        Self { user, loading: false }
    }

    pub fn is_signed_in(&self) -> bool {
        self.user.is_some()
    }
}
