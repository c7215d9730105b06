//! Route table mapping paths to access rules and pages.

#[cfg(test)]
#[path = "table_test.rs"]
mod table_test;

use std::collections::HashSet;

use super::GateError;

pub const ROOT_PATH: &str = "/";
pub const LOGIN_PATH: &str = "/login";
pub const LANDING_PATH: &str = "/dashboard";

/// Screens the router can render.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Page {
    Login,
    Register,
    Dashboard,
    Profile,
    Goals,
    Messages,
}

impl Page {
    /// Document title shown while the page is active.
    pub fn title(self) -> &'static str {
        match self {
            Self::Login => "Sign in",
            Self::Register => "Create account",
            Self::Dashboard => "Dashboard",
            Self::Profile => "Profile",
            Self::Goals => "Goals",
            Self::Messages => "Messages",
        }
    }
}

/// Who may see a route.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Access {
    /// Anonymous visitors only. Signed-in users go to the landing page.
    PublicOnly,
    /// Signed-in users only. Anonymous visitors go to the login page.
    Protected,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RouteEntry {
    pub path: String,
    pub access: Access,
    pub page: Page,
}

/// Result of looking a path up in the table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Lookup<'a> {
    Root,
    Entry(&'a RouteEntry),
    Unmatched,
}

/// Ordered route entries plus the three paths the gate redirects to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RouteTable {
    entries: Vec<RouteEntry>,
    root: String,
    login: String,
    landing: String,
}

impl Default for RouteTable {
    fn default() -> Self {
        Self::new(ROOT_PATH, LOGIN_PATH, LANDING_PATH)
            .with_route("/login", Access::PublicOnly, Page::Login)
            .with_route("/register", Access::PublicOnly, Page::Register)
            .with_route("/dashboard", Access::Protected, Page::Dashboard)
            .with_route("/profile", Access::Protected, Page::Profile)
            .with_route("/goals", Access::Protected, Page::Goals)
            .with_route("/messages", Access::Protected, Page::Messages)
    }
}

impl RouteTable {
    /// Empty table with the given root, login and landing paths.
    pub fn new(root: &str, login: &str, landing: &str) -> Self {
        Self {
            entries: Vec::new(),
            root: normalize_path(root),
            login: normalize_path(login),
            landing: normalize_path(landing),
        }
    }

    #[must_use]
    pub fn with_route(mut self, path: &str, access: Access, page: Page) -> Self {
        self.entries.push(RouteEntry { path: normalize_path(path), access, page });
        self
    }

    pub fn root(&self) -> &str {
        &self.root
    }

    pub fn login(&self) -> &str {
        &self.login
    }

    pub fn landing(&self) -> &str {
        &self.landing
    }

    pub fn entries(&self) -> &[RouteEntry] {
        &self.entries
    }

    /// Find the rule for `path`. The first matching entry wins.
    pub fn lookup(&self, path: &str) -> Lookup<'_> {
        let path = normalize_path(path);
        if path == self.root {
            return Lookup::Root;
        }
        self.entries
            .iter()
            .find(|entry| entry.path == path)
            .map_or(Lookup::Unmatched, Lookup::Entry)
    }

    /// Check that the table is well formed.
    ///
    /// # Errors
    ///
    /// Returns `GateError::InvalidTable` for duplicate paths, an entry that
    /// shadows the root, a login path that is not a public-only route, or a
    /// landing path that is not a protected route.
    pub fn validate(&self) -> Result<(), GateError> {
        let access_of = |path: &str| self.entries.iter().find(|e| e.path == path).map(|e| e.access);
        if access_of(&self.login) != Some(Access::PublicOnly) {
            return Err(GateError::InvalidTable(format!("login path `{}` is not a public-only route", self.login)));
        }
        if access_of(&self.landing) != Some(Access::Protected) {
            return Err(GateError::InvalidTable(format!("landing path `{}` is not a protected route", self.landing)));
        }

        let mut seen = HashSet::new();
        for entry in &self.entries {
            if entry.path == self.root {
                return Err(GateError::InvalidTable(format!("route `{}` shadows the root", entry.path)));
            }
            if !seen.insert(entry.path.as_str()) {
                return Err(GateError::InvalidTable(format!("duplicate route `{}`", entry.path)));
            }
        }
        Ok(())
    }
}

/// Canonical form used for matching.
///
/// Drops the query string and fragment, strips trailing slashes, ensures a
/// leading slash and lowercases ASCII. The empty path becomes `/`.
pub fn normalize_path(raw: &str) -> String {
    let end = raw.find(['?', '#']).unwrap_or(raw.len());
    let trimmed = raw[..end].trim().trim_end_matches('/');
    let mut path = String::with_capacity(trimmed.len() + 1);
    if !trimmed.starts_with('/') {
        path.push('/');
    }
    path.push_str(trimmed);
    path.make_ascii_lowercase();
    path
}
