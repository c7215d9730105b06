//! Gate decision function.
//!
//! `decide` maps a requested path and the current auth state to exactly one
//! view decision. It is total: unknown paths redirect to the root, and the
//! root rule always lands on either the login or the landing path.
//!
//! The root path renders nothing while auth is loading, whereas gated
//! routes show a placeholder. Public-only and protected routes use
//! different placeholder styles.

#[cfg(test)]
#[path = "gate_test.rs"]
mod gate_test;

use super::GateError;
use super::table::{Access, Lookup, Page, RouteTable, normalize_path};
use crate::state::auth::AuthState;

/// Upper bound on redirects followed by `settle`.
pub const MAX_REDIRECT_HOPS: usize = 8;

pub const LOADING_TEXT: &str = "Loading...";

/// Loading placeholder variants.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Placeholder {
    /// Centered in the full viewport; used on public-only routes.
    FullScreen,
    /// Padded inline text; used on protected routes.
    Inline,
}

impl Placeholder {
    pub fn class(self) -> &'static str {
        match self {
            Self::FullScreen => "min-h-screen flex items-center justify-center text-primary",
            Self::Inline => "p-10 text-center",
        }
    }
}

/// What the router outlet should show.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ViewDecision {
    ShowLoadingPlaceholder(Placeholder),
    RenderView(Page),
    /// Navigate to the path, replacing the current history entry.
    RedirectTo(String),
    RenderNothing,
}

/// Decide what to show for `path` given `auth`.
pub fn decide(table: &RouteTable, path: &str, auth: &AuthState) -> ViewDecision {
    let signed_in = auth.is_signed_in();
    match table.lookup(path) {
        Lookup::Root => {
            if auth.loading {
                ViewDecision::RenderNothing
            } else if signed_in {
                ViewDecision::RedirectTo(table.landing().to_owned())
            } else {
                ViewDecision::RedirectTo(table.login().to_owned())
            }
        }
        Lookup::Entry(entry) => match entry.access {
            Access::PublicOnly => {
                if auth.loading {
                    ViewDecision::ShowLoadingPlaceholder(Placeholder::FullScreen)
                } else if signed_in {
                    ViewDecision::RedirectTo(table.landing().to_owned())
                } else {
                    ViewDecision::RenderView(entry.page)
                }
            }
            Access::Protected => {
                if auth.loading {
                    ViewDecision::ShowLoadingPlaceholder(Placeholder::Inline)
                } else if signed_in {
                    ViewDecision::RenderView(entry.page)
                } else {
                    ViewDecision::RedirectTo(table.login().to_owned())
                }
            }
        },
        Lookup::Unmatched => ViewDecision::RedirectTo(table.root().to_owned()),
    }
}

/// Terminal decision reached by following redirects.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Settled {
    pub decision: ViewDecision,
    /// Normalized paths visited, starting with the requested one.
    pub hops: Vec<String>,
}

impl Settled {
    pub fn redirects(&self) -> usize {
        self.hops.len().saturating_sub(1)
    }

    pub fn final_path(&self) -> &str {
        self.hops.last().map_or("/", String::as_str)
    }
}

/// Follow redirects from `path` until a non-redirect decision.
///
/// # Errors
///
/// Returns `GateError::RedirectLoop` when a redirect revisits a path or the
/// chain exceeds `MAX_REDIRECT_HOPS`.
pub fn settle(table: &RouteTable, path: &str, auth: &AuthState) -> Result<Settled, GateError> {
    let mut current = normalize_path(path);
    let mut hops = vec![current.clone()];
    loop {
        let target = match decide(table, &current, auth) {
            ViewDecision::RedirectTo(target) => normalize_path(&target),
            decision => return Ok(Settled { decision, hops }),
        };
        let revisit = hops.contains(&target);
        hops.push(target.clone());
        if revisit || hops.len() > MAX_REDIRECT_HOPS + 1 {
            return Err(GateError::RedirectLoop { hops });
        }
        current = target;
    }
}
