//! Route gating: which view a visitor sees for a path and auth state.
//!
//! SYSTEM CONTEXT
//! ==============
//! `table` holds the path → access rule → page mapping as plain data,
//! `gate` turns (path, auth state) into a `ViewDecision`, and `outlet`
//! renders that decision inside the Leptos router.
//!
//! DESIGN
//! ======
//! The decision logic never touches signals or the DOM, so every access
//! rule is testable as a plain function. The outlet is the only part that
//! knows about Leptos.

pub mod gate;
pub mod outlet;
pub mod table;

/// Errors from route table validation and redirect settling.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GateError {
    #[error("redirect loop: {}", hops.join(" -> "))]
    RedirectLoop { hops: Vec<String> },
    #[error("invalid route table: {0}")]
    InvalidTable(String),
}
