//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`auth`, `toast`) and provided to components
//! as `RwSignal`s through Leptos context.

pub mod auth;
pub mod toast;
