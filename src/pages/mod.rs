//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Pages never check auth themselves; the route gate only mounts a page
//! once its access rule is satisfied.

pub mod dashboard;
pub mod goals;
pub mod login;
pub mod messages;
pub mod profile;
pub mod register;
