//! Reusable UI components shared across pages.

pub mod auth_provider;
pub mod loading_placeholder;
pub mod nav_bar;
pub mod toast_container;
