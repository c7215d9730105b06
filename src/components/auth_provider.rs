//! Session bootstrap.
//!
//! SYSTEM CONTEXT
//! ==============
//! Owns the `RwSignal<AuthState>` that the route gate reads. Starts in the
//! resolving state and, in the browser, asks `/api/auth/me` once. The
//! server render never resolves, so SSR output shows placeholders and
//! hydration picks up from there.

use leptos::prelude::*;

use crate::state::auth::AuthState;

#[component]
pub fn AuthProvider(children: Children) -> impl IntoView {
    let auth = RwSignal::new(AuthState::resolving());
    provide_context(auth);

    #[cfg(feature = "hydrate")]
    {
        let config = expect_context::<crate::config::AppConfig>();
        leptos::task::spawn_local(async move {
            let user = match crate::net::api::fetch_current_user(&config.api_base).await {
                Ok(user) => user,
                Err(e) => {
                    log::warn!("session check failed: {e}");
                    None
                }
            };
            log::debug!("session resolved; signed_in={}", user.is_some());
            auth.set(AuthState::resolved(user));
        });
    }

    children()
}
