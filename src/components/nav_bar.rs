//! Navigation bar shown on protected pages.

use leptos::prelude::*;
use leptos_router::components::A;

#[cfg(feature = "hydrate")]
use crate::components::toast_container::notify;
use crate::config::AppConfig;
use crate::routing::table::{Access, RouteTable};
use crate::state::auth::AuthState;
#[cfg(feature = "hydrate")]
use crate::state::toast::ToastKind;
use crate::state::toast::ToastState;

/// Links to every protected route plus a sign-out button.
///
/// Signing out clears the user; the route gate then sends the visitor to
/// the login page.
#[component]
pub fn NavBar() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let config = expect_context::<AppConfig>();
    let table = expect_context::<RouteTable>();
    let busy = RwSignal::new(false);

    let links = table
        .entries()
        .iter()
        .filter(|entry| entry.access == Access::Protected)
        .map(|entry| {
            let href = entry.path.clone();
            let title = entry.page.title();
            view! { <A href=href attr:class="nav-bar__link">{title}</A> }
        })
        .collect::<Vec<_>>();

    let on_logout = move |_| {
        if busy.get() {
            return;
        }
        busy.set(true);

        #[cfg(feature = "hydrate")]
        {
            let config = config.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::logout(&config.api_base).await {
                    Ok(()) => {
                        notify(toasts, config.toast, ToastKind::Info, "Signed out.");
                        auth.set(AuthState::resolved(None));
                    }
                    Err(e) => {
                        log::warn!("logout failed: {e}");
                        notify(toasts, config.toast, ToastKind::Error, format!("Sign out failed: {e}"));
                    }
                }
                busy.set(false);
            });
        }

        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&config, auth, toasts);
            busy.set(false);
        }
    };

    view! {
        <nav class="nav-bar">
            <div class="nav-bar__links">{links}</div>
            <span class="nav-bar__user">
                {move || auth.with(|state| state.user.as_ref().map(|u| u.name.clone()).unwrap_or_default())}
            </span>
            <button class="btn nav-bar__logout" on:click=on_logout disabled=move || busy.get()>
                "Sign out"
            </button>
        </nav>
    }
}
