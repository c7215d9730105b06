//! Dashboard page, the landing screen after sign-in.

use leptos::prelude::*;

use crate::components::nav_bar::NavBar;
use crate::state::auth::AuthState;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let greeting = move || {
        auth.with(|state| match &state.user {
            Some(user) => format!("Welcome, {}!", user.name),
            None => "Welcome!".to_owned(),
        })
    };

    view! {
        <div class="page">
            <NavBar/>
            <main class="page__body">
                <h1>{greeting}</h1>
                <p>"Pick a section above to get started."</p>
            </main>
        </div>
    }
}
