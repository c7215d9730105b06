//! Profile page showing the signed-in user's details.

use leptos::prelude::*;

use crate::components::nav_bar::NavBar;
use crate::state::auth::AuthState;

#[component]
pub fn ProfilePage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let field = move |pick: fn(&crate::net::types::User) -> String| {
        move || auth.with(|state| state.user.as_ref().map(pick).unwrap_or_default())
    };

    view! {
        <div class="page">
            <NavBar/>
            <main class="page__body">
                <h1>"Profile"</h1>
                <dl class="profile">
                    <dt>"Name"</dt>
                    <dd>{field(|u| u.name.clone())}</dd>
                    <dt>"Email"</dt>
                    <dd>{field(|u| u.email.clone())}</dd>
                </dl>
            </main>
        </div>
    }
}
