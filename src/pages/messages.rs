use leptos::prelude::*;

use crate::components::nav_bar::NavBar;

#[component]
pub fn MessagesPage() -> impl IntoView {
    view! {
        <div class="page">
            <NavBar/>
            <main class="page__body">
                <h1>"Messages"</h1>
                <p class="page__empty">"Your inbox is empty."</p>
            </main>
        </div>
    }
}
