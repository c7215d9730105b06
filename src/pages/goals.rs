use leptos::prelude::*;

use crate::components::nav_bar::NavBar;

#[component]
pub fn GoalsPage() -> impl IntoView {
    view! {
        <div class="page">
            <NavBar/>
            <main class="page__body">
                <h1>"Goals"</h1>
                <p class="page__empty">"No goals yet."</p>
            </main>
        </div>
    }
}
