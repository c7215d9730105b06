//! Placeholder shown on gated routes while the session check is in flight.

use leptos::prelude::*;

use crate::routing::gate::{LOADING_TEXT, Placeholder};

#[component]
pub fn LoadingPlaceholder(variant: Placeholder) -> impl IntoView {
    view! { <div class=variant.class()>{LOADING_TEXT}</div> }
}
