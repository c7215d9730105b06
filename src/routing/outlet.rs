//! Router outlet that renders gate decisions.

use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::NavigateOptions;
use leptos_router::components::Redirect;
use leptos_router::hooks::use_location;

use super::gate::{ViewDecision, decide};
use super::table::{Page, RouteTable};
use crate::components::loading_placeholder::LoadingPlaceholder;
use crate::pages::{
    dashboard::DashboardPage, goals::GoalsPage, login::LoginPage, messages::MessagesPage, profile::ProfilePage,
    register::RegisterPage,
};
use crate::state::auth::AuthState;

/// Generic gated outlet mounted for every path.
///
/// Re-evaluates whenever the location or the auth signal changes.
#[component]
pub fn GateView() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let table = expect_context::<RouteTable>();
    let location = use_location();

    view! {
        {move || {
            let path = location.pathname.get();
            let decision = auth.with(|state| decide(&table, &path, state));
            log::debug!("gate {path}: {decision:?}");
            render_decision(decision)
        }}
    }
}

fn render_decision(decision: ViewDecision) -> AnyView {
    match decision {
        ViewDecision::RenderView(page) => render_page(page),
        ViewDecision::RedirectTo(target) => {
            let options = NavigateOptions { replace: true, ..NavigateOptions::default() };
            view! { <Redirect path=target options=options/> }.into_any()
        }
        ViewDecision::ShowLoadingPlaceholder(variant) => view! { <LoadingPlaceholder variant=variant/> }.into_any(),
        ViewDecision::RenderNothing => ().into_any(),
    }
}

fn render_page(page: Page) -> AnyView {
    let body = match page {
        Page::Login => view! { <LoginPage/> }.into_any(),
        Page::Register => view! { <RegisterPage/> }.into_any(),
        Page::Dashboard => view! { <DashboardPage/> }.into_any(),
        Page::Profile => view! { <ProfilePage/> }.into_any(),
        Page::Goals => view! { <GoalsPage/> }.into_any(),
        Page::Messages => view! { <MessagesPage/> }.into_any(),
    };
    view! {
        <Title text=format!("{} | Portal", page.title())/>
        {body}
    }
    .into_any()
}
