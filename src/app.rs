//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment, WildcardSegment,
    components::{Route, Router, Routes},
};

use crate::components::{auth_provider::AuthProvider, toast_container::ToastContainer};
use crate::config::AppConfig;
use crate::routing::outlet::GateView;
use crate::routing::table::RouteTable;
use crate::state::toast::ToastState;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides config, the route table and toast state, then mounts the auth
/// provider around a router whose every path goes through the gate.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = AppConfig::from_build_env().unwrap_or_else(|e| {
        log::warn!("{e}; falling back to default config");
        AppConfig::default()
    });
    let table = RouteTable::default();
    if let Err(e) = table.validate() {
        log::error!("{e}");
    }

    provide_context(config);
    provide_context(table);
    provide_context(RwSignal::new(ToastState::default()));

    view! {
        <Stylesheet id="leptos" href="/pkg/portal.css"/>
        <Title text="Portal"/>

        <AuthProvider>
            <ToastContainer/>
            <Router>
                <Routes fallback=|| view! { <GateView/> }>
                    <Route path=StaticSegment("") view=GateView/>
                    <Route path=WildcardSegment("any") view=GateView/>
                </Routes>
            </Router>
        </AuthProvider>
    }
}
