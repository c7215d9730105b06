//! Toast overlay and the `notify` helper used by pages.

use leptos::prelude::*;

use crate::config::{AppConfig, ToastConfig};
use crate::state::toast::{Toast, ToastKind, ToastState};

/// Queue a toast and schedule its auto-close.
pub fn notify(toasts: RwSignal<ToastState>, config: ToastConfig, kind: ToastKind, message: impl Into<String>) {
    let message = message.into();
    log::debug!("toast {kind:?}: {message}");
    let Some(id) = toasts.try_update(|t| t.push(kind, message)) else {
        return;
    };

    #[cfg(feature = "hydrate")]
    {
        if config.auto_close_ms > 0 {
            leptos::task::spawn_local(async move {
                gloo_timers::future::TimeoutFuture::new(config.auto_close_ms).await;
                toasts.update(|t| t.dismiss(id));
            });
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (config, id);
    }
}

/// Renders queued toasts; clicking a toast dismisses it.
#[component]
pub fn ToastContainer() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();
    let config = expect_context::<AppConfig>();

    view! {
        <div class=config.toast.position.class() role="status" aria-live="polite">
            <For
                each=move || toasts.get().items
                key=|toast| toast.id
                children=move |toast: Toast| {
                    let id = toast.id;
                    view! {
                        <div class=toast.kind.class() on:click=move |_| toasts.update(|t| t.dismiss(id))>
                            {toast.message}
                        </div>
                    }
                }
            />
        </div>
    }
}
