// src/components/toast.rs
//
// MediClinic Web - Transient notifications
//

use gloo_timers::future::TimeoutFuture;
use leptos::*;

use crate::state::{ClinicState, ToastKind};

/// How long a notification stays on screen.
const TOAST_MILLIS: u32 = 4_500;

#[component]
pub fn Toasts(state: ClinicState) -> impl IntoView {
    view! {
        <div class="toast-stack">
            <For
                each=move || state.toasts.get()
                key=|toast| toast.id
                children=move |toast| {
                    let id = toast.id;
                    let title = toast.title.clone();
                    let message = toast.message.clone();
                    let has_message = !message.is_empty();

                    // Schedule expiry as the toast enters the view
                    spawn_local(async move {
                        TimeoutFuture::new(TOAST_MILLIS).await;
                        state.dismiss_toast(id);
                    });

                    let kind_class = match toast.kind {
                        ToastKind::Success => "toast toast-success",
                        ToastKind::Error => "toast toast-error",
                    };

                    view! {
                        <div class=kind_class>
                            <div class="toast-body">
                                <span class="toast-title">{title}</span>
                                <Show when=move || has_message fallback=|| view! {}>
                                    <span class="toast-message">{message.clone()}</span>
                                </Show>
                            </div>
                            <button class="toast-close" on:click=move |_| state.dismiss_toast(id)>
                                "×"
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
