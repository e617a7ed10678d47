//! Fixed-position stack rendering the global toast queue.

use leptos::prelude::*;

use crate::state::toast::{Toast, ToastState};

#[component]
pub fn ToastHost() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();

    view! {
        <div class="toast-host" aria-live="polite">
            <For
                each=move || toasts.get().items
                key=|toast| toast.id
                children=move |toast: Toast| {
                    let id = toast.id;
                    let class = format!("toast {}", toast.level.css_modifier());
                    view! {
                        <div class=class role="status">
                            <span class="toast__message">{toast.message}</span>
                            <button
                                type="button"
                                class="toast__close"
                                aria-label="dismiss"
                                on:click=move |_| toasts.update(|state| state.dismiss(id))
                            >
                                "×"
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
