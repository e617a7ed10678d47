//! Toggle checkbox with a holographic tick.

#[cfg(test)]
#[path = "hologram_checkbox_test.rs"]
mod hologram_checkbox_test;

use leptos::prelude::*;

#[component]
pub fn HologramCheckbox(
    checked: RwSignal<bool>,
    #[prop(into)] label: String,
    #[prop(optional, into)] hint: String,
    #[prop(optional, into)] disabled: MaybeProp<bool>,
) -> impl IntoView {
    let has_hint = !hint.is_empty();

    view! {
        <label class="holo-checkbox" class:holo-checkbox--checked=move || checked.get()>
            <input
                class="holo-checkbox__input"
                type="checkbox"
                disabled=move || disabled.get().unwrap_or(false)
                prop:checked=move || checked.get()
                on:change=move |ev| checked.set(event_target_checked(&ev))
            />
            <span class="holo-checkbox__box" aria-hidden="true"></span>
            <span class="holo-checkbox__label">{label}</span>
            <Show when=move || has_hint>
                <span class="holo-checkbox__hint">{hint.clone()}</span>
            </Show>
        </label>
    }
}
