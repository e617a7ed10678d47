//! Glowing action button with an optional busy spinner.

#[cfg(test)]
#[path = "hologram_button_test.rs"]
mod hologram_button_test;

use leptos::prelude::*;

/// Hologram-styled button.
///
/// While `loading` is true the button is disabled and shows a spinner, so a
/// submit cannot be fired twice while a request is in flight.
#[component]
pub fn HologramButton(
    children: Children,
    #[prop(optional)] primary: bool,
    #[prop(optional)] submit: bool,
    #[prop(optional, into)] disabled: MaybeProp<bool>,
    #[prop(optional, into)] loading: MaybeProp<bool>,
    #[prop(optional)] on_click: Option<Callback<()>>,
) -> impl IntoView {
    let is_loading = move || loading.get().unwrap_or(false);
    let is_disabled = move || disabled.get().unwrap_or(false) || is_loading();
    let button_type = if submit { "submit" } else { "button" };

    view! {
        <button
            type=button_type
            class="holo-button"
            class:holo-button--primary=primary
            class:holo-button--loading=is_loading
            disabled=is_disabled
            on:click=move |_| {
                if let Some(on_click) = on_click.as_ref() {
                    on_click.run(());
                }
            }
        >
            <Show when=is_loading>
                <span class="holo-button__spinner" aria-hidden="true"></span>
            </Show>
            <span class="holo-button__label">{children()}</span>
        </button>
    }
}
