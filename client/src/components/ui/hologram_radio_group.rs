//! Segmented single-choice selector.

#[cfg(test)]
#[path = "hologram_radio_group_test.rs"]
mod hologram_radio_group_test;

use leptos::prelude::*;

/// One choice in a [`HologramRadioGroup`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RadioOption {
    pub value: String,
    pub label: String,
}

impl RadioOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self { value: value.into(), label: label.into() }
    }
}

#[component]
pub fn HologramRadioGroup(
    #[prop(into)] name: String,
    options: Vec<RadioOption>,
    selected: RwSignal<String>,
    #[prop(optional, into)] disabled: MaybeProp<bool>,
) -> impl IntoView {
    view! {
        <div class="holo-radio-group" role="radiogroup">
            {options
                .into_iter()
                .map(|option| {
                    let value = option.value.clone();
                    let is_selected = {
                        let value = value.clone();
                        move || selected.get() == value
                    };
                    let mark_selected = is_selected.clone();
                    view! {
                        <label class="holo-radio" class:holo-radio--selected=mark_selected>
                            <input
                                class="holo-radio__input"
                                type="radio"
                                name=name.clone()
                                value=value.clone()
                                disabled=move || disabled.get().unwrap_or(false)
                                prop:checked=is_selected
                                on:change=move |_| selected.set(value.clone())
                            />
                            <span class="holo-radio__label">{option.label}</span>
                        </label>
                    }
                })
                .collect_view()}
        </div>
    }
}
