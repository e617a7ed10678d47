//! Bounded integer input with step buttons.

#[cfg(test)]
#[path = "hologram_input_number_test.rs"]
mod hologram_input_number_test;

use leptos::prelude::*;

/// Parse typed text into a value clamped to `[min, max]`.
///
/// Returns `None` for text that is not a non-negative integer so the caller
/// can keep its previous value.
pub fn parse_clamped(raw: &str, min: u32, max: u32) -> Option<u32> {
    raw.trim().parse::<u32>().ok().map(|value| value.clamp(min, max))
}

/// Apply a `+1`/`-1` style step, saturating at the bounds.
pub fn step_value(current: u32, delta: i32, min: u32, max: u32) -> u32 {
    let next = i64::from(current) + i64::from(delta);
    let clamped = next.clamp(i64::from(min), i64::from(max));
    u32::try_from(clamped).unwrap_or(min)
}

#[component]
pub fn HologramInputNumber(
    value: RwSignal<u32>,
    min: u32,
    max: u32,
    #[prop(optional, into)] label: String,
    #[prop(optional, into)] disabled: MaybeProp<bool>,
) -> impl IntoView {
    let is_disabled = move || disabled.get().unwrap_or(false);
    let on_change = move |ev: leptos::ev::Event| {
        let raw = event_target_value(&ev);
        match parse_clamped(&raw, min, max) {
            Some(next) => value.set(next),
            // Re-render the last good value over the rejected text.
            None => value.set(value.get_untracked()),
        }
    };

    view! {
        <div class="holo-number">
            <span class="holo-number__label">{label}</span>
            <button
                type="button"
                class="holo-number__step"
                disabled={move || is_disabled() || value.get() <= min}
                on:click=move |_| value.update(|v| *v = step_value(*v, -1, min, max))
            >
                "−"
            </button>
            <input
                class="holo-number__input"
                type="number"
                inputmode="numeric"
                min=min.to_string()
                max=max.to_string()
                disabled=is_disabled
                prop:value=move || value.get().to_string()
                on:change=on_change
            />
            <button
                type="button"
                class="holo-number__step"
                disabled={move || is_disabled() || value.get() >= max}
                on:click=move |_| value.update(|v| *v = step_value(*v, 1, min, max))
            >
                "+"
            </button>
        </div>
    }
}
