//! Range slider with a glowing fill track.

#[cfg(test)]
#[path = "hologram_slider_test.rs"]
mod hologram_slider_test;

use leptos::prelude::*;

/// Share of the track filled for `value` within `[min, max]`, in percent.
pub fn fill_percent(value: u32, min: u32, max: u32) -> f64 {
    if max <= min {
        return 100.0;
    }
    let clamped = value.clamp(min, max);
    f64::from(clamped - min) / f64::from(max - min) * 100.0
}

/// Integer range slider bound to `value`.
#[component]
pub fn HologramSlider(
    value: RwSignal<u32>,
    min: u32,
    max: u32,
    #[prop(default = 1)] step: u32,
    #[prop(optional, into)] label: String,
    #[prop(optional, into)] disabled: MaybeProp<bool>,
) -> impl IntoView {
    let on_input = move |ev: leptos::ev::Event| {
        if let Ok(next) = event_target_value(&ev).parse::<u32>() {
            value.set(next.clamp(min, max));
        }
    };

    view! {
        <label class="holo-slider">
            <span class="holo-slider__label">{label}</span>
            <input
                class="holo-slider__input"
                type="range"
                min=min.to_string()
                max=max.to_string()
                step=step.to_string()
                disabled=move || disabled.get().unwrap_or(false)
                prop:value=move || value.get().to_string()
                style=move || format!("--holo-fill: {:.1}%", fill_percent(value.get(), min, max))
                on:input=on_input
            />
            <span class="holo-slider__value">{move || value.get()}</span>
        </label>
    }
}
