//! Small label chip, optionally dismissable.

#[cfg(test)]
#[path = "hologram_tag_test.rs"]
mod hologram_tag_test;

use leptos::prelude::*;

/// Colour variant of a [`HologramTag`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TagTone {
    #[default]
    Neutral,
    Accent,
    Success,
    Danger,
}

impl TagTone {
    pub fn css_modifier(self) -> &'static str {
        match self {
            Self::Neutral => "holo-tag--neutral",
            Self::Accent => "holo-tag--accent",
            Self::Success => "holo-tag--success",
            Self::Danger => "holo-tag--danger",
        }
    }

    /// Tone conventionally used for an affix category.
    pub fn for_category(category: Option<&str>) -> Self {
        match category {
            Some("damage") => Self::Danger,
            Some("defense") => Self::Success,
            Some("utility") => Self::Accent,
            _ => Self::Neutral,
        }
    }
}

#[component]
pub fn HologramTag(
    #[prop(into)] text: String,
    #[prop(optional)] tone: TagTone,
    #[prop(optional)] on_close: Option<Callback<()>>,
) -> impl IntoView {
    let class = format!("holo-tag {}", tone.css_modifier());

    view! {
        <span class=class>
            <span class="holo-tag__text">{text}</span>
            {on_close
                .map(|on_close| {
                    view! {
                        <button
                            type="button"
                            class="holo-tag__close"
                            aria-label="remove"
                            on:click=move |_| on_close.run(())
                        >
                            "×"
                        </button>
                    }
                })}
        </span>
    }
}
