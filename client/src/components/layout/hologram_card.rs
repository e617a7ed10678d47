//! Framed panel used to group a section of a view.

use leptos::prelude::*;

#[component]
pub fn HologramCard(
    children: Children,
    #[prop(optional, into)] title: String,
    #[prop(optional, into)] subtitle: String,
    #[prop(optional)] glow: bool,
) -> impl IntoView {
    let header = (!title.is_empty()).then(|| {
        view! {
            <header class="holo-card__header">
                <h2 class="holo-card__title">{title}</h2>
                {(!subtitle.is_empty()).then(|| view! { <p class="holo-card__subtitle">{subtitle}</p> })}
            </header>
        }
    });

    view! {
        <section class="holo-card" class:holo-card--glow=glow>
            <span class="holo-card__corner holo-card__corner--tl" aria-hidden="true"></span>
            <span class="holo-card__corner holo-card__corner--br" aria-hidden="true"></span>
            {header}
            <div class="holo-card__body">{children()}</div>
        </section>
    }
}
