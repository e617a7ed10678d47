//! Fallback view for unmatched paths.

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_location;

use crate::components::HologramCard;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    let location = use_location();

    view! {
        <div class="not-found-page">
            <HologramCard title="404" subtitle="页面未找到">
                <p class="not-found-page__path">{move || location.pathname.get()}</p>
                <A href="/">"返回首页"</A>
            </HologramCard>
        </div>
    }
}
