//! Multi-select grid for choosing a target affix range.
//!
//! DESIGN
//! ======
//! Selection is kept as a sorted, duplicate-free id list so it can be posted
//! as `targetAffixIds` unchanged and compared cheaply in tests.

#[cfg(test)]
#[path = "affix_selector_test.rs"]
mod affix_selector_test;

use leptos::prelude::*;

use crate::components::ui::hologram_tag::{HologramTag, TagTone};
use crate::net::types::Affix;

/// Toggle `id` in a sorted selection. Adding past `max` is refused.
pub fn toggle_affix(selected: &[u32], id: u32, max: Option<usize>) -> Vec<u32> {
    let mut next = selected.to_vec();
    match next.binary_search(&id) {
        Ok(index) => {
            next.remove(index);
        }
        Err(index) => {
            if max.is_none_or(|max| next.len() < max) {
                next.insert(index, id);
            }
        }
    }
    next
}

/// Every id in `affixes`, sorted and capped at `max`.
pub fn select_all(affixes: &[Affix], max: Option<usize>) -> Vec<u32> {
    let mut ids: Vec<u32> = affixes.iter().map(|affix| affix.id).collect();
    ids.sort_unstable();
    ids.dedup();
    if let Some(max) = max {
        ids.truncate(max);
    }
    ids
}

#[component]
pub fn AffixSelector(
    #[prop(into)] affixes: Signal<Vec<Affix>>,
    selected: RwSignal<Vec<u32>>,
    #[prop(optional)] max: Option<usize>,
    #[prop(optional, into)] disabled: MaybeProp<bool>,
) -> impl IntoView {
    let is_disabled = move || disabled.get().unwrap_or(false);
    let summary = move || format!("已选 {} / {}", selected.get().len(), affixes.get().len());

    view! {
        <div class="affix-selector">
            <div class="affix-selector__toolbar">
                <span class="affix-selector__summary">{summary}</span>
                <button
                    type="button"
                    class="affix-selector__action"
                    disabled=is_disabled
                    on:click=move |_| selected.set(select_all(&affixes.get_untracked(), max))
                >
                    "全选"
                </button>
                <button
                    type="button"
                    class="affix-selector__action"
                    disabled=is_disabled
                    on:click=move |_| selected.set(Vec::new())
                >
                    "清空"
                </button>
            </div>
            <ul class="affix-selector__grid">
                <For
                    each=move || affixes.get()
                    key=|affix| affix.id
                    children=move |affix: Affix| {
                        let id = affix.id;
                        let is_selected = move || selected.with(|ids| ids.binary_search(&id).is_ok());
                        let tone = TagTone::for_category(affix.category.as_deref());
                        let title = affix.description.clone().unwrap_or_default();
                        view! {
                            <li>
                                <button
                                    type="button"
                                    class="affix-selector__item"
                                    class:affix-selector__item--selected=is_selected
                                    title=title
                                    disabled=is_disabled
                                    on:click=move |_| selected.update(|ids| *ids = toggle_affix(ids, id, max))
                                >
                                    <span class="affix-selector__id">{id}</span>
                                    <HologramTag text=affix.name.clone() tone=tone/>
                                </button>
                            </li>
                        }
                    }
                />
            </ul>
        </div>
    }
}
