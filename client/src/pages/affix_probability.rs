//! Affix probability calculator view.
//!
//! SYSTEM CONTEXT
//! ==============
//! Loads the affix pool once on mount, collects slot count and target range,
//! and posts them to `/mod/affix/probability`. Inputs are checked locally with
//! the backend's own rules first so obvious mistakes never cost a round-trip;
//! anything the backend still rejects arrives as a toast.

#[cfg(test)]
#[path = "affix_probability_test.rs"]
mod affix_probability_test;

use leptos::prelude::*;

use crate::components::{AffixSelector, HologramButton, HologramCard, HologramCheckbox, HologramSlider, HologramTag, TagTone};
use crate::net::types::{Affix, AffixProbabilityRequest, AffixProbabilityResponse};
use crate::util::format::{combination_label, format_count, format_percent};

/// Size of the affix pool a mod rolls from.
pub const AFFIX_POOL_SIZE: u32 = 10;

/// Slot count preselected on first render.
pub const DEFAULT_SLOT_COUNT: u32 = 4;

/// Backend only enumerates combinations up to this many.
pub const MAX_LISTED_COMBINATIONS: u64 = 1_000;

/// Check form input and build the request body.
///
/// # Errors
///
/// Returns the message to show inline when the slot count is out of range or
/// no target id falls inside the affix pool.
pub fn validate_affix_input(
    slot_count: u32,
    target_ids: &[u32],
    show_combinations: bool,
) -> Result<AffixProbabilityRequest, &'static str> {
    if !(1..=AFFIX_POOL_SIZE).contains(&slot_count) {
        return Err("词条数量必须在1-10之间");
    }
    let mut targets: Vec<u32> = target_ids
        .iter()
        .copied()
        .filter(|id| (1..=AFFIX_POOL_SIZE).contains(id))
        .collect();
    targets.sort_unstable();
    targets.dedup();
    if targets.is_empty() {
        return Err("目标范围中没有有效的词条编号");
    }
    Ok(AffixProbabilityRequest { slot_count, target_affix_ids: targets, show_combinations: Some(show_combinations) })
}

/// Hint shown under the result when combinations were requested but omitted.
pub fn combinations_note(result: &AffixProbabilityResponse, requested: bool) -> Option<String> {
    if !requested || !result.combinations.is_empty() {
        return None;
    }
    if result.valid_combinations == 0 {
        Some("没有满足条件的组合".to_owned())
    } else if result.valid_combinations > MAX_LISTED_COMBINATIONS {
        Some(format!("组合数超过 {MAX_LISTED_COMBINATIONS}，不予列出"))
    } else {
        None
    }
}

#[component]
pub fn AffixProbabilityPage() -> impl IntoView {
    let affixes = RwSignal::new(Vec::<Affix>::new());
    let slot_count = RwSignal::new(DEFAULT_SLOT_COUNT);
    let targets = RwSignal::new(Vec::<u32>::new());
    let show_combinations = RwSignal::new(false);
    let busy = RwSignal::new(false);
    let info = RwSignal::new(String::new());
    let result = RwSignal::new(None::<(AffixProbabilityResponse, bool)>);

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        if let Ok(list) = crate::net::api::mods::get_affix_list().await {
            affixes.set(list.affixes);
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let wants_combinations = show_combinations.get();
        let request = match validate_affix_input(slot_count.get(), &targets.get(), wants_combinations) {
            Ok(request) => request,
            Err(message) => {
                info.set(message.to_owned());
                return;
            }
        };
        info.set(String::new());
        busy.set(true);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            // Failures were already toasted; only clear the stale result here.
            match crate::net::api::mods::calculate_affix_probability(&request).await {
                Ok(response) => result.set(Some((response, wants_combinations))),
                Err(_) => result.set(None),
            }
            busy.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = request;
            busy.set(false);
        }
    };

    view! {
        <div class="tool-page tool-page--affix">
            <HologramCard title="模组词条概率计算器" subtitle="计算一次洗练中全部词条落在目标范围内的概率" glow=true>
                <form class="tool-form" on:submit=on_submit>
                    <HologramSlider
                        value=slot_count
                        min=1
                        max=AFFIX_POOL_SIZE
                        label="词条数量"
                        disabled=busy
                    />
                    <div class="tool-form__field">
                        <span class="tool-form__label">"目标词条"</span>
                        <AffixSelector affixes=affixes selected=targets disabled=busy/>
                    </div>
                    <HologramCheckbox
                        checked=show_combinations
                        label="显示所有满足条件的组合"
                        hint="组合数不超过1000时列出"
                        disabled=busy
                    />
                    <Show when=move || !info.get().is_empty()>
                        <p class="tool-form__message">{move || info.get()}</p>
                    </Show>
                    <HologramButton primary=true submit=true loading=busy>
                        "计算概率"
                    </HologramButton>
                </form>
            </HologramCard>
            {move || {
                result.get().map(|(response, requested)| affix_result_view(response, requested, affixes.get()))
            }}
        </div>
    }
}

fn affix_result_view(result: AffixProbabilityResponse, requested: bool, affixes: Vec<Affix>) -> impl IntoView {
    let note = combinations_note(&result, requested);
    let range = combination_label(&result.target_range, &affixes);
    let rows = result
        .combinations
        .iter()
        .map(|combo| view! { <li class="result-list__item">{combination_label(combo, &affixes)}</li> })
        .collect_view();

    view! {
        <HologramCard title="计算结果">
            <div class="result-summary">
                <span class="result-summary__percent">{format_percent(result.probability_percent)}</span>
                <HologramTag text=format!("{} 个词条", result.slot_count) tone=TagTone::Accent/>
            </div>
            <dl class="result-stats">
                <dt>"目标范围"</dt>
                <dd>{range}</dd>
                <dt>"满足条件的组合"</dt>
                <dd>{format_count(result.valid_combinations)}</dd>
                <dt>"全部组合"</dt>
                <dd>{format_count(result.total_combinations)}</dd>
            </dl>
            {note.map(|note| view! { <p class="result-note">{note}</p> })}
            <ol class="result-list">{rows}</ol>
        </HologramCard>
    }
}
