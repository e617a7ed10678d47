//! Strengthen probability calculator view.
//!
//! Collects starting and target levels for the four affix slots and posts
//! them to `/mod/strengthen/probability`.

#[cfg(test)]
#[path = "strengthen_probability_test.rs"]
mod strengthen_probability_test;

use leptos::prelude::*;

use crate::components::{
    HologramButton, HologramCard, HologramCheckbox, HologramInputNumber, HologramRadioGroup, HologramTag,
    RadioOption, TagTone,
};
use crate::net::types::{MOD_SLOT_COUNT, StrengthenPath, StrengthenProbabilityRequest, StrengthenProbabilityResponse};
use crate::util::format::{format_count, format_percent, levels_label};

pub const MIN_LEVEL: u32 = 1;
pub const MAX_LEVEL: u32 = 5;

/// Paths rendered in the result card; the backend may return up to 100.
pub const MAX_RENDERED_PATHS: usize = 20;

pub const ORDER_INDEPENDENT: &str = "independent";
pub const ORDER_FIXED: &str = "fixed";

/// Whether a radio value means any slot may satisfy any target.
pub fn is_order_independent(mode: &str) -> bool {
    mode != ORDER_FIXED
}

/// Check form input and build the request body.
///
/// # Errors
///
/// Returns the message to show inline, mirroring the backend's checks.
pub fn validate_strengthen_input(
    initial: &[u32],
    target: &[u32],
    order_independent: bool,
    show_paths: bool,
) -> Result<StrengthenProbabilityRequest, &'static str> {
    if initial.len() != MOD_SLOT_COUNT || target.len() != MOD_SLOT_COUNT {
        return Err("必须提供4个词条的等级");
    }
    let level_range = MIN_LEVEL..=MAX_LEVEL;
    if initial.iter().any(|level| !level_range.contains(level)) {
        return Err("初始等级必须在1-5之间");
    }
    if target.iter().any(|level| !level_range.contains(level)) {
        return Err("目标等级必须在1-5之间");
    }
    if initial.iter().zip(target).any(|(from, to)| to < from) {
        return Err("目标等级不能低于初始等级");
    }
    // Both ranges were checked above, so every level fits in a u8.
    let to_levels = |levels: &[u32]| -> Vec<u8> {
        levels.iter().map(|&level| u8::try_from(level).unwrap_or(u8::MAX)).collect()
    };
    Ok(StrengthenProbabilityRequest {
        initial_levels: to_levels(initial),
        target_levels: to_levels(target),
        order_independent: Some(order_independent),
        show_paths: Some(show_paths),
    })
}

/// One-line description of a path's enhancement steps.
pub fn describe_path(path: &StrengthenPath) -> String {
    if path.steps.is_empty() {
        return "无需强化".to_owned();
    }
    path.steps
        .iter()
        .map(|step| format!("第{}次: 词条{}→{}级", step.step, step.slot + 1, step.new_level))
        .collect::<Vec<_>>()
        .join("，")
}

#[component]
pub fn StrengthenProbabilityPage() -> impl IntoView {
    let initial: [RwSignal<u32>; MOD_SLOT_COUNT] = std::array::from_fn(|_| RwSignal::new(MIN_LEVEL));
    let target: [RwSignal<u32>; MOD_SLOT_COUNT] = std::array::from_fn(|_| RwSignal::new(MIN_LEVEL));
    let order_mode = RwSignal::new(ORDER_INDEPENDENT.to_owned());
    let show_paths = RwSignal::new(false);
    let busy = RwSignal::new(false);
    let info = RwSignal::new(String::new());
    let result = RwSignal::new(None::<StrengthenProbabilityResponse>);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let initial_levels: Vec<u32> = initial.iter().map(|level| level.get()).collect();
        let target_levels: Vec<u32> = target.iter().map(|level| level.get()).collect();
        let request = match validate_strengthen_input(
            &initial_levels,
            &target_levels,
            is_order_independent(&order_mode.get()),
            show_paths.get(),
        ) {
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
            match crate::net::api::mods::calculate_strengthen_probability(&request).await {
                Ok(response) => result.set(Some(response)),
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

    let level_rows = (0..MOD_SLOT_COUNT)
        .map(|slot| {
            view! {
                <div class="level-row">
                    <span class="level-row__slot">{format!("词条 {}", slot + 1)}</span>
                    <HologramInputNumber
                        value=initial[slot]
                        min=MIN_LEVEL
                        max=MAX_LEVEL
                        label="初始"
                        disabled=busy
                    />
                    <HologramInputNumber
                        value=target[slot]
                        min=MIN_LEVEL
                        max=MAX_LEVEL
                        label="目标"
                        disabled=busy
                    />
                </div>
            }
        })
        .collect_view();

    let order_options = vec![
        RadioOption::new(ORDER_INDEPENDENT, "不限顺序"),
        RadioOption::new(ORDER_FIXED, "按词条位置"),
    ];

    view! {
        <div class="tool-page tool-page--strengthen">
            <HologramCard title="模组强化概率计算器" subtitle="计算随机强化后各词条达到目标等级的概率" glow=true>
                <form class="tool-form" on:submit=on_submit>
                    <div class="level-grid">{level_rows}</div>
                    <div class="tool-form__field">
                        <span class="tool-form__label">"匹配方式"</span>
                        <HologramRadioGroup name="order-mode" options=order_options selected=order_mode disabled=busy/>
                    </div>
                    <HologramCheckbox checked=show_paths label="显示强化路径" disabled=busy/>
                    <Show when=move || !info.get().is_empty()>
                        <p class="tool-form__message">{move || info.get()}</p>
                    </Show>
                    <HologramButton primary=true submit=true loading=busy>
                        "计算概率"
                    </HologramButton>
                </form>
            </HologramCard>
            {move || result.get().map(strengthen_result_view)}
        </div>
    }
}

fn strengthen_result_view(result: StrengthenProbabilityResponse) -> impl IntoView {
    let hidden = result.paths.len().saturating_sub(MAX_RENDERED_PATHS);
    let paths = result
        .paths
        .iter()
        .take(MAX_RENDERED_PATHS)
        .map(|path| {
            let (text, tone) = if path.success { ("成功", TagTone::Success) } else { ("失败", TagTone::Danger) };
            view! {
                <li class="result-list__item">
                    <HologramTag text=text tone=tone/>
                    <span class="result-list__levels">{levels_label(&path.final_levels)}</span>
                    <span class="result-list__steps">{describe_path(path)}</span>
                </li>
            }
        })
        .collect_view();

    view! {
        <HologramCard title="计算结果">
            <div class="result-summary">
                <span class="result-summary__percent">{format_percent(result.probability_percent)}</span>
            </div>
            <dl class="result-stats">
                <dt>"成功结果"</dt>
                <dd>{format_count(result.successful_outcomes)}</dd>
                <dt>"全部结果"</dt>
                <dd>{format_count(result.total_outcomes)}</dd>
            </dl>
            <ol class="result-list">{paths}</ol>
            {(hidden > 0).then(|| view! { <p class="result-note">{format!("另有 {hidden} 条路径未显示")}</p> })}
        </HologramCard>
    }
}
