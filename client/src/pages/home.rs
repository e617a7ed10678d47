//! Landing page with tool shortcuts and a backend status badge.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::{HologramCard, HologramTag, TagTone};
use crate::routes::RouteName;

/// Backend reachability as shown in the status badge.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BackendStatus {
    #[default]
    Checking,
    Online,
    Offline,
}

impl BackendStatus {
    pub fn label(self) -> &'static str {
        match self {
            Self::Checking => "检测中",
            Self::Online => "服务正常",
            Self::Offline => "服务不可用",
        }
    }

    pub fn tone(self) -> TagTone {
        match self {
            Self::Checking => TagTone::Neutral,
            Self::Online => TagTone::Success,
            Self::Offline => TagTone::Danger,
        }
    }
}

#[component]
pub fn HomePage() -> impl IntoView {
    let status = RwSignal::new(BackendStatus::Checking);

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let next = match crate::net::api::system::health_check().await {
            Ok(health) if health.is_ok() => BackendStatus::Online,
            _ => BackendStatus::Offline,
        };
        status.set(next);
    });

    let affix_href = RouteName::AffixProbability.path().unwrap_or("/tools");
    let strengthen_href = RouteName::StrengthenProbability.path().unwrap_or("/tools");

    view! {
        <div class="home-page">
            <section class="home-hero">
                <h1 class="home-hero__title">"OnceHuman 工具集"</h1>
                <p class="home-hero__subtitle">"模组词条与强化概率计算"</p>
                {move || {
                    let current = status.get();
                    view! { <HologramTag text=current.label() tone=current.tone()/> }
                }}
            </section>
            <div class="home-grid">
                <HologramCard title="模组词条概率计算器" subtitle="目标词条全部命中的概率">
                    <A href=affix_href>"开始计算"</A>
                </HologramCard>
                <HologramCard title="模组强化概率计算器" subtitle="随机强化达到目标等级的概率">
                    <A href=strengthen_href>"开始计算"</A>
                </HologramCard>
            </div>
        </div>
    }
}
