//! Static project information.

use leptos::prelude::*;

use crate::components::HologramCard;

#[component]
pub fn AboutPage() -> impl IntoView {
    view! {
        <div class="about-page">
            <HologramCard title="关于" subtitle="OnceHuman 工具集">
                <p>"为《七日世界》玩家提供的模组计算工具。"</p>
                <p>"所有概率均由后端按游戏规则穷举计算，本页面只负责收集参数和展示结果。"</p>
                <ul class="about-page__list">
                    <li>"模组词条概率计算器：洗练时全部词条落在目标范围内的概率"</li>
                    <li>"模组强化概率计算器：随机强化后各词条达到目标等级的概率"</li>
                </ul>
            </HologramCard>
        </div>
    }
}
