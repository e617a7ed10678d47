//! Tools section: catalogue sidebar around the nested tool routes.
//!
//! ARCHITECTURE
//! ============
//! `ToolsPage` is the parent route view. It fetches the catalogue once and
//! shares it through context so the index child can render the same list
//! without a second request.

#[cfg(test)]
#[path = "tools_test.rs"]
mod tools_test;

use leptos::prelude::*;
use leptos_router::components::{A, Outlet};

use crate::components::{HologramCard, HologramTag, TagTone};
use crate::net::types::Tool;

/// Tool catalogue as loaded from `/tools`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ToolCatalog {
    pub tools: Vec<Tool>,
    pub categories: Vec<String>,
    pub loading: bool,
}

impl ToolCatalog {
    /// Tools of `category`, in catalogue order.
    pub fn in_category(&self, category: &str) -> Vec<Tool> {
        self.tools.iter().filter(|tool| tool.category == category).cloned().collect()
    }

    /// Categories that contain at least one tool.
    pub fn populated_categories(&self) -> Vec<String> {
        self.categories
            .iter()
            .filter(|category| self.tools.iter().any(|tool| &tool.category == *category))
            .cloned()
            .collect()
    }
}

/// Display label for a category slug.
pub fn category_label(category: &str) -> &str {
    match category {
        "mod" => "模组",
        "weapon" => "武器",
        "character" => "角色",
        other => other,
    }
}

#[component]
pub fn ToolsPage() -> impl IntoView {
    let catalog = RwSignal::new(ToolCatalog { loading: true, ..ToolCatalog::default() });
    provide_context(catalog);

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        match crate::net::api::tools::get_tools_list().await {
            Ok(list) => catalog.set(ToolCatalog { tools: list.tools, categories: list.categories, loading: false }),
            Err(_) => catalog.update(|c| c.loading = false),
        }
    });

    view! {
        <div class="tools-layout">
            <aside class="tools-layout__sidebar">
                <h2 class="tools-layout__heading">"工具"</h2>
                <Show when=move || catalog.get().loading>
                    <p class="tools-layout__loading">"加载中..."</p>
                </Show>
                {move || {
                    let current = catalog.get();
                    current
                        .populated_categories()
                        .into_iter()
                        .map(|category| {
                            let tools = current.in_category(&category);
                            view! {
                                <nav class="tools-nav">
                                    <h3 class="tools-nav__category">{category_label(&category).to_owned()}</h3>
                                    {tools
                                        .into_iter()
                                        .map(|tool| view! { <A href=tool.href()>{tool.name}</A> })
                                        .collect_view()}
                                </nav>
                            }
                        })
                        .collect_view()
                }}
            </aside>
            <section class="tools-layout__content">
                <Outlet/>
            </section>
        </div>
    }
}

/// Index child of `/tools`: one card per available tool.
#[component]
pub fn ToolsIndex() -> impl IntoView {
    let catalog = expect_context::<RwSignal<ToolCatalog>>();

    view! {
        <div class="tools-index">
            <For
                each=move || catalog.get().tools
                key=|tool| tool.id.clone()
                children=move |tool: Tool| {
                    let href = tool.href();
                    view! {
                        <HologramCard title=tool.name.clone() subtitle=tool.description.clone().unwrap_or_default()>
                            <HologramTag text=category_label(&tool.category).to_owned() tone=TagTone::Accent/>
                            <A href=href>"打开"</A>
                        </HologramCard>
                    }
                }
            />
        </div>
    }
}
