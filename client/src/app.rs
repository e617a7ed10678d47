//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    components::{A, ParentRoute, Route, Router, Routes},
    hooks::use_location,
};

use crate::components::ToastHost;
use crate::pages::{
    about::AboutPage,
    affix_probability::AffixProbabilityPage,
    home::HomePage,
    not_found::NotFoundPage,
    strengthen_probability::StrengthenProbabilityPage,
    tools::{ToolsIndex, ToolsPage},
};
use crate::routes::{self, APP_TITLE, Segment};
use crate::state::toast::ToastState;
use crate::util::scroll;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="zh-CN">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the toast queue, routes API failures into it, and declares the
/// route tree mirrored by [`routes::ROUTES`].
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let toasts = RwSignal::new(ToastState::default());
    provide_context(toasts);

    #[cfg(feature = "hydrate")]
    {
        crate::state::toast::install_sink(move |level, message| {
            let mut id = 0;
            toasts.update(|state| id = state.push(level, message));
            gloo_timers::callback::Timeout::new(crate::state::toast::TOAST_DURATION_MS, move || {
                toasts.update(|state| state.dismiss(id));
            })
            .forget();
        });
        // The sink writes into this component's signal; drop it with the app.
        on_cleanup(crate::state::toast::clear_sink);
    }

    view! {
        <Stylesheet id="leptos" href="/pkg/oncehuman-tools.css"/>

        <Router>
            <NavigationGuard/>
            <header class="app-header">
                <A href="/">{APP_TITLE}</A>
                <nav class="app-header__nav">
                    <A href="/tools">"工具"</A>
                    <A href="/about">"关于"</A>
                </nav>
            </header>
            <main class="app-main">
                <Routes fallback=NotFoundPage>
                    <Route path=Segment("") view=HomePage/>
                    <ParentRoute path=Segment("tools") view=ToolsPage>
                        <Route path=Segment("") view=ToolsIndex/>
                        <Route path=Segment("affix-probability") view=AffixProbabilityPage/>
                        <Route path=Segment("strengthen-probability") view=StrengthenProbabilityPage/>
                    </ParentRoute>
                    <Route path=Segment("about") view=AboutPage/>
                </Routes>
            </main>
            <ToastHost/>
        </Router>
    }
}

/// Runs on every navigation: sets the document title from route metadata and
/// applies scroll restoration. Never blocks or redirects.
#[component]
fn NavigationGuard() -> impl IntoView {
    let location = use_location();
    let pathname = location.pathname;
    let title = Memo::new(move |_| routes::title_for_path(&pathname.get()));
    let url = Memo::new(move |_| format!("{}?{}#{}", pathname.get(), location.search.get(), location.hash.get()));

    scroll::install(url);

    view! { <Title text=move || title.get()/> }
}
