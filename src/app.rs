//! Portfolio Frontend App
//!
//! Fixed header over either the projects listing or a child project view.

use std::sync::Arc;

use leptos::prelude::*;

use crate::catalog::Catalog;
use crate::components::{Header, ProjectDetail, ProjectsPage};
use crate::context::AppContext;
use crate::route::{self, Route};

#[component]
pub fn App(catalog: Arc<Catalog>) -> impl IntoView {
    let (pathname, set_pathname) = signal(route::current_pathname());
    route::bind_popstate(set_pathname);

    let ctx = AppContext::new(catalog.clone(), (pathname, set_pathname));
    provide_context(ctx.clone());

    let current_route = Memo::new(move |_| Route::parse(&pathname.get()));

    // Child paths that resolve to no project show the error header
    let is_error = {
        let catalog = catalog.clone();
        move || match current_route.get() {
            Route::Listing => false,
            Route::Project(slug) => catalog.find_by_path(&slug).is_none(),
            Route::Other(_) => true,
        }
    };

    Effect::new(move |_| {
        log::info!("[App] route {:?}", current_route.get());
    });

    view! {
        <Header page_name=catalog.settings.page_name.clone() error=Signal::derive(is_error) />

        <main class="page-content">
            {move || match current_route.get() {
                Route::Listing => view! { <ProjectsPage /> }.into_any(),
                Route::Project(slug) => view! { <ProjectDetail slug=slug /> }.into_any(),
                Route::Other(_) => view! { <div></div> }.into_any(),
            }}
        </main>
    }
}

/// Rendered instead of `App` when the catalog fails to load.
/// Shows the buffered log so the cause is visible without devtools.
#[component]
pub fn CatalogErrorPage() -> impl IntoView {
    let log_tail = rolling_logger::recent()
        .iter()
        .map(|entry| entry.format())
        .collect::<Vec<_>>()
        .join("\n");

    view! {
        <Header page_name="Projects".to_string() error=true />
        <main class="page-content">
            <pre class="log-tail">{log_tail}</pre>
        </main>
    }
}
