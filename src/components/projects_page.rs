//! Projects Listing Page
//!
//! Search box, filter chips and the card grid. The visible set is recomputed
//! once input has been idle for the configured debounce window.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;

use crate::components::{FilterChips, ProjectCard, SearchBar};
use crate::context::use_app_context;
use crate::debounce::{BrowserScheduler, Debouncer};
use crate::search::compute_visible;
use crate::store::{
    store_query, store_set_search, store_set_visible, store_toggle_filter, ListingState,
    ListingStateStoreFields, ListingStore,
};
use crate::style::{classify_cards, StyleState};

#[component]
pub fn ProjectsPage() -> impl IntoView {
    let ctx = use_app_context();
    let catalog = ctx.catalog.clone();
    let settings = catalog.settings.clone();

    let store: ListingStore = ListingStore::new(ListingState::new(catalog.projects.len()));

    // Recompute the visible set after the query settles
    let debouncer = Rc::new(RefCell::new(Debouncer::new(BrowserScheduler, settings.debounce_ms)));
    Effect::new({
        let catalog = catalog.clone();
        move |_| {
            let query = store_query(&store);
            let catalog = catalog.clone();
            debouncer.borrow_mut().call(move || {
                let visible = compute_visible(&catalog.projects, &query);
                log::debug!(
                    "[Projects] query {:?} filter {:?} -> {} visible",
                    query.text,
                    query.filter,
                    visible.len()
                );
                store_set_visible(&store, visible);
            });
        }
    });

    // Card styles compare the live query against the last computed set
    let card_styles = Memo::new({
        let catalog = catalog.clone();
        move |_| classify_cards(&catalog.projects, &store.visible().get(), &store_query(&store))
    });

    let on_search = move |text: String| store_set_search(&store, text);
    let on_toggle = move |key: String| {
        store_toggle_filter(&store, &key);
        log::info!("[Projects] filter -> {:?}", store.filter().get_untracked());
    };

    let cards = catalog
        .projects
        .iter()
        .enumerate()
        .map(|(index, project)| {
            let image = project
                .image
                .clone()
                .filter(|s| !s.is_empty())
                .unwrap_or_else(|| settings.placeholder_image.clone());
            let hover_image = project
                .hover_image
                .clone()
                .filter(|s| !s.is_empty())
                .unwrap_or_else(|| settings.placeholder_hover_image.clone());
            let style = Signal::derive(move || {
                card_styles.with(|styles| styles.get(index).copied().unwrap_or(StyleState::Hidden))
            });
            view! {
                <ProjectCard
                    project=project.clone()
                    style=style
                    image=image
                    hover_image=hover_image
                />
            }
        })
        .collect_view();

    view! {
        <div class="projects-page">
            <strong class="projects-tagline">{settings.tagline.clone()}</strong>

            // search/filter section
            <section class="search-section">
                <SearchBar on_input=on_search />
                <FilterChips
                    filters=catalog.filters.clone()
                    active=Signal::derive(move || store.filter().get())
                    on_toggle=on_toggle
                />
            </section>

            // projects section
            <section class="projects-grid">
                {cards}
            </section>
        </div>
    }
}
