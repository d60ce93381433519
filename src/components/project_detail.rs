//! Project Detail Component
//!
//! Child view for `/projects/<slug>`.

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::route::LISTING_PATH;

#[component]
pub fn ProjectDetail(slug: String) -> impl IntoView {
    let ctx = use_app_context();
    let project = ctx.catalog.find_by_path(&slug).map(|(_, project)| project.clone());

    let on_back = {
        let ctx = ctx.clone();
        move |ev: web_sys::MouseEvent| {
            ev.prevent_default();
            ctx.navigate(LISTING_PATH);
        }
    };

    let tags = project
        .as_ref()
        .map(|p| {
            p.tags
                .iter()
                .map(|tag| ctx.catalog.filter_label(tag).unwrap_or(tag).to_string())
                .collect::<Vec<_>>()
        })
        .unwrap_or_default();

    match project {
        Some(project) => view! {
            <section class="project-detail">
                <h2 class="project-detail-title">{project.name}</h2>
                <p class="project-detail-text">{project.explanation}</p>
                <div class="filter-chips">
                    {tags.into_iter().map(|label| view! { <span class="filter-chip">{label}</span> }).collect_view()}
                </div>
                <a class="back-link" href=LISTING_PATH on:click=on_back>"← All projects"</a>
            </section>
        }.into_any(),
        None => view! {
            <section class="project-detail">
                <p class="project-detail-text">{format!("No project lives at \"{}\".", slug)}</p>
                <a class="back-link" href=LISTING_PATH on:click=on_back>"← All projects"</a>
            </section>
        }.into_any(),
    }
}
