//! Project Card Component
//!
//! Link card with a pointer-following highlight.

use leptos::html;
use leptos::prelude::*;
use leptos_pointer::{create_highlight_signals, make_on_pointer_move};

use crate::context::use_app_context;
use crate::models::Project;
use crate::style::StyleState;

/// Plain primary click without modifiers; anything else is left to the browser
fn is_plain_click(ev: &web_sys::MouseEvent) -> bool {
    ev.button() == 0 && !ev.ctrl_key() && !ev.meta_key() && !ev.shift_key() && !ev.alt_key()
}

#[component]
pub fn ProjectCard(
    project: Project,
    #[prop(into)] style: Signal<StyleState>,
    /// Resolved background image
    image: String,
    /// Resolved background image while hovered
    hover_image: String,
) -> impl IntoView {
    let ctx = use_app_context();
    let href = project.href();
    let href_for_click = href.clone();

    let card_ref = NodeRef::<html::A>::new();
    let effect_ref = NodeRef::<html::Div>::new();
    let highlight = create_highlight_signals();

    let on_mousemove = make_on_pointer_move(highlight, move || {
        let card = card_ref.get_untracked()?;
        let effect = effect_ref.get_untracked()?;
        Some((card.into(), effect.into()))
    });

    let on_click = move |ev: web_sys::MouseEvent| {
        if is_plain_click(&ev) {
            ev.prevent_default();
            ctx.navigate(&href_for_click);
        }
    };

    let image_style = format!("--card-image: url('{}'); --card-hover-image: url('{}');", image, hover_image);

    view! {
        <a
            href=href
            class=move || style.get().card_class()
            node_ref=card_ref
            on:mousemove=on_mousemove
            on:click=on_click
        >
            // hover effect
            <div
                class="card-pointer-effect"
                style=move || highlight.offset_read.get().to_style()
                node_ref=effect_ref
            ></div>

            // faded background overlays
            <div class="card-fade-bottom"></div>
            <div class="card-fade-top"></div>

            <article class="card-body" style=image_style>
                <h2 class="card-title">{project.name}</h2>
                <div class="card-explanation">
                    <span>{project.explanation}</span>
                </div>
            </article>
        </a>
    }
}
