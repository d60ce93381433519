//! Filter Chips Component
//!
//! One toggle chip per catalog filter.

use leptos::prelude::*;

use crate::models::Filter;
use crate::style::chip_style;

#[component]
pub fn FilterChips(
    filters: Vec<Filter>,
    #[prop(into)] active: Signal<Option<String>>,
    #[prop(into)] on_toggle: Callback<String>,
) -> impl IntoView {
    view! {
        <div class="filter-chips">
            {filters.into_iter().map(|filter| {
                let key = filter.key.clone();
                let key_for_click = key.clone();
                view! {
                    <span
                        class=move || chip_style(&key, active.get().as_deref()).chip_class()
                        on:click=move |_| on_toggle.run(key_for_click.clone())
                    >
                        {filter.display}
                    </span>
                }
            }).collect_view()}
        </div>
    }
}
