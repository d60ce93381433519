//! Search Bar Component
//!
//! Search icon plus free-text input.

use leptos::html;
use leptos::prelude::*;
use wasm_bindgen::JsCast;

/// Select the input's text so typing replaces it. No-op while unmounted.
pub fn select_search_text(input: Option<web_sys::HtmlInputElement>) -> bool {
    match input {
        Some(input) => {
            input.select();
            true
        }
        None => false,
    }
}

/// Search input; every keystroke is reported through `on_input`
#[component]
pub fn SearchBar(#[prop(into)] on_input: Callback<String>) -> impl IntoView {
    let input_ref = NodeRef::<html::Input>::new();

    let on_icon_click = move |_| {
        select_search_text(input_ref.get_untracked());
    };

    view! {
        <div class="search-bar">
            <button type="button" class="search-icon" title="Search" on:click=on_icon_click>
                "⌕"
            </button>
            <hr class="search-divider" />
            <input
                type="text"
                name="search"
                class="search-input"
                placeholder="Search"
                autocomplete="off"
                node_ref=input_ref
                on:input=move |ev| {
                    ev.prevent_default();
                    let Some(target) = ev.target() else { return };
                    if let Some(input) = target.dyn_ref::<web_sys::HtmlInputElement>() {
                        on_input.run(input.value());
                    }
                }
            />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_without_input_is_noop() {
        assert!(!select_search_text(None));
    }
}
