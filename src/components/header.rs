//! Page Header Component
//!
//! Fixed header bar showing the page name.

use leptos::prelude::*;

const ERROR_TITLE: &str = "An Error Occurred";

/// Text shown in the header
pub fn header_title(page_name: &str, error: bool) -> &str {
    if error {
        ERROR_TITLE
    } else {
        page_name
    }
}

/// Page header
///
/// Props:
/// - page_name: Title shown normally
/// - error: Replace the title with an error message
#[component]
pub fn Header(
    #[prop(into)] page_name: Signal<String>,
    #[prop(into, default = false.into())] error: Signal<bool>,
) -> impl IntoView {
    view! {
        <div class="page-header">
            <div class="page-header-inner">
                <h1 class=move || if error.get() { "page-title error" } else { "page-title" }>
                    {move || header_title(&page_name.get(), error.get()).to_string()}
                </h1>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_title() {
        assert_eq!(header_title("Projects", false), "Projects");
        assert_eq!(header_title("Projects", true), "An Error Occurred");
    }
}
