//! Routing
//!
//! Maps the browser path to the listing view or a child (project) view, and
//! keeps a path signal in step with history navigation.

use leptos::prelude::*;
use percent_encoding::percent_decode_str;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};

pub const LISTING_PATH: &str = "/projects";

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Route {
    Listing,
    /// `/projects/<slug>`, slug percent-decoded
    Project(String),
    /// Anything outside the projects section
    Other(String),
}

impl Route {
    pub fn parse(pathname: &str) -> Self {
        match pathname {
            "" | "/" | "/projects" | "/projects/" => Route::Listing,
            _ => match pathname.strip_prefix("/projects/") {
                Some(slug) => {
                    let slug = slug.trim_end_matches('/');
                    Route::Project(percent_decode_str(slug).decode_utf8_lossy().into_owned())
                }
                None => Route::Other(pathname.to_string()),
            },
        }
    }

    pub fn is_child(&self) -> bool {
        !matches!(self, Route::Listing)
    }
}

/// Current `location.pathname`, or the listing path outside a browser
pub fn current_pathname() -> String {
    web_sys::window()
        .and_then(|win| win.location().pathname().ok())
        .unwrap_or_else(|| LISTING_PATH.to_string())
}

/// Push `path` onto the history stack. Returns false if the browser refused.
pub fn push_history(path: &str) -> bool {
    let Some(win) = web_sys::window() else {
        return false;
    };
    let Ok(history) = win.history() else {
        return false;
    };
    match history.push_state_with_url(&JsValue::NULL, "", Some(path)) {
        Ok(()) => true,
        Err(err) => {
            log::warn!("[Router] pushState to {} failed: {:?}", path, err);
            false
        }
    }
}

/// Bind global popstate handler so back/forward updates the path signal
pub fn bind_popstate(set_pathname: WriteSignal<String>) {
    let on_popstate = Closure::<dyn FnMut(web_sys::Event)>::new(move |_ev: web_sys::Event| {
        let path = current_pathname();
        log::debug!("[Router] popstate -> {}", path);
        set_pathname.set(path);
    });

    if let Some(win) = web_sys::window() {
        if let Err(err) = win.add_event_listener_with_callback("popstate", on_popstate.as_ref().unchecked_ref()) {
            log::warn!("[Router] popstate listener not bound: {:?}", err);
        }
    }
    on_popstate.forget();
}
