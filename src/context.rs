//! Application Context
//!
//! Shared state provided via Leptos Context API.

use std::sync::Arc;

use leptos::prelude::*;

use crate::catalog::Catalog;
use crate::route;

/// App-wide state provided via context
#[derive(Clone)]
pub struct AppContext {
    /// Immutable catalog injected at startup
    pub catalog: Arc<Catalog>,
    /// Current path - read
    pub pathname: ReadSignal<String>,
    /// Current path - write
    set_pathname: WriteSignal<String>,
}

impl AppContext {
    pub fn new(catalog: Arc<Catalog>, pathname: (ReadSignal<String>, WriteSignal<String>)) -> Self {
        Self {
            catalog,
            pathname: pathname.0,
            set_pathname: pathname.1,
        }
    }

    /// Client-side navigation; falls back to a full page load
    pub fn navigate(&self, path: &str) {
        if route::push_history(path) {
            log::info!("[Router] navigate -> {}", path);
            self.set_pathname.set(path.to_string());
        } else if let Some(win) = web_sys::window() {
            if let Err(err) = win.location().set_href(path) {
                log::warn!("[Router] navigation to {} failed: {:?}", path, err);
            }
        }
    }
}

pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
