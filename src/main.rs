#![allow(warnings)]
//! Portfolio Frontend Entry Point

mod models;
mod catalog;
mod search;
mod debounce;
mod style;
mod route;
mod context;
mod store;
mod components;
mod app;

use std::sync::Arc;

use app::{App, CatalogErrorPage};
use catalog::Catalog;
use leptos::prelude::*;

const LOG_CAPACITY: usize = 256;

fn main() {
    console_error_panic_hook::set_once();
    if let Err(err) = rolling_logger::init(log::LevelFilter::Debug, LOG_CAPACITY) {
        // No logger to report through yet
        web_sys::console::warn_1(&format!("[App] logger not installed: {}", err).into());
    }

    match Catalog::builtin() {
        Ok(catalog) => {
            log::info!(
                "[App] catalog loaded: {} projects, {} filters",
                catalog.projects.len(),
                catalog.filters.len()
            );
            let catalog = Arc::new(catalog);
            mount_to_body(move || view! { <App catalog=catalog /> });
        }
        Err(err) => {
            log::error!("[Catalog] {}", err);
            mount_to_body(CatalogErrorPage);
        }
    }
}
