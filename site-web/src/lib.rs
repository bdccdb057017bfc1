//! CableCoin landing site
//!
//! Static markup is served as-is; this crate adds the behaviour: header and
//! footer fragments, the hero carousel, the mobile menu, the wallet connect
//! button and the token list.

use wasm_bindgen::prelude::*;

pub mod app;
pub mod components;
pub mod controllers;
pub mod dom;
pub mod error;
pub mod services;
pub mod state;
pub mod utils;

use app::SiteApp;
use utils::config::SiteConfig;

#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();

    let Some(window) = web_sys::window() else {
        web_sys::console::error_1(&"CableCoin: no window available".into());
        return;
    };
    let Some(document) = window.document() else {
        web_sys::console::error_1(&"CableCoin: no document available".into());
        return;
    };

    let config = SiteConfig::from_page(&document);
    wasm_logger::init(wasm_logger::Config::new(config.log_level));
    log::info!("CableCoin site starting (log level {})", config.log_level);

    // Scripts loaded with `defer` or at the end of <body> run after parsing.
    if document.ready_state() == "loading" {
        let ready = document.clone();
        gloo_events::EventListener::once(&document, "DOMContentLoaded", move |_| {
            start(config, &window, &ready);
        })
        .forget();
    } else {
        start(config, &window, &document);
    }
}

fn start(config: SiteConfig, window: &web_sys::Window, document: &web_sys::Document) {
    SiteApp::new(config).start(window, document);
}
