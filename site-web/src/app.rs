//! Page wiring: finds the widgets the static markup provides and binds them
//! to the shared stores and services.

use std::rc::Rc;

use leptos::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, HtmlFormElement, Window};

use crate::components::{TokenTicker, WalletStatus};
use crate::controllers::{contact_form, Carousel, ComponentLoader, MobileMenu};
use crate::dom::{query, query_all, DomConnectionUi};
use crate::services::HttpClient;
use crate::state::tokens::TokenFetcher;
use crate::state::wallet::WalletConnector;
use crate::state::SiteStores;
use crate::utils::config::SiteConfig;
use crate::utils::constants::{
    CONNECT_WALLET_ID, CONTACT_FORM_ID, DISCONNECT_WALLET_ID, DOT_SELECTOR, FOOTER_SELECTOR,
    HEADER_SELECTOR, MOBILE_MENU_BUTTON_SELECTOR, NAV_LINKS_SELECTOR, NEXT_SLIDE_SELECTOR,
    PREV_SLIDE_SELECTOR, SLIDE_SELECTOR, TOKEN_LIST_SLOT_ID, WALLET_STATUS_SLOT_ID,
};

pub struct SiteApp {
    config: SiteConfig,
    stores: SiteStores,
    http: Rc<HttpClient>,
}

impl SiteApp {
    pub fn new(config: SiteConfig) -> Self {
        let http = Rc::new(HttpClient::new(&config));
        Self {
            config,
            stores: SiteStores::new(),
            http,
        }
    }

    /// Bind every widget found on the page. Missing widgets are skipped.
    pub fn start(&self, window: &Window, document: &Document) {
        self.load_components(document);
        self.bind_carousel(document);
        self.bind_wallet(window, document);
        self.bind_contact_form(document);
        self.mount_components(document);

        log::info!("CableCoin site initialised");
    }

    /// Header and footer fragments; the mobile menu is bound once the header
    /// is in the page.
    fn load_components(&self, document: &Document) {
        let loader = ComponentLoader::new(self.http.clone())
            .header(query(document, HEADER_SELECTOR), self.config.header_path.clone())
            .footer(query(document, FOOTER_SELECTOR), self.config.footer_path.clone());

        let document = document.clone();
        wasm_bindgen_futures::spawn_local(async move {
            loader.load(|| bind_mobile_menu(&document)).await;
        });
    }

    fn bind_carousel(&self, document: &Document) {
        let carousel = Rc::new(Carousel::new(
            query_all(document, SLIDE_SELECTOR),
            query_all(document, DOT_SELECTOR),
        ));
        carousel.bind(
            query(document, PREV_SLIDE_SELECTOR).as_ref(),
            query(document, NEXT_SLIDE_SELECTOR).as_ref(),
            self.config.carousel_interval_ms,
        );
    }

    fn bind_wallet(&self, window: &Window, document: &Document) {
        let Some(button) = document.get_element_by_id(CONNECT_WALLET_ID) else {
            log::debug!("no #{} button on this page", CONNECT_WALLET_ID);
            return;
        };

        let ui = Rc::new(DomConnectionUi::new(window.clone(), button.clone()));
        let connector = Rc::new(WalletConnector::browser(self.stores.wallet.clone(), ui));

        if let Some(disconnect) = document.get_element_by_id(DISCONNECT_WALLET_ID) {
            let connector = Rc::clone(&connector);
            gloo_events::EventListener::new(&disconnect, "click", move |_| {
                connector.disconnect();
            })
            .forget();
        }

        gloo_events::EventListener::new(&button, "click", move |_| {
            let connector = Rc::clone(&connector);
            wasm_bindgen_futures::spawn_local(async move {
                connector.connect().await;
            });
        })
        .forget();
    }

    fn bind_contact_form(&self, document: &Document) {
        match document
            .get_element_by_id(CONTACT_FORM_ID)
            .map(|form| form.dyn_into::<HtmlFormElement>())
        {
            Some(Ok(form)) => contact_form::bind(form),
            Some(Err(_)) => log::warn!("#{} is not a <form>", CONTACT_FORM_ID),
            None => {}
        }
    }

    /// Reactive widgets go into their slots when the page has them. The
    /// token list is fetched either way so the store is warm.
    fn mount_components(&self, document: &Document) {
        if let Some(slot) = slot(document, WALLET_STATUS_SLOT_ID) {
            let wallet = self.stores.wallet.clone();
            leptos::mount::mount_to(slot, move || view! { <WalletStatus wallet=wallet/> })
                .forget();
        }

        if let Some(slot) = slot(document, TOKEN_LIST_SLOT_ID) {
            let tokens = self.stores.tokens.clone();
            leptos::mount::mount_to(slot, move || view! { <TokenTicker tokens=tokens/> })
                .forget();
        }

        TokenFetcher::new(self.stores.tokens.clone(), self.http.clone()).spawn_fetch();
    }
}

fn bind_mobile_menu(document: &Document) {
    let button = query(document, MOBILE_MENU_BUTTON_SELECTOR);
    let links = query(document, NAV_LINKS_SELECTOR);

    match (button, links) {
        (Some(button), Some(links)) => {
            Rc::new(MobileMenu::new(links)).bind(&button, document);
            log::debug!("mobile menu bound");
        }
        _ => log::debug!("header has no mobile menu"),
    }
}

fn slot(document: &Document, id: &str) -> Option<HtmlElement> {
    document
        .get_element_by_id(id)
        .and_then(|element: Element| element.dyn_into::<HtmlElement>().ok())
}
