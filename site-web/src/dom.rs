//! Browser implementations of the controller seams, plus lookup helpers.

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Window};

use crate::controllers::{ActiveMarker, Region};
use crate::state::wallet::ConnectionUi;
use crate::utils::constants::ACTIVE_CLASS;

impl ActiveMarker for Element {
    fn set_active(&self, active: bool) {
        let classes = self.class_list();
        let result = if active {
            classes.add_1(ACTIVE_CLASS)
        } else {
            classes.remove_1(ACTIVE_CLASS)
        };
        if let Err(e) = result {
            log::warn!("failed to update class list: {:?}", e);
        }
    }

    fn is_active(&self) -> bool {
        self.class_list().contains(ACTIVE_CLASS)
    }
}

impl Region for Element {
    fn replace_content(&self, html: &str) {
        self.set_inner_html(html);
    }
}

/// First element matching `selector`.
pub fn query(document: &Document, selector: &str) -> Option<Element> {
    match document.query_selector(selector) {
        Ok(element) => element,
        Err(e) => {
            log::warn!("invalid selector {:?}: {:?}", selector, e);
            None
        }
    }
}

/// Every element matching `selector`, in document order.
pub fn query_all(document: &Document, selector: &str) -> Vec<Element> {
    let nodes = match document.query_selector_all(selector) {
        Ok(nodes) => nodes,
        Err(e) => {
            log::warn!("invalid selector {:?}: {:?}", selector, e);
            return Vec::new();
        }
    };

    (0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

/// `window.alert` and the `#connectWallet` button text.
pub struct DomConnectionUi {
    window: Window,
    button: Element,
}

impl DomConnectionUi {
    pub fn new(window: Window, button: Element) -> Self {
        Self { window, button }
    }
}

impl ConnectionUi for DomConnectionUi {
    fn alert(&self, message: &str) {
        if let Err(e) = self.window.alert_with_message(message) {
            log::error!("alert failed: {:?}", e);
        }
    }

    fn set_label(&self, label: &str) {
        self.button.set_text_content(Some(label));
    }
}
