//! Mobile navigation menu: the hamburger button toggles `.nav-links`, a
//! click outside `.main-nav` or on a nav link closes it.
//!
//! Open means the links carry the `active` class; the menu keeps no state
//! of its own, so markup that ships already open toggles closed.

use std::rc::Rc;

use gloo_events::EventListener;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event};

use super::ActiveMarker;
use crate::utils::constants::MAIN_NAV_SELECTOR;

/// Event that can be kept from bubbling further.
pub trait Propagation {
    fn stop_propagation(&self);
}

impl Propagation for Event {
    fn stop_propagation(&self) {
        Event::stop_propagation(self);
    }
}

pub struct MobileMenu<M> {
    links: M,
}

impl<M: ActiveMarker> MobileMenu<M> {
    pub fn new(links: M) -> Self {
        Self { links }
    }

    pub fn is_open(&self) -> bool {
        self.links.is_active()
    }

    /// Hamburger click. Stops propagation so the document-level handler
    /// does not see the same click and close the menu again.
    pub fn on_toggle_click(&self, event: &impl Propagation) {
        event.stop_propagation();
        self.links.set_active(!self.links.is_active());
    }

    /// Any click that reached the document.
    pub fn on_document_click(&self, inside_nav: bool) {
        if !inside_nav {
            self.links.set_active(false);
        }
    }

    /// Click on (or inside) the nav link list.
    pub fn on_link_click(&self) {
        self.links.set_active(false);
    }
}

impl MobileMenu<Element> {
    /// Attach the three click handlers. Call once, after the header
    /// fragment that contains the button and the links is in the page.
    pub fn bind(self: Rc<Self>, button: &Element, document: &Document) {
        let menu = Rc::clone(&self);
        EventListener::new(button, "click", move |event| {
            menu.on_toggle_click(event);
        })
        .forget();

        let menu = Rc::clone(&self);
        EventListener::new(document, "click", move |event| {
            menu.on_document_click(target_inside_nav(event));
        })
        .forget();

        let menu = Rc::clone(&self);
        EventListener::new(&self.links, "click", move |_| {
            menu.on_link_click();
        })
        .forget();
    }
}

fn target_inside_nav(event: &Event) -> bool {
    event
        .target()
        .and_then(|target| target.dyn_into::<Element>().ok())
        .and_then(|element| element.closest(MAIN_NAV_SELECTOR).ok().flatten())
        .is_some()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[derive(Default)]
    struct Links(Cell<bool>);

    impl ActiveMarker for Links {
        fn set_active(&self, active: bool) {
            self.0.set(active);
        }

        fn is_active(&self) -> bool {
            self.0.get()
        }
    }

    #[derive(Default)]
    struct Click {
        stopped: Cell<bool>,
    }

    impl Propagation for Click {
        fn stop_propagation(&self) {
            self.stopped.set(true);
        }
    }

    /// Bubble a click on the hamburger: button handler first, then the
    /// document handler unless propagation was stopped.
    fn click_button(menu: &MobileMenu<Links>, button_inside_nav: bool) {
        let click = Click::default();
        menu.on_toggle_click(&click);
        if !click.stopped.get() {
            menu.on_document_click(button_inside_nav);
        }
    }

    #[test]
    fn test_toggle_opens_without_outside_close() {
        let menu = MobileMenu::new(Links::default());
        click_button(&menu, false);
        assert!(menu.is_open());
        assert!(menu.links.0.get());
    }

    #[test]
    fn test_toggle_twice_closes() {
        let menu = MobileMenu::new(Links::default());
        click_button(&menu, true);
        click_button(&menu, true);
        assert!(!menu.is_open());
        assert!(!menu.links.0.get());
    }

    #[test]
    fn test_outside_click_closes_inside_click_does_not() {
        let menu = MobileMenu::new(Links::default());
        click_button(&menu, true);

        menu.on_document_click(true);
        assert!(menu.is_open());

        menu.on_document_click(false);
        assert!(!menu.is_open());
    }

    #[test]
    fn test_menu_shipped_open_closes_on_first_toggle() {
        let menu = MobileMenu::new(Links(Cell::new(true)));
        assert!(menu.is_open());

        click_button(&menu, true);

        assert!(!menu.is_open());
        assert!(!menu.links.0.get());
    }

    #[test]
    fn test_link_click_closes() {
        let menu = MobileMenu::new(Links::default());
        click_button(&menu, true);
        menu.on_link_click();
        assert!(!menu.is_open());
    }
}
