//! DOM widget controllers
//!
//! Each controller keeps its state in Rust and talks to the page through a
//! small trait, so it can be exercised without a rendering surface. The
//! browser implementations of those traits live in [`crate::dom`].

pub mod carousel;
pub mod contact_form;
pub mod loader;
pub mod mobile_menu;

pub use carousel::Carousel;
pub use loader::{ComponentLoader, FragmentSource, Region};
pub use mobile_menu::MobileMenu;

/// Something that carries the `active` marker (slides, dots, nav links).
pub trait ActiveMarker {
    fn set_active(&self, active: bool);

    fn is_active(&self) -> bool;
}
