//! # Reactive Store Library
//!
//! A minimal observable value container shared between page controllers and
//! UI components.
//!
//! - [`Store`] holds one value and an ordered list of subscribers.
//! - [`Unsubscribe`] is the stable handle returned by [`Store::subscribe`].
//!
//! Stores are single-threaded (`Rc`), matching the browser event loop they
//! run on. Cloning a `Store` yields another handle to the same value.
//!
//! ## Usage
//!
//! ```rust
//! use lib_store::Store;
//! use std::cell::RefCell;
//! use std::rc::Rc;
//!
//! let counter = Store::new(0);
//! let seen = Rc::new(RefCell::new(Vec::new()));
//!
//! let sink = Rc::clone(&seen);
//! let handle = counter.subscribe(move |value| sink.borrow_mut().push(*value));
//! counter.set(1);
//! handle.unsubscribe();
//! counter.set(2);
//!
//! assert_eq!(*seen.borrow(), vec![0, 1]);
//! assert_eq!(counter.get(), 2);
//! ```

// region: --- Modules
mod store;
// endregion: --- Modules

// region: --- Re-exports
pub use store::{Store, Unsubscribe};
// endregion: --- Re-exports
