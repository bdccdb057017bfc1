//! UI Components
//!
//! Leptos components that render the shared stores. They are mounted into
//! optional slots of the static page and re-render on every store change.

pub mod hooks;
pub mod token_ticker;
pub mod wallet_status;

pub use hooks::use_store;
pub use token_ticker::TokenTicker;
pub use wallet_status::WalletStatus;
