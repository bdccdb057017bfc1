//! # Data Transfer Objects (DTOs)
//!
//! ## Module Organization
//!
//! - [`token`] - Token descriptors for the token list
//!
//! ## Example JSON Communication
//!
//! ```text
//! GET /api/crypto/top-tokens
//! ```
//!
//! ```text
//! HTTP/1.1 200 OK
//! Content-Type: application/json
//!
//! [
//!   {
//!     "id": "1027",
//!     "symbol": "ETH",
//!     "name": "Ethereum",
//!     "price": 3120.44,
//!     "logo": "https://s2.coinmarketcap.com/static/img/coins/64x64/1027.png",
//!     "address": null
//!   }
//! ]
//! ```

pub mod token;

pub use token::*;
