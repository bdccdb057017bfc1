//! # Shared Data Transfer Objects Library
//!
//! Wire types exchanged between the landing site front-end and the
//! CableCoin API, plus small display helpers used by more than one crate.
//!
//! ## Structure
//!
//! - **[`dto`]**: Data Transfer Objects for API communication
//!   - **[`dto::token`]**: Token descriptors served by `GET /api/crypto/top-tokens`
//! - **[`utils`]**: Shared utility functions
//!   - **[`utils::format_address`]**: Shorten an account address for display
//!   - **[`utils::truncate_address`]**: `format_address` with the site defaults
//!
//! ## Wire Format
//!
//! The token endpoint's schema belongs to the backend. Fields the site knows
//! about are typed and optional; everything else is kept in
//! [`dto::TokenDescriptor::extra`] so descriptors survive a round trip.
//!
//! ```rust
//! use shared::dto::TokenList;
//!
//! let body = r#"[{"id":"1","symbol":"BTC","name":"Bitcoin","price":64000.5,"rank":1}]"#;
//! let tokens: TokenList = serde_json::from_str(body).unwrap();
//! assert_eq!(tokens[0].symbol.as_deref(), Some("BTC"));
//! assert_eq!(tokens[0].extra["rank"], 1);
//! ```

pub mod dto;
pub mod utils;

pub use dto::*;
pub use utils::*;
