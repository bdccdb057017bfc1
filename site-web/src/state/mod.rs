//! Shared page state
//!
//! Both stores are created once by the application root and handed to the
//! controllers and components that read or write them.

pub mod tokens;
pub mod wallet;

use lib_store::Store;
use shared::dto::TokenList;

use crate::services::wallet::WalletState;

/// Every store the page owns.
#[derive(Clone, Default)]
pub struct SiteStores {
    /// Wallet connection; written only by [`wallet::WalletConnector`].
    pub wallet: Store<WalletState>,
    /// Available tokens; written only by [`tokens::TokenFetcher`].
    pub tokens: Store<TokenList>,
}

impl SiteStores {
    pub fn new() -> Self {
        Self::default()
    }
}
