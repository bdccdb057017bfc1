//! Token list state: the available-tokens store and the fetcher that fills it.

use std::rc::Rc;

use async_trait::async_trait;
use lib_store::Store;
use shared::dto::TokenList;

use crate::error::FetchError;

/// Where the token list comes from.
#[async_trait(?Send)]
pub trait TokenSource {
    async fn top_tokens(&self) -> Result<TokenList, FetchError>;
}

/// Refreshes the available-tokens store from a [`TokenSource`].
///
/// Stale-on-error: a failed fetch is logged and the store keeps its value.
/// There is no retry and no backoff.
#[derive(Clone)]
pub struct TokenFetcher {
    tokens: Store<TokenList>,
    source: Rc<dyn TokenSource>,
}

impl TokenFetcher {
    pub fn new(tokens: Store<TokenList>, source: Rc<dyn TokenSource>) -> Self {
        Self { tokens, source }
    }

    /// One GET; replaces the store's value wholesale on success.
    pub async fn fetch_available_tokens(&self) {
        match self.source.top_tokens().await {
            Ok(tokens) => {
                log::info!("Updated tokens: {} entries", tokens.len());
                self.tokens.set(tokens);
            }
            Err(e) => log::error!("Error fetching tokens: {}", e),
        }
    }

    /// Fire-and-forget variant for event handlers.
    pub fn spawn_fetch(&self) {
        let fetcher = self.clone();
        wasm_bindgen_futures::spawn_local(async move {
            fetcher.fetch_available_tokens().await;
        });
    }
}
