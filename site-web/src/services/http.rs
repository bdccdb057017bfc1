//! HTTP client for fragments and API calls (gloo-net `fetch`).

use async_trait::async_trait;
use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;

use crate::controllers::loader::FragmentSource;
use crate::error::FetchError;
use crate::state::tokens::TokenSource;
use crate::utils::config::SiteConfig;
use shared::dto::TokenList;

/// Same-origin (or `api_base`-prefixed) HTTP client.
#[derive(Debug, Clone)]
pub struct HttpClient {
    config: SiteConfig,
}

impl HttpClient {
    pub fn new(config: &SiteConfig) -> Self {
        Self {
            config: config.clone(),
        }
    }

    async fn get(&self, path: &str) -> Result<Response, FetchError> {
        let url = self.config.url(path);
        log::debug!("GET {}", url);

        let response = Request::get(&url).send().await?;
        if let Err(e) = check_status(response.status()) {
            log::warn!("GET {} failed: {}", url, e);
            return Err(e);
        }
        Ok(response)
    }

    /// GET `path` and return the body as text.
    pub async fn get_text(&self, path: &str) -> Result<String, FetchError> {
        let response = self.get(path).await?;
        response
            .text()
            .await
            .map_err(|e| FetchError::Decode(e.to_string()))
    }

    /// GET `path` and parse the body as JSON.
    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, FetchError> {
        let response = self.get(path).await?;
        response
            .json::<T>()
            .await
            .map_err(|e| FetchError::Decode(e.to_string()))
    }
}

/// Only 2xx responses carry a usable body.
pub fn check_status(status: u16) -> Result<(), FetchError> {
    if (200..300).contains(&status) {
        Ok(())
    } else {
        Err(FetchError::Status(status))
    }
}

#[async_trait(?Send)]
impl FragmentSource for HttpClient {
    async fn fetch_fragment(&self, path: &str) -> Result<String, FetchError> {
        self.get_text(path).await
    }
}

#[async_trait(?Send)]
impl TokenSource for HttpClient {
    async fn top_tokens(&self) -> Result<TokenList, FetchError> {
        self.get_json(&self.config.tokens_path).await
    }
}
