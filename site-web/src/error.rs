//! # Error Types
//!
//! Failures the page can run into. None of them is fatal: controllers log
//! them at the boundary and keep the previous state.
//!
//! - [`FetchError`]: HTTP requests for fragments and the token list
//! - [`WalletError`]: browser wallet (EIP-1193) requests

use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};

/// HTTP request failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// Request never produced a response (offline, CORS, DNS).
    #[error("network error: {0}")]
    Network(String),

    /// Response arrived with a non-2xx status.
    #[error("HTTP error! status: {0}")]
    Status(u16),

    /// Body could not be read or parsed.
    #[error("failed to decode response: {0}")]
    Decode(String),
}

impl From<gloo_net::Error> for FetchError {
    fn from(err: gloo_net::Error) -> Self {
        match err {
            gloo_net::Error::SerdeError(e) => FetchError::Decode(e.to_string()),
            other => FetchError::Network(other.to_string()),
        }
    }
}

/// Wallet provider failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WalletError {
    /// No provider injected into the page.
    #[error("no Web3 wallet provider found")]
    NotInstalled,

    /// The user declined the request in the wallet UI (EIP-1193 code 4001).
    #[error("request rejected by user: {0}")]
    Rejected(String),

    /// Any other provider error.
    #[error("wallet provider error {code}: {message}")]
    Provider { code: i64, message: String },

    /// Access was granted but no account came back.
    #[error("wallet returned no accounts")]
    NoAccounts,

    /// The provider answered with something we could not read.
    #[error("unexpected wallet response: {0}")]
    Decode(String),
}

/// EIP-1193 "User Rejected Request".
pub const USER_REJECTED_CODE: i64 = 4001;

impl WalletError {
    /// Classify a rejected provider promise.
    ///
    /// Providers reject with `{ code, message }` objects; anything else is
    /// reported through its string form.
    pub fn from_js(value: &JsValue) -> Self {
        let code = js_sys::Reflect::get(value, &JsValue::from_str("code"))
            .ok()
            .and_then(|code| code.as_f64())
            .map(|code| code as i64);
        let message = js_sys::Reflect::get(value, &JsValue::from_str("message"))
            .ok()
            .and_then(|message| message.as_string())
            .or_else(|| value.as_string())
            .or_else(|| {
                value
                    .dyn_ref::<js_sys::Error>()
                    .map(|e| String::from(e.message()))
            })
            .unwrap_or_else(|| format!("{:?}", value));

        Self::classify(code, message)
    }

    /// Build an error from an EIP-1193 code and message.
    pub fn classify(code: Option<i64>, message: String) -> Self {
        match code {
            Some(USER_REJECTED_CODE) => WalletError::Rejected(message),
            Some(code) => WalletError::Provider { code, message },
            None => WalletError::Provider { code: -1, message },
        }
    }
}
