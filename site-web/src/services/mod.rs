//! Browser-facing services: HTTP and the injected wallet provider

pub mod http;
pub mod wallet;

pub use http::HttpClient;
pub use wallet::{BrowserWallet, Eip1193Provider, ProviderHandle, SignerHandle, WalletState};
