//! Web3 Wallet Integration via wasm-bindgen
//!
//! JavaScript interop for the EIP-1193 provider that browser wallets
//! (MetaMask, Rabby, Coinbase Wallet, ...) inject as `window.ethereum`,
//! and the wallet state written into the wallet store.

use std::fmt;
use std::rc::Rc;

use async_trait::async_trait;
use wasm_bindgen::prelude::*;

use crate::error::WalletError;

// ============================================================================
// EIP-1193 PROVIDER BINDINGS (JavaScript Interop)
// ============================================================================

#[wasm_bindgen(inline_js = "
export function ethereumProvider() {
    if (typeof window.ethereum === 'undefined' || window.ethereum === null) {
        return undefined;
    }
    return window.ethereum;
}

export async function ethRequest(provider, method) {
    return await provider.request({ method: method });
}
")]
extern "C" {
    /// The injected provider, or `undefined` when no wallet is installed
    fn ethereumProvider() -> JsValue;

    /// `provider.request({ method })`
    #[wasm_bindgen(catch)]
    async fn ethRequest(provider: &JsValue, method: &str) -> Result<JsValue, JsValue>;
}

/// The subset of EIP-1193 the site uses.
#[async_trait(?Send)]
pub trait Eip1193Provider {
    /// `eth_requestAccounts`: prompts the user and resolves to the granted
    /// accounts. May stay pending for as long as the wallet prompt is open.
    async fn request_accounts(&self) -> Result<Vec<String>, WalletError>;

    /// `eth_chainId`: the chain the wallet is currently on.
    async fn chain_id(&self) -> Result<u64, WalletError>;
}

/// `window.ethereum` as seen from Rust.
pub struct BrowserWallet {
    provider: JsValue,
}

impl BrowserWallet {
    /// Look up the injected provider. `None` when no wallet is installed.
    pub fn detect() -> Option<Self> {
        let provider = ethereumProvider();
        if provider.is_undefined() || provider.is_null() {
            None
        } else {
            Some(Self { provider })
        }
    }

    async fn request(&self, method: &str) -> Result<JsValue, WalletError> {
        ethRequest(&self.provider, method)
            .await
            .map_err(|e| WalletError::from_js(&e))
    }
}

#[async_trait(?Send)]
impl Eip1193Provider for BrowserWallet {
    async fn request_accounts(&self) -> Result<Vec<String>, WalletError> {
        let accounts = self.request("eth_requestAccounts").await?;
        serde_wasm_bindgen::from_value(accounts).map_err(|e| WalletError::Decode(e.to_string()))
    }

    async fn chain_id(&self) -> Result<u64, WalletError> {
        let chain_id = self.request("eth_chainId").await?;
        let raw = chain_id
            .as_string()
            .ok_or_else(|| WalletError::Decode(format!("eth_chainId returned {:?}", chain_id)))?;
        parse_chain_id(&raw)
    }
}

/// Parse an `eth_chainId` result. Providers answer in `0x`-prefixed hex;
/// a few legacy ones answer in decimal.
pub fn parse_chain_id(raw: &str) -> Result<u64, WalletError> {
    let raw = raw.trim();
    let parsed = match raw.strip_prefix("0x").or_else(|| raw.strip_prefix("0X")) {
        Some(hex) => u64::from_str_radix(hex, 16),
        None => raw.parse::<u64>(),
    };
    parsed.map_err(|_| WalletError::Decode(format!("invalid chain id {:?}", raw)))
}

/// Human name of an EVM chain.
pub fn network_name(chain_id: u64) -> String {
    let name = match chain_id {
        1 => "Ethereum Mainnet",
        10 => "OP Mainnet",
        56 => "BNB Smart Chain",
        137 => "Polygon",
        8453 => "Base",
        42161 => "Arbitrum One",
        11155111 => "Sepolia",
        other => return format!("Chain {}", other),
    };
    name.to_string()
}

// ============================================================================
// WALLET STATE
// ============================================================================

/// Shared reference to the provider a connection was made with.
///
/// Two handles are equal when they point at the same provider.
#[derive(Clone)]
pub struct ProviderHandle(Rc<dyn Eip1193Provider>);

impl ProviderHandle {
    pub fn new(provider: impl Eip1193Provider + 'static) -> Self {
        Self(Rc::new(provider))
    }

    pub fn provider(&self) -> &dyn Eip1193Provider {
        self.0.as_ref()
    }
}

impl PartialEq for ProviderHandle {
    fn eq(&self, other: &Self) -> bool {
        Rc::as_ptr(&self.0) as *const () == Rc::as_ptr(&other.0) as *const ()
    }
}

impl fmt::Debug for ProviderHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ProviderHandle({:p})", Rc::as_ptr(&self.0) as *const ())
    }
}

/// The identity that signs on the user's behalf: a provider plus the
/// account it granted.
#[derive(Clone, Debug, PartialEq)]
pub struct SignerHandle {
    pub provider: ProviderHandle,
    pub account: String,
}

/// Wallet connection state held in the wallet store.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct WalletState {
    pub connected: bool,
    pub account: Option<String>,
    pub chain_id: Option<u64>,
    pub network_name: String,
    pub provider: Option<ProviderHandle>,
    pub signer: Option<SignerHandle>,
}

impl WalletState {
    /// State after a successful `eth_requestAccounts`.
    pub fn connected(provider: ProviderHandle, account: String, chain_id: Option<u64>) -> Self {
        Self {
            connected: true,
            network_name: chain_id.map(network_name).unwrap_or_default(),
            chain_id,
            signer: Some(SignerHandle {
                provider: provider.clone(),
                account: account.clone(),
            }),
            account: Some(account),
            provider: Some(provider),
        }
    }

    pub fn is_connected(&self) -> bool {
        self.connected
    }

    pub fn address(&self) -> Option<&str> {
        self.account.as_deref()
    }
}
