//! Wallet state management
//!
//! [`WalletConnector`] is the only writer of the wallet store. It runs the
//! connect flow against whatever provider the locator finds and reports to
//! the user through a [`ConnectionUi`].

use std::rc::Rc;

use lib_store::Store;

use crate::error::WalletError;
use crate::services::wallet::{BrowserWallet, ProviderHandle, WalletState};
use crate::utils::constants::{CONNECTED_LABEL, CONNECT_LABEL, INSTALL_WALLET_MESSAGE};

/// User-facing side effects of the connect flow.
pub trait ConnectionUi {
    /// Blocking notification (`window.alert`).
    fn alert(&self, message: &str);

    /// Text of the connect button.
    fn set_label(&self, label: &str);
}

type ProviderLocator = Box<dyn Fn() -> Option<ProviderHandle>>;

/// Connects the page to a browser wallet and records the result.
pub struct WalletConnector {
    wallet: Store<WalletState>,
    locate: ProviderLocator,
    ui: Rc<dyn ConnectionUi>,
}

impl WalletConnector {
    pub fn new(
        wallet: Store<WalletState>,
        locate: impl Fn() -> Option<ProviderHandle> + 'static,
        ui: Rc<dyn ConnectionUi>,
    ) -> Self {
        Self {
            wallet,
            locate: Box::new(locate),
            ui,
        }
    }

    /// Connector bound to the injected `window.ethereum`.
    pub fn browser(wallet: Store<WalletState>, ui: Rc<dyn ConnectionUi>) -> Self {
        Self::new(wallet, || BrowserWallet::detect().map(ProviderHandle::new), ui)
    }

    /// Run the connect flow.
    ///
    /// Without a provider the user is alerted and nothing changes. Otherwise
    /// exactly one `eth_requestAccounts` is issued; on success the first
    /// account is stored and the button reads "Connected", on failure the
    /// error is logged and state stays as it was.
    pub async fn connect(&self) {
        let Some(provider) = (self.locate)() else {
            log::warn!("Cannot connect: {}", WalletError::NotInstalled);
            self.ui.alert(INSTALL_WALLET_MESSAGE);
            return;
        };

        match self.request_connection(provider).await {
            Ok(state) => {
                log::info!(
                    "Connected account: {} ({})",
                    state.address().unwrap_or_default(),
                    state.network_name
                );
                self.wallet.set(state);
                self.ui.set_label(CONNECTED_LABEL);
            }
            Err(e) => log::error!("Error connecting wallet: {}", e),
        }
    }

    async fn request_connection(
        &self,
        provider: ProviderHandle,
    ) -> Result<WalletState, WalletError> {
        let accounts = provider.provider().request_accounts().await?;
        let account = accounts.into_iter().next().ok_or(WalletError::NoAccounts)?;

        let chain_id = match provider.provider().chain_id().await {
            Ok(chain_id) => Some(chain_id),
            Err(e) => {
                log::warn!("could not read chain id: {}", e);
                None
            }
        };

        Ok(WalletState::connected(provider, account, chain_id))
    }

    /// Forget the connection and restore the button label. The provider
    /// keeps its permission grant; the next `connect` reuses it.
    pub fn disconnect(&self) {
        self.wallet.set(WalletState::default());
        self.ui.set_label(CONNECT_LABEL);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::wallet::Eip1193Provider;
    use async_trait::async_trait;
    use futures::executor::block_on;
    use std::cell::{Cell, RefCell};

    #[derive(Default)]
    struct RecordingUi {
        alerts: RefCell<Vec<String>>,
        label: RefCell<Option<String>>,
    }

    impl ConnectionUi for RecordingUi {
        fn alert(&self, message: &str) {
            self.alerts.borrow_mut().push(message.to_string());
        }

        fn set_label(&self, label: &str) {
            *self.label.borrow_mut() = Some(label.to_string());
        }
    }

    struct FakeWallet {
        accounts: Result<Vec<String>, WalletError>,
        chain_id: Result<u64, WalletError>,
        requests: Rc<Cell<usize>>,
    }

    #[async_trait(?Send)]
    impl Eip1193Provider for FakeWallet {
        async fn request_accounts(&self) -> Result<Vec<String>, WalletError> {
            self.requests.set(self.requests.get() + 1);
            self.accounts.clone()
        }

        async fn chain_id(&self) -> Result<u64, WalletError> {
            self.chain_id.clone()
        }
    }

    fn connector_with(
        wallet: Option<FakeWallet>,
    ) -> (WalletConnector, Rc<RecordingUi>, Store<WalletState>) {
        let store = Store::new(WalletState::default());
        let ui = Rc::new(RecordingUi::default());
        let handle = wallet.map(ProviderHandle::new);
        let connector = WalletConnector::new(store.clone(), move || handle.clone(), ui.clone());
        (connector, ui, store)
    }

    fn fake(
        accounts: Result<Vec<String>, WalletError>,
        chain_id: Result<u64, WalletError>,
    ) -> (FakeWallet, Rc<Cell<usize>>) {
        let requests = Rc::new(Cell::new(0));
        let wallet = FakeWallet {
            accounts,
            chain_id,
            requests: Rc::clone(&requests),
        };
        (wallet, requests)
    }

    #[test]
    fn test_missing_provider_alerts_without_state_change() {
        let (connector, ui, store) = connector_with(None);

        block_on(connector.connect());

        assert_eq!(*ui.alerts.borrow(), vec![INSTALL_WALLET_MESSAGE.to_string()]);
        assert_eq!(*ui.label.borrow(), None);
        assert_eq!(store.get(), WalletState::default());
    }

    #[test]
    fn test_success_stores_first_account() {
        let (wallet, requests) = fake(Ok(vec!["0xaaa".into(), "0xbbb".into()]), Ok(11155111));
        let (connector, ui, store) = connector_with(Some(wallet));

        block_on(connector.connect());

        let state = store.get();
        assert!(state.connected);
        assert_eq!(state.account.as_deref(), Some("0xaaa"));
        assert_eq!(state.chain_id, Some(11155111));
        assert_eq!(state.network_name, "Sepolia");
        assert!(state.provider.is_some());
        assert_eq!(state.signer.map(|s| s.account), Some("0xaaa".to_string()));
        assert_eq!(ui.label.borrow().as_deref(), Some(CONNECTED_LABEL));
        assert_eq!(requests.get(), 1);
        assert!(ui.alerts.borrow().is_empty());
    }

    #[test]
    fn test_rejection_leaves_state_and_label_unchanged() {
        let (wallet, requests) = fake(
            Err(WalletError::Rejected("User rejected the request.".into())),
            Ok(1),
        );
        let (connector, ui, store) = connector_with(Some(wallet));

        block_on(connector.connect());

        assert_eq!(store.get(), WalletState::default());
        assert_eq!(*ui.label.borrow(), None);
        assert!(ui.alerts.borrow().is_empty());
        assert_eq!(requests.get(), 1);
    }

    #[test]
    fn test_empty_account_list_is_a_failure() {
        let (wallet, _) = fake(Ok(vec![]), Ok(1));
        let (connector, ui, store) = connector_with(Some(wallet));

        block_on(connector.connect());

        assert!(!store.get().connected);
        assert_eq!(*ui.label.borrow(), None);
    }

    #[test]
    fn test_chain_id_failure_keeps_connection() {
        let (wallet, _) = fake(
            Ok(vec!["0xaaa".into()]),
            Err(WalletError::Provider {
                code: -32603,
                message: "internal".into(),
            }),
        );
        let (connector, _ui, store) = connector_with(Some(wallet));

        block_on(connector.connect());

        let state = store.get();
        assert!(state.connected);
        assert_eq!(state.chain_id, None);
        assert_eq!(state.network_name, "");
    }

    #[test]
    fn test_disconnect_resets_state_and_label() {
        let (wallet, _) = fake(Ok(vec!["0xaaa".into()]), Ok(1));
        let (connector, ui, store) = connector_with(Some(wallet));
        block_on(connector.connect());

        connector.disconnect();

        assert_eq!(store.get(), WalletState::default());
        assert_eq!(ui.label.borrow().as_deref(), Some(CONNECT_LABEL));
    }

    #[test]
    fn test_connect_again_after_disconnect() {
        let (wallet, requests) = fake(Ok(vec!["0xaaa".into()]), Ok(8453));
        let (connector, ui, store) = connector_with(Some(wallet));

        block_on(connector.connect());
        connector.disconnect();
        assert!(!store.get().is_connected());

        block_on(connector.connect());

        assert_eq!(store.get().network_name, "Base");
        assert_eq!(ui.label.borrow().as_deref(), Some(CONNECTED_LABEL));
        assert_eq!(requests.get(), 2);
    }
}
