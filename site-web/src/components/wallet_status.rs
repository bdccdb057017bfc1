//! Wallet badge: shortened account and network, or a disconnected hint.

use leptos::prelude::*;
use lib_store::Store;
use shared::utils::truncate_address;

use super::hooks::use_store;
use crate::services::wallet::WalletState;

#[component]
pub fn WalletStatus(wallet: Store<WalletState>) -> impl IntoView {
    let state = use_store(&wallet);

    view! {
        <div class="wallet-status">
            {move || state.with(|state| match state.address() {
                Some(account) => {
                    let account_label = truncate_address(account);
                    let network = state.network_name.clone();
                    view! {
                        <span class="wallet-status__dot connected"></span>
                        <span class="wallet-status__account" title=account.to_string()>
                            {account_label}
                        </span>
                        <span class="wallet-status__network">{network}</span>
                    }
                    .into_any()
                }
                None => view! {
                    <span class="wallet-status__dot"></span>
                    <span class="wallet-status__account">"Not connected"</span>
                }
                .into_any(),
            })}
        </div>
    }
}
