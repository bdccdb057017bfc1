//! Token price list rendered from the available-tokens store.

use leptos::prelude::*;
use lib_store::Store;
use shared::dto::{TokenDescriptor, TokenList};

use super::hooks::use_store;
use crate::utils::format::format_usd;

#[component]
pub fn TokenTicker(tokens: Store<TokenList>) -> impl IntoView {
    let tokens = use_store(&tokens);

    view! {
        <ul class="token-list">
            {move || tokens.with(|tokens| {
                if tokens.is_empty() {
                    view! { <li class="token-list__empty">"Token prices are loading"</li> }
                        .into_any()
                } else {
                    tokens.iter().map(token_row).collect_view().into_any()
                }
            })}
        </ul>
    }
}

fn token_row(token: &TokenDescriptor) -> impl IntoView {
    let symbol = token.label().to_string();
    let name = token.name.clone().unwrap_or_default();
    let price = token.price.map(format_usd).unwrap_or_else(|| "n/a".to_string());
    let logo = token.logo.clone().map(|src| {
        view! { <img class="token-list__logo" src=src alt="" loading="lazy"/> }
    });

    view! {
        <li class="token-list__item">
            {logo}
            <span class="token-list__symbol">{symbol}</span>
            <span class="token-list__name">{name}</span>
            <span class="token-list__price">{price}</span>
        </li>
    }
}
