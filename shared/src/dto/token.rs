use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// Ordered token list as served by the API. Replaced wholesale on refresh.
pub type TokenList = Vec<TokenDescriptor>;

/// One entry of the top-tokens list.
///
/// Every known field is optional because the backend owns the schema.
/// Fields the site does not model are preserved in `extra`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TokenDescriptor {
    /// Listing id. The backend sends it as a string, older payloads as a number.
    #[serde(
        default,
        deserialize_with = "string_or_number",
        skip_serializing_if = "Option::is_none"
    )]
    pub id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub symbol: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Spot price in USD.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,

    /// Logo image URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,

    /// Contract address, when the token lives on an EVM chain.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl TokenDescriptor {
    /// Best label for display: symbol, then name, then id.
    pub fn label(&self) -> &str {
        self.symbol
            .as_deref()
            .or(self.name.as_deref())
            .or(self.id.as_deref())
            .unwrap_or("?")
    }
}

fn string_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Id {
        Text(String),
        Number(serde_json::Number),
    }

    Ok(Option::<Id>::deserialize(deserializer)?.map(|id| match id {
        Id::Text(text) => text,
        Id::Number(number) => number.to_string(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_backend_token() {
        let json = r#"{
            "id": "1027",
            "symbol": "ETH",
            "name": "Ethereum",
            "price": 3120.44,
            "logo": "https://example.com/eth.png",
            "address": null
        }"#;
        let token: TokenDescriptor = serde_json::from_str(json).unwrap();

        assert_eq!(token.id.as_deref(), Some("1027"));
        assert_eq!(token.symbol.as_deref(), Some("ETH"));
        assert_eq!(token.price, Some(3120.44));
        assert_eq!(token.address, None);
        assert!(token.extra.is_empty());
    }

    #[test]
    fn test_numeric_id_is_accepted() {
        let token: TokenDescriptor = serde_json::from_str(r#"{"id": 1}"#).unwrap();
        assert_eq!(token.id.as_deref(), Some("1"));
    }

    #[test]
    fn test_unknown_fields_are_kept() {
        let json = r#"{"symbol":"CABL","market_cap":1250000.0,"tags":["park"]}"#;
        let token: TokenDescriptor = serde_json::from_str(json).unwrap();

        assert_eq!(token.extra["market_cap"], 1250000.0);
        let back = serde_json::to_value(&token).unwrap();
        assert_eq!(back["tags"][0], "park");
        assert_eq!(back["symbol"], "CABL");
    }

    #[test]
    fn test_label_falls_back() {
        let named = TokenDescriptor {
            name: Some("Cable Coin".into()),
            ..Default::default()
        };
        assert_eq!(named.label(), "Cable Coin");
        assert_eq!(TokenDescriptor::default().label(), "?");
    }

    #[test]
    fn test_empty_array_is_a_valid_list() {
        let tokens: TokenList = serde_json::from_str("[]").unwrap();
        assert!(tokens.is_empty());
    }
}
