//! URL utility functions for reading query parameters

use std::collections::HashMap;

use web_sys::window;

/// Parse a `location.search` string (`?a=1&b=two`) into decoded pairs.
///
/// A key without `=` maps to an empty value. Later duplicates win.
pub fn parse_query(search: &str) -> HashMap<String, String> {
    let query_string = search.strip_prefix('?').unwrap_or(search);

    query_string
        .split('&')
        .filter(|pair| !pair.is_empty())
        .map(|pair| {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            (decode(key), decode(value))
        })
        .collect()
}

fn decode(raw: &str) -> String {
    let spaced = raw.replace('+', " ");
    urlencoding::decode(&spaced)
        .map(|decoded| decoded.into_owned())
        .unwrap_or(spaced)
}

/// All query parameters of the current page.
pub fn get_query_params() -> HashMap<String, String> {
    window()
        .and_then(|window| window.location().search().ok())
        .map(|search| parse_query(&search))
        .unwrap_or_default()
}
