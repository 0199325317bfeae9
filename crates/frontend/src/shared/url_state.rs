//! Фильтры в адресной строке: `?query=chef&department=Catering`
use std::collections::HashMap;
use wasm_bindgen::JsValue;

/// Parse a `?a=b&c=d` query string; later duplicates win
pub fn parse_query(search: &str) -> HashMap<String, String> {
    search
        .trim_start_matches('?')
        .split('&')
        .filter(|pair| !pair.is_empty())
        .filter_map(|pair| {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            let key = urlencoding::decode(&key.replace('+', " ")).ok()?.into_owned();
            let value = urlencoding::decode(&value.replace('+', " ")).ok()?.into_owned();
            Some((key, value))
        })
        .collect()
}

pub fn build_query(params: &[(String, String)]) -> String {
    if params.is_empty() {
        return String::new();
    }
    let pairs: Vec<String> = params
        .iter()
        .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
        .collect();
    format!("?{}", pairs.join("&"))
}

/// Current page query parameters
pub fn read_params() -> HashMap<String, String> {
    web_sys::window()
        .and_then(|w| w.location().search().ok())
        .map(|search| parse_query(&search))
        .unwrap_or_default()
}

/// Replace the query string without adding a history entry
pub fn write_params(params: &[(String, String)]) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let Ok(path) = window.location().pathname() else {
        return;
    };
    let url = format!("{}{}", path, build_query(params));
    if let Ok(history) = window.history() {
        if let Err(e) = history.replace_state_with_url(&JsValue::NULL, "", Some(&url)) {
            log::warn!("history.replaceState failed: {:?}", e);
        }
    }
}
