//! Gateway HTTP Client
//!
//! Sends chat messages to the BondhuBot gateway.

use bondhu::gateway::CHAT_ENDPOINT;
use bondhu::{GatewayErrorBody, GatewayRequest, GatewayResponse};
use gloo_net::http::Request;

/// Default gateway URL
pub const DEFAULT_GATEWAY_URL: &str = "http://localhost:8787";

/// Local storage key holding an override for the gateway URL
const GATEWAY_URL_KEY: &str = "bondhu_gateway_url";

/// Get the gateway URL from local storage or use default
pub fn get_gateway_url() -> String {
    let url = web_sys::window()
        .and_then(|window| window.local_storage().ok().flatten())
        .and_then(|storage| storage.get_item(GATEWAY_URL_KEY).ok().flatten())
        .filter(|url| !url.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_GATEWAY_URL.to_string());
    normalize_base(&url)
}

fn normalize_base(url: &str) -> String {
    url.trim().trim_end_matches('/').to_string()
}

/// Send one message to the gateway and return the model's reply
///
/// No timeout is applied. Any failure comes back as a description for
/// the console; the chat view shows the fallback apology instead.
pub async fn send_message(request: &GatewayRequest) -> Result<String, String> {
    let url = format!("{}{}", get_gateway_url(), CHAT_ENDPOINT);

    let response = Request::post(&url)
        .json(request)
        .map_err(|e| format!("Request build error: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        let status = response.status();
        let error = response
            .json::<GatewayErrorBody>()
            .await
            .map(|body| format!("{} ({})", body.error, body.details))
            .unwrap_or_else(|_| "Unknown gateway error".to_string());
        return Err(format!("Gateway returned {}: {}", status, error));
    }

    let body: GatewayResponse = response
        .json()
        .await
        .map_err(|e| format!("Parse error: {}", e))?;

    Ok(body.response)
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    #[wasm_bindgen_test]
    fn test_normalize_base() {
        assert_eq!(normalize_base("http://localhost:8787/"), DEFAULT_GATEWAY_URL);
        assert_eq!(normalize_base(" https://bot.example.com// "), "https://bot.example.com");
    }
}
