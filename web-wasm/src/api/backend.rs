//! fetch APIによるTransport実装

use ars_common::constants::DEFAULT_BASE_URL;
use ars_common::{ApiClient, ApiConfig, Error, RawResponse, Result, Transport};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};

/// ブラウザ版のAPIクライアント
pub type ArsClient = ApiClient<FetchTransport>;

/// `window.fetch` でGETする
#[derive(Debug, Clone, Copy, Default)]
pub struct FetchTransport;

impl Transport for FetchTransport {
    async fn get(&self, url: &str) -> Result<RawResponse> {
        let opts = RequestInit::new();
        opts.set_method("GET");
        opts.set_mode(RequestMode::Cors);

        let request = Request::new_with_str_and_init(url, &opts).map_err(transport_error)?;
        request
            .headers()
            .set("Accept", "application/json")
            .map_err(transport_error)?;

        let window = web_sys::window()
            .ok_or_else(|| Error::Transport("window is not available".to_string()))?;
        let resp_value = JsFuture::from(window.fetch_with_request(&request))
            .await
            .map_err(transport_error)?;
        let resp: Response = resp_value.dyn_into().map_err(transport_error)?;

        let text = JsFuture::from(resp.text().map_err(transport_error)?)
            .await
            .map_err(transport_error)?;

        Ok(RawResponse {
            status: resp.status(),
            body: text.as_string().unwrap_or_default(),
        })
    }
}

/// JS側の例外を1行のメッセージにする（例: "Failed to fetch"）
fn transport_error(value: JsValue) -> Error {
    let message = value
        .dyn_ref::<js_sys::Error>()
        .map(|e| String::from(e.message()))
        .or_else(|| value.as_string())
        .unwrap_or_else(|| format!("{:?}", value));
    Error::Transport(message)
}

fn browser_clock() -> u64 {
    js_sys::Date::now() as u64
}

/// ビルド時に `ARS_API_BASE_URL` があればそれを使う
pub fn api_config() -> ApiConfig {
    ApiConfig::new(option_env!("ARS_API_BASE_URL").unwrap_or(DEFAULT_BASE_URL))
}

pub fn new_client() -> ArsClient {
    ApiClient::new(api_config(), FetchTransport, browser_clock)
}

#[cfg(all(target_arch = "wasm32", test))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn transport_error_uses_js_error_message() {
        let err = transport_error(js_sys::Error::new("Failed to fetch").into());
        assert_eq!(err.user_message(), "Failed to fetch");
    }

    #[wasm_bindgen_test]
    fn browser_clock_is_positive() {
        assert!(browser_clock() > 0);
    }
}
