//! バックエンドAPIクライアント
//!
//! 4つの操作（地址解析・記録一覧・Redis疎通・MQ送信）をまとめる。
//! 実際のHTTP通信は `Transport` に委譲し、ブラウザ版は fetch、
//! CLI版は reqwest で実装する。テストではメモリ上の偽実装を差し込む。

use serde_json::Value;

use crate::constants::{endpoints, CACHE_BUST_PARAM, DEFAULT_BASE_URL};
use crate::error::{Error, Result};
use crate::types::PageRequest;

/// 現在時刻（UNIXミリ秒）を返す関数
///
/// `std::time::SystemTime` はwasm32で使えないため外から渡す
pub type Clock = fn() -> u64;

/// 接続設定
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

impl ApiConfig {
    /// 末尾の `/` は取り除く
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim().trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// エンドポイントの完全なURLを組み立てる
    pub fn url(&self, endpoint: &Endpoint<'_>, cache_bust: Option<u64>) -> String {
        let mut query = endpoint.query();
        if let Some(token) = cache_bust {
            query.push((CACHE_BUST_PARAM, token.to_string()));
        }

        let mut url = format!("{}{}", self.base_url, endpoint.path());
        for (i, (key, value)) in query.iter().enumerate() {
            url.push(if i == 0 { '?' } else { '&' });
            url.push_str(key);
            url.push('=');
            url.push_str(value);
        }
        url
    }
}

/// バックエンドのエンドポイント
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint<'a> {
    AnalyzeAddress { address: &'a str },
    Records(PageRequest),
    TestRedis,
    SendMessage { message: &'a str },
}

impl Endpoint<'_> {
    fn path(&self) -> String {
        match self {
            Endpoint::AnalyzeAddress { .. } => endpoints::ANALYZE_ADDRESS.to_string(),
            Endpoint::Records(_) => endpoints::GET_RECORDS.to_string(),
            Endpoint::TestRedis => endpoints::TEST_REDIS.to_string(),
            Endpoint::SendMessage { message } => {
                format!("{}/{}", endpoints::SEND_MESSAGE, urlencoding::encode(message))
            }
        }
    }

    /// エンコード済みのクエリ
    fn query(&self) -> Vec<(&'static str, String)> {
        match self {
            Endpoint::AnalyzeAddress { address } => {
                vec![("address", urlencoding::encode(address).into_owned())]
            }
            Endpoint::Records(request) => vec![
                ("pageNo", request.page_no.to_string()),
                ("pageSize", request.page_size.to_string()),
            ],
            Endpoint::TestRedis | Endpoint::SendMessage { .. } => Vec::new(),
        }
    }
}

/// HTTP応答（ステータスとボディ文字列）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

impl RawResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// ボディをJSONとして読む（空ボディはnull）
    pub fn json(&self) -> Result<Value> {
        if self.body.trim().is_empty() {
            return Ok(Value::Null);
        }
        Ok(serde_json::from_str(&self.body)?)
    }

    /// エラー応答の `message` フィールド
    pub fn backend_message(&self) -> Option<String> {
        let value: Value = serde_json::from_str(&self.body).ok()?;
        value
            .get("message")
            .and_then(Value::as_str)
            .map(str::to_string)
    }
}

/// HTTP GETを1回行う
///
/// 接続自体に失敗した場合のみ `Err` を返し、ステータスの判定は呼び出し側で行う
#[allow(async_fn_in_trait)]
pub trait Transport {
    async fn get(&self, url: &str) -> Result<RawResponse>;
}

/// APIクライアント
#[derive(Debug, Clone)]
pub struct ApiClient<T> {
    config: ApiConfig,
    transport: T,
    clock: Clock,
}

impl<T: Transport> ApiClient<T> {
    pub fn new(config: ApiConfig, transport: T, clock: Clock) -> Self {
        Self {
            config,
            transport,
            clock,
        }
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn now_millis(&self) -> u64 {
        (self.clock)()
    }

    async fn send(&self, endpoint: Endpoint<'_>) -> Result<RawResponse> {
        let url = self.config.url(&endpoint, Some(self.now_millis()));
        log::debug!("GET {}", url);

        let response = self.transport.get(&url).await?;
        if !response.is_success() {
            log::warn!("GET {} failed with status {}", url, response.status);
            return Err(Error::Http {
                status: response.status,
                message: response.backend_message(),
            });
        }
        Ok(response)
    }

    /// 地址解析
    pub async fn analyze_address(&self, address: &str) -> Result<Value> {
        self.send(Endpoint::AnalyzeAddress { address }).await?.json()
    }

    /// 記録一覧（1ページ分）
    pub async fn list_records(&self, request: PageRequest) -> Result<Value> {
        self.send(Endpoint::Records(request)).await?.json()
    }

    /// Redis疎通テスト（ボディをそのまま返す）
    pub async fn test_redis(&self) -> Result<String> {
        Ok(self.send(Endpoint::TestRedis).await?.body)
    }

    /// MQへテストメッセージを送る（ボディをそのまま返す）
    pub async fn send_message(&self, message: &str) -> Result<String> {
        Ok(self.send(Endpoint::SendMessage { message }).await?.body)
    }
}

/// テスト用のメモリ上トランスポート
#[cfg(test)]
pub(crate) mod testing {
    use super::*;
    use std::cell::RefCell;
    use std::collections::VecDeque;

    pub const FIXED_NOW: u64 = 1_700_000_000_000;

    pub fn fixed_clock() -> u64 {
        FIXED_NOW
    }

    /// 呼ばれたURLを記録し、用意した応答を順に返す
    #[derive(Default)]
    pub struct FakeTransport {
        pub calls: RefCell<Vec<String>>,
        replies: RefCell<VecDeque<Result<RawResponse>>>,
    }

    impl FakeTransport {
        pub fn reply(self, status: u16, body: impl Into<String>) -> Self {
            self.replies.borrow_mut().push_back(Ok(RawResponse {
                status,
                body: body.into(),
            }));
            self
        }

        pub fn fail(self, message: &str) -> Self {
            self.replies
                .borrow_mut()
                .push_back(Err(Error::Transport(message.to_string())));
            self
        }
    }

    impl Transport for FakeTransport {
        async fn get(&self, url: &str) -> Result<RawResponse> {
            self.calls.borrow_mut().push(url.to_string());
            self.replies
                .borrow_mut()
                .pop_front()
                .unwrap_or_else(|| Err(Error::Transport("no reply queued".to_string())))
        }
    }

    pub fn client(transport: FakeTransport) -> ApiClient<FakeTransport> {
        ApiClient::new(ApiConfig::new("http://backend.test/hktv_ars/"), transport, fixed_clock)
    }
}
