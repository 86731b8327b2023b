//! アプリケーション定数

/// 画面に表示するバージョン
pub const APP_VERSION: &str = "v0.1.7";

/// バックエンドのデフォルトベースURL
pub const DEFAULT_BASE_URL: &str = "http://192.168.11.150:8080/hktv_ars";

/// ベースURLを上書きする環境変数名（CLIは実行時、WASMはビルド時に参照）
pub const BASE_URL_ENV: &str = "ARS_API_BASE_URL";

/// APIエンドポイント
pub mod endpoints {
    pub const ANALYZE_ADDRESS: &str = "/find-hk-addresses";
    pub const GET_RECORDS: &str = "/records";
    pub const TEST_REDIS: &str = "/test-redis";
    pub const SEND_MESSAGE: &str = "/send";
}

/// キャッシュ回避用クエリパラメータ名
pub const CACHE_BUST_PARAM: &str = "_t";

pub const DEFAULT_PAGE: u32 = 1;
pub const DEFAULT_PAGE_SIZE: u32 = 10;
pub const PAGE_SIZE_OPTIONS: [u32; 4] = [10, 20, 50, 100];

/// 表示色
pub mod colors {
    pub const SUCCESS: &str = "#52c41a";
    pub const ERROR: &str = "#f5222d";
    pub const WARNING: &str = "#faad14";
    pub const INFO: &str = "#1890ff";
}

/// 信頼度の閾値
pub const CONFIDENCE_HIGH: f64 = 0.8;
pub const CONFIDENCE_MEDIUM: f64 = 0.5;

/// 地址テキストの切り詰め長（文字数）
pub const DEFAULT_TRUNCATE_LENGTH: usize = 50;
