use thiserror::Error;

#[derive(Error, Debug)]
pub enum ArsError {
    #[error("設定エラー: {0}")]
    Config(String),

    #[error("ベースURLが不正です: {0}（http:// または https:// で始めてください）")]
    InvalidBaseUrl(String),

    #[error("HTTPクライアントの初期化に失敗: {0}")]
    ClientBuild(String),

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Common(#[from] ars_common::Error),
}

pub type Result<T> = std::result::Result<T, ArsError>;
