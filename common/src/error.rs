//! エラー型定義

use thiserror::Error;

/// 共通エラー型
#[derive(Error, Debug)]
pub enum Error {
    /// 入力検証エラー（通信は発生しない）
    #[error("{0}")]
    Validation(String),

    /// 通信エラー（接続失敗、CORS拒否など）
    #[error("{0}")]
    Transport(String),

    /// 2xx以外のHTTPステータス
    #[error("Request failed with status code {status}")]
    Http {
        status: u16,
        /// レスポンスボディの `message`
        message: Option<String>,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// ユーザー向けメッセージ
    ///
    /// バックエンドが `message` を返していればそれを優先し、
    /// なければエラー自体の表示文字列を使う
    pub fn user_message(&self) -> String {
        match self {
            Error::Http {
                message: Some(message),
                ..
            } if !message.is_empty() => message.clone(),
            other => other.to_string(),
        }
    }
}

/// Result型エイリアス
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_message_prefers_backend_message() {
        let error = Error::Http {
            status: 500,
            message: Some("地址服務暫時不可用".to_string()),
        };
        assert_eq!(error.user_message(), "地址服務暫時不可用");
    }

    #[test]
    fn test_user_message_falls_back_to_status() {
        let error = Error::Http {
            status: 404,
            message: None,
        };
        assert_eq!(error.user_message(), "Request failed with status code 404");

        let error = Error::Http {
            status: 502,
            message: Some(String::new()),
        };
        assert_eq!(error.user_message(), "Request failed with status code 502");
    }

    #[test]
    fn test_user_message_transport() {
        let error = Error::Transport("Failed to fetch".to_string());
        assert_eq!(error.user_message(), "Failed to fetch");
    }

    #[test]
    fn test_error_from_json() {
        let json_error = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let error: Error = json_error.into();
        assert!(matches!(error, Error::Json(_)));
        assert!(error.to_string().contains("JSON error"));
    }

    #[test]
    fn test_error_display_config() {
        let error = Error::Config("ホームディレクトリが見つかりません".to_string());
        assert_eq!(
            error.to_string(),
            "Config error: ホームディレクトリが見つかりません"
        );
    }
}
