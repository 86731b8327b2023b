use crate::error::{ArsError, Result};
use ars_common::constants::{BASE_URL_ENV, DEFAULT_BASE_URL};
use ars_common::ApiConfig;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// `~/.config/ars-console/config.json`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Config {
    pub base_url: Option<String>,
    pub timeout_seconds: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: None,
            timeout_seconds: 30,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// ファイルがなければデフォルト
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| ArsError::Config("ホームディレクトリが見つかりません".into()))?;
        Ok(home.join(".config").join("ars-console").join("config.json"))
    }

    /// http(s) のURLだけ受け付ける（末尾の `/` は落とす）
    pub fn set_base_url(&mut self, url: &str) -> Result<()> {
        let url = url.trim();
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(ArsError::InvalidBaseUrl(url.to_string()));
        }
        self.base_url = Some(url.trim_end_matches('/').to_string());
        Ok(())
    }

    /// フラグ > 環境変数 > 設定ファイル > デフォルト
    pub fn resolve_base_url(&self, flag: Option<&str>) -> String {
        let env = std::env::var(BASE_URL_ENV).ok();
        self.resolve_base_url_with(flag, env.as_deref())
    }

    pub fn resolve_base_url_with(&self, flag: Option<&str>, env: Option<&str>) -> String {
        [flag, env, self.base_url.as_deref()]
            .into_iter()
            .flatten()
            .map(str::trim)
            .find(|url| !url.is_empty())
            .unwrap_or(DEFAULT_BASE_URL)
            .to_string()
    }

    pub fn api_config(&self, flag: Option<&str>) -> ApiConfig {
        ApiConfig::new(self.resolve_base_url(flag))
    }
}
