//! バックエンドAPI（ブラウザ版）

pub mod backend;

pub use backend::{api_config, new_client, ArsClient};
