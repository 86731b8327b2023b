//! ブラウザでのファイル保存

pub mod download;
