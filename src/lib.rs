//! ARS Console CLI
//!
//! 地址解析バックエンドをターミナルから操作する

pub mod cli;
pub mod client;
pub mod config;
pub mod error;
pub mod output;
