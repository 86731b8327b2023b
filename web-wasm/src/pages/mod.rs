//! 各画面

pub mod address_analysis;
pub mod address_records;
pub mod dashboard;
