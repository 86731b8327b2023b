//! UIコンポーネント

pub mod address_result;
pub mod deliverability_tag;
pub mod main_layout;
pub mod pagination;
pub mod status_card;
pub mod toast;
