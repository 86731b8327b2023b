use ars_common::Deliverability;
use leptos::prelude::*;

/// 配送可否タグ（可配送 / 不可配送 / N/A）
#[component]
pub fn DeliverabilityTag(value: Deliverability) -> impl IntoView {
    view! {
        <span class=format!("tag tag-{}", value.tag_class())>{value.tag_label()}</span>
    }
}
