//! 統計カード

use ars_common::StatCard;
use leptos::prelude::*;

#[component]
pub fn StatusCard(card: StatCard) -> impl IntoView {
    let style = card
        .color
        .map(|c| format!("color: {}", c))
        .unwrap_or_default();

    view! {
        <div class="card stat-card">
            <div class="stat-title">{card.title}</div>
            <div class="stat-value" style=style>
                {card.prefix.map(|p| view! { <span class="stat-prefix">{p}</span> })}
                {card.formatted_value()}
                {card.suffix.map(|s| view! { <span class="stat-suffix">{s}</span> })}
            </div>
        </div>
    }
}
