//! 解析結果パネル

use ars_common::analysis::{delivery_label, detail_rows, format_confidence, status_label};
use ars_common::{format_address, AnalysisResult, ConfidenceLevel, Deliverability};
use leptos::prelude::*;

#[component]
pub fn AddressResult(result: AnalysisResult) -> impl IntoView {
    let status_class = if result.success {
        "tag tag-success"
    } else {
        "tag tag-error"
    };

    // 未報告なら行ごと出さない
    let delivery = delivery_label(&result).map(|label| {
        let class = if result.will_delivery == Deliverability::Deliverable {
            "tag tag-success"
        } else {
            "tag tag-error"
        };
        view! {
            <tr>
                <th>"可否配送"</th>
                <td><span class=class>{label}</span></td>
            </tr>
        }
    });

    let confidence_style = result
        .confidence
        .map(|c| format!("color: {}", ConfidenceLevel::of(c).color()))
        .unwrap_or_default();

    let summary = format_address(&result);

    view! {
        <div class="card result-card">
            <h4>"解析結果"</h4>
            <table class="descriptions">
                <tbody>
                    <tr>
                        <th>"解析狀態"</th>
                        <td><span class=status_class>{status_label(&result)}</span></td>
                    </tr>
                    {detail_rows(&result)
                        .into_iter()
                        .map(|(label, value)| view! { <tr><th>{label}</th><td>{value}</td></tr> })
                        .collect_view()}
                    {delivery}
                    <tr>
                        <th>"置信度"</th>
                        <td style=confidence_style>{format_confidence(result.confidence)}</td>
                    </tr>
                </tbody>
            </table>
            {(!summary.is_empty()).then(|| view! { <p class="text-muted">{summary}</p> })}
        </div>
    }
}
