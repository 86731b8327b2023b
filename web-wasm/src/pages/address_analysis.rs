//! 地址分析

use ars_common::analysis::{EXAMPLE_ADDRESS, RECOGNIZED_COMPONENTS};
use ars_common::{analyze_address, failure_message, validate_address, AnalysisResult, RequestSequence};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::ArsClient;
use crate::components::address_result::AddressResult;

#[component]
pub fn AddressAnalysis() -> impl IntoView {
    let client = expect_context::<ArsClient>();
    let sequence = RequestSequence::new();

    let (address, set_address) = signal(String::new());
    let (result, set_result) = signal(None::<AnalysisResult>);
    let (loading, set_loading) = signal(false);
    let (error, set_error) = signal(String::new());

    let analyze = move || {
        let input = address.get_untracked();
        if let Err(e) = validate_address(&input) {
            set_error.set(failure_message(&e));
            return;
        }

        set_loading.set(true);
        set_error.set(String::new());
        let ticket = sequence.issue();
        let sequence = sequence.clone();
        let client = client.clone();
        spawn_local(async move {
            let outcome = analyze_address(&client, &input).await;
            if !sequence.is_latest(ticket) {
                log::debug!("dropping superseded analysis response");
                return;
            }
            match outcome {
                Ok(analysis) => set_result.set(Some(analysis)),
                Err(e) => {
                    log::error!("address analysis error: {:?}", e);
                    set_error.set(failure_message(&e));
                    set_result.set(None);
                }
            }
            set_loading.set(false);
        });
    };

    view! {
        <div class="address-analysis">
            <h2>"地址分析"</h2>
            <div class="card">
                <textarea
                    rows="4"
                    placeholder="請輸入需要解析的地址..."
                    prop:value=move || address.get()
                    on:input=move |ev| set_address.set(event_target_value(&ev))
                />
                <div class="button-row">
                    <button
                        class="btn btn-primary"
                        disabled=move || loading.get()
                        on:click=move |_| analyze()
                    >
                        "分析地址"
                    </button>
                    <button class="btn" on:click=move |_| set_address.set(EXAMPLE_ADDRESS.to_string())>
                        "使用示例"
                    </button>
                </div>

                <Show when=move || !error.get().is_empty()>
                    <div class="alert alert-error">{move || error.get()}</div>
                </Show>
            </div>

            <Show
                when=move || loading.get()
                fallback=move || result.get().map(|r| view! { <AddressResult result=r /> })
            >
                <div class="loading">
                    <div class="spinner"></div>
                    <p>"正在解析地址，請稍候..."</p>
                </div>
            </Show>

            <div class="card">
                <h4>"使用說明"</h4>
                <p>"本系統使用機器學習和自然語言處理技術來解析香港地址。"</p>
                <p>"您可以輸入完整或部分地址，系統將嘗試識別以下成分："</p>
                <ul>
                    {RECOGNIZED_COMPONENTS
                        .into_iter()
                        .map(|(name, example)| view! { <li>{format!("{} (如：{})", name, example)}</li> })
                        .collect_view()}
                </ul>
            </div>
        </div>
    }
}
