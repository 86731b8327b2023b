//! 儀表板

use ars_common::{run_probe, Probe, ProbeReport, OVERVIEW_STATS};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::ArsClient;
use crate::components::status_card::StatusCard;
use crate::routes::{navigate, Route};

#[component]
pub fn Dashboard() -> impl IntoView {
    let client = expect_context::<ArsClient>();
    let (running, set_running) = signal(None::<Probe>);
    let (last_report, set_last_report) = signal(None::<ProbeReport>);

    let start_probe = move |probe: Probe| {
        if running.get_untracked().is_some() {
            return;
        }
        set_running.set(Some(probe));
        let client = client.clone();
        spawn_local(async move {
            let report = run_probe(&client, probe).await;
            log::info!("{}", report.text);
            gloo::dialogs::alert(&report.text);
            set_running.set(None);
            set_last_report.set(Some(report));
        });
    };

    let probe_button = move |probe: Probe| {
        let start_probe = start_probe.clone();
        view! {
            <button
                class="btn btn-primary"
                disabled=move || running.get().is_some()
                on:click=move |_| start_probe(probe)
            >
                {move || {
                    if running.get() == Some(probe) {
                        format!("{}...", probe.button_label())
                    } else {
                        probe.button_label().to_string()
                    }
                }}
            </button>
        }
    };

    view! {
        <div class="dashboard">
            <h2>"系統概覽"</h2>
            <div class="stat-row">
                {OVERVIEW_STATS
                    .into_iter()
                    .map(|card| view! { <StatusCard card=card /> })
                    .collect_view()}
            </div>

            <div class="card-row">
                <div class="card">
                    <h4>"地址分析"</h4>
                    <p>"輸入香港地址，解析出區域、街道、建築物等結構化資料"</p>
                    <button class="btn btn-primary" on:click=move |_| navigate(Route::AddressAnalysis)>
                        "開始分析"
                    </button>
                </div>
                <div class="card">
                    <h4>"地址記錄"</h4>
                    <p>"查看歷史解析記錄並導出數據"</p>
                    <button class="btn btn-primary" on:click=move |_| navigate(Route::AddressRecords)>
                        "查看記錄"
                    </button>
                </div>
            </div>

            <div class="card">
                <h4>"系統連接測試"</h4>
                <div class="button-row">
                    {probe_button(Probe::Cache)}
                    {probe_button(Probe::Queue)}
                </div>
                {move || {
                    last_report
                        .get()
                        .map(|report| {
                            let style = format!("color: {}", report.color());
                            view! {
                                <p class="probe-result" style=style>
                                    {report.text}
                                </p>
                            }
                        })
                }}
            </div>
        </div>
    }
}
