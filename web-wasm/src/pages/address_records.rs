//! 地址記錄

use ars_common::constants::DEFAULT_TRUNCATE_LENGTH;
use ars_common::export::{CSV_MIME_TYPE, EXPORT_EMPTY_WARNING, EXPORT_SUCCESS_MESSAGE};
use ars_common::records::{reset_request, search_request, FETCH_FAILED_MESSAGE};
use ars_common::{
    export::utc_date_from_millis, export_records, fetch_records_page, record_cells,
    record_detail_rows, truncate_text, ExportOutcome, PageRequest, RecordRow, RecordsPage,
    RequestSequence,
};
use leptos::ev::KeyboardEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::ArsClient;
use crate::components::deliverability_tag::DeliverabilityTag;
use crate::components::pagination::Pagination;
use crate::components::toast::use_toasts;
use crate::export::download::trigger_download;

#[component]
pub fn AddressRecords() -> impl IntoView {
    let client = expect_context::<ArsClient>();
    let toasts = use_toasts();
    let sequence = RequestSequence::new();

    // 行とページ状態は常に一緒に差し替える
    let (listing, set_listing) = signal(RecordsPage::empty(PageRequest::default()));
    let (loading, set_loading) = signal(false);
    let (search_text, set_search_text) = signal(String::new());
    let (selected, set_selected) = signal(None::<(usize, RecordRow)>);

    let fetch_page = move |request: PageRequest| {
        set_loading.set(true);
        let ticket = sequence.issue();
        let sequence = sequence.clone();
        let client = client.clone();
        spawn_local(async move {
            let outcome = fetch_records_page(&client, request).await;
            if !sequence.is_latest(ticket) {
                log::debug!("dropping superseded records response (page {})", request.page_no);
                return;
            }
            match outcome {
                Ok(page) => set_listing.set(page),
                Err(e) => {
                    log::error!("records fetch error: {:?}", e);
                    toasts.error(FETCH_FAILED_MESSAGE);
                    set_listing.update(|listing| listing.rows.clear());
                }
            }
            set_selected.set(None);
            set_loading.set(false);
        });
    };

    fetch_page(PageRequest::default());

    let on_search = {
        let fetch_page = fetch_page.clone();
        move || fetch_page(search_request(&listing.get_untracked().page))
    };

    let on_reset = {
        let fetch_page = fetch_page.clone();
        move || {
            let mut text = search_text.get_untracked();
            let request = reset_request(&listing.get_untracked().page, &mut text);
            set_search_text.set(text);
            fetch_page(request);
        }
    };

    let on_export = move || {
        let rows = listing.with_untracked(|listing| listing.rows.clone());
        let date = utc_date_from_millis(js_sys::Date::now() as i64).unwrap_or_default();
        match export_records(&rows, date) {
            ExportOutcome::Empty => toasts.warning(EXPORT_EMPTY_WARNING),
            ExportOutcome::Ready(export) => {
                match trigger_download(&export.file_name, &export.content, CSV_MIME_TYPE) {
                    Ok(()) => toasts.success(EXPORT_SUCCESS_MESSAGE),
                    Err(e) => {
                        log::error!("csv download failed: {:?}", e);
                        toasts.error(format!("導出失敗: {:?}", e));
                    }
                }
            }
        }
    };

    let page = Signal::derive(move || listing.get().page);

    view! {
        <div class="address-records">
            <h2>"地址記錄"</h2>
            <p>"顯示所有已處理的地址記錄和解析結果。"</p>
            <div class="card">
                <div class="toolbar">
                    <input
                        type="text"
                        placeholder="搜索地址..."
                        prop:value=move || search_text.get()
                        on:input=move |ev| set_search_text.set(event_target_value(&ev))
                        on:keydown={
                            let on_search = on_search.clone();
                            move |ev: KeyboardEvent| {
                                if ev.key() == "Enter" {
                                    on_search();
                                }
                            }
                        }
                    />
                    <button class="btn btn-primary" disabled=move || loading.get() on:click=move |_| on_search()>
                        "搜索"
                    </button>
                    <button class="btn" disabled=move || loading.get() on:click=move |_| on_reset()>
                        "重置"
                    </button>
                    <button class="btn" on:click=move |_| on_export()>
                        "導出CSV"
                    </button>
                </div>

                <table class="records-table" class:loading=move || loading.get()>
                    <thead>
                        <tr>
                            <th>"ID"</th>
                            <th>"地址"</th>
                            <th>"接收時間"</th>
                            <th>"區域"</th>
                            <th>"街道"</th>
                            <th>"配送區編碼"</th>
                            <th>"是否配送"</th>
                            <th>"詳情"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            let rows = listing.get().rows;
                            if rows.is_empty() {
                                return view! {
                                    <tr><td colspan="8" class="text-muted">"暫無數據"</td></tr>
                                }
                                    .into_any();
                            }
                            rows.into_iter()
                                .enumerate()
                                .map(|(index, row)| record_row(index, row, set_selected))
                                .collect_view()
                                .into_any()
                        }}
                    </tbody>
                </table>

                <Pagination page=page disabled=loading on_change=fetch_page />
            </div>

            {move || {
                selected
                    .get()
                    .map(|(index, row)| {
                        view! {
                            <div class="card record-detail">
                                <h4>"記錄詳情"</h4>
                                <table class="descriptions">
                                    <tbody>
                                        {record_detail_rows(&row, index)
                                            .into_iter()
                                            .map(|(label, value)| {
                                                view! { <tr><th>{label}</th><td>{value}</td></tr> }
                                            })
                                            .collect_view()}
                                    </tbody>
                                </table>
                                <button class="btn" on:click=move |_| set_selected.set(None)>
                                    "關閉"
                                </button>
                            </div>
                        }
                    })
            }}
        </div>
    }
}

fn record_row(
    index: usize,
    row: RecordRow,
    set_selected: WriteSignal<Option<(usize, RecordRow)>>,
) -> impl IntoView {
    let cells = record_cells(&row, index);
    let short_address = truncate_text(&cells.address, DEFAULT_TRUNCATE_LENGTH);
    let deliverability = row.will_deliver;

    view! {
        <tr>
            <td>{cells.id}</td>
            <td title=cells.address>{short_address}</td>
            <td>{cells.receive_time}</td>
            <td>{cells.district}</td>
            <td>{cells.street}</td>
            <td>{cells.delivery_zone_code}</td>
            <td><DeliverabilityTag value=deliverability /></td>
            <td>
                <button
                    class="btn btn-link"
                    on:click=move |_| set_selected.set(Some((index, row.clone())))
                >
                    "查看詳情"
                </button>
            </td>
        </tr>
    }
}
