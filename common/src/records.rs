//! 記録一覧フロー
//!
//! 「ページ取得（番号, サイズ）」が唯一の入口。初回表示・ページ操作・
//! 検索・リセットのすべてがここを通る。

use serde_json::Value;

use crate::api::{ApiClient, Transport};
use crate::envelope::{normalize_records, RecordsPage};
use crate::error::{Error, Result};
use crate::formatter::format_date;
use crate::types::{PageRequest, PageState, RecordRow};

pub const FETCH_FAILED_MESSAGE: &str = "獲取地址記錄失敗";

/// 1ページ取得して正規化する
///
/// 通信エラー・2xx以外はErr、応答の形が想定外なら空ページ（Ok）
pub async fn fetch_records_page<T: Transport>(
    client: &ApiClient<T>,
    request: PageRequest,
) -> Result<RecordsPage> {
    log::debug!(
        "fetching records page {} (size {})",
        request.page_no,
        request.page_size
    );
    let body = match client.list_records(request).await {
        Ok(body) => body,
        Err(Error::Json(e)) => {
            log::warn!("records body is not JSON, showing an empty page: {}", e);
            Value::Null
        }
        Err(e) => return Err(e),
    };
    Ok(normalize_records(&body, request))
}

/// 検索: 現在のページサイズで1ページ目を取り直す
///
/// 検索文字列はバックエンドへ送らない
pub fn search_request(page: &PageState) -> PageRequest {
    page.first()
}

/// リセット: 検索文字列を消して1ページ目を取り直す
pub fn reset_request(page: &PageState, search_text: &mut String) -> PageRequest {
    search_text.clear();
    page.first()
}

/// 値のないセルの表示
pub const MISSING_CELL: &str = "N/A";

/// 一覧1行分の表示文字列
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordCells {
    /// 表示位置（1始まり）
    pub id: String,
    pub address: String,
    pub receive_time: String,
    pub district: String,
    pub street: String,
    pub delivery_zone_code: String,
}

pub fn record_cells(row: &RecordRow, index: usize) -> RecordCells {
    let text = |value: &Option<String>| {
        value
            .clone()
            .unwrap_or_else(|| MISSING_CELL.to_string())
    };
    RecordCells {
        id: (index + 1).to_string(),
        address: row.address.clone().unwrap_or_default(),
        receive_time: row
            .receive_time
            .as_deref()
            .map(format_date)
            .unwrap_or_else(|| MISSING_CELL.to_string()),
        district: text(&row.district),
        street: text(&row.street),
        delivery_zone_code: text(&row.original_delivery_zone_code),
    }
}

/// 詳細表示の項目
pub fn record_detail_rows(row: &RecordRow, index: usize) -> Vec<(&'static str, String)> {
    let cells = record_cells(row, index);
    vec![
        ("ID", row.row_key(index)),
        ("地址", cells.address),
        ("接收時間", cells.receive_time),
        ("區域", cells.district),
        ("街道", cells.street),
        ("配送區編碼", cells.delivery_zone_code),
        ("是否配送", row.will_deliver.tag_label().to_string()),
    ]
}
