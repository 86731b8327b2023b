//! 記録一覧レスポンスの正規化
//!
//! `/records` の応答はバージョンによって形が異なる:
//! 1. `{status: 200, data: {list: [...], pagination: {...}}}`（ラップ形式）
//! 2. `{list: [...], pagination: {...}}`（ラップなし）
//!
//! どちらが届いても呼び出し側は区別せずに行リストとページ状態を受け取る。
//! 想定外の形は空の結果として扱い、エラーにはしない。

use serde_json::Value;

use crate::types::{PageRequest, PageState, RecordRow};

/// 正規化済みの1ページ分
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecordsPage {
    pub rows: Vec<RecordRow>,
    pub page: PageState,
}

impl RecordsPage {
    /// 行なし・要求値のページ状態
    pub fn empty(request: PageRequest) -> Self {
        Self {
            rows: Vec::new(),
            page: PageState::from_request(request),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// 応答エンベロープの判別結果
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RecordsEnvelope<'a> {
    /// `{status: 200, data: {list, pagination}}`
    Wrapped {
        list: &'a [Value],
        pagination: Option<&'a Value>,
    },
    /// `{list, pagination}`
    Bare {
        list: &'a [Value],
        pagination: Option<&'a Value>,
    },
    Unrecognized,
}

impl<'a> RecordsEnvelope<'a> {
    /// 優先順位: ラップ形式 → ラップなし → 不明
    pub fn classify(body: &'a Value) -> Self {
        let Some(object) = body.as_object() else {
            return RecordsEnvelope::Unrecognized;
        };

        if is_ok_status(object.get("status")) {
            if let Some(data) = object.get("data").and_then(Value::as_object) {
                if let Some(list) = data.get("list").and_then(Value::as_array) {
                    return RecordsEnvelope::Wrapped {
                        list,
                        pagination: data.get("pagination"),
                    };
                }
            }
        }

        if let Some(list) = object.get("list").and_then(Value::as_array) {
            return RecordsEnvelope::Bare {
                list,
                pagination: object.get("pagination"),
            };
        }

        RecordsEnvelope::Unrecognized
    }

    /// 要求値をフォールバックとして1ページ分に変換
    pub fn into_page(self, request: PageRequest) -> RecordsPage {
        match self {
            RecordsEnvelope::Wrapped { list, pagination }
            | RecordsEnvelope::Bare { list, pagination } => RecordsPage {
                rows: list.iter().map(decode_row).collect(),
                page: page_state(pagination, request),
            },
            RecordsEnvelope::Unrecognized => RecordsPage::empty(request),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            RecordsEnvelope::Wrapped { .. } => "wrapped",
            RecordsEnvelope::Bare { .. } => "bare",
            RecordsEnvelope::Unrecognized => "unrecognized",
        }
    }
}

/// 記録一覧レスポンスを正規化する
///
/// 入力を変更せず、同じ入力に対して常に同じ結果を返す。
///
/// # Examples
/// ```
/// use ars_common::{normalize_records, PageRequest};
/// use serde_json::json;
///
/// let body = json!({"list": [{"address": "香港灣仔道1號"}]});
/// let page = normalize_records(&body, PageRequest { page_no: 3, page_size: 20 });
/// assert_eq!(page.rows.len(), 1);
/// assert_eq!(page.page.current, 3);
/// assert_eq!(page.page.total, 0);
/// ```
pub fn normalize_records(body: &Value, request: PageRequest) -> RecordsPage {
    let envelope = RecordsEnvelope::classify(body);
    if envelope == RecordsEnvelope::Unrecognized {
        log::warn!("unexpected records response shape, showing empty page");
    } else {
        log::debug!("records response envelope: {}", envelope.name());
    }
    envelope.into_page(request)
}

/// `status` が数値の200か（`200.0` も含む）
pub(crate) fn is_ok_status(status: Option<&Value>) -> bool {
    status.and_then(Value::as_f64) == Some(200.0)
}

fn decode_row(value: &Value) -> RecordRow {
    match serde_json::from_value::<RecordRow>(value.clone()) {
        Ok(row) => row,
        Err(e) => {
            log::warn!("skipping undecodable record fields: {}", e);
            RecordRow::default()
        }
    }
}

/// 正の整数として読める値だけを採用する（0・欠落・非数値はNone）
fn positive(value: Option<&Value>) -> Option<u64> {
    let n = match value? {
        Value::Number(n) => n.as_u64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }?;
    (n > 0).then_some(n)
}

fn page_state(pagination: Option<&Value>, request: PageRequest) -> PageState {
    let field = |name: &str| positive(pagination.and_then(|p| p.get(name)));
    let narrow = |n: u64| u32::try_from(n).ok();

    PageState {
        current: field("currentPage").and_then(narrow).unwrap_or(request.page_no),
        page_size: field("pageSize").and_then(narrow).unwrap_or(request.page_size),
        total: field("totalElements").unwrap_or(0),
    }
}
