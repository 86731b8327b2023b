//! 画面表示用の型定義
//!
//! バックエンドのJSONをそのまま受ける一時的なビューモデル:
//! - AnalysisResult: 地址解析1件分の結果
//! - RecordRow: 解析履歴の1行
//! - PageState / PageRequest: ページング状態と要求

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;
use std::fmt;

use crate::constants::{DEFAULT_PAGE, DEFAULT_PAGE_SIZE};

/// 文字列または数値を受け付け、空文字はNoneとして扱う
fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::String(s)) if !s.trim().is_empty() => Some(s),
        Some(Value::Number(n)) => Some(n.to_string()),
        _ => None,
    })
}

/// 数値または数値文字列を受け付ける
fn lenient_number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => s.trim().parse().ok(),
        _ => None,
    })
}

fn lenient_id<'de, D>(deserializer: D) -> Result<Option<RecordId>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::Number(n)) => Some(match n.as_i64() {
            Some(id) => RecordId::Number(id),
            None => RecordId::Text(n.to_string()),
        }),
        Some(Value::String(s)) if !s.is_empty() => Some(RecordId::Text(s)),
        _ => None,
    })
}

// =============================================
// Deliverability
// =============================================

/// 配送可否
///
/// バックエンドは真偽値と "true"/"false" 文字列の両方を返す
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Deliverability {
    Deliverable,
    NotDeliverable,
    #[default]
    Unknown,
}

impl Deliverability {
    pub fn from_value(value: &Value) -> Self {
        match value {
            Value::Bool(true) => Deliverability::Deliverable,
            Value::Bool(false) => Deliverability::NotDeliverable,
            Value::String(s) if s == "true" => Deliverability::Deliverable,
            Value::String(s) if s == "false" => Deliverability::NotDeliverable,
            _ => Deliverability::Unknown,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Deliverability::Deliverable => Some(true),
            Deliverability::NotDeliverable => Some(false),
            Deliverability::Unknown => None,
        }
    }

    pub fn is_reported(&self) -> bool {
        !matches!(self, Deliverability::Unknown)
    }

    /// 記録一覧のタグ文言
    pub fn tag_label(&self) -> &'static str {
        match self {
            Deliverability::Deliverable => "可配送",
            Deliverability::NotDeliverable => "不可配送",
            Deliverability::Unknown => "N/A",
        }
    }

    /// タグのCSSクラス
    pub fn tag_class(&self) -> &'static str {
        match self {
            Deliverability::Deliverable => "success",
            Deliverability::NotDeliverable => "error",
            Deliverability::Unknown => "default",
        }
    }
}

impl<'de> Deserialize<'de> for Deliverability {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Ok(Deliverability::from_value(&value))
    }
}

impl Serialize for Deliverability {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.as_bool().serialize(serializer)
    }
}

// =============================================
// AnalysisResult
// =============================================

/// 地址解析結果
///
/// すべての項目は任意。存在しない項目は「バックエンドが返さなかった」を意味する。
/// フィールド名は現行の `/find-hk-addresses` 応答（`dist`, `number`,
/// `willDelivery`）に合わせている。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    /// 応答の `status == 200` から導出（ペイロード側の値は使わない）
    #[serde(skip_deserializing)]
    pub success: bool,

    #[serde(default, deserialize_with = "lenient_text", skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,

    #[serde(rename = "dist", default, deserialize_with = "lenient_text", skip_serializing_if = "Option::is_none")]
    pub district: Option<String>,

    #[serde(default, deserialize_with = "lenient_text", skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,

    #[serde(default, deserialize_with = "lenient_text", skip_serializing_if = "Option::is_none")]
    pub estate: Option<String>,

    #[serde(default, deserialize_with = "lenient_text", skip_serializing_if = "Option::is_none")]
    pub street: Option<String>,

    #[serde(rename = "number", default, deserialize_with = "lenient_text", skip_serializing_if = "Option::is_none")]
    pub street_number: Option<String>,

    #[serde(default, deserialize_with = "lenient_text", skip_serializing_if = "Option::is_none")]
    pub building: Option<String>,

    #[serde(default, deserialize_with = "lenient_text", skip_serializing_if = "Option::is_none")]
    pub floor: Option<String>,

    #[serde(default, deserialize_with = "lenient_text", skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,

    /// 0.0〜1.0
    #[serde(default, deserialize_with = "lenient_number", skip_serializing_if = "Option::is_none")]
    pub confidence: Option<f64>,

    #[serde(default, deserialize_with = "lenient_number", skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,

    #[serde(default, deserialize_with = "lenient_number", skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,

    #[serde(default, deserialize_with = "lenient_text", skip_serializing_if = "Option::is_none")]
    pub delivery_zone_code: Option<String>,

    #[serde(rename = "willDelivery", default, skip_serializing_if = "Deliverability::is_unreported")]
    pub will_delivery: Deliverability,
}

impl Deliverability {
    fn is_unreported(&self) -> bool {
        !self.is_reported()
    }
}

impl AnalysisResult {
    /// 経緯度（両方そろっている場合のみ）
    pub fn coordinates(&self) -> Option<(f64, f64)> {
        match (self.latitude, self.longitude) {
            (Some(lat), Some(lng)) => Some((lat, lng)),
            _ => None,
        }
    }
}

// =============================================
// RecordRow
// =============================================

/// 旧形式の応答に含まれていた行ID
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordId {
    Number(i64),
    Text(String),
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordId::Number(id) => write!(f, "{}", id),
            RecordId::Text(id) => f.write_str(id),
        }
    }
}

impl Serialize for RecordId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            RecordId::Number(id) => serializer.serialize_i64(*id),
            RecordId::Text(id) => serializer.serialize_str(id),
        }
    }
}

/// 解析履歴の1行
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordRow {
    #[serde(default, deserialize_with = "lenient_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordId>,

    #[serde(default, deserialize_with = "lenient_text")]
    pub address: Option<String>,

    #[serde(default, deserialize_with = "lenient_text")]
    pub receive_time: Option<String>,

    #[serde(default, deserialize_with = "lenient_text")]
    pub district: Option<String>,

    #[serde(default, deserialize_with = "lenient_text")]
    pub street: Option<String>,

    #[serde(default, deserialize_with = "lenient_text")]
    pub original_delivery_zone_code: Option<String>,

    #[serde(default)]
    pub will_deliver: Deliverability,
}

impl RecordRow {
    /// 行キー: IDがあればそれを、なければ位置を使う
    pub fn row_key(&self, index: usize) -> String {
        match &self.id {
            Some(id) => id.to_string(),
            None => format!("#{}", index + 1),
        }
    }
}

// =============================================
// Paging
// =============================================

/// 一覧取得の要求
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page_no: u32,
    pub page_size: u32,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page_no: DEFAULT_PAGE,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

/// ページング状態（バックエンドの報告値をそのまま保持し、検証はしない）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageState {
    pub current: u32,
    pub page_size: u32,
    pub total: u64,
}

impl Default for PageState {
    fn default() -> Self {
        Self::from_request(PageRequest::default())
    }
}

impl PageState {
    /// 要求値をそのまま反映し、総件数0とした状態
    pub fn from_request(request: PageRequest) -> Self {
        Self {
            current: request.page_no,
            page_size: request.page_size,
            total: 0,
        }
    }

    /// 総ページ数（最低1）
    pub fn page_count(&self) -> u32 {
        let size = u64::from(self.page_size.max(1));
        let pages = self.total.div_ceil(size).max(1);
        u32::try_from(pages).unwrap_or(u32::MAX)
    }

    pub fn has_previous(&self) -> bool {
        self.current > 1
    }

    pub fn has_next(&self) -> bool {
        self.current < self.page_count()
    }

    /// 指定ページへの要求（現在のページサイズを維持）
    pub fn goto(&self, page_no: u32) -> PageRequest {
        PageRequest {
            page_no: page_no.clamp(1, self.page_count()),
            page_size: self.page_size,
        }
    }

    pub fn previous(&self) -> PageRequest {
        self.goto(self.current.saturating_sub(1))
    }

    pub fn next(&self) -> PageRequest {
        self.goto(self.current.saturating_add(1))
    }

    /// 1ページ目への要求（検索・リセット用）
    pub fn first(&self) -> PageRequest {
        PageRequest {
            page_no: 1,
            page_size: self.page_size,
        }
    }

    /// ページサイズ変更時の要求（1ページ目に戻る）
    pub fn with_page_size(&self, page_size: u32) -> PageRequest {
        PageRequest {
            page_no: 1,
            page_size,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_deliverability_accepts_bool_and_string() {
        let cases = [
            (json!(true), Deliverability::Deliverable),
            (json!("true"), Deliverability::Deliverable),
            (json!(false), Deliverability::NotDeliverable),
            (json!("false"), Deliverability::NotDeliverable),
            (Value::Null, Deliverability::Unknown),
            (json!("yes"), Deliverability::Unknown),
        ];
        for (value, expected) in cases {
            assert_eq!(Deliverability::from_value(&value), expected, "{value}");
        }
    }

    #[test]
    fn test_deliverability_tag_labels() {
        let row: RecordRow = serde_json::from_value(json!({"willDeliver": "true"})).unwrap();
        assert_eq!(row.will_deliver.tag_label(), "可配送");
        let row: RecordRow = serde_json::from_value(json!({"willDeliver": false})).unwrap();
        assert_eq!(row.will_deliver.tag_label(), "不可配送");
        let row: RecordRow = serde_json::from_value(json!({})).unwrap();
        assert_eq!(row.will_deliver.tag_label(), "N/A");
        assert_eq!(row.will_deliver.tag_class(), "default");
    }

    #[test]
    fn test_analysis_result_deserialize_current_field_names() {
        let json = json!({
            "address": "香港九龍深水埗欽州街37K",
            "dist": "深水埗",
            "street": "欽州街",
            "number": "37K",
            "deliveryZoneCode": "KLN-05",
            "latitude": 22.3307,
            "longitude": "114.1617",
            "willDelivery": true,
            "confidence": 0.93
        });

        let result: AnalysisResult = serde_json::from_value(json).expect("デシリアライズ失敗");
        assert_eq!(result.district.as_deref(), Some("深水埗"));
        assert_eq!(result.street_number.as_deref(), Some("37K"));
        assert_eq!(result.delivery_zone_code.as_deref(), Some("KLN-05"));
        assert_eq!(result.coordinates(), Some((22.3307, 114.1617)));
        assert_eq!(result.will_delivery, Deliverability::Deliverable);
        assert!(!result.success);
    }

    #[test]
    fn test_analysis_result_ignores_empty_and_unknown_fields() {
        let json = json!({
            "estate": "",
            "floor": 16,
            "success": "ignored",
            "somethingElse": [1, 2, 3]
        });

        let result: AnalysisResult = serde_json::from_value(json).expect("デシリアライズ失敗");
        assert_eq!(result.estate, None);
        assert_eq!(result.floor.as_deref(), Some("16"));
        assert_eq!(result.coordinates(), None);
        assert!(!result.will_delivery.is_reported());
    }

    #[test]
    fn test_analysis_result_serialize_skips_absent() {
        let result = AnalysisResult {
            success: true,
            district: Some("灣仔".to_string()),
            ..Default::default()
        };
        let json = serde_json::to_string(&result).expect("シリアライズ失敗");
        assert!(json.contains("\"success\":true"));
        assert!(json.contains("\"dist\":\"灣仔\""));
        assert!(!json.contains("willDelivery"));
        assert!(!json.contains("confidence"));
    }

    #[test]
    fn test_record_row_tolerates_old_id_field() {
        let row: RecordRow = serde_json::from_value(json!({"id": 42, "address": "A"})).unwrap();
        assert_eq!(row.id, Some(RecordId::Number(42)));
        assert_eq!(row.row_key(0), "42");

        let row: RecordRow = serde_json::from_value(json!({"id": "r-7"})).unwrap();
        assert_eq!(row.row_key(3), "r-7");

        let row: RecordRow = serde_json::from_value(json!({"address": "B"})).unwrap();
        assert_eq!(row.id, None);
        assert_eq!(row.row_key(3), "#4");
    }

    #[test]
    fn test_page_state_navigation() {
        let page = PageState {
            current: 2,
            page_size: 5,
            total: 30,
        };
        assert_eq!(page.page_count(), 6);
        assert!(page.has_previous());
        assert!(page.has_next());
        assert_eq!(page.previous(), PageRequest { page_no: 1, page_size: 5 });
        assert_eq!(page.next(), PageRequest { page_no: 3, page_size: 5 });
        assert_eq!(page.first(), PageRequest { page_no: 1, page_size: 5 });
        assert_eq!(page.with_page_size(20), PageRequest { page_no: 1, page_size: 20 });
    }

    #[test]
    fn test_page_state_empty_listing() {
        let page = PageState::default();
        assert_eq!(page.page_count(), 1);
        assert!(!page.has_previous());
        assert!(!page.has_next());
        assert_eq!(page.next(), PageRequest { page_no: 1, page_size: 10 });
    }

    #[test]
    fn test_page_state_zero_page_size_does_not_divide_by_zero() {
        let page = PageState {
            current: 1,
            page_size: 0,
            total: 3,
        };
        assert_eq!(page.page_count(), 3);
    }
}
