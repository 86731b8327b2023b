//! 地址解析フロー
//!
//! 入力検証 → `/find-hk-addresses` 呼び出し → 応答の `data` に成功フラグを付与

use serde_json::Value;

use crate::api::{ApiClient, Transport};
use crate::constants::{colors, CONFIDENCE_HIGH, CONFIDENCE_MEDIUM};
use crate::envelope::is_ok_status;
use crate::error::{Error, Result};
use crate::types::AnalysisResult;

/// 入力例
pub const EXAMPLE_ADDRESS: &str = "香港九龍深水埗欽州街37K西九龍中心16樓1605室";

/// 解析で識別される成分と入力例
pub const RECOGNIZED_COMPONENTS: [(&str, &str); 7] = [
    ("區域", "九龍、香港島"),
    ("地區", "深水埗、灣仔"),
    ("街道名稱", "欽州街"),
    ("街道號碼", "37K"),
    ("建築物", "西九龍中心"),
    ("樓層", "16樓"),
    ("單位", "1605室"),
];

pub const EMPTY_ADDRESS_MESSAGE: &str = "請輸入地址";
pub const ANALYZE_FAILED_PREFIX: &str = "地址分析失敗: ";

/// 空白のみの入力を弾く
pub fn validate_address(input: &str) -> Result<()> {
    if input.trim().is_empty() {
        return Err(Error::Validation(EMPTY_ADDRESS_MESSAGE.to_string()));
    }
    Ok(())
}

/// 地址を解析する
///
/// 検証に失敗した場合は通信しない。入力はトリムせずにそのまま送る。
pub async fn analyze_address<T: Transport>(
    client: &ApiClient<T>,
    input: &str,
) -> Result<AnalysisResult> {
    validate_address(input)?;
    let body = client.analyze_address(input).await?;
    Ok(result_from_body(&body))
}

/// 応答ボディから表示用の結果を作る
///
/// `data` が欠けている・オブジェクトでない場合は成功フラグのみの結果になる
pub fn result_from_body(body: &Value) -> AnalysisResult {
    let success = is_ok_status(body.get("status"));

    let mut result = match body.get("data") {
        Some(data @ Value::Object(_)) => {
            serde_json::from_value::<AnalysisResult>(data.clone()).unwrap_or_else(|e| {
                log::warn!("analysis payload could not be decoded: {}", e);
                AnalysisResult::default()
            })
        }
        _ => {
            log::warn!("analysis response has no data object");
            AnalysisResult::default()
        }
    };
    result.success = success;
    result
}

/// 失敗時に表示する1行メッセージ
pub fn failure_message(error: &Error) -> String {
    match error {
        Error::Validation(message) => message.clone(),
        other => format!("{}{}", ANALYZE_FAILED_PREFIX, other.user_message()),
    }
}

/// 信頼度の区分
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfidenceLevel {
    High,
    Medium,
    Low,
}

impl ConfidenceLevel {
    pub fn of(confidence: f64) -> Self {
        if confidence >= CONFIDENCE_HIGH {
            ConfidenceLevel::High
        } else if confidence >= CONFIDENCE_MEDIUM {
            ConfidenceLevel::Medium
        } else {
            ConfidenceLevel::Low
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            ConfidenceLevel::High => colors::SUCCESS,
            ConfidenceLevel::Medium => colors::WARNING,
            ConfidenceLevel::Low => colors::ERROR,
        }
    }
}

/// 信頼度の表示文字列（例: "93.00%"、未報告は "N/A"）
pub fn format_confidence(confidence: Option<f64>) -> String {
    match confidence {
        Some(c) => format!("{:.2}%", c * 100.0),
        None => "N/A".to_string(),
    }
}

/// 解析状態の文言
pub fn status_label(result: &AnalysisResult) -> &'static str {
    if result.success {
        "解析成功"
    } else {
        "解析失敗"
    }
}

/// 配送可否の文言（未報告はNone）
pub fn delivery_label(result: &AnalysisResult) -> Option<&'static str> {
    result.will_delivery.as_bool().map(|deliverable| {
        if deliverable {
            "可以配送"
        } else {
            "無法配送"
        }
    })
}

/// 値のある項目だけを表示順に並べる（状態・配送可否・信頼度は別扱い）
pub fn detail_rows(result: &AnalysisResult) -> Vec<(&'static str, String)> {
    let text_fields = [
        ("地址", &result.address),
        ("區域", &result.district),
        ("地區", &result.region),
        ("屋苑", &result.estate),
        ("街道", &result.street),
        ("街道號碼", &result.street_number),
        ("建築物", &result.building),
        ("樓層", &result.floor),
        ("單位", &result.unit),
        ("配送區碼", &result.delivery_zone_code),
    ];

    let mut rows: Vec<(&'static str, String)> = text_fields
        .into_iter()
        .filter_map(|(label, value)| value.as_ref().map(|v| (label, v.clone())))
        .collect();

    if let Some((lat, lng)) = result.coordinates() {
        rows.push(("經緯度", format!("{}, {}", lat, lng)));
    }
    rows
}
