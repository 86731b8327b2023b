//! 表示用フォーマッタ

use chrono::{DateTime, Datelike, FixedOffset, NaiveDate, NaiveDateTime, Timelike};

use crate::types::AnalysisResult;

/// 香港時間 (UTC+8)
const HK_OFFSET_SECS: i32 = 8 * 3600;

/// 日時文字列を香港ロケール形式に整形（例: "2024/3/5 下午3:04:05"）
///
/// - 空文字は "-"
/// - タイムゾーン付きは香港時間へ変換、なしはそのままの時刻として扱う
/// - 解釈できない文字列は入力をそのまま返す
pub fn format_date(input: &str) -> String {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return "-".to_string();
    }

    match parse_timestamp(trimmed) {
        Some(dt) => {
            let (is_pm, hour) = dt.hour12();
            format!(
                "{}/{}/{} {}{}:{:02}:{:02}",
                dt.year(),
                dt.month(),
                dt.day(),
                if is_pm { "下午" } else { "上午" },
                hour,
                dt.minute(),
                dt.second()
            )
        }
        None => {
            log::debug!("unparseable timestamp: {}", trimmed);
            input.to_string()
        }
    }
}

fn parse_timestamp(s: &str) -> Option<NaiveDateTime> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        let hk = FixedOffset::east_opt(HK_OFFSET_SECS)?;
        return Some(dt.with_timezone(&hk).naive_local());
    }

    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, format) {
            return Some(dt);
        }
    }

    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
}

/// 最大文字数を超えたら切り詰めて "..." を付ける
pub fn truncate_text(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let head: String = text.chars().take(max_chars).collect();
    format!("{}...", head)
}

/// 地址の構成要素を ", " で連結（區域・屋苑・街道・街道號碼の順）
pub fn format_address(result: &AnalysisResult) -> String {
    [
        &result.district,
        &result.estate,
        &result.street,
        &result.street_number,
    ]
    .into_iter()
    .flatten()
    .map(String::as_str)
    .collect::<Vec<_>>()
    .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_date_empty() {
        assert_eq!(format_date(""), "-");
        assert_eq!(format_date("   "), "-");
    }

    #[test]
    fn test_format_date_naive_timestamp() {
        assert_eq!(format_date("2024-03-05 15:04:05"), "2024/3/5 下午3:04:05");
        assert_eq!(format_date("2024-03-05T09:30:00.123"), "2024/3/5 上午9:30:00");
        assert_eq!(format_date("2024-12-31T00:00:00"), "2024/12/31 上午12:00:00");
    }

    #[test]
    fn test_format_date_with_offset_converts_to_hong_kong() {
        assert_eq!(format_date("2024-03-05T07:04:05Z"), "2024/3/5 下午3:04:05");
        assert_eq!(format_date("2024-03-05T23:00:00+00:00"), "2024/3/6 上午7:00:00");
    }

    #[test]
    fn test_format_date_date_only_and_garbage() {
        assert_eq!(format_date("2024-03-05"), "2024/3/5 上午12:00:00");
        assert_eq!(format_date("yesterday"), "yesterday");
    }

    #[test]
    fn test_truncate_text() {
        assert_eq!(truncate_text("短い", 50), "短い");
        assert_eq!(truncate_text("", 5), "");
        assert_eq!(truncate_text("香港九龍深水埗欽州街", 4), "香港九龍...");
        assert_eq!(truncate_text("abcde", 5), "abcde");
    }

    #[test]
    fn test_format_address() {
        let result = AnalysisResult {
            district: Some("深水埗".to_string()),
            street: Some("欽州街".to_string()),
            street_number: Some("37K".to_string()),
            building: Some("西九龍中心".to_string()),
            ..Default::default()
        };
        assert_eq!(format_address(&result), "深水埗, 欽州街, 37K");
        assert_eq!(format_address(&AnalysisResult::default()), "");
    }
}
