//! CSV生成（共通ライブラリ）
//!
//! 読み込み済みの1ページ分だけを対象にする。ブラウザ版はBlobとして
//! ダウンロードさせ、CLI版はファイルに書き出す。

use chrono::{DateTime, NaiveDate};

use crate::types::RecordRow;

/// 固定列（IDは行位置+1）
pub const RECORD_CSV_HEADERS: [&str; 6] = ["ID", "地址", "接收時間", "區域", "街道", "配送區碼"];

pub const CSV_MIME_TYPE: &str = "text/csv;charset=utf-8;";
pub const EXPORT_EMPTY_WARNING: &str = "無數據可導出";
pub const EXPORT_SUCCESS_MESSAGE: &str = "數據導出成功";

/// 生成済みCSV
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvExport {
    pub file_name: String,
    pub content: String,
}

/// エクスポート結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportOutcome {
    /// 行がないため何もしない
    Empty,
    Ready(CsvExport),
}

/// 地址欄だけをダブルクォートで囲み、内部の `"` を `""` にする
fn quote_address(address: Option<&str>) -> String {
    format!("\"{}\"", address.unwrap_or_default().replace('"', "\"\""))
}

/// 行をCSV文字列に変換（ヘッダ1行 + 行数分、改行は `\n`）
pub fn records_to_csv(rows: &[RecordRow]) -> String {
    let mut lines = Vec::with_capacity(rows.len() + 1);
    lines.push(RECORD_CSV_HEADERS.join(","));

    for (index, row) in rows.iter().enumerate() {
        let fields = [
            (index + 1).to_string(),
            quote_address(row.address.as_deref()),
            row.receive_time.clone().unwrap_or_default(),
            row.district.clone().unwrap_or_default(),
            row.street.clone().unwrap_or_default(),
            row.original_delivery_zone_code.clone().unwrap_or_default(),
        ];
        lines.push(fields.join(","));
    }

    lines.join("\n")
}

/// `address_records_<YYYY-MM-DD>.csv`
pub fn export_file_name(date: NaiveDate) -> String {
    format!("address_records_{}.csv", date.format("%Y-%m-%d"))
}

/// UNIXミリ秒からUTC日付を得る（ファイル名用）
pub fn utc_date_from_millis(millis: i64) -> Option<NaiveDate> {
    DateTime::from_timestamp_millis(millis).map(|dt| dt.date_naive())
}

/// 読み込み済みの行をエクスポートする
pub fn export_records(rows: &[RecordRow], date: NaiveDate) -> ExportOutcome {
    if rows.is_empty() {
        log::warn!("export requested with no rows loaded");
        return ExportOutcome::Empty;
    }

    ExportOutcome::Ready(CsvExport {
        file_name: export_file_name(date),
        content: records_to_csv(rows),
    })
}
