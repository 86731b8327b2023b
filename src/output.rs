//! ターミナル出力・ファイル書き出し

use std::path::{Path, PathBuf};

use ars_common::analysis::{delivery_label, detail_rows, format_confidence, status_label};
use ars_common::constants::DEFAULT_TRUNCATE_LENGTH;
use ars_common::{format_address, record_cells, truncate_text, AnalysisResult, CsvExport, RecordsPage};

use crate::error::Result;

/// 解析結果パネル
pub fn render_analysis(result: &AnalysisResult) -> String {
    let mut lines = vec![format!("解析狀態: {}", status_label(result))];

    for (label, value) in detail_rows(result) {
        lines.push(format!("{}: {}", label, value));
    }
    if let Some(label) = delivery_label(result) {
        lines.push(format!("可否配送: {}", label));
    }
    lines.push(format!("置信度: {}", format_confidence(result.confidence)));

    let summary = format_address(result);
    if !summary.is_empty() {
        lines.push(String::new());
        lines.push(summary);
    }
    lines.join("\n")
}

/// 記録一覧（区切りは " | "）
pub fn render_records(page: &RecordsPage) -> String {
    let mut lines = vec!["ID | 地址 | 接收時間 | 區域 | 街道 | 配送區編碼 | 是否配送".to_string()];

    if page.rows.is_empty() {
        lines.push("暫無數據".to_string());
    }
    for (index, row) in page.rows.iter().enumerate() {
        let cells = record_cells(row, index);
        lines.push(
            [
                cells.id,
                truncate_text(&cells.address, DEFAULT_TRUNCATE_LENGTH),
                cells.receive_time,
                cells.district,
                cells.street,
                cells.delivery_zone_code,
                row.will_deliver.tag_label().to_string(),
            ]
            .join(" | "),
        );
    }

    lines.push(format!(
        "共 {} 條  第 {}/{} 頁（每頁 {} 條）",
        page.page.total,
        page.page.current,
        page.page.page_count(),
        page.page.page_size
    ));
    lines.join("\n")
}

/// CSVを `dir/<file_name>` に書き出す
pub fn write_export(export: &CsvExport, dir: &Path) -> Result<PathBuf> {
    std::fs::create_dir_all(dir)?;
    let path = dir.join(&export.file_name);
    std::fs::write(&path, &export.content)?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ars_common::{Deliverability, PageState, RecordRow};

    #[test]
    fn test_render_analysis_skips_unreported_delivery() {
        let result = AnalysisResult {
            success: true,
            address: Some("香港九龍深水埗欽州街37K".to_string()),
            district: Some("深水埗".to_string()),
            confidence: Some(0.93),
            ..Default::default()
        };
        let text = render_analysis(&result);

        assert!(text.starts_with("解析狀態: 解析成功"));
        assert!(text.contains("區域: 深水埗"));
        assert!(text.contains("置信度: 93.00%"));
        assert!(!text.contains("可否配送"));
    }

    #[test]
    fn test_render_analysis_with_delivery() {
        let result = AnalysisResult {
            will_delivery: Deliverability::NotDeliverable,
            ..Default::default()
        };
        let text = render_analysis(&result);
        assert!(text.contains("解析狀態: 解析失敗"));
        assert!(text.contains("可否配送: 無法配送"));
        assert!(text.contains("置信度: N/A"));
    }

    #[test]
    fn test_render_records() {
        let page = RecordsPage {
            rows: vec![RecordRow {
                address: Some("彌敦道1號".to_string()),
                will_deliver: Deliverability::Deliverable,
                ..Default::default()
            }],
            page: PageState {
                current: 2,
                page_size: 10,
                total: 11,
            },
        };
        let text = render_records(&page);
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 3);
        assert_eq!(lines[1], "1 | 彌敦道1號 | N/A | N/A | N/A | N/A | 可配送");
        assert_eq!(lines[2], "共 11 條  第 2/2 頁（每頁 10 條）");
    }

    #[test]
    fn test_render_empty_records() {
        let text = render_records(&RecordsPage::default());
        assert!(text.contains("暫無數據"));
    }
}
