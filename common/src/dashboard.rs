//! ダッシュボード
//!
//! 統計カード（固定値）とバックエンド疎通確認

use crate::api::{ApiClient, Transport};
use crate::constants::colors;

/// 統計カード
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StatCard {
    pub title: &'static str,
    pub value: f64,
    /// 小数点以下の桁数
    pub precision: usize,
    pub prefix: Option<&'static str>,
    pub suffix: Option<&'static str>,
    pub color: Option<&'static str>,
}

impl StatCard {
    /// 桁区切り付きの表示値（例: 82456 → "82,456"）
    pub fn formatted_value(&self) -> String {
        let text = format!("{:.*}", self.precision, self.value.abs());
        let (int_part, frac_part) = match text.split_once('.') {
            Some((i, f)) => (i, Some(f)),
            None => (text.as_str(), None),
        };

        let digits: Vec<char> = int_part.chars().collect();
        let mut grouped = String::new();
        for (i, digit) in digits.iter().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                grouped.push(',');
            }
            grouped.push(*digit);
        }

        let sign = if self.value < 0.0 { "-" } else { "" };
        match frac_part {
            Some(frac) => format!("{}{}.{}", sign, grouped, frac),
            None => format!("{}{}", sign, grouped),
        }
    }
}

/// ダッシュボード上部の統計（バックエンドに集計APIがないため固定値）
pub const OVERVIEW_STATS: [StatCard; 3] = [
    StatCard {
        title: "地址解析成功率",
        value: 98.2,
        precision: 1,
        prefix: Some("↑"),
        suffix: Some("%"),
        color: Some("#3f8600"),
    },
    StatCard {
        title: "今日解析請求",
        value: 1238.0,
        precision: 0,
        prefix: None,
        suffix: None,
        color: Some("#0050b3"),
    },
    StatCard {
        title: "系統總記錄數",
        value: 82456.0,
        precision: 0,
        prefix: None,
        suffix: None,
        color: None,
    },
];

/// 疎通確認の対象
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Probe {
    /// Redis（キャッシュ）
    Cache,
    /// RabbitMQ（キュー）
    Queue,
}

impl Probe {
    pub fn name(&self) -> &'static str {
        match self {
            Probe::Cache => "Redis",
            Probe::Queue => "RabbitMQ",
        }
    }

    pub fn button_label(&self) -> &'static str {
        match self {
            Probe::Cache => "測試Redis",
            Probe::Queue => "測試RabbitMQ",
        }
    }
}

/// 疎通確認の結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeReport {
    pub probe: Probe,
    pub success: bool,
    pub text: String,
}

impl ProbeReport {
    pub fn color(&self) -> &'static str {
        if self.success {
            colors::SUCCESS
        } else {
            colors::ERROR
        }
    }
}

/// キューへ送るテストメッセージ
pub fn queue_test_message(now_millis: u64) -> String {
    format!("test-message-{}", now_millis)
}

/// 疎通確認を実行する（失敗もレポートとして返す）
pub async fn run_probe<T: Transport>(client: &ApiClient<T>, probe: Probe) -> ProbeReport {
    let outcome = match probe {
        Probe::Cache => client.test_redis().await,
        Probe::Queue => {
            let message = queue_test_message(client.now_millis());
            client.send_message(&message).await
        }
    };

    match outcome {
        Ok(body) => ProbeReport {
            probe,
            success: true,
            text: format!("{}測試成功: {}", probe.name(), body),
        },
        Err(e) => {
            log::error!("{} probe failed: {:?}", probe.name(), e);
            ProbeReport {
                probe,
                success: false,
                text: format!("{}測試失敗: {}", probe.name(), e),
            }
        }
    }
}
