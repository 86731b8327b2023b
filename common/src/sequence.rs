//! リクエスト世代管理
//!
//! 画面ごとに単調増加の番号を発行し、最後に発行した番号の応答だけを
//! 画面状態へ反映する。遅れて届いた古い応答は捨てる。

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// 発行済みリクエストの番号
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

/// クローンは同じカウンタを共有する
#[derive(Debug, Clone, Default)]
pub struct RequestSequence {
    latest: Arc<AtomicU64>,
}

impl RequestSequence {
    pub fn new() -> Self {
        Self::default()
    }

    /// 新しい番号を発行する（それ以前の番号はすべて古くなる）
    pub fn issue(&self) -> Ticket {
        Ticket(self.latest.fetch_add(1, Ordering::SeqCst) + 1)
    }

    /// 最後に発行した番号かどうか
    pub fn is_latest(&self, ticket: Ticket) -> bool {
        self.latest.load(Ordering::SeqCst) == ticket.0
    }
}
