// 生成側集計の具象実装

use crate::core::{SequenceObserver, StreamTotals};
use std::sync::atomic::{AtomicI64, AtomicU64, Ordering};

/// 生成側の個数・合計を保持する明示的な集計オブジェクト
///
/// シーケンサーのオブザーバーコールバックからのみ更新される（単一ライター）。
/// 読み出しはシーケンサータスクのjoin後に限られるため、Relaxedで十分。
#[derive(Debug, Default)]
pub struct GeneratedTotals {
    count: AtomicU64,
    sum: AtomicI64,
}

impl GeneratedTotals {
    pub fn new() -> Self {
        Self::default()
    }

    /// 1値の送信成功を記録
    pub fn record(&self, value: i64) {
        self.sum.fetch_add(value, Ordering::Relaxed);
        self.count.fetch_add(1, Ordering::Relaxed);
    }

    /// 現在の集計値のスナップショットを取得
    pub fn snapshot(&self) -> StreamTotals {
        StreamTotals {
            count: self.count.load(Ordering::Relaxed),
            sum: self.sum.load(Ordering::Relaxed),
        }
    }
}

impl SequenceObserver for GeneratedTotals {
    fn on_value_emitted(&self, value: i64) {
        self.record(value);
    }
}
