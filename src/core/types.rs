// パイプラインに関連するデータ型定義

use chrono::{DateTime, Utc};

/// 数値ストリームの集計値（個数と合計）
///
/// 生成側スナップショットと収集側合計の両方に使う単純な値型。
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct StreamTotals {
    pub count: u64,
    pub sum: i64,
}

impl StreamTotals {
    pub fn new(count: u64, sum: i64) -> Self {
        Self { count, sum }
    }
}

/// パイプライン全体の状態遷移
///
/// Running（生成中）→ Draining（生成終了、レーン排出中）→
/// Merged（マージキュー閉鎖、集約終了待ち）→ Verified（終端）
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum PipelineState {
    /// シーケンサー稼働中
    Running,
    /// シーケンサー終了、レーン・マージャー排出中
    Draining,
    /// マージキュー閉鎖済み、集約完了
    Merged,
    /// 検証完了（終端状態）
    Verified,
}

impl PipelineState {
    /// 状態の文字列表現を取得
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Running => "RUNNING",
            Self::Draining => "DRAINING",
            Self::Merged => "MERGED",
            Self::Verified => "VERIFIED",
        }
    }
}

/// 1回の実行全体のレポート
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PipelineReport {
    pub lane_count: usize,
    pub generated: StreamTotals,
    pub collected: StreamTotals,
    /// レーン順のレーン別集計
    pub lane_tallies: Vec<u64>,
    pub total_elapsed_ms: u64,
    pub finished_at: DateTime<Utc>,
}

impl PipelineReport {
    /// レーン別集計の合計
    pub fn tally_total(&self) -> u64 {
        self.lane_tallies.iter().sum()
    }
}
