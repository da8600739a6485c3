// Pipeline - ファンアウト/ファンインパイプライン
// メインパイプライン機能とオーケストレーション

use super::{
    aggregator::spawn_aggregator, barrier::spawn_join_barrier, lane::spawn_lanes,
    merger::spawn_mergers, sequencer::spawn_sequencer,
};
use crate::core::{
    PipelineConfig, PipelineReporter, PipelineResult, PipelineState, SequenceObserver,
    StreamTotals,
};
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::mpsc;

/// 1回の実行で観測された収集側の結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunTotals {
    pub collected: StreamTotals,
    /// レーン順のレーン別集計
    pub lane_tallies: Vec<u64>,
    pub elapsed_ms: u64,
}

/// 責任が明確に分離されたパイプライン
///
/// 2N+3個のタスク（シーケンサー、N本のレーン、N個のマージャー、
/// JoinBarrier、アグリゲーター）を起動し、終了順序を管理する。
#[derive(Debug, Default)]
pub struct StreamPipeline;

impl StreamPipeline {
    /// 新しいパイプラインを作成
    pub fn new() -> Self {
        Self
    }

    /// パイプラインを1回実行
    ///
    /// 下流の終了は全てキュー閉鎖の連鎖で伝播する。join順序は
    /// シーケンサー → レーン → JoinBarrier（全マージャー）→ アグリゲーター。
    pub async fn execute<C, O, R>(
        &self,
        config: &C,
        observer: Arc<O>,
        reporter: &R,
    ) -> PipelineResult<RunTotals>
    where
        C: PipelineConfig,
        O: SequenceObserver + 'static,
        R: PipelineReporter,
    {
        let lane_count = config.lane_count();
        let start_time = Instant::now();

        // チャンネル構築。共有キューは容量1（ランデブーに最も近い形）、
        // マージキューはレーン数以上のバッファで逆圧を掛ける
        let (shared_tx, shared_rx) = mpsc::channel::<i64>(1);
        let merged_capacity = config.merged_buffer_size().max(lane_count.max(1));
        let (merged_tx, merged_rx) = mpsc::channel::<i64>(merged_capacity);

        let deadline = tokio::time::Instant::now() + config.deadline();

        reporter.report_state(PipelineState::Running).await;

        // Sequencer起動
        let sequencer_handle = spawn_sequencer(deadline, shared_tx, observer);

        // Lane Pool起動（競合コンシューマー）
        let (lane_handles, private_rxs) =
            spawn_lanes(shared_rx, lane_count, config.forward_latency());

        // Merger Pool起動
        let merger_handles = spawn_mergers(private_rxs, &merged_tx);

        // JoinBarrier起動 - マージ送信側の最後の1本を引き渡す
        let barrier_handle = spawn_join_barrier(merger_handles, merged_tx);

        // Aggregator起動
        let aggregator_handle = spawn_aggregator(merged_rx);

        // Sequencer完了を待機（期限到来で共有キューが閉じる）
        sequencer_handle.await??;
        reporter.report_state(PipelineState::Draining).await;

        // Lane完了を待機
        for handle in lane_handles {
            handle.await??;
        }

        // JoinBarrier完了を待機 - ここでマージキューの唯一のクローズが起きる
        let lane_tallies = barrier_handle.await??;
        reporter.report_state(PipelineState::Merged).await;

        // Aggregator完了を待機
        let collected = aggregator_handle.await?;

        Ok(RunTotals {
            collected,
            lane_tallies,
            elapsed_ms: start_time.elapsed().as_millis() as u64,
        })
    }
}
