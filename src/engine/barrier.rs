// JoinBarrier - 全マージャー完了待ちとマージキューの単独クローズ

use crate::core::PipelineResult;
use tokio::sync::mpsc;

/// JoinBarrier: 全マージャーの完了を待ってからマージキューを閉じる
///
/// マージ送信側の最後の1本を所有し、全マージャーのjoin完了後にドロップする。
/// このドロップが唯一のクローズであり、所有権によって二重クローズは型レベルで
/// 起こり得ない。全マージャーの完了前に閉じるとストリームが切り詰められ
/// 保存則が破れるため、この順序が本質的な保証になる。
/// 戻り値はレーン順のレーン別集計。
pub fn spawn_join_barrier(
    merger_handles: Vec<tokio::task::JoinHandle<PipelineResult<u64>>>,
    merged_tx: mpsc::Sender<i64>,
) -> tokio::task::JoinHandle<PipelineResult<Vec<u64>>> {
    tokio::spawn(async move {
        let mut lane_tallies = Vec::with_capacity(merger_handles.len());

        // 全マージャー完了待ち（wait-all join）
        for handle in merger_handles {
            lane_tallies.push(handle.await??);
        }

        // 結果キューを閉じて集約側に完了を通知
        drop(merged_tx);

        Ok(lane_tallies)
    })
}
