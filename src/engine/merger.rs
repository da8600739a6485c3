// Merger - レーン別集計とファンイン機能

use crate::core::{PipelineError, PipelineResult};
use tokio::sync::mpsc;

/// 単一マージャー
///
/// 対になるレーンのプライベートキューを排出し、値ごとに自分だけが所有する
/// 集計カウンタを進めてからマージキューへ転送する。プライベートキューが
/// 閉じたら終了し、集計値を返す。この戻り値がJoinBarrierへの完了シグナル
/// そのものになる。マージキューをここで閉じることはない。
pub fn spawn_single_merger(
    mut private_rx: mpsc::Receiver<i64>,
    merged_tx: mpsc::Sender<i64>,
) -> tokio::task::JoinHandle<PipelineResult<u64>> {
    tokio::spawn(async move {
        let mut tally: u64 = 0;

        while let Some(value) = private_rx.recv().await {
            tally += 1;
            if merged_tx.send(value).await.is_err() {
                // マージキューが先に閉じると値が失われ保存則が破れるため、即エラー
                return Err(PipelineError::channel(
                    "マージキューがマージャーの完了前に閉じられました",
                ));
            }
        }

        Ok(tally)
    })
}

/// Mergers: レーンごとのマージャープール
///
/// プライベート受信側のベクタ（レーン順）に対して1つずつマージャーを起動する。
/// 各マージャーはマージ送信側のクローンを持ち、終了時に手放す。
pub fn spawn_mergers(
    private_rxs: Vec<mpsc::Receiver<i64>>,
    merged_tx: &mpsc::Sender<i64>,
) -> Vec<tokio::task::JoinHandle<PipelineResult<u64>>> {
    private_rxs
        .into_iter()
        .map(|private_rx| spawn_single_merger(private_rx, merged_tx.clone()))
        .collect()
}
