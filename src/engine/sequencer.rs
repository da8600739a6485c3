// Sequencer - 時間制限付きの数列生成機能

use crate::core::{PipelineResult, SequenceObserver};
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::time::Instant;

/// Sequencer: 1, 2, 3, … を共有キューへ送信
///
/// 送信が成立するたびにオブザーバーへ同期的に通知する。期限はループ先頭で
/// 確認するほか、送信中も期限と競争させる。レーンが全て遅延中で送信が
/// ブロックしても期限で打ち切られ、送信されなかった値は通知されない。
/// タスク終了時に唯一の送信側がドロップされ、共有キューが閉じる。
pub fn spawn_sequencer<O>(
    deadline: Instant,
    shared_tx: mpsc::Sender<i64>,
    observer: Arc<O>,
) -> tokio::task::JoinHandle<PipelineResult<()>>
where
    O: SequenceObserver + 'static,
{
    tokio::spawn(async move {
        let mut value: i64 = 1;
        loop {
            if Instant::now() >= deadline {
                break;
            }

            tokio::select! {
                _ = tokio::time::sleep_until(deadline) => {
                    // 送信がブロックしたまま期限到来。中断されたsendは値を渡さない
                    break;
                }
                result = shared_tx.send(value) => {
                    if result.is_err() {
                        // 受信側が全て終了した場合は正常終了
                        break;
                    }
                    observer.on_value_emitted(value);
                    value += 1;
                }
            }
        }
        // shared_txをドロップしてチャンネル終了シグナル
        Ok(())
    })
}
