// Lane - 競合コンシューマーによる転送機能

use crate::core::PipelineResult;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;

/// 単一レーンワーカー
///
/// 共有キューから1値ずつ取得し、固定レイテンシの後に自分専用の
/// プライベートキューへ無変換で転送する。値とレーンの対応は非決定的で、
/// レーン間の順序保証はない。共有キューが閉じて排出し尽くされたら終了し、
/// 送信側のドロップによってプライベートキューが閉じる。
pub fn spawn_single_lane(
    shared_rx: Arc<tokio::sync::Mutex<mpsc::Receiver<i64>>>,
    private_tx: mpsc::Sender<i64>,
    forward_latency: Duration,
) -> tokio::task::JoinHandle<PipelineResult<()>> {
    tokio::spawn(async move {
        loop {
            // 次の値を取得。ロックはスリープ前に手放して他レーンと競合させる
            let value = {
                let mut rx = shared_rx.lock().await;
                match rx.recv().await {
                    Some(value) => value,
                    None => break, // チャンネル終了
                }
            };

            tokio::time::sleep(forward_latency).await;

            if private_tx.send(value).await.is_err() {
                // プライベートキューの受信側が閉じられた場合は終了
                break;
            }
        }
        Ok(())
    })
}

/// Lanes: 競合コンシューマープール
///
/// N本のプライベートキューを作成し、各レーンを起動する。戻り値の
/// 受信側ベクタはレーン順で、対になるマージャーに渡す。
pub fn spawn_lanes(
    shared_rx: mpsc::Receiver<i64>,
    lane_count: usize,
    forward_latency: Duration,
) -> (
    Vec<tokio::task::JoinHandle<PipelineResult<()>>>,
    Vec<mpsc::Receiver<i64>>,
) {
    let shared_rx = Arc::new(tokio::sync::Mutex::new(shared_rx));
    let mut handles = Vec::with_capacity(lane_count);
    let mut private_rxs = Vec::with_capacity(lane_count);

    for _ in 0..lane_count {
        let (private_tx, private_rx) = mpsc::channel::<i64>(1);
        handles.push(spawn_single_lane(
            Arc::clone(&shared_rx),
            private_tx,
            forward_latency,
        ));
        private_rxs.push(private_rx);
    }

    (handles, private_rxs)
}
