// Aggregator - マージ済みストリームの集約機能

use crate::core::StreamTotals;
use tokio::sync::mpsc;

/// Aggregator: マージキューを閉鎖まで排出し、個数と合計を集計
///
/// 唯一の読み手であり、集計はローカル変数のみで行う（アトミック不要）。
/// キューの閉鎖はJoinBarrierだけが行うため、閉鎖の観測は全マージャーの
/// 全送信値を受け取った後であることが保証される。
pub fn spawn_aggregator(
    mut merged_rx: mpsc::Receiver<i64>,
) -> tokio::task::JoinHandle<StreamTotals> {
    tokio::spawn(async move {
        let mut count: u64 = 0;
        let mut sum: i64 = 0;

        while let Some(value) = merged_rx.recv().await {
            count += 1;
            sum += value;
        }

        StreamTotals { count, sum }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_aggregator_accumulates_count_and_sum() {
        let (merged_tx, merged_rx) = mpsc::channel::<i64>(10);

        let handle = spawn_aggregator(merged_rx);

        for value in 1..=10i64 {
            merged_tx.send(value).await.unwrap();
        }
        drop(merged_tx); // チャンネル終了

        let totals = handle.await.unwrap();
        assert_eq!(totals.count, 10);
        assert_eq!(totals.sum, 55);
    }

    #[tokio::test]
    async fn test_aggregator_empty_stream() {
        let (merged_tx, merged_rx) = mpsc::channel::<i64>(1);

        let handle = spawn_aggregator(merged_rx);
        drop(merged_tx);

        let totals = handle.await.unwrap();
        assert_eq!(totals, StreamTotals::default());
    }

    #[tokio::test]
    async fn test_aggregator_negative_values() {
        let (merged_tx, merged_rx) = mpsc::channel::<i64>(4);

        let handle = spawn_aggregator(merged_rx);

        merged_tx.send(-5).await.unwrap();
        merged_tx.send(3).await.unwrap();
        drop(merged_tx);

        let totals = handle.await.unwrap();
        assert_eq!(totals.count, 2);
        assert_eq!(totals.sum, -2);
    }
}
