// パイプラインのトレイト定義
// 全ての抽象化インターフェースを定義

use super::types::{PipelineReport, PipelineState};
use async_trait::async_trait;
use mockall::automock;
use std::time::Duration;

/// パイプラインの設定を抽象化するトレイト
#[automock]
pub trait PipelineConfig: Send + Sync {
    /// レーン数（競合コンシューマーの個数、1以上）を取得
    fn lane_count(&self) -> usize;

    /// 生成側の制限時間を取得
    fn deadline(&self) -> Duration;

    /// 1値あたりの転送レイテンシを取得
    fn forward_latency(&self) -> Duration;

    /// マージキューのバッファサイズ（レーン数以上）を取得
    fn merged_buffer_size(&self) -> usize;
}

// PipelineConfig for Box<dyn PipelineConfig>
impl PipelineConfig for Box<dyn PipelineConfig> {
    fn lane_count(&self) -> usize {
        self.as_ref().lane_count()
    }

    fn deadline(&self) -> Duration {
        self.as_ref().deadline()
    }

    fn forward_latency(&self) -> Duration {
        self.as_ref().forward_latency()
    }

    fn merged_buffer_size(&self) -> usize {
        self.as_ref().merged_buffer_size()
    }
}

/// シーケンサーの送信成功を観測するトレイト
///
/// 送信が成立した値ごとに同期的に呼び出される。送信されなかった値に対して
/// 呼ばれることはない（保存則の生成側カウントの根拠）。
#[automock]
pub trait SequenceObserver: Send + Sync {
    /// 1値の送信成功を通知
    fn on_value_emitted(&self, value: i64);
}

// SequenceObserver for Box<dyn SequenceObserver>
impl SequenceObserver for Box<dyn SequenceObserver> {
    fn on_value_emitted(&self, value: i64) {
        self.as_ref().on_value_emitted(value)
    }
}

/// 実行経過報告の抽象化トレイト
#[automock]
#[async_trait]
pub trait PipelineReporter: Send + Sync {
    /// 実行開始時の報告
    async fn report_started(&self, lane_count: usize);

    /// 状態遷移の報告
    async fn report_state(&self, state: PipelineState);

    /// 実行完了時の報告（検証前に呼ばれる）
    async fn report_completed(&self, report: &PipelineReport);
}

// PipelineReporter for Box<dyn PipelineReporter>
#[async_trait]
impl PipelineReporter for Box<dyn PipelineReporter> {
    async fn report_started(&self, lane_count: usize) {
        self.as_ref().report_started(lane_count).await
    }

    async fn report_state(&self, state: PipelineState) {
        self.as_ref().report_state(state).await
    }

    async fn report_completed(&self, report: &PipelineReport) {
        self.as_ref().report_completed(report).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_pipeline_config() {
        let mut config = MockPipelineConfig::new();
        config.expect_lane_count().return_const(5usize);
        config
            .expect_deadline()
            .return_const(Duration::from_secs(1));

        assert_eq!(config.lane_count(), 5);
        assert_eq!(config.deadline(), Duration::from_secs(1));
    }

    #[test]
    fn test_mock_sequence_observer() {
        let mut observer = MockSequenceObserver::new();
        observer
            .expect_on_value_emitted()
            .withf(|v| *v == 42)
            .times(1)
            .return_const(());

        observer.on_value_emitted(42);
    }

    #[test]
    fn test_boxed_config_forwarding() {
        let mut config = MockPipelineConfig::new();
        config.expect_lane_count().return_const(3usize);
        config
            .expect_merged_buffer_size()
            .return_const(8usize);

        let boxed: Box<dyn PipelineConfig> = Box::new(config);
        assert_eq!(boxed.lane_count(), 3);
        assert_eq!(boxed.merged_buffer_size(), 8);
    }
}
