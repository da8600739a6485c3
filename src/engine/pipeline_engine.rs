// PipelineEngine - 依存性注入によるパイプライン実行エンジン
// 設定とレポーターがコンストラクタで注入される

use super::pipeline::StreamPipeline;
use super::verifier::verify;
use crate::core::{
    PipelineConfig, PipelineError, PipelineReport, PipelineReporter, PipelineResult,
    PipelineState,
};
use crate::services::GeneratedTotals;
use std::sync::Arc;

/// 依存性注入によるパイプライン実行エンジン
///
/// 設定の検証、生成側集計の所有、実行、レポート発行、検証までを管理する
/// 高レベルAPI。生成側集計は実行ごとに新規作成され、呼び出し側から
/// 明示的にシーケンサーへ渡される。
pub struct PipelineEngine<C, R> {
    config: Arc<C>,
    reporter: Arc<R>,
}

impl<C, R> PipelineEngine<C, R>
where
    C: PipelineConfig,
    R: PipelineReporter + 'static,
{
    /// 新しいエンジンを作成（コンストラクタインジェクション）
    pub fn new(config: C, reporter: R) -> Self {
        Self {
            config: Arc::new(config),
            reporter: Arc::new(reporter),
        }
    }

    /// パイプラインを1回実行し、レポートを検証して返す
    ///
    /// レポートは検証の前に発行される（失敗した実行でも数値が見える）。
    /// 検証失敗は致命的エラーとして返り、Verified状態には遷移しない。
    pub async fn run(&self) -> PipelineResult<PipelineReport> {
        // 設定検証
        if self.config.lane_count() == 0 {
            return Err(PipelineError::configuration(
                "レーン数は1以上である必要があります",
            ));
        }

        let lane_count = self.config.lane_count();
        self.reporter.report_started(lane_count).await;

        // 生成側集計は実行ごとに新規作成
        let totals = Arc::new(GeneratedTotals::new());

        let pipeline = StreamPipeline::new();
        let run = pipeline
            .execute(
                self.config.as_ref(),
                Arc::clone(&totals),
                self.reporter.as_ref(),
            )
            .await?;

        // シーケンサーはjoin済みのためスナップショットは確定値
        let generated = totals.snapshot();

        let report = PipelineReport {
            lane_count,
            generated,
            collected: run.collected,
            lane_tallies: run.lane_tallies,
            total_elapsed_ms: run.elapsed_ms,
            finished_at: chrono::Utc::now(),
        };

        self.reporter.report_completed(&report).await;

        verify(&report.generated, &report.collected, &report.lane_tallies)?;
        self.reporter.report_state(PipelineState::Verified).await;

        Ok(report)
    }

    /// 設定への参照を取得（読み取り専用アクセス）
    pub fn config(&self) -> &C {
        &self.config
    }

    /// レポーターへの参照を取得
    pub fn reporter(&self) -> &R {
        &self.reporter
    }
}
