// runコマンド - CLI引数からエンジンを構築して1回実行する

use crate::cli::args::Cli;
use crate::core::PipelineReport;
use crate::engine::PipelineEngine;
use crate::services::{ConsoleReporter, DefaultPipelineConfig};
use anyhow::Result;
use std::time::Duration;

/// CLI引数を設定に変換
pub fn build_config(cli: &Cli) -> DefaultPipelineConfig {
    let lane_count = cli.lanes.unwrap_or_else(|| num_cpus::get().max(1));
    let mut config = DefaultPipelineConfig::new(lane_count)
        .with_deadline(Duration::from_millis(cli.deadline_ms))
        .with_forward_latency(Duration::from_millis(cli.latency_ms));

    if let Some(merged_buffer) = cli.merged_buffer {
        config = config.with_merged_buffer_size(merged_buffer);
    }

    config
}

/// CLI引数からレポーターを構築
fn build_reporter(cli: &Cli) -> ConsoleReporter {
    if cli.quiet {
        ConsoleReporter::quiet()
    } else if cli.verbose {
        ConsoleReporter::verbose()
    } else {
        ConsoleReporter::new()
    }
}

/// パイプラインを実行し、検証済みレポートを返す
///
/// 検証失敗はエラーとして呼び出し側へ伝播する（終了コードはmainが決める）。
pub async fn execute_run(cli: Cli) -> Result<PipelineReport> {
    let config = build_config(&cli);
    let reporter = build_reporter(&cli);

    let engine = PipelineEngine::new(config, reporter);
    let report = engine.run().await?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    }

    Ok(report)
}
