//! レーン数スケーリングのパフォーマンス比較ベンチマーク
//!
//! 異なるレーン数でのパイプライン1回実行の所要時間を測定

use criterion::{criterion_group, criterion_main, Criterion};
use numstream::{DefaultPipelineConfig, NoOpReporter, PipelineEngine};
use std::time::Duration;
use tokio::runtime::Runtime;

/// パイプライン1回実行のベンチマーク（レーン数別）
fn benchmark_lane_scaling(c: &mut Criterion) {
    let rt = Runtime::new().expect("tokioランタイム作成に失敗");
    let mut group = c.benchmark_group("Pipeline Lane Scaling");
    group.measurement_time(Duration::from_secs(10));
    group.sample_size(10);

    for lane_count in [1usize, 4, 16] {
        group.bench_function(format!("{lane_count} lanes"), |b| {
            b.iter(|| {
                let config = DefaultPipelineConfig::new(lane_count)
                    .with_deadline(Duration::from_millis(10))
                    .with_forward_latency(Duration::from_micros(100));
                let engine = PipelineEngine::new(config, NoOpReporter::new());
                let report = rt.block_on(engine.run()).expect("実行失敗");
                std::hint::black_box(report)
            })
        });
    }

    group.finish();
}

/// 空実行（期限0）のベンチマーク - 起動とjoinのオーバーヘッドのみを測定
fn benchmark_empty_run_overhead(c: &mut Criterion) {
    let rt = Runtime::new().expect("tokioランタイム作成に失敗");
    let mut group = c.benchmark_group("Empty Run Overhead");
    group.measurement_time(Duration::from_secs(10));

    for lane_count in [1usize, 8] {
        group.bench_function(format!("{lane_count} lanes"), |b| {
            b.iter(|| {
                let config = DefaultPipelineConfig::new(lane_count)
                    .with_deadline(Duration::ZERO)
                    .with_forward_latency(Duration::ZERO);
                let engine = PipelineEngine::new(config, NoOpReporter::new());
                let report = rt.block_on(engine.run()).expect("実行失敗");
                std::hint::black_box(report)
            })
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_lane_scaling,
    benchmark_empty_run_overhead
);
criterion_main!(benches);
