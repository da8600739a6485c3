use anyhow::Result;
use clap::Parser;

use numstream::cli::args::Cli;
use numstream::cli::commands::run::execute_run;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if !cli.quiet {
        println!("🚀 数値ストリーミングパイプライン - ファンアウト/ファンイン版");
        println!("⚙️  設定:");
        println!(
            "   - レーン数: {}",
            cli.lanes
                .map(|n| n.to_string())
                .unwrap_or_else(|| format!("{}（CPU数）", num_cpus::get().max(1)))
        );
        println!("   - 生成期限: {}ms", cli.deadline_ms);
        println!("   - 転送レイテンシ: {}ms", cli.latency_ms);
    }

    match execute_run(cli.clone()).await {
        Ok(report) => {
            if !cli.quiet {
                println!("\n✅ 検証合格!");
                println!("   - 収集数: {}", report.collected.count);
                println!("   - 総実行時間: {}ms", report.total_elapsed_ms);
            }
            Ok(())
        }
        Err(error) => {
            // 保存則違反は致命的。診断を出力して異常終了する
            eprintln!("❌ エラー: {error}");
            std::process::exit(1);
        }
    }
}
