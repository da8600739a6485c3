use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(name = "numstream")]
#[command(about = "A bounded-time fan-out/fan-in numeric streaming pipeline")]
#[command(version)]
pub struct Cli {
    /// Number of concurrent lanes (defaults to the CPU count)
    #[arg(short = 'n', long)]
    pub lanes: Option<usize>,

    /// Generation deadline in milliseconds
    #[arg(short, long, default_value = "1000")]
    pub deadline_ms: u64,

    /// Per-item forwarding latency in milliseconds
    #[arg(short, long, default_value = "1")]
    pub latency_ms: u64,

    /// Merged queue buffer size (floored at the lane count)
    #[arg(long)]
    pub merged_buffer: Option<usize>,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Print pipeline state transitions
    #[arg(short, long)]
    pub verbose: bool,

    /// Print the final report as JSON to stdout
    #[arg(long)]
    pub json: bool,
}
