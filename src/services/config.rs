// 設定管理の具象実装

use crate::core::PipelineConfig;
use std::time::Duration;

/// デフォルト設定実装
#[derive(Debug, Clone)]
pub struct DefaultPipelineConfig {
    lane_count: usize,
    deadline: Duration,
    forward_latency: Duration,
    merged_buffer: usize,
}

impl DefaultPipelineConfig {
    pub fn new(lane_count: usize) -> Self {
        Self {
            lane_count: lane_count.max(1),
            deadline: Duration::from_secs(1),
            forward_latency: Duration::from_millis(1),
            merged_buffer: lane_count.max(1),
        }
    }

    pub fn with_lane_count(mut self, lane_count: usize) -> Self {
        self.lane_count = lane_count;
        self
    }

    pub fn with_deadline(mut self, deadline: Duration) -> Self {
        self.deadline = deadline;
        self
    }

    pub fn with_forward_latency(mut self, latency: Duration) -> Self {
        self.forward_latency = latency;
        self
    }

    pub fn with_merged_buffer_size(mut self, merged_buffer: usize) -> Self {
        self.merged_buffer = merged_buffer;
        self
    }
}

impl Default for DefaultPipelineConfig {
    fn default() -> Self {
        Self::new(num_cpus::get().max(1))
    }
}

impl PipelineConfig for DefaultPipelineConfig {
    fn lane_count(&self) -> usize {
        self.lane_count
    }

    fn deadline(&self) -> Duration {
        self.deadline
    }

    fn forward_latency(&self) -> Duration {
        self.forward_latency
    }

    // マージキューはレーン数以上のバッファを持つ契約
    fn merged_buffer_size(&self) -> usize {
        self.merged_buffer.max(self.lane_count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_pipeline_config() {
        let config = DefaultPipelineConfig::default();

        assert!(config.lane_count() >= 1);
        assert_eq!(config.deadline(), Duration::from_secs(1));
        assert_eq!(config.forward_latency(), Duration::from_millis(1));
        assert!(config.merged_buffer_size() >= config.lane_count());
    }

    #[test]
    fn test_pipeline_config_builder() {
        let config = DefaultPipelineConfig::new(4)
            .with_lane_count(8)
            .with_deadline(Duration::from_millis(500))
            .with_forward_latency(Duration::from_micros(100))
            .with_merged_buffer_size(32);

        assert_eq!(config.lane_count(), 8);
        assert_eq!(config.deadline(), Duration::from_millis(500));
        assert_eq!(config.forward_latency(), Duration::from_micros(100));
        assert_eq!(config.merged_buffer_size(), 32);
    }

    #[test]
    fn test_merged_buffer_never_below_lane_count() {
        // バッファサイズをレーン数未満に設定してもレーン数まで引き上げられる
        let config = DefaultPipelineConfig::new(8).with_merged_buffer_size(2);

        assert_eq!(config.merged_buffer_size(), 8);
    }
}
