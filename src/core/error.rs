// Custom error types for the streaming pipeline
// パイプライン専用のカスタムエラー型定義

use thiserror::Error;

/// 保存則違反を表すエラー型
///
/// パイプライン完走後に成立すべき3つの不変条件のいずれかが破れた場合に返される。
/// 常に致命的であり、再試行されることはない。
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VerificationError {
    #[error("検証エラー: 数値の個数が一致しません: 生成={generated} != 収集={collected}")]
    CountMismatch { generated: u64, collected: u64 },

    #[error("検証エラー: 数値の合計が一致しません: 生成={generated} != 収集={collected}")]
    SumMismatch { generated: i64, collected: i64 },

    #[error("検証エラー: レーン別集計の合計が生成数と一致しません: 集計={tally_total} != 生成={generated}")]
    TallyMismatch { tally_total: u64, generated: u64 },
}

/// パイプライン固有のエラー型
#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("設定エラー: {message}")]
    ConfigurationError { message: String },

    #[error("チャンネルエラー: {message}")]
    ChannelError { message: String },

    #[error("タスクエラー: {source}")]
    TaskError {
        #[source]
        source: tokio::task::JoinError,
    },

    #[error(transparent)]
    Verification(#[from] VerificationError),
}

impl PipelineError {
    /// 設定エラーの作成
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::ConfigurationError {
            message: message.into(),
        }
    }

    /// チャンネルエラーの作成
    pub fn channel(message: impl Into<String>) -> Self {
        Self::ChannelError {
            message: message.into(),
        }
    }

    /// タスクエラーの作成
    pub fn task(source: tokio::task::JoinError) -> Self {
        Self::TaskError { source }
    }
}

impl From<tokio::task::JoinError> for PipelineError {
    fn from(error: tokio::task::JoinError) -> Self {
        PipelineError::TaskError { source: error }
    }
}

/// パイプラインの結果型
pub type PipelineResult<T> = std::result::Result<T, PipelineError>;
