//! エラー型定義
//!
//! 統一エラー型（thiserror使用）

use std::path::PathBuf;
use thiserror::Error;

/// 設定ファイル読み込みエラー
#[derive(Debug, Error)]
pub enum ConfigError {
    /// 設定ファイルを読み込めない
    #[error("Failed to read config file {path}: {source}")]
    Read {
        /// 設定ファイルパス
        path: PathBuf,
        /// 元のI/Oエラー
        #[source]
        source: std::io::Error,
    },

    /// JSONとして解釈できない
    #[error("Failed to parse config file {path}: {source}")]
    Parse {
        /// 設定ファイルパス
        path: PathBuf,
        /// 元のJSONエラー
        #[source]
        source: serde_json::Error,
    },

    /// 値が不正
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Relay error type
///
/// Every variant is fatal at startup.
#[derive(Debug, Error)]
pub enum RelayError {
    /// Configuration error
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Failed to bind the listen address
    #[error("Failed to bind to {addr}: {source}")]
    Bind {
        /// Address from the `listen` option
        addr: String,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// HTTP server error
    #[error("Server error: {0}")]
    Server(#[from] std::io::Error),
}

/// Relay result type
pub type RelayResult<T> = Result<T, RelayError>;
