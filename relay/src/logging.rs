//! ロギング初期化ユーティリティ
//!
//! `YOED_LOG_LEVEL`（未設定なら`RUST_LOG`）からフィルタを決定する。

use tracing_subscriber::EnvFilter;

/// デフォルトのログレベル
const DEFAULT_LOG_LEVEL: &str = "info";

/// ログフィルタ文字列を決定
fn filter_directive() -> String {
    std::env::var("YOED_LOG_LEVEL")
        .or_else(|_| std::env::var("RUST_LOG"))
        .ok()
        .filter(|value| !value.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string())
}

/// tracingサブスクライバーを初期化
pub fn init() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let filter = EnvFilter::try_new(filter_directive())?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init()
}
