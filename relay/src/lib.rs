//! yoed Relay Server
//!
//! Pingを登録済みコールバックURLへファンアウトする中継サーバー

#![warn(missing_docs)]

/// REST APIハンドラー
pub mod api;

/// CLIインターフェース
pub mod cli;

/// Pingのファンアウト配信
pub mod dispatch;

/// ロギング初期化ユーティリティ
pub mod logging;

/// 購読登録管理
pub mod registry;

/// サーバー起動
pub mod server;

/// アプリケーション状態
#[derive(Clone)]
pub struct AppState {
    /// 購読レジストリ
    pub registry: registry::SubscriptionRegistry,
    /// Pingディスパッチャー（`registry` と同じレジストリを共有）
    pub dispatcher: dispatch::Dispatcher,
}

impl AppState {
    /// 空のレジストリでアプリケーション状態を作成
    pub fn new(http_client: reqwest::Client) -> Self {
        let registry = registry::SubscriptionRegistry::new();
        let dispatcher = dispatch::Dispatcher::new(registry.clone(), http_client);
        Self {
            registry,
            dispatcher,
        }
    }
}
