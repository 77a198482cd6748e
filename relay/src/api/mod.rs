//! REST APIハンドラー
//!
//! 購読登録とPing受信

/// APIエラーレスポンス型
pub mod error;

/// Ping受信
pub mod ping;

/// 購読登録
pub mod subscribe;

use crate::AppState;
use axum::{routing::post, Router};
use tower_http::trace::TraceLayer;

/// APIルーターを作成
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", post(subscribe::subscribe))
        .route("/yoed/:handle", post(ping::ping))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// フォーム値を取り出す
///
/// ボディの値を優先し、空ならクエリ文字列の値を使う。どちらも無ければ空文字列。
pub(crate) fn form_value(body: Option<String>, query: Option<String>) -> String {
    body.filter(|value| !value.is_empty())
        .or(query)
        .unwrap_or_default()
}
