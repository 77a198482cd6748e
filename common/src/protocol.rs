//! 通信プロトコル定義
//!
//! Publisher/Subscriber↔Relay間のフォームメッセージ。
//! すべて `application/x-www-form-urlencoded` でやり取りする。

use serde::{Deserialize, Serialize};

/// 購読登録リクエスト（`POST /`）
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct SubscribeRequest {
    /// コールバックURL
    #[serde(default)]
    pub callback_url: String,
}

/// Pingリクエスト（`POST /yoed/{handle}`）
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct PingRequest {
    /// 送信元ユーザー名
    #[serde(default)]
    pub username: String,
}

/// コールバックURLへ送るフォーム
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Delivery {
    /// Pingを発生させたユーザー名
    pub username: String,
}

/// 受信したPing
///
/// `handle` はパスから取り出すだけで配信先の絞り込みには使わない。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PingEvent {
    /// `/yoed/{handle}` のハンドル
    pub handle: String,
    /// 送信元ユーザー名
    pub username: String,
}

impl PingEvent {
    /// 新しいPingEventを作成
    pub fn new(handle: impl Into<String>, username: impl Into<String>) -> Self {
        Self {
            handle: handle.into(),
            username: username.into(),
        }
    }

    /// 配信用フォーム
    pub fn delivery(&self) -> Delivery {
        Delivery {
            username: self.username.clone(),
        }
    }
}

/// ハンドルが `[a-z0-9]+` に一致するか
pub fn is_valid_handle(handle: &str) -> bool {
    !handle.is_empty()
        && handle
            .bytes()
            .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit())
}
