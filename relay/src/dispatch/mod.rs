//! Pingのファンアウト配信
//!
//! 登録済みの全コールバックURLへ `username` をフォームPOSTする。
//! 応答が得られなかったURLは購読解除し、応答があればステータスに関係なく残す。

use crate::registry::SubscriptionRegistry;
use reqwest::{Client, StatusCode};
use thiserror::Error;
use tracing::{info, warn};
use yoed_common::protocol::PingEvent;

/// 配信エラー
///
/// 応答を得られなかった場合のみ発生する。HTTPステータスはエラーにしない。
#[derive(Debug, Error)]
#[error("Failed to deliver ping to {endpoint}: {source}")]
pub struct DeliveryError {
    /// 配信先URL
    pub endpoint: String,
    /// 元のreqwestエラー
    #[source]
    pub source: reqwest::Error,
}

/// 1回のファンアウトの結果
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct DispatchReport {
    /// 応答があった配信先とそのステータス
    pub delivered: Vec<(String, StatusCode)>,
    /// 配信に失敗して削除した配信先
    pub pruned: Vec<String>,
}

impl DispatchReport {
    /// 配信を試みた件数
    pub fn attempted(&self) -> usize {
        self.delivered.len() + self.pruned.len()
    }
}

/// Pingディスパッチャー
#[derive(Clone)]
pub struct Dispatcher {
    registry: SubscriptionRegistry,
    client: Client,
}

impl Dispatcher {
    /// 新しいディスパッチャーを作成
    pub fn new(registry: SubscriptionRegistry, client: Client) -> Self {
        Self { registry, client }
    }

    /// 全購読者へPingを配信
    ///
    /// 開始時点のスナップショットに対して1件ずつ順番に配信する。
    /// 途中で購読されたURLはこの配信には含まれない。
    pub async fn dispatch(&self, event: &PingEvent) -> DispatchReport {
        let endpoints = self.registry.snapshot().await;
        let mut report = DispatchReport::default();

        // スナップショットで判定する（is_empty()と別にロックを取らない）
        if endpoints.is_empty() {
            info!(handle = %event.handle, "No handler registered");
            return report;
        }

        for endpoint in endpoints {
            info!(endpoint = %endpoint, "Dispatch to handler");

            match self.deliver(&endpoint, event).await {
                Ok(status) => {
                    if status.is_success() {
                        info!(endpoint = %endpoint, status = %status, "Handler responded");
                    } else {
                        // 非2xxでも購読は維持する
                        info!(
                            endpoint = %endpoint,
                            status = %status,
                            "Handler responded with non-success status"
                        );
                    }
                    report.delivered.push((endpoint, status));
                }
                Err(e) => {
                    warn!(error = %e, "Error while dispatching ping");
                    if self.registry.unsubscribe(&endpoint).await {
                        info!(endpoint = %endpoint, "Removed handler");
                    }
                    report.pruned.push(endpoint);
                }
            }
        }

        info!(
            handle = %event.handle,
            delivered = report.delivered.len(),
            pruned = report.pruned.len(),
            "Dispatch completed"
        );

        report
    }

    /// 単一の配信先へフォームPOST
    pub async fn deliver(
        &self,
        endpoint: &str,
        event: &PingEvent,
    ) -> Result<StatusCode, DeliveryError> {
        let response = self
            .client
            .post(endpoint)
            .form(&event.delivery())
            .send()
            .await
            .map_err(|source| DeliveryError {
                endpoint: endpoint.to_string(),
                source,
            })?;

        Ok(response.status())
    }
}
