//! 購読登録管理
//!
//! コールバックURLの集合をメモリ内で管理する。永続化はしない。

use std::collections::HashSet;
use std::sync::Arc;
use tokio::sync::RwLock;

/// 購読レジストリ
///
/// ロックは各操作の間だけ保持する。配信中にロックを保持しないよう、
/// ファンアウトは [`SubscriptionRegistry::snapshot`] のコピーに対して行う。
#[derive(Clone, Default)]
pub struct SubscriptionRegistry {
    endpoints: Arc<RwLock<HashSet<String>>>,
}

impl SubscriptionRegistry {
    /// 空のレジストリを作成
    pub fn new() -> Self {
        Self::default()
    }

    /// コールバックURLを登録
    ///
    /// 新規に追加された場合は`true`、既に登録済みなら`false`。
    pub async fn subscribe(&self, endpoint: impl Into<String>) -> bool {
        let mut endpoints = self.endpoints.write().await;
        endpoints.insert(endpoint.into())
    }

    /// コールバックURLを削除
    ///
    /// 登録されていない場合は何もしない。
    pub async fn unsubscribe(&self, endpoint: &str) -> bool {
        let mut endpoints = self.endpoints.write().await;
        endpoints.remove(endpoint)
    }

    /// 現在の登録内容のコピー（順序は不定）
    pub async fn snapshot(&self) -> Vec<String> {
        let endpoints = self.endpoints.read().await;
        endpoints.iter().cloned().collect()
    }

    /// 登録が空か
    ///
    /// ディスパッチャーは取得済みのスナップショットで空判定するため、
    /// これは状態確認用。
    pub async fn is_empty(&self) -> bool {
        self.endpoints.read().await.is_empty()
    }

    /// 登録数
    pub async fn len(&self) -> usize {
        self.endpoints.read().await.len()
    }

    /// 登録済みか
    pub async fn contains(&self, endpoint: &str) -> bool {
        self.endpoints.read().await.contains(endpoint)
    }
}
