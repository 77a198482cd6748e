//! 設定管理
//!
//! JSON設定ファイルから読み込むRelayConfig

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// デフォルトの設定ファイルパス
pub const DEFAULT_CONFIG_PATH: &str = "./config.json";

/// relay設定
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelayConfig {
    /// HTTPリスナーのバインドアドレス（例: "0.0.0.0:8080"）
    pub listen: String,
}

impl RelayConfig {
    /// 設定ファイルを読み込む
    ///
    /// ファイルが存在しない、JSONとして不正、`listen`が空のいずれもエラーになる。
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let config: RelayConfig =
            serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            })?;

        config.validate()?;
        Ok(config)
    }

    /// 値の検証
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.listen.trim().is_empty() {
            return Err(ConfigError::Invalid("listen must not be empty".to_string()));
        }
        Ok(())
    }

    /// バインド先アドレス
    ///
    /// ホスト部を省略した `":8080"` 形式は全インターフェース（`0.0.0.0`）として扱う。
    pub fn bind_addr(&self) -> String {
        let listen = self.listen.trim();
        if listen.starts_with(':') {
            format!("0.0.0.0{}", listen)
        } else {
            listen.to_string()
        }
    }
}
