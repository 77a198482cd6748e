//! APIエラーレスポンス型
//!
//! axum用の共通エラーハンドリング

use axum::{http::StatusCode, response::IntoResponse, Json};
use serde_json::json;
use thiserror::Error;

/// リクエスト処理エラー
///
/// 配信失敗はここに含めない（Publisherには常に成功を返す）。
#[derive(Debug, Error)]
pub enum ApiError {
    /// `callback_url` が未指定
    #[error("callback_url is required")]
    MissingCallbackUrl,

    /// ハンドルが `[a-z0-9]+` に一致しない
    #[error("Invalid handle: {0}")]
    InvalidHandle(String),
}

/// Axum用のエラーレスポンス型
#[derive(Debug)]
pub struct AppError(pub ApiError);

impl From<ApiError> for AppError {
    fn from(err: ApiError) -> Self {
        AppError(err)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let status = match &self.0 {
            ApiError::MissingCallbackUrl => StatusCode::BAD_REQUEST,
            // ルートに一致しない扱い
            ApiError::InvalidHandle(_) => StatusCode::NOT_FOUND,
        };

        let payload = json!({
            "error": self.0.to_string()
        });

        (status, Json(payload)).into_response()
    }
}
