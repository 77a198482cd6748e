//! 購読登録APIハンドラー

use crate::api::error::{ApiError, AppError};
use crate::api::form_value;
use crate::AppState;
use axum::{
    extract::{
        rejection::{FormRejection, QueryRejection},
        Query, State,
    },
    http::StatusCode,
    Form,
};
use tracing::info;
use yoed_common::protocol::SubscribeRequest;

/// POST / - コールバックURLを登録
///
/// `callback_url` はフォームボディ、無ければクエリ文字列から読む。
/// URLの形式は検証しない。不正なURLは最初の配信で削除される。
/// 空の `callback_url` だけは登録せず400を返す。
pub async fn subscribe(
    State(state): State<AppState>,
    query: Result<Query<SubscribeRequest>, QueryRejection>,
    form: Result<Form<SubscribeRequest>, FormRejection>,
) -> Result<StatusCode, AppError> {
    let callback_url = form_value(
        form.ok().map(|Form(req)| req.callback_url),
        query.ok().map(|Query(req)| req.callback_url),
    );
    if callback_url.is_empty() {
        return Err(ApiError::MissingCallbackUrl.into());
    }

    let added = state.registry.subscribe(callback_url.clone()).await;
    info!(callback_url = %callback_url, added, "Subscribe");

    Ok(StatusCode::OK)
}
