//! Ping受信APIハンドラー

use crate::api::error::{ApiError, AppError};
use crate::api::form_value;
use crate::AppState;
use axum::{
    extract::{
        rejection::{FormRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    Form,
};
use tracing::info;
use yoed_common::protocol::{is_valid_handle, PingEvent, PingRequest};

/// POST /yoed/:handle - Pingを全購読者へ配信
///
/// `username` はフォームボディ、無ければクエリ文字列から読む。解釈できない
/// ボディは空の `username` として扱い、配信は行う。
/// `handle` は配信先の絞り込みに使わない。配信結果に関係なく200を返すが、
/// レスポンスは今回のファンアウトが終わるまで返さない。
pub async fn ping(
    State(state): State<AppState>,
    Path(handle): Path<String>,
    query: Result<Query<PingRequest>, QueryRejection>,
    form: Result<Form<PingRequest>, FormRejection>,
) -> Result<StatusCode, AppError> {
    if !is_valid_handle(&handle) {
        return Err(ApiError::InvalidHandle(handle).into());
    }
    let username = form_value(
        form.ok().map(|Form(req)| req.username),
        query.ok().map(|Query(req)| req.username),
    );

    info!(username = %username, handle = %handle, "Got a YO");

    let event = PingEvent::new(handle, username);
    state.dispatcher.dispatch(&event).await;

    Ok(StatusCode::OK)
}
