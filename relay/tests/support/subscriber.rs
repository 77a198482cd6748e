//! 購読者（コールバック先）のモック

use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};
use yoed_common::protocol::Delivery;

/// 指定ステータスを返すコールバック先を起動し、コールバックURLを返す
#[allow(dead_code)]
pub async fn spawn_subscriber(status: u16) -> (MockServer, String) {
    let mock = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/cb"))
        .respond_with(ResponseTemplate::new(status))
        .mount(&mock)
        .await;
    let callback_url = format!("{}/cb", mock.uri());
    (mock, callback_url)
}

/// 接続を拒否するコールバックURL
#[allow(dead_code)]
pub async fn unreachable_callback() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}/cb", addr)
}

/// モックが受け取った`username`フィールドの一覧
#[allow(dead_code)]
pub async fn received_usernames(mock: &MockServer) -> Vec<String> {
    mock.received_requests()
        .await
        .unwrap_or_default()
        .iter()
        .filter_map(|req| serde_urlencoded::from_bytes::<Delivery>(&req.body).ok())
        .map(|delivery| delivery.username)
        .collect()
}
