//! Integration Test: 配信中の購読登録
//!
//! ファンアウトの途中で購読登録しても、レジストリが壊れず、
//! 登録直後から購読が見えることを検証する。

use std::time::Duration;

use reqwest::{Client, StatusCode};
use wiremock::matchers::method;
use wiremock::{Mock, MockServer, ResponseTemplate};

use crate::support::http::spawn_relay;
use crate::support::subscriber::spawn_subscriber;

#[tokio::test]
async fn test_subscribe_during_in_flight_ping() {
    let server = spawn_relay().await;
    let client = Client::new();

    // 応答の遅い購読者
    let slow = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_millis(500)))
        .mount(&slow)
        .await;
    let slow_url = format!("{}/cb", slow.uri());
    server.state().registry.subscribe(slow_url.clone()).await;

    let ping_client = client.clone();
    let ping_url = server.url("/yoed/team");
    let in_flight = tokio::spawn(async move {
        ping_client
            .post(ping_url)
            .form(&[("username", "alice")])
            .send()
            .await
            .unwrap()
            .status()
    });

    // 配信がsleep中の購読者で止まっている間に登録する
    tokio::time::sleep(Duration::from_millis(100)).await;
    let (_late_mock, late_url) = spawn_subscriber(200).await;
    let status = client
        .post(server.url("/"))
        .form(&[("callback_url", late_url.as_str())])
        .send()
        .await
        .unwrap()
        .status();
    assert_eq!(status, StatusCode::OK);
    assert!(server.state().registry.contains(&late_url).await);
    assert!(!in_flight.is_finished());

    assert_eq!(in_flight.await.unwrap(), StatusCode::OK);

    let mut snapshot = server.state().registry.snapshot().await;
    snapshot.sort();
    let mut expected = vec![slow_url, late_url];
    expected.sort();
    assert_eq!(snapshot, expected);

    server.stop().await;
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_parallel_pings_and_subscribes_keep_registry_consistent() {
    let server = spawn_relay().await;
    let client = Client::new();
    let (mock, callback_url) = spawn_subscriber(200).await;
    server.state().registry.subscribe(callback_url.clone()).await;

    let mut handles = Vec::new();
    for i in 0..10 {
        let client = client.clone();
        let ping_url = server.url("/yoed/team");
        let subscribe_url = server.url("/");
        let extra = format!("{}/cb{}", mock.uri(), i % 3);
        handles.push(tokio::spawn(async move {
            let pinged = client
                .post(ping_url)
                .form(&[("username", format!("user{}", i))])
                .send()
                .await
                .unwrap()
                .status();
            let subscribed = client
                .post(subscribe_url)
                .form(&[("callback_url", extra)])
                .send()
                .await
                .unwrap()
                .status();
            (pinged, subscribed)
        }));
    }

    for handle in handles {
        let (pinged, subscribed) = handle.await.unwrap();
        assert_eq!(pinged, StatusCode::OK);
        assert_eq!(subscribed, StatusCode::OK);
    }

    // 元の購読 + /cb0, /cb1, /cb2（404を返すが購読は維持）
    assert_eq!(server.state().registry.len().await, 4);
    assert!(server.state().registry.contains(&callback_url).await);

    server.stop().await;
}
