//! HTTPクライアントの統合テスト
//!
//! mockitoのサーバーに対して実際にリクエストを送る

use ars_common::{analyze_address, fetch_records_page, run_probe, ApiConfig, Deliverability, Error, PageRequest, Probe};
use ars_console::client::build_client;
use mockito::{Matcher, Server};

fn api_config(server: &Server) -> ApiConfig {
    ApiConfig::new(format!("{}/hktv_ars/", server.url()))
}

/// 地址はURLエンコードされ、キャッシュバスタが付く
#[tokio::test]
async fn test_analyze_address_encodes_query() {
    let mut server = Server::new_async().await;
    let m = server
        .mock("GET", "/hktv_ars/find-hk-addresses")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("address".into(), "香港 灣仔&1號".into()),
            Matcher::Regex(r"_t=\d+".into()),
        ]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            r#"{"status":200,"data":{"address":"香港 灣仔&1號","dist":"灣仔","number":"1號","willDelivery":"true","confidence":0.93}}"#,
        )
        .create_async()
        .await;

    let client = build_client(api_config(&server), 5).unwrap();
    let result = analyze_address(&client, "香港 灣仔&1號").await.expect("解析失敗");

    m.assert_async().await;
    assert!(result.success);
    assert_eq!(result.district.as_deref(), Some("灣仔"));
    assert_eq!(result.street_number.as_deref(), Some("1號"));
    assert_eq!(result.will_delivery, Deliverability::Deliverable);
    assert_eq!(result.confidence, Some(0.93));
}

#[tokio::test]
async fn test_records_page_is_normalized() {
    let mut server = Server::new_async().await;
    let m = server
        .mock("GET", "/hktv_ars/records")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("pageNo".into(), "2".into()),
            Matcher::UrlEncoded("pageSize".into(), "20".into()),
            Matcher::Regex(r"_t=\d+".into()),
        ]))
        .with_status(200)
        .with_body(
            r#"{"status":200,"data":{"list":[{"address":"A","willDeliver":false},{"address":"B"}],"pagination":{"currentPage":2,"pageSize":20,"totalElements":22}}}"#,
        )
        .create_async()
        .await;

    let client = build_client(api_config(&server), 5).unwrap();
    let page = fetch_records_page(
        &client,
        PageRequest {
            page_no: 2,
            page_size: 20,
        },
    )
    .await
    .expect("取得失敗");

    m.assert_async().await;
    assert_eq!(page.rows.len(), 2);
    assert_eq!(page.rows[0].will_deliver, Deliverability::NotDeliverable);
    assert_eq!(page.rows[1].will_deliver, Deliverability::Unknown);
    assert_eq!(page.page.current, 2);
    assert_eq!(page.page.total, 22);
}

/// JSONでない200応答は空ページ（要求したページ位置のまま）
#[tokio::test]
async fn test_non_json_records_body_is_empty_page() {
    let mut server = Server::new_async().await;
    let _m = server
        .mock("GET", "/hktv_ars/records")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_header("content-type", "text/html")
        .with_body("<html>maintenance</html>")
        .create_async()
        .await;

    let client = build_client(api_config(&server), 5).unwrap();
    let page = fetch_records_page(
        &client,
        PageRequest {
            page_no: 3,
            page_size: 20,
        },
    )
    .await
    .expect("空ページになるはず");

    assert!(page.is_empty());
    assert_eq!(page.page.current, 3);
    assert_eq!(page.page.page_size, 20);
    assert_eq!(page.page.total, 0);
}

/// 2xx以外はバックエンドのmessage付きでError::Http
#[tokio::test]
async fn test_http_error_carries_backend_message() {
    let mut server = Server::new_async().await;
    let _m = server
        .mock("GET", "/hktv_ars/find-hk-addresses")
        .match_query(Matcher::Any)
        .with_status(500)
        .with_body(r#"{"message":"parser unavailable"}"#)
        .create_async()
        .await;

    let client = build_client(api_config(&server), 5).unwrap();
    let err = analyze_address(&client, "彌敦道").await.unwrap_err();

    match &err {
        Error::Http { status, message } => {
            assert_eq!(*status, 500);
            assert_eq!(message.as_deref(), Some("parser unavailable"));
        }
        other => panic!("unexpected error: {:?}", other),
    }
    assert_eq!(err.user_message(), "parser unavailable");
}

#[tokio::test]
async fn test_queue_probe_sends_message_as_path_segment() {
    let mut server = Server::new_async().await;
    let m = server
        .mock("GET", Matcher::Regex(r"^/hktv_ars/send/test-message-\d+$".into()))
        .match_query(Matcher::Regex(r"_t=\d+".into()))
        .with_status(200)
        .with_body("sent")
        .create_async()
        .await;

    let client = build_client(api_config(&server), 5).unwrap();
    let report = run_probe(&client, Probe::Queue).await;

    m.assert_async().await;
    assert!(report.success);
    assert_eq!(report.text, "RabbitMQ測試成功: sent");
}

#[tokio::test]
async fn test_cache_probe_failure_is_reported() {
    let mut server = Server::new_async().await;
    let _m = server
        .mock("GET", "/hktv_ars/test-redis")
        .match_query(Matcher::Any)
        .with_status(503)
        .create_async()
        .await;

    let client = build_client(api_config(&server), 5).unwrap();
    let report = run_probe(&client, Probe::Cache).await;

    assert!(!report.success);
    assert!(report.text.starts_with("Redis測試失敗: "));
    assert!(report.text.contains("503"));
}

/// 接続できない場合はTransportエラー
#[tokio::test]
async fn test_connection_refused_is_transport_error() {
    let client = build_client(ApiConfig::new("http://127.0.0.1:1/hktv_ars"), 2).unwrap();
    let err = fetch_records_page(&client, PageRequest::default())
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Transport(_)));
}
