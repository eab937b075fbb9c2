mod common;

#[tokio::test]
async fn test_health_reports_store() {
    let (server, _state) = common::create_test_server(vec![
        common::test_link(1, "one", "https://example.com/1"),
        common::expired_link(2, "two", "https://example.com/2"),
    ])
    .await;

    let response = server.get("/health").await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["storage"], "memory");
    assert_eq!(json["links"], 2);
    assert!(json["version"].is_string());
}
