mod common;

#[tokio::test]
async fn test_stats_empty() {
    let (server, _state) = common::create_test_server(vec![]).await;

    let response = server.get("/stats").await;

    response.assert_status_ok();
    let html = response.text();
    assert!(html.contains("0 links, 0 active, 0 expired."));
    assert!(html.contains("No links yet."));
}

#[tokio::test]
async fn test_stats_lists_active_and_expired() {
    let (server, _state) = common::create_test_server(vec![
        common::test_link(1, "live", "https://example.com/live"),
        common::expired_link(2, "dead", "https://example.com/dead"),
    ])
    .await;

    let response = server.get("/stats").await;

    response.assert_status_ok();
    let html = response.text();
    assert!(html.contains("2 links, 1 active, 1 expired."));
    assert!(html.contains("https://example.com/live"));
    assert!(html.contains("https://example.com/dead"));
    assert!(html.contains("Active"));
    assert!(html.contains("Expired"));
}

#[tokio::test]
async fn test_stats_marks_active_nav_item() {
    let (server, _state) = common::create_test_server(vec![]).await;

    let html = server.get("/stats").await.text();

    assert!(html.contains(r#"class="nav-link active" aria-current="page">Statistics</a>"#));
    assert!(html.contains(r#"class="nav-link">New Link</a>"#));
}
