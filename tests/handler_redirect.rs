mod common;

#[tokio::test]
async fn test_redirect_success() {
    let (server, _state) = common::create_test_server(vec![common::test_link(
        1,
        "redirect1",
        "https://example.com/target",
    )])
    .await;

    let response = server.get("/redirect1").await;

    assert_eq!(response.status_code(), 307);
    assert_eq!(response.header("location"), "https://example.com/target");
}

#[tokio::test]
async fn test_redirect_not_found() {
    let (server, _state) = common::create_test_server(vec![]).await;

    let response = server.get("/notfound").await;

    response.assert_status_not_found();
    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "not_found");
}

#[tokio::test]
async fn test_redirect_expired_link() {
    let (server, _state) = common::create_test_server(vec![common::expired_link(
        1,
        "gone",
        "https://example.com/old",
    )])
    .await;

    server.get("/gone").await.assert_status_not_found();
}

#[tokio::test]
async fn test_redirect_code_is_case_sensitive() {
    let (server, _state) = common::create_test_server(vec![common::test_link(
        1,
        "AbC123",
        "https://example.com",
    )])
    .await;

    assert_eq!(server.get("/AbC123").await.status_code(), 307);
    server.get("/abc123").await.assert_status_not_found();
}

#[tokio::test]
async fn test_redirect_after_form_creation() {
    let (server, state) = common::create_test_server(vec![]).await;

    let link = state
        .link_store
        .add_link("https://example.com/docs?page=2".to_string(), Some(7), None)
        .await
        .unwrap();

    let response = server.get(&format!("/{}", link.short_code)).await;

    assert_eq!(response.status_code(), 307);
    assert_eq!(response.header("location"), "https://example.com/docs?page=2");
}
