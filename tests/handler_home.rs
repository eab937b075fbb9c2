mod common;

use axum::http::StatusCode;

#[tokio::test]
async fn test_home_renders_form() {
    let (server, _state) = common::create_test_server(vec![]).await;

    let response = server.get("/").await;

    response.assert_status_ok();
    let html = response.text();
    assert!(html.contains("LinkForge"));
    assert!(html.contains(r#"name="original_url""#));
    assert!(html.contains(r#"name="validity_period""#));
    assert!(html.contains(r#"name="custom_shortcode""#));
    assert!(!html.contains("Success!"));
}

#[tokio::test]
async fn test_create_link_via_form() {
    let (server, state) = common::create_test_server(vec![]).await;

    let response = server
        .post("/")
        .form(&[
            ("original_url", "https://example.com/a/very/long/path"),
            ("validity_period", ""),
            ("custom_shortcode", "MyLink7"),
        ])
        .await;

    response.assert_status_ok();
    let html = response.text();
    assert!(html.contains("Success!"));
    assert!(html.contains("Your new link is ready!"));
    assert!(html.contains("http://lf.test/MyLink7"));
    assert!(html.contains("data-copy-target"));
    assert!(html.contains("Never expires"));

    let link = state.link_store.get_link("MyLink7").await.unwrap();
    assert_eq!(link.original_url, "https://example.com/a/very/long/path");
    assert_eq!(link.expires_at, None);
}

#[tokio::test]
async fn test_create_link_via_form_generated_code_with_expiry() {
    let (server, state) = common::create_test_server(vec![]).await;

    let response = server
        .post("/")
        .form(&[
            ("original_url", "https://example.com"),
            ("validity_period", "7"),
            ("custom_shortcode", ""),
        ])
        .await;

    response.assert_status_ok();
    assert!(response.text().contains("Expires "));

    let links = state.link_store.list_links().await;
    assert_eq!(links.len(), 1);
    assert_eq!(links[0].short_code.len(), 7);
    let expires_at = links[0].expires_at.unwrap();
    assert_eq!((expires_at - links[0].created_at).num_days(), 7);
}

#[tokio::test]
async fn test_form_validation_messages() {
    let (server, state) = common::create_test_server(vec![]).await;

    let cases = [
        (
            [
                ("original_url", "not-a-url"),
                ("validity_period", ""),
                ("custom_shortcode", ""),
            ],
            "Please enter a valid URL.",
        ),
        (
            [
                ("original_url", "https://example.com"),
                ("validity_period", "0"),
                ("custom_shortcode", ""),
            ],
            "Must be a positive number.",
        ),
        (
            [
                ("original_url", "https://example.com"),
                ("validity_period", ""),
                ("custom_shortcode", "my link"),
            ],
            "Shortcode can only contain letters and numbers.",
        ),
    ];

    for (fields, message) in cases {
        let response = server.post("/").form(&fields).await;

        response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
        let html = response.text();
        assert!(html.contains(message), "{message}");
        assert!(!html.contains("Success!"));
    }

    assert!(state.link_store.is_empty().await);
}

#[tokio::test]
async fn test_form_keeps_values_after_error() {
    let (server, _state) = common::create_test_server(vec![]).await;

    let response = server
        .post("/")
        .form(&[
            ("original_url", "https://example.com/keep"),
            ("validity_period", "-1"),
            ("custom_shortcode", "keepme"),
        ])
        .await;

    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
    let html = response.text();
    assert!(html.contains(r#"value="https://example.com/keep""#));
    assert!(html.contains(r#"value="keepme""#));
}

#[tokio::test]
async fn test_form_shortcode_taken() {
    let (server, state) = common::create_test_server(vec![common::test_link(
        1,
        "taken",
        "https://example.com/first",
    )])
    .await;

    let response = server
        .post("/")
        .form(&[
            ("original_url", "https://example.com/second"),
            ("validity_period", ""),
            ("custom_shortcode", "taken"),
        ])
        .await;

    response.assert_status(StatusCode::CONFLICT);
    assert!(response.text().contains("That shortcode is already taken."));

    let link = state.link_store.get_link("taken").await.unwrap();
    assert_eq!(link.original_url, "https://example.com/first");
    assert_eq!(state.link_store.len().await, 1);
}

#[tokio::test]
async fn test_form_reserved_shortcode() {
    let (server, _state) = common::create_test_server(vec![]).await;

    let response = server
        .post("/")
        .form(&[
            ("original_url", "https://example.com"),
            ("validity_period", ""),
            ("custom_shortcode", "Stats"),
        ])
        .await;

    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
    assert!(response.text().contains("This shortcode is reserved."));
}

#[tokio::test]
async fn test_form_missing_fields_default_to_empty() {
    let (server, _state) = common::create_test_server(vec![]).await;

    let response = server
        .post("/")
        .form(&[("original_url", "https://example.com")])
        .await;

    response.assert_status_ok();
    assert!(response.text().contains("Success!"));
}
