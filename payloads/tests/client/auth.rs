use payloads::requests::LoginCredentials;
use payloads::{ClientError, ClubId, TokenStore};
use serde_json::json;
use test_helpers::mock::MockResponse;
use test_helpers::{TEST_TOKEN, spawn_app, spawn_logged_in_app};

#[tokio::test]
async fn login_stores_the_token() -> anyhow::Result<()> {
    let app = spawn_app().await;
    app.mock(
        "POST",
        "/auth/login",
        MockResponse::json(json!({"token": "abc123", "userId": "u1"})),
    );
    assert!(!app.client.is_logged_in());

    let response = app
        .client
        .login(&LoginCredentials {
            username: "asha@example.com".into(),
            password: "hunter22".into(),
        })
        .await?;

    assert_eq!(response.user_id.map(|u| u.0).as_deref(), Some("u1"));
    assert!(app.client.is_logged_in());
    assert_eq!(
        app.tokens.get_token().map(|t| t.expose().to_string()).as_deref(),
        Some("abc123")
    );

    let sent = app.backend.requests_to("/auth/login");
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].authorization, None);
    assert_eq!(
        sent[0].body,
        Some(json!({"username": "asha@example.com", "password": "hunter22"}))
    );

    Ok(())
}

#[tokio::test]
async fn failed_login_keeps_no_token() -> anyhow::Result<()> {
    let app = spawn_app().await;
    app.mock(
        "POST",
        "/auth/login",
        MockResponse::with_status(
            401,
            json!({"message": "Invalid credentials"}),
        ),
    );

    let err = app
        .client
        .login(&LoginCredentials {
            username: "asha@example.com".into(),
            password: "wrong".into(),
        })
        .await
        .unwrap_err();

    assert_eq!(err.message(), "Invalid credentials");
    assert!(!app.client.is_logged_in());

    Ok(())
}

#[tokio::test]
async fn authenticated_calls_send_the_bearer_token() -> anyhow::Result<()> {
    let app = spawn_logged_in_app().await;
    app.mock("GET", "/courts/club/c1", MockResponse::json(json!([])));

    app.client.get_club_courts(&ClubId::from("c1")).await?;

    let sent = app.backend.requests_to("/courts/club/c1");
    assert_eq!(
        sent[0].authorization,
        Some(format!("Bearer {TEST_TOKEN}"))
    );

    Ok(())
}

#[tokio::test]
async fn missing_token_fails_without_a_request() -> anyhow::Result<()> {
    let app = spawn_app().await;
    app.mock("GET", "/courts/club/c1", MockResponse::json(json!([])));

    let result = app.client.get_club_courts(&ClubId::from("c1")).await;

    assert!(matches!(result, Err(ClientError::MissingToken)));
    assert!(app.backend.requests().is_empty());

    Ok(())
}

#[tokio::test]
async fn logout_forgets_the_token() -> anyhow::Result<()> {
    let app = spawn_logged_in_app().await;
    assert!(app.client.is_logged_in());

    app.logout();

    assert!(!app.client.is_logged_in());
    assert!(matches!(
        app.client.current_user().await,
        Err(ClientError::MissingToken)
    ));

    Ok(())
}
