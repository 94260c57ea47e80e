use payloads::{ClientError, ClubId};
use reqwest::StatusCode;
use serde_json::json;
use test_helpers::mock::MockResponse;
use test_helpers::{assert_status_code, spawn_logged_in_app};

#[tokio::test]
async fn list_endpoints_reject_objects() -> anyhow::Result<()> {
    let app = spawn_logged_in_app().await;
    app.mock(
        "GET",
        "/courts/club/c1",
        MockResponse::json(json!({"courts": []})),
    );

    let err = app
        .client
        .get_club_courts(&ClubId::from("c1"))
        .await
        .unwrap_err();

    assert!(matches!(err, ClientError::InvalidFormat(_)));
    assert_eq!(err.message(), "Invalid response format");

    Ok(())
}

#[tokio::test]
async fn undecodable_bodies_are_invalid_format() -> anyhow::Result<()> {
    let app = spawn_logged_in_app().await;
    app.mock("GET", "/courts/club/c1", MockResponse::text(200, "<html>"));
    app.mock(
        "GET",
        "/courts/club/c2",
        MockResponse::json(json!([{"name": "missing id"}])),
    );

    for club in ["c1", "c2"] {
        let err = app
            .client
            .get_club_courts(&ClubId::from(club))
            .await
            .unwrap_err();
        assert_eq!(err.message(), "Invalid response format");
    }

    Ok(())
}

#[tokio::test]
async fn server_messages_reach_the_user() -> anyhow::Result<()> {
    let app = spawn_logged_in_app().await;
    let cases = [
        (
            "c1",
            MockResponse::with_status(
                409,
                json!({"message": "Court already booked"}),
            ),
            "Court already booked",
        ),
        (
            "c2",
            MockResponse::with_status(
                400,
                json!({"errors": ["name empty", "no club"]}),
            ),
            "name empty, no club",
        ),
        (
            "c3",
            MockResponse::with_status(403, json!({"error": "Forbidden"})),
            "Forbidden",
        ),
        (
            "c4",
            MockResponse::text(502, "Bad gateway"),
            "Bad gateway",
        ),
        (
            "c5",
            MockResponse::text(503, ""),
            "Request failed with status code 503",
        ),
    ];

    for (club, response, expected) in cases {
        app.mock("GET", &format!("/courts/club/{club}"), response);
        let err = app
            .client
            .get_club_courts(&ClubId::from(club))
            .await
            .unwrap_err();
        assert_eq!(err.message(), expected);
    }

    Ok(())
}

#[tokio::test]
async fn status_code_is_kept() -> anyhow::Result<()> {
    let app = spawn_logged_in_app().await;
    app.mock(
        "DELETE",
        "/api/devices/d1",
        MockResponse::with_status(404, json!({"message": "Device not found"})),
    );

    let result = app.client.delete_device(&"d1".into()).await;
    assert_status_code(result, StatusCode::NOT_FOUND);

    Ok(())
}

#[tokio::test]
async fn unreachable_backend_is_a_network_error() -> anyhow::Result<()> {
    let app = spawn_logged_in_app().await;
    let mut client = app.client.clone();
    // Nothing listens on port 9 (discard) on test machines.
    client.address = "http://127.0.0.1:9".into();

    let err = client
        .get_club_courts(&ClubId::from("c1"))
        .await
        .unwrap_err();

    assert!(matches!(err, ClientError::Network(_)));
    assert_eq!(err.message(), "Network error. Please check your connection.");

    Ok(())
}
