use payloads::resource::ResourceCell;
use payloads::responses::Court;
use payloads::{ClubId, CourtId, RequestStatus};
use serde_json::json;
use std::time::Duration;
use test_helpers::mock::MockResponse;
use test_helpers::{TestApp, spawn_logged_in_app};

fn courts_cell() -> ResourceCell<Vec<Court>> {
    ResourceCell::default()
}

async fn fetch_courts(
    app: &TestApp,
    courts: &ResourceCell<Vec<Court>>,
    club_id: Option<ClubId>,
) -> bool {
    let client = &app.client;
    courts
        .fetch(club_id.and_then(ClubId::non_blank), |club_id| async move {
            client.get_club_courts(&club_id).await
        })
        .await
}

#[tokio::test]
async fn club_courts_load() -> anyhow::Result<()> {
    let app = spawn_logged_in_app().await;
    app.mock(
        "GET",
        "/courts/club/c1",
        MockResponse::json(json!([{"id": "x"}])),
    );
    let courts = courts_cell();
    assert_eq!(courts.snapshot().status, RequestStatus::Idle);

    assert!(fetch_courts(&app, &courts, Some("c1".into())).await);

    let state = courts.snapshot();
    assert_eq!(state.status, RequestStatus::Success);
    assert_eq!(state.error, None);
    let data = state.data.unwrap();
    assert_eq!(
        data,
        [Court {
            id: CourtId::from("x"),
            name: None,
            surface: None,
            reservation_interval_minutes: None,
        }]
    );
    assert_eq!(data[0].title(), "Unknown Court");

    Ok(())
}

#[tokio::test]
async fn server_failure_sets_an_error() -> anyhow::Result<()> {
    let app = spawn_logged_in_app().await;
    app.mock(
        "GET",
        "/courts/club/c1",
        MockResponse::with_status(500, json!({})),
    );
    let courts = courts_cell();

    fetch_courts(&app, &courts, Some("c1".into())).await;

    let state = courts.snapshot();
    assert_eq!(state.status, RequestStatus::Error);
    assert!(!state.error.unwrap_or_default().is_empty());
    assert!(state.data.is_none());

    Ok(())
}

#[tokio::test]
async fn missing_club_stays_idle() -> anyhow::Result<()> {
    let app = spawn_logged_in_app().await;
    let courts = courts_cell();

    assert!(!fetch_courts(&app, &courts, None).await);
    assert!(!fetch_courts(&app, &courts, Some("  ".into())).await);

    assert_eq!(courts.snapshot().status, RequestStatus::Idle);
    assert!(app.backend.requests().is_empty());

    Ok(())
}

#[tokio::test]
async fn failed_refetch_keeps_previous_courts() -> anyhow::Result<()> {
    let app = spawn_logged_in_app().await;
    let courts = courts_cell();
    app.mock(
        "GET",
        "/courts/club/c1",
        MockResponse::json(json!([{"id": "x", "name": "Centre"}])),
    );
    fetch_courts(&app, &courts, Some("c1".into())).await;

    app.mock(
        "GET",
        "/courts/club/c1",
        MockResponse::with_status(503, json!({"message": "Maintenance"})),
    );
    fetch_courts(&app, &courts, Some("c1".into())).await;

    let state = courts.snapshot();
    assert_eq!(state.status, RequestStatus::Error);
    assert_eq!(state.error.as_deref(), Some("Maintenance"));
    assert_eq!(state.data.unwrap()[0].title(), "Centre");

    Ok(())
}

#[tokio::test]
async fn newest_request_wins_when_older_is_slower() -> anyhow::Result<()> {
    let app = spawn_logged_in_app().await;
    app.mock(
        "GET",
        "/courts/club/c1",
        MockResponse::json(json!([{"id": "from-c1"}]))
            .delayed(Duration::from_millis(300)),
    );
    app.mock(
        "GET",
        "/courts/club/c2",
        MockResponse::json(json!([{"id": "from-c2"}])),
    );
    let courts = courts_cell();

    let (older, newer) = tokio::join!(
        fetch_courts(&app, &courts, Some("c1".into())),
        fetch_courts(&app, &courts, Some("c2".into())),
    );

    assert!(!older);
    assert!(newer);
    let state = courts.snapshot();
    assert_eq!(state.status, RequestStatus::Success);
    assert_eq!(state.data.unwrap()[0].id, CourtId::from("from-c2"));

    Ok(())
}

#[tokio::test]
async fn newest_request_wins_when_older_is_faster() -> anyhow::Result<()> {
    let app = spawn_logged_in_app().await;
    app.mock(
        "GET",
        "/courts/club/c1",
        MockResponse::json(json!([{"id": "from-c1"}])),
    );
    app.mock(
        "GET",
        "/courts/club/c2",
        MockResponse::json(json!([{"id": "from-c2"}]))
            .delayed(Duration::from_millis(300)),
    );
    let courts = courts_cell();

    let (older, newer) = tokio::join!(
        fetch_courts(&app, &courts, Some("c1".into())),
        fetch_courts(&app, &courts, Some("c2".into())),
    );

    assert!(!older);
    assert!(newer);
    assert_eq!(
        courts.snapshot().data.unwrap()[0].id,
        CourtId::from("from-c2")
    );

    Ok(())
}

#[tokio::test]
async fn cancelled_request_is_ignored() -> anyhow::Result<()> {
    let app = spawn_logged_in_app().await;
    app.mock(
        "GET",
        "/courts/club/c1",
        MockResponse::json(json!([{"id": "late"}]))
            .delayed(Duration::from_millis(200)),
    );
    let courts = courts_cell();

    let cancel = async {
        tokio::time::sleep(Duration::from_millis(50)).await;
        courts.cancel();
    };
    let (applied, ()) =
        tokio::join!(fetch_courts(&app, &courts, Some("c1".into())), cancel);

    assert!(!applied);
    let state = courts.snapshot();
    assert_eq!(state.status, RequestStatus::Idle);
    assert!(state.data.is_none());

    Ok(())
}
