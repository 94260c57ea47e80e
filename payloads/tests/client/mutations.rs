use payloads::requests::{AddDevice, CreateGroup, GroupMember};
use payloads::resource::MutationCell;
use payloads::responses::{Device, Group};
use payloads::{
    ClubId, DeviceType, InvalidationLedger, RequestStatus, ResourceKey, UserId,
};
use serde_json::json;
use std::cell::RefCell;
use std::time::Duration;
use test_helpers::mock::MockResponse;
use test_helpers::spawn_logged_in_app;

fn camera(club: &str) -> AddDevice {
    AddDevice {
        name: "Court 1 camera".into(),
        device_type: DeviceType::Camera,
        status: "ACTIVE".into(),
        club_id: ClubId::from(club),
        court_id: None,
        control_endpoint: None,
        metadata: None,
    }
}

#[tokio::test]
async fn success_invokes_callback_and_invalidates() -> anyhow::Result<()> {
    let app = spawn_logged_in_app().await;
    app.mock(
        "POST",
        "/api/devices",
        MockResponse::json(json!({
            "id": "d1",
            "name": "Court 1 camera",
            "type": "CAMERA",
            "clubId": "c1"
        })),
    );
    let mutation = MutationCell::default();
    let ledger = RefCell::new(InvalidationLedger::default());
    let devices = ResourceKey::ClubDevices(ClubId::from("c1"));
    let added: RefCell<Option<Device>> = RefCell::new(None);

    mutation
        .run(
            app.client.add_device(&camera("c1")),
            |device| {
                ledger.borrow_mut().invalidate(devices.clone());
                *added.borrow_mut() = Some(device);
            },
            |message| panic!("unexpected error: {message}"),
        )
        .await;

    let state = mutation.snapshot();
    assert_eq!(state.status, RequestStatus::Success);
    assert_eq!(state.error, None);
    assert_eq!(
        added.borrow().as_ref().map(|d| d.device_type),
        Some(DeviceType::Camera)
    );
    assert_eq!(ledger.borrow().version(&devices), 1);

    let sent = app.backend.requests_to("/api/devices");
    assert_eq!(
        sent[0].body,
        Some(json!({
            "name": "Court 1 camera",
            "type": "CAMERA",
            "status": "ACTIVE",
            "clubId": "c1"
        }))
    );

    Ok(())
}

#[tokio::test]
async fn failure_reports_the_server_message() -> anyhow::Result<()> {
    let app = spawn_logged_in_app().await;
    app.mock(
        "POST",
        "/api/groups",
        MockResponse::with_status(400, json!({"message": "Group name taken"})),
    );
    let mutation = MutationCell::default();
    let reported = RefCell::new(None);

    mutation
        .run(
            app.client.create_group(&CreateGroup {
                name: "Sunday doubles".into(),
                creator_user_id: UserId::from("u1"),
                members: vec![GroupMember {
                    name: "Asha".into(),
                    user_id: None,
                    phone_number: "+919876543210".into(),
                    admin: false,
                }],
            }),
            |_: Group| panic!("unexpected success"),
            |message| *reported.borrow_mut() = Some(message),
        )
        .await;

    let state = mutation.snapshot();
    assert_eq!(state.status, RequestStatus::Error);
    assert_eq!(state.error.as_deref(), Some("Group name taken"));
    assert_eq!(reported.borrow().as_deref(), Some("Group name taken"));

    Ok(())
}

#[tokio::test]
async fn every_trigger_gets_its_own_outcome() -> anyhow::Result<()> {
    let app = spawn_logged_in_app().await;
    app.mock(
        "POST",
        "/api/devices",
        MockResponse::json(json!({"id": "d1", "name": "n", "type": "CAMERA"}))
            .delayed(Duration::from_millis(300)),
    );
    let mutation = MutationCell::default();
    let outcomes = RefCell::new(Vec::new());
    let device = camera("c1");

    let first = mutation.run(
        app.client.add_device(&device),
        |_| outcomes.borrow_mut().push("first ok"),
        |_| outcomes.borrow_mut().push("first err"),
    );
    let second = async {
        tokio::time::sleep(Duration::from_millis(50)).await;
        app.mock(
            "POST",
            "/api/devices",
            MockResponse::with_status(400, json!({"message": "duplicate"})),
        );
        mutation
            .run(
                app.client.add_device(&camera("c1")),
                |_| outcomes.borrow_mut().push("second ok"),
                |_| outcomes.borrow_mut().push("second err"),
            )
            .await
    };
    tokio::join!(first, second);

    assert_eq!(*outcomes.borrow(), ["second err", "first ok"]);
    assert_eq!(app.backend.requests_to("/api/devices").len(), 2);

    // The late success does not overwrite the newer trigger's status.
    let state = mutation.snapshot();
    assert_eq!(state.status, RequestStatus::Error);
    assert_eq!(state.error.as_deref(), Some("duplicate"));

    Ok(())
}
