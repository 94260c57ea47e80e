use jiff::tz::TimeZone;
use payloads::invites::{
    FulfillmentFilter, InviteFilters, SortOrder, filter_and_sort_invites,
    filter_invitations, group_invites_by_request_id,
};
use payloads::{ClientError, RequestId};
use serde_json::json;
use test_helpers::mock::MockResponse;
use test_helpers::spawn_logged_in_app;

const SENT_PATH: &str = "/api/player-tracker/tracker/invitee";

#[tokio::test]
async fn sent_invitations_group_and_sort() -> anyhow::Result<()> {
    let app = spawn_logged_in_app().await;
    app.mock(
        "GET",
        SENT_PATH,
        MockResponse::json(json!([
            {"requestId": "r1", "placeToPlay": "CourtA",
             "playTime": [2024, 5, 10, 14, 30], "status": "PENDING",
             "skillRating": 4.0, "playersNeeded": 2},
            {"requestId": "r2", "placeToPlay": "CourtB",
             "playTime": [2024, 5, 9, 8, 0], "status": "ACCEPTED"},
            {"requestId": "r1", "placeToPlay": "CourtA",
             "playTime": [2024, 5, 10, 14, 30], "status": "ACCEPTED"},
            {"requestId": "r1", "placeToPlay": "CourtA",
             "playTime": [2024, 5, 10, 14, 30], "status": "DECLINED"}
        ])),
    );

    let invites = app.client.get_invitations_sent("asha@example.com").await?;
    let sent = app.backend.requests_to(SENT_PATH);
    assert_eq!(sent[0].query, "inviteeEmail=asha%40example.com");

    let at_court_a = filter_invitations(
        &invites,
        &InviteFilters {
            location: Some("CourtA".into()),
            ..Default::default()
        },
    );
    assert_eq!(at_court_a.len(), 3);

    let groups =
        group_invites_by_request_id(Some(invites.as_slice()), &TimeZone::UTC);
    let r1 = groups.values().next().unwrap();
    assert_eq!((r1.pending, r1.accepted, r1.requests.len()), (1, 1, 3));
    assert_eq!(r1.date, "Fri, May 10, 2:30 PM");

    let open = filter_and_sort_invites(
        &groups,
        FulfillmentFilter::Unfulfilled,
        SortOrder::Ascending,
    );
    assert_eq!(open.len(), 1);

    let by_time = filter_and_sort_invites(
        &groups,
        FulfillmentFilter::All,
        SortOrder::Ascending,
    );
    let order: Vec<_> = by_time
        .values()
        .map(|g| g.place_to_play.as_str())
        .collect();
    assert_eq!(order, ["CourtB", "CourtA"]);

    Ok(())
}

#[tokio::test]
async fn null_play_time_does_not_fail_the_list() -> anyhow::Result<()> {
    let app = spawn_logged_in_app().await;
    app.mock(
        "GET",
        SENT_PATH,
        MockResponse::json(json!([
            {"requestId": "r1", "placeToPlay": "CourtA",
             "playTime": [2024, 5, 10, 14, 30], "status": "PENDING"},
            {"requestId": "r2", "placeToPlay": "CourtB",
             "playTime": null, "status": "PENDING"}
        ])),
    );

    let result = app.client.get_invitations_sent("asha@example.com").await;
    assert!(!matches!(result, Err(ClientError::InvalidFormat(_))));
    let invites = result?;
    assert_eq!(invites.len(), 2);

    let groups =
        group_invites_by_request_id(Some(invites.as_slice()), &TimeZone::UTC);
    let r2 = &groups[&Some(RequestId::from("r2"))];
    assert_eq!(r2.date, "");
    assert_eq!(r2.date_time_ms, 0);
    assert_eq!(r2.pending, 1);

    Ok(())
}
