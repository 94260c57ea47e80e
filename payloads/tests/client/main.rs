mod auth;
mod errors;
mod invites;
mod mutations;
mod resources;

use test_helpers::{assert_status_code, spawn_logged_in_app};

#[tokio::test]
async fn unmocked_routes_are_not_found() -> anyhow::Result<()> {
    let app = spawn_logged_in_app().await;

    let result = app.client.current_user().await;
    assert_status_code(result, reqwest::StatusCode::NOT_FOUND);

    Ok(())
}
