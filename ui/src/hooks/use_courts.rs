use payloads::{ClubId, ResourceKey, responses};
use yew::prelude::*;

use super::{ResourceHookReturn, use_resource};
use crate::get_api_client;

#[hook]
pub fn use_club_courts(
    club_id: Option<ClubId>,
) -> ResourceHookReturn<Vec<responses::Court>> {
    let club_id = club_id.and_then(ClubId::non_blank);
    let key = club_id.clone().map(ResourceKey::ClubCourts);

    use_resource(club_id, key, |club_id| async move {
        get_api_client().get_club_courts(&club_id).await
    })
}
