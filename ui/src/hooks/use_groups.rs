use payloads::{ClubId, ResourceKey, requests, responses};
use yew::prelude::*;

use super::{MutationHookReturn, ResourceHookReturn, use_mutation, use_resource};
use crate::get_api_client;

/// Groups the given phone number belongs to.
#[hook]
pub fn use_groups(
    phone_number: Option<String>,
) -> ResourceHookReturn<Vec<responses::Group>> {
    let phone_number = phone_number.filter(|p| !p.trim().is_empty());
    let key = phone_number.clone().map(ResourceKey::Groups);

    use_resource(phone_number, key, |phone_number| async move {
        get_api_client().get_groups(&phone_number).await
    })
}

/// Players registered at a club, for picking group members.
#[hook]
pub fn use_registered_players(
    club_id: Option<ClubId>,
) -> ResourceHookReturn<Vec<responses::RegisteredPlayer>> {
    let club_id = club_id.and_then(ClubId::non_blank);
    let key = club_id.clone().map(ResourceKey::ClubMembers);

    use_resource(club_id, key, |club_id| async move {
        get_api_client().get_registered_players(&club_id).await
    })
}

#[hook]
pub fn use_create_group(
    phone_number: Option<String>,
) -> MutationHookReturn<requests::CreateGroup, responses::Group> {
    let invalidates =
        phone_number.into_iter().map(ResourceKey::Groups).collect();

    use_mutation(invalidates, |details: requests::CreateGroup| async move {
        get_api_client().create_group(&details).await
    })
}
