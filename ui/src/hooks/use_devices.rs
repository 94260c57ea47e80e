use payloads::{ClubId, DeviceId, ResourceKey, requests, responses};
use yew::prelude::*;

use super::{MutationHookReturn, ResourceHookReturn, use_mutation, use_resource};
use crate::get_api_client;

#[hook]
pub fn use_club_devices(
    club_id: Option<ClubId>,
) -> ResourceHookReturn<Vec<responses::Device>> {
    let club_id = club_id.and_then(ClubId::non_blank);
    let key = club_id.clone().map(ResourceKey::ClubDevices);

    use_resource(club_id, key, |club_id| async move {
        get_api_client().get_club_devices(&club_id).await
    })
}

/// Register a device; the club's device list refreshes on success.
#[hook]
pub fn use_add_device(
    club_id: Option<ClubId>,
) -> MutationHookReturn<requests::AddDevice, responses::Device> {
    let invalidates =
        club_id.into_iter().map(ResourceKey::ClubDevices).collect();

    use_mutation(invalidates, |details: requests::AddDevice| async move {
        get_api_client().add_device(&details).await
    })
}

#[hook]
pub fn use_delete_device(
    club_id: Option<ClubId>,
) -> MutationHookReturn<DeviceId, ()> {
    let invalidates =
        club_id.into_iter().map(ResourceKey::ClubDevices).collect();

    use_mutation(invalidates, |device_id: DeviceId| async move {
        get_api_client().delete_device(&device_id).await
    })
}
