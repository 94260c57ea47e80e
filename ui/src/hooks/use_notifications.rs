use payloads::{ResourceKey, UserId};
use yew::prelude::*;

use super::{MutationHookReturn, ResourceHookReturn, use_mutation, use_resource};
use crate::get_api_client;

#[hook]
pub fn use_unread_count(user_id: Option<UserId>) -> ResourceHookReturn<u64> {
    let user_id = user_id.and_then(UserId::non_blank);
    let key = user_id.clone().map(ResourceKey::Notifications);

    use_resource(user_id, key, |user_id| async move {
        get_api_client().get_unread_count(&user_id).await
    })
}

#[hook]
pub fn use_mark_notifications_read(
    user_id: Option<UserId>,
) -> MutationHookReturn<UserId, ()> {
    let invalidates =
        user_id.into_iter().map(ResourceKey::Notifications).collect();

    use_mutation(invalidates, |user_id: UserId| async move {
        get_api_client().mark_notifications_read(&user_id).await
    })
}
