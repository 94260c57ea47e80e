use payloads::invites::{
    FulfillmentFilter, GroupedInvites, InviteFilters, SortOrder,
    filter_and_sort_invites, filter_invitations, group_invites_by_request_id,
};
use payloads::{ResourceKey, requests, responses};
use std::rc::Rc;
use yew::prelude::*;

use super::{MutationHookReturn, ResourceHookReturn, use_mutation, use_resource};
use crate::get_api_client;
use crate::utils::time::local_time_zone;

/// Invitations sent on behalf of the user with this email.
#[hook]
pub fn use_sent_invitations(
    email: Option<String>,
) -> ResourceHookReturn<Vec<responses::Invite>> {
    let email = email.filter(|e| !e.trim().is_empty());
    let key = email.clone().map(ResourceKey::SentInvitations);

    use_resource(email, key, |email| async move {
        get_api_client().get_invitations_sent(&email).await
    })
}

/// Withdraw a whole player-finder request.
#[hook]
pub fn use_withdraw_request(
    email: Option<String>,
) -> MutationHookReturn<requests::CancelInvite, ()> {
    let invalidates =
        email.into_iter().map(ResourceKey::SentInvitations).collect();

    use_mutation(invalidates, |details: requests::CancelInvite| async move {
        get_api_client().withdraw_request(&details).await
    })
}

/// Filter raw invites, then group them by request in the local time zone.
/// Recomputed only when an input changes.
#[hook]
pub fn use_grouped_invites(
    invites: Option<Vec<responses::Invite>>,
    filters: InviteFilters,
) -> Rc<GroupedInvites> {
    use_memo((invites, filters), |(invites, filters)| {
        let invites = invites
            .as_deref()
            .map(|invites| filter_invitations(invites, filters));
        group_invites_by_request_id(invites.as_deref(), &local_time_zone())
    })
}

#[hook]
pub fn use_filtered_and_sorted_invites(
    grouped: Rc<GroupedInvites>,
    filter: FulfillmentFilter,
    order: SortOrder,
) -> Rc<GroupedInvites> {
    use_memo((grouped, filter, order), |(grouped, filter, order)| {
        filter_and_sort_invites(grouped, *filter, *order)
    })
}
