use payloads::resource::LIVE_UPDATES_POLL_INTERVAL;
use payloads::{BookingId, ClubId, ResourceKey, UserId, responses};
use yew::prelude::*;

use super::{
    MutationHookReturn, ResourceHookReturn, use_mutation, use_polling_resource,
    use_resource,
};
use crate::get_api_client;

#[hook]
pub fn use_user_bookings(
    user_id: Option<UserId>,
) -> ResourceHookReturn<Vec<responses::Booking>> {
    let user_id = user_id.and_then(UserId::non_blank);
    let key = user_id.clone().map(ResourceKey::UserBookings);

    use_resource(user_id, key, |user_id| async move {
        get_api_client().get_user_bookings(&user_id).await
    })
}

/// Club bookings, refreshed on a fixed period for the live-updates screen.
#[hook]
pub fn use_live_bookings(
    club_id: Option<ClubId>,
) -> ResourceHookReturn<Vec<responses::Booking>> {
    let club_id = club_id.and_then(ClubId::non_blank);
    let key = club_id.clone().map(ResourceKey::ClubBookings);

    use_polling_resource(
        club_id,
        key,
        LIVE_UPDATES_POLL_INTERVAL,
        |club_id| async move {
            get_api_client().get_club_bookings(&club_id).await
        },
    )
}

#[hook]
pub fn use_cancel_booking(
    club_id: Option<ClubId>,
    user_id: Option<UserId>,
) -> MutationHookReturn<BookingId, ()> {
    let invalidates = club_id
        .map(ResourceKey::ClubBookings)
        .into_iter()
        .chain(user_id.map(ResourceKey::UserBookings))
        .collect();

    use_mutation(invalidates, |booking_id: BookingId| async move {
        get_api_client().cancel_booking(&booking_id).await
    })
}
