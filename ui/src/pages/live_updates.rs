use payloads::resource::LIVE_UPDATES_POLL_INTERVAL;
use payloads::{CourtId, responses};
use std::collections::HashMap;
use yew::prelude::*;
use yewdux::prelude::*;

use crate::State;
use crate::hooks::{use_club_courts, use_live_bookings, use_title};
use crate::utils::time::format_booking_slot;

#[function_component]
pub fn LiveUpdatesPage() -> Html {
    use_title("Live");
    let state = use_store_value::<State>();
    let club_id = state.active_club_id();

    let bookings = use_live_bookings(club_id.clone());
    let courts = use_club_courts(club_id);

    let court_names: HashMap<CourtId, String> = courts
        .data
        .iter()
        .flatten()
        .map(|court| (court.id.clone(), court.title().to_string()))
        .collect();

    let on_refresh = {
        let refetch = bookings.refetch.clone();
        Callback::from(move |_: MouseEvent| refetch.emit(()))
    };

    let row = |booking: &responses::Booking| {
        let court = booking
            .court_id
            .as_ref()
            .and_then(|id| court_names.get(id))
            .map(String::as_str)
            .unwrap_or("Unknown Court");
        html! {
            <tr class="text-sm">
                <td class="py-2 pr-4">{court}</td>
                <td class="py-2 pr-4">{format_booking_slot(booking)}</td>
                <td class="py-2 pr-4">{booking.user_name.clone().unwrap_or_default()}</td>
                <td class="py-2 pr-4">{booking.status.clone().unwrap_or_default()}</td>
                <td class="py-2">
                    {if booking.activate_entry_mode { "Entry active" } else { "" }}
                </td>
            </tr>
        }
    };

    html! {
        <div class="space-y-4">
            <div class="flex justify-between items-center">
                <h1 class="text-2xl font-bold">{"Live court status"}</h1>
                <button onclick={on_refresh} disabled={bookings.is_loading()} class="text-sm underline disabled:opacity-50">
                    {"Refresh now"}
                </button>
            </div>
            <p class="text-xs text-neutral-500">
                {format!("Updates every {} seconds", LIVE_UPDATES_POLL_INTERVAL.as_secs())}
            </p>
            if bookings.data.is_none() && !bookings.is_loading() && bookings.error.is_none() {
                <p class="text-neutral-600 dark:text-neutral-400">{"No active club selected."}</p>
            }
            {bookings.render("bookings", |bookings, _, error| html! {
                <>
                    if let Some(error) = error {
                        <p class="text-sm text-red-700 dark:text-red-400">
                            {format!("Showing last known bookings: {error}")}
                        </p>
                    }
                    <table class="w-full text-left">
                        <thead>
                            <tr class="text-xs uppercase text-neutral-500">
                                <th>{"Court"}</th>
                                <th>{"Time"}</th>
                                <th>{"Player"}</th>
                                <th>{"Status"}</th>
                                <th></th>
                            </tr>
                        </thead>
                        <tbody>
                            {for bookings.iter().map(&row)}
                        </tbody>
                    </table>
                </>
            })}
        </div>
    }
}
