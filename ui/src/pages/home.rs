use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::*;

use crate::components::MutationStatus;
use crate::hooks::{
    use_cancel_booking, use_mark_notifications_read, use_title,
    use_unread_count, use_user_bookings,
};
use crate::utils::time::format_booking_slot;
use crate::{Route, State};

#[function_component]
pub fn HomePage() -> Html {
    use_title("Home");
    let state = use_store_value::<State>();
    let user_id = state.user_id();
    let club_id = state.active_club_id();

    let unread = use_unread_count(user_id.clone());
    let mark_read = use_mark_notifications_read(user_id.clone());
    let bookings = use_user_bookings(user_id.clone());
    let cancel_booking = use_cancel_booking(club_id.clone(), user_id.clone());

    let on_mark_read = {
        let trigger = mark_read.trigger.clone();
        let user_id = user_id.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some(user_id) = user_id.clone() {
                trigger.emit((user_id, Default::default()));
            }
        })
    };

    let name = state
        .current_user()
        .map(|user| user.display_name())
        .unwrap_or_default();

    html! {
        <div class="space-y-8">
            <h1 class="text-3xl font-bold text-neutral-900 dark:text-neutral-100">
                {format!("Welcome back, {name}!")}
            </h1>

            <section class="bg-white dark:bg-neutral-800 p-6 rounded-lg shadow-md border border-neutral-200 dark:border-neutral-700 space-y-2">
                <h2 class="text-xl font-semibold">{"Notifications"}</h2>
                {unread.render("notifications", |count, _, _| html! {
                    <p class="text-sm text-neutral-600 dark:text-neutral-400">
                        {format!("{count} unread")}
                    </p>
                })}
                <button
                    onclick={on_mark_read}
                    disabled={mark_read.is_loading() || unread.data == Some(0)}
                    class="text-sm underline disabled:opacity-50"
                >
                    {"Mark all as read"}
                </button>
                <MutationStatus status={mark_read.status} error={mark_read.error.clone()} />
            </section>

            <section class="bg-white dark:bg-neutral-800 p-6 rounded-lg shadow-md border border-neutral-200 dark:border-neutral-700 space-y-2">
                <h2 class="text-xl font-semibold">{"Your bookings"}</h2>
                <MutationStatus
                    status={cancel_booking.status}
                    error={cancel_booking.error.clone()}
                    success_text="Booking cancelled"
                />
                {bookings.render("bookings", |bookings, is_loading, error| html! {
                    <div class="space-y-2">
                        if is_loading {
                            <span class="text-xs text-neutral-500">{"Refreshing..."}</span>
                        }
                        if let Some(error) = error {
                            <p class="text-sm text-red-700 dark:text-red-400">{error}</p>
                        }
                        if bookings.is_empty() {
                            <p class="text-sm text-neutral-600 dark:text-neutral-400">{"No bookings yet"}</p>
                        }
                        <ul class="divide-y divide-neutral-200 dark:divide-neutral-700">
                            {for bookings.iter().map(|booking| {
                                let onclick = {
                                    let trigger = cancel_booking.trigger.clone();
                                    let booking_id = booking.id.clone();
                                    Callback::from(move |_: MouseEvent| {
                                        trigger.emit((booking_id.clone(), Default::default()));
                                    })
                                };
                                html! {
                                    <li class="py-2 flex justify-between items-center text-sm">
                                        <span>
                                            {booking.date.date().map(|d| d.to_string()).unwrap_or_default()}
                                            {" "}
                                            {format_booking_slot(booking)}
                                        </span>
                                        <button {onclick} class="underline">{"Cancel"}</button>
                                    </li>
                                }
                            })}
                        </ul>
                    </div>
                })}
            </section>

            <nav class="grid grid-cols-1 md:grid-cols-2 gap-4">
                <Link<Route> to={Route::Courts} classes="p-4 rounded-lg border">{"Courts and devices"}</Link<Route>>
                <Link<Route> to={Route::LiveUpdates} classes="p-4 rounded-lg border">{"Live court status"}</Link<Route>>
                <Link<Route> to={Route::SentInvitations} classes="p-4 rounded-lg border">{"Invitations you sent"}</Link<Route>>
                <Link<Route> to={Route::CreateGroup} classes="p-4 rounded-lg border">{"Create a group"}</Link<Route>>
            </nav>
        </div>
    }
}
