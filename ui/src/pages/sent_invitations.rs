use indexmap::IndexSet;
use payloads::invites::{
    FulfillmentFilter, GroupedInviteInfo, InviteFilters, SortOrder,
};
use payloads::requests;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;
use yewdux::prelude::*;

use crate::State;
use crate::components::MutationStatus;
use crate::hooks::{
    use_filtered_and_sorted_invites, use_grouped_invites, use_sent_invitations,
    use_title, use_withdraw_request,
};
use crate::utils::time::{parse_date_input, parse_time_input};

#[derive(Properties, PartialEq)]
struct GroupCardProps {
    group: GroupedInviteInfo,
    on_withdraw: Option<Callback<MouseEvent>>,
}

#[function_component]
fn GroupCard(props: &GroupCardProps) -> Html {
    let group = &props.group;
    let others = group.other_count();

    html! {
        <li class="p-4 rounded-lg border border-neutral-200 dark:border-neutral-700 space-y-1">
            <div class="flex justify-between">
                <p class="font-medium">
                    {group.event_name.clone().unwrap_or_else(|| group.place_to_play.clone())}
                </p>
                <span class={if group.is_fulfilled() { "text-green-700" } else { "text-amber-700" }}>
                    {if group.is_fulfilled() { "Fulfilled" } else { "Waiting" }}
                </span>
            </div>
            <p class="text-sm text-neutral-600 dark:text-neutral-400">
                {format!("{} at {}", group.date, group.place_to_play)}
            </p>
            <p class="text-sm">
                {format!("{} accepted, {} pending", group.accepted, group.pending)}
                if others > 0 {
                    {format!(", {others} declined or expired")}
                }
                if let Some(needed) = group.players_needed {
                    {format!(" ({needed} players needed)")}
                }
            </p>
            if let Some(rating) = group.skill_rating {
                <p class="text-xs text-neutral-500">{format!("Skill {rating:.1}")}</p>
            }
            <ul class="text-xs text-neutral-500">
                {for group.requests.iter().map(|invite| html! {
                    <li>
                        {format!(
                            "{}: {}",
                            invite.invitee_name.as_deref().unwrap_or("Unknown"),
                            invite.status.as_ref().map(|s| s.as_str()).unwrap_or("-"),
                        )}
                    </li>
                })}
            </ul>
            if let Some(onclick) = props.on_withdraw.clone() {
                <button {onclick} class="text-sm underline">{"Withdraw request"}</button>
            }
        </li>
    }
}

#[function_component]
pub fn SentInvitationsPage() -> Html {
    use_title("Sent invitations");
    let state = use_store_value::<State>();
    let email = state.email();
    let user_id = state.user_id();

    let invitations = use_sent_invitations(email.clone());
    let withdraw = use_withdraw_request(email);

    let filters = use_state(InviteFilters::default);
    let fulfillment = use_state(FulfillmentFilter::default);
    let order = use_state(SortOrder::default);

    let grouped =
        use_grouped_invites(invitations.data.clone(), (*filters).clone());
    let sorted = use_filtered_and_sorted_invites(grouped, *fulfillment, *order);

    let locations: IndexSet<String> = invitations
        .data
        .iter()
        .flatten()
        .map(|invite| invite.place_to_play.clone())
        .filter(|place| !place.is_empty())
        .collect();

    let on_date = {
        let filters = filters.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = (*filters).clone();
            next.date = parse_date_input(&input.value());
            filters.set(next);
        })
    };

    let on_time = {
        let filters = filters.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = (*filters).clone();
            next.time = parse_time_input(&input.value());
            filters.set(next);
        })
    };

    let on_location = {
        let filters = filters.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            let mut next = (*filters).clone();
            next.location = Some(select.value()).filter(|v| !v.is_empty());
            filters.set(next);
        })
    };

    let on_fulfillment = {
        let fulfillment = fulfillment.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            fulfillment.set(FulfillmentFilter::from(select.value().as_str()));
        })
    };

    let on_toggle_order = {
        let order = order.clone();
        Callback::from(move |_: MouseEvent| order.set(order.toggled()))
    };

    let on_clear = {
        let filters = filters.clone();
        let fulfillment = fulfillment.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = (*filters).clone();
            next.clear();
            filters.set(next);
            fulfillment.set(FulfillmentFilter::All);
        })
    };

    let withdraw_for = |group: &GroupedInviteInfo| {
        let request_id = group.request_id.clone()?;
        let user_id = user_id.clone()?;
        let trigger = withdraw.trigger.clone();
        Some(Callback::from(move |_: MouseEvent| {
            trigger.emit((
                requests::CancelInvite {
                    request_id: request_id.clone(),
                    user_id: user_id.clone(),
                    comments: "Withdrawn by requester".into(),
                },
                Default::default(),
            ));
        }))
    };

    html! {
        <div class="space-y-6">
            <h1 class="text-2xl font-bold">{"Invitations you sent"}</h1>

            <div class="flex flex-wrap gap-2 items-center text-sm">
                <input type="date" onchange={on_date} class="px-2 py-1 border rounded-md" />
                <input type="time" onchange={on_time} class="px-2 py-1 border rounded-md" />
                <select onchange={on_location} class="px-2 py-1 border rounded-md">
                    <option value="">{"Any location"}</option>
                    {for locations.iter().map(|place| html! {
                        <option value={place.clone()}
                            selected={filters.location.as_deref() == Some(place.as_str())}>
                            {place}
                        </option>
                    })}
                </select>
                <select onchange={on_fulfillment} class="px-2 py-1 border rounded-md">
                    <option value="ALL" selected={*fulfillment == FulfillmentFilter::All}>{"All"}</option>
                    <option value="FULFILLED" selected={*fulfillment == FulfillmentFilter::Fulfilled}>{"Fulfilled"}</option>
                    <option value="UNFULFILLED" selected={*fulfillment == FulfillmentFilter::Unfulfilled}>{"Unfulfilled"}</option>
                </select>
                <button onclick={on_toggle_order} class="underline">
                    {match *order {
                        SortOrder::Ascending => "Soonest first",
                        SortOrder::Descending => "Latest first",
                    }}
                </button>
                if !filters.is_empty() || *fulfillment != FulfillmentFilter::All {
                    <button onclick={on_clear} class="underline">{"Clear filters"}</button>
                }
            </div>

            <MutationStatus
                status={withdraw.status}
                error={withdraw.error.clone()}
                success_text="Request withdrawn"
            />

            {invitations.render("invitations", |_, is_loading, error| html! {
                <>
                    if is_loading {
                        <span class="text-xs text-neutral-500">{"Refreshing..."}</span>
                    }
                    if let Some(error) = error {
                        <p class="text-sm text-red-700 dark:text-red-400">{error}</p>
                    }
                    if sorted.is_empty() {
                        <p class="text-neutral-600 dark:text-neutral-400">{"No invitations match."}</p>
                    }
                    <ul class="space-y-3">
                        {for sorted.values().map(|group| html! {
                            <GroupCard group={group.clone()} on_withdraw={withdraw_for(group)} />
                        })}
                    </ul>
                </>
            })}
        </div>
    }
}
