use payloads::{CourtId, DeviceType, requests, responses};
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;
use yewdux::prelude::*;

use crate::State;
use crate::components::MutationStatus;
use crate::hooks::{
    MutationCallbacks, use_add_device, use_club_courts, use_club_devices,
    use_delete_device, use_title,
};

fn parse_device_type(value: &str) -> Option<DeviceType> {
    match value {
        "CAMERA" => Some(DeviceType::Camera),
        "LIGHT" => Some(DeviceType::Light),
        "SWITCH" => Some(DeviceType::Switch),
        _ => None,
    }
}

#[function_component]
pub fn CourtsPage() -> Html {
    use_title("Courts");
    let state = use_store_value::<State>();
    let club_id = state.active_club_id();

    let courts = use_club_courts(club_id.clone());
    let devices = use_club_devices(club_id.clone());
    let add_device = use_add_device(club_id.clone());
    let delete_device = use_delete_device(club_id.clone());

    let name_ref = use_node_ref();
    let type_ref = use_node_ref();
    let court_ref = use_node_ref();

    let on_add = {
        let name_ref = name_ref.clone();
        let type_ref = type_ref.clone();
        let court_ref = court_ref.clone();
        let trigger = add_device.trigger.clone();
        let club_id = club_id.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let Some(club_id) = club_id.clone() else {
                return;
            };
            let Some(name_input) = name_ref.cast::<HtmlInputElement>() else {
                return;
            };
            let name = name_input.value().trim().to_string();
            let device_type = type_ref
                .cast::<HtmlSelectElement>()
                .and_then(|select| parse_device_type(&select.value()));
            let (false, Some(device_type)) = (name.is_empty(), device_type)
            else {
                return;
            };
            let court_id = court_ref
                .cast::<HtmlSelectElement>()
                .map(|select| select.value())
                .filter(|value| !value.is_empty())
                .map(CourtId::from);

            let on_success = Callback::from(move |_: responses::Device| {
                name_input.set_value("")
            });
            trigger.emit((
                requests::AddDevice {
                    name,
                    device_type,
                    status: "ACTIVE".into(),
                    club_id,
                    court_id,
                    control_endpoint: None,
                    metadata: None,
                },
                MutationCallbacks::default().on_success(on_success),
            ));
        })
    };

    if club_id.is_none() {
        return html! {
            <p class="text-neutral-600 dark:text-neutral-400">
                {"Select an active club in your profile to manage its courts."}
            </p>
        };
    }

    let court_options = courts
        .data
        .iter()
        .flatten()
        .map(|court| html! {
            <option value={court.id.to_string()}>{court.title()}</option>
        })
        .collect::<Html>();

    html! {
        <div class="space-y-8">
            <section class="space-y-2">
                <h1 class="text-2xl font-bold">{"Courts"}</h1>
                {courts.render("courts", |courts, _, error| html! {
                    <>
                        if let Some(error) = error {
                            <p class="text-sm text-red-700 dark:text-red-400">{error}</p>
                        }
                        <ul class="grid grid-cols-1 md:grid-cols-3 gap-4">
                            {for courts.iter().map(|court| html! {
                                <li class="p-4 rounded-lg border border-neutral-200 dark:border-neutral-700">
                                    <p class="font-medium">{court.title()}</p>
                                    if let Some(surface) = &court.surface {
                                        <p class="text-sm text-neutral-500">{surface}</p>
                                    }
                                </li>
                            })}
                        </ul>
                    </>
                })}
            </section>

            <section class="space-y-4">
                <h2 class="text-xl font-semibold">{"Devices"}</h2>
                <MutationStatus status={delete_device.status} error={delete_device.error.clone()} />
                {devices.render("devices", |devices, is_loading, _| html! {
                    <ul class="divide-y divide-neutral-200 dark:divide-neutral-700">
                        if is_loading {
                            <li class="text-xs text-neutral-500">{"Refreshing..."}</li>
                        }
                        {for devices.iter().map(|device| {
                            let onclick = {
                                let trigger = delete_device.trigger.clone();
                                let device_id = device.id.clone();
                                Callback::from(move |_: MouseEvent| {
                                    trigger.emit((device_id.clone(), Default::default()));
                                })
                            };
                            html! {
                                <li class="py-2 flex justify-between text-sm">
                                    <span>{format!("{} ({:?})", device.name, device.device_type)}</span>
                                    <button {onclick} class="underline">{"Remove"}</button>
                                </li>
                            }
                        })}
                    </ul>
                })}

                <form onsubmit={on_add} class="flex flex-wrap gap-2 items-center">
                    <input ref={name_ref} type="text" placeholder="Device name"
                        class="px-3 py-2 border rounded-md bg-white dark:bg-neutral-700" />
                    <select ref={type_ref} class="px-3 py-2 border rounded-md bg-white dark:bg-neutral-700">
                        <option value="CAMERA">{"Camera"}</option>
                        <option value="LIGHT">{"Light"}</option>
                        <option value="SWITCH">{"Switch"}</option>
                    </select>
                    <select ref={court_ref} class="px-3 py-2 border rounded-md bg-white dark:bg-neutral-700">
                        <option value="">{"Whole club"}</option>
                        {court_options}
                    </select>
                    <button type="submit" disabled={add_device.is_loading()}
                        class="bg-neutral-900 text-white dark:bg-neutral-100 dark:text-neutral-900 px-4 py-2 rounded-md text-sm disabled:opacity-50">
                        {"Add device"}
                    </button>
                </form>
                <MutationStatus
                    status={add_device.status}
                    error={add_device.error.clone()}
                    success_text="Device added"
                />
            </section>
        </div>
    }
}
