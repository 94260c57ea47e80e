use indexmap::IndexSet;
use payloads::contacts::{Contact, dedupe_contacts, simplify_contacts};
use payloads::{requests, responses};
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;
use yewdux::prelude::*;

use crate::State;
use crate::components::MutationStatus;
use crate::hooks::{
    MutationCallbacks, use_create_group, use_groups, use_registered_players,
    use_title,
};

fn player_contacts(players: &[responses::RegisteredPlayer]) -> Vec<Contact> {
    players
        .iter()
        .map(|player| Contact {
            contact_name: player.name.clone(),
            contact_phone_number: player.phone_number.clone(),
        })
        .collect()
}

/// Parse a pasted address-book export (a JSON array of entries).
fn parse_contacts(text: &str) -> Result<Vec<Contact>, String> {
    if text.trim().is_empty() {
        return Ok(Vec::new());
    }
    let raw: Vec<serde_json::Value> = serde_json::from_str(text)
        .map_err(|e| format!("Could not read contacts: {e}"))?;
    Ok(simplify_contacts(&raw))
}

fn to_member(
    contact: &Contact,
    players: &[responses::RegisteredPlayer],
) -> requests::GroupMember {
    let user_id = players
        .iter()
        .find(|p| p.phone_number == contact.contact_phone_number)
        .and_then(|p| p.user_id.clone());
    requests::GroupMember {
        name: contact.contact_name.clone(),
        user_id,
        phone_number: contact.contact_phone_number.clone(),
        admin: false,
    }
}

#[function_component]
pub fn CreateGroupPage() -> Html {
    use_title("New group");
    let state = use_store_value::<State>();
    let phone_number = state.phone_number();

    let groups = use_groups(phone_number.clone());
    let players = use_registered_players(state.active_club_id());
    let create_group = use_create_group(phone_number);

    let imported = use_state(Vec::<Contact>::new);
    let import_error = use_state(|| None::<String>);
    let selected = use_state(IndexSet::<Contact>::new);
    let name_ref = use_node_ref();
    let contacts_ref = use_node_ref();

    let known_players = players.data.clone().unwrap_or_default();
    let candidates = dedupe_contacts(
        player_contacts(&known_players)
            .into_iter()
            .chain(imported.iter().cloned()),
    );

    let on_import = {
        let contacts_ref = contacts_ref.clone();
        let imported = imported.clone();
        let import_error = import_error.clone();
        Callback::from(move |_: MouseEvent| {
            let Some(textarea) = contacts_ref.cast::<HtmlTextAreaElement>()
            else {
                return;
            };
            match parse_contacts(&textarea.value()) {
                Ok(contacts) => {
                    tracing::debug!("imported {} contacts", contacts.len());
                    imported.set(contacts);
                    import_error.set(None);
                }
                Err(e) => import_error.set(Some(e)),
            }
        })
    };

    let toggle = |contact: Contact| {
        let selected = selected.clone();
        Callback::from(move |_: Event| {
            let mut next = (*selected).clone();
            if !next.shift_remove(&contact) {
                next.insert(contact.clone());
            }
            selected.set(next);
        })
    };

    let on_submit = {
        let name_ref = name_ref.clone();
        let selected = selected.clone();
        let trigger = create_group.trigger.clone();
        let creator = state.user_id();
        let known_players = known_players.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let Some(creator_user_id) = creator.clone() else {
                return;
            };
            let Some(name_input) = name_ref.cast::<HtmlInputElement>() else {
                return;
            };
            let name = name_input.value().trim().to_string();
            if name.is_empty() || selected.is_empty() {
                return;
            }

            let members = selected
                .iter()
                .map(|contact| to_member(contact, &known_players))
                .collect();
            let selected = selected.clone();
            let on_success = Callback::from(move |group: responses::Group| {
                tracing::info!("created group {}", group.id);
                name_input.set_value("");
                selected.set(IndexSet::new());
            });
            trigger.emit((
                requests::CreateGroup {
                    name,
                    creator_user_id,
                    members,
                },
                MutationCallbacks::default().on_success(on_success),
            ));
        })
    };

    html! {
        <div class="space-y-8">
            <h1 class="text-2xl font-bold">{"Groups"}</h1>

            <section class="space-y-2">
                <h2 class="text-lg font-semibold">{"Your groups"}</h2>
                {groups.render("groups", |groups, _, _| html! {
                    if groups.is_empty() {
                        <p class="text-neutral-600 dark:text-neutral-400">{"You are not in any groups yet."}</p>
                    } else {
                        <ul class="space-y-1">
                            {for groups.iter().map(|group| html! {
                                <li key={group.id.to_string()}>
                                    {format!("{} ({} members)", group.name, group.members.len())}
                                </li>
                            })}
                        </ul>
                    }
                })}
            </section>

            <form onsubmit={on_submit} class="space-y-4">
                <h2 class="text-lg font-semibold">{"New group"}</h2>
                <input
                    ref={name_ref}
                    type="text"
                    placeholder="Group name"
                    class="w-full px-3 py-2 border rounded-md"
                />

                <div class="space-y-2">
                    <textarea
                        ref={contacts_ref}
                        rows="4"
                        placeholder="Paste exported contacts (JSON)"
                        class="w-full px-3 py-2 border rounded-md font-mono text-xs"
                    />
                    <button type="button" onclick={on_import} class="text-sm underline">
                        {"Import contacts"}
                    </button>
                    if let Some(error) = (*import_error).clone() {
                        <p class="text-sm text-red-700 dark:text-red-400">{error}</p>
                    }
                </div>

                if players.is_initial_loading() {
                    <p class="text-sm text-neutral-500">{"Loading players..."}</p>
                }
                <ul class="space-y-1 max-h-80 overflow-y-auto">
                    {for candidates.into_iter().map(|contact| {
                        let checked = selected.contains(&contact);
                        let label = format!(
                            "{} {}",
                            contact.contact_name, contact.contact_phone_number
                        );
                        html! {
                            <li key={label.clone()}>
                                <label class="flex gap-2 items-center text-sm">
                                    <input type="checkbox" {checked} onchange={toggle(contact)} />
                                    {label}
                                </label>
                            </li>
                        }
                    })}
                </ul>

                <MutationStatus
                    status={create_group.status}
                    error={create_group.error.clone()}
                    success_text="Group created"
                />
                <button
                    type="submit"
                    disabled={create_group.is_loading()}
                    class="px-4 py-2 rounded-md bg-neutral-900 text-white dark:bg-neutral-100 dark:text-neutral-900"
                >
                    {format!("Create group ({} selected)", selected.len())}
                </button>
            </form>
        </div>
    }
}
