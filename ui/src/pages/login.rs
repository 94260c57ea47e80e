use payloads::requests;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::*;

use crate::Route;
use crate::components::MutationStatus;
use crate::hooks::{MutationCallbacks, use_login, use_title};
use crate::state::State;
use crate::utils::is_dev_mode;

#[function_component]
pub fn LoginPage() -> Html {
    use_title("Sign in");
    let navigator = use_navigator();
    let state = use_store_value::<State>();
    let login = use_login();

    let username_ref = use_node_ref();
    let password_ref = use_node_ref();
    let validation_error = use_state(|| None::<String>);

    // Redirect to home once the user is known
    {
        let navigator = navigator.clone();
        use_effect_with(state.is_authenticated(), move |is_auth| {
            if *is_auth && let Some(navigator) = navigator {
                navigator.push(&Route::Home);
            }
        });
    }

    let on_submit = {
        let username_ref = username_ref.clone();
        let password_ref = password_ref.clone();
        let validation_error = validation_error.clone();
        let trigger = login.trigger.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let value = |node: &NodeRef| {
                node.cast::<HtmlInputElement>()
                    .map(|input| input.value())
                    .unwrap_or_default()
            };
            let username = value(&username_ref).trim().to_string();
            let password = value(&password_ref);

            if username.is_empty() || password.is_empty() {
                validation_error.set(Some(
                    "Please enter both username and password".to_string(),
                ));
                return;
            }
            validation_error.set(None);

            let on_error = {
                let password_ref = password_ref.clone();
                Callback::from(move |_: String| {
                    if let Some(input) =
                        password_ref.cast::<HtmlInputElement>()
                    {
                        input.set_value("");
                    }
                })
            };
            trigger.emit((
                requests::LoginCredentials { username, password },
                MutationCallbacks::default().on_error(on_error),
            ));
        })
    };

    html! {
        <div class="flex items-center justify-center min-h-[60vh]">
            <div class="max-w-md w-full bg-white dark:bg-neutral-800 p-8 rounded-lg shadow-md space-y-4">
                <h1 class="text-2xl font-bold text-neutral-900 dark:text-neutral-100">
                    {"Sign in to Courtside"}
                </h1>
                <form onsubmit={on_submit} class="space-y-4">
                    <input
                        ref={username_ref}
                        type="text"
                        placeholder="Email or username"
                        autocomplete="username"
                        class="w-full px-3 py-2 border border-neutral-300 dark:border-neutral-600 rounded-md bg-white dark:bg-neutral-700"
                    />
                    <input
                        ref={password_ref}
                        type="password"
                        placeholder="Password"
                        autocomplete="current-password"
                        class="w-full px-3 py-2 border border-neutral-300 dark:border-neutral-600 rounded-md bg-white dark:bg-neutral-700"
                    />
                    if let Some(error) = &*validation_error {
                        <p class="text-sm text-red-700 dark:text-red-400">{error}</p>
                    }
                    <MutationStatus status={login.status} error={login.error.clone()} />
                    <button
                        type="submit"
                        disabled={login.is_loading()}
                        class="w-full bg-neutral-900 hover:bg-neutral-800 dark:bg-neutral-100 dark:text-neutral-900 text-white px-4 py-2 rounded-md text-sm font-medium disabled:opacity-50"
                    >
                        {if login.is_loading() { "Signing in..." } else { "Sign in" }}
                    </button>
                </form>
                if is_dev_mode() {
                    <p class="text-xs text-neutral-500">
                        {format!("Backend: {}", crate::get_api_client().address)}
                    </p>
                }
            </div>
        </div>
    }
}
