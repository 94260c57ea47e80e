use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::*;

use crate::hooks::use_logout;
use crate::{Route, State};

#[function_component]
pub fn Header() -> Html {
    let state = use_store_value::<State>();
    let logout = use_logout();

    let link_class = "text-sm font-medium text-gray-700 dark:text-gray-300 \
                      hover:text-gray-900 dark:hover:text-white";

    html! {
        <header class="bg-white dark:bg-gray-800 border-b border-gray-200 dark:border-gray-700">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex justify-between items-center h-16">
                    <div class="flex-shrink-0">
                        <Link<Route> to={Route::Home} classes="text-xl font-semibold text-gray-900 dark:text-white">
                            {"Courtside"}
                        </Link<Route>>
                    </div>
                    if let Some(user) = state.current_user() {
                        <nav class="flex items-center space-x-4">
                            <Link<Route> to={Route::Courts} classes={link_class}>{"Courts"}</Link<Route>>
                            <Link<Route> to={Route::LiveUpdates} classes={link_class}>{"Live"}</Link<Route>>
                            <Link<Route> to={Route::SentInvitations} classes={link_class}>{"Invites"}</Link<Route>>
                            <Link<Route> to={Route::CreateGroup} classes={link_class}>{"Groups"}</Link<Route>>
                            <span class="text-sm text-gray-500 dark:text-gray-400">{user.display_name()}</span>
                            <button onclick={logout} class={link_class}>{"Log out"}</button>
                        </nav>
                    }
                </div>
            </div>
        </header>
    }
}
