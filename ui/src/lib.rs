use payloads::APIClient;
use payloads::config::ClientConfig;
use std::sync::Arc;
use yew::prelude::*;
use yew_router::prelude::*;

mod components;
mod hooks;
mod logs;
mod pages;
mod state;
mod token_storage;
mod utils;

use components::{Header, RequireAuth};
use hooks::use_authentication;
use pages::{
    CourtsPage, CreateGroupPage, HomePage, LiveUpdatesPage, LoginPage,
    NotFoundPage, SentInvitationsPage,
};
pub use state::{AuthState, State};
use token_storage::LocalStorageTokenStore;

// Global API client - configurable via environment or same-origin fallback
pub fn get_api_client() -> APIClient {
    // Try environment variable first (set at build time)
    let address = option_env!("BACKEND_URL")
        .map(|url| url.to_string())
        .or_else(|| web_sys::window()?.location().origin().ok())
        .unwrap_or_default();

    APIClient::new(
        &ClientConfig::new(address),
        Arc::new(LocalStorageTokenStore),
    )
}

#[function_component]
pub fn App() -> Html {
    logs::init_logging();
    html! {
        <BrowserRouter>
            <AppShell />
        </BrowserRouter>
    }
}

#[function_component]
fn AppShell() -> Html {
    use_authentication();

    html! {
        <div class="min-h-screen bg-white dark:bg-gray-900 text-gray-900 dark:text-gray-100 transition-colors">
            <Header />
            <main class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-8">
                <Switch<Route> render={switch} />
            </main>
        </div>
    }
}

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/login")]
    Login,
    #[at("/courts")]
    Courts,
    #[at("/live")]
    LiveUpdates,
    #[at("/invitations/sent")]
    SentInvitations,
    #[at("/groups/new")]
    CreateGroup,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => html! { <RequireAuth><HomePage /></RequireAuth> },
        Route::Login => html! { <LoginPage /> },
        Route::Courts => html! { <RequireAuth><CourtsPage /></RequireAuth> },
        Route::LiveUpdates => {
            html! { <RequireAuth><LiveUpdatesPage /></RequireAuth> }
        }
        Route::SentInvitations => {
            html! { <RequireAuth><SentInvitationsPage /></RequireAuth> }
        }
        Route::CreateGroup => {
            html! { <RequireAuth><CreateGroupPage /></RequireAuth> }
        }
        Route::NotFound => html! { <NotFoundPage /> },
    }
}
