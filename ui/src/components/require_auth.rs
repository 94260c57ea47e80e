use yew::prelude::*;
use yew_router::prelude::*;

use crate::hooks::use_require_auth;
use crate::{AuthState, Route};

/// Component that only renders its children when the user is authenticated.
///
/// Children and their hooks are only mounted once a user is known, so
/// resource hooks never see a half-initialised session.
#[derive(Properties, PartialEq)]
pub struct RequireAuthProps {
    #[prop_or_default]
    pub children: Children,
}

#[function_component]
pub fn RequireAuth(props: &RequireAuthProps) -> Html {
    match use_require_auth() {
        AuthState::Unknown => html! {
            <div class="text-center py-8">
                <div class="inline-block animate-spin rounded-full h-8 w-8 border-2 border-neutral-900 dark:border-neutral-100 border-t-transparent dark:border-t-transparent"></div>
            </div>
        },
        AuthState::LoggedOut => html! { <Redirect<Route> to={Route::Login} /> },
        AuthState::LoggedIn(_) => html! { <>{for props.children.iter()}</> },
    }
}
