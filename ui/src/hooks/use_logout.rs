use crate::{Route, State, get_api_client};
use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::*;

#[hook]
pub fn use_logout() -> Callback<MouseEvent> {
    let dispatch = use_dispatch::<State>();
    let navigator = use_navigator();

    Callback::from(move |_| {
        get_api_client().logout();
        dispatch.reduce_mut(|state| state.logout());

        if let Some(navigator) = &navigator {
            navigator.push(&Route::Login);
        }
    })
}
