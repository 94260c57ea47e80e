use payloads::ResourceKey;
use yew::prelude::*;
use yewdux::prelude::*;

use crate::{AuthState, State, get_api_client};

/// Resolve the stored token into a user on startup, and again whenever the
/// current user is invalidated (for example after logging in).
#[hook]
pub fn use_authentication() {
    let (state, dispatch) = use_store::<State>();
    let version = state.version(&ResourceKey::CurrentUser);

    use_effect_with(version, move |_| {
        let api_client = get_api_client();
        if !api_client.is_logged_in() {
            dispatch.reduce_mut(|state| state.logout());
            return;
        }

        yew::platform::spawn_local(async move {
            match api_client.current_user().await {
                Ok(user) => {
                    tracing::debug!("logged in as {}", user.id);
                    dispatch.reduce_mut(|state| {
                        state.auth_state = AuthState::LoggedIn(user);
                    });
                }
                Err(e) => {
                    // Stale or revoked token
                    tracing::warn!("could not load current user: {e}");
                    api_client.logout();
                    dispatch.reduce_mut(|state| state.logout());
                }
            }
        });
    });
}

/// The current authentication state, for gating authenticated screens.
#[hook]
pub fn use_require_auth() -> AuthState {
    let state = use_store_value::<State>();
    state.auth_state.clone()
}
