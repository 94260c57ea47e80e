use payloads::{ResourceKey, requests, responses};
use yew::prelude::*;

use super::{MutationHookReturn, use_mutation};
use crate::get_api_client;

/// Log in, storing the token; the current user is reloaded on success.
#[hook]
pub fn use_login()
-> MutationHookReturn<requests::LoginCredentials, responses::LoginResponse> {
    use_mutation(
        vec![ResourceKey::CurrentUser],
        |credentials: requests::LoginCredentials| async move {
            get_api_client().login(&credentials).await
        },
    )
}
