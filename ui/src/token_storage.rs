//! Token persistence in the browser's local storage.

use payloads::{TOKEN_STORAGE_KEY, Token, TokenStore};
use web_sys::Storage;

/// Keeps the bearer token in `window.localStorage`. Storage failures are
/// logged and treated as "no token".
#[derive(Debug, Default, Clone, Copy)]
pub struct LocalStorageTokenStore;

impl LocalStorageTokenStore {
    fn storage() -> Option<Storage> {
        match web_sys::window()?.local_storage() {
            Ok(storage) => storage,
            Err(e) => {
                tracing::error!("Local storage unavailable: {e:?}");
                None
            }
        }
    }
}

impl TokenStore for LocalStorageTokenStore {
    fn get_token(&self) -> Option<Token> {
        match Self::storage()?.get_item(TOKEN_STORAGE_KEY) {
            Ok(token) => token.filter(|t| !t.is_empty()).map(Token::new),
            Err(e) => {
                tracing::error!("Failed to fetch token: {e:?}");
                None
            }
        }
    }

    fn store_token(&self, token: Token) {
        let Some(storage) = Self::storage() else {
            return;
        };
        if let Err(e) = storage.set_item(TOKEN_STORAGE_KEY, token.expose()) {
            tracing::error!("Failed to save token: {e:?}");
        }
    }

    fn remove_token(&self) {
        let Some(storage) = Self::storage() else {
            return;
        };
        if let Err(e) = storage.remove_item(TOKEN_STORAGE_KEY) {
            tracing::error!("Failed to remove token: {e:?}");
        }
    }
}
