//! Bearer token ownership.
//!
//! The token provider is the only owner of the credential; each request
//! borrows a fresh copy for the duration of one call.

use secrecy::{ExposeSecret, SecretString};
use std::sync::Mutex;

/// Key under which persistent stores keep the token.
pub const TOKEN_STORAGE_KEY: &str = "courtsideAuthToken";

/// An opaque bearer credential.
#[derive(Debug)]
pub struct Token(SecretString);

impl Token {
    pub fn new(value: impl Into<String>) -> Self {
        Self(SecretString::from(value.into()))
    }

    pub fn expose(&self) -> &str {
        self.0.expose_secret()
    }

    pub(crate) fn bearer(&self) -> String {
        format!("Bearer {}", self.expose())
    }
}

/// Storage for the current user's token.
///
/// Implementations swallow their own storage failures (logging them) and
/// report "no token" instead.
pub trait TokenStore {
    fn get_token(&self) -> Option<Token>;
    fn store_token(&self, token: Token);
    fn remove_token(&self);
}

/// Process-local token storage, used natively and in tests.
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    token: Mutex<Option<SecretString>>,
}

impl MemoryTokenStore {
    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            token: Mutex::new(Some(SecretString::from(token.into()))),
        }
    }
}

impl TokenStore for MemoryTokenStore {
    fn get_token(&self) -> Option<Token> {
        match self.token.lock() {
            Ok(guard) => guard
                .as_ref()
                .map(|secret| Token::new(secret.expose_secret())),
            Err(e) => {
                tracing::error!("Failed to fetch token: {e}");
                None
            }
        }
    }

    fn store_token(&self, token: Token) {
        match self.token.lock() {
            Ok(mut guard) => *guard = Some(token.0),
            Err(e) => tracing::error!("Failed to save token: {e}"),
        }
    }

    fn remove_token(&self) {
        match self.token.lock() {
            Ok(mut guard) => *guard = None,
            Err(e) => tracing::error!("Failed to remove token: {e}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_store_lifecycle() {
        let store = MemoryTokenStore::default();
        assert!(store.get_token().is_none());

        store.store_token(Token::new("abc"));
        assert_eq!(store.get_token().unwrap().expose(), "abc");
        assert_eq!(store.get_token().unwrap().bearer(), "Bearer abc");

        store.remove_token();
        assert!(store.get_token().is_none());
    }

    #[test]
    fn token_is_redacted_in_debug_output() {
        let token = Token::new("super-secret");
        assert!(!format!("{token:?}").contains("super-secret"));
    }
}
