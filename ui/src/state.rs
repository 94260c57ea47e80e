use payloads::{ClubId, InvalidationLedger, ResourceKey, UserId, responses};
use yewdux::prelude::*;

#[derive(Clone, PartialEq, Default)]
pub enum AuthState {
    #[default]
    Unknown,
    LoggedOut,
    LoggedIn(responses::User),
}

#[derive(Default, Clone, PartialEq, Store)]
pub struct State {
    pub error_message: Option<String>,

    // === Authentication (managed by use_authentication) ===
    pub auth_state: AuthState,

    // === Resource versions, bumped by mutations (see use_mutation) ===
    pub invalidations: InvalidationLedger,
}

impl State {
    pub fn is_authenticated(&self) -> bool {
        matches!(self.auth_state, AuthState::LoggedIn(_))
    }

    pub fn current_user(&self) -> Option<&responses::User> {
        match &self.auth_state {
            AuthState::LoggedIn(user) => Some(user),
            _ => None,
        }
    }

    pub fn user_id(&self) -> Option<UserId> {
        self.current_user().map(|user| user.id.clone())
    }

    pub fn active_club_id(&self) -> Option<ClubId> {
        self.current_user()?
            .current_active_club_id
            .clone()
            .and_then(ClubId::non_blank)
    }

    pub fn phone_number(&self) -> Option<String> {
        self.current_user()?
            .phone_number
            .clone()
            .filter(|phone| !phone.trim().is_empty())
    }

    pub fn email(&self) -> Option<String> {
        self.current_user()?
            .email
            .clone()
            .filter(|email| !email.trim().is_empty())
    }

    pub fn version(&self, key: &ResourceKey) -> u64 {
        self.invalidations.version(key)
    }

    pub fn logout(&mut self) {
        self.auth_state = AuthState::LoggedOut;
        self.invalidations = InvalidationLedger::default();
    }
}
