pub mod api_client;
pub mod config;
pub mod contacts;
pub mod invalidation;
pub mod invites;
pub mod requests;
pub mod resource;
pub mod responses;
pub mod time;
pub mod token_store;

pub use api_client::{APIClient, ClientError};
pub use invalidation::{InvalidationLedger, ResourceKey};
pub use resource::{MutationState, RequestStatus, ResourceState};
pub use time::PlayTime;
pub use token_store::{MemoryTokenStore, TOKEN_STORAGE_KEY, Token, TokenStore};

use serde::{Deserialize, Serialize};

/// Declares a string identifier newtype as issued by the backend.
macro_rules! string_id {
    ($($(#[$meta:meta])* $name:ident),* $(,)?) => {
        $(
            $(#[$meta])*
            #[derive(
                Debug,
                Clone,
                PartialEq,
                Eq,
                Hash,
                PartialOrd,
                Ord,
                Serialize,
                Deserialize,
                derive_more::Display,
            )]
            #[serde(transparent)]
            pub struct $name(pub String);

            impl $name {
                /// Returns `None` for ids that are empty or whitespace,
                /// which hooks treat the same as a missing parameter.
                pub fn non_blank(self) -> Option<Self> {
                    if self.0.trim().is_empty() { None } else { Some(self) }
                }

                pub fn as_str(&self) -> &str {
                    &self.0
                }
            }

            impl From<&str> for $name {
                fn from(value: &str) -> Self {
                    Self(value.to_string())
                }
            }

            impl From<String> for $name {
                fn from(value: String) -> Self {
                    Self(value)
                }
            }
        )*
    };
}

string_id!(
    UserId,
    ClubId,
    CourtId,
    BookingId,
    CoachId,
    DeviceId,
    GroupId,
    /// An open-play or coaching session.
    SessionId,
    /// Shared by every invite sent out for one player-finder request.
    RequestId,
    CommentId,
    MembershipPlanId,
    NotificationId,
);

/// Kinds of controllable devices installed at a club.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DeviceType {
    Camera,
    Light,
    Switch,
}

/// Response status of a single invite sent by a player-finder request.
///
/// Matching is exact and case-sensitive; any other value is preserved in
/// `Other` and counted as neither pending nor accepted.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum InviteStatus {
    Pending,
    Accepted,
    Other(String),
}

impl InviteStatus {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Pending => "PENDING",
            Self::Accepted => "ACCEPTED",
            Self::Other(s) => s,
        }
    }
}

impl From<String> for InviteStatus {
    fn from(value: String) -> Self {
        match value.as_str() {
            "PENDING" => Self::Pending,
            "ACCEPTED" => Self::Accepted,
            _ => Self::Other(value),
        }
    }
}

impl Serialize for InviteStatus {
    fn serialize<S: serde::Serializer>(
        &self,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for InviteStatus {
    fn deserialize<D: serde::Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Self, D::Error> {
        Ok(String::deserialize(deserializer)?.into())
    }
}
