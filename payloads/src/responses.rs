//! Response bodies returned by the backend.
//!
//! Unknown fields are ignored and everything the backend may omit is
//! optional, so a response only fails to decode when its overall shape is
//! wrong.

use crate::requests::{CustomPerk, GroupMember, MembershipDuration};
use crate::{
    BookingId, ClubId, CoachId, CommentId, CourtId, DeviceId, DeviceType,
    GroupId, InviteStatus, MembershipPlanId, NotificationId, PlayTime,
    RequestId, SessionId, UserId,
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Returned from login once the token has been stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub user_id: Option<UserId>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: UserId,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone_number: Option<String>,
    pub current_active_club_id: Option<ClubId>,
}

impl User {
    pub fn display_name(&self) -> String {
        let name = format!(
            "{} {}",
            self.first_name.as_deref().unwrap_or_default(),
            self.last_name.as_deref().unwrap_or_default()
        );
        match name.trim() {
            "" => self.id.to_string(),
            trimmed => trimmed.to_string(),
        }
    }
}

/// A user's role within a club.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClubMember {
    pub user_id: UserId,
    pub user_name: Option<String>,
    pub role: Option<String>,
    pub membership_type: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisteredPlayer {
    pub user_id: Option<UserId>,
    pub name: String,
    pub phone_number: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Court {
    pub id: CourtId,
    pub name: Option<String>,
    pub surface: Option<String>,
    pub reservation_interval_minutes: Option<u32>,
}

impl Court {
    pub fn title(&self) -> &str {
        self.name.as_deref().unwrap_or("Unknown Court")
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Guest {
    pub name: String,
    pub phone_number: Option<String>,
    #[serde(default)]
    pub paid: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub id: BookingId,
    pub court_id: Option<CourtId>,
    pub user_name: Option<String>,
    /// `[year, month, day]`
    #[serde(default)]
    pub date: PlayTime,
    /// `[hour, minute]`
    #[serde(default)]
    pub start_time: Vec<i32>,
    #[serde(default)]
    pub end_time: Vec<i32>,
    pub status: Option<String>,
    #[serde(default)]
    pub paid: bool,
    #[serde(default)]
    pub guests_paid: bool,
    #[serde(default)]
    pub activate_entry_mode: bool,
    #[serde(default)]
    pub total_guest_list: Vec<Guest>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Coach {
    pub id: CoachId,
    pub name: String,
    pub email: Option<String>,
    pub phone_number: Option<String>,
    pub specialization: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Device {
    pub id: DeviceId,
    pub name: String,
    #[serde(rename = "type")]
    pub device_type: DeviceType,
    pub status: Option<String>,
    pub club_id: Option<ClubId>,
    pub court_id: Option<CourtId>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MembershipPlan {
    pub id: MembershipPlanId,
    pub club_id: Option<ClubId>,
    pub membership_name: String,
    pub duration: MembershipDuration,
    pub price: Decimal,
    #[serde(default)]
    pub perks: BTreeMap<String, u32>,
    #[serde(default)]
    pub custom_perks: Vec<CustomPerk>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Group {
    pub id: GroupId,
    pub name: String,
    pub creator_user_id: Option<UserId>,
    #[serde(default)]
    pub members: Vec<GroupMember>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaySession {
    pub id: SessionId,
    pub club_id: Option<ClubId>,
    pub court_name: Option<String>,
    pub play_type_name: Option<String>,
    pub event_name: Option<String>,
    #[serde(default)]
    pub start_time: PlayTime,
    pub duration_minutes: Option<u32>,
    pub max_players: Option<u32>,
    pub skill_level: Option<String>,
    #[serde(default)]
    pub registered_players: Vec<UserId>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OpenPlayBooking {
    pub id: BookingId,
    pub session_id: Option<SessionId>,
    pub play_type_name: Option<String>,
    pub court_name: Option<String>,
    #[serde(default)]
    pub start_time: PlayTime,
    pub status: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WaitlistEntry {
    pub id: SessionId,
    pub play_type: Option<String>,
    pub court_name: Option<String>,
    #[serde(default)]
    pub start_time: PlayTime,
    pub duration_minutes: Option<u32>,
    pub skill_level: Option<String>,
}

/// One invitation sent out by a player-finder request.
///
/// Several invites share a `request_id`. The id is optional because the
/// backend has been seen to omit it; such invites are grouped together.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Invite {
    pub id: Option<String>,
    pub request_id: Option<RequestId>,
    pub skill_rating: Option<f64>,
    #[serde(default)]
    pub place_to_play: String,
    #[serde(default)]
    pub play_time: PlayTime,
    pub status: Option<InviteStatus>,
    pub players_needed: Option<u32>,
    pub event_name: Option<String>,
    pub invitee_name: Option<String>,
    pub invitee_phone_number: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: CommentId,
    pub request_id: Option<RequestId>,
    pub user_id: Option<UserId>,
    pub user_name: Option<String>,
    pub comment: String,
    pub created_at: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Place {
    pub id: Option<String>,
    pub name: String,
    pub location: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub id: NotificationId,
    pub title: String,
    pub body: String,
    pub date: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerEvent {
    pub id: Option<String>,
    pub title: Option<String>,
    pub event_type: Option<String>,
    #[serde(default)]
    pub start: PlayTime,
    #[serde(default)]
    pub end: PlayTime,
}

/// Generic acknowledgement some mutations return.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SuccessMessage {
    pub message: Option<String>,
}
