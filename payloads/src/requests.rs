use crate::{
    BookingId, ClubId, CourtId, DeviceType, GroupId, RequestId, SessionId,
    UserId, contacts::Contact,
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Serialize, Deserialize)]
pub struct LoginCredentials {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangePassword {
    pub user_id: UserId,
    pub current_password: String,
    pub new_password: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ForgotPassword {
    pub email: String,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResetPassword {
    pub token: String,
    pub new_password: String,
}

/// Profile fields a user may change. Absent fields are left untouched by
/// the backend.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUser {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddGuest {
    pub booking_id: BookingId,
    pub guest_name: String,
    pub guest_phone_number: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddCoach {
    pub name: String,
    pub email: Option<String>,
    pub phone_number: Option<String>,
    pub specialization: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddDevice {
    pub name: String,
    #[serde(rename = "type")]
    pub device_type: DeviceType,
    pub status: String,
    pub club_id: ClubId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub court_id: Option<CourtId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub control_endpoint: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<BTreeMap<String, String>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MembershipDuration {
    Monthly,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomPerk {
    pub name: String,
    pub value: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateMembershipPlan {
    pub club_id: ClubId,
    pub membership_name: String,
    pub duration: MembershipDuration,
    pub price: Decimal,
    /// Numeric perks such as `advanceBookingDays` or `guestPasses`.
    pub perks: BTreeMap<String, u32>,
    pub custom_perks: Vec<CustomPerk>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupMember {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<UserId>,
    pub phone_number: String,
    #[serde(default)]
    pub admin: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateGroup {
    pub name: String,
    pub creator_user_id: UserId,
    pub members: Vec<GroupMember>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateGroupName {
    pub group_id: GroupId,
    pub requester_user_id: UserId,
    pub new_name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateGroupMembers {
    pub group_id: GroupId,
    pub requester_user_id: UserId,
    pub members: Vec<GroupMember>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateAdminStatus {
    pub group_id: GroupId,
    pub requester_user_id: UserId,
    pub member_phone: String,
    pub admin: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoveGroupMember {
    pub group_id: GroupId,
    pub requester_user_id: UserId,
    pub member_phone: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateOpenPlay {
    pub club_id: ClubId,
    pub court_id: CourtId,
    pub play_type_name: String,
    /// ISO-8601 local date-time.
    pub start_time: String,
    pub duration_minutes: u32,
    pub max_players: u32,
    pub skill_level: Option<String>,
    pub price_for_play: Option<Decimal>,
    pub event_name: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JoinPlay {
    pub session_id: SessionId,
    pub user_id: UserId,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerFinderRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub requestor_id: Option<UserId>,
    pub event_name: String,
    pub place_to_play: String,
    pub play_time: String,
    pub play_end_time: String,
    pub players_needed: u32,
    pub skill_rating: f64,
    pub preferred_contacts: Vec<Contact>,
}

/// A place the requester found by search and wants saved alongside the
/// request.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaceToSave {
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Location")]
    pub location: String,
    #[serde(rename = "Lighting")]
    pub lighting: String,
    pub net_type: String,
    pub no_of_courts: u32,
    pub opening_time: String,
    pub closing_time: String,
    pub is_free: bool,
    pub is_private: bool,
    pub creator_id: UserId,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestPlayerFinder {
    pub player_finder_request: PlayerFinderRequest,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub place_to_save: Option<PlaceToSave>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePlayerFinderEvent {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub place_to_play: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub play_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub play_end_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub players_needed: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skill_level: Option<String>,
}

/// Cancel one invite (as invitee) or a whole request (as requester).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CancelInvite {
    pub request_id: RequestId,
    pub user_id: UserId,
    pub comments: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostComment {
    pub request_id: RequestId,
    pub user_id: UserId,
    pub comment: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchPlaces {
    pub query: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetUnavailability {
    /// `YYYY-MM-DD`
    pub date: String,
    /// `HH:MM`
    pub start_time: String,
    pub end_time: String,
    pub reason: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Feedback {
    pub user_id: UserId,
    pub rating: u8,
    pub comments: String,
}
