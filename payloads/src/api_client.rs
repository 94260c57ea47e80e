use crate::config::ClientConfig;
use crate::token_store::{Token, TokenStore};
use crate::{
    BookingId, ClubId, CommentId, DeviceId, GroupId, RequestId, SessionId,
    UserId, requests, responses,
};
use reqwest::header::{ACCEPT, AUTHORIZATION};
use reqwest::{Method, RequestBuilder, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::sync::Arc;

type Query<'a> = &'a [(&'a str, &'a str)];

const NO_QUERY: Query<'static> = &[];

/// An API client for interfacing with the booking backend.
///
/// Every authenticated call borrows the current token from `tokens` for
/// the duration of that one request.
#[derive(Clone)]
pub struct APIClient {
    pub address: String,
    pub inner_client: reqwest::Client,
    pub tokens: Arc<dyn TokenStore + Send + Sync>,
}

impl APIClient {
    pub fn new(
        config: &ClientConfig,
        tokens: Arc<dyn TokenStore + Send + Sync>,
    ) -> Self {
        Self {
            address: config.base_url.clone(),
            inner_client: reqwest::Client::new(),
            tokens,
        }
    }
}

/// Helper methods for http actions
impl APIClient {
    fn format_url(&self, path: &str) -> String {
        format!("{}{path}", &self.address)
    }

    /// Start a request carrying the bearer token, failing fast when no
    /// token is stored.
    fn authorized(
        &self,
        method: Method,
        path: &str,
    ) -> Result<RequestBuilder, ClientError> {
        let token = self.tokens.get_token().ok_or(ClientError::MissingToken)?;
        Ok(self
            .inner_client
            .request(method, self.format_url(path))
            .header(AUTHORIZATION, token.bearer())
            .header(ACCEPT, "*/*"))
    }

    fn anonymous(&self, method: Method, path: &str) -> RequestBuilder {
        self.inner_client
            .request(method, self.format_url(path))
            .header(ACCEPT, "*/*")
    }

    async fn send(
        &self,
        request: RequestBuilder,
    ) -> Result<reqwest::Response, ClientError> {
        let request = request.build()?;
        tracing::debug!("{} {}", request.method(), request.url().path());
        Ok(self.inner_client.execute(request).await?)
    }

    async fn get(
        &self,
        path: &str,
        query: Query<'_>,
    ) -> Result<reqwest::Response, ClientError> {
        let request = self.authorized(Method::GET, path)?.query(query);
        self.send(request).await
    }

    async fn post(
        &self,
        path: &str,
        query: Query<'_>,
        body: &impl Serialize,
    ) -> Result<reqwest::Response, ClientError> {
        let request =
            self.authorized(Method::POST, path)?.query(query).json(body);
        self.send(request).await
    }

    async fn empty_post(
        &self,
        path: &str,
        query: Query<'_>,
    ) -> Result<reqwest::Response, ClientError> {
        let request = self.authorized(Method::POST, path)?.query(query);
        self.send(request).await
    }

    async fn put(
        &self,
        path: &str,
        query: Query<'_>,
        body: &impl Serialize,
    ) -> Result<reqwest::Response, ClientError> {
        let request =
            self.authorized(Method::PUT, path)?.query(query).json(body);
        self.send(request).await
    }

    async fn empty_put(
        &self,
        path: &str,
        query: Query<'_>,
    ) -> Result<reqwest::Response, ClientError> {
        let request = self.authorized(Method::PUT, path)?.query(query);
        self.send(request).await
    }

    async fn delete(
        &self,
        path: &str,
        query: Query<'_>,
    ) -> Result<reqwest::Response, ClientError> {
        let request = self.authorized(Method::DELETE, path)?.query(query);
        self.send(request).await
    }
}

/// Authentication
impl APIClient {
    /// Log in and store the returned token.
    pub async fn login(
        &self,
        credentials: &requests::LoginCredentials,
    ) -> Result<responses::LoginResponse, ClientError> {
        #[derive(serde::Deserialize)]
        #[serde(rename_all = "camelCase")]
        struct LoginBody {
            token: String,
            user_id: Option<UserId>,
        }

        let request =
            self.anonymous(Method::POST, "/auth/login").json(credentials);
        let response = self.send(request).await?;
        let body: LoginBody = ok_body(response).await?;
        self.tokens.store_token(Token::new(body.token));
        Ok(responses::LoginResponse {
            user_id: body.user_id,
        })
    }

    /// Forget the stored token. The backend keeps no session to end.
    pub fn logout(&self) {
        self.tokens.remove_token();
    }

    pub fn is_logged_in(&self) -> bool {
        self.tokens.get_token().is_some()
    }

    pub async fn forgot_password(
        &self,
        details: &requests::ForgotPassword,
    ) -> Result<(), ClientError> {
        let request = self
            .anonymous(Method::POST, "/password/forgot-password")
            .query(&[("email", details.email.as_str())]);
        let response = self.send(request).await?;
        ok_empty(response).await
    }

    pub async fn reset_password(
        &self,
        details: &requests::ResetPassword,
    ) -> Result<(), ClientError> {
        let request = self
            .anonymous(Method::POST, "/password/reset-password")
            .query(&[
                ("token", details.token.as_str()),
                ("newPassword", details.new_password.as_str()),
            ]);
        let response = self.send(request).await?;
        ok_empty(response).await
    }

    pub async fn change_password(
        &self,
        details: &requests::ChangePassword,
    ) -> Result<(), ClientError> {
        let response =
            self.post("/auth/change-password", NO_QUERY, details).await?;
        ok_empty(response).await
    }
}

/// Users and club membership
impl APIClient {
    pub async fn current_user(&self) -> Result<responses::User, ClientError> {
        let response = self.get("/users/me", NO_QUERY).await?;
        ok_body(response).await
    }

    pub async fn get_user(
        &self,
        user_id: &UserId,
    ) -> Result<responses::User, ClientError> {
        let response = self.get(&format!("/users/{user_id}"), NO_QUERY).await?;
        ok_body(response).await
    }

    pub async fn update_user(
        &self,
        user_id: &UserId,
        details: &requests::UpdateUser,
    ) -> Result<responses::User, ClientError> {
        let response = self
            .put(&format!("/users/{user_id}"), NO_QUERY, details)
            .await?;
        ok_body(response).await
    }

    pub async fn delete_user(
        &self,
        user_id: &UserId,
    ) -> Result<(), ClientError> {
        let response =
            self.delete(&format!("/users/{user_id}"), NO_QUERY).await?;
        ok_empty(response).await
    }

    pub async fn change_active_club(
        &self,
        club_id: &ClubId,
    ) -> Result<(), ClientError> {
        let path = format!("/users/change-active-club/{club_id}");
        let response = self.empty_put(&path, NO_QUERY).await?;
        ok_empty(response).await
    }

    pub async fn get_club_members(
        &self,
        club_id: &ClubId,
    ) -> Result<Vec<responses::ClubMember>, ClientError> {
        let response = self
            .get(&format!("/user-club-roles/club/{club_id}"), NO_QUERY)
            .await?;
        ok_list(response).await
    }

    pub async fn get_registered_players(
        &self,
        club_id: &ClubId,
    ) -> Result<Vec<responses::RegisteredPlayer>, ClientError> {
        let response = self
            .get("/users/namesphonenos", &[("clubId", club_id.as_str())])
            .await?;
        ok_list(response).await
    }
}

/// Courts, bookings and guests
impl APIClient {
    pub async fn get_club_courts(
        &self,
        club_id: &ClubId,
    ) -> Result<Vec<responses::Court>, ClientError> {
        let response =
            self.get(&format!("/courts/club/{club_id}"), NO_QUERY).await?;
        ok_list(response).await
    }

    /// Current bookings for a club; polled by the live-updates screen.
    pub async fn get_club_bookings(
        &self,
        club_id: &ClubId,
    ) -> Result<Vec<responses::Booking>, ClientError> {
        let response = self
            .get(&format!("/api/bookings/club/{club_id}"), NO_QUERY)
            .await?;
        ok_list(response).await
    }

    pub async fn get_all_club_bookings(
        &self,
        club_id: &ClubId,
    ) -> Result<Vec<responses::Booking>, ClientError> {
        let response = self
            .get(&format!("/api/bookings/all-bookings/{club_id}"), NO_QUERY)
            .await?;
        ok_list(response).await
    }

    pub async fn get_user_bookings(
        &self,
        user_id: &UserId,
    ) -> Result<Vec<responses::Booking>, ClientError> {
        let response = self
            .get(&format!("/api/bookings/user/{user_id}"), NO_QUERY)
            .await?;
        ok_list(response).await
    }

    pub async fn pay_booking(
        &self,
        booking_id: &BookingId,
    ) -> Result<(), ClientError> {
        let path = format!("/api/bookings/booking/{booking_id}/pay");
        let response = self.empty_put(&path, NO_QUERY).await?;
        ok_empty(response).await
    }

    pub async fn cancel_booking(
        &self,
        booking_id: &BookingId,
    ) -> Result<(), ClientError> {
        let response = self
            .delete(&format!("/api/bookings/{booking_id}"), NO_QUERY)
            .await?;
        ok_empty(response).await
    }

    pub async fn activate_entry(
        &self,
        booking_id: &BookingId,
    ) -> Result<(), ClientError> {
        let response = self
            .empty_put(
                "/api/bookings/activate-entry-mode",
                &[("bookingId", booking_id.as_str())],
            )
            .await?;
        ok_empty(response).await
    }

    pub async fn send_payment_reminder(
        &self,
        booking_id: &BookingId,
    ) -> Result<(), ClientError> {
        let response = self
            .empty_post(
                &format!("/api/bookings/remind-payment/{booking_id}"),
                NO_QUERY,
            )
            .await?;
        ok_empty(response).await
    }

    pub async fn add_guest(
        &self,
        details: &requests::AddGuest,
    ) -> Result<(), ClientError> {
        let response = self.post("/api/guest-list", NO_QUERY, details).await?;
        ok_empty(response).await
    }

    pub async fn pay_for_guests(
        &self,
        booking_id: &BookingId,
    ) -> Result<(), ClientError> {
        let response = self
            .empty_put(
                "/api/guest-list/payforguests",
                &[("bookingId", booking_id.as_str())],
            )
            .await?;
        ok_empty(response).await
    }
}

/// Coaches, devices and membership plans
impl APIClient {
    pub async fn get_club_coaches(
        &self,
        club_id: &ClubId,
    ) -> Result<Vec<responses::Coach>, ClientError> {
        let response = self
            .get(&format!("/api/clubs/{club_id}/coaches"), NO_QUERY)
            .await?;
        ok_list(response).await
    }

    pub async fn add_club_coach(
        &self,
        club_id: &ClubId,
        details: &requests::AddCoach,
    ) -> Result<responses::Coach, ClientError> {
        let response = self
            .post(&format!("/api/clubs/{club_id}/coaches"), NO_QUERY, details)
            .await?;
        ok_body(response).await
    }

    pub async fn get_club_devices(
        &self,
        club_id: &ClubId,
    ) -> Result<Vec<responses::Device>, ClientError> {
        let response = self
            .get(&format!("/api/devices/club/{club_id}"), NO_QUERY)
            .await?;
        ok_list(response).await
    }

    pub async fn add_device(
        &self,
        details: &requests::AddDevice,
    ) -> Result<responses::Device, ClientError> {
        let response = self.post("/api/devices", NO_QUERY, details).await?;
        ok_body(response).await
    }

    pub async fn delete_device(
        &self,
        device_id: &DeviceId,
    ) -> Result<(), ClientError> {
        let response = self
            .delete(&format!("/api/devices/{device_id}"), NO_QUERY)
            .await?;
        ok_empty(response).await
    }

    pub async fn get_membership_plans(
        &self,
        club_id: &ClubId,
    ) -> Result<Vec<responses::MembershipPlan>, ClientError> {
        let response = self
            .get(&format!("/api/membership-plans/{club_id}"), NO_QUERY)
            .await?;
        ok_list(response).await
    }

    pub async fn create_membership_plan(
        &self,
        details: &requests::CreateMembershipPlan,
    ) -> Result<responses::MembershipPlan, ClientError> {
        let response = self
            .post("/api/membership-plans/create", NO_QUERY, details)
            .await?;
        ok_body(response).await
    }
}

/// Groups
impl APIClient {
    pub async fn get_groups(
        &self,
        phone_number: &str,
    ) -> Result<Vec<responses::Group>, ClientError> {
        let response = self
            .get(&format!("/api/groups/user/{phone_number}"), NO_QUERY)
            .await?;
        ok_list(response).await
    }

    pub async fn get_group(
        &self,
        group_id: &GroupId,
    ) -> Result<responses::Group, ClientError> {
        let response =
            self.get(&format!("/api/groups/{group_id}"), NO_QUERY).await?;
        ok_body(response).await
    }

    pub async fn create_group(
        &self,
        details: &requests::CreateGroup,
    ) -> Result<responses::Group, ClientError> {
        let response = self.post("/api/groups", NO_QUERY, details).await?;
        ok_body(response).await
    }

    pub async fn update_group_name(
        &self,
        details: &requests::UpdateGroupName,
    ) -> Result<(), ClientError> {
        let response = self
            .empty_put(
                &format!("/api/groups/{}/update-name", details.group_id),
                &[
                    ("requesterUserId", details.requester_user_id.as_str()),
                    ("newName", details.new_name.as_str()),
                ],
            )
            .await?;
        ok_empty(response).await
    }

    pub async fn update_group_members(
        &self,
        details: &requests::UpdateGroupMembers,
    ) -> Result<responses::Group, ClientError> {
        let response = self
            .put(
                &format!("/api/groups/{}/update-members", details.group_id),
                &[("requesterUserId", details.requester_user_id.as_str())],
                &details.members,
            )
            .await?;
        ok_body(response).await
    }

    pub async fn update_admin_status(
        &self,
        details: &requests::UpdateAdminStatus,
    ) -> Result<(), ClientError> {
        let admin = details.admin.to_string();
        let response = self
            .empty_put(
                &format!("/api/groups/{}/admin-status", details.group_id),
                &[
                    ("requesterUserId", details.requester_user_id.as_str()),
                    ("memberPhone", details.member_phone.as_str()),
                    ("admin", admin.as_str()),
                ],
            )
            .await?;
        ok_empty(response).await
    }

    pub async fn remove_group_member(
        &self,
        details: &requests::RemoveGroupMember,
    ) -> Result<(), ClientError> {
        let response = self
            .delete(
                &format!(
                    "/api/groups/{}/members/{}",
                    details.group_id, details.member_phone
                ),
                &[("requesterUserId", details.requester_user_id.as_str())],
            )
            .await?;
        ok_empty(response).await
    }

    pub async fn delete_group(
        &self,
        group_id: &GroupId,
        requester_user_id: &UserId,
    ) -> Result<(), ClientError> {
        let response = self
            .delete(
                &format!("/api/groups/{group_id}"),
                &[("requesterUserId", requester_user_id.as_str())],
            )
            .await?;
        ok_empty(response).await
    }
}

/// Open play sessions and waitlists
impl APIClient {
    pub async fn get_open_play_sessions(
        &self,
        club_id: &ClubId,
    ) -> Result<Vec<responses::PlaySession>, ClientError> {
        let response = self
            .get(
                "/api/play-type/sessions/available",
                &[("clubId", club_id.as_str())],
            )
            .await?;
        ok_list(response).await
    }

    pub async fn get_play_session(
        &self,
        session_id: &SessionId,
    ) -> Result<responses::PlaySession, ClientError> {
        let response = self
            .get(&format!("/api/play-type/sessions/{session_id}"), NO_QUERY)
            .await?;
        ok_body(response).await
    }

    pub async fn create_open_play(
        &self,
        details: &requests::CreateOpenPlay,
    ) -> Result<(), ClientError> {
        let response = self
            .post("/api/play-type/sessions", NO_QUERY, details)
            .await?;
        ok_empty(response).await
    }

    pub async fn cancel_play_session(
        &self,
        session_id: &SessionId,
    ) -> Result<(), ClientError> {
        let response = self
            .delete(&format!("/api/play-type/sessions/{session_id}"), NO_QUERY)
            .await?;
        ok_empty(response).await
    }

    pub async fn join_play(
        &self,
        details: &requests::JoinPlay,
    ) -> Result<(), ClientError> {
        let response = self
            .empty_post(
                "/api/play-type/bookings",
                &[
                    ("sessionId", details.session_id.as_str()),
                    ("userId", details.user_id.as_str()),
                    ("isGuest", "false"),
                ],
            )
            .await?;
        ok_empty(response).await
    }

    pub async fn withdraw_from_play(
        &self,
        session_id: &SessionId,
        user_id: &UserId,
    ) -> Result<(), ClientError> {
        let response = self
            .delete(
                &format!("/api/play-type/bookings/{session_id}/{user_id}"),
                NO_QUERY,
            )
            .await?;
        ok_empty(response).await
    }

    pub async fn get_open_play_bookings(
        &self,
        user_id: &UserId,
    ) -> Result<Vec<responses::OpenPlayBooking>, ClientError> {
        let response = self
            .get(&format!("/api/play-type/bookings/{user_id}"), NO_QUERY)
            .await?;
        ok_list(response).await
    }

    pub async fn get_waitlist(
        &self,
        user_id: &UserId,
    ) -> Result<Vec<responses::WaitlistEntry>, ClientError> {
        let response = self
            .get("/api/play-type/waitlist", &[("userId", user_id.as_str())])
            .await?;
        ok_list(response).await
    }

    pub async fn withdraw_from_waitlist(
        &self,
        user_id: &UserId,
        session_id: &SessionId,
    ) -> Result<(), ClientError> {
        let response = self
            .delete(
                &format!("/api/play-type/waitlist/{user_id}/{session_id}"),
                NO_QUERY,
            )
            .await?;
        ok_empty(response).await
    }
}

/// Player finder: requests, invites and comments
impl APIClient {
    /// Invites addressed to the given user.
    pub async fn get_invitations(
        &self,
        user_id: &UserId,
    ) -> Result<Vec<responses::Invite>, ClientError> {
        let response = self
            .get(
                "/api/player-tracker/tracker/user",
                &[("userId", user_id.as_str())],
            )
            .await?;
        ok_list(response).await
    }

    pub async fn get_invitations_sent(
        &self,
        invitee_email: &str,
    ) -> Result<Vec<responses::Invite>, ClientError> {
        let response = self
            .get(
                "/api/player-tracker/tracker/invitee",
                &[("inviteeEmail", invitee_email)],
            )
            .await?;
        ok_list(response).await
    }

    pub async fn request_player_finder(
        &self,
        details: &requests::RequestPlayerFinder,
    ) -> Result<(), ClientError> {
        let response = self
            .post("/api/player-finder-queue/request", NO_QUERY, details)
            .await?;
        ok_empty(response).await
    }

    pub async fn update_player_finder_event(
        &self,
        request_id: &RequestId,
        requester_id: &UserId,
        details: &requests::UpdatePlayerFinderEvent,
    ) -> Result<(), ClientError> {
        let path = format!(
            "/api/player-finder-queue/update/player-finder-event/\
             {request_id}"
        );
        let response = self
            .put(&path, &[("requesterId", requester_id.as_str())], details)
            .await?;
        ok_empty(response).await
    }

    /// Decline a single invite as the invitee. The backend exposes this as
    /// a GET.
    pub async fn cancel_invite(
        &self,
        details: &requests::CancelInvite,
    ) -> Result<(), ClientError> {
        let response = self
            .get(
                "/api/player-finder-queue/cancel",
                &[
                    ("requestId", details.request_id.as_str()),
                    ("userId", details.user_id.as_str()),
                    ("comments", details.comments.as_str()),
                ],
            )
            .await?;
        ok_empty(response).await
    }

    /// Withdraw a whole request as its requester.
    pub async fn withdraw_request(
        &self,
        details: &requests::CancelInvite,
    ) -> Result<(), ClientError> {
        let response = self
            .get(
                "/api/player-finder-queue/cancelByRequester",
                &[
                    ("requestId", details.request_id.as_str()),
                    ("requestorId", details.user_id.as_str()),
                    ("comments", details.comments.as_str()),
                ],
            )
            .await?;
        ok_empty(response).await
    }

    pub async fn get_request_comments(
        &self,
        request_id: &RequestId,
    ) -> Result<Vec<responses::Comment>, ClientError> {
        let response = self
            .get(
                &format!("/api/player-finder/comments/request/{request_id}"),
                NO_QUERY,
            )
            .await?;
        ok_list(response).await
    }

    pub async fn post_comment(
        &self,
        details: &requests::PostComment,
    ) -> Result<(), ClientError> {
        let response = self
            .post("/api/player-finder/comments", NO_QUERY, details)
            .await?;
        ok_empty(response).await
    }

    pub async fn delete_comment(
        &self,
        comment_id: &CommentId,
        user_id: &UserId,
    ) -> Result<(), ClientError> {
        let response = self
            .delete(
                &format!("/api/player-finder/comments/{comment_id}"),
                &[("userId", user_id.as_str())],
            )
            .await?;
        ok_empty(response).await
    }

    /// Search known places. A query, not a mutation, even though the
    /// results depend on free-text input.
    pub async fn search_places(
        &self,
        search: &requests::SearchPlaces,
    ) -> Result<Vec<responses::Place>, ClientError> {
        let latitude = search.latitude.map(|l| l.to_string());
        let longitude = search.longitude.map(|l| l.to_string());
        let mut query = vec![("query", search.query.as_str())];
        if let (Some(lat), Some(lng)) = (&latitude, &longitude) {
            query.push(("latitude", lat.as_str()));
            query.push(("longitude", lng.as_str()));
        }
        let response = self.get("/api/import/search", &query).await?;
        ok_list(response).await
    }
}

/// Notifications, availability and feedback
impl APIClient {
    pub async fn get_notifications(
        &self,
        user_id: &UserId,
    ) -> Result<Vec<responses::Notification>, ClientError> {
        let response = self
            .get(&format!("/notifications/{user_id}"), NO_QUERY)
            .await?;
        ok_list(response).await
    }

    pub async fn get_unread_count(
        &self,
        user_id: &UserId,
    ) -> Result<u64, ClientError> {
        let response = self
            .get(&format!("/notifications/{user_id}/unread-count"), NO_QUERY)
            .await?;
        ok_body(response).await
    }

    pub async fn mark_notifications_read(
        &self,
        user_id: &UserId,
    ) -> Result<(), ClientError> {
        let path = format!("/notifications/{user_id}/mark-as-read");
        let response = self.empty_put(&path, NO_QUERY).await?;
        ok_empty(response).await
    }

    pub async fn get_player_schedule(
        &self,
        user_id: &UserId,
    ) -> Result<Vec<responses::PlayerEvent>, ClientError> {
        let response = self
            .get("/player-calendar/all-events", &[("userId", user_id.as_str())])
            .await?;
        ok_list(response).await
    }

    pub async fn set_unavailability(
        &self,
        user_id: &UserId,
        details: &requests::SetUnavailability,
    ) -> Result<(), ClientError> {
        let response = self
            .post(
                "/api/player-calendar/set-unavalability",
                &[("userId", user_id.as_str())],
                details,
            )
            .await?;
        ok_empty(response).await
    }

    pub async fn submit_feedback(
        &self,
        details: &requests::Feedback,
    ) -> Result<(), ClientError> {
        let response = self.post("/api/feedback", NO_QUERY, details).await?;
        ok_empty(response).await
    }
}

const INVALID_FORMAT: &str = "Invalid response format";

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// A non-2xx response, carrying the message extracted from the body.
    #[error("{1}")]
    APIError(StatusCode, String),
    #[error("Network error. Please check your connection.")]
    Network(#[from] reqwest::Error),
    #[error("Missing auth token")]
    MissingToken,
    /// A 2xx response whose body did not have the expected shape.
    #[error("{0}")]
    InvalidFormat(String),
}

impl ClientError {
    /// The message shown to the user; never empty.
    pub fn message(&self) -> String {
        let message = self.to_string();
        if message.trim().is_empty() {
            "Unknown error".to_string()
        } else {
            message
        }
    }
}

/// Pick the most specific message out of an error response body.
///
/// In order: a JSON `message`, a JSON `errors` array joined with commas, a
/// JSON `error`, a plain-text body, and finally the status code.
pub fn server_message(status: StatusCode, body: &str) -> String {
    let from_body = match serde_json::from_str::<serde_json::Value>(body) {
        Ok(value) => message_from_json(&value),
        Err(_) => Some(body.trim().to_string()).filter(|s| !s.is_empty()),
    };
    from_body.unwrap_or_else(|| {
        format!("Request failed with status code {}", status.as_u16())
    })
}

fn message_from_json(value: &serde_json::Value) -> Option<String> {
    let non_empty = |s: &str| Some(s.to_string()).filter(|s| !s.is_empty());

    if let Some(s) = value.as_str() {
        return non_empty(s);
    }
    if let Some(message) = value.get("message").and_then(|v| v.as_str())
        && let Some(message) = non_empty(message)
    {
        return Some(message);
    }
    if let Some(errors) = value.get("errors").and_then(|v| v.as_array()) {
        let joined = errors
            .iter()
            .filter_map(|e| e.as_str())
            .collect::<Vec<_>>()
            .join(", ");
        if let Some(joined) = non_empty(&joined) {
            return Some(joined);
        }
    }
    value
        .get("error")
        .and_then(|v| v.as_str())
        .and_then(non_empty)
}

async fn error_for(response: reqwest::Response) -> ClientError {
    let status = response.status();
    match response.text().await {
        Ok(body) => {
            ClientError::APIError(status, server_message(status, &body))
        }
        Err(e) => e.into(),
    }
}

/// Deserialize a successful request into the desired type, or return an
/// appropriate error.
pub async fn ok_body<T: DeserializeOwned>(
    response: reqwest::Response,
) -> Result<T, ClientError> {
    if !response.status().is_success() {
        return Err(error_for(response).await);
    }
    let body = response.text().await?;
    serde_json::from_str(&body).map_err(|e| {
        tracing::error!("{INVALID_FORMAT}: {e}");
        ClientError::InvalidFormat(INVALID_FORMAT.to_string())
    })
}

/// Like [`ok_body`], but first checks that the body is a JSON array.
pub async fn ok_list<T: DeserializeOwned>(
    response: reqwest::Response,
) -> Result<Vec<T>, ClientError> {
    let value: serde_json::Value = ok_body(response).await?;
    if !value.is_array() {
        tracing::error!("{INVALID_FORMAT}: expected a sequence");
        return Err(ClientError::InvalidFormat(INVALID_FORMAT.to_string()));
    }
    serde_json::from_value(value).map_err(|e| {
        tracing::error!("{INVALID_FORMAT}: {e}");
        ClientError::InvalidFormat(INVALID_FORMAT.to_string())
    })
}

/// Check that an empty response is OK, returning a ClientError if not.
pub async fn ok_empty(response: reqwest::Response) -> Result<(), ClientError> {
    if !response.status().is_success() {
        return Err(error_for(response).await);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_chain() {
        let status = StatusCode::BAD_REQUEST;
        assert_eq!(
            server_message(status, r#"{"message":"Court already booked"}"#),
            "Court already booked"
        );
        assert_eq!(
            server_message(status, r#"{"errors":["name empty","no members"]}"#),
            "name empty, no members"
        );
        assert_eq!(
            server_message(status, r#"{"message":"","error":"Bad Request"}"#),
            "Bad Request"
        );
        assert_eq!(server_message(status, "plain failure"), "plain failure");
        assert_eq!(
            server_message(StatusCode::INTERNAL_SERVER_ERROR, ""),
            "Request failed with status code 500"
        );
        assert_eq!(
            server_message(status, r#"{"timestamp":1}"#),
            "Request failed with status code 400"
        );
    }

    #[test]
    fn user_messages_are_never_empty() {
        let blank = ClientError::APIError(StatusCode::BAD_REQUEST, " ".into());
        assert_eq!(blank.message(), "Unknown error");
        assert_eq!(ClientError::MissingToken.message(), "Missing auth token");
    }
}
