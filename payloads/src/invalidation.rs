//! Declarative refetching after mutations.
//!
//! Every resource hook registers the [`ResourceKey`] it reads. A mutation
//! that changes server state bumps the keys it affects, and each hook
//! reading one of those keys sees a new version and fetches again.

use crate::{ClubId, GroupId, RequestId, UserId};
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ResourceKey {
    ClubCourts(ClubId),
    ClubBookings(ClubId),
    ClubCoaches(ClubId),
    ClubDevices(ClubId),
    ClubMembers(ClubId),
    MembershipPlans(ClubId),
    OpenPlaySessions(ClubId),
    /// Groups a phone number belongs to.
    Groups(String),
    Group(GroupId),
    UserBookings(UserId),
    OpenPlayBookings(UserId),
    Waitlist(UserId),
    Invitations(UserId),
    SentInvitations(String),
    Notifications(UserId),
    PlayerSchedule(UserId),
    RequestComments(RequestId),
    CurrentUser,
}

/// Per-key version counters. A version only ever increases.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InvalidationLedger {
    versions: HashMap<ResourceKey, u64>,
}

impl InvalidationLedger {
    pub fn version(&self, key: &ResourceKey) -> u64 {
        self.versions.get(key).copied().unwrap_or_default()
    }

    pub fn invalidate(&mut self, key: ResourceKey) {
        tracing::debug!("invalidating {key:?}");
        *self.versions.entry(key).or_default() += 1;
    }

    pub fn invalidate_all(
        &mut self,
        keys: impl IntoIterator<Item = ResourceKey>,
    ) {
        for key in keys {
            self.invalidate(key);
        }
    }
}
