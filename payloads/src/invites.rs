//! Client-side views over player-finder invites: grouping by request,
//! filtering by date/time/location, and fulfilment filtering with sorting.

use crate::responses::Invite;
use crate::{InviteStatus, PlayTime, RequestId};
use indexmap::IndexMap;
use jiff::civil::{Date, Time};
use jiff::tz::TimeZone;

/// Invites grouped by request, in order of first appearance.
pub type GroupedInvites = IndexMap<Option<RequestId>, GroupedInviteInfo>;

/// Aggregate of all invites sent for one player-finder request.
#[derive(Debug, Clone, PartialEq)]
pub struct GroupedInviteInfo {
    /// Formatted play time of the first invite seen, or empty if that
    /// invite had no complete play time.
    pub date: String,
    /// Epoch milliseconds of the same play time, 0 when unavailable.
    pub date_time_ms: i64,
    pub skill_rating: Option<f64>,
    pub request_id: Option<RequestId>,
    pub place_to_play: String,
    pub pending: usize,
    pub accepted: usize,
    pub players_needed: Option<u32>,
    pub event_name: Option<String>,
    /// Every invite of the request, in input order.
    pub requests: Vec<Invite>,
}

impl GroupedInviteInfo {
    fn from_first(invite: &Invite, tz: &TimeZone) -> Self {
        Self {
            date: invite.play_time.display(tz).unwrap_or_default(),
            date_time_ms: invite.play_time.epoch_millis(tz).unwrap_or_default(),
            skill_rating: invite.skill_rating,
            request_id: invite.request_id.clone(),
            place_to_play: invite.place_to_play.clone(),
            pending: 0,
            accepted: 0,
            players_needed: invite.players_needed,
            event_name: invite.event_name.clone(),
            requests: Vec::new(),
        }
    }

    /// Invites whose status is neither pending nor accepted.
    pub fn other_count(&self) -> usize {
        self.requests.len() - self.pending - self.accepted
    }

    pub fn is_fulfilled(&self) -> bool {
        self.pending == 0
    }
}

/// Fold invites into one bucket per request id.
///
/// A missing input yields an empty mapping. Invites without a request id
/// all land in the `None` bucket.
pub fn group_invites_by_request_id(
    invites: Option<&[Invite]>,
    tz: &TimeZone,
) -> GroupedInvites {
    let mut groups = GroupedInvites::new();
    for invite in invites.unwrap_or_default() {
        let group = groups
            .entry(invite.request_id.clone())
            .or_insert_with(|| GroupedInviteInfo::from_first(invite, tz));
        match invite.status {
            Some(InviteStatus::Pending) => group.pending += 1,
            Some(InviteStatus::Accepted) => group.accepted += 1,
            _ => {}
        }
        group.requests.push(invite.clone());
    }
    groups
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FulfillmentFilter {
    #[default]
    All,
    /// No invite is still pending.
    Fulfilled,
    Unfulfilled,
}

impl From<&str> for FulfillmentFilter {
    fn from(value: &str) -> Self {
        match value {
            "FULFILLED" => Self::Fulfilled,
            "UNFULFILLED" => Self::Unfulfilled,
            _ => Self::All,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Ascending,
    Descending,
}

impl SortOrder {
    pub fn toggled(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }
}

/// Select groups by fulfilment and order them by play time. Ties keep
/// their order in `groups`.
pub fn filter_and_sort_invites(
    groups: &GroupedInvites,
    filter: FulfillmentFilter,
    order: SortOrder,
) -> GroupedInvites {
    let mut selected: Vec<_> = groups
        .iter()
        .filter(|(_, group)| match filter {
            FulfillmentFilter::All => true,
            FulfillmentFilter::Fulfilled => group.pending == 0,
            FulfillmentFilter::Unfulfilled => group.pending > 0,
        })
        .map(|(key, group)| (key.clone(), group.clone()))
        .collect();

    selected.sort_by(|(_, a), (_, b)| match order {
        SortOrder::Ascending => a.date_time_ms.cmp(&b.date_time_ms),
        SortOrder::Descending => b.date_time_ms.cmp(&a.date_time_ms),
    });

    selected.into_iter().collect()
}

/// Anything with a play time and a place, such as received or sent
/// invites.
pub trait Scheduled {
    fn play_time(&self) -> &PlayTime;
    fn place_to_play(&self) -> &str;
}

impl Scheduled for Invite {
    fn play_time(&self) -> &PlayTime {
        &self.play_time
    }

    fn place_to_play(&self) -> &str {
        &self.place_to_play
    }
}

/// Optional constraints on invites. An unset filter places no constraint.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InviteFilters {
    /// Matches on calendar day, ignoring the time of day.
    pub date: Option<Date>,
    /// Matches on hour and minute, ignoring the date.
    pub time: Option<Time>,
    /// Exact match. An empty string is treated as unset.
    pub location: Option<String>,
}

impl InviteFilters {
    pub fn is_empty(&self) -> bool {
        self.date.is_none() && self.time.is_none() && self.location().is_none()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    fn location(&self) -> Option<&str> {
        self.location.as_deref().filter(|l| !l.is_empty())
    }

    pub fn matches(&self, item: &impl Scheduled) -> bool {
        let play_time = item.play_time();

        if let Some(date) = self.date
            && play_time.date() != Some(date)
        {
            return false;
        }

        if let Some(time) = self.time {
            let Some(play) = play_time.time() else {
                return false;
            };
            if (play.hour(), play.minute()) != (time.hour(), time.minute()) {
                return false;
            }
        }

        match self.location() {
            Some(location) => item.place_to_play() == location,
            None => true,
        }
    }
}

/// The invites passing every active filter, in input order.
pub fn filter_invitations<T: Scheduled + Clone>(
    invites: &[T],
    filters: &InviteFilters,
) -> Vec<T> {
    invites
        .iter()
        .filter(|invite| filters.matches(*invite))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use jiff::civil::{date, time};

    fn invite(
        request: Option<&str>,
        status: &str,
        play_time: &[i32],
    ) -> Invite {
        Invite {
            id: None,
            request_id: request.map(RequestId::from),
            skill_rating: Some(3.5),
            place_to_play: "CourtA".into(),
            play_time: PlayTime::new(play_time),
            status: Some(status.to_string().into()),
            players_needed: Some(2),
            event_name: Some("Doubles".into()),
            invitee_name: None,
            invitee_phone_number: None,
        }
    }

    fn key(id: &str) -> Option<RequestId> {
        Some(RequestId::from(id))
    }

    fn group(invites: &[Invite]) -> GroupedInvites {
        group_invites_by_request_id(Some(invites), &TimeZone::UTC)
    }

    #[test]
    fn missing_input_groups_to_nothing() {
        assert!(group_invites_by_request_id(None, &TimeZone::UTC).is_empty());
        assert!(group(&[]).is_empty());
    }

    #[test]
    fn groups_count_statuses() {
        let invites = vec![
            invite(Some("r1"), "PENDING", &[2024, 5, 10, 14, 30]),
            invite(Some("r2"), "ACCEPTED", &[2024, 5, 11, 9, 0]),
            invite(Some("r1"), "ACCEPTED", &[2024, 6, 1, 8, 0]),
            invite(Some("r1"), "DECLINED", &[2024, 6, 1, 8, 0]),
            invite(Some("r1"), "pending", &[2024, 6, 1, 8, 0]),
        ];
        let groups = group(&invites);

        assert_eq!(groups.len(), 2);
        assert_eq!(groups.keys().collect::<Vec<_>>(), [&key("r1"), &key("r2")]);

        let r1 = &groups[&key("r1")];
        assert_eq!((r1.pending, r1.accepted, r1.other_count()), (1, 1, 2));
        assert_eq!(r1.requests.len(), 4);
        assert_eq!(
            r1.requests[2].status,
            Some(InviteStatus::Other("DECLINED".into()))
        );
        // Taken from the first invite only.
        assert_eq!(r1.date, "Fri, May 10, 2:30 PM");
        assert_eq!(r1.date_time_ms, 1_715_351_400_000);
        assert_eq!(r1.players_needed, Some(2));

        let r2 = &groups[&key("r2")];
        assert_eq!((r2.pending, r2.accepted, r2.other_count()), (0, 1, 0));
    }

    #[test]
    fn counts_never_exceed_requests() {
        let statuses =
            ["PENDING", "ACCEPTED", "EXPIRED", "PENDING", "ACCEPTED"];
        let invites: Vec<_> = statuses
            .iter()
            .enumerate()
            .map(|(i, s)| {
                invite(Some(["a", "b"][i % 2]), s, &[2024, 1, 1, 10, 0])
            })
            .collect();
        let groups = group(&invites);
        let total: usize = groups.values().map(|g| g.requests.len()).sum();
        assert_eq!(total, invites.len());
        for group in groups.values() {
            assert!(group.pending + group.accepted <= group.requests.len());
        }
        let b = &groups[&key("b")];
        assert_eq!(b.pending + b.accepted, b.requests.len());
        let a = &groups[&key("a")];
        assert!(a.pending + a.accepted < a.requests.len());
    }

    #[test]
    fn incomplete_play_time_leaves_date_empty() {
        let invites = vec![invite(Some("r1"), "PENDING", &[2024, 5, 10])];
        let groups = group(&invites);
        assert_eq!(groups[&key("r1")].date, "");
        assert_eq!(groups[&key("r1")].date_time_ms, 0);
    }

    #[test]
    fn null_play_time_is_grouped_without_a_date() {
        let invites: Vec<Invite> = serde_json::from_value(serde_json::json!([
            {"requestId": "r1", "placeToPlay": "CourtA",
             "playTime": [2024, 5, 10, 14, 30], "status": "PENDING"},
            {"requestId": "r2", "placeToPlay": "CourtB",
             "playTime": null, "status": "ACCEPTED"}
        ]))
        .unwrap();
        assert!(invites[1].play_time.0.is_empty());

        let groups = group(&invites);
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[&key("r1")].date, "Fri, May 10, 2:30 PM");
        let r2 = &groups[&key("r2")];
        assert_eq!(r2.date, "");
        assert_eq!(r2.date_time_ms, 0);
        assert_eq!(r2.accepted, 1);
    }

    #[test]
    fn missing_request_ids_share_a_bucket() {
        let invites = vec![
            invite(None, "PENDING", &[2024, 5, 10, 14, 30]),
            invite(None, "ACCEPTED", &[2024, 5, 10, 14, 30]),
        ];
        let groups = group(&invites);
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[&None].requests.len(), 2);
    }

    fn grouped() -> GroupedInvites {
        let invites = vec![
            invite(Some("late"), "PENDING", &[2024, 7, 1, 18, 0]),
            invite(Some("early"), "ACCEPTED", &[2024, 5, 1, 8, 0]),
            invite(Some("tie-a"), "ACCEPTED", &[2024, 6, 1, 12, 0]),
            invite(Some("tie-b"), "PENDING", &[2024, 6, 1, 12, 0]),
        ];
        group(&invites)
    }

    fn ids(groups: &GroupedInvites) -> Vec<&str> {
        groups
            .keys()
            .map(|k| k.as_ref().map(|r| r.as_str()).unwrap_or_default())
            .collect()
    }

    #[test]
    fn fulfilled_and_unfulfilled_partition_the_groups() {
        let groups = grouped();
        let fulfilled = filter_and_sort_invites(
            &groups,
            FulfillmentFilter::Fulfilled,
            SortOrder::Ascending,
        );
        let unfulfilled = filter_and_sort_invites(
            &groups,
            FulfillmentFilter::Unfulfilled,
            SortOrder::Ascending,
        );

        assert!(fulfilled.values().all(|g| g.pending == 0));
        assert!(unfulfilled.values().all(|g| g.pending > 0));
        assert_eq!(fulfilled.len() + unfulfilled.len(), groups.len());
        for key in groups.keys() {
            assert!(
                fulfilled.contains_key(key) ^ unfulfilled.contains_key(key)
            );
        }
    }

    #[test]
    fn sorts_by_play_time_keeping_ties_in_order() {
        let groups = grouped();
        let ascending = filter_and_sort_invites(
            &groups,
            FulfillmentFilter::All,
            SortOrder::Ascending,
        );
        assert_eq!(ids(&ascending), ["early", "tie-a", "tie-b", "late"]);

        let descending = filter_and_sort_invites(
            &groups,
            FulfillmentFilter::All,
            SortOrder::Descending,
        );
        assert_eq!(ids(&descending), ["late", "tie-a", "tie-b", "early"]);
        let times: Vec<_> =
            descending.values().map(|g| g.date_time_ms).collect();
        assert!(times.windows(2).all(|w| w[0] >= w[1]));
    }

    #[test]
    fn unknown_filter_strings_mean_all() {
        use FulfillmentFilter::*;
        assert_eq!(FulfillmentFilter::from("FULFILLED"), Fulfilled);
        assert_eq!(FulfillmentFilter::from("UNFULFILLED"), Unfulfilled);
        assert_eq!(FulfillmentFilter::from("fulfilled"), All);
        assert_eq!(FulfillmentFilter::from("ALL"), All);
    }

    #[test]
    fn no_filters_is_identity() {
        let invites =
            vec![invite(Some("r1"), "PENDING", &[2024, 5, 10, 14, 30])];
        let filters = InviteFilters::default();
        assert!(filters.is_empty());
        assert_eq!(filter_invitations(&invites, &filters), invites);
    }

    #[test]
    fn location_filter_is_exact() {
        let invites =
            vec![invite(Some("r1"), "PENDING", &[2024, 5, 10, 14, 30])];
        let mut filters = InviteFilters {
            location: Some("CourtA".into()),
            ..Default::default()
        };
        assert_eq!(filter_invitations(&invites, &filters).len(), 1);

        filters.location = Some("CourtB".into());
        assert!(filter_invitations(&invites, &filters).is_empty());

        filters.location = Some("courta".into());
        assert!(filter_invitations(&invites, &filters).is_empty());

        filters.location = Some(String::new());
        assert_eq!(filter_invitations(&invites, &filters).len(), 1);
    }

    #[test]
    fn date_and_time_filters_check_their_own_dimension() {
        let invites = vec![
            invite(Some("a"), "PENDING", &[2024, 5, 10, 14, 30]),
            invite(Some("b"), "PENDING", &[2024, 5, 11, 14, 30]),
            invite(Some("c"), "PENDING", &[2024, 5, 10, 9, 0]),
            invite(Some("d"), "PENDING", &[2024, 5, 10]),
        ];

        let by_date = InviteFilters {
            date: Some(date(2024, 5, 10)),
            ..Default::default()
        };
        let matched: Vec<_> = filter_invitations(&invites, &by_date)
            .into_iter()
            .map(|i| i.request_id.unwrap().0)
            .collect();
        assert_eq!(matched, ["a", "c", "d"]);

        let by_time = InviteFilters {
            time: Some(time(14, 30, 45, 0)),
            ..Default::default()
        };
        let matched: Vec<_> = filter_invitations(&invites, &by_time)
            .into_iter()
            .map(|i| i.request_id.unwrap().0)
            .collect();
        assert_eq!(matched, ["a", "b"]);

        let mut both = InviteFilters {
            date: Some(date(2024, 5, 10)),
            time: Some(time(14, 30, 0, 0)),
            location: Some("CourtA".into()),
        };
        assert_eq!(filter_invitations(&invites, &both).len(), 1);

        both.clear();
        assert_eq!(filter_invitations(&invites, &both).len(), 4);
    }
}
