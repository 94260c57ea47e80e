use gloo_timers::callback::Interval;
use payloads::{ClientError, ResourceKey};
use std::future::Future;
use std::time::Duration;
use yew::prelude::*;

use super::{ResourceHookReturn, use_resource};

/// Effect dependencies of the polling interval. Any change, including one
/// set of params replacing another, restarts the interval.
#[derive(Debug, Clone, PartialEq)]
struct PollSchedule<P> {
    params: Option<P>,
    millis: u32,
}

impl<P> PollSchedule<P> {
    fn new(params: Option<P>, period: Duration) -> Self {
        Self {
            params,
            millis: u32::try_from(period.as_millis()).unwrap_or(u32::MAX),
        }
    }

    fn is_active(&self) -> bool {
        self.params.is_some()
    }
}

/// [`use_resource`] that additionally refetches every `period` while
/// mounted and `params` is present. The interval is dropped on unmount
/// and restarted when `params` change.
#[hook]
pub fn use_polling_resource<T, P, F, Fut>(
    params: Option<P>,
    key: Option<ResourceKey>,
    period: Duration,
    fetch_fn: F,
) -> ResourceHookReturn<T>
where
    T: Clone + 'static,
    P: PartialEq + Clone + 'static,
    F: Fn(P) -> Fut + 'static,
    Fut: Future<Output = Result<T, ClientError>> + 'static,
{
    let resource = use_resource(params.clone(), key, fetch_fn);

    {
        let refetch = resource.refetch.clone();
        use_effect_with(PollSchedule::new(params, period), move |schedule| {
            let millis = schedule.millis;
            let interval = schedule.is_active().then(|| {
                tracing::debug!("polling every {millis}ms");
                Interval::new(millis, move || refetch.emit(()))
            });

            move || drop(interval)
        });
    }

    resource
}

#[cfg(test)]
mod tests {
    use super::*;
    use payloads::ClubId;

    #[test]
    fn switching_params_restarts_the_interval() {
        let period = Duration::from_secs(10);
        let c1 = PollSchedule::new(Some(ClubId::from("c1")), period);
        let c2 = PollSchedule::new(Some(ClubId::from("c2")), period);

        assert!(c1.is_active() && c2.is_active());
        assert_ne!(c1, c2);
        assert_eq!(c1, PollSchedule::new(Some(ClubId::from("c1")), period));
        assert_eq!(c1.millis, 10_000);
    }

    #[test]
    fn no_params_means_no_polling() {
        let idle = PollSchedule::<ClubId>::new(None, Duration::from_secs(10));
        assert!(!idle.is_active());
    }

    #[test]
    fn long_periods_saturate() {
        let schedule =
            PollSchedule::new(Some(()), Duration::from_secs(u64::MAX / 1000));
        assert_eq!(schedule.millis, u32::MAX);
    }
}
