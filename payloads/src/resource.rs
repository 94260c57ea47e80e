//! Status tracking for read (resource) and write (mutation) requests.
//!
//! Each hook instance owns one state value. Every request it issues is
//! tagged with a [`Generation`]; a response only lands if its generation is
//! still the most recent one begun, so a slow response can never overwrite
//! the result of a newer request.

use std::cell::{Cell, RefCell};
use std::future::Future;
use std::rc::Rc;
use std::time::Duration;

use crate::ClientError;

/// How often the live-updates screen re-fetches club bookings.
pub const LIVE_UPDATES_POLL_INTERVAL: Duration = Duration::from_secs(10);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RequestStatus {
    /// No request has been issued, usually because a required parameter
    /// is missing.
    #[default]
    Idle,
    Loading,
    Success,
    Error,
}

impl RequestStatus {
    pub fn is_loading(self) -> bool {
        self == Self::Loading
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Generation(u64);

/// Issues increasing generations for one hook instance.
#[derive(Debug, Default)]
pub struct GenerationCounter(Cell<u64>);

impl GenerationCounter {
    pub fn next(&self) -> Generation {
        let next = self.0.get() + 1;
        self.0.set(next);
        Generation(next)
    }

    pub fn is_latest(&self, generation: Generation) -> bool {
        self.0.get() == generation.0
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ResourceState<T> {
    /// Last successfully fetched value. Kept across a failed refetch.
    pub data: Option<T>,
    pub status: RequestStatus,
    pub error: Option<String>,
    latest: Generation,
}

impl<T> Default for ResourceState<T> {
    fn default() -> Self {
        Self {
            data: None,
            status: RequestStatus::Idle,
            error: None,
            latest: Generation::default(),
        }
    }
}

impl<T> ResourceState<T> {
    pub fn begin(&mut self, generation: Generation) {
        self.latest = generation;
        self.status = RequestStatus::Loading;
        self.error = None;
    }

    /// Apply the outcome of the request tagged `generation`. Returns false
    /// (leaving the state untouched) if a newer request has begun since.
    pub fn settle(
        &mut self,
        generation: Generation,
        result: Result<T, ClientError>,
    ) -> bool {
        if generation != self.latest {
            tracing::debug!(
                "dropping stale response {generation:?}, latest is {:?}",
                self.latest
            );
            return false;
        }
        match result {
            Ok(data) => {
                self.data = Some(data);
                self.status = RequestStatus::Success;
                self.error = None;
            }
            Err(e) => {
                tracing::error!("request failed: {e}");
                self.status = RequestStatus::Error;
                self.error = Some(e.message());
            }
        }
        true
    }

    /// Return to idle, e.g. when a required parameter disappears.
    /// Requests begun before `generation` will no longer settle.
    pub fn reset(&mut self, generation: Generation) {
        *self = Self {
            latest: generation,
            ..Self::default()
        };
    }

    /// Stop waiting for whatever is in flight, keeping any data.
    pub fn abandon(&mut self, generation: Generation) {
        self.latest = generation;
        if self.is_loading() {
            self.status = if self.data.is_some() {
                RequestStatus::Success
            } else {
                RequestStatus::Idle
            };
        }
    }

    pub fn is_loading(&self) -> bool {
        self.status.is_loading()
    }

    pub fn is_initial_loading(&self) -> bool {
        self.is_loading() && self.data.is_none()
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct MutationState {
    pub status: RequestStatus,
    pub error: Option<String>,
    latest: Generation,
}

impl MutationState {
    pub fn begin(&mut self, generation: Generation) {
        self.latest = generation;
        self.status = RequestStatus::Loading;
        self.error = None;
    }

    /// Record the outcome of the trigger tagged `generation`. Only the most
    /// recent trigger is reflected in the status.
    pub fn settle<T>(
        &mut self,
        generation: Generation,
        result: &Result<T, ClientError>,
    ) -> bool {
        let error = result.as_ref().err().map(|e| {
            tracing::error!("mutation failed: {e}");
            e.message()
        });
        self.finish(generation, error)
    }

    /// Like [`MutationState::settle`] with the outcome reduced to its
    /// user-facing error message.
    pub fn finish(
        &mut self,
        generation: Generation,
        error: Option<String>,
    ) -> bool {
        if generation != self.latest {
            return false;
        }
        self.status = match error {
            None => RequestStatus::Success,
            Some(_) => RequestStatus::Error,
        };
        self.error = error;
        true
    }
}

/// Single-threaded driver around [`ResourceState`] for code that is not
/// running inside a component, and for tests.
pub struct ResourceCell<T> {
    state: Rc<RefCell<ResourceState<T>>>,
    generations: Rc<GenerationCounter>,
}

impl<T> Clone for ResourceCell<T> {
    fn clone(&self) -> Self {
        Self {
            state: self.state.clone(),
            generations: self.generations.clone(),
        }
    }
}

impl<T> Default for ResourceCell<T> {
    fn default() -> Self {
        Self {
            state: Rc::new(RefCell::new(ResourceState::default())),
            generations: Rc::new(GenerationCounter::default()),
        }
    }
}

impl<T: Clone> ResourceCell<T> {
    pub fn snapshot(&self) -> ResourceState<T> {
        self.state.borrow().clone()
    }

    /// Fetch with `params`, or go idle without any request when a required
    /// parameter is missing.
    ///
    /// Returns whether this call's result was applied.
    pub async fn fetch<P, F, Fut>(&self, params: Option<P>, fetch_fn: F) -> bool
    where
        F: FnOnce(P) -> Fut,
        Fut: Future<Output = Result<T, ClientError>>,
    {
        let Some(params) = params else {
            self.state.borrow_mut().reset(self.generations.next());
            return false;
        };

        let generation = self.generations.next();
        self.state.borrow_mut().begin(generation);
        let result = fetch_fn(params).await;
        self.state.borrow_mut().settle(generation, result)
    }

    /// Discard whatever is in flight, as on unmount.
    pub fn cancel(&self) {
        self.state.borrow_mut().abandon(self.generations.next());
    }
}

/// Single-threaded driver around [`MutationState`].
#[derive(Default)]
pub struct MutationCell {
    state: RefCell<MutationState>,
    generations: GenerationCounter,
}

impl MutationCell {
    pub fn snapshot(&self) -> MutationState {
        self.state.borrow().clone()
    }

    /// Run one side-effecting request and invoke exactly one of its
    /// callbacks. The callbacks belong to this call and always run; only
    /// the status and error are reserved for the most recent trigger.
    pub async fn run<T, Fut>(
        &self,
        request: Fut,
        on_success: impl FnOnce(T),
        on_error: impl FnOnce(String),
    ) where
        Fut: Future<Output = Result<T, ClientError>>,
    {
        let generation = self.generations.next();
        self.state.borrow_mut().begin(generation);
        let result = request.await;
        self.state.borrow_mut().settle(generation, &result);
        match result {
            Ok(value) => on_success(value),
            Err(e) => on_error(e.message()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::StatusCode;

    fn server_error() -> ClientError {
        ClientError::APIError(StatusCode::INTERNAL_SERVER_ERROR, "boom".into())
    }

    #[test]
    fn starts_idle() {
        let state = ResourceState::<u32>::default();
        assert_eq!(state.status, RequestStatus::Idle);
        assert!(state.data.is_none());
        assert!(state.error.is_none());
    }

    #[test]
    fn success_then_failed_refetch_keeps_data() {
        let counter = GenerationCounter::default();
        let mut state = ResourceState::default();

        let first = counter.next();
        state.begin(first);
        assert!(state.is_initial_loading());
        assert!(state.settle(first, Ok(vec![1, 2])));
        assert_eq!(state.status, RequestStatus::Success);

        let second = counter.next();
        state.begin(second);
        assert!(state.is_loading());
        assert!(!state.is_initial_loading());
        assert!(state.settle(second, Err(server_error())));
        assert_eq!(state.status, RequestStatus::Error);
        assert_eq!(state.error.as_deref(), Some("boom"));
        assert_eq!(state.data, Some(vec![1, 2]));
    }

    #[test]
    fn begin_clears_previous_error() {
        let counter = GenerationCounter::default();
        let mut state = ResourceState::<u32>::default();
        let g = counter.next();
        state.begin(g);
        state.settle(g, Err(server_error()));

        state.begin(counter.next());
        assert!(state.error.is_none());
        assert_eq!(state.status, RequestStatus::Loading);
    }

    #[test]
    fn stale_responses_are_dropped() {
        let counter = GenerationCounter::default();
        let mut state = ResourceState::default();

        let older = counter.next();
        state.begin(older);
        let newer = counter.next();
        state.begin(newer);

        assert!(state.settle(newer, Ok("new")));
        assert!(!state.settle(older, Ok("old")));
        assert_eq!(state.data, Some("new"));
        assert_eq!(state.status, RequestStatus::Success);
    }

    #[test]
    fn reset_returns_to_idle_and_ignores_in_flight() {
        let counter = GenerationCounter::default();
        let mut state = ResourceState::default();
        let g = counter.next();
        state.begin(g);
        state.settle(g, Ok(5));

        let in_flight = counter.next();
        state.begin(in_flight);
        state.reset(counter.next());
        assert_eq!(state.status, RequestStatus::Idle);
        assert!(state.data.is_none());

        assert!(!state.settle(in_flight, Ok(7)));
        assert!(state.data.is_none());
    }

    #[test]
    fn abandon_keeps_data() {
        let counter = GenerationCounter::default();
        let mut state = ResourceState::default();
        let g = counter.next();
        state.begin(g);
        state.settle(g, Ok(5));

        let in_flight = counter.next();
        state.begin(in_flight);
        state.abandon(counter.next());
        assert_eq!(state.status, RequestStatus::Success);
        assert!(!state.settle(in_flight, Ok(7)));
        assert_eq!(state.data, Some(5));
    }

    #[test]
    fn mutation_tracks_latest_trigger_only() {
        let counter = GenerationCounter::default();
        let mut state = MutationState::default();

        let first = counter.next();
        state.begin(first);
        let second = counter.next();
        state.begin(second);

        assert!(state.settle(second, &Err::<(), _>(server_error())));
        assert!(!state.settle(first, &Ok(())));
        assert_eq!(state.status, RequestStatus::Error);
        assert_eq!(state.error.as_deref(), Some("boom"));
    }
}
