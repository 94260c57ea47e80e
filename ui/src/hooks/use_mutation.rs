use payloads::resource::{Generation, GenerationCounter};
use payloads::{ClientError, MutationState, RequestStatus, ResourceKey};
use std::future::Future;
use std::rc::Rc;
use yew::prelude::*;
use yewdux::prelude::*;

use crate::State;

/// Optional callbacks for one trigger of a mutation.
pub struct MutationCallbacks<T> {
    pub on_success: Option<Callback<T>>,
    pub on_error: Option<Callback<String>>,
}

impl<T> Default for MutationCallbacks<T> {
    fn default() -> Self {
        Self {
            on_success: None,
            on_error: None,
        }
    }
}

impl<T> MutationCallbacks<T> {
    pub fn on_success(mut self, callback: Callback<T>) -> Self {
        self.on_success = Some(callback);
        self
    }

    pub fn on_error(mut self, callback: Callback<String>) -> Self {
        self.on_error = Some(callback);
        self
    }
}

pub struct MutationHookReturn<I, T> {
    pub status: RequestStatus,
    pub error: Option<String>,
    pub trigger: Callback<(I, MutationCallbacks<T>)>,
}

impl<I, T> MutationHookReturn<I, T> {
    pub fn is_loading(&self) -> bool {
        self.status.is_loading()
    }
}

enum MutationAction {
    Begin(Generation),
    Finish(Generation, Option<String>),
}

#[derive(Default)]
struct MutationReducer(MutationState);

impl Reducible for MutationReducer {
    type Action = MutationAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut state = self.0.clone();
        match action {
            MutationAction::Begin(generation) => state.begin(generation),
            MutationAction::Finish(generation, error) => {
                if !state.finish(generation, error) {
                    return self;
                }
            }
        }
        Rc::new(Self(state))
    }
}

/// Generic write hook.
///
/// Each trigger issues exactly one request. On success every key in
/// `invalidates` is bumped in the global store, which makes the resource
/// hooks reading those keys fetch again. Every trigger gets its own
/// `on_success` or `on_error`; `status` and `error` follow the most recent
/// trigger only.
#[hook]
pub fn use_mutation<I, T, F, Fut>(
    invalidates: Vec<ResourceKey>,
    mutate_fn: F,
) -> MutationHookReturn<I, T>
where
    I: 'static,
    T: 'static,
    F: Fn(I) -> Fut + 'static,
    Fut: Future<Output = Result<T, ClientError>> + 'static,
{
    let state = use_reducer(MutationReducer::default);
    let generations = use_mut_ref(GenerationCounter::default);
    let dispatch = use_dispatch::<State>();
    let mutate_fn = Rc::new(mutate_fn);

    let trigger = {
        let dispatcher = state.dispatcher();
        Callback::from(
            move |(input, callbacks): (I, MutationCallbacks<T>)| {
                let generation = generations.borrow().next();
                dispatcher.dispatch(MutationAction::Begin(generation));

                let request = mutate_fn(input);
                let dispatcher = dispatcher.clone();
                let generations = generations.clone();
                let dispatch = dispatch.clone();
                let invalidates = invalidates.clone();

                yew::platform::spawn_local(async move {
                    let result = request.await;
                    if result.is_ok() && !invalidates.is_empty() {
                        dispatch.reduce_mut(|state| {
                            state.invalidations.invalidate_all(invalidates)
                        });
                    }

                    let error = result.as_ref().err().map(|e| {
                        tracing::error!("mutation failed: {e}");
                        e.message()
                    });
                    if !generations.borrow().is_latest(generation) {
                        tracing::debug!("superseded mutation {generation:?}");
                    }
                    dispatcher
                        .dispatch(MutationAction::Finish(generation, error));

                    match result {
                        Ok(value) => {
                            if let Some(on_success) = callbacks.on_success {
                                on_success.emit(value);
                            }
                        }
                        Err(e) => {
                            if let Some(on_error) = callbacks.on_error {
                                on_error.emit(e.message());
                            }
                        }
                    }
                });
            },
        )
    };

    MutationHookReturn {
        status: state.0.status,
        error: state.0.error.clone(),
        trigger,
    }
}
