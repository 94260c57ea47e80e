use payloads::resource::{Generation, GenerationCounter};
use payloads::{ClientError, RequestStatus, ResourceKey, ResourceState};
use std::future::Future;
use std::rc::Rc;
use yew::prelude::*;
use yewdux::prelude::*;

use crate::State;

/// What a resource hook hands to its component.
pub struct ResourceHookReturn<T> {
    /// Last successful value; survives a failed refetch.
    pub data: Option<T>,
    pub status: RequestStatus,
    pub error: Option<String>,
    pub refetch: Callback<()>,
}

impl<T> ResourceHookReturn<T> {
    pub fn is_loading(&self) -> bool {
        self.status.is_loading()
    }

    /// Loading with nothing to show yet.
    pub fn is_initial_loading(&self) -> bool {
        self.is_loading() && self.data.is_none()
    }

    /// Render based on fetch state with contextual loading/error messages.
    ///
    /// `render_fn` receives the data, whether a refetch is in progress, and
    /// the error of a failed refetch (the previous data is still shown).
    pub fn render<F>(&self, context: &str, render_fn: F) -> Html
    where
        F: Fn(&T, bool, Option<&String>) -> Html,
    {
        match (&self.data, self.status) {
            (Some(data), _) => {
                render_fn(data, self.is_loading(), self.error.as_ref())
            }
            (None, RequestStatus::Idle) => html! {},
            (None, RequestStatus::Loading) => html! {
                <div class="text-center py-12">
                    <p class="text-neutral-600 dark:text-neutral-400">
                        {format!("Loading {context}...")}
                    </p>
                </div>
            },
            (None, RequestStatus::Error | RequestStatus::Success) => html! {
                <div class="p-4 rounded-md bg-red-50 \
                           dark:bg-red-900/20 border \
                           border-red-200 dark:border-red-800">
                    <p class="text-sm text-red-700 dark:text-red-400">
                        {format!(
                            "Error loading {context}: {}",
                            self.error.as_deref().unwrap_or("Unknown error")
                        )}
                    </p>
                </div>
            },
        }
    }
}

pub(super) enum ResourceAction<T> {
    Begin(Generation),
    Settle(Generation, Result<T, ClientError>),
    Reset(Generation),
    Abandon(Generation),
}

pub(super) struct ResourceReducer<T>(ResourceState<T>);

impl<T> Default for ResourceReducer<T> {
    fn default() -> Self {
        Self(ResourceState::default())
    }
}

impl<T: Clone> Reducible for ResourceReducer<T> {
    type Action = ResourceAction<T>;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut state = self.0.clone();
        match action {
            ResourceAction::Begin(generation) => state.begin(generation),
            ResourceAction::Settle(generation, result) => {
                if !state.settle(generation, result) {
                    return self;
                }
            }
            ResourceAction::Reset(generation) => state.reset(generation),
            ResourceAction::Abandon(generation) => state.abandon(generation),
        }
        Rc::new(Self(state))
    }
}

/// Counts refetch requests so each one re-runs the fetch effect.
#[derive(Default)]
struct Refetches(u64);

impl Reducible for Refetches {
    type Action = ();

    fn reduce(self: Rc<Self>, _: ()) -> Rc<Self> {
        Rc::new(Self(self.0 + 1))
    }
}

/// Generic read hook.
///
/// Fetches whenever `params` change, `refetch` is called, or a mutation
/// invalidates `key`. While `params` is `None` no request is made and the
/// status is `Idle`. Only the most recently issued request may update the
/// state; anything in flight when the component unmounts is ignored.
///
/// # Example
///
/// ```rust,ignore
/// #[hook]
/// pub fn use_club_courts(
///     club_id: Option<ClubId>,
/// ) -> ResourceHookReturn<Vec<Court>> {
///     let key = club_id.clone().map(ResourceKey::ClubCourts);
///     use_resource(club_id, key, |club_id| async move {
///         get_api_client().get_club_courts(&club_id).await
///     })
/// }
/// ```
#[hook]
pub fn use_resource<T, P, F, Fut>(
    params: Option<P>,
    key: Option<ResourceKey>,
    fetch_fn: F,
) -> ResourceHookReturn<T>
where
    T: Clone + 'static,
    P: PartialEq + Clone + 'static,
    F: Fn(P) -> Fut + 'static,
    Fut: Future<Output = Result<T, ClientError>> + 'static,
{
    let state = use_reducer(ResourceReducer::<T>::default);
    let generations = use_mut_ref(GenerationCounter::default);
    let refetches = use_reducer(Refetches::default);
    let store = use_store_value::<State>();
    let version = key.as_ref().map(|key| store.version(key));

    {
        let dispatcher = state.dispatcher();
        use_effect_with((params, version, refetches.0), move |(params, _, _)| {
            let generation = generations.borrow().next();
            match params.clone() {
                None => dispatcher.dispatch(ResourceAction::Reset(generation)),
                Some(params) => {
                    dispatcher.dispatch(ResourceAction::Begin(generation));
                    let request = fetch_fn(params);
                    let dispatcher = dispatcher.clone();
                    yew::platform::spawn_local(async move {
                        let result = request.await;
                        let settle = ResourceAction::Settle(generation, result);
                        dispatcher.dispatch(settle);
                    });
                }
            }

            // Runs before the next fetch and on unmount.
            move || {
                let generation = generations.borrow().next();
                dispatcher.dispatch(ResourceAction::Abandon(generation));
            }
        });
    }

    let refetch = {
        let refetches = refetches.dispatcher();
        Callback::from(move |_| refetches.dispatch(()))
    };

    ResourceHookReturn {
        data: state.0.data.clone(),
        status: state.0.status,
        error: state.0.error.clone(),
        refetch,
    }
}
