use payloads::RequestStatus;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct MutationStatusProps {
    pub status: RequestStatus,
    pub error: Option<String>,
    #[prop_or_default]
    pub success_text: Option<AttrValue>,
}

/// Inline feedback for the most recent write a form made.
#[function_component]
pub fn MutationStatus(props: &MutationStatusProps) -> Html {
    match (props.status, &props.error) {
        (RequestStatus::Loading, _) => html! {
            <p class="text-sm text-neutral-600 dark:text-neutral-400">{"Saving..."}</p>
        },
        (RequestStatus::Error, Some(error)) => html! {
            <div class="p-3 rounded-md bg-red-50 dark:bg-red-900/20 border border-red-200 dark:border-red-800">
                <p class="text-sm text-red-700 dark:text-red-400">{error}</p>
            </div>
        },
        (RequestStatus::Success, _) => match &props.success_text {
            Some(text) => html! {
                <p class="text-sm text-green-700 dark:text-green-400">{text}</p>
            },
            None => html! {},
        },
        _ => html! {},
    }
}
