//! Status line rendered above a fetched list.

use crate::core::paging::ListStatus;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct PageStatusProps {
    pub status: ListStatus,
    /// Text shown once a fetch has succeeded with no items.
    pub empty: AttrValue,
}

#[function_component(PageStatus)]
pub(crate) fn page_status(props: &PageStatusProps) -> Html {
    match &props.status {
        ListStatus::Idle | ListStatus::Populated => html! {},
        ListStatus::Loading => html! { <p class="muted" aria-busy="true">{"Loading..."}</p> },
        ListStatus::Failed(message) => html! { <p class="error-text">{message.clone()}</p> },
        ListStatus::Empty => html! { <p class="empty-state">{props.empty.clone()}</p> },
    }
}
