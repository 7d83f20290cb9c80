//! Previous/next controls for paged lists.

use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct PagerProps {
    /// Zero-based page index.
    pub page: u32,
    pub has_previous: bool,
    /// Disables both buttons while a fetch is in flight.
    #[prop_or_default]
    pub busy: bool,
    pub on_prev: Callback<()>,
    pub on_next: Callback<()>,
}

#[function_component(Pager)]
pub(crate) fn pager(props: &PagerProps) -> Html {
    let prev = {
        let on_prev = props.on_prev.clone();
        Callback::from(move |_: MouseEvent| on_prev.emit(()))
    };
    let next = {
        let on_next = props.on_next.clone();
        Callback::from(move |_: MouseEvent| on_next.emit(()))
    };
    html! {
        <div class="pager">
            <button class="btn" onclick={prev} disabled={props.busy || !props.has_previous}>
                {"Previous"}
            </button>
            <span class="pager-page">{format!("Page {}", props.page + 1)}</span>
            <button class="btn" onclick={next} disabled={props.busy}>{"Next"}</button>
        </div>
    }
}
