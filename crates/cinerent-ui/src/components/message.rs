//! Inline success/error line shown under forms and lists.

use crate::core::message::MessageState;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct MessageLineProps {
    pub message: MessageState,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(MessageLine)]
pub(crate) fn message_line(props: &MessageLineProps) -> Html {
    if props.message.is_empty() {
        return html! {};
    }
    let tone = if props.message.is_error {
        "message-error"
    } else {
        "message-success"
    };
    html! {
        <p class={classes!("message", tone, props.class.clone())} role="status" aria-live="polite">
            {props.message.text.clone()}
        </p>
    }
}
