//! Reminders page (non-administrators only).

use super::state::{NO_REMINDERS, ReminderCard, USERS_ONLY, may_view, reminders_controller};
use crate::app::api::use_api;
use crate::app::paging::use_paged;
use crate::components::{MessageLine, PageStatus};
use crate::core::message::MessageState;
use crate::core::role::authoritative_role;
use crate::core::time::now;
use crate::core::urgency::URGENT_NOTICE;
use yew::platform::spawn_local;
use yew::prelude::*;

#[function_component(RemindersPage)]
pub(crate) fn reminders_page() -> Html {
    let api = use_api();
    let allowed = use_state(|| None as Option<bool>);
    let message = use_state(MessageState::default);
    let reminders = use_paged(api.clone(), reminders_controller);

    {
        let allowed = allowed.clone();
        let message = message.clone();
        let reminders = reminders.clone();
        use_effect_with_deps(
            move |_| {
                spawn_local(async move {
                    match authoritative_role(&*api).await {
                        Ok(role) => {
                            let permitted = may_view(&role);
                            allowed.set(Some(permitted));
                            if permitted {
                                reminders.load();
                            }
                        }
                        Err(err) => message.set(MessageState::from_error(&err)),
                    }
                });
                || ()
            },
            (),
        );
    }

    let body = match *allowed {
        None => html! { <p class="muted">{"Loading..."}</p> },
        Some(false) => html! { <p class="error-text">{USERS_ONLY}</p> },
        Some(true) => {
            let state = reminders.state();
            let at = now();
            html! {
                <>
                    <PageStatus status={state.status()} empty={NO_REMINDERS} />
                    <div class="reminder-list">
                        {for state.items.iter().map(|reminder| render_card(&ReminderCard::new(reminder, at)))}
                    </div>
                </>
            }
        }
    };

    html! {
        <section class="reminders">
            <h2>{"Reminders"}</h2>
            <MessageLine message={(*message).clone()} />
            {body}
        </section>
    }
}

fn render_card(card: &ReminderCard) -> Html {
    html! {
        <article key={card.rental_id} class={classes!("card", "reminder", card.urgent.then_some("urgent"))}>
            <h4>{&card.title}</h4>
            <p>{format!("Due: {}", card.due_date)}</p>
            <p class="muted">{format!("Rented: {}", card.rented_at)}</p>
            {if card.urgent {
                html! { <p class="urgent-notice">{URGENT_NOTICE}</p> }
            } else {
                html! {}
            }}
        </article>
    }
}
