//! Login and registration pages.

use super::state::{LoginFormState, RegisterFormState};
use crate::app::Route;
use crate::app::api::use_api;
use crate::components::{MessageLine, TextField};
use crate::core::api::FIELDS_REQUIRED;
use crate::core::error::Outcome;
use crate::core::message::MessageState;
use crate::core::role::affordance_role;
use crate::core::session::Session;
use crate::core::store::AppStore;
use yew::platform::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::Dispatch;

/// Mirror a fresh session into the store and go home, or show the failure.
fn finish_sign_in(
    outcome: Outcome<Session>,
    message: &UseStateHandle<MessageState>,
    navigator: Option<&Navigator>,
) {
    match outcome {
        Ok(session) => {
            let affordance = affordance_role(&session);
            Dispatch::<AppStore>::new().reduce_mut(|store| store.sign_in(affordance));
            if let Some(navigator) = navigator {
                navigator.push(&Route::Home);
            }
        }
        Err(err) => message.set(MessageState::from_error(&err)),
    }
}

fn field_setter<S: Clone + 'static>(
    form: &UseStateHandle<S>,
    assign: fn(&mut S, String),
) -> Callback<String> {
    let form = form.clone();
    Callback::from(move |value: String| {
        let mut next = (*form).clone();
        assign(&mut next, value);
        form.set(next);
    })
}

#[function_component(LoginPage)]
pub(crate) fn login_page() -> Html {
    let api = use_api();
    let navigator = use_navigator();
    let form = use_state(LoginFormState::default);
    let message = use_state(MessageState::default);
    let busy = use_state(|| false);

    let onsubmit = {
        let form = form.clone();
        let message = message.clone();
        let busy = busy.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let values = (*form).clone();
            if !values.is_complete() {
                message.set(MessageState::error(FIELDS_REQUIRED));
                return;
            }
            let message = message.clone();
            let busy = busy.clone();
            let navigator = navigator.clone();
            let api = api.clone();
            busy.set(true);
            spawn_local(async move {
                let outcome = api
                    .authenticate(&values.email, &values.password)
                    .await;
                busy.set(false);
                finish_sign_in(outcome, &message, navigator.as_ref());
            });
        })
    };

    html! {
        <form class="card auth-form" {onsubmit}>
            <h2>{"Login"}</h2>
            <TextField
                label="Email"
                input_type="email"
                value={form.email.clone()}
                on_input={field_setter(&form, |f: &mut LoginFormState, v| f.email = v)}
            />
            <TextField
                label="Password"
                input_type="password"
                value={form.password.clone()}
                on_input={field_setter(&form, |f: &mut LoginFormState, v| f.password = v)}
            />
            <button class="btn" type="submit" disabled={*busy}>
                {"Login"}
            </button>
            <MessageLine message={(*message).clone()} />
            <p class="muted">
                {"No account? "}
                <Link<Route> to={Route::Register}>{"Register"}</Link<Route>>
            </p>
        </form>
    }
}

#[function_component(RegisterPage)]
pub(crate) fn register_page() -> Html {
    let api = use_api();
    let navigator = use_navigator();
    let form = use_state(RegisterFormState::default);
    let message = use_state(MessageState::default);
    let busy = use_state(|| false);

    let onsubmit = {
        let form = form.clone();
        let message = message.clone();
        let busy = busy.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let values = (*form).clone();
            if !values.is_complete() {
                message.set(MessageState::error(FIELDS_REQUIRED));
                return;
            }
            let message = message.clone();
            let busy = busy.clone();
            let navigator = navigator.clone();
            let api = api.clone();
            busy.set(true);
            spawn_local(async move {
                let outcome = api
                    .register(&values.username, &values.email, &values.password)
                    .await;
                busy.set(false);
                finish_sign_in(outcome, &message, navigator.as_ref());
            });
        })
    };

    html! {
        <form class="card auth-form" {onsubmit}>
            <h2>{"Register"}</h2>
            <TextField
                label="Username"
                value={form.username.clone()}
                on_input={field_setter(&form, |f: &mut RegisterFormState, v| f.username = v)}
            />
            <TextField
                label="Email"
                input_type="email"
                value={form.email.clone()}
                on_input={field_setter(&form, |f: &mut RegisterFormState, v| f.email = v)}
            />
            <TextField
                label="Password"
                input_type="password"
                value={form.password.clone()}
                on_input={field_setter(&form, |f: &mut RegisterFormState, v| f.password = v)}
            />
            <button class="btn" type="submit" disabled={*busy}>
                {"Register"}
            </button>
            <MessageLine message={(*message).clone()} />
            <p class="muted">
                {"Already registered? "}
                <Link<Route> to={Route::Login}>{"Login"}</Link<Route>>
            </p>
        </form>
    }
}
