//! User details page (administrators only).

use super::state::{ADMINS_ONLY, AccountEdit, may_view_details, updated_message};
use crate::app::api::use_api;
use crate::app::paging::use_paged;
use crate::components::{MessageLine, TextField};
use crate::core::message::MessageState;
use crate::core::role::authoritative_role;
use crate::features::rentals::state::{RentalSource, user_history};
use crate::features::rentals::view::RentalHistory;
use cinerent_api_models::{Role, UserProfile};
use web_sys::HtmlSelectElement;
use yew::platform::spawn_local;
use yew::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Access {
    Checking,
    Granted,
    Denied,
}

#[derive(Properties, PartialEq)]
pub(crate) struct UserDetailsProps {
    pub email: String,
}

#[function_component(UserDetailsPage)]
pub(crate) fn user_details_page(props: &UserDetailsProps) -> Html {
    let api = use_api();
    let access = use_state(|| Access::Checking);
    let target = use_state(|| None as Option<UserProfile>);
    let edit = use_state(AccountEdit::default);
    let message = use_state(MessageState::default);
    let history = {
        let email = props.email.clone();
        let config = api.client().config().clone();
        use_paged(api.clone(), move || user_history(&email, &config))
    };

    {
        let api = api.clone();
        let access = access.clone();
        let target = target.clone();
        let message = message.clone();
        let history = history.clone();
        use_effect_with_deps(
            move |email: &String| {
                let email = email.clone();
                spawn_local(async move {
                    let role = match authoritative_role(&*api).await {
                        Ok(role) => role,
                        Err(err) => {
                            message.set(MessageState::from_error(&err));
                            return;
                        }
                    };
                    if !may_view_details(&role) {
                        access.set(Access::Denied);
                        return;
                    }
                    access.set(Access::Granted);
                    history.load();
                    match api.user_by_email(&email).await {
                        Ok(profile) => target.set(Some(profile)),
                        Err(err) => message.set(MessageState::from_error(&err)),
                    }
                });
                || ()
            },
            props.email.clone(),
        );
    }

    match *access {
        Access::Denied => {
            return html! { <p class="error-text">{ADMINS_ONLY}</p> };
        }
        Access::Checking => {
            return html! {
                <>
                    <p class="muted">{"Loading..."}</p>
                    <MessageLine message={(*message).clone()} />
                </>
            };
        }
        Access::Granted => {}
    }

    let onsubmit = {
        let api = api.clone();
        let email = props.email.clone();
        let edit = edit.clone();
        let target = target.clone();
        let message = message.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let api = api.clone();
            let email = email.clone();
            let values = (*edit).clone();
            let edit = edit.clone();
            let target = target.clone();
            let message = message.clone();
            spawn_local(async move {
                let (name, password, role) = values.arguments();
                match api.update_user(&email, name, password, role).await {
                    Ok(updated) => {
                        target.set(Some(updated));
                        edit.set(AccountEdit::default());
                        message.set(MessageState::success(updated_message(&email)));
                    }
                    Err(err) => message.set(MessageState::from_error(&err)),
                }
            });
        })
    };

    let set_name = {
        let edit = edit.clone();
        Callback::from(move |name: String| {
            edit.set(AccountEdit {
                name,
                ..(*edit).clone()
            });
        })
    };
    let set_password = {
        let edit = edit.clone();
        Callback::from(move |password: String| {
            edit.set(AccountEdit {
                password,
                ..(*edit).clone()
            });
        })
    };
    let set_role = {
        let edit = edit.clone();
        Callback::from(move |e: Event| {
            if let Some(select) = e.target_dyn_into::<HtmlSelectElement>() {
                edit.set(AccountEdit {
                    role: Role::from_wire(&select.value()),
                    ..(*edit).clone()
                });
            }
        })
    };

    html! {
        <section class="user-details">
            <h2>{format!("User {}", props.email)}</h2>
            {(*target).clone().map(|profile| html! {
                <dl class="profile-details">
                    <dt>{"Name"}</dt><dd>{profile.name}</dd>
                    <dt>{"Email"}</dt><dd>{profile.email}</dd>
                    <dt>{"Role"}</dt><dd>{profile.role.as_str()}</dd>
                </dl>
            }).unwrap_or_default()}
            <form class="inline-form" {onsubmit}>
                <TextField label="Name" value={edit.name.clone()} on_input={set_name} />
                <TextField
                    label="Password"
                    input_type="password"
                    value={edit.password.clone()}
                    on_input={set_password}
                />
                <label class="stack">
                    <span>{"Role"}</span>
                    <select onchange={set_role}>
                        <option value="" selected={edit.role.is_none()}>{"Unchanged"}</option>
                        {for [Role::User, Role::Admin].into_iter().map(|role| html! {
                            <option value={role.as_str()} selected={edit.role == Some(role)}>
                                {role.as_str()}
                            </option>
                        })}
                    </select>
                </label>
                <button class="btn" type="submit">{"Save"}</button>
            </form>
            <MessageLine message={(*message).clone()} />
            <h3>{"Rentals"}</h3>
            <RentalHistory
                source={RentalSource::User(props.email.clone())}
                state={history.state()}
                on_filter={{
                    let history = history.clone();
                    Callback::from(move |filter| history.set_filter(filter))
                }}
                on_prev={{
                    let history = history.clone();
                    Callback::from(move |()| history.prev())
                }}
                on_next={{
                    let history = history.clone();
                    Callback::from(move |()| history.next())
                }}
            />
        </section>
    }
}
