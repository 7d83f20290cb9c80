//! Profile page: own details, edits and rental history.

use super::state::{ProfileField, renewal_message};
use crate::app::api::use_api;
use crate::app::paging::use_paged;
use crate::components::{MessageLine, TextField};
use crate::core::message::MessageState;
use crate::core::mutate::Mutation;
use crate::features::rentals::state::{RETURNED_MESSAGE, RentalSource, own_history};
use crate::features::rentals::view::RentalHistory;
use cinerent_api_models::UserProfile;
use yew::platform::spawn_local;
use yew::prelude::*;

#[function_component(ProfilePage)]
pub(crate) fn profile_page() -> Html {
    let api = use_api();
    let profile = use_state(|| None as Option<UserProfile>);
    let name = use_state(String::new);
    let password = use_state(String::new);
    let message = use_state(MessageState::default);
    let history = {
        let config = api.client().config().clone();
        use_paged(api.clone(), move || own_history(&config))
    };

    {
        let api = api.clone();
        let profile = profile.clone();
        let message = message.clone();
        let history = history.clone();
        use_effect_with_deps(
            move |_| {
                history.load();
                spawn_local(async move {
                    match api.self_profile().await {
                        Ok(me) => profile.set(Some(me)),
                        Err(err) => message.set(MessageState::from_error(&err)),
                    }
                });
                || ()
            },
            (),
        );
    }

    let submit = |field: ProfileField, input: &UseStateHandle<String>| {
        let api = api.clone();
        let input = input.clone();
        let profile = profile.clone();
        let message = message.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let api = api.clone();
            let value = (*input).clone();
            let input = input.clone();
            let profile = profile.clone();
            let message = message.clone();
            spawn_local(async move {
                let (name, password) = field.arguments(&value);
                match api.update_self(name, password).await {
                    Ok(updated) => {
                        profile.set(Some(updated));
                        input.set(String::new());
                        message.set(MessageState::success(field.success_message()));
                    }
                    Err(err) => message.set(MessageState::from_error(&err)),
                }
            });
        })
    };

    let on_return = {
        let api = api.clone();
        let history = history.clone();
        let message = message.clone();
        Callback::from(move |rental_id: u64| {
            let api = api.clone();
            let history = history.clone();
            let message = message.clone();
            spawn_local(async move {
                let outcome = api
                    .return_rental(rental_id)
                    .await
                    .map(|()| Mutation::Remove(rental_id));
                message.set(MessageState::from_outcome(&outcome, |_| {
                    RETURNED_MESSAGE.to_string()
                }));
                history.reconcile(outcome);
            });
        })
    };

    let on_renew = {
        let api = api.clone();
        let message = message.clone();
        Callback::from(move |_: MouseEvent| {
            let api = api.clone();
            let message = message.clone();
            spawn_local(async move {
                message.set(renewal_message(&api.refresh().await));
            });
        })
    };

    let setter = |handle: &UseStateHandle<String>| {
        let handle = handle.clone();
        Callback::from(move |value: String| handle.set(value))
    };

    html! {
        <section class="profile">
            <h2>{"Profile"}</h2>
            {(*profile).clone().map(|me| html! {
                <dl class="profile-details">
                    <dt>{"Name"}</dt><dd>{me.name}</dd>
                    <dt>{"Email"}</dt><dd>{me.email}</dd>
                    <dt>{"Role"}</dt><dd>{me.role.as_str()}</dd>
                </dl>
            }).unwrap_or_default()}
            <div class="profile-forms">
                <form class="inline-form" onsubmit={submit(ProfileField::Name, &name)}>
                    <TextField label="New name" value={(*name).clone()} on_input={setter(&name)} />
                    <button class="btn" type="submit">{"Update name"}</button>
                </form>
                <form class="inline-form" onsubmit={submit(ProfileField::Password, &password)}>
                    <TextField
                        label="New password"
                        input_type="password"
                        value={(*password).clone()}
                        on_input={setter(&password)}
                    />
                    <button class="btn" type="submit">{"Update password"}</button>
                </form>
                <button class="btn" type="button" onclick={on_renew}>{"Renew session"}</button>
            </div>
            <MessageLine message={(*message).clone()} />
            <h3>{"My rentals"}</h3>
            <RentalHistory
                source={RentalSource::Own}
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
                on_return={Some(on_return)}
            />
        </section>
    }
}
