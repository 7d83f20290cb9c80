//! Home page: branches on the server-confirmed role.

use super::state::{
    HomeDataset, NO_ACTIVE_RENTALS, NO_USERS, active_rentals_controller, users_controller,
};
use crate::app::Route;
use crate::app::api::{BrowserApi, use_api};
use crate::app::paging::{PagedHandle, use_paged};
use crate::components::{MessageLine, PageStatus};
use crate::core::message::MessageState;
use crate::core::mutate::Mutation;
use crate::core::resources::UserDirectory;
use crate::core::role::authoritative_role;
use crate::features::rentals::view::rental_table;
use crate::features::users::state::deleted_message;
use std::rc::Rc;
use yew::platform::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(HomePage)]
pub(crate) fn home_page() -> Html {
    let api = use_api();
    let dataset = use_state(|| None as Option<HomeDataset>);
    let message = use_state(MessageState::default);
    let users = use_paged(api.clone(), users_controller);
    let rentals = use_paged(api.clone(), active_rentals_controller);

    {
        let api = api.clone();
        let dataset = dataset.clone();
        let message = message.clone();
        use_effect_with_deps(
            move |_| {
                spawn_local(async move {
                    match authoritative_role(&*api).await {
                        Ok(role) => dataset.set(Some(HomeDataset::for_role(&role))),
                        Err(err) => message.set(MessageState::from_error(&err)),
                    }
                });
                || ()
            },
            (),
        );
    }
    {
        let users = users.clone();
        let rentals = rentals.clone();
        use_effect_with_deps(
            move |dataset: &Option<HomeDataset>| {
                match dataset {
                    Some(HomeDataset::Users) => users.load(),
                    Some(HomeDataset::ActiveRentals) => rentals.load(),
                    None => {}
                }
                || ()
            },
            *dataset,
        );
    }

    let body = match *dataset {
        None => html! { <p class="muted">{"Loading..."}</p> },
        Some(HomeDataset::Users) => render_users(&api, &users, &message),
        Some(HomeDataset::ActiveRentals) => {
            let state = rentals.state();
            html! {
                <>
                    <PageStatus status={state.status()} empty={NO_ACTIVE_RENTALS} />
                    {if state.items.is_empty() { html! {} } else { rental_table(&state.items, None) }}
                </>
            }
        }
    };

    html! {
        <section class="home">
            <h2>{"Home"}</h2>
            <MessageLine message={(*message).clone()} />
            {body}
        </section>
    }
}

fn render_users(
    api: &Rc<BrowserApi>,
    users: &PagedHandle<UserDirectory>,
    message: &UseStateHandle<MessageState>,
) -> Html {
    let state = users.state();
    let status = html! { <PageStatus status={state.status()} empty={NO_USERS} /> };
    if state.items.is_empty() {
        return status;
    }
    let on_delete = {
        let api = Rc::clone(api);
        let users = users.clone();
        let message = message.clone();
        Callback::from(move |email: String| {
            let api = api.clone();
            let users = users.clone();
            let message = message.clone();
            spawn_local(async move {
                let outcome = api
                    .delete_user(&email)
                    .await
                    .map(|()| Mutation::Remove(email.clone()));
                message.set(MessageState::from_outcome(&outcome, |_| {
                    deleted_message(&email)
                }));
                users.reconcile(outcome);
            });
        })
    };

    html! {
        <>
            {status}
            <table class="table">
                <thead>
                    <tr><th>{"Name"}</th><th>{"Email"}</th><th>{"Role"}</th><th></th></tr>
                </thead>
                <tbody>
                    {for state.items.iter().map(|user| {
                        let email = user.email.clone();
                        let on_delete = on_delete.clone();
                        html! {
                            <tr key={user.email.clone()}>
                                <td>{&user.name}</td>
                                <td>{&user.email}</td>
                                <td>{user.role.as_str()}</td>
                                <td class="row-actions">
                                    <Link<Route> to={Route::UserDetails { email: user.email.clone() }}>
                                        {"Details"}
                                    </Link<Route>>
                                    <button
                                        class="btn btn-danger"
                                        onclick={Callback::from(move |_: MouseEvent| on_delete.emit(email.clone()))}
                                    >
                                        {"Delete"}
                                    </button>
                                </td>
                            </tr>
                        }
                    })}
                </tbody>
            </table>
        </>
    }
}
