//! Rent form and rental history tables.

use super::state::{NO_RENTALS, RentalRow, RentalSource, filter_label, rented_message};
use crate::app::api::use_api;
use crate::components::{MessageLine, PageStatus, Pager};
use crate::core::message::MessageState;
use crate::core::paging::PageState;
use crate::core::resources::RentalFilter;
use cinerent_api_models::{Rental, RentTime};
use web_sys::HtmlSelectElement;
use yew::platform::spawn_local;
use yew::prelude::*;

/// Table of rentals; rows carry a return button when `on_return` is given
/// and the rental is still active.
pub(crate) fn rental_table(rentals: &[Rental], on_return: Option<&Callback<u64>>) -> Html {
    html! {
        <table class="table">
            <thead>
                <tr>
                    <th>{"Movie"}</th>
                    <th>{"Rented"}</th>
                    <th>{"Due"}</th>
                    <th>{"Status"}</th>
                    {if on_return.is_some() { html! { <th></th> } } else { html! {} }}
                </tr>
            </thead>
            <tbody>
                {for rentals.iter().map(RentalRow::from).map(|row| {
                    let action = on_return.map(|on_return| {
                        if row.active {
                            let on_return = on_return.clone();
                            let id = row.id;
                            html! {
                                <td>
                                    <button class="btn" onclick={Callback::from(move |_: MouseEvent| on_return.emit(id))}>
                                        {"Return"}
                                    </button>
                                </td>
                            }
                        } else {
                            html! { <td></td> }
                        }
                    });
                    html! {
                        <tr key={row.id}>
                            <td>{row.title}</td>
                            <td>{row.rented_at}</td>
                            <td>{row.due_date}</td>
                            <td>{if row.active { "Active" } else { "Returned" }}</td>
                            {action.unwrap_or_default()}
                        </tr>
                    }
                })}
            </tbody>
        </table>
    }
}

#[derive(Properties, PartialEq)]
pub(crate) struct RentalHistoryProps {
    pub source: RentalSource,
    pub state: PageState<Rental, RentalFilter>,
    pub on_filter: Callback<RentalFilter>,
    pub on_prev: Callback<()>,
    pub on_next: Callback<()>,
    #[prop_or_default]
    pub on_return: Option<Callback<u64>>,
}

/// Paged history with the active/returned toggle.
#[function_component(RentalHistory)]
pub(crate) fn rental_history(props: &RentalHistoryProps) -> Html {
    let state = &props.state;
    let toggle = |returned: bool| {
        let filter = RentalFilter { returned };
        let on_filter = props.on_filter.clone();
        let selected = state.filter == filter;
        html! {
            <button
                class={classes!("btn", "btn-tab", selected.then_some("active"))}
                disabled={selected}
                onclick={Callback::from(move |_: MouseEvent| on_filter.emit(filter))}
            >
                {filter_label(filter)}
            </button>
        }
    };
    let on_return = props
        .on_return
        .as_ref()
        .filter(|_| props.source.allows_return());

    html! {
        <div class="rental-history">
            <div class="tabs">
                {toggle(false)}
                {toggle(true)}
            </div>
            <PageStatus status={state.status()} empty={NO_RENTALS} />
            {if state.items.is_empty() {
                html! {}
            } else {
                rental_table(&state.items, on_return)
            }}
            <Pager
                page={state.page}
                has_previous={state.has_previous()}
                busy={state.loading()}
                on_prev={props.on_prev.clone()}
                on_next={props.on_next.clone()}
            />
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub(crate) struct RentPageProps {
    pub movie_id: u64,
}

#[function_component(RentPage)]
pub(crate) fn rent_page(props: &RentPageProps) -> Html {
    let api = use_api();
    let title = use_state(|| None as Option<String>);
    let rent_time = use_state(RentTime::default);
    let message = use_state(MessageState::default);
    let busy = use_state(|| false);

    {
        let api = api.clone();
        let title = title.clone();
        use_effect_with_deps(
            move |movie_id: &u64| {
                let movie_id = *movie_id;
                spawn_local(async move {
                    match api.list_movies().await {
                        Ok(movies) => title.set(
                            movies
                                .into_iter()
                                .find(|movie| movie.id == movie_id)
                                .map(|movie| movie.title),
                        ),
                        Err(err) => tracing::debug!(kind = err.kind(), "movie lookup failed"),
                    }
                });
                || ()
            },
            props.movie_id,
        );
    }

    let on_change = {
        let rent_time = rent_time.clone();
        Callback::from(move |e: Event| {
            if let Some(select) = e.target_dyn_into::<HtmlSelectElement>()
                && let Some(value) = RentTime::from_wire(&select.value())
            {
                rent_time.set(value);
            }
        })
    };

    let onsubmit = {
        let movie_id = props.movie_id;
        let rent_time = rent_time.clone();
        let message = message.clone();
        let busy = busy.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let api = api.clone();
            let chosen = *rent_time;
            let message = message.clone();
            let busy = busy.clone();
            busy.set(true);
            spawn_local(async move {
                let outcome = api.rent_movie(movie_id, chosen).await;
                busy.set(false);
                message.set(MessageState::from_outcome(&outcome, |_| {
                    rented_message(chosen)
                }));
            });
        })
    };

    let heading = (*title)
        .clone()
        .unwrap_or_else(|| format!("Movie #{}", props.movie_id));
    html! {
        <form class="card rent-form" {onsubmit}>
            <h2>{format!("Rent {heading}")}</h2>
            <label class="stack">
                <span>{"Rental period"}</span>
                <select onchange={on_change}>
                    {for [RentTime::OneDay, RentTime::OneWeek].into_iter().map(|option| html! {
                        <option value={option.as_str()} selected={option == *rent_time}>
                            {option.phrase()}
                        </option>
                    })}
                </select>
            </label>
            <button class="btn" type="submit" disabled={*busy}>{"Rent"}</button>
            <MessageLine message={(*message).clone()} />
        </form>
    }
}
