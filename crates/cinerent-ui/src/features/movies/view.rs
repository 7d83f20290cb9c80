//! Catalog page. Row controls follow the decoded token role; the server
//! still authorizes every mutation.

use super::state::{
    DELETED_MESSAGE, MovieFormState, NO_MOVIES, RowControls, added_message, catalog_controller,
    updated_message,
};
use crate::app::Route;
use crate::app::api::{BrowserApi, use_api};
use crate::app::paging::{PagedHandle, use_paged};
use crate::components::{MessageLine, PageStatus, TextField};
use crate::core::message::MessageState;
use crate::core::mutate::Mutation;
use crate::core::resources::MovieCatalog;
use crate::core::store::AppStore;
use cinerent_api_models::{Genre, Movie};
use std::rc::Rc;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::platform::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::use_selector;

#[function_component(MoviesPage)]
pub(crate) fn movies_page() -> Html {
    let api = use_api();
    let affordance = use_selector(|store: &AppStore| store.auth.affordance);
    let catalog = use_paged(api.clone(), catalog_controller);
    let form = use_state(MovieFormState::default);
    let editing = use_state(|| None as Option<u64>);
    let message = use_state(MessageState::default);

    {
        let catalog = catalog.clone();
        use_effect_with_deps(
            move |_| {
                catalog.load();
                || ()
            },
            (),
        );
    }

    let controls = (*affordance).map_or(RowControls::Rent, RowControls::for_role);
    let state = catalog.state();

    let table = if state.items.is_empty() {
        html! {}
    } else {
        let on_edit = {
            let form = form.clone();
            let editing = editing.clone();
            Callback::from(move |movie: Movie| {
                form.set(MovieFormState::from_movie(&movie));
                editing.set(Some(movie.id));
            })
        };
        let on_delete = delete_callback(&api, &catalog, &message);
        html! {
            <table class="table">
                <thead>
                    <tr><th>{"Title"}</th><th>{"Genre"}</th><th>{"Available"}</th><th></th></tr>
                </thead>
                <tbody>
                    {for state.items.iter().map(|movie| {
                        html! {
                            <tr key={movie.id}>
                                <td>{&movie.title}</td>
                                <td>{movie.genre.label()}</td>
                                <td>{if movie.available { "Yes" } else { "No" }}</td>
                                <td class="row-actions">
                                    {row_actions(controls, movie, &on_edit, &on_delete)}
                                </td>
                            </tr>
                        }
                    })}
                </tbody>
            </table>
        }
    };

    html! {
        <section class="movies">
            <h2>{"Movies"}</h2>
            {if controls == RowControls::Manage {
                movie_form(&api, &catalog, &form, &editing, &message)
            } else {
                html! {}
            }}
            <MessageLine message={(*message).clone()} />
            <PageStatus status={state.status()} empty={NO_MOVIES} />
            {table}
        </section>
    }
}

fn row_actions(
    controls: RowControls,
    movie: &Movie,
    on_edit: &Callback<Movie>,
    on_delete: &Callback<u64>,
) -> Html {
    match controls {
        RowControls::Manage => {
            let edit = {
                let on_edit = on_edit.clone();
                let movie = movie.clone();
                Callback::from(move |_: MouseEvent| on_edit.emit(movie.clone()))
            };
            let delete = {
                let on_delete = on_delete.clone();
                let id = movie.id;
                Callback::from(move |_: MouseEvent| on_delete.emit(id))
            };
            html! {
                <>
                    <button class="btn" onclick={edit}>{"Edit"}</button>
                    <button class="btn btn-danger" onclick={delete}>{"Delete"}</button>
                </>
            }
        }
        RowControls::Rent if movie.available => html! {
            <Link<Route> to={Route::Rent { movie_id: movie.id }}>{"Rent"}</Link<Route>>
        },
        RowControls::Rent => html! {},
    }
}

fn delete_callback(
    api: &Rc<BrowserApi>,
    catalog: &PagedHandle<MovieCatalog>,
    message: &UseStateHandle<MessageState>,
) -> Callback<u64> {
    let api = Rc::clone(api);
    let catalog = catalog.clone();
    let message = message.clone();
    Callback::from(move |id: u64| {
        let api = api.clone();
        let catalog = catalog.clone();
        let message = message.clone();
        spawn_local(async move {
            let outcome = api.delete_movie(id).await.map(|()| Mutation::Remove(id));
            message.set(MessageState::from_outcome(&outcome, |_| {
                DELETED_MESSAGE.to_string()
            }));
            catalog.reconcile(outcome);
        });
    })
}

fn movie_form(
    api: &Rc<BrowserApi>,
    catalog: &PagedHandle<MovieCatalog>,
    form: &UseStateHandle<MovieFormState>,
    editing: &UseStateHandle<Option<u64>>,
    message: &UseStateHandle<MessageState>,
) -> Html {
    let onsubmit = {
        let api = Rc::clone(api);
        let catalog = catalog.clone();
        let form = form.clone();
        let editing = editing.clone();
        let message = message.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let api = api.clone();
            let catalog = catalog.clone();
            let values = (*form).clone();
            let target = *editing;
            let form = form.clone();
            let editing = editing.clone();
            let message = message.clone();
            spawn_local(async move {
                let (outcome, text) = match target {
                    Some(id) => {
                        let outcome = match values.to_update(id) {
                            Ok(update) => api.update_movie(&update).await,
                            Err(err) => Err(err),
                        };
                        let text = MessageState::from_outcome(&outcome, updated_message);
                        (outcome.map(|movie| Mutation::Replace(id, movie)), text)
                    }
                    None => {
                        let outcome = match values.to_new_movie() {
                            Ok(movie) => api.create_movie(&movie).await,
                            Err(err) => Err(err),
                        };
                        let text = MessageState::from_outcome(&outcome, added_message);
                        (outcome.map(Mutation::Insert), text)
                    }
                };
                if outcome.is_ok() {
                    form.set(MovieFormState::default());
                    editing.set(None);
                }
                message.set(text);
                catalog.reconcile(outcome);
            });
        })
    };

    let set_title = {
        let form = form.clone();
        Callback::from(move |title: String| {
            form.set(MovieFormState {
                title,
                ..(*form).clone()
            });
        })
    };
    let set_genre = {
        let form = form.clone();
        Callback::from(move |e: Event| {
            if let Some(select) = e.target_dyn_into::<HtmlSelectElement>()
                && let Some(genre) = Genre::from_wire(&select.value())
            {
                form.set(MovieFormState {
                    genre,
                    ..(*form).clone()
                });
            }
        })
    };
    let set_available = {
        let form = form.clone();
        Callback::from(move |e: Event| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                form.set(MovieFormState {
                    available: input.checked(),
                    ..(*form).clone()
                });
            }
        })
    };
    let cancel = {
        let form = form.clone();
        let editing = editing.clone();
        Callback::from(move |_: MouseEvent| {
            form.set(MovieFormState::default());
            editing.set(None);
        })
    };

    let is_editing = editing.is_some();
    html! {
        <form class="card movie-form" {onsubmit}>
            <h3>{if is_editing { "Edit movie" } else { "Add movie" }}</h3>
            <TextField label="Title" value={form.title.clone()} on_input={set_title} />
            <label class="stack">
                <span>{"Genre"}</span>
                <select onchange={set_genre}>
                    {for Genre::all().into_iter().map(|genre| html! {
                        <option value={genre.as_str()} selected={genre == form.genre}>
                            {genre.label()}
                        </option>
                    })}
                </select>
            </label>
            {if is_editing {
                html! {
                    <label class="inline">
                        <input type="checkbox" checked={form.available} onchange={set_available} />
                        <span>{"Available"}</span>
                    </label>
                }
            } else {
                html! {}
            }}
            <div class="actions">
                <button class="btn" type="submit">{if is_editing { "Save" } else { "Add" }}</button>
                {if is_editing {
                    html! { <button class="btn btn-ghost" type="button" onclick={cancel}>{"Cancel"}</button> }
                } else {
                    html! {}
                }}
            </div>
        </form>
    }
}
