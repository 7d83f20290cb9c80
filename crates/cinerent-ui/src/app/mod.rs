//! App shell: context wiring, navigation and routing.

use crate::core::role::affordance_role;
use crate::core::store::AppStore;
use crate::features::auth::view::{LoginPage, RegisterPage};
use crate::features::home::view::HomePage;
use crate::features::movies::view::MoviesPage;
use crate::features::profile::view::ProfilePage;
use crate::features::reminders::view::RemindersPage;
use crate::features::rentals::view::RentPage;
use crate::features::users::view::UserDetailsPage;
use api::ApiCtx;
use cinerent_telemetry::{DEFAULT_LOG_LEVEL, LoggingConfig, build_sha, init_logging};
use gloo::console;
pub(crate) use routes::Route;
use yew::platform::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::{Dispatch, use_selector};

pub(crate) mod api;
pub(crate) mod paging;
mod preferences;
mod routes;

#[function_component(CinerentApp)]
pub fn cinerent_app() -> Html {
    let api_ctx = use_memo(|_| ApiCtx::new(preferences::client_config()), ());
    {
        let api_ctx = (*api_ctx).clone();
        use_effect_with_deps(
            move |_| {
                let dispatch = Dispatch::<AppStore>::new();
                match api_ctx.api.session() {
                    Some(session) => {
                        let affordance = affordance_role(&session);
                        dispatch.reduce_mut(|store| store.sign_in(affordance));
                    }
                    None => dispatch.reduce_mut(AppStore::sign_out),
                }
                || ()
            },
            (),
        );
    }

    html! {
        <ContextProvider<ApiCtx> context={(*api_ctx).clone()}>
            <BrowserRouter>
                <NavBar />
                <main class="content">
                    <Switch<Route> render={switch} />
                </main>
            </BrowserRouter>
        </ContextProvider<ApiCtx>>
    }
}

fn switch(route: Route) -> Html {
    match route {
        Route::Home => html! { <HomePage /> },
        Route::Login => html! { <LoginPage /> },
        Route::Register => html! { <RegisterPage /> },
        Route::Profile => html! { <ProfilePage /> },
        Route::Movies => html! { <MoviesPage /> },
        Route::Rent { movie_id } => html! { <RentPage {movie_id} /> },
        Route::UserDetails { email } => html! { <UserDetailsPage key={email.clone()} {email} /> },
        Route::Reminders => html! { <RemindersPage /> },
        Route::NotFound => html! {
            <div class="placeholder">
                <h2>{"Page not found"}</h2>
                <Link<Route> to={Route::Home}>{"Back to home"}</Link<Route>>
            </div>
        },
    }
}

#[function_component(NavBar)]
fn nav_bar() -> Html {
    let signed_in = use_selector(|store: &AppStore| store.auth.signed_in);
    let admin = use_selector(AppStore::shows_admin_controls);
    let api = api::use_api();
    let navigator = use_navigator();

    let on_logout = {
        Callback::from(move |_: MouseEvent| {
            let api = api.clone();
            let navigator = navigator.clone();
            spawn_local(async move {
                api.logout().await;
                Dispatch::<AppStore>::new().reduce_mut(AppStore::sign_out);
                if let Some(navigator) = navigator {
                    navigator.push(&Route::Login);
                }
            });
        })
    };

    html! {
        <nav class="navbar">
            <span class="brand">{"Cinerent"}</span>
            {if *signed_in {
                html! {
                    <>
                        <Link<Route> to={Route::Home}>{"Home"}</Link<Route>>
                        <Link<Route> to={Route::Movies}>{"Movies"}</Link<Route>>
                        <Link<Route> to={Route::Profile}>{"Profile"}</Link<Route>>
                        {if *admin {
                            html! {}
                        } else {
                            html! { <Link<Route> to={Route::Reminders}>{"Reminders"}</Link<Route>> }
                        }}
                        <button class="btn btn-ghost" onclick={on_logout}>{"Logout"}</button>
                    </>
                }
            } else {
                html! {
                    <>
                        <Link<Route> to={Route::Login}>{"Login"}</Link<Route>>
                        <Link<Route> to={Route::Register}>{"Register"}</Link<Route>>
                    </>
                }
            }}
        </nav>
    }
}

/// Entrypoint invoked by Trunk for wasm32 builds.
pub fn run_app() {
    console_error_panic_hook::set_once();
    let level = preferences::log_level();
    let config = LoggingConfig {
        level: level.as_deref().unwrap_or(DEFAULT_LOG_LEVEL),
        format: preferences::log_format(),
        build_sha: build_sha(),
    };
    if let Err(err) = init_logging(&config) {
        console::error!(format!("failed to initialise logging: {err}"));
    }
    if let Some(root) = gloo::utils::document().get_element_by_id("root") {
        yew::Renderer::<CinerentApp>::with_root(root).render();
    } else {
        yew::Renderer::<CinerentApp>::new().render();
    }
}
