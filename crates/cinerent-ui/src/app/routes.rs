//! Routing definitions for the Cinerent UI.
use yew_router::prelude::*;

#[derive(Clone, Routable, PartialEq, Eq, Debug)]
pub(crate) enum Route {
    #[at("/")]
    Home,
    #[at("/login")]
    Login,
    #[at("/register")]
    Register,
    #[at("/self")]
    Profile,
    #[at("/movies")]
    Movies,
    #[at("/rent/:movie_id")]
    Rent { movie_id: u64 },
    #[at("/details/:email")]
    UserDetails { email: String },
    #[at("/reminder")]
    Reminders,
    #[not_found]
    #[at("/404")]
    NotFound,
}
