//! Endpoint path builders, relative to the API prefix.
//!
//! Dynamic segments and query values are percent-encoded. Rent and update
//! mutations carry their fields as query parameters, not a body.

use cinerent_api_models::{MovieUpdate, RentTime, Role};
use urlencoding::encode;

pub(crate) const AUTHENTICATE: &str = "auth/authenticate";
pub(crate) const REGISTER: &str = "auth/register";
pub(crate) const LOGOUT: &str = "auth/logout";
pub(crate) const REFRESH_TOKEN: &str = "auth/refresh-token";
pub(crate) const SELF_PROFILE: &str = "users/self";
pub(crate) const USER_LIST: &str = "users/list";
pub(crate) const MOVIE_LIST: &str = "movies/list";
pub(crate) const MOVIES: &str = "movies";
pub(crate) const OWN_REMINDERS: &str = "rental/self/reminder";

/// Append `pairs` as an encoded query string, skipping absent values.
pub(crate) fn with_query<'a>(
    path: &str,
    pairs: impl IntoIterator<Item = (&'a str, Option<String>)>,
) -> String {
    let query: Vec<String> = pairs
        .into_iter()
        .filter_map(|(key, value)| value.map(|value| format!("{key}={}", encode(&value))))
        .collect();
    if query.is_empty() {
        path.to_string()
    } else {
        format!("{path}?{}", query.join("&"))
    }
}

pub(crate) fn update_self(name: Option<&str>, password: Option<&str>) -> String {
    with_query(
        SELF_PROFILE,
        [
            ("name", name.map(str::to_string)),
            ("password", password.map(str::to_string)),
        ],
    )
}

pub(crate) fn user_by_email(email: &str) -> String {
    with_query("users", [("email", Some(email.to_string()))])
}

pub(crate) fn update_user(
    email: &str,
    name: Option<&str>,
    password: Option<&str>,
    role: Option<Role>,
) -> String {
    with_query(
        "users",
        [
            ("email", Some(email.to_string())),
            ("name", name.map(str::to_string)),
            ("password", password.map(str::to_string)),
            ("role", role.map(|role| role.as_str().to_string())),
        ],
    )
}

pub(crate) fn update_movie(update: &MovieUpdate) -> String {
    with_query(
        MOVIES,
        update
            .query_pairs()
            .into_iter()
            .map(|(key, value)| (key, Some(value))),
    )
}

pub(crate) fn movie(id: u64) -> String {
    format!("{MOVIES}/{id}")
}

pub(crate) fn rent_movie(movie_id: u64, rent_time: RentTime) -> String {
    with_query(
        &format!("rental/{movie_id}/rent"),
        [("dueDate", Some(rent_time.as_str().to_string()))],
    )
}

pub(crate) fn return_rental(rental_id: u64) -> String {
    format!("rental/{rental_id}/return")
}

pub(crate) fn own_rentals(page: u32, size: u32, returned: bool) -> String {
    with_query(
        &format!("rental/self/{page}/{size}/rentals"),
        [("returned", Some(returned.to_string()))],
    )
}

pub(crate) fn user_rentals(email: &str, page: u32, size: u32, returned: bool) -> String {
    with_query(
        &format!("rental/user/{}/{page}/{size}/rentals", encode(email)),
        [("returned", Some(returned.to_string()))],
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use cinerent_api_models::Genre;

    #[test]
    fn rental_paths_carry_page_size_and_filter() {
        assert_eq!(own_rentals(2, 5, true), "rental/self/2/5/rentals?returned=true");
        assert_eq!(
            user_rentals("a+b@c.com", 0, 5, false),
            "rental/user/a%2Bb%40c.com/0/5/rentals?returned=false"
        );
    }

    #[test]
    fn mutations_encode_query_parameters() {
        assert_eq!(
            rent_movie(7, RentTime::OneWeek),
            "rental/7/rent?dueDate=ONE_WEEK"
        );
        assert_eq!(
            update_movie(&MovieUpdate {
                id: 3,
                title: "Kill Bill & Co".to_string(),
                genre: Genre::Action,
                available: true,
            }),
            "movies?id=3&title=Kill%20Bill%20%26%20Co&genre=ACTION&status=true"
        );
        assert_eq!(update_self(None, Some("pw")), "users/self?password=pw");
        assert_eq!(
            update_user("a@b.com", None, None, Some(Role::Admin)),
            "users?email=a%40b.com&role=ADMIN"
        );
        assert_eq!(user_by_email("a@b.com"), "users?email=a%40b.com");
    }
}
