//! Resource queries served by [`PageController`](crate::core::paging::PageController).

use crate::core::endpoints;
use crate::core::paging::ResourceQuery;
use cinerent_api_models::{Movie, Reminder, Rental, UserProfile};

/// Active/returned toggle on rental histories.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RentalFilter {
    /// Show returned rentals instead of active ones.
    pub returned: bool,
}

/// The caller's own rentals, paged.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct OwnRentals;

impl ResourceQuery for OwnRentals {
    type Item = Rental;
    type Filter = RentalFilter;

    fn path(&self, page: u32, size: u32, filter: &RentalFilter) -> String {
        endpoints::own_rentals(page, size, filter.returned)
    }
}

/// Another account's rentals, paged (administrators only).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UserRentals {
    /// Account whose rentals are listed.
    pub email: String,
}

impl ResourceQuery for UserRentals {
    type Item = Rental;
    type Filter = RentalFilter;

    fn path(&self, page: u32, size: u32, filter: &RentalFilter) -> String {
        endpoints::user_rentals(&self.email, page, size, filter.returned)
    }
}

/// The full catalog; the endpoint is not paged.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MovieCatalog;

impl ResourceQuery for MovieCatalog {
    type Item = Movie;
    type Filter = ();

    fn path(&self, _page: u32, _size: u32, _filter: &()) -> String {
        endpoints::MOVIE_LIST.to_string()
    }
}

/// Every account (administrators only); the endpoint is not paged.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct UserDirectory;

impl ResourceQuery for UserDirectory {
    type Item = UserProfile;
    type Filter = ();

    fn path(&self, _page: u32, _size: u32, _filter: &()) -> String {
        endpoints::USER_LIST.to_string()
    }
}

/// Due-date reminders for the caller's active rentals.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct OwnReminders;

impl ResourceQuery for OwnReminders {
    type Item = Reminder;
    type Filter = ();

    fn path(&self, _page: u32, _size: u32, _filter: &()) -> String {
        endpoints::OWN_REMINDERS.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_rentals_encode_email_segment() {
        let query = UserRentals {
            email: "ann@b.com".to_string(),
        };
        assert_eq!(
            query.path(1, 5, &RentalFilter { returned: true }),
            "rental/user/ann%40b.com/1/5/rentals?returned=true"
        );
    }

    #[test]
    fn unpaged_lists_ignore_page() {
        assert_eq!(MovieCatalog.path(3, 5, &()), "movies/list");
        assert_eq!(UserDirectory.path(0, 5, &()), "users/list");
        assert_eq!(OwnReminders.path(0, 5, &()), "rental/self/reminder");
    }
}
