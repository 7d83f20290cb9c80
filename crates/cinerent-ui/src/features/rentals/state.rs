//! Rental history rows, filter labels, and rent confirmations.

use crate::core::config::ClientConfig;
use crate::core::paging::PageController;
use crate::core::resources::{OwnRentals, RentalFilter, UserRentals};
use crate::core::time::format_optional;
use cinerent_api_models::{Rental, RentTime};

/// Confirmation shown after a return.
pub const RETURNED_MESSAGE: &str = "Movie returned.";
/// Shown when a history page is empty.
pub const NO_RENTALS: &str = "No rentals found.";

/// Confirmation shown after renting.
#[must_use]
pub fn rented_message(rent_time: RentTime) -> String {
    format!("Movie rented for {}", rent_time.phrase())
}

/// Tab label for a filter value.
#[must_use]
pub const fn filter_label(filter: RentalFilter) -> &'static str {
    if filter.returned { "Returned" } else { "Active" }
}

/// Which history a rental table shows.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RentalSource {
    /// The caller's own rentals; rows can be returned.
    Own,
    /// Another account's rentals (administrators only).
    User(String),
}

impl RentalSource {
    /// Whether rows offer a return action.
    #[must_use]
    pub const fn allows_return(&self) -> bool {
        matches!(self, Self::Own)
    }
}

/// Controller for the caller's own history.
#[must_use]
pub fn own_history(config: &ClientConfig) -> PageController<OwnRentals> {
    PageController::new(OwnRentals, config.page_size)
}

/// Controller for another account's history.
#[must_use]
pub fn user_history(email: &str, config: &ClientConfig) -> PageController<UserRentals> {
    PageController::new(
        UserRentals {
            email: email.to_string(),
        },
        config.page_size,
    )
}

/// Display-ready rental row.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RentalRow {
    /// Rental identifier.
    pub id: u64,
    /// Movie title.
    pub title: String,
    /// Start time.
    pub rented_at: String,
    /// Due time.
    pub due_date: String,
    /// Whether the rental can still be returned.
    pub active: bool,
}

impl From<&Rental> for RentalRow {
    fn from(rental: &Rental) -> Self {
        Self {
            id: rental.id,
            title: rental.movie_title.clone(),
            rented_at: format_optional(rental.rented_at),
            due_date: format_optional(rental.due_date),
            active: !rental.returned,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::DEFAULT_PAGE_SIZE;
    use crate::core::time::format_short;
    use chrono::{TimeZone, Utc};

    #[test]
    fn rent_message_uses_phrase() {
        assert_eq!(rented_message(RentTime::OneWeek), "Movie rented for one week");
        assert_eq!(rented_message(RentTime::OneDay), "Movie rented for one day");
    }

    #[test]
    fn row_formats_dates() {
        let rental = Rental {
            id: 3,
            movie_title: "Up".to_string(),
            rented_at: Some(Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 0).unwrap()),
            due_date: None,
            returned: false,
            returned_at: None,
            genre: None,
            user_email: None,
        };
        let row = RentalRow::from(&rental);
        assert_eq!(row.rented_at, format_short(rental.rented_at.unwrap()));
        assert_eq!(row.due_date, "-");
        assert!(row.active);
    }

    #[test]
    fn only_own_history_returns() {
        assert!(RentalSource::Own.allows_return());
        assert!(!RentalSource::User("a@b.com".to_string()).allows_return());
        assert_eq!(filter_label(RentalFilter { returned: true }), "Returned");
        let config = ClientConfig::default();
        assert_eq!(
            user_history("a@b.com", &config).load().request.path,
            "rental/user/a%40b.com/0/5/rentals?returned=false"
        );
        assert_eq!(own_history(&config).state().size, DEFAULT_PAGE_SIZE);
    }

    #[test]
    fn history_pages_follow_configured_size() {
        let config = ClientConfig {
            page_size: 12,
            ..ClientConfig::default()
        };
        let mut own = own_history(&config);
        assert_eq!(
            own.load().request.path,
            "rental/self/0/12/rentals?returned=false"
        );
        assert_eq!(
            user_history("x@y.org", &config).next().request.path,
            "rental/user/x%40y.org/1/12/rentals?returned=false"
        );
    }
}
