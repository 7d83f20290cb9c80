//! Reminder cards and access rule.

use crate::core::config::DEFAULT_PAGE_SIZE;
use crate::core::paging::PageController;
use crate::core::resources::OwnReminders;
use crate::core::role::AuthoritativeRole;
use crate::core::time::{format_optional, format_short};
use crate::core::urgency::is_urgent;
use chrono::{DateTime, Utc};
use cinerent_api_models::Reminder;

/// Shown to administrators, who have no rentals to be reminded of.
pub const USERS_ONLY: &str = "Access denied. This view is for users only.";
/// Shown when nothing is due.
pub const NO_REMINDERS: &str = "No active reminders found.";

/// Whether the caller may load reminders, by server-confirmed role.
#[must_use]
pub const fn may_view(role: &AuthoritativeRole) -> bool {
    !role.role().is_admin()
}

/// Controller over the caller's reminders; the endpoint is not paged.
#[must_use]
pub fn reminders_controller() -> PageController<OwnReminders> {
    PageController::new(OwnReminders, DEFAULT_PAGE_SIZE)
}

/// Display-ready reminder.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReminderCard {
    /// Rental identifier.
    pub rental_id: u64,
    /// Movie title.
    pub title: String,
    /// Due time.
    pub due_date: String,
    /// Start time.
    pub rented_at: String,
    /// Highlight as urgent.
    pub urgent: bool,
}

impl ReminderCard {
    /// Build a card, classifying urgency against `now`.
    #[must_use]
    pub fn new(reminder: &Reminder, now: DateTime<Utc>) -> Self {
        Self {
            rental_id: reminder.rental_id,
            title: reminder.movie_title.clone(),
            due_date: format_short(reminder.due_date),
            rented_at: format_optional(reminder.rented_at),
            urgent: is_urgent(reminder.due_date, now),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    #[test]
    fn card_flags_due_within_a_day() {
        let now = Utc.with_ymd_and_hms(2024, 6, 1, 8, 0, 0).unwrap();
        let reminder = Reminder {
            movie_title: "Heat".to_string(),
            rental_id: 2,
            due_date: now + Duration::hours(5),
            rented_at: None,
        };
        let card = ReminderCard::new(&reminder, now);
        assert!(card.urgent);
        assert_eq!(card.due_date, format_short(now + Duration::hours(5)));

        let later = Reminder {
            due_date: now + Duration::days(3),
            ..reminder
        };
        assert!(!ReminderCard::new(&later, now).urgent);
    }

    #[test]
    fn reminders_use_own_endpoint() {
        assert_eq!(
            reminders_controller().load().request.path,
            "rental/self/reminder"
        );
    }
}
