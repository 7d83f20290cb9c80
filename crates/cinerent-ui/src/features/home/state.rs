//! Home view data-set selection.

use crate::core::config::HOME_PAGE_SIZE;
use crate::core::paging::PageController;
use crate::core::resources::{OwnRentals, RentalFilter, UserDirectory};
use crate::core::role::AuthoritativeRole;

/// Shown when an administrator's user list is empty.
pub const NO_USERS: &str = "No users found.";
/// Shown when a user has no active rentals.
pub const NO_ACTIVE_RENTALS: &str = "No active rentals.";

/// Collection the home view lists.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HomeDataset {
    /// Every account, with delete and details actions.
    Users,
    /// The caller's first page of active rentals.
    ActiveRentals,
}

impl HomeDataset {
    /// Pick the data set from the server-confirmed role.
    #[must_use]
    pub const fn for_role(role: &AuthoritativeRole) -> Self {
        if role.role().is_admin() {
            Self::Users
        } else {
            Self::ActiveRentals
        }
    }
}

/// Controller for the administrator's user list.
#[must_use]
pub fn users_controller() -> PageController<UserDirectory> {
    PageController::new(UserDirectory, HOME_PAGE_SIZE)
}

/// Controller for the first page of active rentals.
#[must_use]
pub fn active_rentals_controller() -> PageController<OwnRentals> {
    PageController::with_filter(OwnRentals, HOME_PAGE_SIZE, RentalFilter { returned: false })
}
