//! User administration messages and access rule.

use crate::core::role::AuthoritativeRole;
use cinerent_api_models::Role;

/// Shown to non-administrators on the details view.
pub const ADMINS_ONLY: &str = "Access denied. Only admins can view user details.";

/// Confirmation shown after deleting an account.
#[must_use]
pub fn deleted_message(email: &str) -> String {
    format!("User {email} deleted successfully.")
}

/// Confirmation shown after an administrator edits an account.
#[must_use]
pub fn updated_message(email: &str) -> String {
    format!("User {email} updated successfully.")
}

/// Administrator edit form for another account. Blank fields are left unchanged.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AccountEdit {
    /// Replacement display name.
    pub name: String,
    /// Replacement password.
    pub password: String,
    /// Replacement role; `None` keeps the current one.
    pub role: Option<Role>,
}

impl AccountEdit {
    /// Arguments for [`CinerentApi::update_user`](crate::core::api::CinerentApi::update_user).
    #[must_use]
    pub fn arguments(&self) -> (Option<&str>, Option<&str>, Option<Role>) {
        (
            non_blank(&self.name),
            non_blank(&self.password),
            self.role,
        )
    }
}

fn non_blank(value: &str) -> Option<&str> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then_some(trimmed)
}

/// Whether the caller may open another account's details.
#[must_use]
pub const fn may_view_details(role: &AuthoritativeRole) -> bool {
    role.role().is_admin()
}
