//! App-wide yewdux store.
//!
//! # Design
//! - Only sign-in status and the decode-first role live here; page data stays
//!   in each view's controller.
//! - The durable session remains the source of truth; this slice mirrors it
//!   for rendering the shell.

use crate::core::role::ResolvedRole;
use yewdux::store::Store;

/// Global application store.
#[derive(Clone, Debug, PartialEq, Eq, Store, Default)]
pub struct AppStore {
    /// Authentication state for the shell.
    pub auth: AuthSlice,
}

/// Sign-in state mirrored from the session store.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct AuthSlice {
    /// Whether a session is stored.
    pub signed_in: bool,
    /// Decode-first role, for navigation affordances.
    pub affordance: Option<ResolvedRole>,
}

impl AppStore {
    /// Record a fresh session.
    pub fn sign_in(&mut self, affordance: ResolvedRole) {
        self.auth.signed_in = true;
        self.auth.affordance = Some(affordance);
    }

    /// Forget the session.
    pub fn sign_out(&mut self) {
        self.auth = AuthSlice::default();
    }

    /// Whether admin-only navigation should be shown.
    #[must_use]
    pub fn shows_admin_controls(&self) -> bool {
        self.auth
            .affordance
            .is_some_and(ResolvedRole::shows_admin_controls)
    }
}
