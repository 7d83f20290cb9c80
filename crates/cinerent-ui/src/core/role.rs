//! Role gate: which role the current session acts under.
//!
//! Two strategies coexist:
//! - decode-first reads the untrusted token claims and may only decide which
//!   controls are rendered;
//! - server-first asks the profile endpoint and is the only input allowed to
//!   choose which collection is fetched. [`AuthoritativeRole`] can only be
//!   built from a server response, so data-set branches take it by type.

use crate::core::api::CinerentApi;
use crate::core::claims;
use crate::core::client::LoginRedirect;
use crate::core::error::{AccessError, Outcome};
use crate::core::session::{Session, SessionStore};
use crate::core::transport::Transport;
use cinerent_api_models::{Role, UserProfile};

/// Where a resolved role came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RoleSource {
    /// Decoded token claims.
    Claims,
    /// No usable claims; defaulted to the non-administrative role.
    Default,
    /// The caller's profile as reported by the server.
    Profile,
}

/// Resolution strategy, chosen per view.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Strategy {
    /// Token claims when present; for show/hide of controls only.
    DecodeFirst,
    /// Profile endpoint; for anything that selects a data set.
    ServerFirst,
}

/// A role together with its provenance.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ResolvedRole {
    /// Effective role.
    pub role: Role,
    /// Provenance of `role`.
    pub source: RoleSource,
}

impl ResolvedRole {
    /// Whether admin-only controls should be rendered.
    #[must_use]
    pub const fn shows_admin_controls(self) -> bool {
        self.role.is_admin()
    }
}

/// Role confirmed by the profile endpoint.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthoritativeRole {
    profile: UserProfile,
}

impl AuthoritativeRole {
    /// Server-reported role.
    #[must_use]
    pub const fn role(&self) -> Role {
        self.profile.role
    }

    /// Profile the role was read from.
    #[must_use]
    pub const fn profile(&self) -> &UserProfile {
        &self.profile
    }

    /// Take the profile.
    #[must_use]
    pub fn into_profile(self) -> UserProfile {
        self.profile
    }

    /// Resolved view of this role.
    #[must_use]
    pub const fn resolved(&self) -> ResolvedRole {
        ResolvedRole {
            role: self.profile.role,
            source: RoleSource::Profile,
        }
    }
}

/// Decode-first resolution from the session's claims.
#[must_use]
pub fn affordance_role(session: &Session) -> ResolvedRole {
    match claims::decode(session.access_token()) {
        Some(claims) => ResolvedRole {
            role: claims.role(),
            source: RoleSource::Claims,
        },
        None => ResolvedRole {
            role: claims::affordance_role(None),
            source: RoleSource::Default,
        },
    }
}

/// Server-first resolution via the caller's own profile.
///
/// # Errors
/// The classification of the profile call.
pub async fn authoritative_role<T, S, R>(api: &CinerentApi<T, S, R>) -> Outcome<AuthoritativeRole>
where
    T: Transport,
    S: SessionStore,
    R: LoginRedirect,
{
    let profile = api.self_profile().await?;
    tracing::debug!(role = profile.role.as_str(), "role confirmed by server");
    Ok(AuthoritativeRole { profile })
}

/// Resolve the session's role with the given strategy.
///
/// # Errors
/// [`AccessError::Unauthenticated`] without a session; for
/// [`Strategy::ServerFirst`], the classification of the profile call.
pub async fn resolve<T, S, R>(api: &CinerentApi<T, S, R>, strategy: Strategy) -> Outcome<ResolvedRole>
where
    T: Transport,
    S: SessionStore,
    R: LoginRedirect,
{
    match strategy {
        Strategy::DecodeFirst => api
            .session()
            .map(|session| affordance_role(&session))
            .ok_or(AccessError::Unauthenticated),
        Strategy::ServerFirst => authoritative_role(api).await.map(|role| role.resolved()),
    }
}
