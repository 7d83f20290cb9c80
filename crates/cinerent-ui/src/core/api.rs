//! Typed operations of the rental API on top of [`AuthorizedClient`].

use crate::core::client::{AuthorizedClient, LoginRedirect, NoRedirect, RequestSpec};
use crate::core::endpoints;
use crate::core::error::{AccessError, Outcome};
use crate::core::session::{Session, SessionStore};
use crate::core::transport::Transport;
use cinerent_api_models::{
    LoginRequest, Movie, MovieUpdate, NewMovie, RegisterRequest, Reminder, RentTime, Role,
    TokenPair, UserProfile,
};

/// Shown when required form fields are blank.
pub const FIELDS_REQUIRED: &str = "All fields are required.";
/// Shown when a login is rejected.
pub const INVALID_CREDENTIALS: &str = "Invalid email or password";
/// Shown when a profile update carries no fields.
pub const NOTHING_TO_UPDATE: &str = "Enter value to update.";
/// Shown when an administrator tries to delete their own account.
pub const CANNOT_DELETE_SELF: &str = "Cannot delete yourself.";

/// Rental API facade.
pub struct CinerentApi<T, S, R = NoRedirect> {
    client: AuthorizedClient<T, S, R>,
}

impl<T, S, R> CinerentApi<T, S, R>
where
    T: Transport,
    S: SessionStore,
    R: LoginRedirect,
{
    /// Wrap an authorized client.
    pub const fn new(client: AuthorizedClient<T, S, R>) -> Self {
        Self { client }
    }

    /// Underlying client, for paginated fetches.
    pub const fn client(&self) -> &AuthorizedClient<T, S, R> {
        &self.client
    }

    /// Currently stored session.
    pub fn session(&self) -> Option<Session> {
        self.client.sessions().load()
    }

    /// Exchange credentials for a session and store it.
    ///
    /// # Errors
    /// [`AccessError::Validation`] for blank fields, a [`AccessError::ClientError`]
    /// carrying [`INVALID_CREDENTIALS`] when the server rejects the login.
    pub async fn authenticate(&self, email: &str, password: &str) -> Outcome<Session> {
        let request = LoginRequest {
            email: required(email)?,
            password: required(password)?,
        };
        let spec = RequestSpec::post(endpoints::AUTHENTICATE).with_json(&request)?;
        let pair = self
            .client
            .request_anonymous::<TokenPair>(spec)
            .await
            .map_err(|err| match err {
                AccessError::ClientError { status, .. } | AccessError::ServerError { status } => {
                    AccessError::ClientError {
                        status,
                        message: INVALID_CREDENTIALS.to_string(),
                    }
                }
                other => other,
            })?;
        self.store_pair(pair)
    }

    /// Create an account and store the issued session.
    ///
    /// # Errors
    /// [`AccessError::Validation`] for blank fields; a rejection carries the
    /// server's message.
    pub async fn register(&self, username: &str, email: &str, password: &str) -> Outcome<Session> {
        let request = RegisterRequest {
            username: required(username)?,
            email: required(email)?,
            password: required(password)?,
        };
        let spec = RequestSpec::post(endpoints::REGISTER).with_json(&request)?;
        let pair = self.client.request_anonymous::<TokenPair>(spec).await?;
        self.store_pair(pair)
    }

    /// Tell the server to revoke the session, then drop it locally regardless
    /// of the outcome.
    pub async fn logout(&self) {
        if self.session().is_some()
            && let Err(err) = self.client.request(RequestSpec::post(endpoints::LOGOUT)).await
        {
            tracing::info!(error = %err, kind = err.kind(), "logout call failed; clearing locally");
        }
        self.client.sessions().clear();
    }

    /// Trade the refresh token for a new pair.
    ///
    /// # Errors
    /// [`AccessError::Unauthenticated`] without a session, otherwise the
    /// classification of the refresh call.
    pub async fn refresh(&self) -> Outcome<Session> {
        let session = self.session().ok_or(AccessError::Unauthenticated)?;
        let pair = self
            .client
            .request_json_with_bearer::<TokenPair>(
                RequestSpec::post(endpoints::REFRESH_TOKEN),
                session.refresh_token(),
            )
            .await?;
        self.store_pair(pair)
    }

    /// The caller's own profile; the authoritative source of its role.
    ///
    /// # Errors
    /// The classification of the call.
    pub async fn self_profile(&self) -> Outcome<UserProfile> {
        self.client
            .request_json(RequestSpec::get(endpoints::SELF_PROFILE).reauthenticate_on_forbidden())
            .await
    }

    /// Change the caller's name and/or password.
    ///
    /// # Errors
    /// [`AccessError::Validation`] with [`NOTHING_TO_UPDATE`] when both are
    /// blank, otherwise the classification of the call.
    pub async fn update_self(
        &self,
        name: Option<&str>,
        password: Option<&str>,
    ) -> Outcome<UserProfile> {
        let name = optional(name);
        let password = optional(password);
        if name.is_none() && password.is_none() {
            return Err(AccessError::Validation(NOTHING_TO_UPDATE.to_string()));
        }
        self.client
            .request_json(RequestSpec::put(endpoints::update_self(name, password)))
            .await
    }

    /// Every account (administrators only).
    ///
    /// # Errors
    /// The classification of the call.
    pub async fn list_users(&self) -> Outcome<Vec<UserProfile>> {
        self.client
            .request_json(RequestSpec::get(endpoints::USER_LIST).reauthenticate_on_forbidden())
            .await
    }

    /// One account by email (administrators only).
    ///
    /// # Errors
    /// The classification of the call.
    pub async fn user_by_email(&self, email: &str) -> Outcome<UserProfile> {
        self.client
            .request_json(
                RequestSpec::get(endpoints::user_by_email(email)).reauthenticate_on_forbidden(),
            )
            .await
    }

    /// Delete an account (administrators only).
    ///
    /// # Errors
    /// A `400` is reported as [`CANNOT_DELETE_SELF`]; otherwise the
    /// classification of the call.
    pub async fn delete_user(&self, email: &str) -> Outcome<()> {
        self.client
            .request_empty(RequestSpec::delete(endpoints::user_by_email(email)))
            .await
            .map_err(|err| match err {
                AccessError::ClientError { status: 400, .. } => AccessError::client(CANNOT_DELETE_SELF),
                other => other,
            })
    }

    /// Edit another account (administrators only).
    ///
    /// # Errors
    /// [`AccessError::Validation`] when no field is given, otherwise the
    /// classification of the call.
    pub async fn update_user(
        &self,
        email: &str,
        name: Option<&str>,
        password: Option<&str>,
        role: Option<Role>,
    ) -> Outcome<UserProfile> {
        let name = optional(name);
        let password = optional(password);
        if name.is_none() && password.is_none() && role.is_none() {
            return Err(AccessError::Validation(NOTHING_TO_UPDATE.to_string()));
        }
        self.client
            .request_json(RequestSpec::put(endpoints::update_user(
                email, name, password, role,
            )))
            .await
    }

    /// The full catalog.
    ///
    /// # Errors
    /// The classification of the call.
    pub async fn list_movies(&self) -> Outcome<Vec<Movie>> {
        self.client
            .request_json(RequestSpec::get(endpoints::MOVIE_LIST).reauthenticate_on_forbidden())
            .await
    }

    /// Add a catalog entry (administrators only).
    ///
    /// # Errors
    /// [`AccessError::Validation`] for a blank title, otherwise the
    /// classification of the call.
    pub async fn create_movie(&self, movie: &NewMovie) -> Outcome<Movie> {
        if movie.title.trim().is_empty() {
            return Err(AccessError::Validation(FIELDS_REQUIRED.to_string()));
        }
        let spec = RequestSpec::post(endpoints::MOVIES).with_json(movie)?;
        self.client.request_json(spec).await
    }

    /// Replace a catalog entry's fields (administrators only).
    ///
    /// # Errors
    /// The classification of the call.
    pub async fn update_movie(&self, update: &MovieUpdate) -> Outcome<Movie> {
        self.client
            .request_json(RequestSpec::put(endpoints::update_movie(update)))
            .await
    }

    /// Remove a catalog entry (administrators only).
    ///
    /// # Errors
    /// The classification of the call.
    pub async fn delete_movie(&self, id: u64) -> Outcome<()> {
        self.client
            .request_empty(RequestSpec::delete(endpoints::movie(id)))
            .await
    }

    /// Rent a movie for the chosen period.
    ///
    /// # Errors
    /// The classification of the call.
    pub async fn rent_movie(&self, movie_id: u64, rent_time: RentTime) -> Outcome<()> {
        self.client
            .request_empty(RequestSpec::put(endpoints::rent_movie(movie_id, rent_time)))
            .await
    }

    /// Mark a rental returned.
    ///
    /// # Errors
    /// The classification of the call.
    pub async fn return_rental(&self, rental_id: u64) -> Outcome<()> {
        self.client
            .request_empty(RequestSpec::put(endpoints::return_rental(rental_id)))
            .await
    }

    /// Due-date reminders for the caller's active rentals.
    ///
    /// # Errors
    /// The classification of the call.
    pub async fn reminders(&self) -> Outcome<Vec<Reminder>> {
        self.client
            .request_json(RequestSpec::get(endpoints::OWN_REMINDERS).reauthenticate_on_forbidden())
            .await
    }

    fn store_pair(&self, pair: TokenPair) -> Outcome<Session> {
        let session = Session::from_pair(pair)
            .ok_or_else(|| AccessError::Decode("server issued an empty token".to_string()))?;
        self.client.sessions().save(&session);
        Ok(session)
    }
}

fn required(value: &str) -> Outcome<String> {
    let value = value.trim();
    if value.is_empty() {
        return Err(AccessError::Validation(FIELDS_REQUIRED.to_string()));
    }
    Ok(value.to_string())
}

fn optional(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|value| !value.is_empty())
}
