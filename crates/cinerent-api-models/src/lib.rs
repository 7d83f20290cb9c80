#![forbid(unsafe_code)]
#![deny(
    unused_must_use,
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls
)]
#![warn(missing_docs, unused)]
//! Shared HTTP DTOs for the Cinerent rental API.
//!
//! These types describe the wire contract of the remote REST service. Field
//! names follow the server's camelCase JSON; timestamps are accepted in either
//! RFC 3339 or zone-less ISO-8601 form because the server emits local
//! date-times without an offset.
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

mod timestamp;

/// Role assigned to an account by the server.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    /// Ordinary customer account.
    #[default]
    User,
    /// Administrative account.
    Admin,
}

impl Role {
    /// Wire representation of the role.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::User => "USER",
            Self::Admin => "ADMIN",
        }
    }

    /// Parse a wire role label, case-sensitively as the server emits it.
    #[must_use]
    pub fn from_wire(value: &str) -> Option<Self> {
        match value {
            "USER" => Some(Self::User),
            "ADMIN" => Some(Self::Admin),
            _ => None,
        }
    }

    /// Whether this role grants administrative access.
    #[must_use]
    pub const fn is_admin(self) -> bool {
        matches!(self, Self::Admin)
    }
}

/// Catalog genres supported by the movie endpoints.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Genre {
    /// Action.
    Action,
    /// Drama.
    Drama,
    /// Comedy.
    Comedy,
    /// Horror.
    Horror,
    /// Thriller.
    Thriller,
    /// Science fiction.
    SciFi,
    /// Fantasy.
    Fantasy,
}

impl Genre {
    /// Every genre in display order.
    #[must_use]
    pub const fn all() -> [Self; 7] {
        [
            Self::Action,
            Self::Drama,
            Self::Comedy,
            Self::Horror,
            Self::Thriller,
            Self::SciFi,
            Self::Fantasy,
        ]
    }

    /// Wire representation used in query parameters.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Action => "ACTION",
            Self::Drama => "DRAMA",
            Self::Comedy => "COMEDY",
            Self::Horror => "HORROR",
            Self::Thriller => "THRILLER",
            Self::SciFi => "SCI_FI",
            Self::Fantasy => "FANTASY",
        }
    }

    /// Human-readable label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Action => "Action",
            Self::Drama => "Drama",
            Self::Comedy => "Comedy",
            Self::Horror => "Horror",
            Self::Thriller => "Thriller",
            Self::SciFi => "Sci-fi",
            Self::Fantasy => "Fantasy",
        }
    }

    /// Parse the wire representation.
    #[must_use]
    pub fn from_wire(value: &str) -> Option<Self> {
        Self::all().into_iter().find(|genre| genre.as_str() == value)
    }
}

/// Rental duration accepted by the rent endpoint.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RentTime {
    /// Due back after one day.
    #[default]
    OneDay,
    /// Due back after one week.
    OneWeek,
}

impl RentTime {
    /// Wire representation used as the `dueDate` query parameter.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::OneDay => "ONE_DAY",
            Self::OneWeek => "ONE_WEEK",
        }
    }

    /// Lower-case phrase used in confirmation messages.
    #[must_use]
    pub const fn phrase(self) -> &'static str {
        match self {
            Self::OneDay => "one day",
            Self::OneWeek => "one week",
        }
    }

    /// Parse the wire representation.
    #[must_use]
    pub fn from_wire(value: &str) -> Option<Self> {
        match value {
            "ONE_DAY" => Some(Self::OneDay),
            "ONE_WEEK" => Some(Self::OneWeek),
            _ => None,
        }
    }
}

/// Credentials posted to `auth/authenticate`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoginRequest {
    /// Account email address.
    pub email: String,
    /// Plain-text password.
    pub password: String,
}

/// Registration payload posted to `auth/register`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RegisterRequest {
    /// Display name for the new account.
    pub username: String,
    /// Account email address.
    pub email: String,
    /// Plain-text password.
    pub password: String,
}

/// Access/refresh credential pair issued by the auth endpoints.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TokenPair {
    /// Bearer token attached to authorized calls.
    pub access_token: String,
    /// Token exchanged for a fresh pair at `auth/refresh-token`.
    pub refresh_token: String,
}

/// Account profile as returned by the user endpoints.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserProfile {
    /// Display name.
    pub name: String,
    /// Email address; the identity key for users.
    pub email: String,
    /// Server-assigned role.
    pub role: Role,
}

/// Catalog entry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Movie {
    /// Server identifier.
    pub id: u64,
    /// Movie title.
    pub title: String,
    /// Catalog genre.
    pub genre: Genre,
    /// Whether the movie can currently be rented.
    pub available: bool,
}

/// Body posted to create a catalog entry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NewMovie {
    /// Movie title.
    pub title: String,
    /// Catalog genre.
    pub genre: Genre,
    /// Initial availability; new entries are rentable.
    #[serde(default = "default_available")]
    pub available: bool,
}

const fn default_available() -> bool {
    true
}

impl NewMovie {
    /// New rentable catalog entry.
    #[must_use]
    pub fn new(title: impl Into<String>, genre: Genre) -> Self {
        Self {
            title: title.into(),
            genre,
            available: true,
        }
    }
}

/// Full replacement of a catalog entry's editable fields.
///
/// The server takes these as query parameters rather than a body; see
/// [`MovieUpdate::query_pairs`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MovieUpdate {
    /// Identifier of the movie being edited.
    pub id: u64,
    /// New title.
    pub title: String,
    /// New genre.
    pub genre: Genre,
    /// New availability flag (sent as `status`).
    pub available: bool,
}

impl MovieUpdate {
    /// Prefill an update from an existing entry.
    #[must_use]
    pub fn from_movie(movie: &Movie) -> Self {
        Self {
            id: movie.id,
            title: movie.title.clone(),
            genre: movie.genre,
            available: movie.available,
        }
    }

    /// Query parameters in the order the server documents them.
    #[must_use]
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        vec![
            ("id", self.id.to_string()),
            ("title", self.title.clone()),
            ("genre", self.genre.as_str().to_string()),
            ("status", self.available.to_string()),
        ]
    }
}

/// Rental record for a user.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Rental {
    /// Identifier used by the return endpoint.
    pub id: u64,
    /// Title of the rented movie.
    pub movie_title: String,
    /// When the rental started.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rented_at: Option<DateTime<Utc>>,
    /// When the rental is due back.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<DateTime<Utc>>,
    /// Whether the rental has been returned.
    pub returned: bool,
    /// When the rental was returned, if it has been.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub returned_at: Option<DateTime<Utc>>,
    /// Genre of the rented movie when the server includes it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub genre: Option<Genre>,
    /// Renting account when the server includes it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_email: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RentalWire {
    #[serde(alias = "movieId")]
    id: u64,
    movie_title: String,
    #[serde(default, with = "timestamp::optional")]
    rented_at: Option<DateTime<Utc>>,
    #[serde(default, with = "timestamp::optional")]
    due_date: Option<DateTime<Utc>>,
    #[serde(default)]
    returned: Option<bool>,
    #[serde(default, with = "timestamp::optional")]
    returned_at: Option<DateTime<Utc>>,
    #[serde(default)]
    genre: Option<Genre>,
    #[serde(default)]
    user_email: Option<String>,
}

impl<'de> Deserialize<'de> for Rental {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let wire = RentalWire::deserialize(deserializer)?;
        Ok(Self {
            id: wire.id,
            movie_title: wire.movie_title,
            rented_at: wire.rented_at,
            due_date: wire.due_date,
            returned: wire.returned.unwrap_or(wire.returned_at.is_some()),
            returned_at: wire.returned_at,
            genre: wire.genre,
            user_email: wire.user_email,
        })
    }
}

/// Due-date reminder for an active rental.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Reminder {
    /// Title of the rented movie.
    pub movie_title: String,
    /// Rental the reminder refers to.
    pub rental_id: u64,
    /// When the rental is due back.
    #[serde(with = "timestamp::required")]
    pub due_date: DateTime<Utc>,
    /// When the rental started, if known.
    #[serde(default, with = "timestamp::optional", skip_serializing_if = "Option::is_none")]
    pub rented_at: Option<DateTime<Utc>>,
}

/// Error document carried inside the server's error envelope.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct ErrorMessage {
    #[serde(rename = "type", default)]
    /// Problem type reference.
    pub kind: Option<String>,
    /// Short summary of the problem.
    #[serde(default)]
    pub title: Option<String>,
    /// Status code rendered as text by the server.
    #[serde(default)]
    pub status: Option<String>,
    /// Human-readable detail.
    #[serde(default)]
    pub detail: Option<String>,
    /// Request path that failed.
    #[serde(default)]
    pub instance: Option<String>,
}

/// Error body returned by the server on rejected requests.
///
/// Both the enveloped form (`{"errors": {...}}`) and a flat document with a
/// `detail` or `message` field are accepted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct ApiErrorBody {
    /// Enveloped error document.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub errors: Option<ErrorMessage>,
    /// Flat detail field.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
    /// Flat message field.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl ApiErrorBody {
    /// Best available user-facing text, if the body carried any.
    #[must_use]
    pub fn user_message(&self) -> Option<String> {
        let enveloped = self
            .errors
            .as_ref()
            .and_then(|err| err.detail.clone().or_else(|| err.title.clone()));
        enveloped
            .or_else(|| self.detail.clone())
            .or_else(|| self.message.clone())
            .map(|text| text.trim().to_string())
            .filter(|text| !text.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Local, TimeZone};

    #[test]
    fn token_pair_uses_camel_case() {
        let pair: TokenPair =
            serde_json::from_str(r#"{"accessToken":"t1","refreshToken":"r1"}"#).unwrap();
        assert_eq!(pair.access_token, "t1");
        assert_eq!(pair.refresh_token, "r1");
        let json = serde_json::to_string(&pair).unwrap();
        assert!(json.contains("\"accessToken\":\"t1\""));
    }

    #[test]
    fn roles_and_genres_use_wire_names() {
        let profile: UserProfile =
            serde_json::from_str(r#"{"name":"Ann","email":"a@b.com","role":"ADMIN"}"#).unwrap();
        assert_eq!(profile.role, Role::Admin);
        let movie: Movie =
            serde_json::from_str(r#"{"id":7,"title":"Alien","genre":"SCI_FI","available":true}"#)
                .unwrap();
        assert_eq!(movie.genre, Genre::SciFi);
        assert_eq!(Genre::from_wire("SCI_FI"), Some(Genre::SciFi));
        assert_eq!(Genre::from_wire("sci_fi"), None);
        assert_eq!(Role::from_wire("USER"), Some(Role::User));
    }

    #[test]
    fn new_movie_defaults_to_available() {
        let movie: NewMovie = serde_json::from_str(r#"{"title":"Heat","genre":"ACTION"}"#).unwrap();
        assert!(movie.available);
        assert!(NewMovie::new("Heat", Genre::Action).available);
    }

    #[test]
    fn movie_update_serialises_status_query_pair() {
        let update = MovieUpdate {
            id: 3,
            title: "Up".to_string(),
            genre: Genre::Comedy,
            available: false,
        };
        assert_eq!(
            update.query_pairs(),
            vec![
                ("id", "3".to_string()),
                ("title", "Up".to_string()),
                ("genre", "COMEDY".to_string()),
                ("status", "false".to_string()),
            ]
        );
    }

    #[test]
    fn rental_accepts_server_field_names_and_local_timestamps() {
        let rental: Rental = serde_json::from_str(
            r#"{"movieId":12,"movieTitle":"Heat","genre":"ACTION","rentedAt":"2024-05-01T10:15:30","returnedAt":"2024-05-02T08:00:00.123"}"#,
        )
        .unwrap();
        assert_eq!(rental.id, 12);
        assert!(rental.returned);
        assert_eq!(
            rental.rented_at,
            Local
                .with_ymd_and_hms(2024, 5, 1, 10, 15, 30)
                .earliest()
                .map(|local| local.with_timezone(&Utc))
        );
        assert!(rental.due_date.is_none());
    }

    #[test]
    fn rental_explicit_returned_flag_wins() {
        let rental: Rental = serde_json::from_str(
            r#"{"id":4,"movieTitle":"Up","dueDate":"2024-05-03T10:00:00Z","returned":false}"#,
        )
        .unwrap();
        assert!(!rental.returned);
        assert_eq!(
            rental.due_date,
            Some(Utc.with_ymd_and_hms(2024, 5, 3, 10, 0, 0).unwrap())
        );
    }

    #[test]
    fn reminder_requires_due_date() {
        let reminder: Reminder = serde_json::from_str(
            r#"{"movieTitle":"Heat","rentalId":9,"dueDate":"2024-05-03T10:00:00+02:00"}"#,
        )
        .unwrap();
        assert_eq!(
            reminder.due_date,
            Utc.with_ymd_and_hms(2024, 5, 3, 8, 0, 0).unwrap()
        );
        assert!(reminder.rented_at.is_none());
        assert!(serde_json::from_str::<Reminder>(r#"{"movieTitle":"Heat","rentalId":9}"#).is_err());
    }

    #[test]
    fn error_body_prefers_enveloped_detail() {
        let body: ApiErrorBody = serde_json::from_str(
            r#"{"errors":{"type":"about:blank","title":"Bad Request","status":"400","detail":"Missing required parameters","instance":"/api/v1/users/self"}}"#,
        )
        .unwrap();
        assert_eq!(
            body.user_message().as_deref(),
            Some("Missing required parameters")
        );
        let flat: ApiErrorBody = serde_json::from_str(r#"{"message":"  nope "}"#).unwrap();
        assert_eq!(flat.user_message().as_deref(), Some("nope"));
        assert_eq!(ApiErrorBody::default().user_message(), None);
    }
}
