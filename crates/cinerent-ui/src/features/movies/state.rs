//! Catalog form state and confirmation messages.

use crate::core::api::FIELDS_REQUIRED;
use crate::core::config::DEFAULT_PAGE_SIZE;
use crate::core::error::{AccessError, Outcome};
use crate::core::paging::PageController;
use crate::core::resources::MovieCatalog;
use crate::core::role::ResolvedRole;
use cinerent_api_models::{Genre, Movie, MovieUpdate, NewMovie};

/// Confirmation shown after a delete.
pub const DELETED_MESSAGE: &str = "Movie deleted successfully";
/// Shown when the catalog is empty.
pub const NO_MOVIES: &str = "No movies available.";

/// Confirmation shown after a create.
#[must_use]
pub fn added_message(movie: &Movie) -> String {
    format!("Movie \"{}\" added", movie.title)
}

/// Confirmation shown after an update.
#[must_use]
pub fn updated_message(movie: &Movie) -> String {
    format!("Movie \"{}\" updated successfully", movie.title)
}

/// Controller over the whole catalog; the list endpoint ignores paging.
#[must_use]
pub fn catalog_controller() -> PageController<MovieCatalog> {
    PageController::new(MovieCatalog, DEFAULT_PAGE_SIZE)
}

/// Controls rendered on each catalog row.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RowControls {
    /// Edit and delete.
    Manage,
    /// Rent link when the movie is available.
    Rent,
}

impl RowControls {
    /// Decode-first choice of row controls.
    #[must_use]
    pub const fn for_role(role: ResolvedRole) -> Self {
        if role.shows_admin_controls() {
            Self::Manage
        } else {
            Self::Rent
        }
    }
}

/// Create/edit form fields.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MovieFormState {
    /// Title input.
    pub title: String,
    /// Selected genre.
    pub genre: Genre,
    /// Availability toggle (edit only).
    pub available: bool,
}

impl Default for MovieFormState {
    fn default() -> Self {
        Self {
            title: String::new(),
            genre: Genre::Action,
            available: true,
        }
    }
}

impl MovieFormState {
    /// Prefill from an existing entry.
    #[must_use]
    pub fn from_movie(movie: &Movie) -> Self {
        Self {
            title: movie.title.clone(),
            genre: movie.genre,
            available: movie.available,
        }
    }

    /// Body for the create call.
    ///
    /// # Errors
    /// [`AccessError::Validation`] when the title is blank.
    pub fn to_new_movie(&self) -> Outcome<NewMovie> {
        Ok(NewMovie::new(self.checked_title()?, self.genre))
    }

    /// Parameters for the update call on movie `id`.
    ///
    /// # Errors
    /// [`AccessError::Validation`] when the title is blank.
    pub fn to_update(&self, id: u64) -> Outcome<MovieUpdate> {
        Ok(MovieUpdate {
            id,
            title: self.checked_title()?,
            genre: self.genre,
            available: self.available,
        })
    }

    fn checked_title(&self) -> Outcome<String> {
        let title = self.title.trim();
        if title.is_empty() {
            return Err(AccessError::Validation(FIELDS_REQUIRED.to_string()));
        }
        Ok(title.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::role::RoleSource;
    use cinerent_api_models::Role;

    fn heat() -> Movie {
        Movie {
            id: 4,
            title: "Heat".to_string(),
            genre: Genre::Thriller,
            available: false,
        }
    }

    #[test]
    fn messages_quote_title() {
        assert_eq!(added_message(&heat()), "Movie \"Heat\" added");
        assert_eq!(updated_message(&heat()), "Movie \"Heat\" updated successfully");
    }

    #[test]
    fn form_round_trips_existing_movie() {
        let form = MovieFormState::from_movie(&heat());
        let update = form.to_update(4).unwrap();
        assert_eq!(update, MovieUpdate::from_movie(&heat()));
    }

    #[test]
    fn blank_title_is_rejected() {
        let form = MovieFormState {
            title: "  ".to_string(),
            ..MovieFormState::default()
        };
        assert_eq!(
            form.to_new_movie(),
            Err(AccessError::Validation(FIELDS_REQUIRED.to_string()))
        );
    }

    #[test]
    fn catalog_fetches_whole_list() {
        assert_eq!(catalog_controller().load().request.path, "movies/list");
    }

    #[test]
    fn claims_only_choose_controls() {
        let admin = ResolvedRole {
            role: Role::Admin,
            source: RoleSource::Claims,
        };
        let unknown = ResolvedRole {
            role: Role::User,
            source: RoleSource::Default,
        };
        assert_eq!(RowControls::for_role(admin), RowControls::Manage);
        assert_eq!(RowControls::for_role(unknown), RowControls::Rent);
    }
}
