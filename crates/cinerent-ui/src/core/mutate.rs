//! Local edits applied after the server confirms a mutation.

use crate::core::error::Outcome;
use cinerent_api_models::{Movie, Reminder, Rental, UserProfile};
use std::fmt::Debug;

/// A resource with a stable identity key.
pub trait Keyed {
    /// Identity key type.
    type Key: PartialEq + Clone + Debug;

    /// Identity key of this item.
    fn key(&self) -> Self::Key;
}

impl Keyed for UserProfile {
    type Key = String;

    fn key(&self) -> String {
        self.email.clone()
    }
}

impl Keyed for Movie {
    type Key = u64;

    fn key(&self) -> u64 {
        self.id
    }
}

impl Keyed for Rental {
    type Key = u64;

    fn key(&self) -> u64 {
        self.id
    }
}

impl Keyed for Reminder {
    type Key = u64;

    fn key(&self) -> u64 {
        self.rental_id
    }
}

/// Confirmed change to a collection.
#[derive(Clone, Debug, PartialEq)]
pub enum Mutation<T: Keyed> {
    /// Append a created item.
    Insert(T),
    /// Substitute the item with the given key.
    Replace(T::Key, T),
    /// Drop the item with the given key.
    Remove(T::Key),
}

/// Append `item`.
pub fn insert<T>(items: &mut Vec<T>, item: T) {
    items.push(item);
}

/// Substitute the element keyed `key`; returns whether one matched.
pub fn replace<T: Keyed>(items: &mut [T], key: &T::Key, item: T) -> bool {
    match items.iter_mut().find(|existing| existing.key() == *key) {
        Some(slot) => {
            *slot = item;
            true
        }
        None => false,
    }
}

/// Drop every element keyed `key`; returns whether any matched.
pub fn remove_by_key<T: Keyed>(items: &mut Vec<T>, key: &T::Key) -> bool {
    let before = items.len();
    items.retain(|existing| existing.key() != *key);
    items.len() != before
}

/// Apply `mutation`; returns whether the collection changed.
pub fn apply<T: Keyed>(items: &mut Vec<T>, mutation: Mutation<T>) -> bool {
    match mutation {
        Mutation::Insert(item) => {
            insert(items, item);
            true
        }
        Mutation::Replace(key, item) => replace(items, &key, item),
        Mutation::Remove(key) => remove_by_key(items, &key),
    }
}

/// Apply a mutation only if the server confirmed it.
///
/// # Errors
/// Returns the failure unchanged; `items` is left untouched.
pub fn reconcile<T: Keyed>(items: &mut Vec<T>, outcome: Outcome<Mutation<T>>) -> Outcome<()> {
    let mutation = outcome?;
    if !apply(items, mutation) {
        tracing::debug!("confirmed mutation matched no local item");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::AccessError;
    use cinerent_api_models::{Genre, Role};

    fn movie(id: u64, title: &str) -> Movie {
        Movie {
            id,
            title: title.to_string(),
            genre: Genre::Drama,
            available: true,
        }
    }

    fn user(email: &str) -> UserProfile {
        UserProfile {
            name: "n".to_string(),
            email: email.to_string(),
            role: Role::User,
        }
    }

    #[test]
    fn insert_appends() {
        let mut items = vec![movie(1, "A")];
        assert!(apply(&mut items, Mutation::Insert(movie(2, "B"))));
        assert_eq!(items.iter().map(|m| m.id).collect::<Vec<_>>(), vec![1, 2]);
    }

    #[test]
    fn replace_keeps_position() {
        let mut items = vec![movie(1, "A"), movie(2, "B"), movie(3, "C")];
        assert!(apply(&mut items, Mutation::Replace(2, movie(2, "B2"))));
        assert_eq!(items[1].title, "B2");
        assert_eq!(items.len(), 3);
    }

    #[test]
    fn replace_of_missing_key_is_noop() {
        let mut items = vec![movie(1, "A")];
        assert!(!apply(&mut items, Mutation::Replace(9, movie(9, "Z"))));
        assert_eq!(items, vec![movie(1, "A")]);
    }

    #[test]
    fn remove_by_email_key() {
        let mut items = vec![user("a@b.com"), user("c@d.com")];
        assert!(remove_by_key(&mut items, &"a@b.com".to_string()));
        assert_eq!(items, vec![user("c@d.com")]);
        assert!(!remove_by_key(&mut items, &"a@b.com".to_string()));
    }

    #[test]
    fn failed_outcome_leaves_collection_untouched() {
        let mut items = vec![user("me@b.com"), user("c@d.com")];
        let outcome = reconcile(
            &mut items,
            Err(AccessError::client("Cannot delete yourself.")),
        );
        assert!(outcome.is_err());
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].email, "me@b.com");
    }

    #[test]
    fn confirmed_outcome_is_applied() {
        let mut items = vec![movie(1, "A"), movie(2, "B")];
        reconcile(&mut items, Ok(Mutation::Remove(1))).unwrap();
        assert_eq!(items, vec![movie(2, "B")]);
    }
}
