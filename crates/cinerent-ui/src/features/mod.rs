//! Feature slices. Each pairs a host-testable `state` module with a
//! wasm-only `view`.

pub mod auth;
pub mod home;
pub mod movies;
pub mod profile;
pub mod reminders;
pub mod rentals;
pub mod users;
