//! DOM-free core: session, claims, authorized client, role gate, paging,
//! collection mutation, and urgency.
//!
//! Everything here compiles and is tested on the host target; the browser
//! bindings live in `services` and `app`.

pub mod api;
pub mod claims;
pub mod client;
pub mod config;
pub(crate) mod endpoints;
pub mod error;
pub mod message;
pub mod mutate;
pub mod paging;
pub mod resources;
pub mod role;
pub mod session;
pub mod store;
pub mod time;
pub mod transport;
pub mod urgency;

#[cfg(test)]
pub(crate) mod testing;
