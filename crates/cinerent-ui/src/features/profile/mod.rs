//! The caller's own profile and rental history.

pub mod state;
#[cfg(target_arch = "wasm32")]
pub mod view;
