//! Account administration: directory rows and per-user details.

pub mod state;
#[cfg(target_arch = "wasm32")]
pub mod view;
