//! Home view: user directory for administrators, active rentals otherwise.

pub mod state;
#[cfg(target_arch = "wasm32")]
pub mod view;
