//! Due-date reminders for non-administrators.

pub mod state;
#[cfg(target_arch = "wasm32")]
pub mod view;
