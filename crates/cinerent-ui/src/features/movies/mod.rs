//! Movie catalog: browse, rent links, and administrator edits.

pub mod state;
#[cfg(target_arch = "wasm32")]
pub mod view;
