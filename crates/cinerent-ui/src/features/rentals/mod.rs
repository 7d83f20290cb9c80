//! Renting movies and browsing rental histories.

pub mod state;
#[cfg(target_arch = "wasm32")]
pub mod view;
