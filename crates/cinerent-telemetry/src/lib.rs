#![forbid(unsafe_code)]
#![deny(
    unused_must_use,
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls
)]
#![warn(missing_docs, unused)]
//! Logging primitives shared across the Cinerent workspace.
//!
//! Centralises `tracing` subscriber installation so the browser client and the
//! native test harness format events the same way. On `wasm32` targets the
//! formatted lines are routed to the browser console.

pub mod console;
pub mod init;

pub use console::LineWriter;
#[cfg(target_arch = "wasm32")]
pub use console::ConsoleMakeWriter;
pub use init::{DEFAULT_LOG_LEVEL, LogFormat, LoggingConfig, build_sha, init_logging};
