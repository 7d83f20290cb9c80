#![forbid(unsafe_code)]
#![deny(unused, clippy::all, clippy::pedantic, clippy::nursery)]
//! Cinerent binary.
//!
//! Trunk builds this for wasm32 and mounts the client. A native build has no
//! DOM to render into; it logs where the client would send its requests.

#[cfg(target_arch = "wasm32")]
fn main() {
    cinerent_ui::run_app();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> anyhow::Result<()> {
    use cinerent_telemetry::{LogFormat, LoggingConfig, init_logging};

    init_logging(&LoggingConfig {
        format: LogFormat::Pretty,
        ..LoggingConfig::default()
    })?;
    let config = cinerent_ui::core::config::ClientConfig::default();
    tracing::warn!(
        api = %native::api_root(&config),
        page_size = config.page_size,
        "{}",
        native::BROWSER_ONLY
    );
    Ok(())
}

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use cinerent_ui::core::config::ClientConfig;

    pub const BROWSER_ONLY: &str =
        "cinerent-ui renders in the browser; serve it with `trunk serve`";

    /// Endpoint root the client resolves paths against.
    pub fn api_root(config: &ClientConfig) -> String {
        config.url("")
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn api_root_follows_configured_origin() {
            assert_eq!(api_root(&ClientConfig::default()), "/api/v1/");
            assert_eq!(
                api_root(&ClientConfig::with_base_url("https://rent.example/")),
                "https://rent.example/api/v1/"
            );
        }
    }
}
