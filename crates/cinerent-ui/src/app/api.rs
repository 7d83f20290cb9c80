//! API context for sharing a singleton client instance.
//!
//! # Design
//! - Create exactly one API facade per app boot.
//! - The session lives in `localStorage`, so the facade never needs rebuilding.

use crate::core::api::CinerentApi;
use crate::core::client::AuthorizedClient;
use crate::core::config::ClientConfig;
use crate::services::http::FetchTransport;
use crate::services::navigation::BrowserRedirect;
use crate::services::storage::{BrowserSessionStore, BrowserStorage};
use std::rc::Rc;

/// API facade wired to the browser.
pub(crate) type BrowserApi = CinerentApi<FetchTransport, BrowserSessionStore, BrowserRedirect>;

/// Shared API context for views.
#[derive(Clone)]
pub(crate) struct ApiCtx {
    /// Singleton API facade.
    pub api: Rc<BrowserApi>,
}

impl ApiCtx {
    /// Wire the facade for `config`.
    pub(crate) fn new(config: ClientConfig) -> Self {
        let client = AuthorizedClient::new(
            config,
            FetchTransport,
            BrowserSessionStore::new(BrowserStorage),
            BrowserRedirect,
        );
        Self {
            api: Rc::new(CinerentApi::new(client)),
        }
    }
}

impl PartialEq for ApiCtx {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.api, &other.api)
    }
}

/// The shared facade; rebuilt from stored preferences if no provider is mounted.
#[yew::hook]
pub(crate) fn use_api() -> Rc<BrowserApi> {
    yew::use_context::<ApiCtx>().map_or_else(
        || {
            tracing::warn!("no API context provided; building a detached client");
            ApiCtx::new(super::preferences::client_config()).api
        },
        |ctx| ctx.api,
    )
}
