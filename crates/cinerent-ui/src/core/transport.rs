//! Raw HTTP exchange seam.
//!
//! The authorized client speaks to the network only through [`Transport`];
//! the browser build plugs in a `fetch` implementation and tests plug in a
//! scripted one.

use async_trait::async_trait;
use std::rc::Rc;
use thiserror::Error;

/// HTTP verbs used by the rental API.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    /// `GET`
    Get,
    /// `POST`
    Post,
    /// `PUT`
    Put,
    /// `DELETE`
    Delete,
}

impl Method {
    /// Upper-case verb.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
        }
    }
}

/// Fully resolved request handed to a [`Transport`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpRequest {
    /// Verb.
    pub method: Method,
    /// Absolute or origin-relative URL.
    pub url: String,
    /// Bearer credential for the `Authorization` header.
    pub bearer: Option<String>,
    /// JSON body, sent with `Content-Type: application/json`.
    pub json_body: Option<String>,
}

/// Response as observed by the transport.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpResponse {
    /// Status code.
    pub status: u16,
    /// Status reason phrase.
    pub status_text: String,
    /// Raw body text (possibly empty).
    pub body: String,
}

impl HttpResponse {
    /// Whether the status is in the `2xx` range.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.status >= 200 && self.status < 300
    }
}

/// The request could not complete at the transport level.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TransportError {
    /// The request could not be built or sent.
    #[error("request failed: {0}")]
    Send(String),
    /// The body could not be read.
    #[error("failed to read response body: {0}")]
    Body(String),
}

/// Issues one HTTP exchange without interpreting the status.
#[async_trait(?Send)]
pub trait Transport {
    /// Send `request` and return whatever the server answered.
    ///
    /// # Errors
    /// Returns [`TransportError`] when no response was obtained.
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError>;
}

#[async_trait(?Send)]
impl<T: Transport + ?Sized> Transport for Rc<T> {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        (**self).send(request).await
    }
}
