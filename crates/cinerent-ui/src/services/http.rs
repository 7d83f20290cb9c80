//! `fetch`-backed transport.

use crate::core::transport::{HttpRequest, HttpResponse, Method, Transport, TransportError};
use async_trait::async_trait;
use gloo_net::http::Request;

/// Sends requests with the browser's `fetch`.
#[derive(Clone, Copy, Debug, Default)]
pub(crate) struct FetchTransport;

#[async_trait(?Send)]
impl Transport for FetchTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        let mut builder = match request.method {
            Method::Get => Request::get(&request.url),
            Method::Post => Request::post(&request.url),
            Method::Put => Request::put(&request.url),
            Method::Delete => Request::delete(&request.url),
        };
        if let Some(token) = &request.bearer {
            builder = builder.header("Authorization", &format!("Bearer {token}"));
        }
        if let Some(body) = request.json_body {
            builder = builder
                .header("Content-Type", "application/json")
                .body(body);
        }
        let response = builder
            .send()
            .await
            .map_err(|err| TransportError::Send(err.to_string()))?;
        let status = response.status();
        let status_text = response.status_text();
        let body = response
            .text()
            .await
            .map_err(|err| TransportError::Body(err.to_string()))?;
        Ok(HttpResponse {
            status,
            status_text,
            body,
        })
    }
}
