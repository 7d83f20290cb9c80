//! Authorized client: attaches the bearer credential and classifies responses.
//!
//! # Design
//! - A request without a stored session is never sent.
//! - `401`, and `403` on reads, end the session: the store is cleared and the
//!   login redirect fires before the error is returned.
//! - No status is retried; every failure is returned once to the caller.

use crate::core::config::ClientConfig;
use crate::core::error::{AccessError, Outcome};
use crate::core::session::SessionStore;
use crate::core::transport::{HttpRequest, HttpResponse, Method, Transport};
use cinerent_api_models::ApiErrorBody;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::rc::Rc;

/// Sends the user to the login entry point.
pub trait LoginRedirect {
    /// Navigate to login.
    fn redirect_to_login(&self);
}

impl<R: LoginRedirect + ?Sized> LoginRedirect for Rc<R> {
    fn redirect_to_login(&self) {
        (**self).redirect_to_login();
    }
}

/// Redirect hook that does nothing.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoRedirect;

impl LoginRedirect for NoRedirect {
    fn redirect_to_login(&self) {}
}

/// How a `403` is interpreted for a given request.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ForbiddenPolicy {
    /// Report [`AccessError::Forbidden`] and keep the session.
    #[default]
    Report,
    /// Treat as [`AccessError::Unauthorized`]: clear the session and redirect.
    Reauthenticate,
}

/// Coarse classification of a response status.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatusClass {
    /// `2xx`.
    Success,
    /// Credential rejected.
    Unauthorized,
    /// Role insufficient for this call.
    Forbidden,
    /// `400`.
    ClientError,
    /// Anything else.
    ServerError,
}

/// Classify `status` under the given forbidden policy.
#[must_use]
pub const fn classify_status(status: u16, forbidden: ForbiddenPolicy) -> StatusClass {
    match status {
        200..=299 => StatusClass::Success,
        401 => StatusClass::Unauthorized,
        403 => match forbidden {
            ForbiddenPolicy::Reauthenticate => StatusClass::Unauthorized,
            ForbiddenPolicy::Report => StatusClass::Forbidden,
        },
        400 => StatusClass::ClientError,
        _ => StatusClass::ServerError,
    }
}

/// One call to the API, before the credential is attached.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RequestSpec {
    /// Verb.
    pub method: Method,
    /// Endpoint path relative to the API prefix.
    pub path: String,
    /// Serialised JSON body.
    pub json_body: Option<String>,
    /// Interpretation of a `403`.
    pub forbidden: ForbiddenPolicy,
}

impl RequestSpec {
    /// Request without a body.
    #[must_use]
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            json_body: None,
            forbidden: ForbiddenPolicy::Report,
        }
    }

    /// `GET path`.
    #[must_use]
    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::Get, path)
    }

    /// `POST path`.
    #[must_use]
    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Method::Post, path)
    }

    /// `PUT path`.
    #[must_use]
    pub fn put(path: impl Into<String>) -> Self {
        Self::new(Method::Put, path)
    }

    /// `DELETE path`.
    #[must_use]
    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(Method::Delete, path)
    }

    /// Attach a JSON body.
    ///
    /// # Errors
    /// Returns [`AccessError::Validation`] if `body` cannot be serialised.
    pub fn with_json<B: Serialize + ?Sized>(mut self, body: &B) -> Outcome<Self> {
        let encoded = serde_json::to_string(body)
            .map_err(|err| AccessError::Validation(format!("could not encode request: {err}")))?;
        self.json_body = Some(encoded);
        Ok(self)
    }

    /// Treat a `403` on this request as an expired session.
    #[must_use]
    pub const fn reauthenticate_on_forbidden(mut self) -> Self {
        self.forbidden = ForbiddenPolicy::Reauthenticate;
        self
    }
}

/// Issues API calls on behalf of the stored session.
pub struct AuthorizedClient<T, S, R = NoRedirect> {
    config: ClientConfig,
    transport: T,
    sessions: S,
    redirect: R,
}

impl<T, S, R> AuthorizedClient<T, S, R>
where
    T: Transport,
    S: SessionStore,
    R: LoginRedirect,
{
    /// Assemble a client from its collaborators.
    pub const fn new(config: ClientConfig, transport: T, sessions: S, redirect: R) -> Self {
        Self {
            config,
            transport,
            sessions,
            redirect,
        }
    }

    /// Active configuration.
    pub const fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Session store shared with the rest of the app.
    pub const fn sessions(&self) -> &S {
        &self.sessions
    }

    /// Underlying transport.
    pub const fn transport(&self) -> &T {
        &self.transport
    }

    /// Send `spec` with the stored bearer token and classify the response.
    ///
    /// # Errors
    /// Returns [`AccessError::Unauthenticated`] without sending when no session
    /// is stored; otherwise the classification of the response.
    pub async fn request(&self, spec: RequestSpec) -> Outcome<HttpResponse> {
        let Some(session) = self.sessions.load() else {
            tracing::info!(path = %spec.path, "no session; request not sent");
            self.redirect.redirect_to_login();
            return Err(AccessError::Unauthenticated);
        };
        self.send_authorized(spec, session.access_token()).await
    }

    /// Like [`Self::request`], decoding the success body as JSON.
    ///
    /// # Errors
    /// As [`Self::request`], plus [`AccessError::Decode`] for an unexpected body.
    pub async fn request_json<D: DeserializeOwned>(&self, spec: RequestSpec) -> Outcome<D> {
        let response = self.request(spec).await?;
        decode_body(&response)
    }

    /// Like [`Self::request`], ignoring the success body.
    ///
    /// # Errors
    /// As [`Self::request`].
    pub async fn request_empty(&self, spec: RequestSpec) -> Outcome<()> {
        self.request(spec).await.map(|_| ())
    }

    /// Send `spec` with an explicit bearer token instead of the stored access
    /// token.
    ///
    /// # Errors
    /// The classification of the response.
    pub async fn request_json_with_bearer<D: DeserializeOwned>(
        &self,
        spec: RequestSpec,
        bearer: &str,
    ) -> Outcome<D> {
        let response = self.send_authorized(spec, bearer).await?;
        decode_body(&response)
    }

    /// Send `spec` without a credential (login, registration).
    ///
    /// Rejections never touch the session: any `4xx` is reported as
    /// [`AccessError::ClientError`].
    ///
    /// # Errors
    /// The classification of the response.
    pub async fn request_anonymous<D: DeserializeOwned>(&self, spec: RequestSpec) -> Outcome<D> {
        let response = self.exchange(&spec, None).await?;
        if response.is_success() {
            return decode_body(&response);
        }
        if (400..500).contains(&response.status) {
            return Err(AccessError::ClientError {
                status: response.status,
                message: client_message(&response),
            });
        }
        Err(AccessError::ServerError {
            status: response.status,
        })
    }

    async fn send_authorized(&self, spec: RequestSpec, bearer: &str) -> Outcome<HttpResponse> {
        let response = self.exchange(&spec, Some(bearer.to_string())).await?;
        self.classify(&spec, response)
    }

    async fn exchange(&self, spec: &RequestSpec, bearer: Option<String>) -> Outcome<HttpResponse> {
        let request = HttpRequest {
            method: spec.method,
            url: self.config.url(&spec.path),
            bearer,
            json_body: spec.json_body.clone(),
        };
        tracing::debug!(method = spec.method.as_str(), path = %spec.path, "sending request");
        match self.transport.send(request).await {
            Ok(response) => {
                tracing::debug!(
                    method = spec.method.as_str(),
                    path = %spec.path,
                    status = response.status,
                    "response received"
                );
                Ok(response)
            }
            Err(err) => {
                tracing::warn!(path = %spec.path, error = %err, "transport failure");
                Err(AccessError::Network(err.to_string()))
            }
        }
    }

    fn classify(&self, spec: &RequestSpec, response: HttpResponse) -> Outcome<HttpResponse> {
        let status = response.status;
        match classify_status(status, spec.forbidden) {
            StatusClass::Success => Ok(response),
            StatusClass::Unauthorized => {
                tracing::warn!(path = %spec.path, status, "credential rejected; ending session");
                self.sessions.clear();
                self.redirect.redirect_to_login();
                Err(AccessError::Unauthorized)
            }
            StatusClass::Forbidden => Err(AccessError::Forbidden),
            StatusClass::ClientError => Err(AccessError::ClientError {
                status,
                message: client_message(&response),
            }),
            StatusClass::ServerError => Err(AccessError::ServerError { status }),
        }
    }
}

fn decode_body<D: DeserializeOwned>(response: &HttpResponse) -> Outcome<D> {
    serde_json::from_str(&response.body).map_err(|err| AccessError::Decode(err.to_string()))
}

/// User-facing text for a rejected request: the server's message, then the
/// plain body, then the status text.
pub(crate) fn client_message(response: &HttpResponse) -> String {
    if let Some(message) = serde_json::from_str::<ApiErrorBody>(&response.body)
        .ok()
        .and_then(|body| body.user_message())
    {
        return message;
    }
    let body = response.body.trim();
    if !body.is_empty() && !body.starts_with('{') && !body.starts_with('[') {
        return body.to_string();
    }
    let status_text = response.status_text.trim();
    if status_text.is_empty() {
        format!("Request rejected (status {}).", response.status)
    } else {
        status_text.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::session::{MemorySessionStore, Session};
    use crate::core::testing::{RecordingRedirect, ScriptedTransport, respond};
    use crate::core::transport::TransportError;
    use cinerent_api_models::Movie;

    fn client(
        transport: &Rc<ScriptedTransport>,
        signed_in: bool,
    ) -> (
        AuthorizedClient<Rc<ScriptedTransport>, Rc<MemorySessionStore>, Rc<RecordingRedirect>>,
        Rc<MemorySessionStore>,
        Rc<RecordingRedirect>,
    ) {
        let sessions = Rc::new(MemorySessionStore::in_memory());
        if signed_in {
            sessions.save(&Session::new("t1", "r1").unwrap());
        }
        let redirect = Rc::new(RecordingRedirect::default());
        let client = AuthorizedClient::new(
            ClientConfig::default(),
            Rc::clone(transport),
            Rc::clone(&sessions),
            Rc::clone(&redirect),
        );
        (client, sessions, redirect)
    }

    #[test]
    fn status_classes_follow_policy() {
        assert_eq!(classify_status(204, ForbiddenPolicy::Report), StatusClass::Success);
        assert_eq!(
            classify_status(401, ForbiddenPolicy::Report),
            StatusClass::Unauthorized
        );
        assert_eq!(
            classify_status(403, ForbiddenPolicy::Report),
            StatusClass::Forbidden
        );
        assert_eq!(
            classify_status(403, ForbiddenPolicy::Reauthenticate),
            StatusClass::Unauthorized
        );
        assert_eq!(
            classify_status(400, ForbiddenPolicy::Report),
            StatusClass::ClientError
        );
        assert_eq!(
            classify_status(404, ForbiddenPolicy::Report),
            StatusClass::ServerError
        );
        assert_eq!(
            classify_status(500, ForbiddenPolicy::Report),
            StatusClass::ServerError
        );
    }

    #[tokio::test]
    async fn missing_session_sends_nothing() {
        let transport = Rc::new(ScriptedTransport::default());
        let (client, _, redirect) = client(&transport, false);
        let result = client.request(RequestSpec::get("movies/list")).await;
        assert_eq!(result, Err(AccessError::Unauthenticated));
        assert!(transport.sent().is_empty());
        assert_eq!(redirect.count(), 1);
    }

    #[tokio::test]
    async fn success_attaches_bearer_and_decodes() {
        let transport = Rc::new(ScriptedTransport::default());
        transport.push(respond(
            200,
            r#"[{"id":1,"title":"Heat","genre":"ACTION","available":true}]"#,
        ));
        let (client, _, _) = client(&transport, true);
        let movies: Vec<Movie> = client
            .request_json(RequestSpec::get("movies/list"))
            .await
            .unwrap();
        assert_eq!(movies.len(), 1);
        let sent = transport.sent();
        assert_eq!(sent[0].bearer.as_deref(), Some("t1"));
        assert_eq!(sent[0].url, "/api/v1/movies/list");
        assert_eq!(sent[0].method, Method::Get);
    }

    #[tokio::test]
    async fn unauthorized_clears_session_and_redirects() {
        let transport = Rc::new(ScriptedTransport::default());
        transport.push(respond(401, ""));
        let (client, sessions, redirect) = client(&transport, true);
        let result = client.request_empty(RequestSpec::get("users/self")).await;
        assert_eq!(result, Err(AccessError::Unauthorized));
        assert!(sessions.load().is_none());
        assert_eq!(redirect.count(), 1);
    }

    #[tokio::test]
    async fn forbidden_mutation_keeps_session() {
        let transport = Rc::new(ScriptedTransport::default());
        transport.push(respond(403, ""));
        let (client, sessions, redirect) = client(&transport, true);
        let result = client.request_empty(RequestSpec::delete("movies/4")).await;
        assert_eq!(result, Err(AccessError::Forbidden));
        assert!(sessions.load().is_some());
        assert_eq!(redirect.count(), 0);
    }

    #[tokio::test]
    async fn bad_request_surfaces_server_message() {
        let transport = Rc::new(ScriptedTransport::default());
        transport.push(respond(
            400,
            r#"{"errors":{"title":"Bad Request","detail":"Movie not available"}}"#,
        ));
        transport.push(respond(400, "Email already taken"));
        let (client, _, _) = client(&transport, true);
        assert_eq!(
            client.request_empty(RequestSpec::put("rental/1/rent")).await,
            Err(AccessError::client("Movie not available"))
        );
        assert_eq!(
            client.request_empty(RequestSpec::put("rental/1/rent")).await,
            Err(AccessError::client("Email already taken"))
        );
    }

    #[tokio::test]
    async fn transport_failure_is_network_error() {
        let transport = Rc::new(ScriptedTransport::default());
        transport.push(Err(TransportError::Send("connection refused".to_string())));
        let (client, sessions, _) = client(&transport, true);
        let result = client.request_empty(RequestSpec::get("movies/list")).await;
        assert!(matches!(result, Err(AccessError::Network(_))));
        assert!(sessions.load().is_some());
    }

    #[tokio::test]
    async fn malformed_success_body_is_decode_error() {
        let transport = Rc::new(ScriptedTransport::default());
        transport.push(respond(200, r#"{"not":"a list"}"#));
        let (client, _, _) = client(&transport, true);
        let result: Outcome<Vec<Movie>> = client.request_json(RequestSpec::get("movies/list")).await;
        assert!(matches!(result, Err(AccessError::Decode(_))));
    }

    #[tokio::test]
    async fn anonymous_rejection_never_touches_session() {
        let transport = Rc::new(ScriptedTransport::default());
        transport.push(respond(403, ""));
        let (client, sessions, redirect) = client(&transport, true);
        let result: Outcome<Movie> = client
            .request_anonymous(RequestSpec::post("auth/authenticate"))
            .await;
        assert!(matches!(
            result,
            Err(AccessError::ClientError { status: 403, .. })
        ));
        assert!(transport.sent()[0].bearer.is_none());
        assert!(sessions.load().is_some());
        assert_eq!(redirect.count(), 0);
    }

    #[test]
    fn client_message_falls_back_to_status_text() {
        let response = HttpResponse {
            status: 400,
            status_text: "Bad Request".to_string(),
            body: r#"{"unrelated":true}"#.to_string(),
        };
        assert_eq!(client_message(&response), "Bad Request");
    }
}
