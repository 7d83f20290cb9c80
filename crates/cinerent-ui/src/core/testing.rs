//! Scripted collaborators for controller tests.

use crate::core::client::LoginRedirect;
use crate::core::transport::{HttpRequest, HttpResponse, Transport, TransportError};
use async_trait::async_trait;
use std::cell::{Cell, RefCell};
use std::collections::VecDeque;

/// Build a canned response.
pub(crate) fn respond(status: u16, body: &str) -> Result<HttpResponse, TransportError> {
    Ok(HttpResponse {
        status,
        status_text: String::new(),
        body: body.to_string(),
    })
}

/// Transport replaying queued responses in order and recording every request.
#[derive(Default)]
pub(crate) struct ScriptedTransport {
    responses: RefCell<VecDeque<Result<HttpResponse, TransportError>>>,
    sent: RefCell<Vec<HttpRequest>>,
}

impl ScriptedTransport {
    pub(crate) fn push(&self, response: Result<HttpResponse, TransportError>) {
        self.responses.borrow_mut().push_back(response);
    }

    pub(crate) fn sent(&self) -> Vec<HttpRequest> {
        self.sent.borrow().clone()
    }
}

#[async_trait(?Send)]
impl Transport for ScriptedTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        self.sent.borrow_mut().push(request);
        self.responses
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(TransportError::Send("no scripted response".to_string())))
    }
}

/// Counts login redirects.
#[derive(Default)]
pub(crate) struct RecordingRedirect {
    count: Cell<usize>,
}

impl RecordingRedirect {
    pub(crate) fn count(&self) -> usize {
        self.count.get()
    }
}

impl LoginRedirect for RecordingRedirect {
    fn redirect_to_login(&self) {
        self.count.set(self.count.get() + 1);
    }
}
