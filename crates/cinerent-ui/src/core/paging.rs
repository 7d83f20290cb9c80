//! Paginated resource controller.
//!
//! # Design
//! - One controller per view instance, generic over a [`ResourceQuery`] that
//!   maps `(page, size, filter)` to an endpoint path.
//! - Every fetch is tagged with a generation; only the latest issued
//!   generation may update state, so a slow earlier response never
//!   overwrites a newer page or filter.
//! - The controller owns no transport. It hands out [`FetchTicket`]s and is
//!   fed completed outcomes, which keeps it free of borrows across awaits.

use crate::core::client::{AuthorizedClient, LoginRedirect, RequestSpec};
use crate::core::error::Outcome;
use crate::core::mutate::{self, Keyed, Mutation};
use crate::core::session::SessionStore;
use crate::core::transport::Transport;
use serde::de::DeserializeOwned;
use std::fmt::Debug;

/// A paginated (or whole-list) resource endpoint.
pub trait ResourceQuery {
    /// Element type of the collection.
    type Item: DeserializeOwned + Keyed + Clone + PartialEq;
    /// View-specific filter; changing it resets to the first page.
    type Filter: Clone + PartialEq + Debug + Default;

    /// Endpoint path for the requested slice.
    fn path(&self, page: u32, size: u32, filter: &Self::Filter) -> String;
}

/// Lifecycle of a controller.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LoadPhase {
    /// Nothing requested yet.
    #[default]
    Idle,
    /// A fetch is in flight.
    Loading,
    /// The latest fetch succeeded.
    Ready,
    /// The latest fetch failed; items are from the last success.
    Errored,
}

/// What a list view renders around its rows.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ListStatus {
    /// Nothing requested yet.
    Idle,
    /// A fetch is in flight.
    Loading,
    /// The latest fetch failed with this message.
    Failed(String),
    /// The latest fetch succeeded with no items.
    Empty,
    /// The latest fetch succeeded with items.
    Populated,
}

/// Observable state of one paginated view.
#[derive(Clone, Debug, PartialEq)]
pub struct PageState<I, F> {
    /// Zero-based page index.
    pub page: u32,
    /// Page size, at least 1.
    pub size: u32,
    /// Active filter.
    pub filter: F,
    /// Items of the most recently applied fetch.
    pub items: Vec<I>,
    /// Lifecycle phase.
    pub phase: LoadPhase,
    /// Message from the last failed fetch.
    pub error: Option<String>,
}

impl<I, F> PageState<I, F> {
    /// Whether a fetch is in flight.
    #[must_use]
    pub const fn loading(&self) -> bool {
        matches!(self.phase, LoadPhase::Loading)
    }

    /// Status line for the view; never `Empty` while a fetch is in flight.
    #[must_use]
    pub fn status(&self) -> ListStatus {
        match self.phase {
            LoadPhase::Idle => ListStatus::Idle,
            LoadPhase::Loading => ListStatus::Loading,
            LoadPhase::Errored => ListStatus::Failed(self.error.clone().unwrap_or_default()),
            LoadPhase::Ready if self.items.is_empty() => ListStatus::Empty,
            LoadPhase::Ready => ListStatus::Populated,
        }
    }

    /// Whether a previous page exists.
    #[must_use]
    pub const fn has_previous(&self) -> bool {
        self.page > 0
    }
}

/// A fetch the caller must perform and report back.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FetchTicket {
    /// Generation tag to pass to [`PageController::complete`].
    pub generation: u64,
    /// Request to send through the authorized client.
    pub request: RequestSpec,
}

/// What [`PageController::complete`] did with an outcome.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Completion {
    /// The outcome updated the state.
    Applied,
    /// A newer fetch was issued since; the outcome was dropped.
    Stale,
}

/// State machine driving one paginated view.
pub struct PageController<Q: ResourceQuery> {
    query: Q,
    state: PageState<Q::Item, Q::Filter>,
    latest: u64,
}

impl<Q: ResourceQuery> PageController<Q> {
    /// Idle controller on the first page with the default filter.
    #[must_use]
    pub fn new(query: Q, size: u32) -> Self {
        Self::with_filter(query, size, Q::Filter::default())
    }

    /// Idle controller on the first page with `filter`.
    #[must_use]
    pub fn with_filter(query: Q, size: u32, filter: Q::Filter) -> Self {
        Self {
            query,
            state: PageState {
                page: 0,
                size: size.max(1),
                filter,
                items: Vec::new(),
                phase: LoadPhase::Idle,
                error: None,
            },
            latest: 0,
        }
    }

    /// Current state.
    pub const fn state(&self) -> &PageState<Q::Item, Q::Filter> {
        &self.state
    }

    /// Query this controller pages through.
    pub const fn query(&self) -> &Q {
        &self.query
    }

    /// Fetch the current slice (mount or explicit reload).
    pub fn load(&mut self) -> FetchTicket {
        self.issue()
    }

    /// Advance one page.
    pub fn next(&mut self) -> FetchTicket {
        self.state.page = self.state.page.saturating_add(1);
        self.issue()
    }

    /// Go back one page; `None` on the first page.
    pub fn prev(&mut self) -> Option<FetchTicket> {
        if self.state.page == 0 {
            return None;
        }
        self.state.page -= 1;
        Some(self.issue())
    }

    /// Replace the filter and return to the first page.
    pub fn set_filter(&mut self, filter: Q::Filter) -> FetchTicket {
        self.state.filter = filter;
        self.state.page = 0;
        self.issue()
    }

    /// Feed the outcome of the fetch tagged `generation`.
    pub fn complete(&mut self, generation: u64, outcome: Outcome<Vec<Q::Item>>) -> Completion {
        if generation != self.latest {
            tracing::debug!(generation, latest = self.latest, "discarding stale page response");
            return Completion::Stale;
        }
        match outcome {
            Ok(items) => {
                self.state.items = items;
                self.state.phase = LoadPhase::Ready;
                self.state.error = None;
            }
            Err(err) => {
                tracing::info!(
                    kind = err.kind(),
                    page = self.state.page,
                    "page fetch failed"
                );
                self.state.phase = LoadPhase::Errored;
                self.state.error = Some(err.to_string());
            }
        }
        Completion::Applied
    }

    /// Apply a server-confirmed mutation to the displayed items.
    ///
    /// # Errors
    /// Returns the failure unchanged; items are left untouched.
    pub fn reconcile(&mut self, outcome: Outcome<Mutation<Q::Item>>) -> Outcome<()> {
        mutate::reconcile(&mut self.state.items, outcome)
    }

    /// Fetch and complete `ticket` in one step.
    pub async fn run<T, S, R>(
        &mut self,
        client: &AuthorizedClient<T, S, R>,
        ticket: FetchTicket,
    ) -> Completion
    where
        T: Transport,
        S: SessionStore,
        R: LoginRedirect,
    {
        let outcome = fetch_page(client, &ticket).await;
        self.complete(ticket.generation, outcome)
    }

    fn issue(&mut self) -> FetchTicket {
        self.latest += 1;
        self.state.phase = LoadPhase::Loading;
        self.state.error = None;
        let path = self
            .query
            .path(self.state.page, self.state.size, &self.state.filter);
        FetchTicket {
            generation: self.latest,
            request: RequestSpec::get(path).reauthenticate_on_forbidden(),
        }
    }
}

/// Perform the request of `ticket`.
///
/// # Errors
/// The classification of the call.
pub async fn fetch_page<I, T, S, R>(
    client: &AuthorizedClient<T, S, R>,
    ticket: &FetchTicket,
) -> Outcome<Vec<I>>
where
    I: DeserializeOwned,
    T: Transport,
    S: SessionStore,
    R: LoginRedirect,
{
    client.request_json(ticket.request.clone()).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::ClientConfig;
    use crate::core::error::AccessError;
    use crate::core::resources::{MovieCatalog, OwnRentals, RentalFilter};
    use crate::core::session::{MemorySessionStore, Session};
    use crate::core::testing::{RecordingRedirect, ScriptedTransport, respond};
    use cinerent_api_models::Rental;
    use std::rc::Rc;

    fn rental(id: u64) -> Rental {
        Rental {
            id,
            movie_title: format!("movie {id}"),
            rented_at: None,
            due_date: None,
            returned: false,
            returned_at: None,
            genre: None,
            user_email: None,
        }
    }

    fn signed_in_client() -> (
        AuthorizedClient<Rc<ScriptedTransport>, Rc<MemorySessionStore>, Rc<RecordingRedirect>>,
        Rc<ScriptedTransport>,
        Rc<MemorySessionStore>,
        Rc<RecordingRedirect>,
    ) {
        let transport = Rc::new(ScriptedTransport::default());
        let sessions = Rc::new(MemorySessionStore::in_memory());
        sessions.save(&Session::new("t1", "r1").unwrap());
        let redirect = Rc::new(RecordingRedirect::default());
        let client = AuthorizedClient::new(
            ClientConfig::default(),
            Rc::clone(&transport),
            Rc::clone(&sessions),
            Rc::clone(&redirect),
        );
        (client, transport, sessions, redirect)
    }

    #[test]
    fn mount_enters_loading_with_first_page_path() {
        let mut controller = PageController::new(OwnRentals, 5);
        assert_eq!(controller.state().phase, LoadPhase::Idle);
        let ticket = controller.load();
        assert!(controller.state().loading());
        assert_eq!(ticket.request.path, "rental/self/0/5/rentals?returned=false");
    }

    #[test]
    fn set_filter_resets_page() {
        let mut controller = PageController::new(OwnRentals, 5);
        controller.load();
        controller.next();
        controller.next();
        assert_eq!(controller.state().page, 2);
        let ticket = controller.set_filter(RentalFilter { returned: true });
        assert_eq!(controller.state().page, 0);
        assert_eq!(ticket.request.path, "rental/self/0/5/rentals?returned=true");
    }

    #[test]
    fn prev_on_first_page_is_noop() {
        let mut controller = PageController::new(OwnRentals, 5);
        let ticket = controller.load();
        controller.complete(ticket.generation, Ok(vec![rental(1)]));
        assert!(controller.prev().is_none());
        assert_eq!(controller.state().phase, LoadPhase::Ready);
        controller.next();
        let back = controller.prev().unwrap();
        assert_eq!(back.request.path, "rental/self/0/5/rentals?returned=false");
    }

    #[test]
    fn stale_response_never_overwrites_newer_page() {
        let mut controller = PageController::new(OwnRentals, 5);
        let first = controller.next();
        let second = controller.next();
        assert!(second.generation > first.generation);

        assert_eq!(
            controller.complete(second.generation, Ok(vec![rental(20)])),
            Completion::Applied
        );
        assert_eq!(
            controller.complete(first.generation, Ok(vec![rental(10)])),
            Completion::Stale
        );
        assert_eq!(controller.state().page, 2);
        assert_eq!(controller.state().items, vec![rental(20)]);
        assert_eq!(controller.state().phase, LoadPhase::Ready);
    }

    #[test]
    fn stale_failure_is_ignored_while_newer_fetch_is_pending() {
        let mut controller = PageController::new(OwnRentals, 5);
        let first = controller.load();
        let _second = controller.set_filter(RentalFilter { returned: true });
        controller.complete(first.generation, Err(AccessError::ServerError { status: 500 }));
        assert!(controller.state().loading());
        assert!(controller.state().error.is_none());
    }

    #[test]
    fn status_reports_empty_only_after_a_successful_fetch() {
        let mut controller = PageController::new(OwnRentals, 5);
        assert_eq!(controller.state().status(), ListStatus::Idle);
        let first = controller.load();
        assert_eq!(controller.state().status(), ListStatus::Loading);
        controller.complete(first.generation, Ok(Vec::new()));
        assert_eq!(controller.state().status(), ListStatus::Empty);

        let second = controller.next();
        assert_eq!(controller.state().status(), ListStatus::Loading);
        controller.complete(second.generation, Ok(vec![rental(1)]));
        assert_eq!(controller.state().status(), ListStatus::Populated);

        let third = controller.next();
        controller.complete(third.generation, Err(AccessError::ServerError { status: 500 }));
        assert_eq!(
            controller.state().status(),
            ListStatus::Failed("Request failed (status 500).".to_string())
        );
    }

    #[test]
    fn failure_keeps_previous_items() {
        let mut controller = PageController::new(OwnRentals, 5);
        let ticket = controller.load();
        controller.complete(ticket.generation, Ok(vec![rental(1)]));
        let ticket = controller.next();
        controller.complete(ticket.generation, Err(AccessError::ServerError { status: 502 }));
        let state = controller.state();
        assert_eq!(state.phase, LoadPhase::Errored);
        assert_eq!(state.items, vec![rental(1)]);
        assert_eq!(state.error.as_deref(), Some("Request failed (status 502)."));
    }

    #[tokio::test]
    async fn interleaved_fetches_keep_latest_page() {
        let (client, transport, _, _) = signed_in_client();
        let mut controller = PageController::new(OwnRentals, 5);
        let first = controller.next();
        let second = controller.next();
        transport.push(respond(200, r#"[{"id":20,"movieTitle":"movie 20"}]"#));
        transport.push(respond(200, r#"[{"id":10,"movieTitle":"movie 10"}]"#));

        let newer = fetch_page(&client, &second).await;
        let older = fetch_page(&client, &first).await;
        assert_eq!(controller.complete(second.generation, newer), Completion::Applied);
        assert_eq!(controller.complete(first.generation, older), Completion::Stale);
        assert_eq!(controller.state().items[0].id, 20);
    }

    #[tokio::test]
    async fn empty_movie_list_is_ready_not_errored() {
        let (client, transport, _, _) = signed_in_client();
        transport.push(respond(200, "[]"));
        let mut controller = PageController::new(MovieCatalog, 5);
        let ticket = controller.load();
        assert_eq!(controller.run(&client, ticket).await, Completion::Applied);
        assert_eq!(controller.state().status(), ListStatus::Empty);
        assert_eq!(controller.state().phase, LoadPhase::Ready);
    }

    #[tokio::test]
    async fn forbidden_rental_fetch_ends_session() {
        let (client, transport, sessions, redirect) = signed_in_client();
        transport.push(respond(403, ""));
        let mut controller = PageController::new(OwnRentals, 5);
        controller.load();
        let ticket = controller.set_filter(RentalFilter { returned: true });
        controller.run(&client, ticket).await;
        assert!(sessions.load().is_none());
        assert_eq!(redirect.count(), 1);
        assert_eq!(controller.state().phase, LoadPhase::Errored);
        assert_eq!(
            controller.state().error.as_deref(),
            Some("Your session has expired. Please log in again.")
        );
    }

    #[test]
    fn reconcile_removes_returned_rental() {
        let mut controller = PageController::new(OwnRentals, 5);
        let ticket = controller.load();
        controller.complete(ticket.generation, Ok(vec![rental(1), rental(2)]));
        controller.reconcile(Ok(Mutation::Remove(1))).unwrap();
        assert_eq!(controller.state().items, vec![rental(2)]);
    }
}
