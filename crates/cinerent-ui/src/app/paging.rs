//! Yew binding for [`PageController`].
//!
//! The controller lives in a `use_mut_ref` cell; every transition forces a
//! re-render and completions arriving for superseded tickets are dropped by
//! the controller itself.

use crate::app::api::BrowserApi;
use crate::core::error::Outcome;
use crate::core::mutate::Mutation;
use crate::core::paging::{
    Completion, FetchTicket, PageController, PageState, ResourceQuery, fetch_page,
};
use std::cell::RefCell;
use std::rc::Rc;
use yew::platform::spawn_local;
use yew::prelude::*;

/// Handle to a paginated resource owned by one component.
pub(crate) struct PagedHandle<Q: ResourceQuery> {
    api: Rc<BrowserApi>,
    controller: Rc<RefCell<PageController<Q>>>,
    rerender: UseForceUpdateHandle,
}

impl<Q: ResourceQuery> Clone for PagedHandle<Q> {
    fn clone(&self) -> Self {
        Self {
            api: Rc::clone(&self.api),
            controller: Rc::clone(&self.controller),
            rerender: self.rerender.clone(),
        }
    }
}

impl<Q> PagedHandle<Q>
where
    Q: ResourceQuery + 'static,
    Q::Item: 'static,
    Q::Filter: 'static,
{
    /// Snapshot of the current page state.
    pub(crate) fn state(&self) -> PageState<Q::Item, Q::Filter> {
        self.controller.borrow().state().clone()
    }

    pub(crate) fn load(&self) {
        let ticket = self.controller.borrow_mut().load();
        self.dispatch(ticket);
    }

    pub(crate) fn next(&self) {
        let ticket = self.controller.borrow_mut().next();
        self.dispatch(ticket);
    }

    pub(crate) fn prev(&self) {
        let ticket = self.controller.borrow_mut().prev();
        if let Some(ticket) = ticket {
            self.dispatch(ticket);
        }
    }

    pub(crate) fn set_filter(&self, filter: Q::Filter) {
        let ticket = self.controller.borrow_mut().set_filter(filter);
        self.dispatch(ticket);
    }

    /// Apply a confirmed mutation; failures leave the rows untouched.
    pub(crate) fn reconcile(&self, outcome: Outcome<Mutation<Q::Item>>) {
        let result = self.controller.borrow_mut().reconcile(outcome);
        if let Err(err) = result {
            tracing::debug!(kind = err.kind(), "mutation not applied");
        }
        self.rerender.force_update();
    }

    fn dispatch(&self, ticket: FetchTicket) {
        self.rerender.force_update();
        let api = Rc::clone(&self.api);
        let controller = Rc::clone(&self.controller);
        let rerender = self.rerender.clone();
        spawn_local(async move {
            let outcome = fetch_page::<Q::Item, _, _, _>(api.client(), &ticket).await;
            let completion = controller.borrow_mut().complete(ticket.generation, outcome);
            if completion == Completion::Applied {
                rerender.force_update();
            }
        });
    }
}

/// Own a controller for the lifetime of the calling component.
#[hook]
pub(crate) fn use_paged<Q, F>(api: Rc<BrowserApi>, init: F) -> PagedHandle<Q>
where
    Q: ResourceQuery + 'static,
    Q::Item: 'static,
    Q::Filter: 'static,
    F: FnOnce() -> PageController<Q>,
{
    let controller = use_mut_ref(init);
    let rerender = use_force_update();
    PagedHandle {
        api,
        controller,
        rerender,
    }
}
