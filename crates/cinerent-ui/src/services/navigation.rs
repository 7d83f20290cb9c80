//! Hard navigation to the login page.

use crate::core::client::LoginRedirect;
use gloo::console;
use gloo::utils::window;

pub(crate) const LOGIN_PATH: &str = "/login";

/// Replaces the document with the login page, resetting all in-memory state.
#[derive(Clone, Copy, Debug, Default)]
pub(crate) struct BrowserRedirect;

impl LoginRedirect for BrowserRedirect {
    fn redirect_to_login(&self) {
        let location = window().location();
        if location.pathname().is_ok_and(|path| path == LOGIN_PATH) {
            return;
        }
        if let Err(err) = location.set_href(LOGIN_PATH) {
            console::error!(format!("login redirect failed: {err:?}"));
        }
    }
}
