//! Browser implementations of the core seams: `fetch` transport,
//! `localStorage` session backing, and the login redirect.

pub(crate) mod http;
pub(crate) mod navigation;
pub(crate) mod storage;
