//! Shared presentational components.

pub(crate) mod field;
pub(crate) mod message;
pub(crate) mod page_status;
pub(crate) mod pager;

pub(crate) use field::TextField;
pub(crate) use message::MessageLine;
pub(crate) use page_status::PageStatus;
pub(crate) use pager::Pager;
