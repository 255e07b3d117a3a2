//! Client side of the contact list: an HTTP client for the four endpoints and
//! the view state a front end renders from.

pub mod api;
pub mod book;

pub use api::ContactClient;
pub use book::ContactBook;
