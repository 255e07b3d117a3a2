//! # Contact list HTTP API
//!
//! # Endpoints
//!
//! - `GET /contactlist` - all contacts
//! - `POST /contactlist` - create a contact
//! - `PUT /contactlist/{id}` - update a contact, replies `{updated}`
//! - `DELETE /contactlist/{id}` - delete a contact, replies `{deleted}`
//! - `GET /health` - health check

pub mod config;
pub mod contact_routes;
pub mod errors;
pub mod health_routes;
pub mod server;

pub use config::HttpServerConfig;
pub use errors::ErrorResponse;
pub use server::HttpServer;
