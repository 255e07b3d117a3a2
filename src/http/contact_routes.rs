//! Contact list HTTP Routes
//!
//! One handler per endpoint, each a direct pass-through to `contact_ops`.

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    routing::{get, put},
    Json, Router,
};
use tracing::debug;

use crate::db::Database;
use crate::error::ContactError;
use crate::model::{Contact, ContactId, ContactPatch, DeleteOutcome, NewContact, UpdateOutcome};
use crate::ops::contact_ops;

// ==================
// Shared State
// ==================

/// Contact state shared across handlers
pub struct ContactState {
    pub db: Database,
}

impl ContactState {
    pub fn new(db: Database) -> Self {
        Self { db }
    }
}

// ==================
// Contact Routes
// ==================

/// Create contact list routes
pub fn contact_routes(state: Arc<ContactState>) -> Router {
    Router::new()
        .route("/contactlist", get(list_contacts_handler).post(create_contact_handler))
        .route(
            "/contactlist/:id",
            put(update_contact_handler).delete(delete_contact_handler),
        )
        .with_state(state)
}

// ==================
// Handlers
// ==================

async fn list_contacts_handler(
    State(state): State<Arc<ContactState>>,
) -> Result<Json<Vec<Contact>>, ContactError> {
    let contacts = state.db.call(contact_ops::list_contacts).await?;
    debug!(count = contacts.len(), "listed contacts");
    Ok(Json(contacts))
}

async fn create_contact_handler(
    State(state): State<Arc<ContactState>>,
    body: Result<Json<NewContact>, JsonRejection>,
) -> Result<Json<Contact>, ContactError> {
    let Json(request) = body?;
    let contact = state
        .db
        .call(move |conn| contact_ops::add_contact(conn, request))
        .await?;
    Ok(Json(contact))
}

async fn update_contact_handler(
    State(state): State<Arc<ContactState>>,
    Path(id): Path<ContactId>,
    body: Result<Json<ContactPatch>, JsonRejection>,
) -> Result<Json<UpdateOutcome>, ContactError> {
    let Json(request) = body?;
    let updated = state
        .db
        .call(move |conn| contact_ops::update_contact(conn, id, request))
        .await?;
    Ok(Json(UpdateOutcome { updated }))
}

async fn delete_contact_handler(
    State(state): State<Arc<ContactState>>,
    Path(id): Path<ContactId>,
) -> Result<Json<DeleteOutcome>, ContactError> {
    let deleted = state
        .db
        .call(move |conn| contact_ops::remove_contact(conn, id))
        .await?;
    Ok(Json(DeleteOutcome { deleted }))
}
