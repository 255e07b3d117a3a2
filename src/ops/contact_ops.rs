use chrono::Utc;
use rusqlite::Connection;
use tracing::{debug, info};

use crate::db::contact_repo;
use crate::error::ContactResult;
use crate::model::{Contact, ContactId, ContactPatch, NewContact};
use crate::validation;

pub fn list_contacts(conn: &Connection) -> ContactResult<Vec<Contact>> {
    contact_repo::find_all(conn)
}

pub fn add_contact(conn: &Connection, new: NewContact) -> ContactResult<Contact> {
    let name = validation::required(new.name, "name")?;

    let contact = contact_repo::insert(
        conn,
        &name,
        new.email.as_deref(),
        new.number.as_deref(),
        Utc::now(),
    )?;

    info!(id = contact.id, "contact created");
    Ok(contact)
}

/// Apply `patch` to the contact with `id`. Returns the number of contacts
/// updated: 0 when no contact has that id.
pub fn update_contact(conn: &Connection, id: ContactId, patch: ContactPatch) -> ContactResult<usize> {
    validation::required_if_present(patch.name.clone(), "name")?;

    let Some(mut contact) = contact_repo::find_by_id(conn, id)? else {
        debug!(id, "update matched no contact");
        return Ok(0);
    };

    contact.apply(patch);
    contact.updated_at = Utc::now();

    let updated = contact_repo::update(conn, &contact)?;
    info!(id, updated, "contact updated");
    Ok(updated)
}

/// Delete the contact with `id`. Returns the number of contacts removed.
pub fn remove_contact(conn: &Connection, id: ContactId) -> ContactResult<usize> {
    let deleted = contact_repo::delete(conn, id)?;
    if deleted == 0 {
        debug!(id, "delete matched no contact");
    } else {
        info!(id, "contact deleted");
    }
    Ok(deleted)
}
