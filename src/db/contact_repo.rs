use chrono::{DateTime, Utc};
use rusqlite::{params, Connection, OptionalExtension};

use crate::error::{ContactError, ContactResult};
use crate::model::{Contact, ContactId};

const COLUMNS: &str = "id, name, email, number, created_at, updated_at";

pub fn insert(
    conn: &Connection,
    name: &str,
    email: Option<&str>,
    number: Option<&str>,
    now: DateTime<Utc>,
) -> ContactResult<Contact> {
    conn.execute(
        "INSERT INTO contacts (name, email, number, created_at, updated_at)
         VALUES (?1, ?2, ?3, ?4, ?4)",
        params![name, email, number, now.to_rfc3339()],
    )?;

    Ok(Contact {
        id: conn.last_insert_rowid(),
        name: name.to_string(),
        email: email.map(str::to_string),
        number: number.map(str::to_string),
        created_at: now,
        updated_at: now,
    })
}

/// Write every mutable column of `contact`. Returns the number of rows matched.
pub fn update(conn: &Connection, contact: &Contact) -> ContactResult<usize> {
    let changed = conn.execute(
        "UPDATE contacts SET name = ?1, email = ?2, number = ?3, updated_at = ?4 WHERE id = ?5",
        params![
            contact.name,
            contact.email,
            contact.number,
            contact.updated_at.to_rfc3339(),
            contact.id,
        ],
    )?;
    Ok(changed)
}

pub fn delete(conn: &Connection, id: ContactId) -> ContactResult<usize> {
    let deleted = conn.execute("DELETE FROM contacts WHERE id = ?1", params![id])?;
    Ok(deleted)
}

pub fn find_by_id(conn: &Connection, id: ContactId) -> ContactResult<Option<Contact>> {
    let mut stmt = conn.prepare(&format!("SELECT {COLUMNS} FROM contacts WHERE id = ?1"))?;

    let row = stmt
        .query_row(params![id], |row| Ok(row_to_contact(row)))
        .optional()?;

    row.transpose()
}

/// All contacts in insertion order.
pub fn find_all(conn: &Connection) -> ContactResult<Vec<Contact>> {
    let mut stmt = conn.prepare(&format!("SELECT {COLUMNS} FROM contacts ORDER BY id"))?;

    let contacts = stmt
        .query_map([], |row| Ok(row_to_contact(row)))?
        .collect::<Result<Vec<_>, _>>()?
        .into_iter()
        .collect::<Result<Vec<_>, _>>()?;

    Ok(contacts)
}

pub fn count(conn: &Connection) -> ContactResult<usize> {
    let n: i64 = conn.query_row("SELECT COUNT(*) FROM contacts", [], |row| row.get(0))?;
    Ok(n as usize)
}

fn row_to_contact(row: &rusqlite::Row) -> ContactResult<Contact> {
    let created: String = row.get(4)?;
    let updated: String = row.get(5)?;

    Ok(Contact {
        id: row.get(0)?,
        name: row.get(1)?,
        email: row.get(2)?,
        number: row.get(3)?,
        created_at: parse_timestamp(&created)?,
        updated_at: parse_timestamp(&updated)?,
    })
}

fn parse_timestamp(s: &str) -> ContactResult<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| ContactError::Other(format!("Invalid timestamp '{}': {}", s, e)))
}
