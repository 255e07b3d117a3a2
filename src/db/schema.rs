use std::fs;

use rusqlite::Connection;
use tracing::{debug, info};

use crate::config::DatabaseConfig;
use crate::error::ContactResult;

/// Initialize the database schema. Creates the contacts table if it doesn't exist.
pub fn initialize(conn: &Connection) -> ContactResult<()> {
    conn.execute_batch(
        "
        CREATE TABLE IF NOT EXISTS contacts (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL,
            email TEXT,
            number TEXT,
            created_at TEXT NOT NULL,
            updated_at TEXT NOT NULL
        );
        ",
    )?;
    Ok(())
}

/// Initialize with encryption key (for SQLCipher).
pub fn initialize_encrypted(conn: &Connection, key: &str) -> ContactResult<()> {
    conn.execute_batch(&format!("PRAGMA key = '{}';", key.replace('\'', "''")))?;
    initialize(conn)
}

/// Open the configured database file, creating its directory if needed, and
/// make sure the schema exists.
pub fn open(config: &DatabaseConfig) -> ContactResult<Connection> {
    if !config.host.exists() {
        debug!(dir = %config.host.display(), "creating database directory");
        fs::create_dir_all(&config.host)?;
    }

    let path = config.database_path();
    let conn = Connection::open(&path)?;
    match config.password.as_deref() {
        Some(key) => initialize_encrypted(&conn, key)?,
        None => initialize(&conn)?,
    }

    info!(path = %path.display(), "database ready");
    Ok(conn)
}

/// Create an in-memory connection for testing. Available in test builds.
pub fn test_connection() -> Connection {
    let conn = Connection::open_in_memory().unwrap();
    initialize(&conn).unwrap();
    conn
}
