pub mod contact_repo;
pub mod schema;

use std::sync::{Arc, Mutex};

use rusqlite::Connection;

use crate::error::{ContactError, ContactResult};

/// Process-wide handle to the contact store.
///
/// Wraps the single SQLite connection opened at startup. Cloning is cheap and
/// every clone shares the same connection.
#[derive(Clone)]
pub struct Database {
    conn: Arc<Mutex<Connection>>,
}

impl Database {
    pub fn new(conn: Connection) -> Self {
        Self {
            conn: Arc::new(Mutex::new(conn)),
        }
    }

    /// Run `f` against the connection on tokio's blocking pool.
    ///
    /// The connection stays locked for the whole closure, so a closure that
    /// reads and then writes sees no interleaved writes from other requests.
    pub async fn call<F, T>(&self, f: F) -> ContactResult<T>
    where
        F: FnOnce(&Connection) -> ContactResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let conn = Arc::clone(&self.conn);
        tokio::task::spawn_blocking(move || {
            let guard = conn
                .lock()
                .map_err(|_| ContactError::Unavailable("connection lock poisoned".into()))?;
            f(&guard)
        })
        .await
        .map_err(|e| ContactError::Unavailable(format!("store task failed: {}", e)))?
    }
}
