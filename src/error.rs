use thiserror::Error;

#[derive(Debug, Error)]
pub enum ContactError {
    #[error("{field} is required")]
    MissingField { field: String },

    #[error("Invalid request body: {0}")]
    InvalidBody(String),

    #[error("Store unavailable: {0}")]
    Unavailable(String),

    #[error("Request failed (HTTP {status}): {body}")]
    Status { status: u16, body: String },

    #[error("Could not reach server: {0}")]
    Transport(String),

    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Other(String),
}

impl ContactError {
    /// True for a missing required field or a NOT NULL / CHECK violation in
    /// SQLite.
    pub fn is_constraint_violation(&self) -> bool {
        match self {
            ContactError::MissingField { .. } => true,
            ContactError::Database(rusqlite::Error::SqliteFailure(err, _)) => {
                err.code == rusqlite::ErrorCode::ConstraintViolation
            }
            _ => false,
        }
    }
}

pub type ContactResult<T> = Result<T, ContactError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_field_is_constraint_violation() {
        let err = ContactError::MissingField { field: "name".into() };
        assert!(err.is_constraint_violation());
        assert_eq!(err.to_string(), "name is required");
    }

    #[test]
    fn sqlite_not_null_is_constraint_violation() {
        let conn = rusqlite::Connection::open_in_memory().unwrap();
        conn.execute_batch("CREATE TABLE t (name TEXT NOT NULL);").unwrap();
        let err: ContactError = conn
            .execute("INSERT INTO t (name) VALUES (NULL)", [])
            .unwrap_err()
            .into();
        assert!(err.is_constraint_violation());
    }

    #[test]
    fn unavailable_is_not_constraint_violation() {
        assert!(!ContactError::Unavailable("lock poisoned".into()).is_constraint_violation());
    }
}
