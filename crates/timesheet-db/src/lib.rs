pub mod documents;
pub mod error;
pub mod migrations;
pub mod task;
pub mod user;

use rusqlite::Connection;
use std::path::Path;
use std::sync::Mutex;
use tracing::info;

pub use documents::Collection;
pub use error::RepoError;
pub use task::{SqliteTaskRepository, TaskRepository};
pub use user::{SqliteUserRepository, UserRepository};

pub type Result<T> = std::result::Result<T, RepoError>;

/// Document store on a single SQLite connection. Each collection is a table of
/// JSON bodies keyed by id.
pub struct Database {
    conn: Mutex<Connection>,
}

impl Database {
    pub fn open(path: &Path) -> Result<Self> {
        let conn = Connection::open(path)?;

        // WAL mode for concurrent reads
        conn.pragma_update(None, "journal_mode", "WAL")?;

        let db = Self::init(conn)?;
        info!("Database opened at {}", path.display());
        Ok(db)
    }

    pub fn open_in_memory() -> Result<Self> {
        Self::init(Connection::open_in_memory()?)
    }

    fn init(conn: Connection) -> Result<Self> {
        migrations::run(&conn)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    pub fn with_conn<F, T>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&Connection) -> Result<T>,
    {
        let conn = self
            .conn
            .lock()
            .map_err(|e| RepoError::Persistence(format!("DB lock poisoned: {}", e)))?;
        f(&conn)
    }
}
