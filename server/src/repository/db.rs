//! Database Connection and Setup
//!
//! Manages the SQLite connection and migrations.

use rusqlite::Connection;
use std::path::Path;
use std::sync::Arc;
use tokio::sync::Mutex;

use crate::domain::{DomainError, DomainResult, DEFAULT_TAG_COLOR};

/// Shared handle to the single SQLite connection
pub type SharedConnection = Arc<Mutex<Connection>>;

/// Database state wrapper
#[derive(Clone)]
pub struct DbState {
    conn: SharedConnection,
}

impl DbState {
    /// Handle to the connection, shared by every repository
    pub fn connection(&self) -> SharedConnection {
        Arc::clone(&self.conn)
    }
}

impl From<rusqlite::Error> for DomainError {
    fn from(e: rusqlite::Error) -> Self {
        DomainError::Internal(e.to_string())
    }
}

/// Open (or create) the database at `db_path` and run migrations.
///
/// `:memory:` opens a private in-memory database.
pub async fn init_db(db_path: &Path) -> DomainResult<DbState> {
    let conn = Connection::open(db_path)
        .map_err(|e| DomainError::Internal(format!("Failed to open {}: {}", db_path.display(), e)))?;

    conn.pragma_update(None, "foreign_keys", true)?;
    run_migrations(&conn)?;

    Ok(DbState {
        conn: Arc::new(Mutex::new(conn)),
    })
}

/// ID of the row the last INSERT on this connection created
pub(super) fn last_insert_id(conn: &Connection) -> DomainResult<u32> {
    let rowid = conn.last_insert_rowid();
    u32::try_from(rowid).map_err(|_| DomainError::Internal(format!("row id {} out of range", rowid)))
}

/// Whether the error is a UNIQUE constraint violation
pub(super) fn is_unique_violation(e: &rusqlite::Error) -> bool {
    matches!(
        e,
        rusqlite::Error::SqliteFailure(err, _)
            if err.extended_code == rusqlite::ffi::SQLITE_CONSTRAINT_UNIQUE
    )
}

/// Current time in milliseconds, stored in the timestamp columns
pub(super) fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

/// Run database migrations
fn run_migrations(conn: &Connection) -> DomainResult<()> {
    conn.execute(
        "CREATE TABLE IF NOT EXISTS items (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            content TEXT NOT NULL CHECK (length(content) >= 3),
            checked INTEGER NOT NULL DEFAULT 0,
            list TEXT NOT NULL DEFAULT 'shopping' CHECK (list IN ('shopping', 'home-needs')),
            created_at INTEGER NOT NULL,
            updated_at INTEGER NOT NULL
        )",
        (),
    )?;

    conn.execute(
        &format!(
            "CREATE TABLE IF NOT EXISTS tags (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name TEXT NOT NULL,
                color TEXT NOT NULL DEFAULT '{}',
                created_at INTEGER NOT NULL
            )",
            DEFAULT_TAG_COLOR
        ),
        (),
    )?;

    conn.execute(
        "CREATE TABLE IF NOT EXISTS item_tags (
            item_id INTEGER NOT NULL REFERENCES items(id) ON DELETE CASCADE,
            tag_id INTEGER NOT NULL REFERENCES tags(id) ON DELETE CASCADE,
            PRIMARY KEY (item_id, tag_id)
        )",
        (),
    )?;

    // Shop names are unique regardless of case
    conn.execute(
        "CREATE UNIQUE INDEX IF NOT EXISTS idx_tags_name ON tags(name COLLATE NOCASE)",
        (),
    )?;
    conn.execute("CREATE INDEX IF NOT EXISTS idx_items_list ON items(list)", ())?;
    conn.execute("CREATE INDEX IF NOT EXISTS idx_item_tags_tag ON item_tags(tag_id)", ())?;

    Ok(())
}
