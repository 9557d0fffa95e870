use rusqlite::{Connection, OptionalExtension, Result as SqlResult, params};
use std::path::Path;

pub const USER_ID_KEY: &str = "chat_user_id";
pub const USERNAME_KEY: &str = "chat_username";

/// Persistent key/value settings for this installation (identity, display name).
pub struct LocalStore {
    conn: Connection,
}

impl LocalStore {
    /// Open the store at `<data_dir>/client.db`
    pub fn open_in<P: AsRef<Path>>(data_dir: P) -> SqlResult<Self> {
        Self::with_path(data_dir.as_ref().join("client.db"))
    }

    /// Open the store at a custom path
    pub fn with_path<P: AsRef<Path>>(path: P) -> SqlResult<Self> {
        Self::from_connection(Connection::open(path)?)
    }

    #[cfg(test)]
    pub fn in_memory() -> SqlResult<Self> {
        Self::from_connection(Connection::open_in_memory()?)
    }

    fn from_connection(conn: Connection) -> SqlResult<Self> {
        let store = Self { conn };
        store.init_schema()?;
        Ok(store)
    }

    fn init_schema(&self) -> SqlResult<()> {
        self.conn.execute(
            "CREATE TABLE IF NOT EXISTS settings (
                key TEXT PRIMARY KEY,
                value TEXT NOT NULL,
                updated_at INTEGER NOT NULL DEFAULT (strftime('%s', 'now'))
            )",
            [],
        )?;
        Ok(())
    }

    pub fn get(&self, key: &str) -> SqlResult<Option<String>> {
        self.conn.query_row(
            "SELECT value FROM settings WHERE key = ?1",
            params![key],
            |row| row.get(0),
        )
        .optional()
    }

    /// Insert or replace a value
    pub fn set(&self, key: &str, value: &str) -> SqlResult<()> {
        self.conn.execute(
            "INSERT OR REPLACE INTO settings (key, value, updated_at)
             VALUES (?1, ?2, strftime('%s', 'now'))",
            params![key, value],
        )?;
        Ok(())
    }
}
