//! Database connection management

use std::path::Path;

use rusqlite::Connection;

use crate::config::StoreConfig;
use crate::errors::{from_rusqlite, Result};
use crate::migrations::apply_migrations;

/// Open a SQLite database at the given path
pub fn open<P: AsRef<Path>>(path: P) -> Result<Connection> {
    Connection::open(path).map_err(from_rusqlite)
}

/// Open an in-memory SQLite database (for testing)
pub fn open_in_memory() -> Result<Connection> {
    Connection::open_in_memory().map_err(from_rusqlite)
}

/// Enable foreign keys and WAL journaling
///
/// In-memory databases ignore the WAL request and stay in `memory` mode.
pub fn configure(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        "PRAGMA foreign_keys = ON;
         PRAGMA journal_mode = WAL;",
    )
    .map_err(from_rusqlite)
}

/// Open, configure and bootstrap the database named by `config`
pub fn open_with_config(config: &StoreConfig) -> Result<Connection> {
    let mut conn = open(&config.database_path)?;
    configure(&conn)?;
    apply_migrations(&mut conn)?;
    Ok(conn)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_configure_enables_foreign_keys() {
        let conn = open_in_memory().unwrap();
        configure(&conn).unwrap();

        let fk: i64 = conn
            .query_row("PRAGMA foreign_keys", [], |row| row.get(0))
            .unwrap();
        assert_eq!(fk, 1);
    }
}
