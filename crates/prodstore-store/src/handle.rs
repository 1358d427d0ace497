//! Database handle abstraction consumed by the repository
//!
//! The repository never sees a `Connection` directly, only this trait, so it
//! can be driven by a plain connection, a transaction (via deref) or a test
//! double. Parameters are always bound by name; statement text is static.

use rusqlite::{Connection, ToSql};

/// Named parameter list as accepted by `rusqlite::named_params!`
pub type NamedParams<'a> = &'a [(&'a str, &'a dyn ToSql)];

/// Parameterized statement execution against the product store
pub trait DatabaseHandle {
    /// Prepare `sql`, bind `params` by name and execute it
    ///
    /// Returns the number of rows the statement affected.
    fn execute_statement(&self, sql: &str, params: NamedParams<'_>) -> rusqlite::Result<usize>;

    /// Rowid assigned by the most recent successful INSERT on this handle
    fn last_insert_id(&self) -> i64;
}

impl DatabaseHandle for Connection {
    fn execute_statement(&self, sql: &str, params: NamedParams<'_>) -> rusqlite::Result<usize> {
        let mut stmt = self.prepare_cached(sql)?;
        stmt.execute(params)
    }

    fn last_insert_id(&self) -> i64 {
        self.last_insert_rowid()
    }
}

impl<H: DatabaseHandle + ?Sized> DatabaseHandle for &H {
    fn execute_statement(&self, sql: &str, params: NamedParams<'_>) -> rusqlite::Result<usize> {
        (**self).execute_statement(sql, params)
    }

    fn last_insert_id(&self) -> i64 {
        (**self).last_insert_id()
    }
}

impl<H: DatabaseHandle + ?Sized> DatabaseHandle for Box<H> {
    fn execute_statement(&self, sql: &str, params: NamedParams<'_>) -> rusqlite::Result<usize> {
        (**self).execute_statement(sql, params)
    }

    fn last_insert_id(&self) -> i64 {
        (**self).last_insert_id()
    }
}
