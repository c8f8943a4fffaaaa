//! Types, traits, and methods for interacting with the blog database.
//!
//! The different ways of referring to a database handle:
//! * `ConnectionMethods` is a trait containing the queries available on a connection or a transaction.
//!   Category/topic resolution and post ingestion are written against it, so they run unchanged
//!   inside or outside a transaction.
//! * `Connection` is an open SQLite database. It can begin a transaction and must be closed
//!   (explicitly with [`Connection::close`] or by dropping it) at the end of a session.
//! * `Transaction` is a struct representing a database transaction. It implements `ConnectionMethods`.
//!   Dropping it without calling [`Transaction::commit`] rolls it back.

use std::borrow::Cow;
use std::fs;
use std::io::Write;
use std::ops::Deref;
use std::path::Path;

use log::info;
use serde::{Deserialize, Serialize};

use crate::{Error, Result};

mod connmethods;
mod macros;
pub mod schema;
mod sqlite;

use macros::connection_method_wrapper;

pub use connmethods::ConnectionMethods;
pub use schema::ensure_schema;
pub use sqlite::SQLITE_DT_FORMAT;

/// Database used when nothing else is configured.
pub const DEFAULT_CONN_STR: &str = "techblog.db";

/// Connection to a SQLite blog database.
#[derive(Debug)]
pub struct Connection {
    conn: rusqlite::Connection,
}
impl Connection {
    /// Open (creating if needed) the database at `conn_str`. `:memory:` opens
    /// a private in-memory database.
    pub fn open(conn_str: &str) -> Result<Self> {
        let conn = rusqlite::Connection::open(Path::new(conn_str))?;
        conn.execute_batch("PRAGMA foreign_keys = ON")?;
        info!("connected to database {}", conn_str);
        Ok(Connection { conn })
    }
    /// Begin a database transaction. The transaction must be used in place
    /// of this connection until it is committed or rolled back.
    pub fn transaction(&mut self) -> Result<Transaction<'_>> {
        let trans = self.conn.transaction()?;
        Ok(Transaction::new(trans))
    }
    /// Close the connection, reporting any error SQLite raises while doing so.
    pub fn close(self) -> Result<()> {
        self.conn.close().map_err(|(_, e)| Error::from(e))?;
        info!("database connection closed");
        Ok(())
    }
    // For use with connection_method_wrapper macro
    #[allow(clippy::unnecessary_wraps)]
    fn wrapped_connection_methods(&self) -> Result<&rusqlite::Connection> {
        Ok(&self.conn)
    }
}
connection_method_wrapper!(Connection);

/// Connection specification: where the SQLite database lives. See
/// [connect][crate::db::connect] to make a [Connection] from it.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct ConnectionSpec {
    /// Path of the database file, or `:memory:`.
    pub conn_str: String,
}
impl ConnectionSpec {
    /// Spec for the database at `conn_str`.
    pub fn new(conn_str: impl Into<String>) -> Self {
        ConnectionSpec {
            conn_str: conn_str.into(),
        }
    }
    /// Spec for a private in-memory database.
    pub fn in_memory() -> Self {
        ConnectionSpec::new(":memory:")
    }
    /// Save the connection spec to the filesystem for later use. If `path`
    /// is a directory the spec is written to `connection.json` inside it.
    pub fn save(&self, path: &Path) -> Result<()> {
        let path = conn_complete_if_dir(path);
        let mut f = fs::File::create(path)?;
        f.write_all(serde_json::to_string(self)?.as_bytes())
            .map_err(|e| e.into())
    }
    /// Load a previously saved connection spec
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = conn_complete_if_dir(path.as_ref());
        serde_json::from_reader(fs::File::open(path)?).map_err(|e| e.into())
    }
}
impl Default for ConnectionSpec {
    fn default() -> Self {
        ConnectionSpec::new(DEFAULT_CONN_STR)
    }
}

fn conn_complete_if_dir(path: &Path) -> Cow<'_, Path> {
    if path.is_dir() {
        Cow::from(path.join("connection.json"))
    } else {
        Cow::from(path)
    }
}

/// Connect to the database described by `spec`.
pub fn connect(spec: &ConnectionSpec) -> Result<Connection> {
    Connection::open(&spec.conn_str)
}

/// Database transaction.
///
/// Begin a transaction using [`Connection::transaction`].
#[derive(Debug)]
pub struct Transaction<'c> {
    trans: Option<rusqlite::Transaction<'c>>,
}
impl<'c> Transaction<'c> {
    fn new(trans: rusqlite::Transaction<'c>) -> Self {
        Transaction { trans: Some(trans) }
    }
    /// Commit the transaction
    pub fn commit(mut self) -> Result<()> {
        match self.trans.take() {
            None => Err(Self::already_consumed()),
            Some(trans) => Ok(trans.commit()?),
        }
    }
    /// Roll back the transaction. Equivalent to dropping it.
    pub fn rollback(mut self) -> Result<()> {
        match self.trans.take() {
            None => Err(Self::already_consumed()),
            Some(trans) => Ok(trans.rollback()?),
        }
    }
    fn get(&self) -> Result<&rusqlite::Transaction<'c>> {
        match &self.trans {
            None => Err(Self::already_consumed()),
            Some(trans) => Ok(trans),
        }
    }
    fn wrapped_connection_methods(&self) -> Result<&rusqlite::Connection> {
        Ok(self.get()?.deref())
    }
    fn already_consumed() -> Error {
        Error::Internal("transaction has already been consumed".to_string())
    }
}
connection_method_wrapper!(Transaction<'_>);
