//! Test helpers to set up blog databases.
//!
//! Every helper returns a connection whose schema is in place and which
//! holds one author, [`AUTHOR_EMAIL`]. Authors are never created by
//! `techblog_core` itself, so tests seed them through raw SQL.
#![deny(missing_docs)]

use std::path::Path;

use tempfile::TempDir;

use techblog_core::db::{ensure_schema, schema::TABLES, Connection, ConnectionSpec};
use techblog_core::ConnectionMethods;

/// Email of the author present in every test database.
pub const AUTHOR_EMAIL: &str = "author@techblog.test";

fn common_setup() {
    env_logger::try_init().ok();
}

/// Insert an author row.
pub fn seed_author(conn: &impl ConnectionMethods, email: &str, name: &str) {
    conn.execute(&format!(
        "INSERT INTO author (email, name) VALUES ('{}', '{}')",
        email.replace('\'', "''"),
        name.replace('\'', "''")
    ))
    .expect("Could not seed author");
}

/// Create the schema and the default author on an open connection.
pub fn setup_db(conn: &Connection) {
    ensure_schema(conn).expect("Could not create blog schema");
    seed_author(conn, AUTHOR_EMAIL, "Test Author");
}

/// Create a sqlite in-memory [`Connection`] with schema and author.
pub fn sqlite_connection() -> Connection {
    common_setup();
    log::info!("connecting to sqlite memory database..");
    let conn = Connection::open(":memory:").expect("Could not open sqlite memory database");
    setup_db(&conn);
    conn
}

/// A file-backed database in a temporary directory. The directory (and the
/// database) is deleted when the returned [`TempDir`] is dropped.
pub fn sqlite_file_connection() -> (Connection, ConnectionSpec, TempDir) {
    common_setup();
    let dir = tempfile::tempdir().expect("Could not create temporary directory");
    let spec = file_spec(dir.path());
    log::info!("connecting to {}..", spec.conn_str);
    let conn = techblog_core::connect(&spec).expect("Could not open sqlite file database");
    setup_db(&conn);
    (conn, spec, dir)
}

fn file_spec(dir: &Path) -> ConnectionSpec {
    ConnectionSpec::new(dir.join("techblog.db").to_string_lossy())
}

/// Row counts of every table, in [`TABLES`] order.
pub fn row_counts(conn: &impl ConnectionMethods) -> Vec<(&'static str, i64)> {
    TABLES
        .iter()
        .map(|table| (*table, conn.row_count(table).expect("Could not count rows")))
        .collect()
}

/// Run a test function against a fresh in-memory database.
pub fn run_test(test: impl FnOnce(Connection)) {
    let conn = sqlite_connection();
    log::info!("running sqlite test");
    test(conn);
}
