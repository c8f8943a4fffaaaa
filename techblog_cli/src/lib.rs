#![doc(hidden)]
//! This library is not stable.
//!
//! It exists to make the `techblog` CLI testable. Backwards compatibility is
//! not a goal; the only stable interface is the CLI itself.
use std::fs::File;
use std::io::{BufReader, Write};
use std::path::{Path, PathBuf};

use anyhow::Context;
use log::{info, warn};
use techblog_core::db::{self, schema::TABLES, Connection, ConnectionSpec};
use techblog_core::{ConnectionMethods, NewPost};

pub mod cli;
pub mod scenarios;

pub use scenarios::{prompt, run_scenario, Scenario};

pub type Result<T> = std::result::Result<T, anyhow::Error>;

/// Author used when neither `--author` nor `TECHBLOG_AUTHOR` is given.
pub const DEFAULT_AUTHOR: &str = "admin@techblog.local";

/// Directory holding `connection.json`, relative to the working directory.
pub fn base_dir() -> Result<PathBuf> {
    std::env::current_dir()
        .map(|d| d.join(".techblog"))
        .map_err(|e| e.into())
}

/// Create the database at `conn_str` with the blog schema and remember it in
/// `dir`.
pub fn init(conn_str: &str, dir: &Path) -> Result<()> {
    let spec = ConnectionSpec::new(conn_str);
    let conn = open_store(&spec)?;
    conn.close()?;
    std::fs::create_dir_all(dir)?;
    spec.save(dir)?;
    info!("saved connection info to {}", dir.display());
    Ok(())
}

/// Where the database lives: `db` if given, then the spec saved in `dir` by
/// [`init`], then [`techblog_core::db::DEFAULT_CONN_STR`].
pub fn load_connspec(db: Option<&str>, dir: &Path) -> Result<ConnectionSpec> {
    if let Some(conn_str) = db {
        return Ok(ConnectionSpec::new(conn_str));
    }
    match ConnectionSpec::load(dir) {
        Ok(spec) => Ok(spec),
        Err(techblog_core::Error::IO(_)) => {
            warn!("no connection info in {}, using default", dir.display());
            Ok(ConnectionSpec::default())
        }
        Err(e) => Err(e.into()),
    }
}

/// Connect and make sure every table exists.
pub fn open_store(spec: &ConnectionSpec) -> Result<Connection> {
    let conn = db::connect(spec)
        .with_context(|| format!("could not open database {}", spec.conn_str))?;
    db::ensure_schema(&conn)?;
    Ok(conn)
}

/// Open the store, run `f` and close the store again. The connection is
/// dropped without an explicit close if `f` fails.
pub fn session<T>(
    spec: &ConnectionSpec,
    f: impl FnOnce(&mut Connection) -> Result<T>,
) -> Result<T> {
    let mut conn = open_store(spec)?;
    let value = f(&mut conn)?;
    conn.close()?;
    Ok(value)
}

/// Read a post description from a JSON file. Posts without an author are
/// attributed to `author`.
pub fn load_post(path: &Path, author: &str) -> Result<NewPost> {
    let file = File::open(path).with_context(|| format!("could not open {}", path.display()))?;
    let mut post: NewPost = serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("invalid post description in {}", path.display()))?;
    if post.author_email.is_empty() {
        post.author_email = author.to_string();
    }
    Ok(post)
}

/// Add the post described in `path` and return its id.
pub fn add_from_file(conn: &mut Connection, path: &Path, author: &str) -> Result<i64> {
    let post = load_post(path, author)?;
    Ok(techblog_core::add_post(conn, &post)?)
}

/// Print the `limit` most recent posts.
pub fn write_recent(conn: &impl ConnectionMethods, limit: u32, out: &mut impl Write) -> Result<()> {
    let posts = techblog_core::list_recent_posts(conn, limit)?;
    writeln!(out, "\nRecent Posts ({}):", posts.len())?;
    writeln!(out, "{}", "-".repeat(50))?;
    for post in posts {
        writeln!(out, "{post}")?;
    }
    Ok(())
}

/// Print one post. With `html` only the stored document is printed.
pub fn write_post(
    conn: &impl ConnectionMethods,
    id: i64,
    html: bool,
    out: &mut impl Write,
) -> Result<()> {
    let Some((post, topics)) = techblog_core::get_post(conn, id)? else {
        anyhow::bail!("no post with ID {id}");
    };
    if html {
        write!(out, "{}", post.content)?;
        return Ok(());
    }
    writeln!(out, "ID: {}", post.id)?;
    writeln!(out, "Title: {}", post.title)?;
    writeln!(out, "Slug: {}", post.slug)?;
    writeln!(out, "Excerpt: {}", post.excerpt)?;
    writeln!(out, "Published: {}", post.publish_date.format("%Y-%m-%d %H:%M:%S"))?;
    writeln!(out, "Read time: {} min", post.read_time)?;
    writeln!(out, "Featured: {}", post.featured)?;
    if let Some(image) = &post.featured_image {
        writeln!(out, "Image: {image}")?;
    }
    writeln!(out, "Topics: {}", topics.join(", "))?;
    Ok(())
}

/// Print the number of rows in each table.
pub fn write_stats(conn: &impl ConnectionMethods, out: &mut impl Write) -> Result<()> {
    for table in TABLES {
        writeln!(out, "{:<12} {}", table, conn.row_count(table)?)?;
    }
    Ok(())
}

pub fn handle_error(r: Result<()>) {
    if let Err(e) = r {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}
