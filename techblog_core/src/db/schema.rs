//! Blog schema.

use log::info;

use super::ConnectionMethods;
use crate::Result;

/// Tables of the blog schema, in creation order.
pub const TABLES: &[&str] = &["author", "category", "topic", "post", "post_topics"];

// Post slugs are not unique: two posts with the same title share a slug.
const SCHEMA_SQL: &str = r#"
CREATE TABLE IF NOT EXISTS author (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    email TEXT NOT NULL UNIQUE,
    name TEXT NOT NULL DEFAULT ''
);
CREATE TABLE IF NOT EXISTS category (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL,
    slug TEXT NOT NULL UNIQUE,
    description TEXT NOT NULL DEFAULT '',
    color TEXT NOT NULL DEFAULT '#0074d9'
);
CREATE TABLE IF NOT EXISTS topic (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL,
    slug TEXT NOT NULL UNIQUE
);
CREATE TABLE IF NOT EXISTS post (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    title TEXT NOT NULL,
    slug TEXT NOT NULL,
    excerpt TEXT NOT NULL,
    content TEXT NOT NULL,
    publish_date TEXT NOT NULL,
    read_time INTEGER NOT NULL,
    featured BOOLEAN NOT NULL DEFAULT 0,
    featured_image TEXT,
    category_id INTEGER NOT NULL REFERENCES category (id),
    author_id INTEGER NOT NULL REFERENCES author (id)
);
CREATE TABLE IF NOT EXISTS post_topics (
    post_id INTEGER NOT NULL REFERENCES post (id),
    topic_id INTEGER NOT NULL REFERENCES topic (id)
);
"#;

/// Create any missing table of the blog schema. Existing tables and their
/// rows are left untouched.
pub fn ensure_schema(conn: &impl ConnectionMethods) -> Result<()> {
    conn.execute(SCHEMA_SQL)?;
    info!("blog schema ready");
    Ok(())
}
