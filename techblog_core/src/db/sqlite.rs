//! [`ConnectionMethods`] for SQLite.
use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime};
use log::debug;
use rusqlite::{params, OptionalExtension};

use super::schema::TABLES;
use super::ConnectionMethods;
use crate::models::{NewCategory, Post, PostRecord, PostSummary};
use crate::{Error, Result};

/// Format of `post.publish_date`, with microsecond precision.
pub const SQLITE_DT_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.6f";
// Rows written by other programs may use any of these.
const SQLITE_DT_PARSE_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M",
];

const RECENT_POSTS_SQL: &str = "SELECT p.id, p.title, p.slug, c.name, p.publish_date \
     FROM post p JOIN category c ON p.category_id = c.id \
     ORDER BY p.publish_date DESC, p.id DESC LIMIT ?1";

const POST_SQL: &str = "SELECT id, title, slug, excerpt, content, publish_date, read_time, \
     featured, featured_image, category_id, author_id FROM post WHERE id = ?1";

const POST_TOPICS_SQL: &str = "SELECT t.name FROM post_topics pt \
     JOIN topic t ON pt.topic_id = t.id WHERE pt.post_id = ?1 ORDER BY pt.rowid";

impl ConnectionMethods for rusqlite::Connection {
    fn execute(&self, sql: &str) -> Result<()> {
        debug!("execute sql {}", sql);
        self.execute_batch(sql)?;
        Ok(())
    }

    fn author_id(&self, email: &str) -> Result<Option<i64>> {
        lookup_id(self, "SELECT id FROM author WHERE email = ?1", email)
    }

    fn category_id(&self, slug: &str) -> Result<Option<i64>> {
        lookup_id(self, "SELECT id FROM category WHERE slug = ?1", slug)
    }

    fn insert_category(&self, category: &NewCategory<'_>, slug: &str) -> Result<i64> {
        let sql = "INSERT INTO category (name, slug, description, color) VALUES (?1, ?2, ?3, ?4)";
        debug!("insert sql {}", sql);
        self.execute(
            sql,
            params![category.name, slug, category.description, category.color],
        )?;
        Ok(self.last_insert_rowid())
    }

    fn topic_id(&self, slug: &str) -> Result<Option<i64>> {
        lookup_id(self, "SELECT id FROM topic WHERE slug = ?1", slug)
    }

    fn insert_topic(&self, name: &str, slug: &str) -> Result<i64> {
        let sql = "INSERT INTO topic (name, slug) VALUES (?1, ?2)";
        debug!("insert sql {}", sql);
        self.execute(sql, params![name, slug])?;
        Ok(self.last_insert_rowid())
    }

    fn insert_post(&self, post: &PostRecord<'_>) -> Result<i64> {
        let sql = "INSERT INTO post (title, slug, excerpt, content, publish_date, read_time, \
                   featured, featured_image, category_id, author_id) \
                   VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)";
        debug!("insert sql {}", sql);
        let publish_date = post.publish_date.format(SQLITE_DT_FORMAT).to_string();
        self.execute(
            sql,
            params![
                post.title,
                post.slug,
                post.excerpt,
                post.content,
                publish_date,
                post.read_time,
                post.featured,
                post.featured_image.unwrap_or(""),
                post.category_id,
                post.author_id,
            ],
        )?;
        Ok(self.last_insert_rowid())
    }

    fn insert_post_topic(&self, post_id: i64, topic_id: i64) -> Result<()> {
        let sql = "INSERT INTO post_topics (post_id, topic_id) VALUES (?1, ?2)";
        debug!("insert sql {} [{}, {}]", sql, post_id, topic_id);
        self.execute(sql, params![post_id, topic_id])?;
        Ok(())
    }

    fn recent_posts(&self, limit: u32) -> Result<Vec<PostSummary>> {
        debug!("query sql {}", RECENT_POSTS_SQL);
        let mut stmt = self.prepare(RECENT_POSTS_SQL)?;
        let rows = stmt.query_map([limit], |row| {
            Ok((
                row.get::<_, i64>(0)?,
                row.get::<_, String>(1)?,
                row.get::<_, String>(2)?,
                row.get::<_, String>(3)?,
                row.get::<_, String>(4)?,
            ))
        })?;
        let posts = rows
            .map(|row| -> Result<PostSummary> {
                let (id, title, slug, category, publish_date) = row?;
                Ok(PostSummary {
                    id,
                    title,
                    slug,
                    category,
                    publish_date: parse_publish_date(&publish_date)?,
                })
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(posts)
    }

    fn post(&self, id: i64) -> Result<Option<Post>> {
        debug!("query sql {} [{}]", POST_SQL, id);
        let row = self
            .query_row(POST_SQL, [id], |row| {
                Ok((
                    Post {
                        id: row.get(0)?,
                        title: row.get(1)?,
                        slug: row.get(2)?,
                        excerpt: row.get(3)?,
                        content: row.get(4)?,
                        publish_date: NaiveDateTime::default(),
                        read_time: row.get(6)?,
                        featured: row.get(7)?,
                        featured_image: row
                            .get::<_, Option<String>>(8)?
                            .filter(|image| !image.is_empty()),
                        category_id: row.get(9)?,
                        author_id: row.get(10)?,
                    },
                    row.get::<_, String>(5)?,
                ))
            })
            .optional()?;
        match row {
            None => Ok(None),
            Some((mut post, publish_date)) => {
                post.publish_date = parse_publish_date(&publish_date)?;
                Ok(Some(post))
            }
        }
    }

    fn post_topics(&self, post_id: i64) -> Result<Vec<String>> {
        debug!("query sql {} [{}]", POST_TOPICS_SQL, post_id);
        let mut stmt = self.prepare(POST_TOPICS_SQL)?;
        let names = stmt
            .query_map([post_id], |row| row.get(0))?
            .collect::<rusqlite::Result<Vec<String>>>()?;
        Ok(names)
    }

    fn row_count(&self, table: &str) -> Result<i64> {
        if !TABLES.contains(&table) {
            return Err(Error::UnknownTable(table.to_string()));
        }
        let count: i64 = self.query_row(&format!("SELECT COUNT(*) FROM {table}"), [], |row| {
            row.get(0)
        })?;
        Ok(count)
    }

    fn has_table(&self, table: &str) -> Result<bool> {
        let mut stmt =
            self.prepare("SELECT name FROM sqlite_master WHERE type='table' AND name=?;")?;
        let mut rows = stmt.query([table])?;
        Ok(rows.next()?.is_some())
    }
}

fn lookup_id(conn: &rusqlite::Connection, sql: &str, key: &str) -> Result<Option<i64>> {
    debug!("query sql {} [{}]", sql, key);
    Ok(conn.query_row(sql, [key], |row| row.get(0)).optional()?)
}

/// Parse a stored publish date. Dates without a time are taken as midnight,
/// RFC 3339 timestamps keep their wall-clock time.
fn parse_publish_date(text: &str) -> Result<NaiveDateTime> {
    for format in SQLITE_DT_PARSE_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(text, format) {
            return Ok(dt);
        }
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
        return Ok(dt.naive_local());
    }
    let date = NaiveDate::parse_from_str(text, "%Y-%m-%d")?;
    Ok(date.and_time(NaiveTime::MIN))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dt(text: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(text, "%Y-%m-%d %H:%M:%S%.f").unwrap()
    }

    #[test]
    fn own_format() {
        let written = dt("2024-03-05 14:07:09.123456");
        let stored = written.format(SQLITE_DT_FORMAT).to_string();
        assert_eq!(parse_publish_date(&stored).unwrap(), written);
    }

    #[test]
    fn foreign_formats() {
        assert_eq!(
            parse_publish_date("2024-01-01T10:00:00").unwrap(),
            dt("2024-01-01 10:00:00")
        );
        assert_eq!(
            parse_publish_date("2024-01-01 10:00").unwrap(),
            dt("2024-01-01 10:00:00")
        );
        assert_eq!(
            parse_publish_date("2024-01-01T10:00:00+02:00").unwrap(),
            dt("2024-01-01 10:00:00")
        );
        assert_eq!(
            parse_publish_date("2024-01-01").unwrap(),
            dt("2024-01-01 00:00:00")
        );
    }

    #[test]
    fn garbage_is_an_error() {
        assert!(matches!(
            parse_publish_date("yesterday"),
            Err(Error::Chrono(_))
        ));
    }
}
