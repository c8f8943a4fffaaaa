//! Adding posts and listing the most recent ones.

use chrono::Local;
use log::{error, info, warn};

use crate::db::{Connection, ConnectionMethods};
use crate::models::{NewCategory, NewPost, Post, PostRecord, PostSummary};
use crate::render::{estimate_read_time, render_document};
use crate::resolve::{get_or_create_category, get_or_create_topic};
use crate::slug::slugify;
use crate::{Error, Result};

/// Add `post` and return its id.
///
/// The author must already exist. The category and each topic are created
/// on first use. The post, any new category or topics, and the topic links
/// are written in one transaction: if any step fails nothing is kept and the
/// error is returned as is.
///
/// Post slugs are not checked for uniqueness; two posts with the same title
/// get the same slug.
pub fn add_post(conn: &mut Connection, post: &NewPost) -> Result<i64> {
    let trans = conn.transaction()?;
    match write_post(&trans, post) {
        Ok(post_id) => {
            trans.commit()?;
            info!("successfully added post: '{}' (ID: {})", post.title, post_id);
            info!("category: {}", post.category);
            info!("topics: {}", post.topics.join(", "));
            Ok(post_id)
        }
        Err(e) => {
            warn!("error adding post '{}', rolling back: {}", post.title, e);
            if let Err(rollback_err) = trans.rollback() {
                error!("rollback failed: {}", rollback_err);
            }
            Err(e)
        }
    }
}

fn write_post(conn: &impl ConnectionMethods, post: &NewPost) -> Result<i64> {
    let author_id = conn
        .author_id(&post.author_email)?
        .ok_or_else(|| Error::AuthorNotFound(post.author_email.clone()))?;
    let slug = slugify(&post.title);
    let category_id = get_or_create_category(conn, &NewCategory::new(&post.category))?;
    let content = render_document(&post.title, &post.primary_language, &post.sections);
    let read_time = post
        .read_time
        .unwrap_or_else(|| estimate_read_time(&post.sections));

    let post_id = conn.insert_post(&PostRecord {
        title: &post.title,
        slug: &slug,
        excerpt: &post.excerpt,
        content: &content,
        publish_date: Local::now().naive_local(),
        read_time,
        featured: post.featured,
        featured_image: post.featured_image.as_deref(),
        category_id,
        author_id,
    })?;

    for topic in &post.topics {
        let topic_id = get_or_create_topic(conn, topic)?;
        conn.insert_post_topic(post_id, topic_id)?;
    }
    Ok(post_id)
}

/// The `limit` most recently published posts, newest first, each with the
/// name of its category.
pub fn list_recent_posts(conn: &impl ConnectionMethods, limit: u32) -> Result<Vec<PostSummary>> {
    let posts = conn.recent_posts(limit)?;
    info!("recent posts ({})", posts.len());
    Ok(posts)
}

/// The stored post with this id and the names of its topics.
pub fn get_post(conn: &impl ConnectionMethods, id: i64) -> Result<Option<(Post, Vec<String>)>> {
    match conn.post(id)? {
        None => Ok(None),
        Some(post) => {
            let topics = conn.post_topics(id)?;
            Ok(Some((post, topics)))
        }
    }
}
