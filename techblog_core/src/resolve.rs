//! Get-or-create lookups for categories and topics.
//!
//! Both resolvers look a row up by the slug of its name and insert it when
//! absent. The lookup and the insert are separate statements: two writers
//! racing on the same new slug both see it missing, and the second insert
//! fails on the `UNIQUE` slug constraint. Only one writer is supported.

use log::info;

use crate::db::ConnectionMethods;
use crate::models::NewCategory;
use crate::slug::slugify;
use crate::Result;

/// Id of the category whose slug matches `category.name`, creating it if
/// needed. Description and color are only used on creation.
pub fn get_or_create_category(
    conn: &impl ConnectionMethods,
    category: &NewCategory<'_>,
) -> Result<i64> {
    let slug = slugify(category.name);
    if let Some(id) = conn.category_id(&slug)? {
        return Ok(id);
    }
    let id = conn.insert_category(category, &slug)?;
    info!("created new category: {} (ID: {})", category.name, id);
    Ok(id)
}

/// Id of the topic whose slug matches `name`, creating it if needed.
pub fn get_or_create_topic(conn: &impl ConnectionMethods, name: &str) -> Result<i64> {
    let slug = slugify(name);
    if let Some(id) = conn.topic_id(&slug)? {
        return Ok(id);
    }
    let id = conn.insert_topic(name, &slug)?;
    info!("created new topic: {} (ID: {})", name, id);
    Ok(id)
}
