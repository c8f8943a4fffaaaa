use crate::models::{NewCategory, Post, PostRecord, PostSummary};
use crate::Result;

/// Methods available on a database connection. Most users do not need to
/// call these methods directly and will instead use
/// [`add_post`][crate::add_post] and the resolvers in [`crate::resolve`].
/// This trait is implemented by both database connections and transactions.
pub trait ConnectionMethods {
    /// Run one or more SQL statements that return no rows.
    fn execute(&self, sql: &str) -> Result<()>;
    /// Id of the author with this email.
    fn author_id(&self, email: &str) -> Result<Option<i64>>;
    /// Id of the category with this slug.
    fn category_id(&self, slug: &str) -> Result<Option<i64>>;
    /// Insert a category under `slug` and return its id.
    fn insert_category(&self, category: &NewCategory<'_>, slug: &str) -> Result<i64>;
    /// Id of the topic with this slug.
    fn topic_id(&self, slug: &str) -> Result<Option<i64>>;
    /// Insert a topic and return its id.
    fn insert_topic(&self, name: &str, slug: &str) -> Result<i64>;
    /// Insert a post and return its id.
    fn insert_post(&self, post: &PostRecord<'_>) -> Result<i64>;
    /// Link a post to a topic.
    fn insert_post_topic(&self, post_id: i64, topic_id: i64) -> Result<()>;
    /// The `limit` most recently published posts, newest first.
    fn recent_posts(&self, limit: u32) -> Result<Vec<PostSummary>>;
    /// The post with this id.
    fn post(&self, id: i64) -> Result<Option<Post>>;
    /// Names of the topics linked to a post, in link order.
    fn post_topics(&self, post_id: i64) -> Result<Vec<String>>;
    /// Number of rows in one of the tables of the blog schema.
    fn row_count(&self, table: &str) -> Result<i64>;
    /// Whether `table` exists.
    fn has_table(&self, table: &str) -> Result<bool>;
}
