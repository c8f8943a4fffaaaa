/// Implements [`ConnectionMethods`][crate::db::ConnectionMethods] for a type
/// with a `wrapped_connection_methods` method returning the underlying
/// `rusqlite::Connection`.
macro_rules! connection_method_wrapper {
    ($ty:path) => {
        impl $crate::db::ConnectionMethods for $ty {
            fn execute(&self, sql: &str) -> $crate::Result<()> {
                $crate::db::ConnectionMethods::execute(self.wrapped_connection_methods()?, sql)
            }
            fn author_id(&self, email: &str) -> $crate::Result<Option<i64>> {
                $crate::db::ConnectionMethods::author_id(self.wrapped_connection_methods()?, email)
            }
            fn category_id(&self, slug: &str) -> $crate::Result<Option<i64>> {
                $crate::db::ConnectionMethods::category_id(self.wrapped_connection_methods()?, slug)
            }
            fn insert_category(
                &self,
                category: &$crate::models::NewCategory<'_>,
                slug: &str,
            ) -> $crate::Result<i64> {
                $crate::db::ConnectionMethods::insert_category(
                    self.wrapped_connection_methods()?,
                    category,
                    slug,
                )
            }
            fn topic_id(&self, slug: &str) -> $crate::Result<Option<i64>> {
                $crate::db::ConnectionMethods::topic_id(self.wrapped_connection_methods()?, slug)
            }
            fn insert_topic(&self, name: &str, slug: &str) -> $crate::Result<i64> {
                $crate::db::ConnectionMethods::insert_topic(
                    self.wrapped_connection_methods()?,
                    name,
                    slug,
                )
            }
            fn insert_post(&self, post: &$crate::models::PostRecord<'_>) -> $crate::Result<i64> {
                $crate::db::ConnectionMethods::insert_post(self.wrapped_connection_methods()?, post)
            }
            fn insert_post_topic(&self, post_id: i64, topic_id: i64) -> $crate::Result<()> {
                $crate::db::ConnectionMethods::insert_post_topic(
                    self.wrapped_connection_methods()?,
                    post_id,
                    topic_id,
                )
            }
            fn recent_posts(
                &self,
                limit: u32,
            ) -> $crate::Result<Vec<$crate::models::PostSummary>> {
                $crate::db::ConnectionMethods::recent_posts(self.wrapped_connection_methods()?, limit)
            }
            fn post(&self, id: i64) -> $crate::Result<Option<$crate::models::Post>> {
                $crate::db::ConnectionMethods::post(self.wrapped_connection_methods()?, id)
            }
            fn post_topics(&self, post_id: i64) -> $crate::Result<Vec<String>> {
                $crate::db::ConnectionMethods::post_topics(self.wrapped_connection_methods()?, post_id)
            }
            fn row_count(&self, table: &str) -> $crate::Result<i64> {
                $crate::db::ConnectionMethods::row_count(self.wrapped_connection_methods()?, table)
            }
            fn has_table(&self, table: &str) -> $crate::Result<bool> {
                $crate::db::ConnectionMethods::has_table(self.wrapped_connection_methods()?, table)
            }
        }
    };
}

pub(crate) use connection_method_wrapper;
