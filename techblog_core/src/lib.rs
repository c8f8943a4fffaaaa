//! Library for adding posts to a TechBlog SQLite database.
//!
//! A post is described by a [`NewPost`]: title, excerpt, an ordered list of
//! content [`Section`]s, a category, topics and the email of an existing
//! author. [`ingest::add_post`] renders the sections into a complete HTML page
//! and stores the post, creating the category and topics on first use, in a
//! single transaction.
#![deny(missing_docs)]

use thiserror::Error as ThisError;

pub mod db;
pub mod ingest;
pub mod models;
pub mod render;
pub mod resolve;
pub mod slug;

pub use db::{connect, Connection, ConnectionMethods, ConnectionSpec, Transaction};
pub use ingest::{add_post, get_post, list_recent_posts};
pub use models::{NewCategory, NewPost, Post, PostRecord, PostSummary, Section};
pub use slug::slugify;

/// Result type that uses [`crate::Error`].
pub type Result<T> = std::result::Result<T, crate::Error>;

/// TechBlog errors.
#[allow(missing_docs)]
#[derive(Debug, ThisError)]
pub enum Error {
    #[error("Author with email {0} not found")]
    AuthorNotFound(String),
    #[error("Table \"{0}\" is not part of the blog schema")]
    UnknownTable(String),
    #[error("Internal logic error {0}")]
    Internal(String),
    #[error("Sqlite error {0}")]
    SQLite(#[from] rusqlite::Error),
    #[error("Chrono error {0}")]
    Chrono(#[from] chrono::ParseError),
    #[error("(De)serialization error {0}")]
    SerdeJson(#[from] serde_json::Error),
    #[error("IO error {0}")]
    IO(#[from] std::io::Error),
}
