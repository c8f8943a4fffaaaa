//! Types describing posts, categories and the content of a post.

use std::fmt;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Color given to categories created without an explicit one.
pub const DEFAULT_CATEGORY_COLOR: &str = "#0074d9";
/// Language used for syntax highlighting when none is given.
pub const DEFAULT_LANGUAGE: &str = "python";

fn default_heading_level() -> u8 {
    2
}

fn default_language() -> String {
    DEFAULT_LANGUAGE.to_string()
}

fn default_faq_question() -> String {
    "FAQ".to_string()
}

/// One unit of post content.
///
/// In JSON a section is an object keyed by `"type"`, for example
/// `{"type": "heading", "level": 2, "text": "Introduction"}`. Optional
/// fields fall back to the defaults documented on each variant.
#[allow(missing_docs)]
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Section {
    /// Opens a `<div class="section">` and writes a heading. `level` defaults to 2.
    Heading {
        #[serde(default = "default_heading_level")]
        level: u8,
        text: String,
    },
    /// A paragraph.
    Text { text: String },
    /// A highlighted code block with a copy button. `language` defaults to `python`.
    Code {
        #[serde(default = "default_language")]
        language: String,
        code: String,
    },
    /// An unordered list.
    List {
        #[serde(default)]
        items: Vec<String>,
    },
    /// A question and answer callout. Defaults are `FAQ` and an empty answer.
    Faq {
        #[serde(default = "default_faq_question")]
        question: String,
        #[serde(default)]
        answer: String,
    },
    /// Closes the container opened by the preceding heading.
    SectionEnd,
}

impl Section {
    /// A heading of the given level.
    pub fn heading(level: u8, text: impl Into<String>) -> Self {
        Section::Heading {
            level,
            text: text.into(),
        }
    }
    /// A paragraph.
    pub fn text(text: impl Into<String>) -> Self {
        Section::Text { text: text.into() }
    }
    /// A code block in `language`.
    pub fn code(language: impl Into<String>, code: impl Into<String>) -> Self {
        Section::Code {
            language: language.into(),
            code: code.into(),
        }
    }
    /// A bulleted list.
    pub fn list<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Section::List {
            items: items.into_iter().map(Into::into).collect(),
        }
    }
    /// A question and answer callout.
    pub fn faq(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Section::Faq {
            question: question.into(),
            answer: answer.into(),
        }
    }
}

/// A category to look up by slug, created with these attributes if absent.
#[allow(missing_docs)]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct NewCategory<'a> {
    pub name: &'a str,
    pub description: &'a str,
    pub color: &'a str,
}
impl<'a> NewCategory<'a> {
    /// A category with an empty description and the default color.
    pub fn new(name: &'a str) -> Self {
        NewCategory {
            name,
            description: "",
            color: DEFAULT_CATEGORY_COLOR,
        }
    }
    /// Set the description used if the category gets created.
    pub fn with_description(mut self, description: &'a str) -> Self {
        self.description = description;
        self
    }
    /// Set the color used if the category gets created.
    pub fn with_color(mut self, color: &'a str) -> Self {
        self.color = color;
        self
    }
}

/// Everything needed to add one post.
#[allow(missing_docs)]
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct NewPost {
    pub title: String,
    pub excerpt: String,
    #[serde(default, alias = "content_sections")]
    pub sections: Vec<Section>,
    #[serde(alias = "category_name")]
    pub category: String,
    #[serde(default)]
    pub topics: Vec<String>,
    /// Email of an author that already exists in the database.
    #[serde(default)]
    pub author_email: String,
    #[serde(default)]
    pub featured: bool,
    #[serde(default)]
    pub featured_image: Option<String>,
    /// Estimated minutes to read. Estimated from the sections when absent.
    #[serde(default)]
    pub read_time: Option<u32>,
    /// Prism language loaded by the page template.
    #[serde(default = "default_language")]
    pub primary_language: String,
}

impl NewPost {
    /// A post with no content, topics or featured image.
    pub fn new(
        title: impl Into<String>,
        excerpt: impl Into<String>,
        category: impl Into<String>,
        author_email: impl Into<String>,
    ) -> Self {
        NewPost {
            title: title.into(),
            excerpt: excerpt.into(),
            sections: Vec::new(),
            category: category.into(),
            topics: Vec::new(),
            author_email: author_email.into(),
            featured: false,
            featured_image: None,
            read_time: None,
            primary_language: default_language(),
        }
    }
    /// Content of the post, in order.
    pub fn with_sections(mut self, sections: Vec<Section>) -> Self {
        self.sections = sections;
        self
    }
    /// Topic names; each is created on first use.
    pub fn with_topics<I, S>(mut self, topics: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.topics = topics.into_iter().map(Into::into).collect();
        self
    }
    /// Mark the post as featured.
    pub fn with_featured(mut self, featured: bool) -> Self {
        self.featured = featured;
        self
    }
    /// Path of the image shown with the post.
    pub fn with_featured_image(mut self, path: impl Into<String>) -> Self {
        self.featured_image = Some(path.into());
        self
    }
    /// Override the estimated read time.
    pub fn with_read_time(mut self, minutes: u32) -> Self {
        self.read_time = Some(minutes);
        self
    }
    /// Language highlighted by the page template.
    pub fn with_primary_language(mut self, language: impl Into<String>) -> Self {
        self.primary_language = language.into();
        self
    }
}

/// A fully prepared row of the `post` table.
#[allow(missing_docs)]
#[derive(Clone, Debug)]
pub struct PostRecord<'a> {
    pub title: &'a str,
    pub slug: &'a str,
    pub excerpt: &'a str,
    pub content: &'a str,
    pub publish_date: NaiveDateTime,
    pub read_time: u32,
    pub featured: bool,
    pub featured_image: Option<&'a str>,
    pub category_id: i64,
    pub author_id: i64,
}

/// A stored row of the `post` table.
#[allow(missing_docs)]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Post {
    pub id: i64,
    pub title: String,
    pub slug: String,
    pub excerpt: String,
    /// The rendered HTML document.
    pub content: String,
    pub publish_date: NaiveDateTime,
    pub read_time: u32,
    pub featured: bool,
    pub featured_image: Option<String>,
    pub category_id: i64,
    pub author_id: i64,
}

/// A post as listed by [`crate::list_recent_posts`].
#[allow(missing_docs)]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PostSummary {
    pub id: i64,
    pub title: String,
    pub slug: String,
    pub category: String,
    pub publish_date: NaiveDateTime,
}

impl fmt::Display for PostSummary {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "ID: {} | {} | {} | {}",
            self.id,
            self.title,
            self.category,
            self.publish_date.format("%Y-%m-%d")
        )
    }
}
