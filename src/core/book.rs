use serde::{Deserialize, Serialize};

/// A single book record in the catalog
///
/// Field declaration order fixes the JSON field order: title, author,
/// genre, year.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    /// Book title
    pub title: String,

    /// Author name
    pub author: String,

    /// Genre label
    pub genre: String,

    /// Publication year (any value accepted, including zero and negatives)
    pub year: i32,
}

impl Book {
    pub fn new(
        title: impl Into<String>,
        author: impl Into<String>,
        genre: impl Into<String>,
        year: i32,
    ) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            genre: genre.into(),
            year,
        }
    }

    /// Check whether this book's title equals `title`, ignoring case.
    ///
    /// Comparison uses locale-independent Unicode lowercasing. No
    /// whitespace or diacritic normalization is applied.
    #[must_use]
    pub fn title_matches(&self, title: &str) -> bool {
        self.title.to_lowercase() == title.to_lowercase()
    }

    /// Check whether `author` appears anywhere within this book's author
    /// field, ignoring case.
    ///
    /// The empty query is a substring of everything and matches every record.
    #[must_use]
    pub fn author_contains(&self, author: &str) -> bool {
        self.author.to_lowercase().contains(&author.to_lowercase())
    }
}
