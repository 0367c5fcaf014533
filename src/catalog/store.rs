use std::fs;
use std::io;
use std::path::Path;

use thiserror::Error;

use crate::core::book::Book;
use crate::core::types::{LoadOutcome, RemoveOutcome};

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Failed to access catalog file: {0}")]
    Io(#[from] io::Error),

    #[error("Failed to parse catalog: {0}")]
    Parse(#[from] serde_json::Error),
}

/// The in-memory book catalog
///
/// One ordered sequence of records, insertion order preserved. There is
/// no deduplication and no identity beyond title-based matching; every
/// query and mutation is a linear scan over the sequence.
#[derive(Debug, Clone, Default)]
pub struct BookCatalog {
    /// All records, in insertion order
    pub books: Vec<Book>,
}

impl BookCatalog {
    /// Create an empty catalog
    pub fn new() -> Self {
        Self { books: Vec::new() }
    }

    /// Append a record to the end of the sequence.
    ///
    /// No validation is performed: empty fields and any year value are
    /// accepted, and duplicates are kept.
    pub fn add(&mut self, book: Book) {
        self.books.push(book);
    }

    /// Find every record whose title case-insensitively equals `title`,
    /// in original relative order.
    ///
    /// An empty query matches only records whose title is itself empty.
    #[must_use]
    pub fn find_by_title(&self, title: &str) -> Vec<&Book> {
        self.books
            .iter()
            .filter(|book| book.title_matches(title))
            .collect()
    }

    /// Find every record whose author case-insensitively contains
    /// `author` as a substring, in original relative order.
    ///
    /// An empty query matches every record.
    #[must_use]
    pub fn find_by_author(&self, author: &str) -> Vec<&Book> {
        self.books
            .iter()
            .filter(|book| book.author_contains(author))
            .collect()
    }

    /// Remove **every** record whose title case-insensitively equals
    /// `title`, preserving the relative order of the survivors.
    ///
    /// Reports [`RemoveOutcome::Removed`] iff the count strictly
    /// decreased; otherwise the sequence is unchanged.
    pub fn remove_by_title(&mut self, title: &str) -> RemoveOutcome {
        let original_count = self.books.len();
        self.books.retain(|book| !book.title_matches(title));

        if self.books.len() < original_count {
            RemoveOutcome::Removed
        } else {
            RemoveOutcome::NotFound
        }
    }

    /// Number of records in the catalog
    pub fn len(&self) -> usize {
        self.books.len()
    }

    /// Check if the catalog is empty
    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    /// Parse a catalog from a JSON array of record objects
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let books: Vec<Book> = serde_json::from_str(json)?;
        Ok(Self { books })
    }

    /// Export the full sequence as a JSON array
    pub fn to_json(&self) -> Result<String, CatalogError> {
        Ok(serde_json::to_string_pretty(&self.books)?)
    }

    /// Serialize the full sequence to `path`, overwriting the file in
    /// full.
    ///
    /// Truncate-and-write, not atomic: a crash mid-write can leave a
    /// corrupt file behind.
    pub fn save_to_file(&self, path: &Path) -> Result<(), CatalogError> {
        let json = self.to_json()?;
        fs::write(path, json)?;
        tracing::debug!("saved {} books to {}", self.books.len(), path.display());
        Ok(())
    }

    /// Read `path`, parse it as a JSON array of records, and replace the
    /// in-memory sequence wholesale.
    ///
    /// A missing file yields [`LoadOutcome::FileMissing`] and leaves the
    /// sequence untouched; that is the only locally-recovered condition.
    /// An unreadable file or malformed JSON is an error, never coerced
    /// into an empty catalog, and also leaves the sequence untouched.
    pub fn load_from_file(&mut self, path: &Path) -> Result<LoadOutcome, CatalogError> {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                return Ok(LoadOutcome::FileMissing);
            }
            Err(err) => return Err(err.into()),
        };

        let loaded = Self::from_json(&content)?;
        self.books = loaded.books;

        tracing::debug!("loaded {} books from {}", self.books.len(), path.display());
        Ok(LoadOutcome::Loaded)
    }
}
