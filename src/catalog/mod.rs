//! Book catalog storage and whole-collection persistence.
//!
//! The catalog holds one ordered, in-memory sequence of [`Book`] records.
//! Every query and mutation is a linear scan; persistence always operates
//! on the entire sequence, never a subset or incremental delta.
//!
//! ## Persisted format
//!
//! A JSON document whose top level is a single array; each element is an
//! object with exactly the fields `title`, `author`, `genre`, and `year`.
//! No version field, no envelope, no checksum.
//!
//! ## Example
//!
//! ```rust,no_run
//! use std::path::Path;
//! use libris::{Book, BookCatalog};
//!
//! let mut catalog = BookCatalog::new();
//! catalog.add(Book::new(
//!     "Cien años de soledad",
//!     "Gabriel García Márquez",
//!     "Novela",
//!     1967,
//! ));
//!
//! catalog.save_to_file(Path::new("catalog.json")).unwrap();
//!
//! let mut reloaded = BookCatalog::new();
//! reloaded.load_from_file(Path::new("catalog.json")).unwrap();
//! assert_eq!(reloaded.len(), 1);
//! ```
//!
//! [`Book`]: crate::core::book::Book

pub mod store;

pub use store::{BookCatalog, CatalogError};
