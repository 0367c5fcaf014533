//! Command-line interface for libris.
//!
//! This module implements the CLI using clap. Available commands:
//!
//! - **add**: Add a book to the catalog file
//! - **find**: Search by exact title, or by author substring with `--author`
//! - **remove**: Remove every book with a matching title
//! - **list**: List the whole catalog
//! - **count**: Print the number of books
//!
//! ## Usage
//!
//! ```text
//! # Add a book
//! libris add "Cien años de soledad" --author "Gabriel García Márquez" --genre Novela --year 1967
//!
//! # Exact-title search
//! libris find "cien años de soledad"
//!
//! # Author-substring search
//! libris find gabriel --author
//!
//! # JSON output for scripting
//! libris list --format json
//!
//! # A different catalog file
//! libris count --catalog shelf.json
//! ```

use clap::{Parser, Subcommand};

pub mod add;
pub mod find;
pub mod list;
pub mod remove;

#[derive(Parser)]
#[command(name = "libris")]
#[command(version)]
#[command(about = "Keep a small book catalog in a flat JSON file")]
#[command(
    long_about = "libris maintains a catalog of book records (title, author, genre, year) in a single JSON file.\n\nEvery command reads the whole file, applies one operation to the in-memory catalog, and, for mutations, writes the whole file back. Searches are linear scans: exact title match or author substring match, both case-insensitive."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format
    #[arg(short, long, global = true, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Add a book to the catalog
    Add(add::AddArgs),

    /// Search the catalog by title or author
    Find(find::FindArgs),

    /// Remove every book with a matching title
    Remove(remove::RemoveArgs),

    /// List all books in the catalog
    List(list::ListArgs),

    /// Print the number of books in the catalog
    Count(list::CountArgs),
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}
