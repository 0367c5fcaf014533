use std::path::PathBuf;

use clap::Args;

use crate::catalog::store::BookCatalog;
use crate::cli::OutputFormat;
use crate::core::book::Book;
use crate::core::types::LoadOutcome;

#[derive(Args)]
pub struct FindArgs {
    /// Exact title to match, or an author substring with --author
    #[arg(required = true)]
    pub query: String,

    /// Match the query against author fields (substring) instead of
    /// titles (exact)
    #[arg(long)]
    pub author: bool,

    /// Path to the catalog file
    #[arg(long, default_value = "catalog.json")]
    pub catalog: PathBuf,
}

pub fn run(args: FindArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let mut catalog = BookCatalog::new();
    if catalog.load_from_file(&args.catalog)? == LoadOutcome::FileMissing {
        anyhow::bail!("Catalog file not found: {}", args.catalog.display());
    }

    if verbose {
        eprintln!("Scanning {} books", catalog.len());
    }

    let matches = if args.author {
        catalog.find_by_author(&args.query)
    } else {
        catalog.find_by_title(&args.query)
    };

    match format {
        OutputFormat::Text => print_text(&args.query, &matches),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&matches)?),
    }

    Ok(())
}

fn print_text(query: &str, matches: &[&Book]) {
    if matches.is_empty() {
        println!("No books matching \"{query}\"");
        return;
    }

    println!("{} match(es) for \"{query}\":", matches.len());
    for book in matches {
        println!(
            "  \"{}\" by {} [{}] ({})",
            book.title, book.author, book.genre, book.year
        );
    }
}
