use std::path::{Path, PathBuf};

use clap::Args;

use crate::catalog::store::BookCatalog;
use crate::cli::OutputFormat;
use crate::core::types::LoadOutcome;

#[derive(Args)]
pub struct ListArgs {
    /// Path to the catalog file
    #[arg(long, default_value = "catalog.json")]
    pub catalog: PathBuf,
}

#[derive(Args)]
pub struct CountArgs {
    /// Path to the catalog file
    #[arg(long, default_value = "catalog.json")]
    pub catalog: PathBuf,
}

pub fn run(args: ListArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let catalog = load(&args.catalog, verbose)?;

    match format {
        OutputFormat::Text => {
            if catalog.is_empty() {
                println!("Catalog is empty");
                return Ok(());
            }
            println!("Catalog: {} book(s)", catalog.len());
            for book in &catalog.books {
                println!(
                    "  \"{}\" by {} [{}] ({})",
                    book.title, book.author, book.genre, book.year
                );
            }
        }
        OutputFormat::Json => println!("{}", catalog.to_json()?),
    }

    Ok(())
}

pub fn run_count(args: CountArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let catalog = load(&args.catalog, verbose)?;

    match format {
        OutputFormat::Text => println!("{}", catalog.len()),
        OutputFormat::Json => {
            let out = serde_json::json!({ "count": catalog.len() });
            println!("{}", serde_json::to_string_pretty(&out)?);
        }
    }

    Ok(())
}

fn load(path: &Path, verbose: bool) -> anyhow::Result<BookCatalog> {
    let mut catalog = BookCatalog::new();
    if catalog.load_from_file(path)? == LoadOutcome::FileMissing {
        anyhow::bail!("Catalog file not found: {}", path.display());
    }

    if verbose {
        eprintln!("Read {} books from {}", catalog.len(), path.display());
    }

    Ok(catalog)
}
