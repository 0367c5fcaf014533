use std::path::PathBuf;

use clap::Args;

use crate::catalog::store::BookCatalog;
use crate::cli::OutputFormat;
use crate::core::book::Book;
use crate::core::types::LoadOutcome;

#[derive(Args)]
pub struct AddArgs {
    /// Book title (duplicates and the empty string are accepted)
    #[arg(required = true)]
    pub title: String,

    /// Author name
    #[arg(short, long, default_value = "")]
    pub author: String,

    /// Genre label
    #[arg(short, long, default_value = "")]
    pub genre: String,

    /// Publication year
    #[arg(short, long, default_value_t = 0)]
    pub year: i32,

    /// Path to the catalog file (created if missing)
    #[arg(long, default_value = "catalog.json")]
    pub catalog: PathBuf,
}

pub fn run(args: AddArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let mut catalog = BookCatalog::new();

    // A missing file is a fresh start for mutating commands
    let outcome = catalog.load_from_file(&args.catalog)?;
    if outcome == LoadOutcome::FileMissing && verbose {
        eprintln!(
            "Catalog file {} not found, starting empty",
            args.catalog.display()
        );
    }

    catalog.add(Book::new(&args.title, &args.author, &args.genre, args.year));
    catalog.save_to_file(&args.catalog)?;

    match format {
        OutputFormat::Text => {
            println!(
                "Added \"{}\" ({} books in catalog)",
                args.title,
                catalog.len()
            );
        }
        OutputFormat::Json => {
            let out = serde_json::json!({
                "status": "added",
                "title": args.title,
                "count": catalog.len(),
            });
            println!("{}", serde_json::to_string_pretty(&out)?);
        }
    }

    Ok(())
}
