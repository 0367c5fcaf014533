use std::path::PathBuf;

use clap::Args;

use crate::catalog::store::BookCatalog;
use crate::cli::OutputFormat;
use crate::core::types::RemoveOutcome;

#[derive(Args)]
pub struct RemoveArgs {
    /// Title to remove; every case-insensitive match is deleted
    #[arg(required = true)]
    pub title: String,

    /// Path to the catalog file
    #[arg(long, default_value = "catalog.json")]
    pub catalog: PathBuf,
}

pub fn run(args: RemoveArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let mut catalog = BookCatalog::new();
    catalog.load_from_file(&args.catalog)?;

    let before = catalog.len();
    let outcome = catalog.remove_by_title(&args.title);

    // Only rewrite the file when something actually changed
    if outcome == RemoveOutcome::Removed {
        catalog.save_to_file(&args.catalog)?;
    }

    if verbose {
        eprintln!("{} of {} books removed", before - catalog.len(), before);
    }

    match format {
        OutputFormat::Text => println!("{outcome}"),
        OutputFormat::Json => {
            let out = serde_json::json!({
                "status": outcome,
                "title": args.title,
                "count": catalog.len(),
            });
            println!("{}", serde_json::to_string_pretty(&out)?);
        }
    }

    Ok(())
}
