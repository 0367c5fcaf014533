use clap::Parser;
use tracing_subscriber::EnvFilter;

mod catalog;
mod cli;
mod core;

fn main() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();

    // Initialize logging based on verbosity flag
    let filter = if cli.verbose {
        EnvFilter::new("libris=debug,info")
    } else {
        EnvFilter::new("libris=warn")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .init();

    match cli.command {
        cli::Commands::Add(args) => {
            cli::add::run(args, cli.format, cli.verbose)?;
        }
        cli::Commands::Find(args) => {
            cli::find::run(args, cli.format, cli.verbose)?;
        }
        cli::Commands::Remove(args) => {
            cli::remove::run(args, cli.format, cli.verbose)?;
        }
        cli::Commands::List(args) => {
            cli::list::run(args, cli.format, cli.verbose)?;
        }
        cli::Commands::Count(args) => {
            cli::list::run_count(args, cli.format, cli.verbose)?;
        }
    }

    Ok(())
}
