use std::path::PathBuf;

use clap::{Parser, Subcommand};
use dexter::{AppError, CachePolicy, DexConfig, ListOptions, ShowOptions};

#[derive(Parser)]
#[command(name = "dexter")]
#[command(version)]
#[command(
    about = "Browse and filter the Pokémon catalogue",
    long_about = None
)]
struct Cli {
    /// Path to a dexter.toml config file
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Override the Pokémon API base URL
    #[arg(long, global = true)]
    api_url: Option<String>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch the catalogue and print entries matching a query
    #[clap(visible_alias = "ls")]
    List {
        /// Case-insensitive substring to filter names by
        #[arg(short, long)]
        query: Option<String>,
        /// Cache policy: no-store, force-cache, or revalidate=<secs>
        #[arg(long)]
        cache: Option<String>,
        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show the full detail record for one Pokémon
    #[clap(visible_alias = "s")]
    Show {
        /// Pokémon name as it appears in the catalogue
        name: String,
        /// Print the record as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = run(cli);

    if let Err(e) = result {
        match &e {
            AppError::NotFound(name) => {
                eprintln!("Pokémon not found");
                eprintln!("No Pokémon named '{}' exists in the catalogue.", name);
            }
            _ => eprintln!("Error: {}", e),
        }
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), AppError> {
    let mut config = DexConfig::load(cli.config.as_deref())?;
    if let Some(api_url) = cli.api_url {
        config.api.api_url = api_url;
    }

    match cli.command {
        Commands::List { query, cache, json } => {
            let cache = cache.as_deref().map(CachePolicy::parse).transpose()?;
            let report = dexter::list(&config, &ListOptions { query, cache })?;
            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                println!("{}", report.to_text());
            }
        }
        Commands::Show { name, json } => {
            let detail = dexter::show(&config, &ShowOptions { name })?;
            if json {
                println!("{}", serde_json::to_string_pretty(&detail)?);
            } else {
                println!("{}", dexter::commands::show::render_text(&detail));
            }
        }
    }

    Ok(())
}
